#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AlarmPanel`**: Runs the control loop; one `service()` call per cycle
//! - **`PanelConfig`**: Access code, entry window and feedback chimes
//! - **`AlarmState`**: The panel's operating state (`Idle`, `Armed`, `Triggered`, `Disarmed`)
//! - **`EdgeDetector`**: Turns raw button levels into one-cycle press events
//! - **`CodeBuffer`** / **`AccessCode`**: Shift register of recent key presses and the code it is matched against
//! - **`Countdown`**: Entry window measured against a monotonic clock
//! - **`Chime`**: Audible feedback pattern with a queryable blocking duration
//! - **`PanelIo`**: Trait to implement for your panel hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! The panel never talks to hardware directly: buttons, the door switch,
//! LEDs, the speaker and blocking waits all go through `PanelIo`, and time
//! is read through `TimeSource`. Implement both for your platform and the
//! control loop runs anywhere.

pub mod chime;
pub mod code;
pub mod countdown;
pub mod edge;
pub mod io;
pub mod panel;
pub mod time;
pub mod types;

pub use chime::{Chime, ChimeBuilder, ChimeStep};
pub use code::{AccessCode, CodeBuffer};
pub use countdown::Countdown;
pub use edge::{ButtonEdges, ButtonLevels, EdgeDetector};
pub use io::PanelIo;
pub use panel::{AlarmPanel, PanelConfig};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{AlarmState, Button, ChimeError, CodeKey, CountdownStatus, Led};

/// Frequency of every panel tone, the siren included.
pub const TONE_FREQUENCY_HZ: u32 = 1000;

/// Length of a single feedback beep in milliseconds.
pub const BEEP_MS: u64 = 200;

/// Gap preceding each confirmation chirp in milliseconds.
pub const CHIRP_GAP_MS: u64 = 220;

/// Entry window after the alarm triggers, in whole seconds.
pub const ENTRY_WINDOW_SECS: u64 = 30;

/// Number of key presses in a disarm code.
pub const CODE_LENGTH: usize = 3;
