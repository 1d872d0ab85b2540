//! Hardware abstraction for the panel's inputs and outputs.

use crate::time::TimeDuration;
use crate::types::{Button, Led};

/// Trait for abstracting the panel hardware.
///
/// Implement this for your platform (GPIO, PWM/buzzer driver, etc.) to allow
/// the panel to drive it. All methods are infallible by contract: handle any
/// hardware errors internally - the control loop has no error path.
///
/// Inputs are raw instantaneous levels. Debouncing is done by the panel's
/// edge detection, so implementations should return the level as read.
pub trait PanelIo<D: TimeDuration> {
    /// Returns the raw level of a button, `true` while pressed.
    fn button_level(&mut self, button: Button) -> bool;

    /// Returns `true` while the door switch reads open.
    ///
    /// This is a level, not an edge: the panel samples it every cycle while
    /// armed.
    fn door_is_open(&mut self) -> bool;

    /// Drives a status LED.
    fn set_led(&mut self, led: Led, on: bool);

    /// Starts a bounded tone and returns immediately.
    ///
    /// The hardware stops the tone by itself after `duration`.
    fn play_tone(&mut self, frequency_hz: u32, duration: D);

    /// Starts a continuous tone, sounding until [`stop_tone`](Self::stop_tone).
    fn start_tone(&mut self, frequency_hz: u32);

    /// Stops any tone, bounded or continuous.
    fn stop_tone(&mut self);

    /// Blocks for `duration`.
    ///
    /// Used only by chime playback; the control loop itself never waits.
    fn delay(&mut self, duration: D);
}
