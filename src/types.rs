//! Core types shared across the panel.

/// The operating state of the alarm panel.
///
/// Owned exclusively by [`AlarmPanel`](crate::panel::AlarmPanel); state
/// transitions are the only writes. The panel starts in `Idle` and has no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// Not armed. Waiting for the yellow button.
    Idle,
    /// Armed. Watching the door switch.
    Armed,
    /// Door opened while armed. Siren on, entry countdown running.
    Triggered,
    /// Correct code entered in time. Exit feedback plays, then back to `Idle`.
    Disarmed,
}

/// The three panel buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Control button, arms the panel from `Idle`.
    Yellow,
    /// Code key.
    Green,
    /// Code key.
    Red,
}

/// A key of the disarm code alphabet.
///
/// Only green and red participate in codes; yellow is a control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodeKey {
    Green,
    Red,
}

/// The three status LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// Lit after a successful disarm.
    Green,
    /// Lit while the entry countdown runs.
    Yellow,
    /// Lit after the countdown expires without the correct code.
    Red,
}

/// Whether an entry countdown is still within its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownStatus {
    /// Within the window (or not started).
    Running,
    /// The window has fully elapsed.
    Expired,
}

/// Chime validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChimeError {
    /// No steps provided.
    EmptyChime,

    /// A note step has a frequency of 0 Hz.
    ZeroFrequency,
}

impl core::fmt::Display for ChimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChimeError::EmptyChime => {
                write!(f, "chime must have at least one step")
            }
            ChimeError::ZeroFrequency => {
                write!(f, "note steps must have a non-zero frequency")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChimeError {}
