//! Rising-edge detection for the panel buttons.
//!
//! Buttons are sampled as raw levels once per control cycle. A press must
//! produce exactly one event no matter how long the button is held, so the
//! detector compares each sample against the previous cycle's sample and
//! reports only the not-pressed to pressed transition.

/// Raw button levels sampled in one control cycle. `true` = pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub yellow: bool,
    pub green: bool,
    pub red: bool,
}

/// Per-cycle rising-edge results.
///
/// Produced by [`EdgeDetector::update`], consumed within the same cycle and
/// discarded. `true` means the button went from not-pressed to pressed since
/// the previous cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdges {
    pub yellow: bool,
    pub green: bool,
    pub red: bool,
}

/// Detects rising edges by remembering one cycle of button levels.
///
/// Starts with all buttons remembered as not-pressed, so a button already
/// held on the first cycle registers as a press.
#[derive(Debug, Default)]
pub struct EdgeDetector {
    previous: ButtonLevels,
}

impl EdgeDetector {
    /// Creates a detector with no press history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `current` against the previous cycle and returns the edges.
    ///
    /// The stored levels are replaced by `current` unconditionally, every
    /// cycle, so a held button can never report two consecutive edges.
    /// Falling edges are not reported.
    pub fn update(&mut self, current: ButtonLevels) -> ButtonEdges {
        let edges = ButtonEdges {
            yellow: current.yellow && !self.previous.yellow,
            green: current.green && !self.previous.green,
            red: current.red && !self.previous.red,
        };

        self.previous = current;
        edges
    }
}
