//! Audible feedback patterns.
//!
//! The panel's feedback tones (the short beep on arming, the double chirp on
//! disarming) are modeled as data - a [`Chime`] is a short sequence of rests
//! and notes - rather than scattering delays through the state machine. This
//! keeps the transition logic free of timing calls and makes the blocking
//! window of each pattern a queryable property.

use crate::io::PanelIo;
use crate::time::TimeDuration;
use crate::types::ChimeError;
use crate::{CHIRP_GAP_MS, BEEP_MS, TONE_FREQUENCY_HZ};
use heapless::Vec;

/// A single step in a chime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChimeStep<D: TimeDuration> {
    /// Blocking silence.
    Rest(D),

    /// A bounded tone. Playback does not wait for it to finish; space
    /// consecutive notes with a `Rest`.
    Note {
        /// Tone frequency.
        frequency_hz: u32,
        /// Length the hardware sustains the tone.
        duration: D,
    },
}

/// A validated sequence of rests and notes.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
/// * `N` - Maximum number of steps this chime can hold
#[derive(Debug, Clone)]
pub struct Chime<D: TimeDuration, const N: usize> {
    steps: Vec<ChimeStep<D>, N>,
}

impl<D: TimeDuration, const N: usize> Chime<D, N> {
    /// Creates a new chime builder.
    pub fn builder() -> ChimeBuilder<D, N> {
        ChimeBuilder::new()
    }

    /// The stock arming feedback: one short beep.
    ///
    /// # Panics
    /// Panics if `N` is 0.
    pub fn arming() -> Result<Self, ChimeError> {
        Self::builder()
            .note(TONE_FREQUENCY_HZ, D::from_millis(BEEP_MS))
            .build()
    }

    /// The stock disarm confirmation: two short chirps, each preceded by a
    /// rest that also spaces it from the previous note.
    ///
    /// # Panics
    /// Panics if `N` is less than 4.
    pub fn confirmation() -> Result<Self, ChimeError> {
        Self::builder()
            .rest(D::from_millis(CHIRP_GAP_MS))
            .note(TONE_FREQUENCY_HZ, D::from_millis(BEEP_MS))
            .rest(D::from_millis(CHIRP_GAP_MS))
            .note(TONE_FREQUENCY_HZ, D::from_millis(BEEP_MS))
            .build()
    }

    /// Plays the chime, blocking for the rest steps.
    ///
    /// Rests call [`PanelIo::delay`]; notes call [`PanelIo::play_tone`] and
    /// return immediately, the hardware bounding the tone. Total blocking
    /// time is [`blocking_duration`](Self::blocking_duration).
    pub fn play<IO: PanelIo<D>>(&self, io: &mut IO) {
        for step in &self.steps {
            match *step {
                ChimeStep::Rest(duration) => io.delay(duration),
                ChimeStep::Note {
                    frequency_hz,
                    duration,
                } => io.play_tone(frequency_hz, duration),
            }
        }
    }

    /// Returns the total time [`play`](Self::play) spends blocked.
    ///
    /// This is the sum of the rest durations; notes do not block. It is also
    /// the window during which a control loop playing this chime is
    /// unresponsive to inputs.
    pub fn blocking_duration(&self) -> D {
        let millis: u64 = self
            .steps
            .iter()
            .map(|step| match step {
                ChimeStep::Rest(duration) => duration.as_millis(),
                ChimeStep::Note { .. } => 0,
            })
            .sum();
        D::from_millis(millis)
    }

    /// Returns the number of steps in this chime.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns a reference to the step at the given index.
    pub fn get_step(&self, index: usize) -> Option<&ChimeStep<D>> {
        self.steps.get(index)
    }
}

/// Builder for constructing validated chimes.
#[derive(Debug)]
pub struct ChimeBuilder<D: TimeDuration, const N: usize> {
    steps: Vec<ChimeStep<D>, N>,
}

impl<D: TimeDuration, const N: usize> ChimeBuilder<D, N> {
    /// Creates a new empty chime builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Adds a blocking silence.
    ///
    /// # Panics
    /// Panics if the chime capacity is exceeded.
    pub fn rest(mut self, duration: D) -> Self {
        if self.steps.push(ChimeStep::Rest(duration)).is_err() {
            panic!("chime capacity exceeded");
        }
        self
    }

    /// Adds a bounded tone.
    ///
    /// # Panics
    /// Panics if the chime capacity is exceeded.
    pub fn note(mut self, frequency_hz: u32, duration: D) -> Self {
        let step = ChimeStep::Note {
            frequency_hz,
            duration,
        };
        if self.steps.push(step).is_err() {
            panic!("chime capacity exceeded");
        }
        self
    }

    /// Builds and validates the chime.
    ///
    /// # Errors
    /// * `EmptyChime` - No steps were added
    /// * `ZeroFrequency` - A note has a frequency of 0 Hz
    pub fn build(self) -> Result<Chime<D, N>, ChimeError> {
        if self.steps.is_empty() {
            return Err(ChimeError::EmptyChime);
        }

        for step in &self.steps {
            if let ChimeStep::Note { frequency_hz: 0, .. } = step {
                return Err(ChimeError::ZeroFrequency);
            }
        }

        Ok(Chime { steps: self.steps })
    }
}

impl<D: TimeDuration, const N: usize> Default for ChimeBuilder<D, N> {
    fn default() -> Self {
        Self::new()
    }
}
