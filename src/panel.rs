//! Alarm panel controller with state management and cycle-based servicing.
//!
//! Provides [`AlarmPanel`] which runs the alarm control loop over a set of
//! panel hardware, handling edge detection, state transitions, the entry
//! countdown and code matching. The hardware is reached through the
//! [`PanelIo`] trait.

use crate::chime::Chime;
use crate::code::{AccessCode, CodeBuffer};
use crate::countdown::Countdown;
use crate::edge::{ButtonEdges, ButtonLevels, EdgeDetector};
use crate::io::PanelIo;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{AlarmState, Button, ChimeError, CodeKey, CountdownStatus, Led};
use crate::{ENTRY_WINDOW_SECS, TONE_FREQUENCY_HZ};

/// Static configuration of an alarm panel.
///
/// # Type Parameters
/// * `D` - The duration type
/// * `N` - Maximum number of steps in the feedback chimes
#[derive(Debug, Clone)]
pub struct PanelConfig<D: TimeDuration, const N: usize> {
    /// The disarm code.
    pub access_code: AccessCode,

    /// How long the correct code may take after the alarm triggers.
    pub entry_window: D,

    /// Feedback played when the panel arms.
    pub arm_chime: Chime<D, N>,

    /// Confirmation played after a successful disarm. Playback blocks the
    /// control loop for its [`blocking_duration`](Chime::blocking_duration).
    pub disarm_chime: Chime<D, N>,
}

impl<D: TimeDuration, const N: usize> PanelConfig<D, N> {
    /// The stock panel configuration: code green-green-red, a 30 second
    /// entry window and the stock chimes.
    ///
    /// # Panics
    /// Panics if `N` is less than 4 (the confirmation chime has 4 steps).
    pub fn standard() -> Result<Self, ChimeError> {
        Ok(Self {
            access_code: AccessCode::DEFAULT,
            entry_window: D::from_secs(ENTRY_WINDOW_SECS),
            arm_chime: Chime::arming()?,
            disarm_chime: Chime::confirmation()?,
        })
    }
}

/// Runs the alarm control loop over a set of panel hardware.
///
/// The panel owns its I/O and executes one control cycle per
/// [`service`](Self::service) call: sample inputs, detect button edges, step
/// the state machine, drive LEDs and the speaker. Call it repeatedly from
/// your main loop at the platform's natural tick rate; no inter-cycle delay
/// is required.
///
/// All mutable state (the alarm state, press history, code buffer and
/// countdown reference) lives inside the panel, so no globals or locking are
/// needed.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `IO` - Panel hardware implementation type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of steps in the feedback chimes
pub struct AlarmPanel<'t, I: TimeInstant, IO: PanelIo<I::Duration>, T: TimeSource<I>, const N: usize>
{
    io: IO,
    time_source: &'t T,
    state: AlarmState,
    edges: EdgeDetector,
    code_buffer: CodeBuffer,
    countdown: Countdown<I>,
    access_code: AccessCode,
    arm_chime: Chime<I::Duration, N>,
    disarm_chime: Chime<I::Duration, N>,
}

impl<'t, I: TimeInstant, IO: PanelIo<I::Duration>, T: TimeSource<I>, const N: usize>
    AlarmPanel<'t, I, IO, T, N>
{
    /// Creates an idle panel with all LEDs off and the speaker silent.
    pub fn new(mut io: IO, time_source: &'t T, config: PanelConfig<I::Duration, N>) -> Self {
        io.set_led(Led::Green, false);
        io.set_led(Led::Yellow, false);
        io.set_led(Led::Red, false);
        io.stop_tone();

        Self {
            io,
            time_source,
            state: AlarmState::Idle,
            edges: EdgeDetector::new(),
            code_buffer: CodeBuffer::new(),
            countdown: Countdown::new(config.entry_window),
            access_code: config.access_code,
            arm_chime: config.arm_chime,
            disarm_chime: config.disarm_chime,
        }
    }

    /// Executes one control cycle and returns the resulting state.
    ///
    /// The state checks run in fixed priority order as a sequence of
    /// independent guards, so a transition made early in the cycle is acted
    /// on by the later guards within the same pass. In particular a code
    /// match is followed immediately by the disarm feedback, which blocks
    /// for the disarm chime's [`blocking_duration`](Chime::blocking_duration)
    /// before the cycle returns.
    ///
    /// Button edges are recomputed every cycle regardless of state, keeping
    /// the one-cycle press memory current.
    pub fn service(&mut self) -> AlarmState {
        let edges = self.sample_buttons();
        let door_open = self.io.door_is_open();

        // Idle -> Armed on a yellow press.
        if self.state == AlarmState::Idle && edges.yellow {
            self.io.set_led(Led::Red, false);
            self.io.set_led(Led::Green, false);
            self.arm_chime.play(&mut self.io);
            self.state = AlarmState::Armed;
        }

        // Armed -> Triggered the moment the door reads open. The door is a
        // level, not an edge: closing it again later does not abort.
        if self.state == AlarmState::Armed && door_open {
            self.countdown.start(self.time_source.now());
            self.io.set_led(Led::Yellow, true);
            self.io.start_tone(TONE_FREQUENCY_HZ);
            self.state = AlarmState::Triggered;
        }

        // Triggered: code entry while the window runs, sound-out once it
        // expires. The code match pre-empts expiry - expiry is not consulted
        // again in a cycle that matched.
        if self.state == AlarmState::Triggered {
            match self.countdown.status(self.time_source.now()) {
                CountdownStatus::Running => self.enter_code(edges),
                CountdownStatus::Expired => {
                    self.io.set_led(Led::Yellow, false);
                    self.io.set_led(Led::Red, true);
                    self.io.stop_tone();
                    self.code_buffer.reset();
                    self.state = AlarmState::Idle;
                }
            }
        }

        // Disarmed: runs in the same pass the code matched. Blocks for the
        // disarm chime before returning to Idle.
        if self.state == AlarmState::Disarmed {
            self.io.set_led(Led::Green, true);
            self.io.set_led(Led::Yellow, false);
            self.io.stop_tone();
            self.disarm_chime.play(&mut self.io);
            self.state = AlarmState::Idle;
        }

        self.state
    }

    /// Samples the raw button levels and converts them to edge events.
    fn sample_buttons(&mut self) -> ButtonEdges {
        let levels = ButtonLevels {
            yellow: self.io.button_level(Button::Yellow),
            green: self.io.button_level(Button::Green),
            red: self.io.button_level(Button::Red),
        };
        self.edges.update(levels)
    }

    /// Feeds this cycle's code-key edges to the buffer and checks the code.
    fn enter_code(&mut self, edges: ButtonEdges) {
        if edges.green {
            self.code_buffer.push(CodeKey::Green);
        }
        if edges.red {
            self.code_buffer.push(CodeKey::Red);
        }

        if self.code_buffer.matches(&self.access_code) {
            self.code_buffer.reset();
            self.state = AlarmState::Disarmed;
        }
    }

    /// Returns the current state of the panel.
    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Returns true if the panel is armed.
    pub fn is_armed(&self) -> bool {
        self.state == AlarmState::Armed
    }

    /// Returns true if the alarm has triggered and the entry window is open.
    pub fn is_triggered(&self) -> bool {
        self.state == AlarmState::Triggered
    }

    /// Returns the time left to enter the code, while triggered.
    pub fn entry_time_remaining(&self) -> Option<I::Duration> {
        if self.state == AlarmState::Triggered {
            Some(self.countdown.remaining(self.time_source.now()))
        } else {
            None
        }
    }

    /// Returns a reference to the panel hardware.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Returns a mutable reference to the panel hardware.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Consumes the panel and releases the hardware.
    pub fn release(self) -> IO {
        self.io
    }
}
