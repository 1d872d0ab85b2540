//! Shared test infrastructure for alarm-panel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use alarm_panel::{Button, Led, PanelIo, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    /// Advance time by whole seconds
    pub fn advance_secs(&self, secs: u64) {
        self.advance(TestDuration::from_secs(secs));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Panel Hardware
// ============================================================================

/// A single output operation performed by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvent {
    Led(Led, bool),
    /// A tone; `duration` is `None` for a continuous tone
    Tone {
        frequency_hz: u32,
        duration: Option<TestDuration>,
    },
    StopTone,
    Delay(TestDuration),
}

/// Mock panel hardware with settable input levels that records all output
/// operations in order
pub struct MockPanelIo {
    buttons: [bool; 3],
    door_open: bool,
    leds: [bool; 3],
    continuous_tone: Option<u32>,
    events: heapless::Vec<IoEvent, 64>,
}

impl MockPanelIo {
    pub fn new() -> Self {
        Self {
            buttons: [false; 3],
            door_open: false,
            leds: [false; 3],
            continuous_tone: None,
            events: heapless::Vec::new(),
        }
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.buttons[button_index(button)] = pressed;
    }

    pub fn set_door_open(&mut self, open: bool) {
        self.door_open = open;
    }

    /// Current level of a status LED
    pub fn led(&self, led: Led) -> bool {
        self.leds[led_index(led)]
    }

    /// Frequency of the currently sounding continuous tone, if any
    pub fn continuous_tone(&self) -> Option<u32> {
        self.continuous_tone
    }

    /// All output operations since the last [`clear_events`](Self::clear_events)
    pub fn events(&self) -> &[IoEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Total time spent in blocking delays
    pub fn blocked(&self) -> TestDuration {
        let millis = self
            .events
            .iter()
            .map(|event| match event {
                IoEvent::Delay(duration) => duration.0,
                _ => 0,
            })
            .sum();
        TestDuration(millis)
    }
}

fn button_index(button: Button) -> usize {
    match button {
        Button::Yellow => 0,
        Button::Green => 1,
        Button::Red => 2,
    }
}

fn led_index(led: Led) -> usize {
    match led {
        Led::Green => 0,
        Led::Yellow => 1,
        Led::Red => 2,
    }
}

impl PanelIo<TestDuration> for MockPanelIo {
    fn button_level(&mut self, button: Button) -> bool {
        self.buttons[button_index(button)]
    }

    fn door_is_open(&mut self) -> bool {
        self.door_open
    }

    fn set_led(&mut self, led: Led, on: bool) {
        self.leds[led_index(led)] = on;
        let _ = self.events.push(IoEvent::Led(led, on));
    }

    fn play_tone(&mut self, frequency_hz: u32, duration: TestDuration) {
        let _ = self.events.push(IoEvent::Tone {
            frequency_hz,
            duration: Some(duration),
        });
    }

    fn start_tone(&mut self, frequency_hz: u32) {
        self.continuous_tone = Some(frequency_hz);
        let _ = self.events.push(IoEvent::Tone {
            frequency_hz,
            duration: None,
        });
    }

    fn stop_tone(&mut self) {
        self.continuous_tone = None;
        let _ = self.events.push(IoEvent::StopTone);
    }

    fn delay(&mut self, duration: TestDuration) {
        let _ = self.events.push(IoEvent::Delay(duration));
    }
}
