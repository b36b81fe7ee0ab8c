//! Boot and shutdown sequence played when switching views
//!
//! Messages are revealed one per step over a matrix-rain backdrop. Once the
//! last message has been on screen for a full step the transition is done
//! and the app switches to the target view.

use rand::Rng;
use std::time::{Duration, Instant};

const BOOT_MESSAGES: [&str; 7] = [
    "> INITIALIZING HACKER MODE...",
    "> LOADING KERNEL MODULES...",
    "> ESTABLISHING SECURE CONNECTION...",
    "> DECRYPTING MAINFRAME...",
    "> BYPASSING FIREWALL...",
    "> ACCESS GRANTED",
    "> WELCOME TO THE MATRIX",
];

const SHUTDOWN_MESSAGES: [&str; 7] = [
    "> EXITING HACKER MODE...",
    "> CLOSING SECURE CHANNELS...",
    "> CLEARING COMMAND HISTORY...",
    "> RESTORING NORMAL VIEW...",
    "> DISCONNECTING FROM MATRIX...",
    "> EXIT SUCCESSFUL",
    "> RETURNING TO PROFESSIONAL MODE",
];

/// Number of rain columns, spread evenly across the screen width
pub const RAIN_COLUMNS: usize = 50;

/// Glyphs per rain column
pub const RAIN_LENGTH: usize = 30;

/// Which way the transition goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Professional view → terminal
    Entering,
    /// Terminal → professional view
    Exiting,
}

/// One falling column of glyphs
#[derive(Debug, Clone)]
pub struct RainColumn {
    /// Rows advanced per second
    pub speed: f32,
    /// Seconds before the column starts moving
    pub delay: f32,
    pub glyphs: Vec<char>,
}

impl RainColumn {
    fn random(rng: &mut impl Rng) -> Self {
        // Half-width katakana render one cell wide
        let glyphs = (0..RAIN_LENGTH)
            .map(|_| char::from_u32(0xFF66 + rng.gen_range(0..56)).unwrap_or('0'))
            .collect();
        RainColumn {
            speed: rng.gen_range(8.0..16.0),
            delay: rng.gen_range(0.0..2.0),
            glyphs,
        }
    }

    /// Row of the column head after `elapsed`, wrapping over `height` rows
    /// plus the trail length. `None` while still delayed.
    pub fn head(&self, elapsed: Duration, height: u16) -> Option<usize> {
        let t = elapsed.as_secs_f32() - self.delay;
        if t < 0.0 {
            return None;
        }
        let span = height as usize + self.glyphs.len();
        Some((t * self.speed) as usize % span.max(1))
    }
}

#[derive(Debug, Clone)]
pub struct Transition {
    direction: Direction,
    started: Instant,
    step: Duration,
    rain: Vec<RainColumn>,
}

impl Transition {
    pub fn new(direction: Direction, started: Instant, step: Duration) -> Self {
        let mut rng = rand::thread_rng();
        let rain = (0..RAIN_COLUMNS)
            .map(|_| RainColumn::random(&mut rng))
            .collect();
        Transition {
            direction,
            started,
            step,
            rain,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn messages(&self) -> &'static [&'static str] {
        match self.direction {
            Direction::Entering => &BOOT_MESSAGES,
            Direction::Exiting => &SHUTDOWN_MESSAGES,
        }
    }

    pub fn rain(&self) -> &[RainColumn] {
        &self.rain
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Messages visible at `now`; the first shows one step in
    pub fn revealed(&self, now: Instant) -> &'static [&'static str] {
        let messages = self.messages();
        let steps = self.steps_elapsed(now);
        &messages[..steps.min(messages.len())]
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.steps_elapsed(now) > self.messages().len()
    }

    fn steps_elapsed(&self, now: Instant) -> usize {
        if self.step.is_zero() {
            return usize::MAX;
        }
        (self.elapsed(now).as_millis() / self.step.as_millis()) as usize
    }
}
