use crate::utils::time::hms_to_decimal;
use std::fmt;

/// Stopwatch reading, kept as separate base-60 counters like a wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Advance by one second, carrying seconds into minutes and minutes into hours.
    pub fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes == 60 {
            self.minutes = 0;
            self.hours += 1;
        }
    }

    pub fn as_decimal_hours(&self) -> f64 {
        hms_to_decimal(self.hours, self.minutes, self.seconds)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
