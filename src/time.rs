use serde::{Deserialize, Serialize};

/// Clock time as an hour/minute pair. The wire representation is the
/// second-of-day count, so sub-minute precision does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: i32,
    pub minute: i32,
}

impl TimeOfDay {
    pub fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }

    pub fn total_seconds(&self) -> i32 {
        self.hour * 3600 + self.minute * 60
    }

    pub fn to_le_bytes(&self) -> [u8; 4] {
        self.total_seconds().to_le_bytes()
    }

    /// Floor division, so negative second counts decompose consistently:
    /// -1800 becomes hour -1, minute 30, and total_seconds() gives -1800 back.
    pub fn from_seconds(value: i32) -> Self {
        Self {
            hour: value.div_euclid(3600),
            minute: value.rem_euclid(3600) / 60,
        }
    }

    /// Elapsed time from `self` to `other`; negative when `other` is earlier.
    pub fn duration_until(&self, other: TimeOfDay) -> TimeOfDay {
        TimeOfDay::from_seconds(other.total_seconds() - self.total_seconds())
    }
}
