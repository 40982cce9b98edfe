use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Week {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Week {
    pub fn from_number(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    pub fn number(self) -> u16 {
        self as u16
    }
}

/// A weekly recurring time-slot entry. Only `title`, the four optional
/// text fields, `week`, `from` and `to` travel on the wire; everything
/// else lives in memory and is reset to its default on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub at: Option<String>,
    pub instructor: Option<String>,
    pub location: Option<String>,
    pub week: u16,
    pub from: TimeOfDay,
    pub to: TimeOfDay,
    pub series: Option<String>,
    pub notifiable: bool,
    pub create_at: DateTime<Utc>,
    pub enabled: bool,
}

impl Schedule {
    pub fn new(title: impl Into<String>, week: u16, from: TimeOfDay, to: TimeOfDay) -> Self {
        Self::new_at(title, week, from, to, Utc::now())
    }

    /// Takes the creation timestamp explicitly, keeping construction
    /// deterministic for callers that need it.
    pub fn new_at(
        title: impl Into<String>,
        week: u16,
        from: TimeOfDay,
        to: TimeOfDay,
        create_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            at: None,
            instructor: None,
            location: None,
            week,
            from,
            to,
            series: None,
            notifiable: true,
            create_at,
            enabled: true,
        }
    }

    pub fn duration(&self) -> TimeOfDay {
        self.from.duration_until(self.to)
    }
}
