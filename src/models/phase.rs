use serde::{Deserialize, Serialize};
use std::fmt;

/// Last day index (exclusive) of each phase, counted from the period start.
pub const MENSTRUAL_END: i64 = 5;
pub const FOLLICULAR_END: i64 = 14;
pub const OVULATION_END: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseType {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

impl PhaseType {
    pub const ALL: [PhaseType; 4] = [
        Self::Menstrual,
        Self::Follicular,
        Self::Ovulation,
        Self::Luteal,
    ];

    /// Map days since the last period start to a phase.
    ///
    /// Negative values (reference date before the start) fall into
    /// `Menstrual` through the `< 5` branch.
    pub fn from_period_day(day: i64) -> Self {
        match day {
            d if d < MENSTRUAL_END => Self::Menstrual,
            d if d < FOLLICULAR_END => Self::Follicular,
            d if d < OVULATION_END => Self::Ovulation,
            _ => Self::Luteal,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Menstrual => Self::Follicular,
            Self::Follicular => Self::Ovulation,
            Self::Ovulation => Self::Luteal,
            Self::Luteal => Self::Menstrual,
        }
    }

    /// First period day of the following phase, if the cycle table has one.
    /// Luteal is open-ended, so it has no scheduled successor day.
    pub fn end_day(self) -> Option<i64> {
        match self {
            Self::Menstrual => Some(MENSTRUAL_END),
            Self::Follicular => Some(FOLLICULAR_END),
            Self::Ovulation => Some(OVULATION_END),
            Self::Luteal => None,
        }
    }
}

impl fmt::Display for PhaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menstrual => write!(f, "menstrual"),
            Self::Follicular => write!(f, "follicular"),
            Self::Ovulation => write!(f, "ovulation"),
            Self::Luteal => write!(f, "luteal"),
        }
    }
}
