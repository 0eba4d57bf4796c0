pub mod config;
pub mod day_log;
pub mod phase;
pub mod profile;
pub mod workout;

pub use day_log::{DayLog, FlowLevel, MoodTag, PeriodEntry, SymptomTag};
pub use phase::PhaseType;
pub use profile::{PlanType, ProfileState};
pub use workout::{Exercise, PhaseWorkouts, Workout, WorkoutPlan};
