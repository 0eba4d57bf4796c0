use serde::Serialize;

use super::phase::PhaseType;
use super::profile::PlanType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workout {
    pub title: &'static str,
    pub exercises: &'static [Exercise],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseWorkouts {
    pub menstrual: &'static [Workout],
    pub follicular: &'static [Workout],
    pub ovulation: &'static [Workout],
    pub luteal: &'static [Workout],
}

impl PhaseWorkouts {
    pub fn for_phase(&self, phase: PhaseType) -> &'static [Workout] {
        match phase {
            PhaseType::Menstrual => self.menstrual,
            PhaseType::Follicular => self.follicular,
            PhaseType::Ovulation => self.ovulation,
            PhaseType::Luteal => self.luteal,
        }
    }
}

/// One level of a plan type: shared mobility/stretch sections around
/// phase-specific main workouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutPlan {
    pub plan_type: PlanType,
    pub level: &'static str,
    pub title: &'static str,
    pub mobility: Workout,
    pub stretch: Workout,
    pub phases: PhaseWorkouts,
}

impl WorkoutPlan {
    pub fn workouts_for(&self, phase: PhaseType) -> &'static [Workout] {
        self.phases.for_phase(phase)
    }
}
