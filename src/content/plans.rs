use crate::models::{PlanType, WorkoutPlan};

use super::{running, strength};

static PLANS: [WorkoutPlan; 6] = [
    running::BEGINNER,
    running::INTERMEDIATE,
    running::ADVANCED,
    strength::BEGINNER,
    strength::INTERMEDIATE,
    strength::ADVANCED,
];

const RUNNING_LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];
const STRENGTH_LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];

/// Look up the plan for a type and level key. Level keys are exact.
pub fn plan(plan_type: PlanType, level: &str) -> Option<&'static WorkoutPlan> {
    PLANS
        .iter()
        .find(|p| p.plan_type == plan_type && p.level == level)
}

/// Level keys available for a plan type, easiest first.
pub fn levels(plan_type: PlanType) -> &'static [&'static str] {
    match plan_type {
        PlanType::Running => RUNNING_LEVELS,
        PlanType::Strength => STRENGTH_LEVELS,
    }
}

pub fn all() -> &'static [WorkoutPlan] {
    &PLANS
}
