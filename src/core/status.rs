use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::content::TipCategory;
use crate::core::store::CycleStore;
use crate::core::tips;
use crate::db::Storage;
use crate::models::config::Config;
use crate::models::{DayLog, PhaseType, PlanType};

#[derive(Debug, Serialize)]
pub struct StatusData {
    pub date: NaiveDate,
    pub name: String,
    pub onboarding_complete: bool,
    pub cycle: CycleStatus,
    pub plan: Option<PlanStatus>,
    pub today: Option<DayLog>,
    pub tip: Option<TipStatus>,
}

#[derive(Debug, Serialize)]
pub struct CycleStatus {
    pub last_period_start: Option<NaiveDate>,
    pub period_day: Option<i64>,
    pub phase: Option<PhaseType>,
    pub next_phase: Option<PhaseType>,
    pub days_until_next_phase: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PlanStatus {
    pub plan_type: PlanType,
    pub level: String,
    pub title: String,
    pub workouts: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct TipStatus {
    pub category: TipCategory,
    pub text: String,
}

/// Days left before the next phase starts. Luteal has no fixed end.
fn days_until_next(phase: PhaseType, day: i64) -> Option<i64> {
    phase.end_day().map(|end| end - day)
}

pub fn compute<S: Storage>(
    store: &CycleStore<S>,
    config: &Config,
    today: NaiveDate,
) -> Result<StatusData> {
    let state = store.state();
    let period_day = store.period_day(today);
    let phase = store.current_phase(today);

    let days_until_next_phase = match (phase, period_day) {
        (Some(p), Some(d)) => days_until_next(p, d),
        _ => None,
    };

    let plan = store.current_plan().map(|p| PlanStatus {
        plan_type: p.plan_type,
        level: p.level.to_string(),
        title: p.title.to_string(),
        workouts: store
            .current_workouts(today)
            .map(|ws| ws.iter().map(|w| w.title.to_string()).collect()),
    });

    let category: TipCategory = config.tips.category.parse()?;
    let tip = phase
        .and_then(|p| tips::tip_of_the_day(p, category, today))
        .map(|text| TipStatus {
            category,
            text: text.to_string(),
        });

    Ok(StatusData {
        date: today,
        name: state.name.clone(),
        onboarding_complete: state.onboarding_complete,
        cycle: CycleStatus {
            last_period_start: store.last_period_start_date(),
            period_day,
            phase,
            next_phase: phase.map(PhaseType::next),
            days_until_next_phase,
        },
        plan,
        today: store.day_log(today).cloned(),
        tip,
    })
}
