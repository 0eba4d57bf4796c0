use std::collections::BTreeSet;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::content;
use crate::core::phase::{self, Episode};
use crate::db::Storage;
use crate::models::{
    DayLog, FlowLevel, MoodTag, PeriodEntry, PhaseType, PlanType, ProfileState, SymptomTag,
    Workout, WorkoutPlan,
};

/// Owns the profile state and writes it through to `S` after every change.
///
/// Mutations update memory first; the returned error only reports a failed
/// durable write, and reads keep seeing the new in-memory value either way.
pub struct CycleStore<S: Storage> {
    state: ProfileState,
    storage: S,
}

impl<S: Storage> CycleStore<S> {
    /// Rehydrate from `storage`, starting empty if nothing was saved yet.
    pub fn open(storage: S) -> Result<Self> {
        let state = storage.load()?.unwrap_or_default();
        debug!(days = state.days.len(), "store rehydrated");
        Ok(Self { state, storage })
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.state)
    }

    // -- logging --------------------------------------------------------------

    /// Record period flow and symptoms for `date`, replacing any earlier
    /// period entry for that day. Mood is left alone.
    pub fn log_period(
        &mut self,
        date: NaiveDate,
        flow: FlowLevel,
        symptoms: BTreeSet<SymptomTag>,
    ) -> Result<()> {
        let day = self.state.days.entry(date).or_default();
        day.period = Some(PeriodEntry { flow, symptoms });
        info!(%date, %flow, "period logged");
        self.persist()
    }

    /// Record the mood for `date`, replacing any earlier mood for that day.
    pub fn log_mood(&mut self, date: NaiveDate, mood: MoodTag) -> Result<()> {
        let day = self.state.days.entry(date).or_default();
        day.mood = Some(mood);
        info!(%date, %mood, "mood logged");
        self.persist()
    }

    /// Drop everything recorded for `date`. Returns whether anything was there.
    pub fn clear_day(&mut self, date: NaiveDate) -> Result<bool> {
        let removed = self.state.days.remove(&date).is_some();
        if removed {
            info!(%date, "day cleared");
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn day_log(&self, date: NaiveDate) -> Option<&DayLog> {
        self.state.days.get(&date)
    }

    /// Logged days within `[from, to]`, oldest first.
    pub fn logged_days(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl DoubleEndedIterator<Item = (NaiveDate, &DayLog)> + '_ {
        let range = if from <= to { from..=to } else { to..=from };
        self.state.days.range(range).map(|(d, log)| (*d, log))
    }

    // -- profile --------------------------------------------------------------

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.state.name = name.to_string();
        self.persist()
    }

    pub fn set_initial_period_date(&mut self, date: NaiveDate) -> Result<()> {
        self.state.initial_period_date = Some(date);
        self.persist()
    }

    pub fn set_onboarding_complete(&mut self, complete: bool) -> Result<()> {
        self.state.onboarding_complete = complete;
        self.persist()
    }

    /// Overwrite the plan type without checking the stored level against it.
    /// Prefer [`CycleStore::select_plan`].
    pub fn set_workout_plan(&mut self, plan_type: PlanType) -> Result<()> {
        self.state.current_workout_plan_type = Some(plan_type);
        self.persist()
    }

    /// Overwrite the level key without checking it against the plan type.
    /// Prefer [`CycleStore::select_plan`].
    pub fn set_workout_level(&mut self, level: &str) -> Result<()> {
        self.state.current_workout_level = Some(level.to_string());
        self.persist()
    }

    /// Set plan type and level together. Fails without touching state when
    /// the level does not exist for that plan type.
    pub fn select_plan(&mut self, plan_type: PlanType, level: &str) -> Result<&'static WorkoutPlan> {
        let Some(plan) = content::plan(plan_type, level) else {
            bail!(
                "unknown level '{}' for {} plan (expected {})",
                level,
                plan_type,
                content::levels(plan_type).join("/")
            );
        };
        self.state.current_workout_plan_type = Some(plan_type);
        self.state.current_workout_level = Some(plan.level.to_string());
        info!(%plan_type, level = plan.level, "workout plan selected");
        self.persist()?;
        Ok(plan)
    }

    /// Wipe everything back to the first-run state.
    pub fn reset_all_data(&mut self) -> Result<()> {
        self.state = ProfileState::default();
        info!("all data reset");
        self.persist()
    }

    /// Replace the whole state, e.g. from an import.
    pub fn replace_state(&mut self, state: ProfileState) -> Result<()> {
        self.state = state;
        self.persist()
    }

    // -- derivations ----------------------------------------------------------

    pub fn current_plan(&self) -> Option<&'static WorkoutPlan> {
        let plan_type = self.state.current_workout_plan_type?;
        let level = self.state.current_workout_level.as_deref()?;
        content::plan(plan_type, level)
    }

    pub fn period_episodes(&self) -> Vec<Episode> {
        phase::cluster_episodes(phase::period_dates(&self.state.days))
    }

    pub fn last_period_start_date(&self) -> Option<NaiveDate> {
        phase::last_period_start(&self.state.days, self.state.initial_period_date)
    }

    /// Days since the last period start, as of `today`. Not clamped at zero.
    pub fn period_day(&self, today: NaiveDate) -> Option<i64> {
        self.last_period_start_date()
            .map(|start| phase::period_day(start, today))
    }

    pub fn current_phase(&self, today: NaiveDate) -> Option<PhaseType> {
        let day = self.period_day(today)?;
        let phase = PhaseType::from_period_day(day);
        debug!(day, %phase, "phase derived");
        Some(phase)
    }

    /// Main workouts of the current plan for the phase on `today`.
    pub fn current_workouts(&self, today: NaiveDate) -> Option<&'static [Workout]> {
        let plan = self.current_plan()?;
        let phase = self.current_phase(today)?;
        Some(plan.workouts_for(phase))
    }
}
