mod common;

use std::collections::BTreeSet;

use chrono::Duration;
use common::{date, memory_store};
use cyclefit::core::status;
use cyclefit::models::config::Config;
use cyclefit::models::{FlowLevel, MoodTag, PhaseType, PlanType};

#[test]
fn test_status_on_first_run_is_all_unknown() {
    let store = memory_store();
    let s = status::compute(&store, &Config::default(), date(2026, 1, 1)).unwrap();
    assert!(s.name.is_empty());
    assert!(!s.onboarding_complete);
    assert!(s.cycle.last_period_start.is_none());
    assert!(s.cycle.period_day.is_none());
    assert!(s.cycle.phase.is_none());
    assert!(s.cycle.next_phase.is_none());
    assert!(s.plan.is_none());
    assert!(s.today.is_none());
    assert!(s.tip.is_none());
}

#[test]
fn test_status_reports_phase_plan_and_tip() {
    let mut store = memory_store();
    store.set_name("Ada").unwrap();
    store.select_plan(PlanType::Running, "beginner").unwrap();
    let start = date(2026, 3, 1);
    store
        .log_period(start, FlowLevel::Heavy, BTreeSet::new())
        .unwrap();
    let today = start + Duration::days(6);
    store.log_mood(today, MoodTag::Happy).unwrap();

    let s = status::compute(&store, &Config::default(), today).unwrap();
    assert_eq!(s.name, "Ada");
    assert_eq!(s.cycle.last_period_start, Some(start));
    assert_eq!(s.cycle.period_day, Some(6));
    assert_eq!(s.cycle.phase, Some(PhaseType::Follicular));
    assert_eq!(s.cycle.next_phase, Some(PhaseType::Ovulation));
    assert_eq!(s.cycle.days_until_next_phase, Some(8));

    let plan = s.plan.unwrap();
    assert_eq!(plan.level, "beginner");
    assert_eq!(
        plan.workouts.unwrap(),
        vec!["Building intervals".to_string(), "Steady run".to_string()]
    );
    assert_eq!(s.today.unwrap().mood, Some(MoodTag::Happy));
    assert!(s.tip.is_some());
}

#[test]
fn test_status_luteal_has_no_countdown() {
    let mut store = memory_store();
    let start = date(2026, 3, 1);
    store
        .log_period(start, FlowLevel::Light, BTreeSet::new())
        .unwrap();
    let s = status::compute(&store, &Config::default(), start + Duration::days(25)).unwrap();
    assert_eq!(s.cycle.phase, Some(PhaseType::Luteal));
    assert_eq!(s.cycle.next_phase, Some(PhaseType::Menstrual));
    assert!(s.cycle.days_until_next_phase.is_none());
}

#[test]
fn test_status_plan_without_phase_has_no_workouts() {
    let mut store = memory_store();
    store.select_plan(PlanType::Strength, "advanced").unwrap();
    let s = status::compute(&store, &Config::default(), date(2026, 1, 1)).unwrap();
    let plan = s.plan.unwrap();
    assert_eq!(plan.title, "Advanced strength");
    assert!(plan.workouts.is_none());
}

#[test]
fn test_status_rejects_bad_tip_category_in_config() {
    let store = memory_store();
    let mut config = Config::default();
    config.tips.category = "astrology".to_string();
    assert!(status::compute(&store, &config, date(2026, 1, 1)).is_err());
}

#[test]
fn test_status_serializes_to_json() {
    let mut store = memory_store();
    store
        .log_period(date(2026, 1, 1), FlowLevel::Medium, BTreeSet::new())
        .unwrap();
    let s = status::compute(&store, &Config::default(), date(2026, 1, 15)).unwrap();
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["cycle"]["phase"], "ovulation");
    assert_eq!(v["cycle"]["period_day"], 14);
    assert_eq!(v["date"], "2026-01-15");
}
