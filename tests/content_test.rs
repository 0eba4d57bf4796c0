use chrono::NaiveDate;
use cyclefit::content::{self, TipCategory, tips};
use cyclefit::core::tips::{date_seed, tip_of_the_day};
use cyclefit::models::{PhaseType, PlanType};

// ── plans ────────────────────────────────────────────────────────────────────

#[test]
fn test_every_listed_level_resolves() {
    for plan_type in PlanType::ALL {
        for level in content::levels(plan_type) {
            let plan = content::plan(plan_type, level)
                .unwrap_or_else(|| panic!("{plan_type}/{level} missing"));
            assert_eq!(plan.plan_type, plan_type);
            assert_eq!(plan.level, *level);
        }
    }
    assert_eq!(content::plans::all().len(), 6);
}

#[test]
fn test_every_plan_has_workouts_for_every_phase() {
    for plan in content::plans::all() {
        assert!(!plan.mobility.exercises.is_empty(), "{}", plan.title);
        assert!(!plan.stretch.exercises.is_empty(), "{}", plan.title);
        for phase in PhaseType::ALL {
            let ws = plan.workouts_for(phase);
            assert!(!ws.is_empty(), "{} has no {} workouts", plan.title, phase);
            assert!(ws.iter().all(|w| !w.exercises.is_empty()));
        }
    }
}

#[test]
fn test_unknown_level_is_absent() {
    assert!(content::plan(PlanType::Running, "elite").is_none());
    assert!(content::plan(PlanType::Strength, "Beginner").is_none());
}

#[test]
fn test_mobility_and_stretch_shared_within_plan_type() {
    let a = content::plan(PlanType::Running, "beginner").unwrap();
    let b = content::plan(PlanType::Running, "advanced").unwrap();
    assert_eq!(a.mobility, b.mobility);
    assert_eq!(a.stretch, b.stretch);
}

// ── tips ─────────────────────────────────────────────────────────────────────

#[test]
fn test_every_phase_and_category_has_tips() {
    for phase in PhaseType::ALL {
        for category in TipCategory::ALL {
            assert!(!tips::tips(phase, category).is_empty());
        }
    }
}

#[test]
fn test_date_seed_is_char_sum() {
    assert_eq!(date_seed(""), 0);
    assert_eq!(date_seed("ab"), 97 + 98);
    // '2'=50 '0'=48 '2'=50 '6'=54 '-'=45 '0'=48 '1'=49 '-'=45 '0'=48 '1'=49
    assert_eq!(date_seed("2026-01-01"), 486);
}

#[test]
fn test_tip_of_the_day_is_stable_and_indexed_by_seed() {
    let d = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let list = tips::tips(PhaseType::Luteal, TipCategory::SelfCare);
    let expected = list[486 % list.len()];

    let a = tip_of_the_day(PhaseType::Luteal, TipCategory::SelfCare, d);
    let b = tip_of_the_day(PhaseType::Luteal, TipCategory::SelfCare, d);
    assert_eq!(a, Some(expected));
    assert_eq!(a, b);
}

#[test]
fn test_tip_category_parse() {
    assert_eq!("self_care".parse::<TipCategory>().unwrap(), TipCategory::SelfCare);
    assert_eq!(TipCategory::SelfCare.to_string(), "self-care");
    assert!("sleep".parse::<TipCategory>().is_err());
}
