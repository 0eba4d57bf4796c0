mod common;

use std::collections::BTreeSet;

use common::{date, memory_store};
use cyclefit::core::logging::{
    log_batch, log_mood, log_period, parse_simple_batch, parse_symptoms,
};
use cyclefit::models::config::Config;
use cyclefit::models::{FlowLevel, MoodTag, SymptomTag};

fn config_with_aliases() -> Config {
    Config {
        aliases: Config::default_aliases(),
        ..Config::default()
    }
}

// ── log_period / log_mood ────────────────────────────────────────────────────

#[test]
fn test_log_period_parses_flow_and_symptoms() {
    let mut store = memory_store();
    let config = Config::default();
    let d = date(2026, 1, 15);

    let day = log_period(&mut store, &config, d, "heavy", Some("cramps, fatigue")).unwrap();

    let period = day.period.unwrap();
    assert_eq!(period.flow, FlowLevel::Heavy);
    assert_eq!(
        period.symptoms,
        BTreeSet::from([SymptomTag::Cramps, SymptomTag::Fatigue])
    );
    assert!(store.day_log(d).is_some());
}

#[test]
fn test_log_period_resolves_aliases() {
    let mut store = memory_store();
    let config = config_with_aliases();

    let day = log_period(&mut store, &config, date(2026, 1, 1), "vh", Some("cr,ms")).unwrap();
    let period = day.period.unwrap();
    assert_eq!(period.flow, FlowLevel::VeryHeavy);
    assert!(period.symptoms.contains(&SymptomTag::MoodSwings));
}

#[test]
fn test_log_period_rejects_unknown_flow_without_writing() {
    let mut store = memory_store();
    let config = Config::default();
    let d = date(2026, 1, 1);

    let err = log_period(&mut store, &config, d, "gushing", None).unwrap_err();
    assert!(err.to_string().contains("invalid flow"));
    assert!(store.day_log(d).is_none());
}

#[test]
fn test_log_mood_keeps_period() {
    let mut store = memory_store();
    let config = Config::default();
    let d = date(2026, 1, 1);
    log_period(&mut store, &config, d, "light", None).unwrap();

    let day = log_mood(&mut store, &config, d, "Happy").unwrap();
    assert_eq!(day.mood, Some(MoodTag::Happy));
    assert_eq!(day.period.unwrap().flow, FlowLevel::Light);
}

#[test]
fn test_parse_symptoms_dedups_and_skips_blanks() {
    let config = Config::default();
    let set = parse_symptoms(&config, Some("cramps,, cramps ,bloating")).unwrap();
    assert_eq!(set.len(), 2);
    assert!(parse_symptoms(&config, Some("")).unwrap().is_empty());
    assert!(parse_symptoms(&config, None).unwrap().is_empty());
}

// ── batch ────────────────────────────────────────────────────────────────────

#[test]
fn test_log_batch_json_applies_entries_in_order() {
    let mut store = memory_store();
    let config = Config::default();
    let json = r#"[
        {"date": "2026-02-01", "flow": "heavy", "symptoms": ["cramps"]},
        {"date": "2026-02-02", "flow": "medium", "mood": "sad"},
        {"date": "2026-02-01", "mood": "neutral"}
    ]"#;

    let days = log_batch(&mut store, &config, json).unwrap();
    assert_eq!(days.len(), 3);

    let first = store.day_log(date(2026, 2, 1)).unwrap();
    assert_eq!(first.period.as_ref().unwrap().flow, FlowLevel::Heavy);
    assert_eq!(first.mood, Some(MoodTag::Neutral));

    let second = store.day_log(date(2026, 2, 2)).unwrap();
    assert_eq!(second.mood, Some(MoodTag::Sad));
}

#[test]
fn test_log_batch_bad_entry_writes_nothing() {
    let mut store = memory_store();
    let config = Config::default();
    let json = r#"[
        {"date": "2026-02-01", "flow": "heavy"},
        {"date": "2026-02-02", "flow": "torrential"}
    ]"#;

    assert!(log_batch(&mut store, &config, json).is_err());
    assert!(store.day_log(date(2026, 2, 1)).is_none());
}

#[test]
fn test_log_batch_entry_without_flow_or_mood_rejected() {
    let mut store = memory_store();
    let config = Config::default();
    let err = log_batch(&mut store, &config, r#"[{"date": "2026-02-01"}]"#).unwrap_err();
    assert!(err.to_string().contains("neither 'flow' nor 'mood'"));
}

#[test]
fn test_log_batch_non_string_flow_rejected() {
    let mut store = memory_store();
    let config = Config::default();
    let json = r#"[{"date": "2026-01-01", "flow": 5, "mood": "sad"}]"#;

    let err = log_batch(&mut store, &config, json).unwrap_err();
    assert!(err.to_string().contains("'flow' must be a string"));
    assert!(store.state().days.is_empty());
}

#[test]
fn test_log_batch_non_string_mood_rejected() {
    let mut store = memory_store();
    let config = Config::default();
    let json = r#"[{"date": "2026-01-01", "flow": "light", "mood": ["sad"]}]"#;

    let err = log_batch(&mut store, &config, json).unwrap_err();
    assert!(err.to_string().contains("'mood' must be a string"));
    assert!(store.state().days.is_empty());
}

#[test]
fn test_log_batch_non_string_symptom_item_rejected() {
    let mut store = memory_store();
    let config = Config::default();
    let json = r#"[
        {"date": "2026-01-01", "mood": "happy"},
        {"date": "2026-01-02", "flow": "heavy", "symptoms": [1, "cramps", true]}
    ]"#;

    let err = log_batch(&mut store, &config, json).unwrap_err();
    assert!(err.to_string().contains("symptom must be a string"));
    assert!(store.state().days.is_empty());
}

#[test]
fn test_log_batch_symptoms_wrong_shape_rejected() {
    let mut store = memory_store();
    let config = Config::default();
    let json = r#"[{"date": "2026-01-02", "flow": "heavy", "symptoms": {"cramps": true}}]"#;

    assert!(log_batch(&mut store, &config, json).is_err());
    assert!(store.state().days.is_empty());
}

#[test]
fn test_log_batch_missing_date_rejected() {
    let mut store = memory_store();
    let config = Config::default();
    let err = log_batch(&mut store, &config, r#"[{"flow": "light"}]"#).unwrap_err();
    assert!(err.to_string().contains("missing 'date'"));
}

#[test]
fn test_parse_simple_batch_builds_json() {
    let json =
        parse_simple_batch("2026-01-03:heavy:cramps+fatigue, 2026-01-04:mood=sad").unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["date"], "2026-01-03");
    assert_eq!(parsed[0]["flow"], "heavy");
    assert_eq!(parsed[0]["symptoms"][1], "fatigue");
    assert_eq!(parsed[1]["mood"], "sad");
    assert!(parsed[1].get("flow").is_none());
}

#[test]
fn test_parse_simple_batch_too_many_fields() {
    assert!(parse_simple_batch("2026-01-03:heavy:cramps:extra").is_err());
}

#[test]
fn test_simple_batch_round_trips_through_log_batch() {
    let mut store = memory_store();
    let config = config_with_aliases();
    let json = parse_simple_batch("2026-01-03:h:cr+bl:mood=angry,2026-01-04:l").unwrap();
    log_batch(&mut store, &config, &json).unwrap();

    let d = store.day_log(date(2026, 1, 3)).unwrap();
    assert_eq!(d.period.as_ref().unwrap().flow, FlowLevel::Heavy);
    assert_eq!(d.period.as_ref().unwrap().symptoms.len(), 2);
    assert_eq!(d.mood, Some(MoodTag::Angry));
    assert_eq!(store.last_period_start_date(), Some(date(2026, 1, 3)));
}
