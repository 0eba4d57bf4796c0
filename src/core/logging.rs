use std::collections::BTreeSet;

use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use serde_json::Value;

use crate::core::store::CycleStore;
use crate::db::Storage;
use crate::models::config::Config;
use crate::models::{DayLog, FlowLevel, MoodTag, SymptomTag};

pub fn parse_flow(config: &Config, input: &str) -> Result<FlowLevel> {
    config.resolve_alias(input.trim()).parse()
}

pub fn parse_mood(config: &Config, input: &str) -> Result<MoodTag> {
    config.resolve_alias(input.trim()).parse()
}

/// Parse a comma-separated symptom list. Duplicates collapse; blank input is
/// an empty set.
pub fn parse_symptoms(config: &Config, input: Option<&str>) -> Result<BTreeSet<SymptomTag>> {
    let Some(input) = input else {
        return Ok(BTreeSet::new());
    };
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| config.resolve_alias(s).parse())
        .collect()
}

/// Log period flow for a day from user-typed words. Returns the day's record.
pub fn log_period<S: Storage>(
    store: &mut CycleStore<S>,
    config: &Config,
    date: NaiveDate,
    flow: &str,
    symptoms: Option<&str>,
) -> Result<DayLog> {
    let flow = parse_flow(config, flow)?;
    let symptoms = parse_symptoms(config, symptoms)?;
    store.log_period(date, flow, symptoms)?;
    Ok(store.day_log(date).cloned().unwrap_or_default())
}

pub fn log_mood<S: Storage>(
    store: &mut CycleStore<S>,
    config: &Config,
    date: NaiveDate,
    mood: &str,
) -> Result<DayLog> {
    let mood = parse_mood(config, mood)?;
    store.log_mood(date, mood)?;
    Ok(store.day_log(date).cloned().unwrap_or_default())
}

struct BatchEntry {
    date: NaiveDate,
    period: Option<(FlowLevel, BTreeSet<SymptomTag>)>,
    mood: Option<MoodTag>,
}

fn parse_batch_entry(config: &Config, entry: &Value) -> Result<BatchEntry> {
    let date: NaiveDate = entry["date"]
        .as_str()
        .ok_or_else(|| anyhow!("missing 'date' in batch entry"))?
        .parse()
        .map_err(|_| anyhow!("invalid 'date' in batch entry (expected YYYY-MM-DD)"))?;

    let period = match &entry["flow"] {
        Value::Null => None,
        Value::String(f) => {
            let flow = parse_flow(config, f)?;
            let symptoms = match &entry["symptoms"] {
                Value::Null => BTreeSet::new(),
                Value::Array(items) => items
                    .iter()
                    .map(|t| -> Result<SymptomTag> {
                        match t {
                            Value::String(s) => config.resolve_alias(s).parse(),
                            other => bail!("symptom must be a string, got {other}"),
                        }
                    })
                    .collect::<Result<BTreeSet<_>>>()?,
                Value::String(s) => parse_symptoms(config, Some(s))?,
                other => bail!("'symptoms' must be a string or array, got {other}"),
            };
            Some((flow, symptoms))
        }
        other => bail!("'flow' must be a string, got {other}"),
    };

    let mood = match &entry["mood"] {
        Value::Null => None,
        Value::String(m) => Some(parse_mood(config, m)?),
        other => bail!("'mood' must be a string, got {other}"),
    };

    if period.is_none() && mood.is_none() {
        bail!("batch entry for {} has neither 'flow' nor 'mood'", date);
    }
    Ok(BatchEntry { date, period, mood })
}

/// Apply a JSON array of `{date, flow?, symptoms?, mood?}` objects in order.
///
/// Every entry is validated before anything is written, so a bad entry
/// leaves the store untouched.
pub fn log_batch<S: Storage>(
    store: &mut CycleStore<S>,
    config: &Config,
    batch_json: &str,
) -> Result<Vec<(NaiveDate, DayLog)>> {
    let entries: Vec<Value> = serde_json::from_str(batch_json)?;
    let parsed = entries
        .iter()
        .map(|e| parse_batch_entry(config, e))
        .collect::<Result<Vec<_>>>()?;

    let mut touched = Vec::new();
    for entry in parsed {
        if let Some((flow, symptoms)) = entry.period {
            store.log_period(entry.date, flow, symptoms)?;
        }
        if let Some(mood) = entry.mood {
            store.log_mood(entry.date, mood)?;
        }
        touched.push(entry.date);
    }

    Ok(touched
        .into_iter()
        .map(|d| (d, store.day_log(d).cloned().unwrap_or_default()))
        .collect())
}

/// Convert the shorthand `DATE:FLOW[:SYMPTOM+SYMPTOM][:mood=MOOD],...` into
/// the JSON batch form.
///
/// `2026-01-03:heavy:cramps+fatigue,2026-01-04:mood=sad`
pub fn parse_simple_batch(input: &str) -> Result<String> {
    let mut entries = Vec::new();
    for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let mut parts = item.split(':').map(str::trim);
        let date = parts
            .next()
            .filter(|d| !d.is_empty())
            .ok_or_else(|| anyhow!("missing date in batch item '{}'", item))?;

        let mut obj = serde_json::Map::new();
        obj.insert("date".into(), date.into());
        let mut positional = 0;
        for part in parts {
            if let Some(mood) = part.strip_prefix("mood=") {
                obj.insert("mood".into(), mood.into());
                continue;
            }
            match positional {
                0 => {
                    obj.insert("flow".into(), part.into());
                }
                1 => {
                    let symptoms: Vec<serde_json::Value> = part
                        .split('+')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(Into::into)
                        .collect();
                    obj.insert("symptoms".into(), symptoms.into());
                }
                _ => bail!("too many fields in batch item '{}'", item),
            }
            positional += 1;
        }
        entries.push(serde_json::Value::Object(obj));
    }
    Ok(serde_json::to_string(&entries)?)
}
