use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use cyclefit::core::logging;
use cyclefit::output;
use cyclefit::output::human;

use super::{open_store, today};

pub fn run_period(
    flow: &str,
    symptoms: Option<&str>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let (config, mut store) = open_store()?;
    let date = today(date);
    let day = logging::log_period(&mut store, &config, date, flow, symptoms)?;

    if human_flag {
        println!("Logged: {}", human::format_day_log(date, &day));
    } else {
        let out = output::success("period", json!({ "date": date, "day": day }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_mood(mood: &str, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let (config, mut store) = open_store()?;
    let date = today(date);
    let day = logging::log_mood(&mut store, &config, date, mood)?;

    if human_flag {
        println!("Logged: {}", human::format_day_log(date, &day));
    } else {
        let out = output::success("mood", json!({ "date": date, "day": day }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_batch(batch_input: &str, human_flag: bool) -> Result<()> {
    let (config, mut store) = open_store()?;

    // JSON array starts with '[', anything else is the shorthand form
    let batch_json = if batch_input.trim_start().starts_with('[') {
        batch_input.to_string()
    } else {
        logging::parse_simple_batch(batch_input)?
    };

    let days = logging::log_batch(&mut store, &config, &batch_json)?;

    if human_flag {
        for (date, day) in &days {
            println!("Logged: {}", human::format_day_log(*date, day));
        }
    } else {
        let entries: Vec<_> = days
            .iter()
            .map(|(date, day)| json!({ "date": date, "day": day }))
            .collect();
        let out = output::success("batch", json!({ "entries": entries }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_clear(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let (_config, mut store) = open_store()?;
    let date = today(date);
    let removed = store.clear_day(date)?;

    if human_flag {
        if removed {
            println!("Cleared {}", date);
        } else {
            println!("Nothing logged for {}", date);
        }
    } else {
        let out = output::success("clear", json!({ "date": date, "removed": removed }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
