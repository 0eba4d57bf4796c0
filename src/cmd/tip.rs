use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use cyclefit::content::TipCategory;
use cyclefit::core::tips;
use cyclefit::output;

use super::{open_store, today};

pub fn run(category: Option<&str>, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let (config, store) = open_store()?;
    let date = today(date);
    let category: TipCategory = category.unwrap_or(config.tips.category.as_str()).parse()?;
    let phase = store.current_phase(date);
    let tip = phase.and_then(|p| tips::tip_of_the_day(p, category, date));

    if human_flag {
        match tip {
            Some(t) => println!("{}", t),
            None => println!("No tip yet: log a period day so your phase is known."),
        }
    } else {
        let out = output::success(
            "tip",
            json!({ "date": date, "phase": phase, "category": category, "tip": tip }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
