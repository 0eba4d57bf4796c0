use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use cyclefit::output;
use cyclefit::output::human;

use super::{open_store, today};

pub fn run(last: Option<usize>, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let (_config, store) = open_store()?;

    if let Some(n) = last {
        let mut days: Vec<_> = store
            .logged_days(NaiveDate::MIN, NaiveDate::MAX)
            .rev()
            .take(n)
            .collect();
        days.reverse();
        if human_flag {
            if days.is_empty() {
                println!("No days logged yet.");
            } else {
                for (d, day) in &days {
                    println!("{}", human::format_day_log(*d, day));
                }
            }
        } else {
            let entries: Vec<_> = days
                .iter()
                .map(|(d, day)| json!({ "date": d, "day": day }))
                .collect();
            let out = output::success("show", json!({ "entries": entries }));
            println!("{}", serde_json::to_string(&out)?);
        }
        return Ok(());
    }

    let date = today(date);
    let day = store.day_log(date);
    if human_flag {
        match day {
            Some(d) => println!("{}", human::format_day_log(date, d)),
            None => println!("Nothing logged for {}", date),
        }
    } else {
        let out = output::success("show", json!({ "date": date, "day": day }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
