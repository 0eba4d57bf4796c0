use anyhow::Result;
use chrono::NaiveDate;

use cyclefit::core::status;
use cyclefit::output;
use cyclefit::output::human;

use super::{open_store, today};

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let (config, store) = open_store()?;
    let status = status::compute(&store, &config, today(date))?;

    if human_flag {
        println!("{}", human::format_status(&status));
    } else {
        let out = output::success("status", serde_json::to_value(&status)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
