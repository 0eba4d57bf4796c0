use anyhow::Result;
use serde_json::json;

use cyclefit::output;
use cyclefit::output::human;

use super::open_store;

pub fn run(human_flag: bool) -> Result<()> {
    let (_config, store) = open_store()?;
    let episodes = store.period_episodes();
    let last_start = store.last_period_start_date();

    if human_flag {
        println!("{}", human::format_history(&episodes, last_start));
    } else {
        let out = output::success(
            "history",
            json!({ "episodes": episodes, "last_period_start": last_start }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
