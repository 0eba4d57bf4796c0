use anyhow::Result;
use chrono::NaiveDate;

use cyclefit::models::config::Config;
use cyclefit::models::PlanType;

use super::open_store;

pub struct InitArgs<'a> {
    pub skip: bool,
    pub name: Option<&'a str>,
    pub period_date: Option<NaiveDate>,
    pub plan: Option<&'a str>,
    pub level: Option<&'a str>,
}

pub fn run(args: InitArgs<'_>) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();
    if config.aliases.is_empty() {
        config.aliases = Config::default_aliases();
    }
    config.save()?;

    if args.skip {
        println!("Config initialized with defaults at {:?}", Config::path());
        return Ok(());
    }

    // Validate everything before writing any profile field.
    let plan = match (args.plan, args.level) {
        (Some(p), Some(l)) => Some((p.parse::<PlanType>()?, l)),
        _ => None,
    };

    let (_config, mut store) = open_store()?;
    if let Some((plan_type, level)) = plan {
        store.select_plan(plan_type, level)?;
    }
    if let Some(name) = args.name {
        store.set_name(name)?;
    }
    if let Some(d) = args.period_date {
        store.set_initial_period_date(d)?;
    }
    store.set_onboarding_complete(true)?;

    println!("Setup complete. Data stored in {:?}", Config::data_dir());
    Ok(())
}
