use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use cyclefit::content;
use cyclefit::models::PlanType;
use cyclefit::output;
use cyclefit::output::human;

use super::{open_store, today};

pub fn run_show(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let (_config, store) = open_store()?;
    let Some(plan) = store.current_plan() else {
        anyhow::bail!("no workout plan selected (run `cyclefit plan select <type> <level>`)");
    };
    let phase = store.current_phase(today(date));

    if human_flag {
        println!("{}", human::format_plan(plan, phase));
    } else {
        let out = output::success(
            "plan",
            json!({
                "plan_type": plan.plan_type,
                "level": plan.level,
                "title": plan.title,
                "phase": phase,
                "mobility": plan.mobility,
                "workouts": phase.map(|p| plan.workouts_for(p)),
                "stretch": plan.stretch,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(human_flag: bool) -> Result<()> {
    let plans = content::plans::all();
    if human_flag {
        println!("{}", human::format_plan_list(plans));
    } else {
        let entries: Vec<_> = PlanType::ALL
            .iter()
            .map(|t| json!({ "plan_type": t, "levels": content::levels(*t) }))
            .collect();
        let out = output::success("plan", json!({ "plans": entries }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_select(plan_type: &str, level: &str, human_flag: bool) -> Result<()> {
    let (_config, mut store) = open_store()?;
    let plan_type: PlanType = plan_type.parse()?;
    let plan = store.select_plan(plan_type, level)?;

    if human_flag {
        println!("Selected: {}", plan.title);
    } else {
        let out = output::success(
            "plan",
            json!({ "plan_type": plan.plan_type, "level": plan.level, "title": plan.title }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
