use anyhow::{Context, Result};
use serde_json::json;

use cyclefit::core::export;
use cyclefit::output;

use crate::cli::ExportFormat;

use super::open_store;

pub fn run_export(format: ExportFormat) -> Result<()> {
    let (_config, store) = open_store()?;
    match format {
        ExportFormat::Json => println!("{}", export::to_json(store.state())?),
        ExportFormat::Csv => print!("{}", export::to_csv(store.state())),
    }
    Ok(())
}

pub fn run_import(file: &str, human_flag: bool) -> Result<()> {
    let contents =
        std::fs::read_to_string(file).with_context(|| format!("cannot read {}", file))?;
    let (_config, mut store) = open_store()?;
    let count = export::import_json(&mut store, &contents)?;

    if human_flag {
        println!("Imported {} day(s)", count);
    } else {
        let out = output::success("import", json!({ "imported": count }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_reset(yes: bool, human_flag: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("reset deletes all logged data; re-run with --yes to confirm");
    }
    let (_config, mut store) = open_store()?;
    store.reset_all_data()?;

    if human_flag {
        println!("All data removed.");
    } else {
        let out = output::success("reset", json!({ "reset": true }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
