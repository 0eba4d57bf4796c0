use anyhow::Result;
use serde_json::json;

use cyclefit::content::TipCategory;
use cyclefit::models::config::Config;
use cyclefit::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{}", toml_str);
    } else {
        let out = output::success("config", json!({ "config": config }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "tips.category" => {
            let category: TipCategory = value.parse()?;
            config.tips.category = category.to_string();
        }
        "logging.level" => match value {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => {
                config.logging.level = value.to_string()
            }
            _ => anyhow::bail!("logging.level must be one of off/error/warn/info/debug/trace"),
        },
        k if k.starts_with("alias.") => {
            let alias = &k["alias.".len()..];
            if alias.is_empty() {
                anyhow::bail!("alias name must not be empty");
            }
            config.aliases.insert(alias.to_string(), value.to_string());
        }
        _ => anyhow::bail!("unknown config key: {}", key),
    }

    config.save()?;
    let out = output::success("config", json!({ "key": key, "value": value }));
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
