mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction, PlanAction};
use cyclefit::models::config::Config;
use cyclefit::{diagnostics, output};
use std::process;

fn command_name(c: &Commands) -> &'static str {
    match c {
        Commands::Init { .. } => "init",
        Commands::Period { .. } => "period",
        Commands::Mood { .. } => "mood",
        Commands::Batch { .. } => "batch",
        Commands::Clear => "clear",
        Commands::Show { .. } => "show",
        Commands::Status => "status",
        Commands::History => "history",
        Commands::Plan { .. } => "plan",
        Commands::Tip { .. } => "tip",
        Commands::Config { .. } => "config",
        Commands::Export { .. } => "export",
        Commands::Import { .. } => "import",
        Commands::Reset { .. } => "reset",
        Commands::Completions { .. } => "completions",
    }
}

fn main() {
    let cli = Cli::parse();

    let level = Config::load()
        .map(|c| c.logging.level)
        .unwrap_or_else(|_| "warn".to_string());
    diagnostics::init(cli.verbose, &level);

    let command = command_name(&cli.command);
    let result = match cli.command {
        Commands::Init {
            skip,
            name,
            period_date,
            plan,
            level,
        } => cmd::init::run(cmd::init::InitArgs {
            skip,
            name: name.as_deref(),
            period_date,
            plan: plan.as_deref(),
            level: level.as_deref(),
        }),
        Commands::Period { flow, symptoms } => {
            cmd::log::run_period(&flow, symptoms.as_deref(), cli.date, cli.human)
        }
        Commands::Mood { mood } => cmd::log::run_mood(&mood, cli.date, cli.human),
        Commands::Batch { input } => cmd::log::run_batch(&input, cli.human),
        Commands::Clear => cmd::log::run_clear(cli.date, cli.human),
        Commands::Show { last } => cmd::show::run(last, cli.date, cli.human),
        Commands::Status => cmd::status::run(cli.date, cli.human),
        Commands::History => cmd::history::run(cli.human),
        Commands::Plan { action } => match action {
            PlanAction::Show => cmd::plan::run_show(cli.date, cli.human),
            PlanAction::List => cmd::plan::run_list(cli.human),
            PlanAction::Select { plan_type, level } => {
                cmd::plan::run_select(&plan_type, &level, cli.human)
            }
        },
        Commands::Tip { category } => cmd::tip::run(category.as_deref(), cli.date, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Export { format } => cmd::data::run_export(format),
        Commands::Import { file } => cmd::data::run_import(&file, cli.human),
        Commands::Reset { yes } => cmd::data::run_reset(yes, cli.human),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cyclefit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let err = output::error(command, "general_error", &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
