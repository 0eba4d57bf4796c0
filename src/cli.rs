use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "cyclefit",
    version,
    about = "Cycle log and phase-adapted workout planner"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override today's date (YYYY-MM-DD); also the default date for logging
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Print debug diagnostics to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up your profile and data directory
    Init {
        /// Skip setup questions, only write default config
        #[arg(long)]
        skip: bool,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// First day of your most recent period (YYYY-MM-DD)
        #[arg(long)]
        period_date: Option<NaiveDate>,

        /// Workout plan type (running/strength)
        #[arg(long, requires = "level")]
        plan: Option<String>,

        /// Workout plan level (e.g. beginner)
        #[arg(long, requires = "plan")]
        level: Option<String>,
    },

    /// Log period flow for a day
    Period {
        /// Flow level (none/light/medium/heavy/very-heavy) or alias
        flow: String,

        /// Comma-separated symptoms (cramps,bloating,mood-swings,headaches,fatigue)
        #[arg(long)]
        symptoms: Option<String>,
    },

    /// Log mood for a day
    Mood {
        /// Mood (happy/sad/neutral/angry/overwhelmed)
        mood: String,
    },

    /// Log several days at once (JSON array or DATE:FLOW[:SYM+SYM][:mood=M],...)
    Batch {
        input: String,
    },

    /// Remove everything logged for a day
    Clear,

    /// Show logged days
    Show {
        /// Show the last N logged days instead of a single date
        #[arg(long)]
        last: Option<usize>,
    },

    /// Current phase, plan and today's log
    Status,

    /// Period episodes derived from the log
    History,

    /// Workout plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Tip of the day for the current phase
    Tip {
        /// Tip category (nutrition/movement/self-care)
        #[arg(long)]
        category: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Export all data
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Import logged days from a JSON export
    Import {
        /// Path to the JSON file
        file: String,
    },

    /// Delete all data (cannot be undone)
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show the selected plan with workouts for the current phase
    Show,
    /// List every available plan
    List,
    /// Select plan type and level together
    Select {
        /// Plan type (running/strength)
        plan_type: String,
        /// Level key (e.g. beginner)
        level: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. tips.category, logging.level, alias.h)
        key: String,
        /// Config value
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}
