use anyhow::Result;
use clap::{Parser, Subcommand};

use detox_app::notifications::NotificationManager;
use detox_app::AppState;
use detox_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "detox-ctl")]
#[command(about = "Digital detox habit tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's overview: goals, progress, and group standings
    Status,

    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    Verify {
        #[command(subcommand)]
        action: VerifyAction,
    },
}

#[derive(Subcommand)]
enum GoalAction {
    List,
    /// Add a cap on the whole day's screen time
    AddTotal {
        name: String,
        #[arg(help = "Limit in minutes")]
        limit: u32,
    },
    /// Add a cap on a single application's usage
    AddApp {
        name: String,
        #[arg(help = "Application name, e.g. Instagram")]
        app: String,
        #[arg(help = "Limit in minutes")]
        limit: u32,
    },
    /// Add a no-use window between two clock times
    AddWindow {
        name: String,
        #[arg(help = "Window start, HH:MM")]
        start: String,
        #[arg(help = "Window end, HH:MM (may be past midnight)")]
        end: String,
    },
    Remove {
        name: String,
    },
}

#[derive(Subcommand)]
enum GroupAction {
    List,
    Show {
        name: String,
    },
    Create {
        name: String,
        #[arg(short, long, default_value_t = 7, help = "Challenge length in days")]
        duration: u32,
    },
    Join {
        code: String,
    },
    /// Generate the invite link and code for a group (admin only)
    Invite {
        name: String,
    },
    /// Send a cheer or congrats to a group member
    React {
        group: String,
        member: String,
        #[arg(long, default_value = "cheer", help = "cheer or congrats")]
        reaction: String,
    },
}

#[derive(Subcommand)]
enum VerifyAction {
    /// Simulated screenshot upload: analyze and submit today's usage
    Upload,
    /// Enter today's usage by hand
    Manual {
        #[arg(help = "Total screen time in minutes")]
        total: u32,
        #[arg(
            long = "app",
            value_parser = commands::verify::parse_app_usage,
            help = "Per-app minutes as NAME=MINUTES, repeatable"
        )]
        apps: Vec<(String, u32)>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.clone())),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // All tracked state is in-memory and seeded fresh on every run.
    let mut state = AppState::with_sample_data(config, NotificationManager::new());

    match cli.command {
        Commands::Status => commands::status::show(&state)?,
        Commands::Goal { action } => match action {
            GoalAction::List => commands::goal::list(&state)?,
            GoalAction::AddTotal { name, limit } => {
                commands::goal::add_total(&mut state, &name, limit)?
            }
            GoalAction::AddApp { name, app, limit } => {
                commands::goal::add_app(&mut state, &name, &app, limit)?
            }
            GoalAction::AddWindow { name, start, end } => {
                commands::goal::add_window(&mut state, &name, &start, &end)?
            }
            GoalAction::Remove { name } => commands::goal::remove(&mut state, &name)?,
        },
        Commands::Group { action } => match action {
            GroupAction::List => commands::group::list(&state)?,
            GroupAction::Show { name } => commands::group::show(&state, &name)?,
            GroupAction::Create { name, duration } => {
                commands::group::create(&mut state, &name, duration)?
            }
            GroupAction::Join { code } => commands::group::join(&mut state, &code)?,
            GroupAction::Invite { name } => commands::group::invite(&state, &name)?,
            GroupAction::React { group, member, reaction } => {
                commands::group::react(&state, &group, &member, &reaction)?
            }
        },
        Commands::Verify { action } => match action {
            VerifyAction::Upload => commands::verify::upload(&mut state).await?,
            VerifyAction::Manual { total, apps } => {
                commands::verify::manual(&mut state, total, apps)?
            }
        },
    }

    Ok(())
}
