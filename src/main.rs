use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use skulltimer::{Replay, ScriptCommand, logging, read_script};
use skulltimer_core::game_data::TICK_DURATION;
use skulltimer_core::{
    ConfyStore, DurationStore, MemoryStore, SkullSession, SkullTimerConfig, SkullTimerConfigExt,
};

#[derive(Parser)]
#[command(version, about = "Skull timer event replay")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script and print the skull countdown
    Replay {
        #[arg(short, long)]
        path: PathBuf,
        /// Keep the remaining duration in memory instead of the config file
        #[arg(long)]
        no_persist: bool,
        /// Wait one game tick per tick advanced
        #[arg(long)]
        realtime: bool,
    },
    /// Show the stored configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            path,
            no_persist,
            realtime,
        } => replay(&path, no_persist, realtime).await,
        Commands::Config => {
            let config = SkullTimerConfig::try_load().map_err(|e| e.to_string())?;
            println!("{config:#?}");
            Ok(())
        }
    }
}

async fn replay(path: &Path, no_persist: bool, realtime: bool) -> Result<(), String> {
    let commands = read_script(path).await.map_err(|e| e.to_string())?;
    let config = SkullTimerConfig::load();

    let store: Box<dyn DurationStore> = if no_persist {
        Box::new(MemoryStore::new(Duration::from_secs(config.remaining_secs)))
    } else {
        Box::new(ConfyStore::new(config.clone()))
    };

    let session = SkullSession::new(&config, store);
    let mut replay = Replay::new(session, chrono::Local::now().naive_local());
    info!(path = %path.display(), commands = commands.len(), "Replaying script");

    for command in &commands {
        if realtime && let ScriptCommand::Tick { tick, .. } = command {
            let ticks = tick.saturating_sub(replay.tick());
            tokio::time::sleep(TICK_DURATION * ticks).await;
        }

        if let Some(countdown) = replay.apply(command) {
            println!("{countdown}");
        }
    }

    let remaining = replay.session().timers().persisted_remaining();
    println!("persisted remaining: {}s", remaining.as_secs());
    Ok(())
}
