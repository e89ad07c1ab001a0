use std::time::Duration;

use clap::Parser;

use crate::notification::{queue::QueueConfig, Position, DEFAULT_DURATION};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write diagnostics to this file
    #[arg(long)]
    pub log: Option<String>,
    /// How long a notification stays visible
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub duration_ms: Option<u64>,
    /// Pause between removing a notification and showing the next one
    #[arg(long)]
    pub exit_delay_ms: Option<u64>,
    #[arg(long, value_enum)]
    pub position: Option<Position>,
    /// Key-value store file for saved e-mails and view preferences
    #[arg(long)]
    pub store: Option<String>,
    #[arg(short, long)]
    pub user: Option<String>,
}

pub fn load_config() -> Config {
    let args = Args::parse();
    let defaults = Config::default();
    Config {
        log_path: args.log,
        duration: args
            .duration_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.duration),
        exit_delay: args
            .exit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.exit_delay),
        position: args.position.unwrap_or(defaults.position),
        store_path: args.store,
        user: args.user.unwrap_or(defaults.user),
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub log_path: Option<String>,
    pub duration: Duration,
    pub exit_delay: Duration,
    pub position: Position,
    pub store_path: Option<String>,
    pub user: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: None,
            duration: DEFAULT_DURATION,
            exit_delay: Duration::ZERO,
            position: Position::default(),
            store_path: None,
            user: "default".to_string(),
        }
    }
}

impl Config {
    pub fn queue(&self) -> QueueConfig {
        QueueConfig {
            default_duration: self.duration,
            default_position: self.position,
            exit_delay: self.exit_delay,
        }
    }
}
