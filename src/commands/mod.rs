//! CLI command definitions and dispatch.

pub mod hook;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use tabletmgr_actions::TopoActionQueue;
use tabletmgr_core::config::AppConfig;
use tabletmgr_core::error::AppError;
use tabletmgr_topo::{TopoManager, TopoNodeDirectory};
use tabletmgr_wrangler::Wrangler;

use crate::output::OutputFormat;

/// tabletmgr — run hooks on tablets through the action queue
#[derive(Debug, Parser)]
#[command(name = "tabletmgr", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a hook on a tablet and print its result
    ExecuteHook(hook::HookArgs),
    /// Run a hook on a tablet, succeeding if the hook is not installed
    ExecuteOptionalHook(hook::HookArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let context = CommandContext::connect(&config).await?;
        match &self.command {
            Commands::ExecuteHook(args) => hook::execute(args, &context, self.format).await,
            Commands::ExecuteOptionalHook(args) => hook::execute_optional(args, &context).await,
        }
    }
}

/// Collaborators shared by every command
pub struct CommandContext {
    /// Tablet record lookup
    pub directory: Arc<TopoNodeDirectory>,
    /// Hook runner
    pub wrangler: Wrangler,
}

impl CommandContext {
    /// Connect to the configured store and wire the wrangler on top of it
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let topo = TopoManager::new(&config.topo).await?;
        let store = topo.store();

        let directory = Arc::new(TopoNodeDirectory::new(Arc::clone(&store)));
        let queue = Arc::new(TopoActionQueue::new(Arc::clone(&store), &config.actions));
        let wrangler = Wrangler::new(directory.clone(), queue, store)
            .with_hook_config(&config.hooks);

        Ok(Self {
            directory,
            wrangler,
        })
    }
}
