mod check;
pub use check::CheckCommand;

mod migrate;
pub use migrate::MigrateCommand;

use anyhow::Result;
use clap::Parser;
use sgorm::{Model, Registry};
use std::io::Write;

/// sgorm CLI library for building custom command-line tools
pub struct SgormCli {
    registry: Registry,
    models: Vec<Model>,
}

impl SgormCli {
    /// Create a new SgormCli managing `models` on the databases of `registry`
    pub fn new(registry: Registry, models: Vec<Model>) -> Self {
        Self { registry, models }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Parse and execute CLI commands from command-line arguments, writing to
    /// stdout
    pub async fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli, &mut std::io::stdout()).await
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub async fn parse_from<I, T, W>(&self, args: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
        W: Write + Send,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli, out).await
    }

    async fn run<W: Write + Send>(&self, cli: Cli, out: &mut W) -> Result<()> {
        match cli.command {
            Command::Migrate(cmd) => cmd.run(&self.registry, &self.models, out).await,
            Command::Check(cmd) => cmd.run(&self.models, out),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sgorm")]
#[command(about = "sgorm CLI - schema synchronization tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Synchronize every model with its table
    Migrate(MigrateCommand),

    /// Report declaration problems in every model
    Check(CheckCommand),
}
