//! Budget Lite main entry point

use anyhow::Context;
use budgetlite_cli::{commands, CliSettings, OutputFormat, Prompter, Session};
use budgetlite_config::Config;
use budgetlite_core::{Ledger, Month, TransactionKind};
use budgetlite_storage::{JsonFileStorage, StorageRef};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "budgetlite")]
#[command(author = "Budget Lite Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A small personal finance ledger for the terminal", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "budgetlite.yaml")]
    config: PathBuf,

    /// Data file path, overrides data.path from the configuration
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Menu,
    /// List transactions by date
    List {
        /// Only show one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<Month>,
    },
    /// Income, expense and net totals
    Summary,
    /// Totals per category for income or expense
    Categories {
        /// income or expense
        kind: TransactionKind,
    },
    /// Export all transactions to CSV
    Export {
        /// Output path, overrides export.path from the configuration
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the default configuration file
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(Command::InitConfig) = args.command {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.report());
            anyhow::bail!("invalid configuration in {}", args.config.display());
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str())).init();
    log::debug!("Config loaded from {}", args.config.display());

    let data_path = args.data.clone().unwrap_or_else(|| config.data_path().to_path_buf());
    let storage: StorageRef = Arc::new(JsonFileStorage::new(data_path).with_backup(config.data.backup_on_save));
    let ledger = Ledger::open(storage);

    let settings = CliSettings::from_config(&config);
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            let prompter = Prompter::new(stdin.lock(), out);
            let mut session = Session::new(ledger, prompter, settings);
            session.run().context("menu session failed")?;
        }
        Command::List { month } => commands::list(&mut out, &ledger, month, format, &settings)?,
        Command::Summary => commands::summary(&mut out, &ledger, format, &settings)?,
        Command::Categories { kind } => commands::categories(&mut out, &ledger, kind, format, &settings)?,
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| settings.export_path.clone());
            commands::export(&mut out, &ledger, &path).context("export failed")?;
        }
        Command::InitConfig => {}
    }

    io::stdout().flush()?;
    Ok(())
}
