use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use trade_tracker::commands::general::guide_text;
use trade_tracker::entities::sum_total_cost;
use trade_tracker::{JsonStorage, Logic, ModelManager, SystemClock, TrackerConfig, VERSION};

/// Track clients, their companies, and what you buy from and sell to them.
#[derive(Parser, Debug)]
#[command(name = "trade-tracker", version, about)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data file (overrides config)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (overrides config)
    #[arg(long)]
    log_level: Option<String>,

    /// Do not write the data file
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = TrackerConfig::load(args.config.as_deref())?;
    if let Some(data) = args.data {
        config.data_file = data;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if args.no_save {
        config.autosave = false;
    }

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .format_timestamp(None)
        .init();

    log::info!("Starting trade-tracker {}", VERSION);

    let storage = JsonStorage::new(&config.data_file);
    let clients = storage
        .load()
        .with_context(|| format!("Could not load {}", config.data_file.display()))?;

    let mut logic = Logic::new(ModelManager::with_clients(clients), Box::new(SystemClock));
    if config.autosave {
        logic = logic.with_storage(storage);
    }

    run_repl(&mut logic, &config.prompt)
}

fn run_repl(logic: &mut Logic, prompt: &str) -> Result<()> {
    println!("📒 Trade Tracker {} - type `guide` for commands, `exit` to quit", VERSION);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", prompt);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.show_help {
                    println!("\n{}", guide_text());
                }
                if result.refresh_transactions {
                    print_transactions(logic);
                }
                if result.exit {
                    break;
                }
            }
            Err(e) => println!("❌ {}", e),
        }
    }

    log::info!("Exiting trade-tracker");
    Ok(())
}

/// Transactions in the current view plus their total
fn print_transactions(logic: &Logic) {
    let transactions = logic.filtered_transaction_list();
    if transactions.is_empty() {
        println!("   (no transactions)");
        return;
    }

    for (i, transaction) in transactions.iter().enumerate() {
        println!("   {}. {} on {}", i + 1, transaction, transaction.date);
    }

    match sum_total_cost(transactions.iter().copied()) {
        Some(total) => println!("   Total: ${}", total),
        None => println!("   Total: too large to display"),
    }
}
