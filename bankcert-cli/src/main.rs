use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

use bankcert_harness::{Fixture, HarnessError, run};
use bankcert_ingest::ParserRegistry;

mod config;

#[derive(Parser, Debug)]
#[command(
    name = "bankcert",
    version,
    about = "Certify bank statement parsers against reference tables"
)]
struct Cli {
    /// Config file (default: ./bankcert.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the verification for one bank's fixture
    Verify {
        /// Bank identifier (e.g. icici)
        #[arg(long)]
        bank: String,

        /// Fixture root directory (overrides config)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Emit the verdict as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Verify {
            bank,
            data_dir,
            json,
        } => {
            let data_dir = data_dir.unwrap_or_else(|| config.data_dir.clone());
            let registry = build_registry(&config);
            verify_fixture(&registry, &data_dir, &bank, json)
        }
    }
}

fn build_registry(config: &config::Config) -> ParserRegistry {
    let mut registry = ParserRegistry::builtin();
    for (bank, spellings) in &config.aliases {
        for spelling in spellings {
            registry.add_alias(bank, spelling);
        }
    }
    registry
}

fn verify_fixture(
    registry: &ParserRegistry,
    data_dir: &Path,
    bank: &str,
    as_json: bool,
) -> Result<()> {
    let fixture = Fixture::for_bank(data_dir, bank);

    match run(registry, &fixture) {
        Ok(report) => {
            if as_json {
                let verdict = json!({
                    "bank": report.bank,
                    "verdict": "pass",
                    "rows": report.rows,
                    "columns": report.columns,
                });
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                println!(
                    "PASS {} ({} rows, columns: {})",
                    report.bank,
                    report.rows,
                    report.columns.join(", ")
                );
            }
            Ok(())
        }
        Err(err) => {
            if as_json {
                let mut verdict = json!({
                    "bank": bank,
                    "verdict": "fail",
                    "kind": err.kind(),
                    "detail": err.to_string(),
                });
                if let HarnessError::Nonconformance(nc) = &err {
                    verdict["diagnostics"] = serde_json::to_value(nc)?;
                }
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                eprintln!("FAIL {bank}: {err}");
            }
            std::process::exit(1);
        }
    }
}
