pub mod config;
pub mod load;
pub mod output;

pub use config::{CliError, Config, LogLevel, OutputFormat};
pub use load::{LoadError, load_candidates, load_requester};

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::observability;
use crate::ranking::rank;

/// Loads the inputs named by `config`, ranks the pool and prints it.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let engine = config.engine_config()?;
    let requester = load_requester(&config.requester)?;
    let candidates = load_candidates(&config.candidates)?;

    info!(
        requester_id = %requester.id,
        candidates = candidates.len(),
        answered = requester.preferences.len(),
        "ranking candidates"
    );

    let ranking = rank(&requester, &candidates, &engine, config.rank_options());

    match config.format {
        OutputFormat::Table => {
            output::write_table(out, &ranking).context("failed to write table")?;
        }
        OutputFormat::Json => {
            output::write_json(out, &requester.id, &ranking).context("failed to write JSON")?;
        }
    }
    Ok(())
}

pub fn main() -> Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        // --help / --version and usage errors are printed by clap itself
        Err(CliError::Args(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };

    observability::init(config.log_level.into(), config.json_logs)?;
    info!("Starting roommate-compat v{}", crate::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
