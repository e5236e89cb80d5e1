pub mod cli_args;

use clap::Parser;
use cli_args::Cli;
use feelbook_core::{LoggingDestination, init_logging};
use rpassword::prompt_password;
use tracing::info;

const BANNER: &str = r"
  __           _ _                 _
 / _| ___  ___| | |__   ___   ___ | | __
| |_ / _ \/ _ \ | '_ \ / _ \ / _ \| |/ /
|  _|  __/  __/ | |_) | (_) | (_) |   <
|_|  \___|\___|_|_.__/ \___/ \___/|_|\_\
";

pub async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    dispatch(cli).await
}

async fn dispatch(cli: Cli) -> Result<(), String> {
    init_logging(LoggingDestination::FileAndStderr).map_err(|err| err.to_string())?;
    info!("{BANNER}");

    let password = match &cli.password {
        Some(password) => password.clone(),
        None => prompt_password("Password: ")
            .map_err(|err| format!("Failed to read password: {err}"))?,
    };

    if cli.test {
        log_censored_inputs(&cli);
    }

    let run_config = cli.to_run_config(password)?;
    feelbook_core::run(run_config)
        .await
        .map_err(|err| err.to_string())
}

/// Dry-run input dump with the password masked.
fn log_censored_inputs(cli: &Cli) {
    info!(
        username = %cli.username,
        password = "**********",
        activities = ?cli.activities,
        test = cli.test,
        name = ?cli.name,
        time = ?cli.time,
        day = ?cli.day,
        start_time = ?cli.start_time,
        day_offset = ?cli.day_offset,
        "Parsed input"
    );
}
