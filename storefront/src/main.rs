//! Storefront entry-point: loads settings, installs tracing, and runs one
//! console command.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use ortho_config::OrthoConfig;

use storefront::config::{LogFormat, StorefrontSettings};
use storefront::inbound::cli::{self, Cli, CliError, render_failure};
use storefront::telemetry::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(err) => return report(&err, cli.log_format.unwrap_or_default()),
    };
    let format = match settings.log_format() {
        Ok(format) => format,
        Err(err) => return report(&CliError::from(err), LogFormat::default()),
    };
    if let Err(err) = init_tracing(format, &mut io::stderr().lock()) {
        drop(err);
    }

    match cli::run(&cli, &settings, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, format),
    }
}

fn load_settings(cli: &Cli) -> Result<StorefrontSettings, CliError> {
    let loaded = StorefrontSettings::load_from_iter([OsString::from("storefront")])
        .map_err(|err| CliError::config(err.to_string()))?;
    Ok(cli.apply_to(loaded))
}

fn report(err: &CliError, format: LogFormat) -> ExitCode {
    if let Err(write_err) = render_failure(&mut io::stderr().lock(), err, format) {
        drop(write_err);
    }
    ExitCode::FAILURE
}
