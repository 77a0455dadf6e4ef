mod cli;
mod commands;
mod config;
mod errors;
mod ion_types;
mod render;
mod sequence;

use pepfrag::IonType;
use std::process::ExitCode;
use tracing::subscriber::set_global_default;
use tracing::{
    debug,
    error,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

use crate::cli::parse_args_from;
use crate::commands::main_fragment;

// mimalloc seems to work better for windows
#[cfg(target_os = "windows")]
use mimalloc::MiMalloc;

#[cfg(target_os = "windows")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    // stdout is reserved for the fragment table
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    set_global_default(subscriber).expect("Setting default subscriber failed");

    let ion_types = IonType::names();
    debug!("Known ion types: {:?}", ion_types);
    let args = parse_args_from(std::env::args_os(), &ion_types).unwrap_or_else(|e| e.exit());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match main_fragment(args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
