// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `oac`: a thin demo binary over the job execution subsystem — submit
//! a demo procedure file (or a directory of them), drive it from this
//! terminal, and print its event/log stream. Not a daemon client; every
//! job here runs in-process via `oac-sim`.

mod color;
mod commands;
mod exit_error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "oac", version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH")))]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a demo procedure file to completion, printing its event/log stream.
    Run {
        /// Path to a `.xml`-named demo procedure file.
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Install a tick-progress watchdog with this timeout (0 disables it).
        #[arg(long, default_value_t = 0)]
        tick_timeout_ms: u64,

        /// Instruction indices to arm a breakpoint on before starting.
        #[arg(long = "breakpoint")]
        breakpoints: Vec<u32>,
    },
    /// List the demo procedures found under a file or directory.
    List {
        /// A single procedure file, or a directory to scan recursively.
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run { path, output, tick_timeout_ms, breakpoints } => {
            commands::run::handle(&path, output, tick_timeout_ms, &breakpoints)
        }
        Command::List { path, output } => commands::list::handle(&path, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(exit_err) = err.downcast_ref::<ExitError>() {
                eprintln!("{}: {}", color::error("error"), exit_err.message);
                ExitCode::from(exit_err.code as u8)
            } else {
                eprintln!("{}: {err:#}", color::error("error"));
                ExitCode::FAILURE
            }
        }
    }
}
