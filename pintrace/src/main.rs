// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{collections::HashSet, ffi::OsString, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{CommandFactory as _, Parser};
use log::debug;
use pintrace::{
    correlator::{Correlator, TraceOptions},
    host::{self, Target},
    sink::{OutputTarget, TraceSink},
};
use pintrace_common::syscalls::syscall_nr_from_name;

fn parse_syscall_names(names: &[String]) -> Result<HashSet<i64>, String> {
    names
        .iter()
        .map(|name| {
            syscall_nr_from_name(name).ok_or_else(|| format!("Unknown syscall name: {name}"))
        })
        .collect()
}

#[derive(Parser, Debug)]
#[command(author, version, about, trailing_var_arg = true)]
struct Args {
    /// Syscall(s) to trace (can be repeated or comma-separated). Supports aliases like 'sigaction' for 'rt_sigaction'.
    #[arg(short = 'e', long = "event", value_delimiter = ',', action = clap::ArgAction::Append)]
    syscalls: Vec<String>,

    /// Write the trace to this file instead of stderr
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Truncate decoded strings longer than this
    #[arg(short = 's', long = "string-limit", default_value_t = 32)]
    string_limit: usize,

    /// Prefix every line with the thread id
    #[arg(long = "show-tid")]
    show_tid: bool,

    /// PID to trace
    #[arg(short = 'p', long = "pid", action = clap::ArgAction::Set, conflicts_with = "command")]
    pid: Option<u32>,

    /// Command to run and its arguments
    #[arg(conflicts_with = "pid")]
    command: Option<Vec<OsString>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let syscalls = if !args.syscalls.is_empty() {
        match parse_syscall_names(&args.syscalls) {
            Ok(v) => Some(v),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let target = if let Some(command) = args.command {
        Target::Command(command)
    } else if let Some(pid) = args.pid {
        Target::Pid(pid)
    } else {
        // Print clap's usage message and exit
        Args::command().print_help()?;
        println!();
        std::process::exit(2);
    };

    let output = args.output.map_or(OutputTarget::Stderr, OutputTarget::File);
    let sink = Arc::new(TraceSink::open(&output)?);
    let correlator = Arc::new(Correlator::new(
        sink,
        TraceOptions {
            show_tid: args.show_tid,
            string_limit: Some(args.string_limit),
            syscalls,
        },
    ));

    let tracer = {
        let correlator = correlator.clone();
        tokio::task::spawn_blocking(move || host::trace(&target, &correlator))
    };

    let outcome: Result<i32> = tokio::select! {
        result = tracer => {
            debug!("tracing finished");
            result?
        }
        _ = tokio::signal::ctrl_c() => {
            debug!("interrupted, flushing the trace");
            Ok(130)
        }
    };

    // Closes out pending calls and flushes the output.
    correlator.shutdown();

    std::process::exit(outcome?);
}
