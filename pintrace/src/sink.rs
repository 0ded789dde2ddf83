// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

use anyhow::Context as _;
use log::{debug, error};

/// Where the trace goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stderr,
    File(PathBuf),
}

enum SinkState {
    Open(Box<dyn Write + Send>),
    /// A write failed; the error was reported and further output is dropped.
    Failed,
    Closed,
}

/// Owned trace output. Every line is written and flushed under a single lock, so lines
/// coming from different threads never interleave and survive the tracee dying right
/// after a call.
pub struct TraceSink {
    state: Mutex<SinkState>,
}

impl TraceSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        TraceSink {
            state: Mutex::new(SinkState::Open(Box::new(writer))),
        }
    }

    pub fn open(target: &OutputTarget) -> anyhow::Result<Self> {
        match target {
            OutputTarget::Stderr => Ok(TraceSink::new(io::stderr())),
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?;
                debug!("writing trace to {}", path.display());
                Ok(TraceSink::new(BufWriter::new(file)))
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write_line(&self, line: &str) {
        let mut state = self.lock();

        let SinkState::Open(writer) = &mut *state else {
            return;
        };

        let result = writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.flush());

        if let Err(e) = result {
            error!("Writing trace output failed, discarding further output: {e}");
            *state = SinkState::Failed;
        }
    }

    /// Flushes and closes the output. Only the first call has any effect.
    pub fn shutdown(&self) {
        let mut state = self.lock();

        if let SinkState::Open(writer) = &mut *state {
            if let Err(e) = writer.flush() {
                error!("Flushing trace output failed: {e}");
            }
        }

        // Dropping the writer closes it.
        *state = SinkState::Closed;
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        matches!(*self.lock(), SinkState::Open(_))
    }
}
