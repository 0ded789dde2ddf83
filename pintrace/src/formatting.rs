// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use pintrace_common::ThreadId;

use crate::format_helpers::format_return_value;

/// Push formatted argument to the formatter
#[macro_export]
macro_rules! argf {
    ($sf:expr, $($arg:tt)*) => {
        $sf.push_arg(&format!($($arg)*))
    };
}

/// Push argument to the formatter
#[macro_export]
macro_rules! arg {
    ($sf:expr, $arg:expr) => {
        $sf.push_arg($arg.as_ref())
    };
}

/// Finish formatting with an outcome
#[macro_export]
macro_rules! finish {
    ($sf:expr, $outcome:expr) => {
        $sf.finish($outcome, None)
    };
    ($sf:expr, $outcome:expr, $extra:expr) => {
        $sf.finish($outcome, Some($extra))
    };
}

/// What goes after the `=` of a trace line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Returned(i64),
    /// The call never reported back.
    Unknown,
}

/// Line-level settings shared by every syscall line.
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter {
    show_tid: bool,
}

impl Formatter {
    pub fn new(show_tid: bool) -> Self {
        Formatter { show_tid }
    }

    pub fn push_syscall(&self, tid: ThreadId, syscall_name: &str) -> SyscallFormatter {
        let mut line = String::with_capacity(128);

        if self.show_tid {
            line.push_str("[tid ");
            line.push_str(&tid.to_string());
            line.push_str("] ");
        }

        line.push_str(syscall_name);
        line.push('(');

        SyscallFormatter { line, argc: 0 }
    }
}

/// A single trace line under construction. Nothing reaches the output until
/// [`SyscallFormatter::finish`] hands the complete line back.
#[derive(Debug)]
pub struct SyscallFormatter {
    line: String,
    argc: usize,
}

impl SyscallFormatter {
    pub fn push_arg(&mut self, arg: &str) {
        if self.argc > 0 {
            self.line.push_str(", ");
        }
        self.line.push_str(arg);
        self.argc += 1;
    }

    #[cfg(test)]
    pub(crate) fn argc(&self) -> usize {
        self.argc
    }

    pub fn finish(mut self, outcome: Outcome, suffix: Option<&str>) -> String {
        self.line.push_str(") = ");

        match outcome {
            Outcome::Returned(return_value) => {
                self.line.push_str(&format_return_value(return_value))
            }
            Outcome::Unknown => self.line.push('?'),
        }

        if let Some(suffix) = suffix {
            self.line.push(' ');
            self.line.push_str(suffix);
        }

        self.line.push('\n');
        self.line
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn simple() {
        let formatter = Formatter::new(false);

        let mut sf = formatter.push_syscall(ThreadId(1), "close");
        arg!(sf, "0x1");

        assert_eq!(finish!(sf, Outcome::Returned(0)), "close(0x1) = 0x0\n");
    }

    #[test]
    fn several_args() {
        let formatter = Formatter::default();

        let mut sf = formatter.push_syscall(ThreadId(1), "mprotect");
        argf!(sf, "0x{:X}", 0x7f00u64);
        arg!(sf, "0x1000");
        arg!(sf, "PROT_READ");
        assert_eq!(sf.argc(), 3);

        assert_eq!(
            finish!(sf, Outcome::Returned(-13)),
            "mprotect(0x7F00, 0x1000, PROT_READ) = -13 (error)\n"
        );
    }

    #[test]
    fn no_args_unknown_outcome() {
        let sf = Formatter::new(false).push_syscall(ThreadId(7), "exit");
        assert_eq!(finish!(sf, Outcome::Unknown), "exit() = ?\n");
    }

    #[test]
    fn tid_prefix_and_suffix() {
        let formatter = Formatter::new(true);

        let mut sf = formatter.push_syscall(ThreadId(4242), "read");
        arg!(sf, "0x3");

        assert_eq!(
            finish!(sf, Outcome::Unknown, "(unfinished)"),
            "[tid 4242] read(0x3) = ? (unfinished)\n"
        );
    }
}
