// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::fmt;

pub mod syscalls;

pub use syscalls::{lookup, SyscallDescriptor};

/// Maximum number of register arguments a syscall can take.
pub const SYSCALL_ARGS: usize = 6;

/// Opaque identifier of a traced thread, as handed out by the instrumentation host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadId(pub u64);

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ThreadId {
    fn from(value: i32) -> Self {
        ThreadId(value as u64)
    }
}

/// Raw data captured right before the kernel runs a syscall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyscallEntry {
    pub tid: ThreadId,
    pub ip: u64,
    pub syscall_nr: i64,
    pub args: [u64; SYSCALL_ARGS],
}

/// Raw data captured right after the kernel returned from a syscall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyscallExit {
    pub tid: ThreadId,
    pub return_value: i64,
}
