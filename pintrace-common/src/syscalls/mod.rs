// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

#![allow(non_upper_case_globals)]

use std::borrow::Cow;

/// Declares the `SYS_*` constants of an architecture together with the lookup table
/// and the `ALL_SYSCALLS` list. Entries must be given in ascending syscall number order.
macro_rules! declare_syscalls {
    ($($nr:literal => $name:ident($argc:literal)),* $(,)?) => {
        $(pub const $name: i64 = $nr;)*

        pub(crate) static TABLE: &[$crate::syscalls::SyscallInfo] = &[
            $($crate::syscalls::SyscallInfo {
                nr: $nr,
                name: $crate::syscalls::strip_sys_prefix(stringify!($name)),
                arg_count: $argc,
            }),*
        ];

        pub const ALL_SYSCALLS: &[i64] = &[$($nr),*];
    };
}

#[cfg(aarch64)]
mod aarch64;
#[cfg(aarch64)]
pub use aarch64::*;
#[cfg(aarch64)]
use aarch64::TABLE;

#[cfg(x86_64)]
mod x86_64;
#[cfg(x86_64)]
pub use x86_64::*;
#[cfg(x86_64)]
use x86_64::TABLE;

#[cfg(not(any(aarch64, x86_64)))]
compile_error!("Unsupported architecture. Currently only aarch64 and x86_64 are supported.");

/// Static row of the per-architecture syscall table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SyscallInfo {
    pub(crate) nr: i64,
    pub(crate) name: &'static str,
    pub(crate) arg_count: u8,
}

pub(crate) const fn strip_sys_prefix(name: &'static str) -> &'static str {
    let bytes = name.as_bytes();
    if bytes.len() <= 4 {
        return name;
    }
    let (_, rest) = bytes.split_at(4);
    match std::str::from_utf8(rest) {
        Ok(stripped) => stripped,
        Err(_) => name,
    }
}

/// Name and arity of a syscall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyscallDescriptor {
    pub nr: i64,
    pub name: Cow<'static, str>,
    pub arg_count: usize,
}

impl SyscallDescriptor {
    #[cfg(test)]
    fn is_known(&self) -> bool {
        matches!(self.name, Cow::Borrowed(_))
    }
}

fn find(syscall_nr: i64) -> Option<&'static SyscallInfo> {
    TABLE
        .binary_search_by_key(&syscall_nr, |info| info.nr)
        .ok()
        .map(|idx| &TABLE[idx])
}

/// Looks up the descriptor for a syscall number. Numbers missing from the table get a
/// synthetic `syscall_<nr>` descriptor taking the maximum number of arguments.
pub fn lookup(syscall_nr: i64) -> SyscallDescriptor {
    match find(syscall_nr) {
        Some(info) => SyscallDescriptor {
            nr: info.nr,
            name: Cow::Borrowed(info.name),
            arg_count: info.arg_count as usize,
        },
        None => SyscallDescriptor {
            nr: syscall_nr,
            name: Cow::Owned(format!("syscall_{syscall_nr}")),
            arg_count: crate::SYSCALL_ARGS,
        },
    }
}

const ALIASES: &[(&str, &str)] = &[
    ("sigaction", "rt_sigaction"),
    ("sigprocmask", "rt_sigprocmask"),
    ("sigreturn", "rt_sigreturn"),
    ("sigpending", "rt_sigpending"),
    ("sigsuspend", "rt_sigsuspend"),
    ("prlimit", "prlimit64"),
    ("pread", "pread64"),
    ("pwrite", "pwrite64"),
    ("fstatat", "newfstatat"),
];

/// Resolves a syscall name, also accepting the libc-level aliases strace users type.
pub fn syscall_nr_from_name(name: &str) -> Option<i64> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name);

    TABLE.iter().find(|info| info.name == name).map(|info| info.nr)
}
