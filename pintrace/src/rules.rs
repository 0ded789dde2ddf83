// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use pintrace_common::{syscalls, SyscallDescriptor, SYSCALL_ARGS};

/// How a single syscall argument is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeKind {
    /// `0x` followed by the uppercase hex value of the register.
    Raw,
    /// NUL-terminated string.
    FilePath,
    /// Input buffer whose length is given by the argument at the given index.
    Buffer(usize),
    /// Output buffer filled by the kernel, only readable once the call returned. Its
    /// capacity is the argument at the given index, its useful size the return value.
    OutBuffer(usize),
    Prot,
    MmapFlags,
    OpenFlags,
    /// Permission bits in octal. When an [`DecodeKind::OpenFlags`] argument precedes it,
    /// only shown if those flags request a mode.
    Mode,
}

impl DecodeKind {
    /// Whether the argument can only be rendered after the syscall returned.
    pub fn is_deferred(&self) -> bool {
        matches!(self, DecodeKind::OutBuffer(_))
    }
}

/// Ordered decode kinds for the arguments of one syscall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeRule {
    pub args: &'static [DecodeKind],
    /// `false` for calls that never produce an exit event (thread or process exit).
    pub returns: bool,
}

use DecodeKind::*;

static RAW_ARGS: [DecodeKind; SYSCALL_ARGS] = [Raw; SYSCALL_ARGS];

const fn rule(args: &'static [DecodeKind]) -> DecodeRule {
    DecodeRule {
        args,
        returns: true,
    }
}

const EXIT: DecodeRule = DecodeRule {
    args: &[Raw],
    returns: false,
};

static RULES: &[(i64, DecodeRule)] = &[
    (syscalls::SYS_read, rule(&[Raw, OutBuffer(2), Raw])),
    (syscalls::SYS_write, rule(&[Raw, Buffer(2), Raw])),
    (syscalls::SYS_pread64, rule(&[Raw, OutBuffer(2), Raw, Raw])),
    (syscalls::SYS_pwrite64, rule(&[Raw, Buffer(2), Raw, Raw])),
    (syscalls::SYS_openat, rule(&[Raw, FilePath, OpenFlags, Mode])),
    (syscalls::SYS_mmap, rule(&[Raw, Raw, Prot, MmapFlags, Raw, Raw])),
    (syscalls::SYS_mprotect, rule(&[Raw, Raw, Prot])),
    (syscalls::SYS_pkey_mprotect, rule(&[Raw, Raw, Prot, Raw])),
    (syscalls::SYS_execve, rule(&[FilePath, Raw, Raw])),
    (syscalls::SYS_chdir, rule(&[FilePath])),
    (syscalls::SYS_getcwd, rule(&[OutBuffer(1), Raw])),
    (syscalls::SYS_truncate, rule(&[FilePath, Raw])),
    (syscalls::SYS_faccessat, rule(&[Raw, FilePath, Raw])),
    (syscalls::SYS_mkdirat, rule(&[Raw, FilePath, Mode])),
    (syscalls::SYS_unlinkat, rule(&[Raw, FilePath, Raw])),
    (syscalls::SYS_fchmodat, rule(&[Raw, FilePath, Mode])),
    (syscalls::SYS_newfstatat, rule(&[Raw, FilePath, Raw, Raw])),
    (syscalls::SYS_readlinkat, rule(&[Raw, FilePath, OutBuffer(3), Raw])),
    (syscalls::SYS_memfd_create, rule(&[FilePath, Raw])),
    (syscalls::SYS_exit, EXIT),
    (syscalls::SYS_exit_group, EXIT),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_open, rule(&[FilePath, OpenFlags, Mode])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_creat, rule(&[FilePath, Mode])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_access, rule(&[FilePath, Raw])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_stat, rule(&[FilePath, Raw])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_lstat, rule(&[FilePath, Raw])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_mkdir, rule(&[FilePath, Mode])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_rmdir, rule(&[FilePath])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_unlink, rule(&[FilePath])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_chmod, rule(&[FilePath, Mode])),
    #[cfg(target_arch = "x86_64")]
    (syscalls::SYS_readlink, rule(&[FilePath, OutBuffer(2), Raw])),
];

/// Returns the decode rule for a syscall. Syscalls without a bespoke rule render each of
/// their arguments raw.
pub fn rule_for(descriptor: &SyscallDescriptor) -> DecodeRule {
    RULES
        .iter()
        .find(|(nr, _)| *nr == descriptor.nr)
        .map(|(_, rule)| *rule)
        .unwrap_or_else(|| rule(&RAW_ARGS[..descriptor.arg_count.min(SYSCALL_ARGS)]))
}
