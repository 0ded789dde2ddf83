// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::fmt::Write as _;

use crate::memory::MemoryReader;

/// Longest NUL-terminated string we are willing to pull out of the tracee.
pub const PATH_MAX: usize = libc::PATH_MAX as usize;

pub fn format_hex(value: u64) -> String {
    format!("0x{value:X}")
}

pub fn format_octal(value: u64) -> String {
    format!("{value:o}")
}

/// Formats a syscall result: plain hex on success, signed decimal on error.
pub fn format_return_value(return_value: i64) -> String {
    if return_value >= 0 {
        format!("0x{return_value:X}")
    } else {
        format!("{return_value} (error)")
    }
}

fn has_bits(value: u64, bits: libc::c_int) -> bool {
    let bits = bits as u32 as u64;
    bits != 0 && value & bits == bits
}

pub fn format_prot(prot: u64) -> String {
    if prot == 0 {
        return "PROT_NONE".to_string();
    }

    let defs = [
        (libc::PROT_EXEC, "PROT_EXEC"),
        (libc::PROT_READ, "PROT_READ"),
        (libc::PROT_WRITE, "PROT_WRITE"),
    ];

    defs.iter()
        .filter(|(bit, _)| has_bits(prot, *bit))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join("|")
}

pub fn format_mmap_flags(flags: u64) -> String {
    let mut s = if has_bits(flags, libc::MAP_SHARED) {
        "MAP_SHARED".to_string()
    } else {
        "MAP_PRIVATE".to_string()
    };

    let defs = [
        #[cfg(target_arch = "x86_64")]
        (libc::MAP_32BIT, "MAP_32BIT"),
        (libc::MAP_ANONYMOUS, "MAP_ANONYMOUS"),
        (libc::MAP_DENYWRITE, "MAP_DENYWRITE"),
        (libc::MAP_EXECUTABLE, "MAP_EXECUTABLE"),
        (libc::MAP_FILE, "MAP_FILE"),
        (libc::MAP_FIXED, "MAP_FIXED"),
        (libc::MAP_GROWSDOWN, "MAP_GROWSDOWN"),
        (libc::MAP_HUGETLB, "MAP_HUGETLB"),
        (libc::MAP_LOCKED, "MAP_LOCKED"),
        (libc::MAP_NONBLOCK, "MAP_NONBLOCK"),
        (libc::MAP_NORESERVE, "MAP_NORESERVE"),
        (libc::MAP_POPULATE, "MAP_POPULATE"),
        (libc::MAP_STACK, "MAP_STACK"),
    ];
    for (bit, name) in defs.iter() {
        if has_bits(flags, *bit) {
            s.push('|');
            s.push_str(name);
        }
    }
    s
}

/// Whether open(2)-style flags carry a trailing mode argument.
pub fn open_flags_expect_mode(flags: u64) -> bool {
    has_bits(flags, libc::O_CREAT) || has_bits(flags, libc::O_TMPFILE)
}

/// Formats open(2)-style flags. The second item tells whether the call also takes a
/// permission mode argument.
pub fn format_open_flags(flags: u64) -> (String, bool) {
    let mut s = if has_bits(flags, libc::O_RDWR) {
        "O_RDWR".to_string()
    } else if has_bits(flags, libc::O_WRONLY) {
        "O_WRONLY".to_string()
    } else {
        "O_RDONLY".to_string()
    };

    let flag_defs = [
        (libc::O_APPEND, "O_APPEND"),
        (libc::O_ASYNC, "O_ASYNC"),
        (libc::O_CLOEXEC, "O_CLOEXEC"),
        (libc::O_CREAT, "O_CREAT"),
        (libc::O_DIRECT, "O_DIRECT"),
        (libc::O_DIRECTORY, "O_DIRECTORY"),
        (libc::O_DSYNC, "O_DSYNC"),
        (libc::O_EXCL, "O_EXCL"),
        (libc::O_NOATIME, "O_NOATIME"),
        (libc::O_NOCTTY, "O_NOCTTY"),
        (libc::O_NOFOLLOW, "O_NOFOLLOW"),
        (libc::O_NONBLOCK, "O_NONBLOCK"),
        (libc::O_PATH, "O_PATH"),
        (libc::O_SYNC, "O_SYNC"),
        (libc::O_TMPFILE, "O_TMPFILE"),
        (libc::O_TRUNC, "O_TRUNC"),
    ];
    for (bit, name) in flag_defs.iter() {
        if has_bits(flags, *bit) {
            s.push('|');
            s.push_str(name);
        }
    }

    (s, open_flags_expect_mode(flags))
}

/// Quotes and escapes bytes the way they appear in the trace. Stops at the first NUL.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() + 2);
    s.push('"');
    for &b in bytes.iter().take_while(|&&b| b != 0) {
        match b {
            b'\n' => s.push_str("\\n"),
            b'\t' => s.push_str("\\t"),
            0x20..=0x7e => s.push(b as char),
            _ => {
                let _ = write!(s, "\\x{b:02X}");
            }
        }
    }
    s.push('"');
    s
}

/// Reads and formats a string argument from the tracee's memory.
///
/// `max_len` bounds buffer arguments that come with an explicit length; without it the
/// string runs until the first NUL (capped at [`PATH_MAX`]). `limit` is the user-selected
/// display limit; truncated strings get a trailing `...`.
pub fn format_string(
    memory: &dyn MemoryReader,
    addr: u64,
    max_len: Option<usize>,
    limit: Option<usize>,
) -> String {
    if addr == 0 {
        return "\"\"".to_string();
    }

    let wanted = max_len.unwrap_or(PATH_MAX);

    // One extra byte tells a string that exactly fits the limit from a longer one.
    let (to_read, limit) = match limit {
        Some(limit) if limit < wanted => (limit + 1, Some(limit)),
        _ => (wanted, None),
    };

    let bytes = crate::memory::read_cstring(memory, addr, to_read);

    match limit {
        Some(limit) if bytes.len() > limit => {
            let mut s = escape_bytes(&bytes[..limit]);
            s.push_str("...");
            s
        }
        _ => escape_bytes(&bytes),
    }
}
