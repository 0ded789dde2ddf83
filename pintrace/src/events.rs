// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use pintrace_common::SYSCALL_ARGS;

use crate::{
    arg,
    format_helpers::{
        format_hex, format_mmap_flags, format_octal, format_open_flags, format_prot,
        format_string, open_flags_expect_mode,
    },
    formatting::SyscallFormatter,
    memory::MemoryReader,
    rules::{DecodeKind, DecodeRule},
};

/// Everything needed to render the arguments of one call.
pub struct ArgContext<'a> {
    pub rule: DecodeRule,
    pub args: &'a [u64; SYSCALL_ARGS],
    pub memory: &'a dyn MemoryReader,
    pub string_limit: Option<usize>,
}

impl ArgContext<'_> {
    fn length_arg(&self, idx: usize) -> usize {
        usize::try_from(self.args[idx]).unwrap_or(usize::MAX)
    }

    /// Whether a mode argument at `idx` should be shown, given the open flags before it.
    fn mode_wanted(&self, idx: usize) -> bool {
        self.rule.args[..idx]
            .iter()
            .rposition(|kind| *kind == DecodeKind::OpenFlags)
            .map(|flags_idx| open_flags_expect_mode(self.args[flags_idx]))
            .unwrap_or(true)
    }

    /// Renders one argument. `None` means the argument is left out of the line.
    fn render(&self, idx: usize, return_value: Option<i64>) -> Option<String> {
        let value = self.args[idx];

        let rendered = match self.rule.args[idx] {
            DecodeKind::Raw => format_hex(value),
            DecodeKind::FilePath => format_string(self.memory, value, None, self.string_limit),
            DecodeKind::Buffer(len_idx) => format_string(
                self.memory,
                value,
                Some(self.length_arg(len_idx)),
                self.string_limit,
            ),
            DecodeKind::OutBuffer(len_idx) => match return_value {
                Some(returned) if returned >= 0 => {
                    let filled = usize::try_from(returned).unwrap_or(usize::MAX);
                    format_string(
                        self.memory,
                        value,
                        Some(filled.min(self.length_arg(len_idx))),
                        self.string_limit,
                    )
                }
                // The kernel wrote nothing useful, show where it would have gone.
                _ => format_hex(value),
            },
            DecodeKind::Prot => format_prot(value),
            DecodeKind::MmapFlags => format_mmap_flags(value),
            DecodeKind::OpenFlags => format_open_flags(value).0,
            DecodeKind::Mode => {
                if !self.mode_wanted(idx) {
                    return None;
                }
                format_octal(value)
            }
        };

        Some(rendered)
    }
}

/// Pushes the arguments that can be decoded before the kernel runs the call. Returns the
/// index of the first argument that has to wait for the exit event, if any.
pub fn push_entry_args(sf: &mut SyscallFormatter, ctx: &ArgContext<'_>) -> Option<usize> {
    for (idx, kind) in ctx.rule.args.iter().enumerate() {
        if kind.is_deferred() {
            return Some(idx);
        }

        if let Some(rendered) = ctx.render(idx, None) {
            arg!(sf, rendered);
        }
    }

    None
}

/// Pushes the remaining arguments, starting at `from`, once the return value is known.
pub fn push_exit_args(
    sf: &mut SyscallFormatter,
    ctx: &ArgContext<'_>,
    from: usize,
    return_value: i64,
) {
    for idx in from..ctx.rule.args.len() {
        if let Some(rendered) = ctx.render(idx, Some(return_value)) {
            arg!(sf, rendered);
        }
    }
}
