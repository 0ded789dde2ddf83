// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

pub mod correlator;
pub mod events;
pub mod format_helpers;
pub mod formatting;
pub mod host;
pub mod memory;
pub mod rules;
pub mod sink;

#[cfg(test)]
mod tests;
