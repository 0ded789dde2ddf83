// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::io::{self, IoSliceMut};

use log::trace;
use nix::{
    sys::uio::{process_vm_readv, RemoteIoVec},
    unistd::Pid,
};

const PAGE_SIZE: usize = 4096;

/// Access to the address space of the traced process.
pub trait MemoryReader {
    /// Reads up to `buf.len()` bytes starting at `addr`. Returns how many bytes were read,
    /// which may be less than requested when the range crosses into unmapped memory.
    fn read(&self, addr: u64, buf: &mut [u8]) -> io::Result<usize>;
}

/// Reads a remote process's memory with `process_vm_readv(2)`.
#[derive(Clone, Copy, Debug)]
pub struct ProcessMemory {
    pid: Pid,
}

impl ProcessMemory {
    pub fn new(pid: Pid) -> Self {
        ProcessMemory { pid }
    }
}

impl MemoryReader for ProcessMemory {
    fn read(&self, addr: u64, buf: &mut [u8]) -> io::Result<usize> {
        let remote = [RemoteIoVec {
            base: addr as usize,
            len: buf.len(),
        }];
        let mut local = [IoSliceMut::new(buf)];

        process_vm_readv(self.pid, &mut local, &remote).map_err(io::Error::from)
    }
}

/// A reader for hosts that cannot look into the tracee; every read fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMemory;

impl MemoryReader for NoMemory {
    fn read(&self, _addr: u64, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
    }
}

/// Reads at most `max_len` bytes from `addr`, stopping before the first NUL byte.
///
/// Reads are split at page boundaries so that a string ending right before an unmapped
/// page can still be read. Whatever was read before a failure is returned; a failure on
/// the very first page yields an empty vector.
pub fn read_cstring(memory: &dyn MemoryReader, addr: u64, max_len: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut cursor = addr;

    while out.len() < max_len {
        let page_left = PAGE_SIZE - (cursor as usize % PAGE_SIZE);
        let chunk_len = page_left.min(max_len - out.len());
        let mut chunk = vec![0u8; chunk_len];

        let read = match memory.read(cursor, &mut chunk) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) => {
                trace!("reading tracee memory at 0x{cursor:x} failed: {e}");
                break;
            }
        };

        if let Some(nul) = chunk[..read].iter().position(|&b| b == 0) {
            out.extend_from_slice(&chunk[..nul]);
            break;
        }

        out.extend_from_slice(&chunk[..read]);
        if read < chunk_len {
            break;
        }
        cursor = match cursor.checked_add(read as u64) {
            Some(next) => next,
            None => break,
        };
    }

    out
}
