// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{
    collections::BTreeMap,
    io::{self, Write},
    sync::{Arc, Mutex},
};

use pintrace_common::{SyscallEntry, SyscallExit, ThreadId, SYSCALL_ARGS};

use crate::{
    correlator::{Correlator, TraceOptions},
    memory::MemoryReader,
    sink::TraceSink,
};

mod basic_io;
mod filesystem;
mod process;

/// Tracee memory made of a few byte regions.
#[derive(Clone, Debug, Default)]
pub struct FakeMemory {
    regions: BTreeMap<u64, Vec<u8>>,
}

impl FakeMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, addr: u64, bytes: &[u8]) -> Self {
        self.regions.insert(addr, bytes.to_vec());
        self
    }
}

impl MemoryReader for FakeMemory {
    fn read(&self, addr: u64, buf: &mut [u8]) -> io::Result<usize> {
        let (start, bytes) = self
            .regions
            .range(..=addr)
            .next_back()
            .ok_or_else(|| io::Error::from_raw_os_error(libc::EFAULT))?;

        let offset = (addr - start) as usize;
        if offset >= bytes.len() {
            return Err(io::Error::from_raw_os_error(libc::EFAULT));
        }

        let n = buf.len().min(bytes.len() - offset);
        buf[..n].copy_from_slice(&bytes[offset..offset + n]);
        Ok(n)
    }
}

/// Cloneable in-memory output.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn correlator(options: TraceOptions) -> (Correlator, SharedBuffer) {
    let output = SharedBuffer::default();
    let sink = Arc::new(TraceSink::new(output.clone()));
    (Correlator::new(sink, options), output)
}

/// One event as the instrumentation host would deliver it.
pub enum Event {
    Entry(SyscallEntry),
    Exit(SyscallExit),
    /// A non-leader thread exec'd and took over the leader's id.
    Exec { former: ThreadId, tid: ThreadId },
}

impl Event {
    pub fn feed(&self, correlator: &Correlator, memory: &dyn MemoryReader) {
        match self {
            Event::Entry(entry) => correlator.on_syscall_entry(entry, memory),
            Event::Exit(exit) => correlator.on_syscall_exit(exit, memory),
            Event::Exec { former, tid } => correlator.on_thread_exec(*former, *tid),
        }
    }
}

pub fn enter(tid: u64, syscall_nr: i64, args: [u64; SYSCALL_ARGS]) -> Event {
    Event::Entry(SyscallEntry {
        tid: ThreadId(tid),
        ip: 0x401000,
        syscall_nr,
        args,
    })
}

pub fn leave(tid: u64, return_value: i64) -> Event {
    Event::Exit(SyscallExit {
        tid: ThreadId(tid),
        return_value,
    })
}

pub fn exec(former: u64, tid: u64) -> Event {
    Event::Exec {
        former: ThreadId(former),
        tid: ThreadId(tid),
    }
}

#[macro_export]
macro_rules! syscall_test {
    ($name:ident, $memory:expr, [$($event:expr),* $(,)?], $expected:expr) => {
        $crate::syscall_test!($name, ::std::default::Default::default(), $memory, [$($event),*], $expected);
    };
    ($name:ident, $options:expr, $memory:expr, [$($event:expr),* $(,)?], $expected:expr) => {
        #[test]
        fn $name() {
            let memory = $memory;
            let (correlator, output) = $crate::tests::correlator($options);

            $($event.feed(&correlator, &memory);)*

            assert_eq!(output.contents().as_str(), $expected);
        }
    };
}

syscall_test!(
    parse_generic_syscall,
    crate::memory::NoMemory,
    [
        enter(1234, 9999, [0, 1, 2, 3, 4, 5]),
        leave(1234, 42),
    ],
    "syscall_9999(0x0, 0x1, 0x2, 0x3, 0x4, 0x5) = 0x2A\n"
);
