// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::{trace, warn};
use pintrace_common::{lookup, SyscallDescriptor, SyscallEntry, SyscallExit, ThreadId, SYSCALL_ARGS};

use crate::{
    argf,
    events::{push_entry_args, push_exit_args, ArgContext},
    finish,
    formatting::{Formatter, Outcome, SyscallFormatter},
    memory::MemoryReader,
    rules::{rule_for, DecodeRule},
    sink::TraceSink,
};

const SHARDS: usize = 16;

/// Settings that change what the trace looks like.
#[derive(Clone, Debug, Default)]
pub struct TraceOptions {
    /// Prefix every line with the id of the thread that made the call.
    pub show_tid: bool,
    /// Truncate decoded strings longer than this.
    pub string_limit: Option<usize>,
    /// Only print these syscalls. `None` prints everything.
    pub syscalls: Option<HashSet<i64>>,
}

/// A call that entered the kernel and has not reported back yet.
#[derive(Debug)]
struct PendingCall {
    syscall_nr: i64,
    ip: u64,
    args: [u64; SYSCALL_ARGS],
    rule: DecodeRule,
    /// The partially rendered line and the index of the first argument still to render.
    /// `None` when the call is filtered out of the trace.
    line: Option<(SyscallFormatter, Option<usize>)>,
}

impl PendingCall {
    /// Closes the line of a call whose exit will never be seen.
    fn abandon(self, suffix: &str) -> Option<String> {
        let (sf, _) = self.line?;
        Some(finish!(sf, Outcome::Unknown, suffix))
    }
}

/// Matches syscall entry and exit events per thread and turns each pair into a trace line.
pub struct Correlator {
    pending: Box<[Mutex<HashMap<ThreadId, PendingCall>>]>,
    formatter: Formatter,
    options: TraceOptions,
    sink: Arc<TraceSink>,
}

impl Correlator {
    pub fn new(sink: Arc<TraceSink>, options: TraceOptions) -> Self {
        Correlator {
            pending: (0..SHARDS).map(|_| Mutex::new(HashMap::new())).collect(),
            formatter: Formatter::new(options.show_tid),
            options,
            sink,
        }
    }

    fn shard(&self, tid: ThreadId) -> MutexGuard<'_, HashMap<ThreadId, PendingCall>> {
        self.pending[(tid.0 % SHARDS as u64) as usize]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn is_traced(&self, syscall_nr: i64) -> bool {
        self.options
            .syscalls
            .as_ref()
            .map_or(true, |set| set.contains(&syscall_nr))
    }

    fn arg_context<'a>(
        &self,
        rule: DecodeRule,
        args: &'a [u64; SYSCALL_ARGS],
        memory: &'a dyn MemoryReader,
    ) -> ArgContext<'a> {
        ArgContext {
            rule,
            args,
            memory,
            string_limit: self.options.string_limit,
        }
    }

    fn non_returning_line(&self, entry: &SyscallEntry, descriptor: &SyscallDescriptor) -> String {
        let mut sf = self.formatter.push_syscall(entry.tid, &descriptor.name);
        if descriptor.arg_count > 0 {
            argf!(sf, "{}", entry.args[0] as i64);
        }
        finish!(sf, Outcome::Unknown)
    }

    /// Handles a thread entering a syscall.
    pub fn on_syscall_entry(&self, entry: &SyscallEntry, memory: &dyn MemoryReader) {
        let descriptor = lookup(entry.syscall_nr);
        let rule = rule_for(&descriptor);
        let traced = self.is_traced(entry.syscall_nr);

        trace!(
            "entry tid={} nr={} ({}) ip=0x{:x}",
            entry.tid,
            entry.syscall_nr,
            descriptor.name,
            entry.ip
        );

        if !rule.returns {
            // No exit event will follow, so the line is complete right away. A call that
            // was still pending for this thread can no longer be matched either.
            let stale = self.shard(entry.tid).remove(&entry.tid);
            if let Some(stale) = stale {
                self.report_unmatched_entry(entry.tid, stale);
            }

            if traced {
                self.sink
                    .write_line(&self.non_returning_line(entry, &descriptor));
            }
            return;
        }

        let line = traced.then(|| {
            let mut sf = self.formatter.push_syscall(entry.tid, &descriptor.name);
            let ctx = self.arg_context(rule, &entry.args, memory);
            let resume_at = push_entry_args(&mut sf, &ctx);
            (sf, resume_at)
        });

        let call = PendingCall {
            syscall_nr: entry.syscall_nr,
            ip: entry.ip,
            args: entry.args,
            rule,
            line,
        };

        let stale = self.shard(entry.tid).insert(entry.tid, call);
        if let Some(stale) = stale {
            self.report_unmatched_entry(entry.tid, stale);
        }
    }

    fn report_unmatched_entry(&self, tid: ThreadId, stale: PendingCall) {
        warn!(
            "thread {tid} entered a new syscall while syscall {} (ip 0x{:x}) was still pending",
            stale.syscall_nr, stale.ip
        );
        if let Some(line) = stale.abandon("(no matching exit)") {
            self.sink.write_line(&line);
        }
    }

    /// Handles a thread returning from a syscall.
    pub fn on_syscall_exit(&self, exit: &SyscallExit, memory: &dyn MemoryReader) {
        let call = self.shard(exit.tid).remove(&exit.tid);

        let Some(call) = call else {
            warn!(
                "thread {} returned {} without a matching syscall entry",
                exit.tid, exit.return_value
            );
            let sf = self.formatter.push_syscall(exit.tid, "<unknown>");
            self.sink.write_line(&finish!(
                sf,
                Outcome::Returned(exit.return_value),
                "(no matching entry)"
            ));
            return;
        };

        trace!(
            "exit tid={} nr={} ret={}",
            exit.tid,
            call.syscall_nr,
            exit.return_value
        );

        let Some((mut sf, resume_at)) = call.line else {
            return;
        };

        if let Some(from) = resume_at {
            let ctx = self.arg_context(call.rule, &call.args, memory);
            push_exit_args(&mut sf, &ctx, from, exit.return_value);
        }

        self.sink
            .write_line(&finish!(sf, Outcome::Returned(exit.return_value)));
    }

    /// Handles a thread going away. Whatever it was blocked in will never return.
    pub fn on_thread_exit(&self, tid: ThreadId) {
        let call = self.shard(tid).remove(&tid);
        if let Some(line) = call.and_then(|call| call.abandon("(unfinished)")) {
            self.sink.write_line(&line);
        }
    }

    /// Handles a non-leader thread `former` calling execve and taking over the id `tid` of
    /// its thread group leader. The leader is gone, so whatever it was blocked in is closed,
    /// and the execve still pending under `former` will return as `tid`.
    pub fn on_thread_exec(&self, former: ThreadId, tid: ThreadId) {
        if former == tid {
            return;
        }

        self.on_thread_exit(tid);

        let call = self.shard(former).remove(&former);
        if let Some(call) = call {
            trace!("moving pending syscall {} from thread {former} to {tid}", call.syscall_nr);
            self.shard(tid).insert(tid, call);
        }
    }

    /// Closes out every pending call and shuts the sink down.
    pub fn shutdown(&self) {
        for shard in self.pending.iter() {
            let drained: Vec<_> = shard
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .drain()
                .collect();

            for (_, call) in drained {
                if let Some(line) = call.abandon("(unfinished)") {
                    self.sink.write_line(&line);
                }
            }
        }

        self.sink.shutdown();
    }

    #[cfg(test)]
    pub(crate) fn pending_calls(&self) -> usize {
        self.pending
            .iter()
            .map(|shard| shard.lock().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }
}
