// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! ptrace(2) based instrumentation host.
//!
//! Every thread of the tracee stops twice per syscall. The kernel does not say which of
//! the two stops it is, so the host keeps track of the threads currently inside a syscall
//! and hands each stop to the [`Correlator`] as either an entry or an exit event.

use std::{
    collections::HashSet,
    ffi::{CString, OsString},
    fs,
    os::unix::ffi::OsStrExt as _,
};

use anyhow::{anyhow, bail, Context as _, Result};
use log::{debug, trace, warn};
use nix::{
    errno::Errno,
    sys::{
        ptrace::{self, Event, Options},
        signal::{raise, Signal},
        wait::{waitpid, WaitPidFlag, WaitStatus},
    },
    unistd::{execvp, fork, ForkResult, Pid},
};
use pintrace_common::{SyscallEntry, SyscallExit, ThreadId};

use crate::{correlator::Correlator, memory::ProcessMemory};

/// What to trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Run a command (program and arguments) under the tracer.
    Command(Vec<OsString>),
    /// Attach to every thread of a running process.
    Pid(u32),
}

#[cfg(target_arch = "x86_64")]
fn syscall_entry(tid: ThreadId, regs: &libc::user_regs_struct) -> SyscallEntry {
    SyscallEntry {
        tid,
        ip: regs.rip,
        syscall_nr: regs.orig_rax as i64,
        args: [regs.rdi, regs.rsi, regs.rdx, regs.r10, regs.r8, regs.r9],
    }
}

#[cfg(target_arch = "x86_64")]
fn syscall_exit(tid: ThreadId, regs: &libc::user_regs_struct) -> SyscallExit {
    SyscallExit {
        tid,
        return_value: regs.rax as i64,
    }
}

#[cfg(target_arch = "aarch64")]
fn syscall_entry(tid: ThreadId, regs: &libc::user_regs_struct) -> SyscallEntry {
    SyscallEntry {
        tid,
        ip: regs.pc,
        syscall_nr: regs.regs[8] as i64,
        args: [
            regs.regs[0],
            regs.regs[1],
            regs.regs[2],
            regs.regs[3],
            regs.regs[4],
            regs.regs[5],
        ],
    }
}

#[cfg(target_arch = "aarch64")]
fn syscall_exit(tid: ThreadId, regs: &libc::user_regs_struct) -> SyscallExit {
    SyscallExit {
        tid,
        return_value: regs.regs[0] as i64,
    }
}

/// Exit code the tracer reports for a terminated tracee, shell style.
pub fn exit_code(status: &WaitStatus) -> Option<i32> {
    match *status {
        WaitStatus::Exited(_, code) => Some(code),
        WaitStatus::Signaled(_, signal, _) => Some(128 + signal as i32),
        _ => None,
    }
}

/// Lists the threads of a process.
pub fn task_ids(pid: Pid) -> Result<Vec<Pid>> {
    let dir = format!("/proc/{pid}/task");
    let mut tids = Vec::new();

    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to list threads in {dir}"))? {
        let entry = entry?;
        if let Some(tid) = entry.file_name().to_str().and_then(|s| s.parse().ok()) {
            tids.push(Pid::from_raw(tid));
        }
    }

    tids.sort_unstable();
    Ok(tids)
}

fn spawn(command: &[OsString]) -> Result<Pid> {
    let argv = command
        .iter()
        .map(|arg| CString::new(arg.as_bytes()))
        .collect::<Result<Vec<_>, _>>()
        .context("Command arguments must not contain NUL bytes")?;

    let Some(program) = argv.first() else {
        bail!("No command to run");
    };

    // Safety: the child only calls async-signal-safe functions before exec, everything
    // it needs was allocated above.
    match unsafe { fork() }.context("Failed to fork a new process")? {
        ForkResult::Parent { child } => {
            debug!("started child {child} for {}", program.to_string_lossy());
            Ok(child)
        }
        ForkResult::Child => {
            if ptrace::traceme().is_err() {
                std::process::exit(126);
            }
            // Wait for the tracer to set its options before exec.
            let _ = raise(Signal::SIGSTOP);
            let err = match execvp(program, &argv) {
                Ok(never) => match never {},
                Err(e) => e,
            };
            eprintln!("Failed to execute {}: {err}", program.to_string_lossy());
            std::process::exit(127);
        }
    }
}

fn attach(pid: Pid) -> Result<()> {
    let mut attached = HashSet::new();

    // Threads may be created while we attach; keep going until the list settles.
    loop {
        let mut progress = false;

        for tid in task_ids(pid)? {
            if !attached.insert(tid) {
                continue;
            }

            match ptrace::attach(tid) {
                Ok(()) => {
                    debug!("attached to thread {tid}");
                    progress = true;
                }
                Err(Errno::ESRCH) => debug!("thread {tid} went away before attaching"),
                Err(e) => {
                    return Err(anyhow!(e))
                        .with_context(|| format!("Failed to attach to thread {tid}"))
                }
            }
        }

        if !progress {
            break;
        }
    }

    if attached.is_empty() {
        bail!("Process {pid} has no threads to attach to");
    }

    Ok(())
}

struct Tracer<'a> {
    correlator: &'a Correlator,
    root: Pid,
    options: Options,
    /// Threads whose initial stop was already consumed.
    seen: HashSet<Pid>,
    /// Threads stopped between syscall entry and exit.
    in_syscall: HashSet<Pid>,
    exit_code: i32,
}

impl Tracer<'_> {
    fn resume(&self, pid: Pid, signal: Option<Signal>) -> Result<()> {
        match ptrace::syscall(pid, signal) {
            Ok(()) | Err(Errno::ESRCH) => Ok(()),
            Err(e) => Err(anyhow!(e)).with_context(|| format!("Failed to resume thread {pid}")),
        }
    }

    fn on_stop(&mut self, pid: Pid, signal: Signal) -> Result<()> {
        if signal == Signal::SIGSTOP && self.seen.insert(pid) {
            trace!("initial stop of thread {pid}");
            match ptrace::setoptions(pid, self.options) {
                Ok(()) | Err(Errno::ESRCH) => {}
                Err(e) => {
                    return Err(anyhow!(e))
                        .with_context(|| format!("Failed to set ptrace options on {pid}"))
                }
            }
            return self.resume(pid, None);
        }

        trace!("thread {pid} got {signal}, delivering it");
        self.resume(pid, Some(signal))
    }

    fn on_syscall_stop(&mut self, pid: Pid) -> Result<()> {
        let regs = match ptrace::getregs(pid) {
            Ok(regs) => regs,
            Err(Errno::ESRCH) => return Ok(()),
            Err(e) => {
                return Err(anyhow!(e))
                    .with_context(|| format!("Failed to read registers of {pid}"))
            }
        };

        let tid = ThreadId::from(pid.as_raw());
        let memory = ProcessMemory::new(pid);

        if self.in_syscall.remove(&pid) {
            self.correlator
                .on_syscall_exit(&syscall_exit(tid, &regs), &memory);
        } else {
            self.in_syscall.insert(pid);
            self.correlator
                .on_syscall_entry(&syscall_entry(tid, &regs), &memory);
        }

        self.resume(pid, None)
    }

    fn on_event(&mut self, pid: Pid, event: i32) -> Result<()> {
        if event == Event::PTRACE_EVENT_CLONE as i32 {
            match ptrace::getevent(pid) {
                Ok(new_tid) => debug!("thread {pid} created thread {new_tid}"),
                Err(e) => warn!("could not get the id of the thread created by {pid}: {e}"),
            }
        } else if event == Event::PTRACE_EVENT_EXEC as i32 {
            // A non-leader thread calling execve takes over the leader's id. The leader
            // itself vanishes without an exit notification.
            match ptrace::getevent(pid) {
                Ok(former) => {
                    let former = Pid::from_raw(former as i32);
                    if former != pid {
                        debug!("thread {former} exec'd and became {pid}");
                        self.seen.remove(&former);
                        self.in_syscall.remove(&former);
                        self.in_syscall.insert(pid);
                        self.correlator.on_thread_exec(
                            ThreadId::from(former.as_raw()),
                            ThreadId::from(pid.as_raw()),
                        );
                    }
                }
                Err(e) => warn!("could not get the former id of exec'ing thread {pid}: {e}"),
            }
        }

        self.resume(pid, None)
    }

    fn forget(&mut self, pid: Pid, status: &WaitStatus) {
        self.seen.remove(&pid);
        self.in_syscall.remove(&pid);
        self.correlator.on_thread_exit(ThreadId::from(pid.as_raw()));

        if pid == self.root {
            if let Some(code) = exit_code(status) {
                debug!("traced process {pid} finished with {code}");
                self.exit_code = code;
            }
        }
    }

    fn run(&mut self) -> Result<i32> {
        loop {
            let status = match waitpid(None::<Pid>, Some(WaitPidFlag::__WALL)) {
                Ok(status) => status,
                Err(Errno::EINTR) => continue,
                Err(Errno::ECHILD) => break,
                Err(e) => return Err(anyhow!(e)).context("waitpid failed"),
            };

            match status {
                WaitStatus::Stopped(pid, signal) => self.on_stop(pid, signal)?,
                WaitStatus::PtraceSyscall(pid) => self.on_syscall_stop(pid)?,
                WaitStatus::PtraceEvent(pid, _, event) => self.on_event(pid, event)?,
                WaitStatus::Exited(pid, _) | WaitStatus::Signaled(pid, _, _) => {
                    self.forget(pid, &status)
                }
                WaitStatus::Continued(_) | WaitStatus::StillAlive => {}
            }
        }

        debug!("no more threads to trace");
        Ok(self.exit_code)
    }
}

/// Traces `target` until every traced thread is gone, feeding all syscall events to
/// `correlator`. Returns the exit code of the traced process.
pub fn trace(target: &Target, correlator: &Correlator) -> Result<i32> {
    let mut options = Options::PTRACE_O_TRACESYSGOOD
        | Options::PTRACE_O_TRACECLONE
        | Options::PTRACE_O_TRACEEXEC;

    let root = match target {
        Target::Command(command) => {
            // A child we started should not outlive the tracer.
            options |= Options::PTRACE_O_EXITKILL;
            spawn(command)?
        }
        Target::Pid(pid) => {
            let pid = Pid::from_raw(
                i32::try_from(*pid).with_context(|| format!("Invalid process id {pid}"))?,
            );
            attach(pid)?;
            pid
        }
    };

    Tracer {
        correlator,
        root,
        options,
        seen: HashSet::new(),
        in_syscall: HashSet::new(),
        exit_code: 0,
    }
    .run()
}
