// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::collections::HashSet;

use indoc::indoc;
use pintrace_common::syscalls::{
    SYS_clone, SYS_execve, SYS_exit, SYS_exit_group, SYS_getpid, SYS_memfd_create, SYS_write,
};

use crate::{
    correlator::TraceOptions,
    memory::NoMemory,
    syscall_test,
    tests::{enter, leave, FakeMemory},
};

syscall_test!(
    parse_exit,
    NoMemory,
    [enter(77, SYS_exit, [42, 0, 0, 0, 0, 0])],
    "exit(42) = ?\n"
);

syscall_test!(
    parse_exit_group_negative_status,
    NoMemory,
    [enter(77, SYS_exit_group, [(-1i64) as u64, 0, 0, 0, 0, 0])],
    "exit_group(-1) = ?\n"
);

syscall_test!(
    parse_exit_after_write,
    FakeMemory::new().with(0x2000, b"bye\n"),
    [
        enter(77, SYS_write, [1, 0x2000, 4, 0, 0, 0]),
        leave(77, 4),
        enter(77, SYS_exit_group, [0, 0, 0, 0, 0, 0]),
    ],
    indoc! {r#"
        write(0x1, "bye\n", 0x4) = 0x4
        exit_group(0) = ?
    "#}
);

syscall_test!(
    parse_execve,
    FakeMemory::new().with(0x1000, b"/usr/bin/env\0"),
    [
        enter(77, SYS_execve, [0x1000, 0x7ffe0010, 0x7ffe0040, 0, 0, 0]),
        leave(77, 0),
    ],
    "execve(\"/usr/bin/env\", 0x7FFE0010, 0x7FFE0040) = 0x0\n"
);

syscall_test!(
    parse_execve_missing_binary,
    FakeMemory::new().with(0x1000, b"/nonexistent\0"),
    [
        enter(77, SYS_execve, [0x1000, 0x7ffe0010, 0x7ffe0040, 0, 0, 0]),
        leave(77, -(libc::ENOENT as i64)),
    ],
    "execve(\"/nonexistent\", 0x7FFE0010, 0x7FFE0040) = -2 (error)\n"
);

syscall_test!(
    parse_memfd_create,
    FakeMemory::new().with(0x1000, b"wayland-shm\0"),
    [
        enter(77, SYS_memfd_create, [0x1000, libc::MFD_CLOEXEC as u64, 0, 0, 0, 0]),
        leave(77, 5),
    ],
    "memfd_create(\"wayland-shm\", 0x1) = 0x5\n"
);

syscall_test!(
    parse_getpid,
    NoMemory,
    [enter(77, SYS_getpid, [0xdead, 0, 0, 0, 0, 0]), leave(77, 77)],
    "getpid() = 0x4D\n"
);

syscall_test!(
    parse_clone_raw,
    NoMemory,
    [
        enter(77, SYS_clone, [0x3d0f00, 0x7f10cafe0000, 0, 0, 0, 0]),
        leave(77, 78),
    ],
    "clone(0x3D0F00, 0x7F10CAFE0000, 0x0, 0x0, 0x0) = 0x4E\n"
);

syscall_test!(
    filtered_exit_is_silent,
    TraceOptions {
        syscalls: Some(HashSet::from([SYS_write])),
        ..Default::default()
    },
    NoMemory,
    [enter(77, SYS_exit, [1, 0, 0, 0, 0, 0])],
    ""
);
