// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use pintrace_common::syscalls::{SYS_close, SYS_pread64, SYS_pwrite64, SYS_read, SYS_write};

use crate::{
    correlator::TraceOptions,
    memory::NoMemory,
    syscall_test,
    tests::{enter, leave, FakeMemory},
};

syscall_test!(
    parse_read,
    FakeMemory::new().with(0x5000, b"root:x:0:0:root:/root:/bin/bash\n"),
    [
        enter(1, SYS_read, [3, 0x5000, 4096, 0, 0, 0]),
        leave(1, 32),
    ],
    "read(0x3, \"root:x:0:0:root:/root:/bin/bash\\n\", 0x1000) = 0x20\n"
);

syscall_test!(
    parse_read_partial,
    FakeMemory::new().with(0x5000, b"abcdefgh"),
    [
        enter(1, SYS_read, [0, 0x5000, 8, 0, 0, 0]),
        leave(1, 3),
    ],
    "read(0x0, \"abc\", 0x8) = 0x3\n"
);

syscall_test!(
    parse_read_eof,
    FakeMemory::new().with(0x5000, b"leftover"),
    [
        enter(1, SYS_read, [0, 0x5000, 8, 0, 0, 0]),
        leave(1, 0),
    ],
    "read(0x0, \"\", 0x8) = 0x0\n"
);

syscall_test!(
    parse_read_error,
    FakeMemory::new(),
    [
        enter(1, SYS_read, [9, 0x5000, 8, 0, 0, 0]),
        leave(1, -(libc::EBADF as i64)),
    ],
    "read(0x9, 0x5000, 0x8) = -9 (error)\n"
);

syscall_test!(
    parse_read_binary,
    FakeMemory::new().with(0x5000, b"\x7fELF\x02\x01\x01\x00"),
    [
        enter(1, SYS_read, [3, 0x5000, 832, 0, 0, 0]),
        leave(1, 832),
    ],
    "read(0x3, \"\\x7FELF\\x02\\x01\\x01\", 0x340) = 0x340\n"
);

syscall_test!(
    parse_pread64,
    FakeMemory::new().with(0x5000, b"data"),
    [
        enter(1, SYS_pread64, [3, 0x5000, 4, 0x100, 0, 0]),
        leave(1, 4),
    ],
    "pread64(0x3, \"data\", 0x4, 0x100) = 0x4\n"
);

syscall_test!(
    parse_write,
    FakeMemory::new().with(0x6000, b"Hello,\tworld!\n"),
    [
        enter(2, SYS_write, [1, 0x6000, 14, 0, 0, 0]),
        leave(2, 14),
    ],
    "write(0x1, \"Hello,\\tworld!\\n\", 0xE) = 0xE\n"
);

syscall_test!(
    parse_write_bounded_by_count,
    FakeMemory::new().with(0x6000, b"Hello, world!\n"),
    [
        enter(2, SYS_write, [1, 0x6000, 5, 0, 0, 0]),
        leave(2, 5),
    ],
    "write(0x1, \"Hello\", 0x5) = 0x5\n"
);

syscall_test!(
    parse_write_unreadable,
    NoMemory,
    [
        enter(2, SYS_write, [1, 0x6000, 5, 0, 0, 0]),
        leave(2, -(libc::EFAULT as i64)),
    ],
    "write(0x1, \"\", 0x5) = -14 (error)\n"
);

syscall_test!(
    parse_write_limited,
    TraceOptions {
        string_limit: Some(4),
        ..Default::default()
    },
    FakeMemory::new().with(0x6000, b"Hello, world!\n"),
    [
        enter(2, SYS_write, [1, 0x6000, 14, 0, 0, 0]),
        leave(2, 14),
    ],
    "write(0x1, \"Hell\"..., 0xE) = 0xE\n"
);

syscall_test!(
    parse_pwrite64,
    FakeMemory::new().with(0x6000, b"x"),
    [
        enter(2, SYS_pwrite64, [4, 0x6000, 1, 0x10, 0, 0]),
        leave(2, 1),
    ],
    "pwrite64(0x4, \"x\", 0x1, 0x10) = 0x1\n"
);

syscall_test!(
    parse_close,
    NoMemory,
    [enter(1, SYS_close, [3, 0, 0, 0, 0, 0]), leave(1, 0)],
    "close(0x3) = 0x0\n"
);
