// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use pintrace_common::syscalls::{
    SYS_chdir, SYS_faccessat, SYS_getcwd, SYS_mkdirat, SYS_newfstatat, SYS_openat,
    SYS_readlinkat, SYS_unlinkat,
};

use crate::{
    memory::NoMemory,
    syscall_test,
    tests::{enter, leave, FakeMemory},
};

const AT_FDCWD: u64 = libc::AT_FDCWD as i64 as u64;

syscall_test!(
    parse_openat_rdonly,
    FakeMemory::new().with(0x1000, b"/etc/ld.so.cache\0"),
    [
        enter(
            10,
            SYS_openat,
            [AT_FDCWD, 0x1000, (libc::O_RDONLY | libc::O_CLOEXEC) as u64, 0, 0, 0]
        ),
        leave(10, 3),
    ],
    "openat(0xFFFFFFFFFFFFFF9C, \"/etc/ld.so.cache\", O_RDONLY|O_CLOEXEC) = 0x3\n"
);

syscall_test!(
    parse_openat_creat,
    FakeMemory::new().with(0x1000, b"out.txt\0"),
    [
        enter(
            10,
            SYS_openat,
            [
                AT_FDCWD,
                0x1000,
                (libc::O_WRONLY | libc::O_CREAT | libc::O_EXCL) as u64,
                0o600,
                0,
                0
            ]
        ),
        leave(10, -(libc::EEXIST as i64)),
    ],
    "openat(0xFFFFFFFFFFFFFF9C, \"out.txt\", O_WRONLY|O_CREAT|O_EXCL, 600) = -17 (error)\n"
);

syscall_test!(
    parse_openat_tmpfile,
    FakeMemory::new().with(0x1000, b"/tmp\0"),
    [
        enter(
            10,
            SYS_openat,
            [AT_FDCWD, 0x1000, (libc::O_RDWR | libc::O_TMPFILE) as u64, 0o600, 0, 0]
        ),
        leave(10, 4),
    ],
    "openat(0xFFFFFFFFFFFFFF9C, \"/tmp\", O_RDWR|O_DIRECTORY|O_TMPFILE, 600) = 0x4\n"
);

syscall_test!(
    parse_openat_unreadable_path,
    NoMemory,
    [
        enter(10, SYS_openat, [AT_FDCWD, 0x1000, libc::O_RDONLY as u64, 0, 0, 0]),
        leave(10, -(libc::EFAULT as i64)),
    ],
    "openat(0xFFFFFFFFFFFFFF9C, \"\", O_RDONLY) = -14 (error)\n"
);

syscall_test!(
    parse_faccessat,
    FakeMemory::new().with(0x1000, b"/etc/ld.so.preload\0"),
    [
        enter(
            10,
            SYS_faccessat,
            [AT_FDCWD, 0x1000, libc::R_OK as u64, 0, 0, 0]
        ),
        leave(10, -(libc::ENOENT as i64)),
    ],
    "faccessat(0xFFFFFFFFFFFFFF9C, \"/etc/ld.so.preload\", 0x4) = -2 (error)\n"
);

syscall_test!(
    parse_newfstatat,
    FakeMemory::new().with(0x1000, b"\0"),
    [
        enter(
            10,
            SYS_newfstatat,
            [3, 0x1000, 0x7ffc0000, libc::AT_EMPTY_PATH as u64, 0, 0]
        ),
        leave(10, 0),
    ],
    "newfstatat(0x3, \"\", 0x7FFC0000, 0x1000) = 0x0\n"
);

syscall_test!(
    parse_mkdirat,
    FakeMemory::new().with(0x1000, b"build\0"),
    [
        enter(10, SYS_mkdirat, [AT_FDCWD, 0x1000, 0o755, 0, 0, 0]),
        leave(10, 0),
    ],
    "mkdirat(0xFFFFFFFFFFFFFF9C, \"build\", 755) = 0x0\n"
);

syscall_test!(
    parse_unlinkat,
    FakeMemory::new().with(0x1000, b"stale.lock\0"),
    [
        enter(10, SYS_unlinkat, [AT_FDCWD, 0x1000, 0, 0, 0, 0]),
        leave(10, 0),
    ],
    "unlinkat(0xFFFFFFFFFFFFFF9C, \"stale.lock\", 0x0) = 0x0\n"
);

syscall_test!(
    parse_readlinkat,
    FakeMemory::new()
        .with(0x1000, b"/proc/self/exe\0")
        .with(0x2000, b"/usr/bin/catXXXXXXXX"),
    [
        enter(10, SYS_readlinkat, [AT_FDCWD, 0x1000, 0x2000, 20, 0, 0]),
        leave(10, 12),
    ],
    "readlinkat(0xFFFFFFFFFFFFFF9C, \"/proc/self/exe\", \"/usr/bin/cat\", 0x14) = 0xC\n"
);

syscall_test!(
    parse_getcwd,
    FakeMemory::new().with(0x3000, b"/home/user\0"),
    [
        enter(10, SYS_getcwd, [0x3000, 4096, 0, 0, 0, 0]),
        leave(10, 11),
    ],
    "getcwd(\"/home/user\", 0x1000) = 0xB\n"
);

syscall_test!(
    parse_chdir,
    FakeMemory::new().with(0x3000, b"/srv\0"),
    [enter(10, SYS_chdir, [0x3000, 0, 0, 0, 0, 0]), leave(10, 0)],
    "chdir(\"/srv\") = 0x0\n"
);

#[cfg(target_arch = "x86_64")]
mod legacy {
    use pintrace_common::syscalls::{SYS_access, SYS_creat, SYS_open, SYS_readlink, SYS_stat};

    use crate::{
        syscall_test,
        tests::{enter, leave, FakeMemory},
    };

    syscall_test!(
        parse_open,
        FakeMemory::new().with(0x1000, b"/etc/hosts\0"),
        [
            enter(5, SYS_open, [0x1000, libc::O_RDONLY as u64, 0, 0, 0, 0]),
            leave(5, 3),
        ],
        "open(\"/etc/hosts\", O_RDONLY) = 0x3\n"
    );

    syscall_test!(
        parse_open_creat,
        FakeMemory::new().with(0x1000, b"log.txt\0"),
        [
            enter(
                5,
                SYS_open,
                [
                    0x1000,
                    (libc::O_WRONLY | libc::O_APPEND | libc::O_CREAT) as u64,
                    0o644,
                    0,
                    0,
                    0
                ]
            ),
            leave(5, 3),
        ],
        "open(\"log.txt\", O_WRONLY|O_APPEND|O_CREAT, 644) = 0x3\n"
    );

    syscall_test!(
        parse_creat,
        FakeMemory::new().with(0x1000, b"new\0"),
        [enter(5, SYS_creat, [0x1000, 0o640, 0, 0, 0, 0]), leave(5, 3)],
        "creat(\"new\", 640) = 0x3\n"
    );

    syscall_test!(
        parse_access,
        FakeMemory::new().with(0x1000, b"/etc/ld.so.preload\0"),
        [
            enter(5, SYS_access, [0x1000, libc::R_OK as u64, 0, 0, 0, 0]),
            leave(5, -(libc::ENOENT as i64)),
        ],
        "access(\"/etc/ld.so.preload\", 0x4) = -2 (error)\n"
    );

    syscall_test!(
        parse_stat,
        FakeMemory::new().with(0x1000, b"/\0"),
        [
            enter(5, SYS_stat, [0x1000, 0x7ffd1000, 0, 0, 0, 0]),
            leave(5, 0),
        ],
        "stat(\"/\", 0x7FFD1000) = 0x0\n"
    );

    syscall_test!(
        parse_readlink,
        FakeMemory::new()
            .with(0x1000, b"/proc/self/exe\0")
            .with(0x2000, b"/bin/true"),
        [
            enter(5, SYS_readlink, [0x1000, 0x2000, 4096, 0, 0, 0]),
            leave(5, 9),
        ],
        "readlink(\"/proc/self/exe\", \"/bin/true\", 0x1000) = 0x9\n"
    );
}
