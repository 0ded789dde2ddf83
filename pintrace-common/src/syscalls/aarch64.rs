// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

// Syscall numbers and arities from include/uapi/asm-generic/unistd.h.

declare_syscalls! {
    0 => SYS_io_setup(2),
    1 => SYS_io_destroy(1),
    2 => SYS_io_submit(3),
    3 => SYS_io_cancel(3),
    4 => SYS_io_getevents(5),
    5 => SYS_setxattr(5),
    6 => SYS_lsetxattr(5),
    7 => SYS_fsetxattr(5),
    8 => SYS_getxattr(4),
    9 => SYS_lgetxattr(4),
    10 => SYS_fgetxattr(4),
    11 => SYS_listxattr(3),
    12 => SYS_llistxattr(3),
    13 => SYS_flistxattr(3),
    14 => SYS_removexattr(2),
    15 => SYS_lremovexattr(2),
    16 => SYS_fremovexattr(2),
    17 => SYS_getcwd(2),
    18 => SYS_lookup_dcookie(3),
    19 => SYS_eventfd2(2),
    20 => SYS_epoll_create1(1),
    21 => SYS_epoll_ctl(4),
    22 => SYS_epoll_pwait(6),
    23 => SYS_dup(1),
    24 => SYS_dup3(3),
    25 => SYS_fcntl(3),
    26 => SYS_inotify_init1(1),
    27 => SYS_inotify_add_watch(3),
    28 => SYS_inotify_rm_watch(2),
    29 => SYS_ioctl(3),
    30 => SYS_ioprio_set(3),
    31 => SYS_ioprio_get(2),
    32 => SYS_flock(2),
    33 => SYS_mknodat(4),
    34 => SYS_mkdirat(3),
    35 => SYS_unlinkat(3),
    36 => SYS_symlinkat(3),
    37 => SYS_linkat(5),
    38 => SYS_renameat(4),
    39 => SYS_umount2(2),
    40 => SYS_mount(5),
    41 => SYS_pivot_root(2),
    42 => SYS_nfsservctl(3),
    43 => SYS_statfs(2),
    44 => SYS_fstatfs(2),
    45 => SYS_truncate(2),
    46 => SYS_ftruncate(2),
    47 => SYS_fallocate(4),
    48 => SYS_faccessat(3),
    49 => SYS_chdir(1),
    50 => SYS_fchdir(1),
    51 => SYS_chroot(1),
    52 => SYS_fchmod(2),
    53 => SYS_fchmodat(3),
    54 => SYS_fchownat(5),
    55 => SYS_fchown(3),
    56 => SYS_openat(4),
    57 => SYS_close(1),
    58 => SYS_vhangup(0),
    59 => SYS_pipe2(2),
    60 => SYS_quotactl(4),
    61 => SYS_getdents64(3),
    62 => SYS_lseek(3),
    63 => SYS_read(3),
    64 => SYS_write(3),
    65 => SYS_readv(3),
    66 => SYS_writev(3),
    67 => SYS_pread64(4),
    68 => SYS_pwrite64(4),
    69 => SYS_preadv(5),
    70 => SYS_pwritev(5),
    71 => SYS_sendfile(4),
    72 => SYS_pselect6(6),
    73 => SYS_ppoll(5),
    74 => SYS_signalfd4(4),
    75 => SYS_vmsplice(4),
    76 => SYS_splice(6),
    77 => SYS_tee(4),
    78 => SYS_readlinkat(4),
    79 => SYS_newfstatat(4),
    80 => SYS_fstat(2),
    81 => SYS_sync(0),
    82 => SYS_fsync(1),
    83 => SYS_fdatasync(1),
    84 => SYS_sync_file_range(4),
    85 => SYS_timerfd_create(2),
    86 => SYS_timerfd_settime(4),
    87 => SYS_timerfd_gettime(2),
    88 => SYS_utimensat(4),
    89 => SYS_acct(1),
    90 => SYS_capget(2),
    91 => SYS_capset(2),
    92 => SYS_personality(1),
    93 => SYS_exit(1),
    94 => SYS_exit_group(1),
    95 => SYS_waitid(5),
    96 => SYS_set_tid_address(1),
    97 => SYS_unshare(1),
    98 => SYS_futex(6),
    99 => SYS_set_robust_list(2),
    100 => SYS_get_robust_list(3),
    101 => SYS_nanosleep(2),
    102 => SYS_getitimer(2),
    103 => SYS_setitimer(3),
    104 => SYS_kexec_load(4),
    105 => SYS_init_module(3),
    106 => SYS_delete_module(2),
    107 => SYS_timer_create(3),
    108 => SYS_timer_gettime(2),
    109 => SYS_timer_getoverrun(1),
    110 => SYS_timer_settime(4),
    111 => SYS_timer_delete(1),
    112 => SYS_clock_settime(2),
    113 => SYS_clock_gettime(2),
    114 => SYS_clock_getres(2),
    115 => SYS_clock_nanosleep(4),
    116 => SYS_syslog(3),
    117 => SYS_ptrace(4),
    118 => SYS_sched_setparam(2),
    119 => SYS_sched_setscheduler(3),
    120 => SYS_sched_getscheduler(1),
    121 => SYS_sched_getparam(2),
    122 => SYS_sched_setaffinity(3),
    123 => SYS_sched_getaffinity(3),
    124 => SYS_sched_yield(0),
    125 => SYS_sched_get_priority_max(1),
    126 => SYS_sched_get_priority_min(1),
    127 => SYS_sched_rr_get_interval(2),
    128 => SYS_restart_syscall(0),
    129 => SYS_kill(2),
    130 => SYS_tkill(2),
    131 => SYS_tgkill(3),
    132 => SYS_sigaltstack(2),
    133 => SYS_rt_sigsuspend(2),
    134 => SYS_rt_sigaction(4),
    135 => SYS_rt_sigprocmask(4),
    136 => SYS_rt_sigpending(2),
    137 => SYS_rt_sigtimedwait(4),
    138 => SYS_rt_sigqueueinfo(3),
    139 => SYS_rt_sigreturn(0),
    140 => SYS_setpriority(3),
    141 => SYS_getpriority(2),
    142 => SYS_reboot(4),
    143 => SYS_setregid(2),
    144 => SYS_setgid(1),
    145 => SYS_setreuid(2),
    146 => SYS_setuid(1),
    147 => SYS_setresuid(3),
    148 => SYS_getresuid(3),
    149 => SYS_setresgid(3),
    150 => SYS_getresgid(3),
    151 => SYS_setfsuid(1),
    152 => SYS_setfsgid(1),
    153 => SYS_times(1),
    154 => SYS_setpgid(2),
    155 => SYS_getpgid(1),
    156 => SYS_getsid(1),
    157 => SYS_setsid(0),
    158 => SYS_getgroups(2),
    159 => SYS_setgroups(2),
    160 => SYS_uname(1),
    161 => SYS_sethostname(2),
    162 => SYS_setdomainname(2),
    163 => SYS_getrlimit(2),
    164 => SYS_setrlimit(2),
    165 => SYS_getrusage(2),
    166 => SYS_umask(1),
    167 => SYS_prctl(5),
    168 => SYS_getcpu(3),
    169 => SYS_gettimeofday(2),
    170 => SYS_settimeofday(2),
    171 => SYS_adjtimex(1),
    172 => SYS_getpid(0),
    173 => SYS_getppid(0),
    174 => SYS_getuid(0),
    175 => SYS_geteuid(0),
    176 => SYS_getgid(0),
    177 => SYS_getegid(0),
    178 => SYS_gettid(0),
    179 => SYS_sysinfo(1),
    180 => SYS_mq_open(4),
    181 => SYS_mq_unlink(1),
    182 => SYS_mq_timedsend(5),
    183 => SYS_mq_timedreceive(5),
    184 => SYS_mq_notify(2),
    185 => SYS_mq_getsetattr(3),
    186 => SYS_msgget(2),
    187 => SYS_msgctl(3),
    188 => SYS_msgrcv(5),
    189 => SYS_msgsnd(4),
    190 => SYS_semget(3),
    191 => SYS_semctl(4),
    192 => SYS_semtimedop(4),
    193 => SYS_semop(3),
    194 => SYS_shmget(3),
    195 => SYS_shmctl(3),
    196 => SYS_shmat(3),
    197 => SYS_shmdt(1),
    198 => SYS_socket(3),
    199 => SYS_socketpair(4),
    200 => SYS_bind(3),
    201 => SYS_listen(2),
    202 => SYS_accept(3),
    203 => SYS_connect(3),
    204 => SYS_getsockname(3),
    205 => SYS_getpeername(3),
    206 => SYS_sendto(6),
    207 => SYS_recvfrom(6),
    208 => SYS_setsockopt(5),
    209 => SYS_getsockopt(5),
    210 => SYS_shutdown(2),
    211 => SYS_sendmsg(3),
    212 => SYS_recvmsg(3),
    213 => SYS_readahead(3),
    214 => SYS_brk(1),
    215 => SYS_munmap(2),
    216 => SYS_mremap(5),
    217 => SYS_add_key(5),
    218 => SYS_request_key(4),
    219 => SYS_keyctl(5),
    220 => SYS_clone(5),
    221 => SYS_execve(3),
    222 => SYS_mmap(6),
    223 => SYS_fadvise64(4),
    224 => SYS_swapon(2),
    225 => SYS_swapoff(1),
    226 => SYS_mprotect(3),
    227 => SYS_msync(3),
    228 => SYS_mlock(2),
    229 => SYS_munlock(2),
    230 => SYS_mlockall(1),
    231 => SYS_munlockall(0),
    232 => SYS_mincore(3),
    233 => SYS_madvise(3),
    234 => SYS_remap_file_pages(5),
    235 => SYS_mbind(6),
    236 => SYS_get_mempolicy(5),
    237 => SYS_set_mempolicy(3),
    238 => SYS_migrate_pages(4),
    239 => SYS_move_pages(6),
    240 => SYS_rt_tgsigqueueinfo(4),
    241 => SYS_perf_event_open(5),
    242 => SYS_accept4(4),
    243 => SYS_recvmmsg(5),
    260 => SYS_wait4(4),
    261 => SYS_prlimit64(4),
    262 => SYS_fanotify_init(2),
    263 => SYS_fanotify_mark(5),
    264 => SYS_name_to_handle_at(5),
    265 => SYS_open_by_handle_at(3),
    266 => SYS_clock_adjtime(2),
    267 => SYS_syncfs(1),
    268 => SYS_setns(2),
    269 => SYS_sendmmsg(4),
    270 => SYS_process_vm_readv(6),
    271 => SYS_process_vm_writev(6),
    272 => SYS_kcmp(5),
    273 => SYS_finit_module(3),
    274 => SYS_sched_setattr(3),
    275 => SYS_sched_getattr(4),
    276 => SYS_renameat2(5),
    277 => SYS_seccomp(3),
    278 => SYS_getrandom(3),
    279 => SYS_memfd_create(2),
    280 => SYS_bpf(3),
    281 => SYS_execveat(5),
    282 => SYS_userfaultfd(1),
    283 => SYS_membarrier(3),
    284 => SYS_mlock2(3),
    285 => SYS_copy_file_range(6),
    286 => SYS_preadv2(6),
    287 => SYS_pwritev2(6),
    288 => SYS_pkey_mprotect(4),
    289 => SYS_pkey_alloc(2),
    290 => SYS_pkey_free(1),
    291 => SYS_statx(5),
    292 => SYS_io_pgetevents(6),
    293 => SYS_rseq(4),
    294 => SYS_kexec_file_load(5),
    424 => SYS_pidfd_send_signal(4),
    425 => SYS_io_uring_setup(2),
    426 => SYS_io_uring_enter(6),
    427 => SYS_io_uring_register(4),
    428 => SYS_open_tree(3),
    429 => SYS_move_mount(5),
    430 => SYS_fsopen(2),
    431 => SYS_fsconfig(5),
    432 => SYS_fsmount(3),
    433 => SYS_fspick(3),
    434 => SYS_pidfd_open(2),
    435 => SYS_clone3(2),
    436 => SYS_close_range(3),
    437 => SYS_openat2(4),
    438 => SYS_pidfd_getfd(3),
    439 => SYS_faccessat2(4),
    440 => SYS_process_madvise(5),
    441 => SYS_epoll_pwait2(6),
    442 => SYS_mount_setattr(5),
    443 => SYS_quotactl_fd(4),
    444 => SYS_landlock_create_ruleset(3),
    445 => SYS_landlock_add_rule(4),
    446 => SYS_landlock_restrict_self(2),
    447 => SYS_memfd_secret(1),
    448 => SYS_process_mrelease(2),
    449 => SYS_futex_waitv(5),
    450 => SYS_set_mempolicy_home_node(4),
    451 => SYS_cachestat(4),
    452 => SYS_fchmodat2(4),
    453 => SYS_map_shadow_stack(3),
    454 => SYS_futex_wake(4),
    455 => SYS_futex_wait(6),
    456 => SYS_futex_requeue(4),
    457 => SYS_statmount(4),
    458 => SYS_listmount(4),
    459 => SYS_lsm_get_self_attr(4),
    460 => SYS_lsm_set_self_attr(4),
    461 => SYS_lsm_list_modules(3),
    462 => SYS_mseal(3),
}
