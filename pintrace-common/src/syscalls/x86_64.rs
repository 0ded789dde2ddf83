// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

// Syscall numbers and arities from arch/x86/entry/syscalls/syscall_64.tbl.

declare_syscalls! {
    0 => SYS_read(3),
    1 => SYS_write(3),
    2 => SYS_open(3),
    3 => SYS_close(1),
    4 => SYS_stat(2),
    5 => SYS_fstat(2),
    6 => SYS_lstat(2),
    7 => SYS_poll(3),
    8 => SYS_lseek(3),
    9 => SYS_mmap(6),
    10 => SYS_mprotect(3),
    11 => SYS_munmap(2),
    12 => SYS_brk(1),
    13 => SYS_rt_sigaction(4),
    14 => SYS_rt_sigprocmask(4),
    15 => SYS_rt_sigreturn(0),
    16 => SYS_ioctl(3),
    17 => SYS_pread64(4),
    18 => SYS_pwrite64(4),
    19 => SYS_readv(3),
    20 => SYS_writev(3),
    21 => SYS_access(2),
    22 => SYS_pipe(1),
    23 => SYS_select(5),
    24 => SYS_sched_yield(0),
    25 => SYS_mremap(5),
    26 => SYS_msync(3),
    27 => SYS_mincore(3),
    28 => SYS_madvise(3),
    29 => SYS_shmget(3),
    30 => SYS_shmat(3),
    31 => SYS_shmctl(3),
    32 => SYS_dup(1),
    33 => SYS_dup2(2),
    34 => SYS_pause(0),
    35 => SYS_nanosleep(2),
    36 => SYS_getitimer(2),
    37 => SYS_alarm(1),
    38 => SYS_setitimer(3),
    39 => SYS_getpid(0),
    40 => SYS_sendfile(4),
    41 => SYS_socket(3),
    42 => SYS_connect(3),
    43 => SYS_accept(3),
    44 => SYS_sendto(6),
    45 => SYS_recvfrom(6),
    46 => SYS_sendmsg(3),
    47 => SYS_recvmsg(3),
    48 => SYS_shutdown(2),
    49 => SYS_bind(3),
    50 => SYS_listen(2),
    51 => SYS_getsockname(3),
    52 => SYS_getpeername(3),
    53 => SYS_socketpair(4),
    54 => SYS_setsockopt(5),
    55 => SYS_getsockopt(5),
    56 => SYS_clone(5),
    57 => SYS_fork(0),
    58 => SYS_vfork(0),
    59 => SYS_execve(3),
    60 => SYS_exit(1),
    61 => SYS_wait4(4),
    62 => SYS_kill(2),
    63 => SYS_uname(1),
    64 => SYS_semget(3),
    65 => SYS_semop(3),
    66 => SYS_semctl(4),
    67 => SYS_shmdt(1),
    68 => SYS_msgget(2),
    69 => SYS_msgsnd(4),
    70 => SYS_msgrcv(5),
    71 => SYS_msgctl(3),
    72 => SYS_fcntl(3),
    73 => SYS_flock(2),
    74 => SYS_fsync(1),
    75 => SYS_fdatasync(1),
    76 => SYS_truncate(2),
    77 => SYS_ftruncate(2),
    78 => SYS_getdents(3),
    79 => SYS_getcwd(2),
    80 => SYS_chdir(1),
    81 => SYS_fchdir(1),
    82 => SYS_rename(2),
    83 => SYS_mkdir(2),
    84 => SYS_rmdir(1),
    85 => SYS_creat(2),
    86 => SYS_link(2),
    87 => SYS_unlink(1),
    88 => SYS_symlink(2),
    89 => SYS_readlink(3),
    90 => SYS_chmod(2),
    91 => SYS_fchmod(2),
    92 => SYS_chown(3),
    93 => SYS_fchown(3),
    94 => SYS_lchown(3),
    95 => SYS_umask(1),
    96 => SYS_gettimeofday(2),
    97 => SYS_getrlimit(2),
    98 => SYS_getrusage(2),
    99 => SYS_sysinfo(1),
    100 => SYS_times(1),
    101 => SYS_ptrace(4),
    102 => SYS_getuid(0),
    103 => SYS_syslog(3),
    104 => SYS_getgid(0),
    105 => SYS_setuid(1),
    106 => SYS_setgid(1),
    107 => SYS_geteuid(0),
    108 => SYS_getegid(0),
    109 => SYS_setpgid(2),
    110 => SYS_getppid(0),
    111 => SYS_getpgrp(0),
    112 => SYS_setsid(0),
    113 => SYS_setreuid(2),
    114 => SYS_setregid(2),
    115 => SYS_getgroups(2),
    116 => SYS_setgroups(2),
    117 => SYS_setresuid(3),
    118 => SYS_getresuid(3),
    119 => SYS_setresgid(3),
    120 => SYS_getresgid(3),
    121 => SYS_getpgid(1),
    122 => SYS_setfsuid(1),
    123 => SYS_setfsgid(1),
    124 => SYS_getsid(1),
    125 => SYS_capget(2),
    126 => SYS_capset(2),
    127 => SYS_rt_sigpending(2),
    128 => SYS_rt_sigtimedwait(4),
    129 => SYS_rt_sigqueueinfo(3),
    130 => SYS_rt_sigsuspend(2),
    131 => SYS_sigaltstack(2),
    132 => SYS_utime(2),
    133 => SYS_mknod(3),
    134 => SYS_uselib(1),
    135 => SYS_personality(1),
    136 => SYS_ustat(2),
    137 => SYS_statfs(2),
    138 => SYS_fstatfs(2),
    139 => SYS_sysfs(3),
    140 => SYS_getpriority(2),
    141 => SYS_setpriority(3),
    142 => SYS_sched_setparam(2),
    143 => SYS_sched_getparam(2),
    144 => SYS_sched_setscheduler(3),
    145 => SYS_sched_getscheduler(1),
    146 => SYS_sched_get_priority_max(1),
    147 => SYS_sched_get_priority_min(1),
    148 => SYS_sched_rr_get_interval(2),
    149 => SYS_mlock(2),
    150 => SYS_munlock(2),
    151 => SYS_mlockall(1),
    152 => SYS_munlockall(0),
    153 => SYS_vhangup(0),
    154 => SYS_modify_ldt(3),
    155 => SYS_pivot_root(2),
    156 => SYS__sysctl(1),
    157 => SYS_prctl(5),
    158 => SYS_arch_prctl(2),
    159 => SYS_adjtimex(1),
    160 => SYS_setrlimit(2),
    161 => SYS_chroot(1),
    162 => SYS_sync(0),
    163 => SYS_acct(1),
    164 => SYS_settimeofday(2),
    165 => SYS_mount(5),
    166 => SYS_umount2(2),
    167 => SYS_swapon(2),
    168 => SYS_swapoff(1),
    169 => SYS_reboot(4),
    170 => SYS_sethostname(2),
    171 => SYS_setdomainname(2),
    172 => SYS_iopl(1),
    173 => SYS_ioperm(3),
    174 => SYS_create_module(2),
    175 => SYS_init_module(3),
    176 => SYS_delete_module(2),
    177 => SYS_get_kernel_syms(1),
    178 => SYS_query_module(5),
    179 => SYS_quotactl(4),
    180 => SYS_nfsservctl(3),
    181 => SYS_getpmsg(5),
    182 => SYS_putpmsg(5),
    183 => SYS_afs_syscall(5),
    184 => SYS_tuxcall(3),
    185 => SYS_security(3),
    186 => SYS_gettid(0),
    187 => SYS_readahead(3),
    188 => SYS_setxattr(5),
    189 => SYS_lsetxattr(5),
    190 => SYS_fsetxattr(5),
    191 => SYS_getxattr(4),
    192 => SYS_lgetxattr(4),
    193 => SYS_fgetxattr(4),
    194 => SYS_listxattr(3),
    195 => SYS_llistxattr(3),
    196 => SYS_flistxattr(3),
    197 => SYS_removexattr(2),
    198 => SYS_lremovexattr(2),
    199 => SYS_fremovexattr(2),
    200 => SYS_tkill(2),
    201 => SYS_time(1),
    202 => SYS_futex(6),
    203 => SYS_sched_setaffinity(3),
    204 => SYS_sched_getaffinity(3),
    205 => SYS_set_thread_area(1),
    206 => SYS_io_setup(2),
    207 => SYS_io_destroy(1),
    208 => SYS_io_getevents(5),
    209 => SYS_io_submit(3),
    210 => SYS_io_cancel(3),
    211 => SYS_get_thread_area(1),
    212 => SYS_lookup_dcookie(3),
    213 => SYS_epoll_create(1),
    214 => SYS_epoll_ctl_old(4),
    215 => SYS_epoll_wait_old(4),
    216 => SYS_remap_file_pages(5),
    217 => SYS_getdents64(3),
    218 => SYS_set_tid_address(1),
    219 => SYS_restart_syscall(0),
    220 => SYS_semtimedop(4),
    221 => SYS_fadvise64(4),
    222 => SYS_timer_create(3),
    223 => SYS_timer_settime(4),
    224 => SYS_timer_gettime(2),
    225 => SYS_timer_getoverrun(1),
    226 => SYS_timer_delete(1),
    227 => SYS_clock_settime(2),
    228 => SYS_clock_gettime(2),
    229 => SYS_clock_getres(2),
    230 => SYS_clock_nanosleep(4),
    231 => SYS_exit_group(1),
    232 => SYS_epoll_wait(4),
    233 => SYS_epoll_ctl(4),
    234 => SYS_tgkill(3),
    235 => SYS_utimes(2),
    236 => SYS_vserver(5),
    237 => SYS_mbind(6),
    238 => SYS_set_mempolicy(3),
    239 => SYS_get_mempolicy(5),
    240 => SYS_mq_open(4),
    241 => SYS_mq_unlink(1),
    242 => SYS_mq_timedsend(5),
    243 => SYS_mq_timedreceive(5),
    244 => SYS_mq_notify(2),
    245 => SYS_mq_getsetattr(3),
    246 => SYS_kexec_load(4),
    247 => SYS_waitid(5),
    248 => SYS_add_key(5),
    249 => SYS_request_key(4),
    250 => SYS_keyctl(5),
    251 => SYS_ioprio_set(3),
    252 => SYS_ioprio_get(2),
    253 => SYS_inotify_init(0),
    254 => SYS_inotify_add_watch(3),
    255 => SYS_inotify_rm_watch(2),
    256 => SYS_migrate_pages(4),
    257 => SYS_openat(4),
    258 => SYS_mkdirat(3),
    259 => SYS_mknodat(4),
    260 => SYS_fchownat(5),
    261 => SYS_futimesat(3),
    262 => SYS_newfstatat(4),
    263 => SYS_unlinkat(3),
    264 => SYS_renameat(4),
    265 => SYS_linkat(5),
    266 => SYS_symlinkat(3),
    267 => SYS_readlinkat(4),
    268 => SYS_fchmodat(3),
    269 => SYS_faccessat(3),
    270 => SYS_pselect6(6),
    271 => SYS_ppoll(5),
    272 => SYS_unshare(1),
    273 => SYS_set_robust_list(2),
    274 => SYS_get_robust_list(3),
    275 => SYS_splice(6),
    276 => SYS_tee(4),
    277 => SYS_sync_file_range(4),
    278 => SYS_vmsplice(4),
    279 => SYS_move_pages(6),
    280 => SYS_utimensat(4),
    281 => SYS_epoll_pwait(6),
    282 => SYS_signalfd(3),
    283 => SYS_timerfd_create(2),
    284 => SYS_eventfd(1),
    285 => SYS_fallocate(4),
    286 => SYS_timerfd_settime(4),
    287 => SYS_timerfd_gettime(2),
    288 => SYS_accept4(4),
    289 => SYS_signalfd4(4),
    290 => SYS_eventfd2(2),
    291 => SYS_epoll_create1(1),
    292 => SYS_dup3(3),
    293 => SYS_pipe2(2),
    294 => SYS_inotify_init1(1),
    295 => SYS_preadv(5),
    296 => SYS_pwritev(5),
    297 => SYS_rt_tgsigqueueinfo(4),
    298 => SYS_perf_event_open(5),
    299 => SYS_recvmmsg(5),
    300 => SYS_fanotify_init(2),
    301 => SYS_fanotify_mark(5),
    302 => SYS_prlimit64(4),
    303 => SYS_name_to_handle_at(5),
    304 => SYS_open_by_handle_at(3),
    305 => SYS_clock_adjtime(2),
    306 => SYS_syncfs(1),
    307 => SYS_sendmmsg(4),
    308 => SYS_setns(2),
    309 => SYS_getcpu(3),
    310 => SYS_process_vm_readv(6),
    311 => SYS_process_vm_writev(6),
    312 => SYS_kcmp(5),
    313 => SYS_finit_module(3),
    314 => SYS_sched_setattr(3),
    315 => SYS_sched_getattr(4),
    316 => SYS_renameat2(5),
    317 => SYS_seccomp(3),
    318 => SYS_getrandom(3),
    319 => SYS_memfd_create(2),
    320 => SYS_kexec_file_load(5),
    321 => SYS_bpf(3),
    322 => SYS_execveat(5),
    323 => SYS_userfaultfd(1),
    324 => SYS_membarrier(3),
    325 => SYS_mlock2(3),
    326 => SYS_copy_file_range(6),
    327 => SYS_preadv2(6),
    328 => SYS_pwritev2(6),
    329 => SYS_pkey_mprotect(4),
    330 => SYS_pkey_alloc(2),
    331 => SYS_pkey_free(1),
    332 => SYS_statx(5),
    333 => SYS_io_pgetevents(6),
    334 => SYS_rseq(4),
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
