// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

fn main() {
    println!("cargo::rustc-check-cfg=cfg(aarch64)");
    println!("cargo::rustc-check-cfg=cfg(x86_64)");

    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    match arch.as_str() {
        "aarch64" => println!("cargo::rustc-cfg=aarch64"),
        "x86_64" => println!("cargo::rustc-cfg=x86_64"),
        other => panic!("Unsupported architecture {other:?}. Only aarch64 and x86_64 are supported."),
    }
}
