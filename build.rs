//! Build script for the joystick display firmware.
//!
//! Puts `memory.x` on the linker search path and, for ARM targets only, adds
//! the `cortex-m-rt` and `defmt` linker scripts to the binary. Host builds
//! (library tests) get no extra link arguments.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::{env, fs};

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    if env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default() != "arm" {
        return;
    }

    // Copy memory.x into OUT_DIR so the linker finds it regardless of the working directory
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let memory_x = fs::read("memory.x").expect("memory.x must exist at the crate root");
    File::create(out_dir.join("memory.x"))
        .and_then(|mut f| f.write_all(&memory_x))
        .expect("failed to write memory.x to OUT_DIR");
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
