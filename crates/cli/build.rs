// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    let vars = [
        ("PARLEY_DATA_DIR", "PARLEY_DATA_DIR"),
        ("PARLEY_REMOTE_URL", "PARLEY_REMOTE_URL"),
        ("PARLEY_OFFLINE", "PARLEY_OFFLINE"),
        ("PARLEY_LOG", "PARLEY_LOG"),
    ];

    for (const_name, env_name) in &vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
