//! Generates the C header for the exported `tensor_*` symbols.
//!
//! The header goes to `include/tensorbuf.h` next to this crate, or to
//! `$TENSORBUF_INCLUDE_DIR/tensorbuf.h` when that variable is set.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

const HEADER: &str = "tensorbuf.h";
const INCLUDE_DIR_ENV: &str = "TENSORBUF_INCLUDE_DIR";

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let config_path = crate_dir.join("cbindgen.toml");

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed={}", config_path.display());
    println!("cargo:rerun-if-env-changed={INCLUDE_DIR_ENV}");

    let include_dir = env::var_os(INCLUDE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| crate_dir.join("include"));
    fs::create_dir_all(&include_dir)?;

    let config = cbindgen::Config::from_file(&config_path)?;
    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()?;
    bindings.write_to_file(include_dir.join(HEADER));
    Ok(())
}
