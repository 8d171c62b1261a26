//! Generate UniFFI Swift bindings for the Link Purifier app
//!
//! Run: cargo run --bin generate-bindings
//!
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │ Inputs:                                                                     │
//! │   target/release/liblinkpure.dylib        ← Built library for bindgen       │
//! │                                                                             │
//! │ Outputs (relative to the Xcode project root):                               │
//! │   Sources/LinkPureFFI/linkpureFFI.h       ← C header                        │
//! │   Sources/LinkPureFFI/module.modulemap    ← Clang module map                │
//! │   Sources/LinkPureFFI/liblinkpure.a       ← Universal static lib            │
//! │   Sources/LinkPure/linkpure.swift         ← Swift bindings                  │
//! └─────────────────────────────────────────────────────────────────────────────┘

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

const TARGETS: &[&str] = &["aarch64-apple-darwin", "x86_64-apple-darwin"];

fn main() -> Result<()> {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace = crate_dir.parent().context("crate has no parent directory")?;
    let project_root = env::var_os("LINKPURE_APP_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace.to_path_buf());

    // Match the Swift app's deployment target
    env::set_var("MACOSX_DEPLOYMENT_TARGET", "14.0");

    println!("Building liblinkpure...");
    run("cargo", &["build", "--release", "--lib"], workspace)?;

    println!("Generating Swift bindings...");
    let generated = workspace.join("target/generated");
    run(
        "cargo",
        &[
            "run",
            "--bin",
            "uniffi-bindgen",
            "generate",
            "--library",
            "target/release/liblinkpure.dylib",
            "--language",
            "swift",
            "--out-dir",
            &generated.to_string_lossy(),
        ],
        workspace,
    )?;

    let ffi_dir = project_root.join("Sources/LinkPureFFI");
    let swift_dir = project_root.join("Sources/LinkPure");
    fs::create_dir_all(&ffi_dir)?;
    fs::create_dir_all(&swift_dir)?;

    let swift = fs::read_to_string(generated.join("linkpure.swift"))
        .context("reading generated linkpure.swift")?;
    fs::write(swift_dir.join("linkpure.swift"), swift.replace("linkpureFFI", "LinkPureFFI"))?;
    fs::copy(generated.join("linkpureFFI.h"), ffi_dir.join("linkpureFFI.h"))
        .context("copying FFI header")?;
    fs::write(
        ffi_dir.join("module.modulemap"),
        "module LinkPureFFI {\n    header \"linkpureFFI.h\"\n    export *\n}\n",
    )?;

    println!("Building universal static library...");
    let mut slices = Vec::new();
    for target in TARGETS {
        run("cargo", &["build", "--release", "--lib", "--target", target], workspace)?;
        slices.push(format!("target/{}/release/liblinkpure.a", target));
    }
    let output = ffi_dir.join("liblinkpure.a");
    let mut lipo_args: Vec<&str> = vec!["-create"];
    lipo_args.extend(slices.iter().map(String::as_str));
    let output_str = output.to_string_lossy();
    lipo_args.extend(["-output", &output_str]);
    run("lipo", &lipo_args, workspace)?;

    println!("Done. Bindings written to {}", project_root.display());
    Ok(())
}

fn run(program: &str, args: &[&str], dir: &Path) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("failed to run {}", program))?;
    if !status.success() {
        bail!("{} {} failed with {}", program, args.join(" "), status);
    }
    Ok(())
}
