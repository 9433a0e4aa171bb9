/// Shared test helpers for all docdrift integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
pub mod generators;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use docdrift_core::types::{
    CodeSignature, DocSignature, Parameter, Signature, SignatureKind, SourceLocation,
};
use tempfile::TempDir;

/// The checked-in sample repository with intentional drift.
#[allow(dead_code)]
pub fn sample_repo() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/sample_repo")
}

/// Write `(relative_path, content)` pairs into a fresh temp directory.
///
/// Hold the returned TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn write_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
    }
    dir
}

/// Get path to compiled docdrift binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn docdrift_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("docdrift");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = workspace.join("target/debug/docdrift");
    if fallback.exists() {
        return fallback;
    }
    let status = Command::new("cargo")
        .args(["build", "-p", "docdrift-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build docdrift");
    assert!(status.success(), "Failed to build docdrift binary");
    fallback
}

/// Run docdrift with `args` from `cwd`, with RUST_LOG cleared.
#[allow(dead_code)]
pub fn run_docdrift(cwd: &Path, args: &[&str]) -> std::process::Output {
    Command::new(docdrift_bin())
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("GITHUB_SHA")
        .output()
        .expect("failed to run docdrift")
}

#[allow(dead_code)]
pub fn signature(
    name: &str,
    kind: SignatureKind,
    parent: Option<&str>,
    params: &[&str],
    file: &str,
    line: u32,
) -> Signature {
    let mut sig = Signature::new(name, kind, SourceLocation::new(file, line));
    sig.parent = parent.map(str::to_string);
    sig.parameters = params.iter().map(|p| Parameter::named(*p)).collect();
    sig
}

/// Documented, non-async code function.
#[allow(dead_code)]
pub fn code_fn(name: &str, params: &[&str], line: u32) -> CodeSignature {
    let mut code = CodeSignature::new(signature(
        name,
        SignatureKind::Function,
        None,
        params,
        "src/calculator.py",
        line,
    ));
    code.docstring_present = true;
    code
}

#[allow(dead_code)]
pub fn doc_fn(name: &str, params: &[&str], line: u32) -> DocSignature {
    DocSignature::new(signature(
        name,
        SignatureKind::Function,
        None,
        params,
        "docs/api.md",
        line,
    ))
}
