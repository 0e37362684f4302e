mod build_support;

use std::env;
use std::path::Path;
use std::process::Command;

fn main() {
    // Values passed in by the release pipeline win over anything derived here
    println!("cargo:rerun-if-env-changed=WPDIR_COMMIT");
    println!("cargo:rerun-if-env-changed=WPDIR_BUILD_DATE");
    println!("cargo:rerun-if-env-changed=WPDIR_API_URL");
    for path in build_support::git_watch_paths(Path::new(".git")) {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    if env::var("WPDIR_COMMIT").is_err() {
        if let Some(commit) = git_short_hash() {
            println!("cargo:rustc-env=WPDIR_COMMIT={}", commit);
        }
    }

    if env::var("WPDIR_BUILD_DATE").is_err() {
        let date = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        println!("cargo:rustc-env=WPDIR_BUILD_DATE={}", date);
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    if hash.is_empty() { None } else { Some(hash.to_string()) }
}
