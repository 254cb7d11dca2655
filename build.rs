//! Build script for devcli-demo - embeds git commit hash and build info
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` environment variable with the commit hash
//! - Emits `DEVCLI_DEMO_BUILD_DATE` environment variable with the build date
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits build date only (clean version string without git hash)

use std::process::Command;

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

/// Get the repository name in "owner/repo" format from git remote
fn get_repo_name() -> String {
    if let Ok(output) = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
    {
        if output.status.success() {
            let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if let Some(repo) = parse_repo_from_url(&url) {
                return repo;
            }
        }
    }
    // Fallback to package repository from Cargo.toml
    "devcli/devcli".to_string()
}

/// Parse owner/repo from a git remote URL
///
/// Handles `https://host/owner/repo(.git)` and `git@host:owner/repo(.git)`.
fn parse_repo_from_url(url: &str) -> Option<String> {
    let url = url.trim_end_matches(".git");

    if url.contains("github.com") || url.contains("gitlab.com") || url.contains("bitbucket.org") {
        if url.starts_with("http") {
            let path = url.split('/').skip(3).collect::<Vec<_>>().join("/");
            if !path.is_empty() {
                return Some(path);
            }
        }
        if let Some(colon_pos) = url.find(':') {
            let path = &url[colon_pos + 1..];
            if !path.is_empty() {
                return Some(path.to_string());
            }
        }
    }
    None
}

fn main() {
    println!("cargo:rustc-env=DEVCLI_DEMO_REPO_NAME={}", get_repo_name());
    println!("cargo:rustc-env=DEVCLI_DEMO_BUILD_DATE={}", get_build_date());

    // Only emit git SHA when NOT building with --features release
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git_result = GitclBuilder::default().sha(true).build();

        let emit_result = match git_result {
            Ok(git) => Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit()),
            Err(e) => {
                eprintln!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        if let Err(e) = emit_result {
            // Not in a git repo (e.g. building from a crates.io tarball)
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
