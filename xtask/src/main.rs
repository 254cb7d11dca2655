//! Development tasks for devcli-demo
//!
//! Usage: `cargo run -p xtask -- man [--out-dir DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use devcli_demo::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for devcli-demo")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for devcli-demo and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    let name = cmd.get_name().to_string();
    write_page(out_dir, &name, cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let page = format!("{}-{}", name, sub.get_name());
        write_page(out_dir, &page, sub.clone())?;
    }
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd)
        .render(&mut buffer)
        .with_context(|| format!("Failed to render man page for {}", name))?;
    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated {}", path.display());
    Ok(())
}
