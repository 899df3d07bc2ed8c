//! xtask - Build tasks for termpaint
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use termpaint::cli::Cli;
use termpaint::Registry;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for termpaint")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from the CLI and command definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn render_man(cmd: clap::Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(cmd.clone(), &man_dir.join("termpaint.1"))?;

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        render_man(
            subcommand.clone(),
            &man_dir.join(format!("termpaint-{}.1", name)),
        )?;

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            render_man(
                nested.clone(),
                &man_dir.join(format!("termpaint-{}-{}.1", name, nested.get_name())),
            )?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Generate COMMANDS.md from the CLI and the painting command registry
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let registry = Registry::builtin();
    let mut markdown = String::new();

    markdown.push_str("# termpaint Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI and command definitions.\n\n");

    markdown.push_str("## Command line\n\n");
    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        markdown.push_str(&format!("### termpaint {}\n\n", subcommand.get_name()));
        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }
        if let Some(long_about) = subcommand.get_long_about() {
            markdown.push_str("```\n");
            markdown.push_str(&format!("{}\n", long_about));
            markdown.push_str("```\n\n");
        }
    }

    markdown.push_str("---\n\n## Painting commands\n\n");
    for name in registry.names() {
        markdown.push_str(&format!("- [{}](#{})\n", name, name));
    }
    markdown.push('\n');

    for name in registry.names() {
        let Some(command) = registry.get(name) else {
            continue;
        };
        markdown.push_str(&format!("### {}\n\n", name));

        let options = command.known_options();
        if !options.is_empty() {
            let flags: Vec<String> = options.iter().map(|o| format!("`--{}`", o)).collect();
            markdown.push_str(&format!("Options: {}\n\n", flags.join(", ")));
        }

        for page in command.help_pages() {
            markdown.push_str("```\n");
            markdown.push_str(&format!("{}\n", page));
            markdown.push_str("```\n\n");
        }
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
