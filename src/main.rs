use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use route_patcher::{
    find_and_replace, patch_document, Document, ModuleDescriptor, PatchOutcome,
    UPDATE_ROUTE_TEMPLATE,
};
use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "route-patcher")]
#[command(about = "Rewrites legacy update-route handlers from a shared template", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the legacy update routes in the target file
    Apply {
        /// Route-handler source file to patch
        #[arg(short, long, default_value = "server/routes.ts")]
        file: PathBuf,

        /// Dry run - report what would change without modifying the file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show unified diff of changes
        #[arg(short, long)]
        diff: bool,
    },

    /// Report per-module status without modifying the file
    Check {
        /// Route-handler source file to inspect
        #[arg(short, long, default_value = "server/routes.ts")]
        file: PathBuf,
    },

    /// List the module descriptors and their naming variants
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            file,
            dry_run,
            diff,
        } => cmd_apply(&file, dry_run, diff),

        Commands::Check { file } => cmd_check(&file),

        Commands::List => cmd_list(),
    }
}

/// Helper: Show unified diff between original and modified content
fn display_diff(file: &Path, original: &str, modified: &str) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (patched)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, modified);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
}

fn cmd_apply(file: &Path, dry_run: bool, show_diff: bool) -> Result<()> {
    let descriptors = ModuleDescriptor::world_bible();

    println!("Target: {}", file.display());
    if dry_run {
        println!("{}", "[DRY RUN - showing what would be applied]".cyan());
    }
    println!();

    let mut document = Document::load(file)?;
    let original = document.text().to_string();

    let report = patch_document(&mut document, &descriptors, UPDATE_ROUTE_TEMPLATE);

    for entry in &report.entries {
        match &entry.outcome {
            PatchOutcome::Patched { .. } => {
                let verb = if dry_run { "Would patch" } else { "Patched" };
                println!(
                    "{} {}: {} ({})",
                    "✓".green(),
                    entry.descriptor,
                    verb,
                    entry.outcome
                );
            }
            PatchOutcome::AlreadyPatched { .. } => {
                println!("{} {}: Already patched", "⊙".yellow(), entry.descriptor);
            }
            PatchOutcome::NoMatch => {
                println!(
                    "{} {}: {}",
                    "⊘".yellow(),
                    entry.descriptor,
                    "no matching update route".yellow()
                );
            }
        }
    }

    if show_diff && original != document.text() {
        display_diff(file, &original, document.text());
    }

    if !dry_run {
        document.save()?;
    }

    println!();
    println!("{}", "Summary:".bold());
    println!("  {} patched", format!("{}", report.patched()).green());
    println!(
        "  {} already patched",
        format!("{}", report.already_patched()).yellow()
    );
    println!("  {} no match", format!("{}", report.no_match()).yellow());

    if !dry_run {
        println!();
        println!("Update routes rewritten in {}", file.display());
    }

    Ok(())
}

fn cmd_check(file: &Path) -> Result<()> {
    let descriptors = ModuleDescriptor::world_bible();

    println!("{}", "Route Status Report".bold());
    println!("Target: {}", file.display());
    println!();

    let document = Document::load(file)?;

    let mut legacy = Vec::new();
    let mut patched = Vec::new();
    let mut absent = Vec::new();

    // Read-only: each descriptor is classified against the original text,
    // discarding the rewritten output.
    for descriptor in &descriptors {
        let (_, outcome) = find_and_replace(document.text(), descriptor, UPDATE_ROUTE_TEMPLATE);
        match outcome {
            PatchOutcome::Patched { .. } => legacy.push(descriptor.to_string()),
            PatchOutcome::AlreadyPatched { .. } => patched.push(descriptor.to_string()),
            PatchOutcome::NoMatch => absent.push(descriptor.to_string()),
        }
    }

    if !patched.is_empty() {
        println!(
            "{} {} ({} modules)",
            "✓".green(),
            "PATCHED".green().bold(),
            patched.len()
        );
        for name in &patched {
            println!("  - {}", name);
        }
        println!();
    }

    if !legacy.is_empty() {
        println!(
            "{} {} ({} modules)",
            "⊙".yellow(),
            "LEGACY".yellow().bold(),
            legacy.len()
        );
        for name in &legacy {
            println!("  - {}", name);
        }
        println!();
    }

    if !absent.is_empty() {
        println!(
            "{} {} ({} modules)",
            "⊘".yellow(),
            "ABSENT".yellow().bold(),
            absent.len()
        );
        for name in &absent {
            println!("  - {}", name);
        }
        println!();
    }

    Ok(())
}

fn cmd_list() -> Result<()> {
    println!("{}", "Module descriptors:".bold());
    for descriptor in ModuleDescriptor::world_bible() {
        println!(
            "  {} (path: /api/{}/:id, schema: insert{}Schema, storage: update{})",
            descriptor.path_segment.bold(),
            descriptor.path_segment,
            descriptor.type_name,
            descriptor.type_name
        );
    }
    Ok(())
}
