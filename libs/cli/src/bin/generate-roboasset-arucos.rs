//! Generate the robot asset marker boxes.
//!
//! Runs `generate-aruco` once per dictionary and marker id with the batch
//! preset. Failed runs are reported and skipped.

use anyhow::{Context, Result};
use aruco_box::{generator_path, init_logging, BatchArgs};
use clap::Parser;
use marker_box::batch::{generate_commands, run_batch};

fn main() -> Result<()> {
    let args = BatchArgs::parse();
    init_logging(args.verbose);

    let current_exe = std::env::current_exe().ok();
    let generator = generator_path(args.generator.as_deref(), current_exe.as_deref());
    let dictionaries = args.dictionaries();
    let marker_ids = args.marker_ids();

    let commands = generate_commands(&dictionaries, &marker_ids, &args.output_dir)
        .map(|command| command.with_program(&generator));

    if args.dry_run {
        for command in commands {
            println!("{command}");
        }
        return Ok(());
    }

    let summary = run_batch(commands, &args.output_dir)
        .with_context(|| format!("cannot prepare {}", args.output_dir.display()))?;
    println!(
        "Generated {} of {} markers in {} ({} failed)",
        summary.succeeded,
        summary.total(),
        args.output_dir.display(),
        summary.failed
    );
    Ok(())
}
