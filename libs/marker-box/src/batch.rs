//! # Batch Generation
//!
//! Templated generator invocations for a cross product of dictionaries and
//! marker ids, executed one after another as subprocesses.
//!
//! A failing invocation is logged and skipped; it never aborts the batch.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use config::constants::{BATCH_PRESET, GENERATOR_BINARY, STL_EXTENSION};
use tracing::{info, warn};

use crate::error::{BoxError, BoxResult};

// =============================================================================
// GENERATOR COMMAND
// =============================================================================

/// One invocation of the marker generator.
///
/// ## Example
///
/// ```rust
/// use std::path::Path;
/// use marker_box::batch::roboasset_command;
///
/// let command = roboasset_command("DICT_4X4_50", 3, Path::new("out"));
/// assert!(command.to_string().contains("--marker_id 3 --magnet_inset_radius 5.15"));
/// assert_eq!(command.output(), Path::new("out/DICT_4X4_50_3.stl"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    program: PathBuf,
    args: Vec<String>,
    output: PathBuf,
}

impl GeneratorCommand {
    /// Executable to run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the executable.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// STL file the invocation writes.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Same invocation with a different executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Process builder for this invocation. Arguments are passed as-is,
    /// never through a shell.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for GeneratorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Generator invocation for `dictionary`/`id` with the batch preset,
/// writing `<output_dir>/<dictionary>_<id>.stl`.
pub fn roboasset_command(dictionary: &str, id: u32, output_dir: &Path) -> GeneratorCommand {
    let output = output_dir.join(format!("{dictionary}_{id}.{STL_EXTENSION}"));
    let p = BATCH_PRESET;

    let mut args = vec![
        "--box_side".to_string(),
        p.side.to_string(),
        "--marker_margin".to_string(),
        p.margin.to_string(),
        "--box_thickness".to_string(),
        p.thickness.to_string(),
        "--marker_groove_depth".to_string(),
        p.groove_depth.to_string(),
        "--aruco_dictionary".to_string(),
        dictionary.to_string(),
        "--marker_id".to_string(),
        id.to_string(),
    ];
    if let Some(radius) = p.magnet_inset_radius {
        args.push("--magnet_inset_radius".to_string());
        args.push(radius.to_string());
    }
    args.push("--layer_height".to_string());
    args.push(p.layer_height.to_string());
    args.push("--output".to_string());
    args.push(output.display().to_string());

    GeneratorCommand {
        program: PathBuf::from(GENERATOR_BINARY),
        args,
        output,
    }
}

/// Lazy cross product of `dictionaries` and `ids`, dictionaries outermost.
pub fn generate_commands<'a, D: AsRef<str>>(
    dictionaries: &'a [D],
    ids: &'a [u32],
    output_dir: &'a Path,
) -> impl Iterator<Item = GeneratorCommand> + 'a {
    dictionaries.iter().flat_map(move |dictionary| {
        ids.iter()
            .map(move |&id| roboasset_command(dictionary.as_ref(), id, output_dir))
    })
}

// =============================================================================
// BATCH RUN
// =============================================================================

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Invocations that exited successfully.
    pub succeeded: usize,
    /// Invocations that could not be started or exited with an error.
    pub failed: usize,
}

impl BatchSummary {
    /// Total number of invocations.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Create `output_dir` and run every command serially.
///
/// # Errors
///
/// Only fails when the output directory cannot be created. Failed
/// invocations are counted in the summary.
pub fn run_batch<I>(commands: I, output_dir: &Path) -> BoxResult<BatchSummary>
where
    I: IntoIterator<Item = GeneratorCommand>,
{
    std::fs::create_dir_all(output_dir).map_err(|source| BoxError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summary = BatchSummary::default();
    for command in commands {
        info!(command = %command, "running generator");
        match command.to_command().status() {
            Ok(status) if status.success() => summary.succeeded += 1,
            Ok(status) => {
                warn!(command = %command, %status, "generator failed");
                summary.failed += 1;
            }
            Err(err) => {
                warn!(command = %command, error = %err, "cannot start generator");
                summary.failed += 1;
            }
        }
    }

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roboasset_command_string() {
        let command = roboasset_command("DICT_APRILTAG_36h11", 1, Path::new("roboasset_arucos"));
        assert_eq!(
            command.to_string(),
            "generate-aruco --box_side 90 --marker_margin 10 --box_thickness 2 \
             --marker_groove_depth 0.8 --aruco_dictionary DICT_APRILTAG_36h11 --marker_id 1 \
             --magnet_inset_radius 5.15 --layer_height 0.2 \
             --output roboasset_arucos/DICT_APRILTAG_36h11_1.stl"
        );
    }

    #[test]
    fn test_generate_commands_order() {
        let dir = Path::new("out");
        let outputs: Vec<PathBuf> = generate_commands(&["A", "B"], &[1, 3], dir)
            .map(|c| c.output().to_path_buf())
            .collect();
        assert_eq!(
            outputs,
            vec![
                dir.join("A_1.stl"),
                dir.join("A_3.stl"),
                dir.join("B_1.stl"),
                dir.join("B_3.stl"),
            ]
        );
    }

    #[test]
    fn test_generate_commands_empty() {
        let none: [&str; 0] = [];
        assert_eq!(generate_commands(&none, &[1], Path::new(".")).count(), 0);
        assert_eq!(generate_commands(&["A"], &[], Path::new(".")).count(), 0);
    }

    #[test]
    fn test_with_program_keeps_args() {
        let command = roboasset_command("DICT_4X4_50", 1, Path::new("."));
        let args = command.args().to_vec();
        let moved = command.with_program("/opt/bin/generate-aruco");
        assert_eq!(moved.program(), Path::new("/opt/bin/generate-aruco"));
        assert_eq!(moved.args(), args.as_slice());
    }

    #[test]
    fn test_run_batch_counts_missing_program_as_failure() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let commands = generate_commands(&["DICT_4X4_50"], &[1, 3], &out)
            .map(|c| c.with_program(dir.path().join("does-not-exist")))
            .collect::<Vec<_>>();
        let summary = run_batch(commands, &out).unwrap();
        assert!(out.is_dir());
        assert_eq!(summary, BatchSummary { succeeded: 0, failed: 2 });
        assert_eq!(summary.total(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_batch_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let commands = vec![
            roboasset_command("A", 1, dir.path()).with_program("false"),
            roboasset_command("A", 3, dir.path()).with_program("true"),
        ];
        let summary = run_batch(commands, dir.path()).unwrap();
        assert_eq!(summary, BatchSummary { succeeded: 1, failed: 1 });
    }
}
