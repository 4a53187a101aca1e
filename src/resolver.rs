//! Package discovery via `colcon list`.

use crate::error::PipelineError;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;
use tracing::warn;

/// Resolve package name -> source directory for a workspace by running
/// `colcon --log-base /dev/null list --base-paths <workspace>/*` as a single
/// blocking subprocess.
///
/// A non-zero exit surfaces colcon's stderr as a warning and yields an empty
/// mapping; the caller decides that no packages is fatal. Failure to spawn
/// (colcon not installed) is a `ResolverFailure`.
pub fn package_directories(workspace: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    let base_paths = workspace.join("*");

    let output = Command::new("colcon")
        .args(["--log-base", "/dev/null", "list", "--base-paths"])
        .arg(&base_paths)
        .output()
        .map_err(|e| PipelineError::ResolverFailure(format!("cannot run colcon: {e}")))?;

    if !output.status.success() {
        warn!(
            status = %output.status,
            stderr = %String::from_utf8_lossy(&output.stderr),
            "colcon list failed"
        );
        return Ok(BTreeMap::new());
    }

    Ok(parse_package_list(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse colcon's listing: one package per line, whitespace-separated columns
/// with column 0 = name and column 1 = path. Blank lines and lines with fewer
/// than two columns are skipped; duplicate names overwrite.
pub fn parse_package_list(stdout: &str) -> BTreeMap<String, String> {
    let mut package_dirs = BTreeMap::new();
    for line in stdout.lines() {
        let mut parts = line.split_whitespace();
        let (Some(name), Some(path)) = (parts.next(), parts.next()) else {
            continue;
        };
        package_dirs.insert(name.to_string(), path.to_string());
    }
    package_dirs
}
