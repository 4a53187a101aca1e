use anyhow::Context;
use build_time_viz::error::PipelineError;
use build_time_viz::{Result, fmt, log, model, render, resolver, tree};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "build-time-viz")]
#[command(about = "Visualize per-package build times for a colcon workspace", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a treemap of build time aggregated over the source tree.
    Treemap {
        /// Path to the workspace root.
        workspace: PathBuf,

        /// Open the chart in a browser after writing it.
        #[arg(long)]
        show: bool,

        #[arg(long = "output_path", default_value = "build_time_treemap.html")]
        output_path: PathBuf,

        /// Event log, resolved relative to the workspace.
        #[arg(long = "log_file", default_value = "log/latest_build/events.log")]
        log_file: PathBuf,

        /// Path segment the rendered tree is anchored at.
        #[arg(long = "start_folder", default_value = "src")]
        start_folder: String,
    },

    /// Render a Gantt chart of package build spans.
    Gantt {
        /// Path to the workspace root.
        workspace: PathBuf,

        /// Open the chart in a browser after writing it.
        #[arg(long)]
        show: bool,

        #[arg(long = "output_path", default_value = "build_gantt_chart.html")]
        output_path: PathBuf,

        /// Event log, resolved relative to the workspace.
        #[arg(long = "log_file", default_value = "log/latest_build/events.log")]
        log_file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Treemap {
            workspace,
            show,
            output_path,
            log_file,
            start_folder,
        } => {
            // 1) Parse the event log into per-package durations.
            let intervals = log::parse_log_file(&workspace.join(&log_file))?;
            let build_times = log::durations(&intervals);

            // 2) Resolve package directories via colcon.
            let package_dirs = resolver::package_directories(&workspace)?;
            if package_dirs.is_empty() {
                return Err(PipelineError::EmptyResultSet(
                    "no package directories found".into(),
                )
                .into());
            }

            // 3) Build the directory hierarchy and aggregate.
            let hierarchy = tree::build_hierarchy(&package_dirs);
            let aggregation = model::build_treemap_nodes(&hierarchy, &build_times, &start_folder);

            // 4) Render and write.
            let html = render::render_treemap_html(&aggregation.nodes)?;
            std::fs::write(&output_path, html)
                .with_context(|| format!("write {}", output_path.display()))?;
            println!(
                "Wrote {} (total build time {})",
                output_path.display(),
                fmt::seconds_to_minutes_seconds(aggregation.total)
            );

            if show {
                open_in_browser(&output_path)?;
            }
        }

        Commands::Gantt {
            workspace,
            show,
            output_path,
            log_file,
        } => {
            // 1) Parse the event log into build spans.
            let intervals = log::parse_log_file(&workspace.join(&log_file))?;

            // 2) Keep spans whose package also has a resolved directory.
            let package_dirs = resolver::package_directories(&workspace)?;
            let spans: Vec<render::GanttSpan> = intervals
                .iter()
                .filter(|(package, _)| package_dirs.contains_key(*package))
                .map(|(package, interval)| render::GanttSpan {
                    package: package.clone(),
                    start: interval.start,
                    end: interval.end,
                })
                .collect();
            if spans.is_empty() {
                return Err(PipelineError::EmptyResultSet(
                    "no package has both a resolved directory and a recorded build time".into(),
                )
                .into());
            }

            // 3) Render and write.
            let html = render::render_gantt_html(&spans)?;
            std::fs::write(&output_path, html)
                .with_context(|| format!("write {}", output_path.display()))?;
            println!("Wrote {}", output_path.display());

            if show {
                open_in_browser(&output_path)?;
            }
        }
    }

    Ok(())
}

fn open_in_browser(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    const OPENER: &str = "open";
    #[cfg(not(target_os = "macos"))]
    const OPENER: &str = "xdg-open";

    std::process::Command::new(OPENER)
        .arg(path)
        .status()
        .with_context(|| format!("open {} with {}", path.display(), OPENER))?;
    Ok(())
}
