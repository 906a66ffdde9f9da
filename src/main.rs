//! Jamtool CLI - Command-line tool for extracting LEGO JAM archives.
//!
//! This is the main entry point for the jamtool command-line application.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use glob::{MatchOptions, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

use jamtool::prelude::*;

/// Jamtool - LEGO JAM archive extraction tool
#[derive(Parser)]
#[command(name = "jamtool")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JAM file
    #[arg(value_name = "INPUT_ARCHIVE")]
    input: PathBuf,

    /// Existing output directory; the archive is dumped into a sibling folder
    #[arg(value_name = "OUTPUT_DIRECTORY", required_unless_present = "list")]
    output: Option<PathBuf>,

    /// List the archive tree instead of extracting it
    #[arg(short, long)]
    list: bool,

    /// Only list entries whose path matches this pattern (glob-style, case-insensitive)
    #[arg(short, long, requires = "list")]
    filter: Option<String>,

    /// Maximum number of files or subdirectories in one directory
    #[arg(long, env = "JAM_MAX_ENTRIES", default_value_t = jamtool::archive::DEFAULT_MAX_ENTRIES)]
    max_entries: u32,

    /// Maximum directory nesting depth
    #[arg(long, env = "JAM_MAX_DEPTH", default_value_t = jamtool::archive::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn limits(&self) -> Limits {
        Limits::default()
            .with_max_entries(self.max_entries)
            .with_max_depth(self.max_depth)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let pb = ProgressBar::new_spinner();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(LogWriter(pb.clone()))))
        .init();

    if !cli.input.is_file() {
        eprintln!("Invalid JAM file \"{}\"", cli.input.display());
        return ExitCode::FAILURE;
    }

    let result = if cli.list {
        cmd_list(&cli.input, cli.filter.as_deref(), &cli.limits())
    } else {
        match cli.output.as_deref() {
            Some(output) if output.is_dir() => cmd_extract(&pb, &cli.input, output, &cli.limits()),
            Some(output) => {
                eprintln!("Invalid output directory \"{}\"", output.display());
                return ExitCode::FAILURE;
            }
            None => {
                eprintln!("Missing output directory");
                return ExitCode::FAILURE;
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_extract(pb: &ProgressBar, input: &Path, output: &Path, limits: &Limits) -> Result<()> {
    let registry = ProcessorRegistry::default();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let outcome = jamtool::archive::extract_jam_file_with(
        input,
        output,
        &registry,
        limits,
        |event| match event {
            ExtractEvent::FileExtracted { path, .. } => {
                pb.inc(1);
                pb.set_message(path.to_string());
            }
            ExtractEvent::FileFailed { path, .. } => {
                pb.set_message(format!("{} (failed)", path));
            }
            ExtractEvent::DirectoryCreated { .. } => {}
        },
    );
    pb.finish_and_clear();

    // Failures were already logged by the driver; they do not change the exit status.
    if let Some(summary) = outcome.summary() {
        println!(
            "Extracted {} files ({} empty, {} failed) in {} directories in {:?}",
            summary.files,
            summary.empty_files,
            summary.failed_files,
            summary.directories,
            start.elapsed()
        );
    }

    Ok(())
}

/// Log sink that hides the spinner while a record is written to stderr.
struct LogWriter(ProgressBar);

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

fn cmd_list(input: &Path, filter: Option<&str>, limits: &Limits) -> Result<()> {
    let pattern = filter
        .map(Pattern::new)
        .transpose()
        .context("Invalid filter pattern")?;
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let file = File::open(input).context("Failed to open JAM file")?;
    let entries =
        list_entries(BufReader::new(file), limits).context("Failed to read JAM file")?;

    let mut files = 0;
    let mut bytes = 0u64;
    for entry in &entries {
        if let Some(pattern) = &pattern {
            if !pattern.matches_with(&entry.path, options) {
                continue;
            }
        }

        match entry.kind {
            EntryKind::Directory { .. } => println!("{:>12} {}/", "", entry.path),
            EntryKind::File { data_size, .. } => {
                println!("{:>12} {}", data_size, entry.path);
                files += 1;
                bytes += u64::from(data_size);
            }
        }
    }

    println!("\nTotal: {} files, {} bytes", files, bytes);

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_required_unless_listing() {
        assert!(Cli::try_parse_from(["jamtool", "LEGO.JAM"]).is_err());

        let cli = Cli::try_parse_from(["jamtool", "-l", "LEGO.JAM"]).unwrap();
        assert!(cli.list);
        assert!(cli.output.is_none());

        let cli = Cli::try_parse_from(["jamtool", "LEGO.JAM", "out", "-vv"]).unwrap();
        assert_eq!(cli.output.as_deref(), Some(Path::new("out")));
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_limits_from_args() {
        let cli = Cli::try_parse_from([
            "jamtool",
            "LEGO.JAM",
            "out",
            "--max-entries",
            "10",
            "--max-depth",
            "3",
        ])
        .unwrap();

        let limits = cli.limits();
        assert_eq!(limits.max_files, 10);
        assert_eq!(limits.max_subdirectories, 10);
        assert_eq!(limits.max_depth, 3);
    }

    #[test]
    fn test_filter_only_with_list() {
        assert!(Cli::try_parse_from(["jamtool", "LEGO.JAM", "out", "-f", "*.BMP"]).is_err());

        let cli = Cli::try_parse_from(["jamtool", "-l", "-f", "MENU/*", "LEGO.JAM"]).unwrap();
        assert_eq!(cli.filter.as_deref(), Some("MENU/*"));
    }

    #[test]
    fn test_log_writer_passes_bytes_through() {
        let pb = ProgressBar::hidden();
        let mut writer = LogWriter(pb.clone());

        writer.write_all(b"[WARN] skipped\n").unwrap();
        writer.flush().unwrap();
        assert!(!pb.is_finished());
    }
}
