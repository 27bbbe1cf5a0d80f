//! Descriptor discovery and the batch scan driver

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use projref_core::{Report, scan_descriptor};
use projref_fs::{DirectoryProbe, walk_files};

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::output;

pub fn run_scan(cli: &Cli) -> Result<()> {
    let target = match &cli.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    if !target.exists() {
        return Err(CliError::unexpected_argument(target));
    }

    let descriptors = find_descriptors(&target, &cli.extension)?;
    if descriptors.is_empty() {
        println!("No project files found to check!");
        return Ok(());
    }

    let failures = if cli.to_file {
        let report_path = report_file_path();
        let file = File::create(&report_path)?;
        let mut writer = BufWriter::new(file);
        let failures = scan_all(cli, &descriptors, &mut writer, true)?;
        writer.flush()?;
        open::that(&report_path)?;
        failures
    } else {
        let mut stdout = io::stdout().lock();
        scan_all(cli, &descriptors, &mut stdout, false)?
    };

    println!("Done.");
    if failures > 0 {
        return Err(CliError::user(format!(
            "{failures} descriptor(s) could not be scanned"
        )));
    }
    Ok(())
}

/// Scan every descriptor to completion. A failed descriptor is reported on
/// stderr and the batch continues; the failure count comes back to the
/// caller for the exit status.
fn scan_all(
    cli: &Cli,
    descriptors: &[PathBuf],
    writer: &mut dyn Write,
    echo: bool,
) -> Result<usize> {
    let casing = DirectoryProbe;
    let mut failures = 0;
    let mut reports: Vec<Report> = Vec::new();

    for descriptor in descriptors {
        match scan_descriptor(descriptor, &cli.ignore, &casing) {
            Ok(report) => {
                if cli.json {
                    reports.push(report);
                } else {
                    if echo {
                        println!("{}", descriptor.display());
                    }
                    output::render(&report, writer)?;
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!(
                    "{}: {}: {}",
                    "error".red().bold(),
                    descriptor.display(),
                    e
                );
            }
        }
    }

    if cli.json {
        serde_json::to_writer_pretty(&mut *writer, &reports)?;
        writeln!(writer)?;
    }
    Ok(failures)
}

/// A file target is scanned as-is; a directory is searched recursively for
/// descriptors carrying `extension`.
fn find_descriptors(target: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }
    let descriptors = walk_files(target)?
        .into_iter()
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        })
        .collect();
    Ok(descriptors)
}

/// `<tempdir>/ProjectDifferences_<timestamp>.txt`, the report naming the
/// tool has always used.
fn report_file_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    std::env::temp_dir().join(format!("ProjectDifferences_{stamp}.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_descriptors_single_file() {
        let temp = TempDir::new().unwrap();
        let descriptor = temp.path().join("app.csproj");
        fs::write(&descriptor, "<Project/>").unwrap();

        assert_eq!(
            find_descriptors(&descriptor, "csproj").unwrap(),
            vec![descriptor]
        );
    }

    #[test]
    fn test_find_descriptors_filters_by_extension() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("a.csproj"), "<Project/>").unwrap();
        fs::write(temp.path().join("nested/b.CSPROJ"), "<Project/>").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        let found = find_descriptors(temp.path(), "csproj").unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| {
            p.extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("csproj"))
        }));
    }

    #[test]
    fn test_report_file_path_shape() {
        let path = report_file_path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("ProjectDifferences_"));
        assert!(name.ends_with(".txt"));
    }
}
