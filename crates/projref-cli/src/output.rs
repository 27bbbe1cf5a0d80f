//! Text rendering of reconciliation reports

use std::io::Write;
use std::path::PathBuf;

use projref_core::Report;

use crate::error::Result;

/// Render one report in the fixed section layout: a header line with the
/// descriptor path, then each non-empty section as a blank line, an indented
/// title, and indented absolute paths. A trailing blank line separates
/// consecutive descriptors.
pub fn render(report: &Report, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "{}", report.descriptor.display())?;

    let sections: [(&str, &Vec<PathBuf>); 4] = [
        ("Files not in the project", &report.missing_from_descriptor),
        ("Directories not in the project", &report.suspect_directories),
        (
            "References not in the file system",
            &report.missing_from_disk,
        ),
        (
            "References in the project more than once",
            &report.duplicate_references,
        ),
    ];
    for (title, paths) in sections {
        if paths.is_empty() {
            continue;
        }
        writeln!(writer)?;
        writeln!(writer, "  {title}:")?;
        for path in paths {
            writeln!(writer, "    {}", path.display())?;
        }
    }

    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            descriptor: PathBuf::from("/proj/app.csproj"),
            missing_from_descriptor: vec![PathBuf::from("/proj/src/Extra.cs")],
            suspect_directories: vec![PathBuf::from("/proj/stray")],
            missing_from_disk: vec![PathBuf::from("/proj/src/Gone.cs")],
            duplicate_references: vec![PathBuf::from("/proj/src/Main.cs")],
        }
    }

    #[test]
    fn test_render_full_layout() {
        let mut out = Vec::new();
        render(&sample_report(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "/proj/app.csproj\n\
             \n  Files not in the project:\n    /proj/src/Extra.cs\n\
             \n  Directories not in the project:\n    /proj/stray\n\
             \n  References not in the file system:\n    /proj/src/Gone.cs\n\
             \n  References in the project more than once:\n    /proj/src/Main.cs\n\
             \n"
        );
    }

    #[test]
    fn test_render_clean_report_is_header_only() {
        let report = Report {
            descriptor: PathBuf::from("/proj/app.csproj"),
            missing_from_descriptor: Vec::new(),
            suspect_directories: Vec::new(),
            missing_from_disk: Vec::new(),
            duplicate_references: Vec::new(),
        };
        let mut out = Vec::new();
        render(&report, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "/proj/app.csproj\n\n");
    }
}
