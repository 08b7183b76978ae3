//! Main Entry Point
//!
//! Orchestrates one documentation run: collect source files, extract
//! interface entries file by file, and render the combined sequence as
//! markdown to the requested sink. All errors are fatal at the point of
//! first occurrence; nothing is rendered after a failure.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::collector;
use crate::logging::Logger;
use crate::render::render_markdown;
use ifdoc_extractor::{InterfaceEntry, InterfaceExtractor};

/// Options controlling one documentation run.
#[derive(Debug, Clone, Default)]
pub struct DocgenOptions {
    /// Comma separated list of files to process. Takes priority over
    /// `directory` when both are set.
    pub files: Option<String>,
    /// Directory to process recursively.
    pub directory: Option<String>,
    /// Output file; stdout when absent.
    pub output: Option<String>,
    /// Substring patterns excluded from the directory walk.
    pub exclude: Vec<String>,
}

/// Run the pipeline and map the outcome to a process exit code.
pub fn main_fn(options: &DocgenOptions, logger: &dyn Logger) -> i32 {
    match run(options, logger) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

/// Collect, extract and render.
pub fn run(options: &DocgenOptions, logger: &dyn Logger) -> Result<()> {
    let sources = if let Some(list) = &options.files {
        collector::collect_file_list(list)
    } else if let Some(dir) = &options.directory {
        collector::collect_directory(Path::new(dir), &options.exclude)?
    } else {
        bail!("you must provide either a list of files or a directory to process");
    };

    logger.info(&format!("processing {} source files", sources.len()));

    let mut entries: Vec<InterfaceEntry> = Vec::new();
    for path in &sources {
        let text = fs::read_to_string(path)
            .with_context(|| format!("error processing file {}", path.display()))?;
        let found = InterfaceExtractor::extract(&text);
        logger.debug(&format!("{}: {} interfaces", path.display(), found.len()));
        entries.extend(found);
    }

    match &options.output {
        Some(target) => {
            let file = File::create(target)
                .with_context(|| format!("error creating output file {}", target))?;
            let mut out = BufWriter::new(file);
            render_markdown(&entries, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render_markdown(&entries, &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NullLogger;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_specification_exits_nonzero() {
        let code = main_fn(&DocgenOptions::default(), &NullLogger);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_missing_file_exits_nonzero() {
        let options = DocgenOptions {
            files: Some("definitely-not-here.ts".to_string()),
            ..Default::default()
        };
        let code = main_fn(&options, &NullLogger);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_file_list_takes_priority_over_directory() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("only.ts");
        fs::write(&source, "interface Only {\n  a: string;\n}\n").unwrap();
        let target = dir.path().join("out.md");

        let options = DocgenOptions {
            files: Some(source.to_string_lossy().into_owned()),
            directory: Some("no-such-directory".to_string()),
            output: Some(target.to_string_lossy().into_owned()),
            exclude: Vec::new(),
        };

        let code = main_fn(&options, &NullLogger);
        assert_eq!(code, 0);
        let rendered = fs::read_to_string(&target).unwrap();
        assert!(rendered.contains("# Interface: Only"));
    }

    #[test]
    fn test_failure_leaves_no_output_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.md");

        let options = DocgenOptions {
            files: Some("definitely-not-here.ts".to_string()),
            output: Some(target.to_string_lossy().into_owned()),
            ..Default::default()
        };

        let code = main_fn(&options, &NullLogger);
        assert_eq!(code, 1);
        assert!(!target.exists());
    }
}
