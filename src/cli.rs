// File: ./src/cli.rs
//! Command-line surface: argument parsing, help, and the non-interactive
//! import/list/export commands.
use crate::context::AppContext;
use crate::model::adapter::{courses_from_ics, series_to_ics};
use crate::model::CourseRecord;
use crate::storage::LocalStorage;
use crate::store::{Action, CourseStore};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tui,
    Import(PathBuf),
    List,
    Export,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub root: Option<PathBuf>,
    pub command: Command,
}

/// Parses arguments after the binary name.
pub fn parse_args<I, S>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = None;
    let mut command = None;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "-h" | "--help" | "help" => return Ok(Args { root, command: Command::Help }),
            "-r" | "--root" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--root requires a path"))?;
                root = Some(PathBuf::from(path.as_ref()));
            }
            "import" if command.is_none() => {
                let file = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("import requires a file path"))?;
                command = Some(Command::Import(PathBuf::from(file.as_ref())));
            }
            "list" if command.is_none() => command = Some(Command::List),
            "export" if command.is_none() => command = Some(Command::Export),
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(Args {
        root,
        command: command.unwrap_or(Command::Tui),
    })
}

pub fn print_help(binary_name: &str) {
    println!(
        "Coursedeck v{} - Lecture calendar, exercise material and phasor simulator (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} import <file.ics>", binary_name);
    println!("    {} list", binary_name);
    println!("    {} export", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("IMPORT COMMAND:");
    println!(
        "    {} import timetable.ics       Replace stored courses with the file's lectures",
        binary_name
    );
    println!();
    println!("EXPORT COMMAND:");
    println!(
        "    {} export > series.ics        Save series deadlines as tasks",
        binary_name
    );
    println!();
    println!("KEYBINDINGS:");
    println!("    Tab / Shift+Tab   Switch page");
    println!("    Enter             Open the selected entry");
    println!("    i                 Import an ICS file (Calendar page)");
    println!("    Space             Run/pause the phasor simulation");
    println!("    q                 Quit");
}

/// Reads an ICS file and replaces the stored courses with its lectures.
/// Returns the number of courses after grouping.
pub fn import_file(ctx: &dyn AppContext, path: &Path) -> Result<usize> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    let imported = courses_from_ics(&raw);
    if imported.is_empty() {
        bail!("No events found in {:?}", path);
    }

    let mut store = CourseStore::open(Box::new(LocalStorage::from_context(ctx)?));
    store.dispatch(Action::BulkAdd(imported))?;
    log::info!("Imported {} courses from {:?}", store.courses().len(), path);
    Ok(store.courses().len())
}

/// One line per course: id, lecture count and progress.
pub fn list_lines(courses: &[CourseRecord]) -> Vec<String> {
    if courses.is_empty() {
        return vec!["No courses imported".to_string()];
    }
    courses
        .iter()
        .map(|c| {
            let (done, total) = c.progress();
            format!(
                "{}  [{} lectures, {} series, {}/{} done]",
                c.id,
                c.lectures.len(),
                c.series.len(),
                done,
                total
            )
        })
        .collect()
}

pub fn load_courses(ctx: &dyn AppContext) -> Result<Vec<CourseRecord>> {
    let store = CourseStore::open(Box::new(LocalStorage::from_context(ctx)?));
    Ok(store.courses().to_vec())
}

pub fn export_string(ctx: &dyn AppContext) -> Result<String> {
    Ok(series_to_ics(&load_courses(ctx)?))
}
