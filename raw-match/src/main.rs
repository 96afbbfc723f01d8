use anyhow::Context;
use clap::Parser;
use common::constants::{KEY_LENGTH, RAW_EXTENSION};
use common::file_copier;
use common::file_lister::list_files;
use common::key::DerivedKey;
use common::matcher::matches;
use common::types::{CopyOutcome, FileList, Opts};
use common::{announce, verbose};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[clap(
    version,
    about = "Copies the raw files which go with a set of chosen photos",
    long_about = "For every file under NEEDED, takes the first 8 characters of its name, adds \
    EXTENSION, and copies every file under POOL with exactly that name into DESTINATION. \
    If the name is already taken in DESTINATION, a random number is added before the extension."
)]
struct Cli {
    /// Extension of the raw files to look for
    #[clap(short, long, default_value = RAW_EXTENSION)]
    extension: String,
    /// Print what would happen, without doing it
    #[clap(short, long)]
    noop: bool,
    /// Be verbose
    #[clap(short, long)]
    verbose: bool,
    /// Directory of chosen photos
    needed: PathBuf,
    /// Directory to search for raw files
    pool: PathBuf,
    /// Directory to copy raw files into. Created if it does not exist
    destination: PathBuf,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    needed: usize,
    copied: usize,
    renamed: usize,
    skipped: usize,
    failed: usize,
}

impl Summary {
    fn record(&mut self, outcome: &CopyOutcome) {
        self.copied += 1;
        if let CopyOutcome::Renamed(_) = outcome {
            self.renamed += 1;
        }
    }
}

fn ensure_dir(dir: &Path, opts: &Opts) -> anyhow::Result<()> {
    if !dir.exists() {
        announce!(opts, "Creating {}", dir.display());

        if !opts.noop {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
    }

    Ok(())
}

fn copy_all(
    needed: &FileList,
    pool: &FileList,
    destination: &Path,
    extension: &str,
    opts: &Opts,
) -> Summary {
    let mut summary = Summary {
        needed: needed.len(),
        ..Summary::default()
    };

    for file in needed {
        let key = match DerivedKey::derive(&file.name, extension) {
            Ok(key) => key,
            Err(e) => {
                eprintln!("WARNING: {}, skipping", e);
                summary.skipped += 1;
                continue;
            }
        };

        let found = matches(&key, pool);

        if found.is_empty() {
            verbose!(opts, "{}: no {} in pool", file.path.display(), key);
        }

        for candidate in found {
            match file_copier::copy_match(&candidate.path, destination, &key, opts) {
                Ok(outcome) => summary.record(&outcome),
                Err(e) => {
                    eprintln!("ERROR: {}", e);
                    summary.failed += 1;
                }
            }
        }
    }

    summary
}

fn run(cli: &Cli) -> anyhow::Result<Summary> {
    let opts = Opts {
        verbose: cli.verbose,
        noop: cli.noop,
    };

    let needed = list_files(&cli.needed).context("failed to list needed files")?;
    let pool = list_files(&cli.pool).context("failed to list source files")?;

    println!("Files to copy: {}", needed.len());
    println!("Source files: {}", pool.len());

    ensure_dir(&cli.destination, &opts)?;

    let summary = copy_all(&needed, &pool, &cli.destination, &cli.extension, &opts);

    println!(
        "{} files copied from {} needed",
        summary.copied, summary.needed
    );
    println!("Generated unique names for: {} files", summary.renamed);

    if summary.skipped > 0 {
        println!(
            "Skipped {} files with names shorter than {} characters",
            summary.skipped, KEY_LENGTH
        );
    }

    Ok(summary)
}

fn main() {
    let cli = Cli::parse();

    let summary = match run(&cli) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            std::process::exit(2);
        }
    };

    if summary.failed > 0 {
        eprintln!("Encountered {} error(s)", summary.failed);
        std::process::exit(1);
    }
}
