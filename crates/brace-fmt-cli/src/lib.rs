//! Thin driver around `brace-fmt`: file discovery, config loading, and the
//! check/write/diff flow. Grounded on `rhai-cli`'s `Rhai` + `execute_fmt`
//! shape, minus the HIR/parser plumbing that crate needs and this one
//! doesn't.

pub mod args;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use brace_fmt::options::{Options, OptionsIncomplete};
use similar::{ChangeTag, TextDiff};

use crate::args::FmtArgs;

pub struct BraceFmt;

impl BraceFmt {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: FmtArgs) -> anyhow::Result<()> {
        let mut options = Options::default();
        if args.fragment {
            options.fragment = true;
        }

        let config_path = args.config.clone().unwrap_or_else(|| PathBuf::from(".brace-fmt.toml"));
        if config_path.exists() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config file {}", config_path.display()))?;
            let incomplete: OptionsIncomplete = toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file {}", config_path.display()))?;
            options.update(incomplete);
        }

        let files = collect_files(&args.files)?;
        if files.is_empty() {
            return Err(anyhow!("no input files matched"));
        }

        let mut any_unformatted = false;

        for path in files {
            let source = fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
            let formatted = brace_fmt::format_source(&source, options.clone());

            if source == formatted {
                continue;
            }

            if args.check {
                any_unformatted = true;
                tracing::warn!(path = %path.display(), "not formatted");
                print_diff(&path, &source, &formatted);
            } else {
                fs::write(&path, &formatted).with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "formatted");
            }
        }

        if any_unformatted {
            return Err(anyhow!("some files were not properly formatted"));
        }

        Ok(())
    }
}

impl Default for BraceFmt {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_files(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            out.push(path.to_path_buf());
            continue;
        }

        let matched = glob::glob(pattern).with_context(|| format!("invalid glob pattern {pattern}"))?;
        for entry in matched {
            let entry = entry?;
            if entry.is_file() {
                out.push(entry);
            }
        }
    }
    out.sort();
    out.dedup();
    Ok(out)
}

fn print_diff(path: &Path, original: &str, formatted: &str) {
    let diff = TextDiff::from_lines(original, formatted);
    println!("--- {}", path.display());
    println!("+++ {}", path.display());
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        print!("{sign}{change}");
    }
}
