use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use toppages_core::load::{load_probabilities, load_urls};
use toppages_core::report::{build_reports, render_report, save_report};
use toppages_core::{DEFAULT_TOP_K, ReportFormat, Variant};
use tracing::{debug, info};

use crate::commands::{DEFAULT_NAIVE_PATH, DEFAULT_OPTIMIZED_PATH, DEFAULT_URLS_PATH};

pub const NAIVE: &str = "naive";
pub const OPTIMIZED: &str = "optimized";

/// Everything one report run needs.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub naive: PathBuf,
    pub optimized: PathBuf,
    pub urls: PathBuf,
    pub top_k: usize,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            naive: PathBuf::from(DEFAULT_NAIVE_PATH),
            optimized: PathBuf::from(DEFAULT_OPTIMIZED_PATH),
            urls: PathBuf::from(DEFAULT_URLS_PATH),
            top_k: DEFAULT_TOP_K,
            format: ReportFormat::Text,
            output: None,
        }
    }
}

impl ReportOptions {
    pub fn from_matches(args: &ArgMatches) -> Self {
        let dir = args.get_one::<String>("dir").map(String::as_str);
        let input = |id: &str, default: &str| {
            let path = args.get_one::<String>(id).map(String::as_str).unwrap_or(default);
            resolve_input_path(path, dir)
        };

        let format = args
            .get_one::<String>("format")
            .and_then(|f| ReportFormat::from_str(f))
            .unwrap_or(ReportFormat::Text);
        let top_k = args
            .get_one::<u64>("top")
            .map(|&k| k as usize)
            .unwrap_or(DEFAULT_TOP_K);
        let output = args
            .get_one::<String>("output")
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()));

        Self {
            naive: input("naive", DEFAULT_NAIVE_PATH),
            optimized: input("optimized", DEFAULT_OPTIMIZED_PATH),
            urls: input("urls", DEFAULT_URLS_PATH),
            top_k,
            format,
            output,
        }
    }
}

/// Expand `~` and, for relative paths, prefix the base directory if one was given.
pub fn resolve_input_path(path: &str, base_dir: Option<&str>) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    match base_dir {
        Some(dir) if expanded.is_relative() => {
            Path::new(shellexpand::tilde(dir).as_ref()).join(expanded)
        }
        _ => expanded,
    }
}

/// Load all inputs, rank both variants and render the report.
pub fn generate_report(options: &ReportOptions) -> toppages_core::Result<String> {
    let variants = vec![
        Variant::new(NAIVE, load_probabilities(&options.naive)?),
        Variant::new(OPTIMIZED, load_probabilities(&options.optimized)?),
    ];
    let urls = load_urls(&options.urls)?;

    let reports = build_reports(&variants, &urls, options.top_k)?;
    debug!(
        "Rendering {} variant(s) as {}",
        reports.len(),
        options.format.as_str()
    );
    render_report(&reports, options.format)
}

/// Render the report and write it to `out`.
pub fn write_report<W: Write>(options: &ReportOptions, out: &mut W) -> anyhow::Result<()> {
    let report = generate_report(options)?;
    out.write_all(report.as_bytes())
        .context("Failed to write report")?;
    out.flush().context("Failed to write report")?;
    Ok(())
}

pub fn handle_report(args: &ArgMatches) -> anyhow::Result<()> {
    let options = ReportOptions::from_matches(args);
    debug!("{:?}", options);

    match &options.output {
        Some(path) => {
            let report = generate_report(&options)?;
            save_report(&report, path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            info!("Report written to {}", path.display());
            eprintln!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => {
            let stdout = io::stdout();
            write_report(&options, &mut stdout.lock())?;
        }
    }

    Ok(())
}
