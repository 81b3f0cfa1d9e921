// Report building and rendering

use crate::error::{ReportError, Result};
use crate::load::check_lengths;
use crate::model::{RankedPage, Variant, VariantReport};
use crate::rank::Ranking;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Markdown => "markdown",
        }
    }
}

/// Rank one variant and resolve its first `k` pages against `urls`.
pub fn build_variant_report(variant: &Variant, urls: &[String], k: usize) -> Result<VariantReport> {
    let ranking = Ranking::new(&variant.probabilities);
    let pages = ranking
        .top(k)
        .iter()
        .enumerate()
        .map(|(pos, &(index, probability))| -> Result<RankedPage> {
            let url = urls.get(index).ok_or_else(|| ReportError::IndexOutOfRange {
                variant: variant.name.clone(),
                index,
                url_count: urls.len(),
            })?;
            Ok(RankedPage {
                rank: pos + 1,
                index,
                probability,
                url: url.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("{}: {} of {} pages selected", variant.name, pages.len(), ranking.len());
    Ok(VariantReport {
        variant: variant.name.clone(),
        pages,
    })
}

/// Build a report for every variant.
///
/// All lengths are checked before any ranking is done, so a mismatched
/// input never yields a partial report.
pub fn build_reports(variants: &[Variant], urls: &[String], k: usize) -> Result<Vec<VariantReport>> {
    for variant in variants {
        check_lengths(variant, urls.len())?;
    }
    variants
        .iter()
        .map(|variant| build_variant_report(variant, urls, k))
        .collect()
}

/// Probability as a percentage with five decimals, e.g. `0.123456` -> `12.34560%`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.5}%", probability * 100.0)
}

fn title(variant: &str) -> String {
    format!("Top web pages ({} algorithm)", variant)
}

pub fn generate_text_report(reports: &[VariantReport]) -> String {
    let mut report = String::new();

    for variant in reports {
        report.push_str(&title(&variant.variant));
        report.push('\n');
        report.push_str("Probability\tURL\n");
        for page in &variant.pages {
            report.push_str(&format!("{}\t{}\n", format_probability(page.probability), page.url));
        }
    }

    report
}

/// JSON has no encoding for infinities, so a report holding one is refused
/// rather than written with `null` in its place.
pub fn generate_json_report(reports: &[VariantReport]) -> Result<String> {
    for variant in reports {
        if let Some(page) = variant.pages.iter().find(|p| !p.probability.is_finite()) {
            return Err(ReportError::NonFiniteJson {
                variant: variant.variant.clone(),
                index: page.index,
                probability: page.probability,
            });
        }
    }

    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "toppages",
                "version": env!("CARGO_PKG_VERSION"),
                "format": "json"
            },
            "variants": reports
        }
    });

    Ok(serde_json::to_string_pretty(&json_report)?)
}

pub fn generate_csv_report(reports: &[VariantReport]) -> String {
    let mut report = String::from("variant,rank,index,probability,url\n");

    for variant in reports {
        for page in &variant.pages {
            report.push_str(&format!(
                "{},{},{},{},{}\n",
                csv_field(&variant.variant),
                page.rank,
                page.index,
                page.probability,
                csv_field(&page.url)
            ));
        }
    }

    report
}

pub fn generate_markdown_report(reports: &[VariantReport]) -> String {
    let mut report = String::new();

    for (idx, variant) in reports.iter().enumerate() {
        if idx > 0 {
            report.push('\n');
        }
        report.push_str(&format!("## {}\n\n", title(&variant.variant)));
        report.push_str("| Rank | Probability | URL |\n");
        report.push_str("|-----:|------------:|-----|\n");
        for page in &variant.pages {
            report.push_str(&format!(
                "| {} | {} | {} |\n",
                page.rank,
                format_probability(page.probability),
                page.url.replace('|', "\\|")
            ));
        }
    }

    report
}

pub fn render_report(reports: &[VariantReport], format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Text => generate_text_report(reports),
        ReportFormat::Json => generate_json_report(reports)?,
        ReportFormat::Csv => generate_csv_report(reports),
        ReportFormat::Markdown => generate_markdown_report(reports),
    })
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
