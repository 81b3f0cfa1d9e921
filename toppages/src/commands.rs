use clap::arg;
use toppages_core::DEFAULT_TOP_K;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub const DEFAULT_NAIVE_PATH: &str = "probabilities-naive.log";
pub const DEFAULT_OPTIMIZED_PATH: &str = "probabilities-optimized.log";
pub const DEFAULT_URLS_PATH: &str = "web-16384.urls";

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("toppages")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("toppages")
        .styles(CLAP_STYLING)
        .about(
            "Prints the most probable web pages of the naive and optimized PageRank runs, side by \
            side.",
        )
        .arg(
            arg!(--"naive" <PATH>)
                .required(false)
                .help("Probability log produced by the naive algorithm")
                .default_value(DEFAULT_NAIVE_PATH),
        )
        .arg(
            arg!(--"optimized" <PATH>)
                .required(false)
                .help("Probability log produced by the optimized algorithm")
                .default_value(DEFAULT_OPTIMIZED_PATH),
        )
        .arg(
            arg!(--"urls" <PATH>)
                .required(false)
                .help("Whitespace-delimited list of URLs, one per page")
                .default_value(DEFAULT_URLS_PATH),
        )
        .arg(
            arg!(-d --"dir" <DIR>)
                .required(false)
                .help("Directory that relative input paths are resolved against"),
        )
        .arg(
            arg!(-k --"top" <NUM_PAGES>)
                .required(false)
                .help(format!(
                    "Number of pages to list per algorithm [default: {}]",
                    DEFAULT_TOP_K
                ))
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json, csv, markdown")
                .value_parser(["text", "json", "csv", "markdown", "md"])
                .default_value("text"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Save report to file (default: print to stdout)"),
        )
        .arg(
            arg!(-v --"verbose")
                .required(false)
                .help("Log loading and ranking details to stderr")
                .action(clap::ArgAction::SetTrue),
        )
}
