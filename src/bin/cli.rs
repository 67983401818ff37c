use anyhow::{Context, Result};
use colored::*;
use edgar_financials::core::config::{parse_log_level, FinancialsConfig, OutputFormat};
use edgar_financials::financials;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "edgar-financials",
    about = "Extract fundamental data from an SEC EDGAR XBRL instance document"
)]
struct Opt {
    /// XBRL instance file to parse
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Logging level, overrides EDGAR_LOG_LEVEL
    #[structopt(long)]
    log_level: Option<String>,

    /// Output format (json or debug), overrides EDGAR_OUTPUT_FORMAT
    #[structopt(long)]
    format: Option<OutputFormat>,
}

fn run(opt: Opt) -> Result<()> {
    let mut config = FinancialsConfig::from_env()?;
    if let Some(level) = &opt.log_level {
        config.log_level = parse_log_level(level)?;
    }
    if let Some(format) = opt.format {
        config.output_format = format;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let statement = financials::parse_xbrl(&opt.input)
        .with_context(|| format!("could not parse XBRL from {}", opt.input.display()))?;

    match config.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statement)?),
        OutputFormat::Debug => println!("{:#?}", statement),
    }
    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    if let Err(e) = run(opt) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
