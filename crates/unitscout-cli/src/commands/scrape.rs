//! Scrape run: read input URLs, extract records, export them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use unitscout_core::{ExtractOptions, HttpFetcher, Scraper, normalize_input};

use crate::output::{OutputFormat, export_records, resolve_format};
use crate::settings;

/// Arguments for a scrape run.
#[derive(Args)]
pub struct ScrapeArgs {
    /// Input JSON file (array of URLs or objects with a "url" key)
    #[arg(short, long, default_value = "data/input_urls.json")]
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "data/sample_output.json")]
    output: PathBuf,

    /// Output format (defaults to the output extension, then settings)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Collect tel: and mailto: links into OwnerPhones / OwnerEmails
    #[arg(long, overrides_with = "no_retrieve_contact_details")]
    retrieve_contact_details: bool,

    /// Do not collect contact links, even if settings enable it
    #[arg(long, overrides_with = "retrieve_contact_details")]
    no_retrieve_contact_details: bool,
}

impl ScrapeArgs {
    /// Contact retrieval as requested on the command line, if at all.
    fn contact_override(&self) -> Option<bool> {
        match (self.retrieve_contact_details, self.no_retrieve_contact_details) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

pub async fn run(args: ScrapeArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();

    let settings = settings::load(config_path)?.with_contact_override(args.contact_override());

    // Fail before any network traffic if the format cannot be resolved
    let format = resolve_format(args.format, &args.output, &settings.output.default_format)?;

    let raw = fs::read_to_string(&args.input).map_err(|e| {
        anyhow::anyhow!("Failed to read input file {}: {}", args.input.display(), e)
    })?;
    let items = normalize_input(serde_json::from_str(&raw)?)?;

    info!("Loaded {} input URLs from {}", items.len(), args.input.display());

    let fetcher = HttpFetcher::new(&settings.scraper)?;
    let scraper = Scraper::new(
        fetcher,
        ExtractOptions {
            retrieve_contact_details: settings.scraper.retrieve_contact_details,
        },
    );

    let pb = ProgressBar::new(items.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} URLs {msg}")?
            .progress_chars("=>-"),
    );

    let records = scraper
        .run(&items, |item, _| {
            pb.set_message(item.url.clone());
            pb.inc(1);
        })
        .await;

    pb.finish_and_clear();

    export_records(&records, &args.output, format)?;

    info!(
        "Scraped {} records from {} URLs; saved to {}",
        records.len(),
        items.len(),
        args.output.display()
    );

    println!(
        "{} Exported {} records ({}) to {} in {:.2?}",
        style("✓").green(),
        records.len(),
        format,
        args.output.display(),
        start.elapsed()
    );

    Ok(())
}
