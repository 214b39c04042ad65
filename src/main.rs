//! # tradepack CLI
//!
//! Command-line interface for the tradepack library.

use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use tradepack::catalog::load_dictionary;
use tradepack::cli::Args;
use tradepack::config::ScanConfig;
use tradepack::core::{FilterConfig, OutputConfig, ProcessingStats, apply_filters, price_summary};
use tradepack::format::{OutputFormat, write_to_format};
use tradepack::parser::AuctionParser;
use tradepack::{Auction, TradeMode, TradepackError};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), TradepackError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let output_path = adjust_output_extension(&args.output, args.format.into());
    let mode: TradeMode = args.mode.into();

    // Print header
    println!("📦 tradepack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("📚 Catalog: {}", args.catalog);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", OutputFormat::from(args.format));
    if args.streaming {
        println!("🌊 Mode:    Streaming");
    }

    let filter_config = build_filter(&args)?;
    println!();

    // Step 1: Catalog
    println!("📚 Loading catalog...");
    let catalog_start = Instant::now();
    let dictionary = load_dictionary(&args.catalog)?;
    println!(
        "   {} terms ({:.2}s)",
        dictionary.len(),
        catalog_start.elapsed().as_secs_f64()
    );

    let config = ScanConfig::new()
        .with_default_mode(mode)
        .with_skip_invalid(!args.strict)
        .with_keep_empty(args.keep_empty);
    let parser = AuctionParser::with_config(dictionary, config);

    // Step 2: Parse
    let (auctions, parse_time) = if args.streaming {
        parse_streaming(&parser, &args.input)?
    } else {
        parse_regular(&parser, &args.input)?
    };
    let parsed_stats = ProcessingStats::from_auctions(&auctions);
    println!(
        "   Found {} auctions with {} listings ({:.2}s)",
        parsed_stats.auction_count,
        parsed_stats.item_count,
        parse_time.as_secs_f64()
    );

    // Step 3: Filter
    let auctions = if filter_config.is_active() {
        println!("🔍 Filtering auctions...");
        let filter_start = Instant::now();
        let filtered = apply_filters(auctions, &filter_config);
        println!(
            "   {} auctions after filtering ({:.2}s)",
            filtered.len(),
            filter_start.elapsed().as_secs_f64()
        );
        filtered
    } else {
        auctions
    };
    let final_stats = ProcessingStats::from_auctions(&auctions);

    // Step 4: Write
    let mut output_config = OutputConfig::new();
    if args.timestamps {
        output_config = output_config.with_timestamps();
    }
    if args.raw {
        output_config = output_config.with_raw();
    }

    let format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    write_to_format(&auctions, &output_path, format, &output_config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!("   Auctions:  {}", final_stats.auction_count);
    println!("   Listings:  {}", final_stats.item_count);
    println!("   For sale:  {}", final_stats.for_sale_count);
    println!("   Wanted:    {}", final_stats.wanted_count);
    println!("   Priced:    {}", final_stats.priced_count);

    if args.summary {
        print_price_summary(&auctions);
    }

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let per_sec = parsed_stats.auction_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} auctions/sec", per_sec);

    Ok(())
}

fn build_filter(args: &Args) -> Result<FilterConfig, TradepackError> {
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_seller(from.clone());
        println!("👤 From:    {}", from);
    }

    if let Some(side) = args.side {
        let side: TradeMode = side.into();
        filter_config = filter_config.with_side(side);
        println!("↔️  Side:    {}", side);
    }

    if let Some(ref item) = args.item {
        filter_config = filter_config.with_item(item);
        println!("🔎 Item:    {}", item);
    }

    Ok(filter_config)
}

/// Parse the whole log in memory
fn parse_regular(parser: &AuctionParser, input: &str) -> Result<(Vec<Auction>, Duration), TradepackError> {
    println!("⏳ Parsing log...");
    let parse_start = Instant::now();
    let auctions = parser.parse(Path::new(input))?;
    Ok((auctions, parse_start.elapsed()))
}

/// Parse line by line (memory-efficient)
fn parse_streaming(parser: &AuctionParser, input: &str) -> Result<(Vec<Auction>, Duration), TradepackError> {
    println!("⏳ Streaming log...");
    let parse_start = Instant::now();
    let auctions = parser.stream(Path::new(input))?.collect::<Result<Vec<_>, _>>()?;
    Ok((auctions, parse_start.elapsed()))
}

fn print_price_summary(auctions: &[Auction]) {
    let summary = price_summary(auctions);
    if summary.is_empty() {
        return;
    }

    let width = summary.iter().map(|s| s.name.len()).max().unwrap_or(0);
    println!();
    println!("💰 Asking prices:");
    for entry in &summary {
        println!(
            "   {:<width$}  x{:<4} min {:>9.0}  max {:>9.0}  mean {:>9.0}",
            entry.name,
            entry.count,
            entry.min,
            entry.max,
            entry.mean,
            width = width
        );
    }
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != "auctions.csv" {
        return output.to_string();
    }
    format!("auctions.{}", format.extension())
}
