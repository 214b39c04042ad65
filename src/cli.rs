//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Format`] - Output format options
//! - [`Side`] - Trade direction options
//!
//! Both value enums convert into their library counterparts
//! ([`OutputFormat`](crate::format::OutputFormat), [`TradeMode`]).

use clap::{Parser, ValueEnum};

use crate::auction::TradeMode;

/// Extract trade listings (item, price, quantity, side) from auction chat logs.
#[derive(Parser, Debug, Clone)]
#[command(name = "tradepack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tradepack eqlog.txt --catalog items.txt
    tradepack eqlog.txt -c items.json -o prices.json -f json
    tradepack eqlog.txt -c items.csv --after 2017-01-01 --side selling --summary
    tradepack eqlog.txt -c items.txt --item 'mithril' -t --raw
    tradepack huge_log.txt -c items.txt --streaming -f jsonl")]
pub struct Args {
    /// Path to the chat log
    pub input: String,

    /// Item catalog (.txt one name per line, .json or .csv)
    #[arg(short, long, value_name = "FILE")]
    pub catalog: String,

    /// Path to output file
    #[arg(short, long, default_value = "auctions.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: Format,

    /// Trade direction assumed before the first keyword of a line
    #[arg(long, value_enum, default_value = "selling")]
    pub mode: Side,

    /// Keep auctions on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep auctions on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep auctions from this seller only
    #[arg(long, value_name = "SELLER")]
    pub from: Option<String>,

    /// Keep listings on this side of the trade only
    #[arg(long, value_enum)]
    pub side: Option<Side>,

    /// Keep listings whose item name contains this text
    #[arg(long, value_name = "TEXT")]
    pub item: Option<String>,

    /// Include timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include the raw chat line in output
    #[arg(long)]
    pub raw: bool,

    /// Fail on the first line that is not an auction
    #[arg(long)]
    pub strict: bool,

    /// Keep auctions in which no known item was found
    #[arg(long)]
    pub keep_empty: bool,

    /// Read the log line by line instead of loading it whole
    #[arg(long)]
    pub streaming: bool,

    /// Print min/max/mean asking price per item
    #[arg(long)]
    pub summary: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum Format {
    /// CSV with semicolon delimiter, one row per listing
    #[default]
    Csv,

    /// JSON array of auctions
    Json,

    /// JSON Lines - one auction per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<Format> for crate::format::OutputFormat {
    fn from(format: Format) -> crate::format::OutputFormat {
        match format {
            Format::Csv => crate::format::OutputFormat::Csv,
            Format::Json => crate::format::OutputFormat::Json,
            Format::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Trade direction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Side {
    /// Items offered for sale (WTS)
    #[value(aliases = ["wts", "sell"])]
    Selling,

    /// Items wanted (WTB)
    #[value(aliases = ["wtb", "buy"])]
    Buying,
}

impl From<Side> for TradeMode {
    fn from(side: Side) -> TradeMode {
        match side {
            Side::Selling => TradeMode::Selling,
            Side::Buying => TradeMode::Buying,
        }
    }
}
