//! Synthetic auction log generator for stress testing tradepack.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [lines] [log] [catalog]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_log.txt heavy_items.txt

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

use tradepack::auction::TIMESTAMP_FORMAT;

const MATERIALS: &[&str] = &[
    "Bronze", "Mithril", "Iron", "Crushed", "Runed", "Fire Emerald", "Cat Eye", "Lodizal",
    "Cold Steel", "Hexed", "Orc Fang", "Platinum",
];

const BASES: &[&str] = &[
    "Girdle", "Greaves", "Shell Boots", "Lava Pendant", "Platinum Ring", "Earring", "Vambraces",
    "Wardstaff", "Kerran Doll", "Wedding Band", "Necklace", "Dagger", "Mask",
];

/// Names that are prefixes of other names, to exercise maximal munch.
const NESTED: &[&str] = &["Wurmslayer", "Wurmslayer Mask", "Ale", "Ale Mug", "Spear", "Spear of Fate"];

const SELLERS: &[&str] = &[
    "Kandaar", "Joeleen", "Babanker", "Sneeki", "Stockmarket", "Xegony", "Tunare", "Bob",
];

const NOISE: &[&str] = &[
    "tells you, 'you still selling?'",
    "says, 'anyone for a group?'",
    "shouts, 'TRAIN TO ZONE'",
    "tells the guild, 'raid at 8'",
];

const SEPARATORS: &[&str] = &[" ", " , ", ", ", " | ", " / ", "", " :: "];

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let log_path = args.get(2).map_or("heavy_log.txt", String::as_str);
    let catalog_path = args.get(3).map_or("heavy_items.txt", String::as_str);

    println!("🧪 Auction Log Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Lines:    {}", count);
    println!("   Log:      {}", log_path);
    println!("   Catalog:  {}", catalog_path);
    println!();

    let catalog = build_catalog();
    write_catalog(&catalog, catalog_path)?;
    println!("   Wrote {} catalog names", catalog.len());

    let start = Instant::now();
    let bytes = write_log(&catalog, count, log_path)?;

    let elapsed = start.elapsed().as_secs_f64();
    println!();
    println!(
        "✅ Generated {} lines ({:.1} MB) in {:.2}s",
        count,
        bytes as f64 / 1_000_000.0,
        elapsed
    );
    Ok(())
}

fn build_catalog() -> Vec<String> {
    let mut names: Vec<String> = MATERIALS
        .iter()
        .flat_map(|m| BASES.iter().map(move |b| format!("{m} {b}")))
        .collect();
    names.extend(NESTED.iter().map(|n| (*n).to_string()));
    names
}

fn write_catalog(catalog: &[String], path: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "# generated by gen_test")?;
    for name in catalog {
        writeln!(writer, "{name}")?;
    }
    writer.flush()
}

fn write_log(catalog: &[String], count: usize, path: &str) -> io::Result<usize> {
    let mut writer = BufWriter::with_capacity(1024 * 1024, File::create(path)?);
    let mut rng = rand::thread_rng();
    let mut bytes_written = 0;

    let epoch: NaiveDateTime = NaiveDate::from_ymd_opt(2016, 2, 15)
        .and_then(|d| d.and_hms_opt(17, 0, 0))
        .unwrap_or_default();

    for i in 0..count {
        let ts = epoch + Duration::seconds(i as i64 * 7);
        let seller = SELLERS.choose(&mut rng).copied().unwrap_or("Bob");

        let line = if rng.gen_ratio(1, 5) {
            let noise = NOISE.choose(&mut rng).copied().unwrap_or_default();
            format!("[{}] {} {}", ts.format(TIMESTAMP_FORMAT), seller, noise)
        } else {
            format!(
                "[{}] {} auctions, '{}'",
                ts.format(TIMESTAMP_FORMAT),
                seller,
                generate_body(&mut rng, catalog)
            )
        };

        bytes_written += line.len() + 1;
        writeln!(writer, "{line}")?;

        if (i + 1) % 10_000 == 0 {
            eprint!("\r   Generated {}/{}", i + 1, count);
        }
    }

    writer.flush()?;
    Ok(bytes_written)
}

fn generate_body(rng: &mut impl Rng, catalog: &[String]) -> String {
    let mut body = String::new();
    body.push_str(if rng.gen_bool(0.7) { "WTS " } else { "WTB " });

    let items = rng.gen_range(1..=5);
    for n in 0..items {
        if n > 0 {
            body.push_str(SEPARATORS.choose(rng).copied().unwrap_or(" "));
            if rng.gen_ratio(1, 8) {
                body.push_str(if rng.gen_bool(0.5) { "wtb " } else { "selling " });
            }
        }

        let name = catalog.choose(rng).map_or("Ale", String::as_str);
        body.push_str(&mangle_case(rng, name));

        if rng.gen_bool(0.7) {
            body.push(' ');
            body.push_str(&random_price(rng));
        }
        if rng.gen_ratio(1, 4) {
            body.push_str(&random_quantity(rng));
        }
    }

    if rng.gen_ratio(1, 6) {
        body.push_str(" PST, also have stuff not listed ^_^ >|$");
    }
    body
}

fn mangle_case(rng: &mut impl Rng, name: &str) -> String {
    match rng.gen_range(0..4) {
        0 => name.to_lowercase(),
        1 => name.to_uppercase(),
        _ => name.to_string(),
    }
}

fn random_price(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..5) {
        0 => format!("{}", rng.gen_range(5..2000)),
        1 => format!("{}p", rng.gen_range(5..2000)),
        2 => format!("{}pp", rng.gen_range(5..2000)),
        3 => format!("{}k", rng.gen_range(1..250)),
        _ => format!("{}.{}", rng.gen_range(1..20), rng.gen_range(1..10)),
    }
}

fn random_quantity(rng: &mut impl Rng) -> String {
    let n = rng.gen_range(2..20);
    if rng.gen_bool(0.5) {
        format!(" x{n}")
    } else {
        format!(" {n}x")
    }
}
