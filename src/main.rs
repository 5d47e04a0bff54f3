use clap::Parser;
use log::info;

use kvtable::config::TableConfig;
use kvtable::error::TableError;
use kvtable::logger::initialize_logger;
use kvtable::prelude::*;

/// Builds the two example tables and prints a few lookups.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bucket count. Defaults to `KVTABLE_BUCKETS`, then 8.
    #[arg(short, long)]
    buckets: Option<usize>,

    /// Log every append and overwrite.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), TableError> {
    let args = Args::parse();
    initialize_logger(args.verbose);

    let config = match args.buckets {
        Some(buckets) => TableConfig::new(buckets)?,
        None => TableConfig::from_env()?,
    };

    let mut words: KeyValueTable<&str, i32> =
        KeyValueTable::with_config(&config, ModuloHasher::default())?;
    words.extend([("foo", 0), ("bar", 1), ("baz", 2)]);

    for key in ["foo", "nope!"] {
        let (value, found) = words.get_or_default(&key);
        info!("words[{key:?}] = ({value}, {found})");
    }

    let mirror_hash = |key: &u32, buckets: usize| *key as usize % buckets;
    let mut mirror = KeyValueTable::with_config(&config, mirror_hash)?;
    mirror.try_insert(0, "foo")?;

    for key in [0, 3] {
        let (value, found) = mirror.get_or_default(&key);
        info!("mirror[{key}] = ({value:?}, {found})");
    }

    for (index, chain) in words.buckets().enumerate() {
        if !chain.is_empty() {
            info!("bucket {index}: {chain:?}");
        }
    }

    println!("{words:?}");
    println!("{mirror:?}");

    Ok(())
}
