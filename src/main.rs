use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use collision_bench::benchmark::{compare, ResultRecord};
use collision_bench::config::BenchConfig;
use collision_bench::logger::{initialize_logger, level_for_verbosity};
use collision_bench::report;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare open addressing and separate chaining hash tables",
    long_about = None
)]
struct Args {
    /// Read settings from a JSON file; flags below take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Slots per table.
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Entries inserted into each table; half as many keys are searched.
    #[arg(short, long)]
    elements: Option<usize>,

    /// Seed for the key generator.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seed from OS entropy instead of a fixed seed.
    #[arg(long, conflicts_with = "seed")]
    random: bool,

    /// Smallest key drawn (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    key_min: Option<isize>,

    /// Largest key drawn (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    key_max: Option<isize>,

    /// Write the results as JSON for a plotting tool.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log per-phase timings (-v) or the full table layout (-vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Settings from `--config`, or the defaults when no file is given.
    fn base_config(&self) -> Result<BenchConfig, Box<dyn Error>> {
        match &self.config {
            Some(path) => Ok(serde_json::from_reader(File::open(path)?)?),
            None => Ok(BenchConfig::default()),
        }
    }

    /// Layers the command line flags over `config`. Flags that were not given leave the
    /// corresponding value untouched.
    fn apply(&self, mut config: BenchConfig) -> BenchConfig {
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(elements) = self.elements {
            config.element_count = elements;
        }
        if let Some(key_min) = self.key_min {
            config.key_min = key_min;
        }
        if let Some(key_max) = self.key_max {
            config.key_max = key_max;
        }
        if self.random {
            config.seed = None;
        } else if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Args = Args::parse();
    initialize_logger(level_for_verbosity(args.verbose));

    let config: BenchConfig = args.apply(args.base_config()?);
    let results: Vec<ResultRecord> = compare(&config)?;

    print!("{}", report::render(&results));

    if let Some(path) = args.json {
        let mut writer: BufWriter<File> = BufWriter::new(File::create(&path)?);
        report::write_json(&mut writer, &results)?;
        writer.flush()?;
        info!("wrote results to {}", path.display());
    }

    Ok(())
}
