use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use placement_gen::{load_word_list, write_placement_map, Format};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wordcross::{sample_words, PlacementMap, Verification, Word};

#[derive(Parser)]
struct Args {
    /// Path to a file with whitespace-separated words
    word_list: PathBuf,

    /// How many words to pick from the word list
    #[arg(short, long, default_value_t = 10)]
    num_words: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the placement map
    #[arg(short, long, default_value = "out.txt")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Drop placements that put a different letter on a cell of their anchor
    #[arg(long, default_value_t = false)]
    drop_conflicting: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let all_words = load_word_list(&args.word_list)?;
    let words = sample_words(&all_words, args.num_words, &mut rng)?
        .into_iter()
        .map(|text| Word::new(text.clone()).with_context(|| format!("Invalid word '{}'", text)))
        .collect::<anyhow::Result<Vec<Word>>>()?;
    info!(num_words = words.len(), "Loaded words");
    debug!(?words);

    let mut map = PlacementMap::from_words(&words);
    if args.drop_conflicting {
        map = map.without_conflicts();
    }
    let num_unverified = map
        .iter()
        .flat_map(|(_, placements)| placements)
        .filter(|p| p.verification == Verification::Unverified)
        .count();
    info!(
        num_placements = map.total_placements(),
        num_unverified,
        "Finished building placement map"
    );

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create '{}'", args.output.display()))?;
    write_placement_map(BufWriter::new(file), &map, args.format)?;
    info!(output = %args.output.display(), "Wrote placement map");

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
