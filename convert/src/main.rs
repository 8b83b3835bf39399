use anyhow::Context as _;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use intransitive_dice_core::{document, input, DiceSet, DisplayList, Relationships};

const USAGE_HINT: &str =
    "To use this in dice-sets.json, add the contents of the JSON object above to your dice-sets.json file.";

#[derive(Debug, clap::Parser)]
#[command(about = "Compute which dice beat which and print the result as JSON")]
struct Args {
    #[arg(value_name = "INPUT_FILE")]
    /// Text file with one die per line, faces separated by commas
    input: PathBuf,

    #[arg(value_name = "SET_NAME")]
    /// Top level key of the JSON output, defaults to the input file name without extension
    set_name: Option<String>,

    #[arg(
        value_name = "PLAYERS",
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    /// Number of players, every group of PLAYERS - 1 dice is checked against the remaining dice
    players: u32,

    #[arg(long, short, value_name = "PATH")]
    /// Write the JSON to a file instead of stdout
    output: Option<PathBuf>,
}

impl Args {
    fn set_key(&self) -> String {
        self.set_name
            .clone()
            .unwrap_or_else(|| document::default_set_key(&self.input))
    }
}

fn convert(args: &Args) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Input file '{}' could not be read", args.input.display()))?;
    let dice = input::parse_dice(&text)
        .with_context(|| format!("Invalid dice data in '{}'", args.input.display()))?;
    let set = DiceSet::from_dice(dice, args.players as usize)?;

    for (label, die) in set.iter() {
        log::debug!("die {label}: {die}");
    }

    let relationships = Relationships::compute(&set);
    for (label, beaten) in &relationships.beats {
        log::info!("{label} beats {}", DisplayList::with_separator(beaten.iter(), " "));
    }
    for cycle in &relationships.cycles {
        log::info!("intransitive cycle {cycle}");
    }

    let name = document::display_name(&args.input);
    let doc = document::DiceSetDocument::new(name, &set, relationships);
    Ok(document::to_json(&args.set_key(), &doc)?)
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();

    let args = Args::parse();
    let json = convert(&args)?;

    if let Some(path) = &args.output {
        std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        eprintln!("{} {}", " WROTE ".black().on_green(), path.display());
    } else {
        println!("{json}");
        eprintln!();
        eprintln!("{}", USAGE_HINT.dimmed());
    }

    Ok(())
}
