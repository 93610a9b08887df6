//! Hand Tally Binary
//!
//! Counts every five-card hand of a deck by label, or labels one hand.

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use handcount::HAND_SIZE;
use handcount::variant::Report;
use handcount::variant::Variant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// log progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Enumerate and classify every hand of a deck", alias = "cnt")]
    Count {
        #[arg(long, value_enum)]
        variant: Variant,
        #[arg(short = 'k', long, default_value_t = HAND_SIZE)]
        size: usize,
        /// tally the sequence in this many contiguous ranges
        #[arg(short, long, default_value_t = 1)]
        parts: usize,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Classify a single hand, e.g. `As Kd Qh Jc Ts`", alias = "cls")]
    Classify {
        #[arg(long, value_enum)]
        variant: Variant,
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    handcount::log(args.verbose);
    match args.command {
        Command::Count {
            variant,
            size,
            parts,
            json,
        } => {
            let report = variant
                .count(size, parts)
                .with_context(|| format!("counting {} hands of {}", variant, size))?;
            render(&report, json)
        }
        Command::Classify {
            variant,
            cards,
            json,
        } => {
            let cards = cards.iter().map(String::as_str).collect::<Vec<&str>>();
            let report = variant
                .classify(&cards)
                .with_context(|| format!("classifying {} hand {}", variant, cards.join(" ")))?;
            render(&report, json)
        }
    }
}

fn render(report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    println!("{}", format!("{:<16}{:>12}", report.variant().to_string(), "count").bold());
    for bucket in report.buckets() {
        let count = format!("{:>12}", bucket.count);
        let count = if bucket.count > 0 {
            count.green()
        } else {
            count.dimmed()
        };
        println!("{:<16}{}", bucket.label, count);
    }
    println!(
        "{}",
        format!("{:<16}{:>12}", "hands", report.hands()).bold()
    );
    Ok(())
}
