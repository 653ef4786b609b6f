use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use raceline::{
    RaceSession, RaceSessionOpts, RandomColorSource, TickFrame, TickOutput, TickRate, Timeline,
    parse_records,
};

#[derive(Parser, Debug)]
#[command(name = "raceline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate the input and print a single timeline frame as JSON.
    Frame(FrameArgs),
    /// Play the timeline as text frames at a fixed cadence.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input CSV (header must name year, country, population).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based, first-occurrence year order).
    #[arg(long)]
    index: usize,

    /// Output JSON path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input CSV (header must name year, country, population).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Ticks to play (default: one full loop).
    #[arg(long)]
    ticks: Option<usize>,

    /// Milliseconds per tick.
    #[arg(long = "tick-ms", default_value_t = raceline::DEFAULT_TICK_MILLIS)]
    tick_ms: u64,

    /// Bars shown per frame.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Countries toggled off before playback starts.
    #[arg(long)]
    hide: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn load_timeline(path: &Path) -> anyhow::Result<Timeline> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read input '{}'", path.display()))?;
    let records = parse_records(&text)?;
    Ok(Timeline::from_records(&records))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.in_path)?;
    let frame = timeline
        .frame(raceline::FrameIndex(args.index))
        .with_context(|| {
            format!(
                "frame index {} out of bounds (timeline has {} frames)",
                args.index,
                timeline.len()
            )
        })?;

    let json = serde_json::to_string_pretty(frame).context("serialize frame")?;
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write json '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.in_path)?;
    if timeline.is_empty() {
        eprintln!("no data in {}", args.in_path.display());
        return Ok(());
    }

    let tick_rate = TickRate::from_millis(args.tick_ms)?;
    let mut session = RaceSession::new(
        timeline,
        Box::new(RandomColorSource::from_entropy()),
        RaceSessionOpts { tick_rate },
    );
    // Seed first so each --hide toggle removes instead of inserting.
    session.seed_selection();
    for country in &args.hide {
        session.toggle(country);
    }

    let ticks = args.ticks.unwrap_or_else(|| session.timeline().len());
    for i in 0..ticks {
        match session.tick() {
            TickOutput::NoData => {
                eprintln!("no data");
                break;
            }
            TickOutput::Frame(frame) => {
                print_frame(&frame, args.top);
                if i + 1 < ticks {
                    std::thread::sleep(tick_rate.as_duration());
                }
            }
        }
    }
    Ok(())
}

fn print_frame(frame: &TickFrame, top: usize) {
    println!(
        "{}  total {}  [{:>5.1}%]",
        frame.year,
        format_number(frame.total_population),
        frame.progress * 100.0
    );

    // Display order is the renderer's business; a race reads best by value.
    let mut rows: Vec<_> = frame.rows.iter().collect();
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    for row in rows.iter().take(top) {
        println!(
            "  {} {:<28} {:>16}  {}",
            row.icon,
            row.label,
            format_number(row.value),
            row.color
        );
    }
    println!();
}

/// Thousands-separated display form; non-finite values print as "n/a".
fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
