use anyhow::{Result, bail};
use chartkit::models::Margin;
use chartkit::viz::{self, HeuristicMeasurer, RenderConfig, Surface};
use chartkit::{nat_range, random_subarray, random_subarray_with, stats, storage};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chartkit",
    version,
    about = "Chart helpers: legends, label wrapping, sampling and year bucketing"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the integers 0..n, one per line.
    Range { n: usize },
    /// Print a random sample of the given items.
    Sample(SampleArgs),
    /// Count timestamped records per calendar year.
    Years(YearsArgs),
    /// Render a color legend to SVG or PNG.
    Legend(LegendArgs),
    /// Wrap a label to a pixel width and print one line per row.
    Wrap(WrapArgs),
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Number of items to draw (all items, shuffled, if larger than the input).
    #[arg(short, long)]
    size: usize,
    /// Seed for a reproducible sample.
    #[arg(long)]
    seed: Option<u64>,
    items: Vec<String>,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct YearsArgs {
    /// Records file (.json array or .csv with a `timestamp` column).
    input: PathBuf,
    /// Bucket by UTC year instead of the local time zone.
    #[arg(long, default_value_t = false)]
    utc: bool,
    /// Save the counts to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct LegendArgs {
    /// Legend keys separated by comma or semicolon.
    #[arg(short, long)]
    keys: String,
    /// Colors (hex or name) matching the keys; defaults to the Office palette.
    #[arg(short, long)]
    colors: Option<String>,
    /// Output path (.svg or .png).
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = 400)]
    width: u32,
    #[arg(long, default_value_t = 300)]
    height: u32,
    /// Margin as `all` or `top,left,bottom,right`.
    #[arg(long, default_value = "40")]
    margin: Margin,
    #[arg(long, default_value_t = 0.0)]
    offset_x: f64,
    #[arg(long, default_value_t = 0.0)]
    offset_y: f64,
    /// Frame the output with a border.
    #[arg(long, default_value_t = false)]
    border: bool,
    /// Font file to register (required for PNG text).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct WrapArgs {
    text: String,
    /// Maximum line width in pixels.
    #[arg(short, long)]
    width: f64,
    #[arg(long, default_value_t = 14)]
    font_px: u32,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Range { n } => {
            for i in nat_range(n) {
                println!("{i}");
            }
            Ok(())
        }
        Command::Sample(args) => cmd_sample(args),
        Command::Years(args) => cmd_years(args),
        Command::Legend(args) => cmd_legend(args),
        Command::Wrap(args) => {
            for line in viz::wrap_lines(&args.text, args.width, args.font_px, &HeuristicMeasurer) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn cmd_sample(args: SampleArgs) -> Result<()> {
    let picked = match args.seed {
        Some(seed) => {
            random_subarray_with(&mut fastrand::Rng::with_seed(seed), &args.items, args.size)
        }
        None => random_subarray(&args.items, args.size),
    };
    for item in picked {
        println!("{item}");
    }
    Ok(())
}

fn cmd_years(args: YearsArgs) -> Result<()> {
    let records = storage::load_records(&args.input)?;
    let counts = if args.utc {
        stats::split_by_year_in(&records, &chrono::Utc)
    } else {
        stats::split_by_year(&records)
    };

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_year_counts_csv(&counts, path)?,
            "json" => storage::save_year_counts_json(&counts, path)?,
            other => bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} years to {}", counts.len(), path.display());
    } else {
        for c in &counts {
            println!("{}\t{}", c.year, c.count);
        }
    }
    Ok(())
}

fn cmd_legend(args: LegendArgs) -> Result<()> {
    let keys = parse_list(&args.keys);
    let colors = match args.colors.as_deref() {
        Some(c) => parse_list(c),
        None => viz::util::palette(keys.len()),
    };

    let mut surface = Surface::new(args.width, args.height);
    viz::construct_legend(
        &mut surface,
        args.width as f64,
        &keys,
        &colors,
        &args.margin,
        args.offset_x,
        args.offset_y,
    )?;
    if args.border {
        viz::add_border(&mut surface)?;
    }

    let cfg = RenderConfig {
        font_path: args.font,
        ..RenderConfig::default()
    };
    viz::render_to_file(&surface, &args.out, &cfg)?;
    eprintln!("Wrote legend to {}", args.out.display());
    Ok(())
}
