//! Tag Series Reader CLI Application
//!
//! Command-line front end for the tag-series-reader library. Reads one or
//! more historical tag files for a time window and exports the resulting
//! series as JSON or CSV, either from command-line tag specs (simple mode)
//! or from a TOML run configuration (config mode).

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tag_series_reader::{
    parse_timestamp, MultiTagReader, ReaderConfig, TagSpec, TimeWindow, ValuePolicy,
};

mod config;
mod output;

use config::OutputFormat;

/// Tag Series Reader - read windowed historical tag data
#[derive(Parser, Debug)]
#[command(name = "tag-series-cli")]
#[command(about = "Read windowed historical tag series and export them", long_about = None)]
#[command(version)]
struct Args {
    /// Tag to read, as PATH[=UNIT]; PATH is the source file without its
    /// .csv suffix (can be repeated)
    #[arg(short, long, value_name = "PATH[=UNIT]")]
    tag: Vec<String>,

    /// Window start, dd.mm.yyyy HH:MM:SS (default: unbounded)
    #[arg(long, value_name = "TIME")]
    from: Option<String>,

    /// Window end, dd.mm.yyyy HH:MM:SS (default: unbounded)
    #[arg(long, value_name = "TIME")]
    to: Option<String>,

    /// Path to a TOML run configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (default: json, or the config file's choice)
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Fail on non-numeric value fields instead of reading them as 0.0
    #[arg(long)]
    strict: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Format {
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Tag Series Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using reader library v{}", tag_series_reader::VERSION);

    if !args.tag.is_empty() {
        simple_mode(&args)
    } else if let Some(config_path) = &args.config {
        config_mode(config_path, &args)
    } else {
        println!("Tag Series Reader - No input specified");
        println!("\nQuick Start:");
        println!("  tag-series-cli --tag data/Q_in=m3/h-m3/s --from \"01.08.2021 00:00:00\" --to \"01.09.2021 00:00:00\"");
        println!("  tag-series-cli --config run.toml");
        println!("\nUse --help for more options");
        Ok(())
    }
}

/// Simple mode - tag specs straight from the command line
fn simple_mode(args: &Args) -> Result<()> {
    let specs: Vec<TagSpec> = args.tag.iter().map(|t| parse_tag_arg(t)).collect();

    let mut reader_config = ReaderConfig::new();
    if args.strict {
        reader_config = reader_config.with_value_policy(ValuePolicy::Strict);
    }

    let window = build_window(args.from.as_deref(), args.to.as_deref())?;
    let format = args.format.map(OutputFormat::from).unwrap_or_default();
    run_read(specs, reader_config, window, format, args.output.as_deref())
}

/// Config mode - everything from a TOML run configuration; command-line
/// window, format and output flags override the file
fn config_mode(config_path: &PathBuf, args: &Args) -> Result<()> {
    log::info!("Loading run configuration from: {:?}", config_path);
    let run = config::load_config(config_path)?;

    if run.input.tags.is_empty() {
        bail!("Run configuration lists no tags");
    }

    let specs: Vec<TagSpec> = run
        .input
        .tags
        .iter()
        .map(|t| TagSpec::new(t.path.clone(), t.unit.clone()))
        .collect();

    let mut reader_config = run.parsing;
    if args.strict {
        reader_config = reader_config.with_value_policy(ValuePolicy::Strict);
    }

    let from = args.from.as_deref().or(run.window.from.as_deref());
    let to = args.to.as_deref().or(run.window.to.as_deref());
    let window = build_window(from, to)?;

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(run.output.format);
    let output_path = args.output.clone().or(run.output.path.clone());
    run_read(specs, reader_config, window, format, output_path.as_deref())
}

fn run_read(
    specs: Vec<TagSpec>,
    reader_config: ReaderConfig,
    window: TimeWindow,
    format: OutputFormat,
    output_path: Option<&std::path::Path>,
) -> Result<()> {
    let reader = MultiTagReader::with_config(specs, reader_config);
    let result = reader.read_all(window)?;

    let total: usize = result.iter().map(|s| s.len()).sum();
    log::info!("Read {} samples across {} tags", total, result.len());

    output::write_result(reader.specs(), &result, format, output_path)?;
    Ok(())
}

/// Parse a PATH[=UNIT] argument into a TagSpec
fn parse_tag_arg(text: &str) -> TagSpec {
    match text.split_once('=') {
        Some((path, unit)) => TagSpec::new(path, unit),
        None => TagSpec::new(text, ""),
    }
}

/// Build a window from optional formatted bounds
fn build_window(from: Option<&str>, to: Option<&str>) -> Result<TimeWindow> {
    let mut window = TimeWindow::ALL;
    if let Some(from) = from {
        window.from =
            parse_timestamp(from).map_err(|e| anyhow!("Invalid --from bound: {}", e))?;
    }
    if let Some(to) = to {
        window.to = parse_timestamp(to).map_err(|e| anyhow!("Invalid --to bound: {}", e))?;
    }
    Ok(window)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
