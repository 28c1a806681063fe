use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorswan::models::{AppConfig, BatchReport, OutputFormat};
use colorswan::services::{BatchConverter, Renderer};
use okcolor::View;

#[derive(Parser)]
#[command(name = "colorswan")]
#[command(about = "Convert sRGB colors to the Oklab and Oklch perceptual color spaces")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert colors given on the command line
    Convert {
        /// Colors as "#RRGGBB", "RRGGBB", "r,g,b", "r g b" or "rgb(r, g, b)"
        #[arg(required = true)]
        colors: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Convert one color per line from a file or stdin
    Batch {
        /// Input file ("-" or omitted reads stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Representation to emit: "oklab", "oklch" or "all"
    #[arg(short, long)]
    view: Option<View>,

    /// Output format: "json", "yaml", "text" or "css"
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Decimal places for text and CSS output
    #[arg(short, long)]
    precision: Option<usize>,

    /// YAML config file (defaults to $COLORSWAN_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { colors, output }) => run_convert_command(&colors, output),
        Some(Commands::Batch { input, output }) => run_batch_command(input, output),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout only carries the rendered report
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorswan=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Merge the config file (flag, then env var) with command-line overrides
fn resolve_config(args: OutputArgs) -> anyhow::Result<AppConfig> {
    let config_file = args
        .config
        .or_else(|| std::env::var("COLORSWAN_CONFIG").ok().map(PathBuf::from));

    let config = AppConfig::load(config_file.as_deref()).with_overrides(
        args.view,
        args.format,
        args.precision,
    )?;
    Ok(config)
}

/// Convert colors passed as arguments
fn run_convert_command(colors: &[String], args: OutputArgs) -> anyhow::Result<()> {
    init_tracing();

    let config = resolve_config(args)?;
    let converter = BatchConverter::from_config(&config);
    let report = converter.convert_all(colors.iter().map(String::as_str))?;

    emit(&config, &report)
}

/// Convert colors read line by line
fn run_batch_command(input: Option<PathBuf>, args: OutputArgs) -> anyhow::Result<()> {
    init_tracing();

    let config = resolve_config(args)?;
    let converter = BatchConverter::from_config(&config);

    let report = match input.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            tracing::info!(path = %path.display(), "Reading colors from file");
            let file = std::fs::File::open(&path)
                .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", path.display()))?;
            converter.convert_lines(std::io::BufReader::new(file))?
        }
        None => {
            tracing::debug!("Reading colors from stdin");
            converter.convert_lines(std::io::stdin().lock())?
        }
    };

    emit(&config, &report)
}

/// Print the rendered report, failing the process if any input was rejected
fn emit(config: &AppConfig, report: &BatchReport) -> anyhow::Result<()> {
    let rendered = Renderer::from_config(config).render(report)?;
    println!("{}", rendered.trim_end());

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} inputs could not be converted",
            report.failed.len(),
            report.len()
        );
    }
    Ok(())
}

/// Display version and usage information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("COLORSWAN_CONFIG").ok();

    println!("Colorswan v{VERSION}");
    println!("sRGB to Oklab / Oklch converter\n");

    println!("Environment Variables:");
    println!(
        "  COLORSWAN_CONFIG = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG         = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("colorswan=info (default)")
    );

    println!("\nCommands:");
    println!("  colorswan convert <COLOR>...   Convert colors given as arguments");
    println!("  colorswan batch [-i FILE]      Convert one color per line (stdin by default)");
    println!("\nRun 'colorswan --help' for more details.");
}
