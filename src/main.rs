//! quality-scorecard: educational software quality evaluation tool
//!
//! Scores four quality metrics on a 0-5 scale and visualizes the result.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use quality_scorecard::{
    cli::{self, exit_codes, EvaluateConfig},
    config::{self, generate_json_schema, load_or_default, AppConfig},
    reports::ReportFormat,
    store::JsonFileStore,
    tui::App,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring model info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScored Metrics:",
        "\n  Defect density:        per KLOC, 0 scores 5, >=10 scores 0",
        "\n  Test coverage:         percent, linear to 5 at 100",
        "\n  Cyclomatic complexity: 1 scores 5, >=20 scores 0",
        "\n  Maintainability index: 0-100, linear to 5 at 100",
        "\n\nOutput Formats:",
        "\n  tui, json, markdown, summary",
        "\n\nWeights:",
        "\n  defects 0.25, coverage 0.30, complexity 0.20, maintainability 0.25"
    )
}

#[derive(Parser)]
#[command(name = "quality-scorecard")]
#[command(author = "Binarly.io")]
#[command(version, long_version = build_long_version())]
#[command(about = "Educational software quality scorecard", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Final score below --min-score
    2  No saved evaluation (export/last)
    3  Error occurred

EXAMPLES:
    # Score a project and view the summary
    quality-scorecard evaluate -d 2 -c 80 -x 5 -m 90 -o summary

    # Interactive TUI with charts
    quality-scorecard tui

    # CI gate: fail the build below 3.5
    quality-scorecard evaluate -d 2 -c 80 -x 5 -m 90 --min-score 3.5

    # Re-display and export the last evaluation
    quality-scorecard last -o markdown
    quality-scorecard export --dir ./reports")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the evaluation store file
    #[arg(long, global = true, env = "QUALITY_SCORECARD_STORE")]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `evaluate` subcommand
#[derive(Parser)]
struct EvaluateArgs {
    /// Defect density (defects per KLOC); invalid or missing counts as 0
    #[arg(short = 'd', long, value_name = "VALUE")]
    defects: Option<String>,

    /// Test coverage percentage; invalid or missing counts as 0
    #[arg(short = 'c', long, value_name = "VALUE")]
    coverage: Option<String>,

    /// Cyclomatic complexity; invalid or missing counts as 1
    #[arg(short = 'x', long, value_name = "VALUE")]
    complexity: Option<String>,

    /// Maintainability index (0-100); invalid or missing counts as 0
    #[arg(short = 'm', long, value_name = "VALUE")]
    maintainability: Option<String>,

    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the final score is below this threshold
    #[arg(long, value_name = "SCORE")]
    min_score: Option<f64>,

    /// Do not persist the evaluation
    #[arg(long)]
    no_store: bool,
}

/// Arguments for the `last` subcommand
#[derive(Parser)]
struct LastArgs {
    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `export` subcommand
#[derive(Parser)]
struct ExportArgs {
    /// Directory the export is written to (default: current directory)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Export filename template
    ///
    /// Placeholders: {date}, {time}
    #[arg(long)]
    template: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score four quality metrics and display the result
    Evaluate(EvaluateArgs),

    /// Re-display the last saved evaluation
    Last(LastArgs),

    /// Export the last saved evaluation to a timestamped JSON file
    Export(ExportArgs),

    /// Open the interactive TUI
    Tui,

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .quality-scorecard.yaml in the current directory
    Init,
    /// Print the JSON Schema for the configuration format
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (config, config_path) = load_or_default(cli.config.as_deref());
    if let Some(path) = &config_path {
        tracing::debug!("Loaded configuration from {}", path.display());
    }

    let store = resolve_store(cli.store_path.clone(), &config)?;
    let no_color = cli.no_color || config.output.no_color;

    // Dispatch to command handlers
    match cli.command {
        Commands::Evaluate(args) => {
            let evaluate_config = EvaluateConfig {
                defects: args.defects,
                coverage: args.coverage,
                complexity: args.complexity,
                maintainability: args.maintainability,
                output: args.output.unwrap_or(config.output.format),
                output_file: args.output_file,
                min_score: args.min_score,
                no_store: args.no_store,
                no_color,
                export_dir: config.output.export_dir.clone(),
                export_template: config.output.export_template.clone(),
            };
            let exit_code = cli::run_evaluate(evaluate_config, &store)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Commands::Last(args) => {
            let exit_code = cli::run_last(
                args.output.unwrap_or(config.output.format),
                args.output_file,
                no_color,
                config.output.export_dir.clone(),
                config.output.export_template.clone(),
                &store,
            )?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Commands::Export(args) => {
            let dir = args.dir.or_else(|| config.output.export_dir.clone());
            let template = args
                .template
                .or_else(|| config.output.export_template.clone());
            let exit_code = cli::run_export(dir, template, &store)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Commands::Tui => {
            let app = App::new(Box::new(store))
                .with_export_options(
                    config.output.export_dir.clone(),
                    config.output.export_template.clone(),
                )
                .with_mouse(config.tui.mouse_enabled)
                .with_theme(config.tui.theme.clone());
            quality_scorecard::tui::run(app)?;
        }
        Commands::Config { action } => run_config_action(action, &config, config_path)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "quality-scorecard", &mut io::stdout());
        }
    }

    Ok(())
}

/// Resolve the evaluation store from flag, config or the platform default.
fn resolve_store(flag: Option<PathBuf>, config: &AppConfig) -> Result<JsonFileStore> {
    match flag.or_else(|| config.store.path.clone()) {
        Some(path) => Ok(JsonFileStore::new(path)),
        None => Ok(JsonFileStore::at_default_location()?),
    }
}

fn run_config_action(
    action: ConfigAction,
    config: &AppConfig,
    config_path: Option<PathBuf>,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            match &config_path {
                Some(path) => println!("# loaded from {}", path.display()),
                None => println!("# defaults (no config file found)"),
            }
            print!("{}", serde_yaml::to_string(config)?);
        }
        ConfigAction::Path => {
            match config::discover_config_file(None) {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("No config file found."),
            }
            println!("\nSearch order:");
            println!("  1. --config <path>");
            println!("  2. ./.quality-scorecard.yaml");
            println!("  3. <git root>/.quality-scorecard.yaml");
            if let Some(dir) = dirs::config_dir() {
                println!(
                    "  4. {}",
                    dir.join("quality-scorecard")
                        .join(".quality-scorecard.yaml")
                        .display()
                );
            }
            if let Some(home) = dirs::home_dir() {
                println!("  5. {}", home.join(".quality-scorecard.yaml").display());
            }
        }
        ConfigAction::Init => {
            let path = PathBuf::from(".quality-scorecard.yaml");
            if path.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    path.display()
                );
            }
            let mut file = std::fs::File::create(&path)?;
            file.write_all(config::generate_example_config().as_bytes())?;
            println!("Wrote {}", path.display());
        }
        ConfigAction::Schema => {
            println!("{}", generate_json_schema());
        }
    }
    Ok(())
}
