mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::LayoutArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "relayout",
    version,
    about = "Rebuild layout-faithful text from OCR fragments"
)]
struct Cli {
    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct text from a JSON file of recognized fragments
    Reconstruct {
        /// Path to fragments JSON (array, {"fragments": [...]}, or {"text": ...})
        input_file: PathBuf,

        /// Fragment boxes use a top-left origin (y grows downward)
        #[arg(long)]
        top_left: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Recognize an image with tesseract and reconstruct its text
    Recognize {
        /// Path to an image file
        image: PathBuf,

        /// Tesseract language(s), e.g. eng+jpn
        #[arg(short, long, default_value = "eng")]
        lang: String,

        /// Tesseract page segmentation mode
        #[arg(long, default_value_t = 3)]
        psm: u32,

        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Inspect presets and validate option files
    Options {
        #[command(subcommand)]
        action: OptionsAction,
    },
}

#[derive(Subcommand)]
enum OptionsAction {
    /// List predefined presets
    List,
    /// Print a preset (or the defaults) as JSON
    Show {
        /// Preset name (e.g., "dense")
        #[arg(default_value = "standard")]
        preset: String,
    },
    /// Validate a custom options file
    Validate {
        /// Path to JSON options file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let result = match cli.command {
        Commands::Reconstruct {
            input_file,
            top_left,
            layout,
        } => commands::reconstruct::run(input_file, top_left, &layout),
        Commands::Recognize {
            image,
            lang,
            psm,
            layout,
        } => commands::recognize::run(image, &lang, psm, &layout),
        Commands::Options { action } => match action {
            OptionsAction::List => commands::options::list(),
            OptionsAction::Show { preset } => commands::options::show(&preset),
            OptionsAction::Validate { file } => commands::options::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
