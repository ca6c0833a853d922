use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use photostack::{
    app::App,
    manifest::{ManifestLoader, ManifestValidator},
};

#[derive(Parser)]
#[command(name = "photostack")]
#[command(about = "A keyboard-driven terminal browser for categorized photo galleries", long_about = None)]
struct Cli {
    /// Path to the gallery manifest (YAML or JSON)
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// Validate the manifest and exit (don't run the TUI)
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Slideshow interval override, e.g. "4s" or "1500ms"
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    slideshow: Option<Duration>,
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s).map_err(|e| e.to_string())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Load manifest
    println!("Loading manifest from: {:?}", cli.manifest);
    let manifest = match ManifestLoader::load_from_file(&cli.manifest) {
        Ok(manifest) => {
            println!("✓ Manifest loaded successfully");
            manifest
        }
        Err(e) => {
            eprintln!("✗ Failed to load manifest: {}", e);
            eprintln!("\nError details: {:?}", e);
            std::process::exit(1);
        }
    };

    // Validate manifest
    println!("Validating manifest...");
    if let Err(e) = ManifestValidator::validate(&manifest) {
        eprintln!("✗ Manifest validation failed: {}", e);
        eprintln!("\nFull error chain:");
        for cause in e.chain() {
            eprintln!("  - {}", cause);
        }
        std::process::exit(1);
    }
    println!("✓ Manifest is valid");

    // If validate-only mode, exit here
    if cli.validate {
        println!("\n✓ Gallery manifest is valid!");
        return Ok(());
    }

    // Show manifest summary
    if cli.verbose {
        println!("\nGallery Summary:");
        println!("  Title: {}", manifest.gallery.title);
        println!("  Categories: {}", manifest.categories.len());
        for category in &manifest.categories {
            println!(
                "    - {} ({}, {} photos)",
                category.id,
                category.title,
                category.image_count()
            );
        }
        println!();
    }

    // Run TUI
    println!("Starting gallery...\n");
    let terminal = ratatui::init();
    let app = App::new(manifest, cli.slideshow).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let result = app
        .run(terminal)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e));
    ratatui::restore();
    result
}
