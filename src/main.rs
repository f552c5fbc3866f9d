// ABOUTME: Main entry point for the carousel-wizard program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use carousel_wizard::{
    export_print_layout, html, slides, utils, CarouselState, ChromePrintHost, ChromeRasterizer,
    Config, CustomColors, DirectorySink, Exporter, GeminiClient, HtmlRenderer, Profile,
    SlideOutcome, SlideStore, Theme, ThemeSelection,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available themes
    Themes,

    /// Write the print layout of the carousel as HTML
    Html(HtmlArgs),

    /// Export slides as PNG images
    Export(ExportArgs),

    /// Print every slide into one PDF
    Pdf(PdfArgs),

    /// Draft slides for a topic and write them as a deck file
    Generate(GenerateArgs),
}

/// Where the slides, profile and theme come from
#[derive(Args)]
struct DeckArgs {
    /// JSON deck file holding an array of {id, headline, body}
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Replace the slides with an AI draft about this topic
    #[arg(long)]
    topic: Option<String>,

    /// Author name shown in the footer
    #[arg(long)]
    name: Option<String>,

    /// Social handle shown in the footer
    #[arg(long)]
    handle: Option<String>,

    /// Logo image file
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Theme identifier, e.g. modern or midnight_blue
    #[arg(long, default_value = "modern")]
    theme: String,

    /// First gradient color for the custom theme
    #[arg(long)]
    color1: Option<String>,

    /// Second gradient color for the custom theme
    #[arg(long)]
    color2: Option<String>,
}

#[derive(Args)]
struct HtmlArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Path to output HTML file
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Output directory for the images
    #[arg(short, long)]
    output: PathBuf,

    /// Export only this slide (1-based)
    #[arg(long)]
    index: Option<usize>,

    /// Delay between exports in milliseconds
    #[arg(long)]
    pacing_ms: Option<u64>,

    /// Resolution multiplier
    #[arg(long)]
    pixel_ratio: Option<f64>,
}

#[derive(Args)]
struct PdfArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Output directory for carousel.pdf
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct GenerateArgs {
    /// Topic to draft slides about
    #[arg(long)]
    topic: String,

    /// Deck file to write; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Model to use instead of the configured one
    #[arg(long)]
    model: Option<String>,
}

fn build_state(args: &DeckArgs, config: &Config) -> anyhow::Result<CarouselState> {
    let store = match &args.deck {
        Some(path) => SlideStore::with_slides(slides::load_deck(path)?)?,
        None => SlideStore::default(),
    };

    let mut profile = Profile::default();
    if let Some(name) = &args.name {
        profile.name = name.clone();
    }
    if let Some(handle) = &args.handle {
        profile.handle = handle.clone();
    }
    if let Some(logo) = &args.logo {
        profile.load_logo(logo, config.max_logo_bytes)?;
    }

    let mut theme = ThemeSelection::new(args.theme.parse::<Theme>()?);
    let defaults = CustomColors::default();
    if args.color1.is_some() || args.color2.is_some() {
        theme.colors = CustomColors::new(
            args.color1.as_deref().unwrap_or(&defaults.color1),
            args.color2.as_deref().unwrap_or(&defaults.color2),
        )?;
    }

    let mut state = CarouselState::new(store, profile, theme);
    if let Some(topic) = &args.topic {
        let client = GeminiClient::new(config.get_generation_config(None))?;
        state
            .apply_generation(&client, topic)
            .context("Failed to generate slides. Please check your API key or topic")?;
    }
    Ok(state)
}

fn run(command: &Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Themes => {
            for theme in Theme::ALL {
                println!("{:<16} {}", theme.id(), theme.label());
            }
        }
        Commands::Html(args) => {
            let state = build_state(&args.deck, config)?;
            let renderer = HtmlRenderer::default();
            let document = html::render_print_layout(&state, renderer.slide_size);
            html::write_html_to_file(&document, &args.output)?;
            println!("HTML generated successfully: {:?}", args.output);
        }
        Commands::Export(args) => {
            if args.index == Some(0) {
                anyhow::bail!("--index is 1-based");
            }
            let export_config = config.get_export_config(args.pacing_ms, args.pixel_ratio, None)?;
            let state = build_state(&args.deck, config)?.into_shared();
            let rasterizer = ChromeRasterizer::launch(&config.get_render_config(None, None))?;
            let sink = DirectorySink::new(&args.output)?;
            let exporter = Exporter::new(HtmlRenderer::default(), rasterizer, sink, export_config);

            let outcomes = match args.index {
                Some(position) => vec![exporter.export_one(&state, position - 1)],
                None => exporter.export_all(&state)?.outcomes,
            };

            for outcome in &outcomes {
                match outcome {
                    SlideOutcome::Saved { file_name, .. } => println!("Saved {}", file_name),
                    SlideOutcome::Skipped { index } => println!("Skipped slide {}", index + 1),
                    SlideOutcome::Failed { index, reason } => {
                        println!("Failed slide {}: {}", index + 1, reason)
                    }
                }
            }
            let saved = outcomes.iter().filter(|o| o.is_saved()).count();
            println!("Exported {} of {} slides to {:?}", saved, outcomes.len(), args.output);
        }
        Commands::Pdf(args) => {
            let state = build_state(&args.deck, config)?.into_shared();
            let host = ChromePrintHost::launch(&config.get_render_config(None, None))?;
            let sink = DirectorySink::new(&args.output)?;
            let name = export_print_layout(&HtmlRenderer::default(), &state, &host, &sink)?;
            println!("PDF generated successfully: {:?}", sink.dir().join(name));
        }
        Commands::Generate(args) => {
            let client = GeminiClient::new(config.get_generation_config(args.model.clone()))?;
            let mut store = SlideStore::default();
            let generated = carousel_wizard::SlideGenerator::generate(&client, &args.topic)
                .context("Failed to generate slides. Please check your API key or topic")?;
            store.replace_all(generated)?;

            let json = serde_json::to_string_pretty(store.slides())?;
            match &args.output {
                Some(path) => {
                    utils::ensure_parent_directory_exists(path)?;
                    std::fs::write(path, json)
                        .with_context(|| format!("Failed to write deck file {:?}", path))?;
                    println!("Deck written: {:?}", path);
                }
                None => println!("{}", json),
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let result = match &cli.command {
        Some(command) => run(command, &config),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
