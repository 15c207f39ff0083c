//! Carousel Slides CLI
//!
//! Usage:
//!   carousel-slides [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --template <ID>      Template to render with (default: title-slide)
//!   -s, --surface <SURFACE>  web or pdf (default: web)
//!   -f, --format <FORMAT>    html, svg or json (default: html)
//!   -c, --config <FILE>      Render configuration (TOML format)
//!   -o, --out-dir <DIR>      Write SVG pages into this directory
//!   --list-templates         List the built-in templates
//!   -d, --debug              Verbose logging
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use carousel_slides::error::DeckError;
use carousel_slides::{find_template, list_templates, Deck, RenderConfig, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Svg,
    Json,
}

#[derive(Parser)]
#[command(name = "carousel-slides")]
#[command(about = "Render generated text as styled carousel slides")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Template id
    #[arg(short, long, default_value = "title-slide")]
    template: String,

    /// Render surface: web or pdf
    #[arg(short, long, default_value = "web")]
    surface: Surface,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for SVG pages (prints to stdout if not provided)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// List the built-in templates and exit
    #[arg(long)]
    list_templates: bool,

    /// Debug mode: log parsing and rendering decisions
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.list_templates {
        print_templates();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => RenderConfig::default(),
    };

    let Some(template) = find_template(&cli.template) else {
        eprintln!("Error: {}", DeckError::unknown_template(&cli.template));
        std::process::exit(1);
    };

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let deck = Deck::render(&source, template, cli.surface, &config);
    if deck.is_empty() {
        tracing::warn!("input contains no slides");
    }

    let result = match cli.format {
        Format::Html => {
            println!("{}", deck.to_html());
            Ok(())
        }
        Format::Json => deck.to_json().map(|json| println!("{}", json)),
        Format::Svg => deck
            .to_svg_pages(&config)
            .map(|pages| write_pages(&pages, cli.out_dir.as_deref())),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("carousel_slides=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: &Path) -> RenderConfig {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading config '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    };
    match RenderConfig::from_str(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format(&source, &path.display().to_string()));
            std::process::exit(1);
        }
    }
}

fn write_pages(pages: &[String], out_dir: Option<&Path>) {
    let Some(dir) = out_dir else {
        for page in pages {
            println!("{}", page);
        }
        return;
    };

    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Error creating '{}': {}", dir.display(), e);
        std::process::exit(1);
    }
    for (i, page) in pages.iter().enumerate() {
        let path = dir.join(format!("slide-{:02}.svg", i + 1));
        if let Err(e) = fs::write(&path, page) {
            eprintln!("Error writing '{}': {}", path.display(), e);
            std::process::exit(1);
        }
        tracing::info!(path = %path.display(), "wrote slide");
    }
}

fn print_templates() {
    for template in list_templates() {
        println!(
            "{:<16} {} {:<16} {}",
            template.id,
            template.preview,
            template.layout,
            template.description
        );
    }
}

fn print_intro() {
    println!(
        r#"Carousel Slides - Render generated text as styled carousel slides

USAGE:
    carousel-slides [OPTIONS] [FILE]
    echo '<text>' | carousel-slides

OPTIONS:
    -t, --template     Template id (see --list-templates)
    -s, --surface      web (class-styled preview) or pdf (fixed 800x600 canvas)
    -f, --format       html, svg (pdf surface only) or json
    -c, --config       Render configuration (TOML file)
    -o, --out-dir      Write one SVG file per slide
    --list-templates   Show the built-in templates
    -d, --debug        Log parsing and rendering decisions
    -h, --help         Print help

INPUT:
    The first line of each slide is its title; the rest is body text.
    Separate slides with a line containing only ---

QUICK START:
    printf 'Why Rust\nFast\nSafe\n---\nTry it\nToday' \
        | carousel-slides -t bullet-points > deck.html"#
    );
}
