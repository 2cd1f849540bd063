use clap::{Parser, ValueEnum};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::rc::Rc;

use shapyter::{
    html_page,
    io_utils::{CliContext, CliError},
    BitMatrix, Glyph, GlyphList, Palette, Render, Shapifier,
};

#[derive(Clone, Copy, ValueEnum)]
enum Split {
    Whitespace,
    Lines,
    Chars,
}

/// Render a sequence of tokens as inline shapes in an HTML page.
#[derive(Parser)]
struct Args {
    /// Input text file, stdin when omitted
    input: Option<PathBuf>,
    /// Output HTML file, stdout when omitted
    #[clap(long, short)]
    output: Option<PathBuf>,
    /// Seed for the shape shuffle
    #[clap(long)]
    seed: Option<u64>,
    /// JSON palette with forms, colors and durations
    #[clap(long)]
    palette: Option<PathBuf>,
    /// How to cut the input into tokens
    #[clap(long, value_enum, default_value = "whitespace")]
    split: Split,
    /// Treat tokens as integers (decimal or 0x hex) and draw them as bit
    /// matrices of this width
    #[clap(long)]
    bits: Option<u32>,
    /// Print a JSON summary to stderr
    #[clap(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shapyter=warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn tokenize(text: &str, split: Split) -> Vec<String> {
    match split {
        Split::Whitespace => text.split_whitespace().map(str::to_string).collect(),
        Split::Lines => text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect(),
        Split::Chars => text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect(),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| CliError::io("reading input file", path, e))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::Usage(format!("reading stdin: {e}")))?;
            buf
        }
    };
    let tokens = tokenize(&text, args.split);

    let (list, remaining) = match args.bits {
        Some(bits) => {
            let mut glyphs = Vec::with_capacity(tokens.len());
            for t in &tokens {
                let m = BitMatrix::parse(t, bits).cli_context("drawing bit matrix")?;
                glyphs.push(Rc::new(Glyph::from(m)));
            }
            (GlyphList::new(glyphs), None)
        }
        None => {
            let palette = match &args.palette {
                Some(path) => Palette::load(path).cli_context("loading palette")?,
                None => Palette::default(),
            };
            let mut shapes: Shapifier<String> =
                Shapifier::with_palette(palette, args.seed).cli_context("building palette")?;
            let list = shapes
                .apply(tokens.iter().map(String::as_str))
                .cli_context("shaping tokens")?;
            (list, Some(shapes.remaining()))
        }
    };

    let page = html_page("shapify", &list.render());
    match &args.output {
        Some(path) => {
            fs::write(path, &page).map_err(|e| CliError::io("writing output file", path, e))?;
            eprintln!("Wrote {} glyphs to {}", list.len(), path.display());
        }
        None => print!("{page}"),
    }

    if args.json {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let summary = serde_json::json!({
            "tokens": tokens.len(),
            "distinct": distinct.len(),
            "remaining": remaining,
        });
        eprintln!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
