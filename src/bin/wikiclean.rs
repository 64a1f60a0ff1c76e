//! wikiclean CLI - wiki markup to plain text

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use wikiclean::{
    clean_lines,
    diagnostics::{format_diagnostics, CollectingSink},
    render_math_with_sink, strip_emphasis, CleanOptions, CleanResult, Cleaner, NamespaceConfig,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "wikiclean")]
#[command(version)]
#[command(about = "wikiclean - wiki markup to plain text", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Keep leading and trailing whitespace
    #[arg(long)]
    no_strip: bool,

    /// Keep residual HTML tags
    #[arg(long)]
    no_html_strip: bool,

    /// Treat the input as a LaTeX formula and render it
    #[arg(long, conflicts_with = "emphasis")]
    math: bool,

    /// Only strip bold/italic markers
    #[arg(long)]
    emphasis: bool,

    /// Clean each line separately
    #[arg(long)]
    lines: bool,

    /// Namespace data JSON with localized File and Category names
    #[arg(long, value_name = "JSON")]
    namespaces: Option<String>,

    /// Disable colored diagnostic output
    #[arg(long)]
    no_color: bool,

    /// Strict mode: exit with error if any diagnostics were produced
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress diagnostic output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
fn main() -> CleanResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let cleaner = Cleaner::new(load_namespaces(cli.namespaces.as_deref())?);
    let options = CleanOptions {
        no_strip: cli.no_strip,
        no_html_strip: cli.no_html_strip,
    };
    let sink = CollectingSink::new();

    let result = if cli.math {
        render_math_with_sink(input.trim(), &sink)
    } else if cli.emphasis {
        strip_emphasis(&input)
    } else if cli.lines {
        clean_lines(&cleaner, &input, options, &sink)
    } else {
        cleaner.clean_with_sink(&input, options, &sink)
    };

    let diagnostics = sink.take();
    if !cli.quiet && !diagnostics.is_empty() {
        eprint!("{}", format_diagnostics(&diagnostics, !cli.no_color));
    }

    if cli.strict && !diagnostics.is_empty() {
        eprintln!("Error: {} diagnostic(s) in strict mode", diagnostics.len());
        std::process::exit(1);
    }

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            if !cli.quiet {
                eprintln!("✓ Output written to: {}", path);
            }
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_namespaces(path: Option<&str>) -> CleanResult<NamespaceConfig> {
    let Some(path) = path else {
        return Ok(NamespaceConfig::default());
    };
    let json = fs::read_to_string(path)?;
    parse_namespaces(&json)
}

#[cfg(all(feature = "cli", feature = "data-loading"))]
fn parse_namespaces(json: &str) -> CleanResult<NamespaceConfig> {
    NamespaceConfig::from_json(json)
}

#[cfg(all(feature = "cli", not(feature = "data-loading")))]
fn parse_namespaces(_json: &str) -> CleanResult<NamespaceConfig> {
    Err(wikiclean::CleanError::invalid_config(
        "namespace loading requires the data-loading feature",
    ))
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install wikiclean --features cli");
    eprintln!("  wikiclean [OPTIONS] [INPUT_FILE]");
}
