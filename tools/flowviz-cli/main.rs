use clap::{ArgAction, Parser, ValueEnum};
use flowviz::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Mermaid,
    Markdown,
    Json,
}

impl From<FormatCli> for OutputFormat {
    fn from(format: FormatCli) -> Self {
        match format {
            FormatCli::Mermaid => OutputFormat::Mermaid,
            FormatCli::Markdown => OutputFormat::Markdown,
            FormatCli::Json => OutputFormat::Json,
        }
    }
}

/// Compile a flow definition into a Mermaid flowchart
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow metadata XML file
    flow_path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "mermaid")]
    format: FormatCli,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show API names inside nodes instead of labels
    #[arg(long)]
    no_labels: bool,

    /// Include fault paths, drawn as dotted edges
    #[arg(long)]
    show_fault_paths: bool,

    /// Flow API name; defaults to the file name
    #[arg(long)]
    name: Option<String>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let total_start = Instant::now();
    let options = DiagramOptions {
        include_labels: !cli.no_labels,
        show_fault_paths: cli.show_fault_paths,
    };
    let name = cli
        .name
        .clone()
        .unwrap_or_else(|| flow_name_from_path(&cli.flow_path));

    // --- 1. Loading ---
    let raw = RawFlow::from_file(&cli.flow_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    // --- 2. Compilation ---
    let flow = Compiler::builder(raw)
        .with_name(name)
        .show_fault_paths(options.show_fault_paths)
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Flow compilation failed: {}", e)));

    let summary = flow.summary();
    info!(
        flow = %flow.name,
        elements = summary.element_total,
        connectors = summary.connector_total,
        variables = summary.variable_total,
        "compiled flow"
    );

    // --- 3. Rendering ---
    let format = OutputFormat::from(cli.format);
    let rendered = render(&flow, format, options)
        .unwrap_or_else(|e| exit_with_error(&format!("Rendering failed: {}", e)));

    // --- 4. Output ---
    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).unwrap_or_else(|e| {
                    exit_with_error(&format!(
                        "Could not create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                });
            }
            fs::write(path, &rendered).unwrap_or_else(|e| {
                exit_with_error(&format!("Could not write '{}': {}", path.display(), e))
            });
            info!(path = %path.display(), format = ?format, "wrote output");
        }
        None => print!("{}", rendered),
    }

    debug!(elapsed = ?total_start.elapsed(), "done");
}

/// Logs go to stderr so stdout stays clean for the rendered output. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `flows/Onboarding.flow-meta.xml` -> `Onboarding`.
fn flow_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Flow".to_string());
    stem.strip_suffix(".flow-meta")
        .or_else(|| stem.strip_suffix(".flow"))
        .map(str::to_string)
        .unwrap_or(stem)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
