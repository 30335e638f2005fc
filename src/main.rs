use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use log::{LevelFilter, info};

use hospital_locator::output::{draw_best_vertex, draw_report, to_dot_str};
use hospital_locator::types::Vertex;
use hospital_locator::{
    AnalyzerConfig, EccentricityMode, LocationAnalyzer, LocationReport, WeightedGraph, input,
};

#[derive(Parser)]
#[command(
    name = "hospital-locator",
    version,
    about = "Chooses a hospital location in a weighted graph and colors the surrounding zones"
)]
struct Cli {
    /// Graph description: a header line, then one `neighbor weight ...` line per vertex
    #[arg(value_name = "FILE")]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[arg(long, value_enum, default_value_t = Metric::Dfs)]
    metric: Metric,
    /// Write the rendering to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Print the lines read from the input file first
    #[arg(long)]
    show_input: bool,
    /// More logging, repeat for more
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Adjacency matrix, zone listing and chosen location
    Text,
    /// Graphviz zone map
    Dot,
}

#[derive(Clone, Copy, ValueEnum)]
enum Metric {
    /// Longest depth-first path length
    Dfs,
    /// Longest shortest path
    ShortestPath,
}

impl From<Metric> for EccentricityMode {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Dfs => EccentricityMode::DepthFirst,
            Metric::ShortestPath => EccentricityMode::ShortestPath,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read input file {}", cli.input.display()))?;
    let lines: Vec<&str> = text.lines().collect();
    info!("read {} lines from {}", lines.len(), cli.input.display());

    if cli.show_input {
        println!("{}: {lines:?}", cli.input.display());
    }

    let graph = input::build(&lines)
        .with_context(|| format!("invalid graph in {}", cli.input.display()))?;

    let analyzer = LocationAnalyzer::new(AnalyzerConfig {
        mode: cli.metric.into(),
    });
    let report = analyzer.analyze(&graph);

    let rendered = render(cli.format, &graph, &report);

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print_highlighted(&rendered, report.best_vertex),
    }

    Ok(())
}

fn render(format: Format, graph: &WeightedGraph, report: &LocationReport) -> String {
    match format {
        Format::Text => draw_report(graph, report),
        Format::Dot => to_dot_str(graph, report),
    }
}

/// Prints to stdout, with the best-vertex statement in green when it is there.
fn print_highlighted(rendered: &str, best_vertex: Vertex) {
    let statement = draw_best_vertex(best_vertex);
    match rendered.strip_suffix(&format!("{statement}\n")) {
        Some(body) => println!("{body}{}", statement.green().bold()),
        None => print!("{rendered}"),
    }
}
