#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use csv::Writer;
use ford_fulkerson::{
    check, Config, DuplicateEdges, Edge, FordFulkerson, MaxFlow, MaxFlowSolution,
};
use log::LevelFilter;
use petgraph::dot::Dot;
use petgraph::Graph;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "ff-cli")]
#[command(about = "Maximum flow of a capacitated network read from CSV")]
struct Args {
    /// CSV file with a `from,to,capacity` header
    input: PathBuf,

    /// Source vertex
    #[arg(short, long)]
    source: usize,

    /// Sink vertex
    #[arg(short = 't', long)]
    sink: usize,

    /// Where to write the `from,to,capacity,flow` rows (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also render the flow network in Graphviz format
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Fail on repeated (from, to) pairs instead of keeping the last one
    #[arg(long)]
    reject_duplicates: bool,

    /// Give up after this many augmenting paths
    #[arg(long)]
    max_augmentations: Option<usize>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// Read the edge list from a CSV file
fn read_edges_csv(filepath: &Path) -> Result<Vec<Edge<i64>>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(filepath)?;
    let edges: Result<Vec<_>, _> = rdr.deserialize().collect();
    Ok(edges?)
}

// Write the per-edge flows
fn write_csv(
    edges: &[Edge<i64>],
    solution: &MaxFlowSolution<i64>,
    filepath: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let out: Box<dyn Write> = match filepath {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut wtr = Writer::from_writer(out);
    for row in solution.edge_flows(edges) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_dot(
    edges: &[Edge<i64>],
    solution: &MaxFlowSolution<i64>,
    filepath: &Path,
) -> Result<(), Box<dyn Error>> {
    let n = edges.iter().map(|e| e.from.max(e.to) + 1).max().unwrap_or(0);
    let mut graph = Graph::<usize, String>::new();
    let nodes: Vec<_> = (0..n).map(|v| graph.add_node(v)).collect();
    for row in solution.edge_flows(edges) {
        graph.add_edge(
            nodes[row.from],
            nodes[row.to],
            format!("{}/{}", row.flow, row.capacity),
        );
    }
    fs::write(filepath, Dot::new(&graph).to_string())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let edges = read_edges_csv(&args.input)?;
    log::info!("read {} edges from {}", edges.len(), args.input.display());

    let mut algo = FordFulkerson::new(Config {
        duplicate_edges: if args.reject_duplicates {
            DuplicateEdges::Reject
        } else {
            DuplicateEdges::Overwrite
        },
        max_augmentations: args.max_augmentations,
    });
    let solution = algo
        .max_flow(&edges, args.source, args.sink)
        .map_err(|e| e.to_string())?;
    check(&edges, &solution, args.source, args.sink).map_err(|e| e.to_string())?;

    log::info!("----------------------------------");
    log::info!("      Max flow = {}", solution.value);
    log::info!(" Augmentations = {}", solution.augmentations);
    log::info!("   Source side = {:?}", solution.min_cut.source_side);
    log::info!("     Cut edges = {:?}", solution.min_cut.edges);

    write_csv(&edges, &solution, args.output.as_deref())?;
    if let Some(path) = &args.dot {
        write_dot(&edges, &solution, path)?;
    }

    Ok(())
}
