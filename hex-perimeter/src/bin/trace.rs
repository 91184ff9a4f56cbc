use std::path::PathBuf;

use clap::Parser;
use hex_perimeter::{layout::HexLayout, parser::parse_grid, PerimeterTracer};
use miette::{Context, IntoDiagnostic};
use tracing_subscriber::EnvFilter;

/// Trace the exterior perimeter of the filled cells of an offset hex grid.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Grid file: a `<width> <height>` line followed by rows of 0/1 tokens
    input: PathBuf,

    /// Print every perimeter edge as `(row, col) side n`
    #[arg(long)]
    edges: bool,

    /// Print pixel segments for hexes of this circumradius
    #[arg(long, value_name = "PX")]
    size: Option<f32>,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .with_context(|| format!("read {}", args.input.display()))?;
    let grid = parse_grid(&input)?;

    let mut tracer = PerimeterTracer::from_grid(grid);
    let count = tracer.compute_perimeter();
    println!("{}", count);

    if args.edges {
        for edge in tracer.perimeter_edges() {
            println!("{}", edge);
        }
    }

    if let Some(size) = args.size {
        let layout = HexLayout::new(size);
        for segment in layout.segments(tracer.perimeter_edges()) {
            println!(
                "{:.2},{:.2} -> {:.2},{:.2}",
                segment.start.x, segment.start.y, segment.end.x, segment.end.y
            );
        }
        println!("length {:.2}", layout.perimeter_length(tracer.perimeter_edges()));
    }

    Ok(())
}
