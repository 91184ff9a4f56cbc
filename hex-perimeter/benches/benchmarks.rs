use hex_perimeter::{parser::parse_grid, PerimeterTracer};

fn main() {
    divan::main();
}

const SAMPLE_INPUT: &str = include_str!("../input.txt");

#[divan::bench]
fn process_sample() {
    hex_perimeter::process(divan::black_box(SAMPLE_INPUT)).unwrap();
}

#[divan::bench]
fn parse_sample() {
    parse_grid(divan::black_box(SAMPLE_INPUT)).unwrap();
}

// Filled disc with a checkerboard of holes punched into its middle third.
fn blob(side: usize) -> PerimeterTracer {
    let mut tracer = PerimeterTracer::new(side, side).unwrap();
    let mid = side as f32 / 2.0;
    let radius = mid * 0.9;

    for row in 1..=side {
        for col in 1..=side {
            let (dr, dc) = (row as f32 - mid, col as f32 - mid);
            let inside = dr * dr + dc * dc <= radius * radius;
            let hole = dr.abs() < mid / 3.0 && dc.abs() < mid / 3.0 && (row + col) % 2 == 0;
            if inside && !hole {
                tracer.set_cell(row, col, true).unwrap();
            }
        }
    }
    tracer
}

#[divan::bench(args = [16, 64, 256])]
fn trace_blob(bencher: divan::Bencher, side: usize) {
    let mut tracer = blob(side);
    bencher.bench_local(|| divan::black_box(&mut tracer).compute_perimeter());
}

#[divan::bench(args = [16, 64, 256])]
fn trace_empty(bencher: divan::Bencher, side: usize) {
    let mut tracer = PerimeterTracer::new(side, side).unwrap();
    bencher.bench_local(|| divan::black_box(&mut tracer).compute_perimeter());
}
