//! Step-time benchmark: serial sweep vs rayon column-parallel sweep

use std::time::Instant;
use life_canvas::{AutomatonEngine, Grid, RuleKind};

fn random_grid(cols: usize, rows: usize) -> Grid {
    let mut grid = Grid::new(cols, rows);
    grid.randomize(0.3);
    grid
}

fn benchmark_serial(engine: &AutomatonEngine, size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(engine: &AutomatonEngine, size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step_parallel(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation Step Benchmark ===\n");

    let sizes = [72, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    for kind in [RuleKind::Inverted, RuleKind::Conway] {
        let engine = AutomatonEngine::new(kind.build());
        println!("Rule: {} ({})", engine.rule().name(), engine.rule().description());
        println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
        println!("{:-<50}", "");

        for size in sizes {
            let serial_ms = benchmark_serial(&engine, size, iterations);
            let parallel_ms = benchmark_parallel(&engine, size, iterations);

            println!(
                "{:>12} {:>10.3}ms {:>10.3}ms {:>9.1}x",
                format!("{}x{}", size, size),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms.max(f64::EPSILON)
            );
        }
        println!();
    }

    let cells = 128 * 72;
    let generations = 1000;
    let engine = AutomatonEngine::default();
    let mut grid = random_grid(128, 72);
    let start = Instant::now();
    for _ in 0..generations {
        engine.step(&mut grid);
    }
    let total_secs = start.elapsed().as_secs_f64();
    println!(
        "Window board (128x72): {:.3} ms/gen, {:.1}M cells/sec",
        total_secs * 1000.0 / generations as f64,
        (cells as f64 * generations as f64) / total_secs / 1_000_000.0
    );
}
