//! End-to-end tests over the full pipeline: initialize → advance → census
//! → render → encode. These go through the facade, the way the binaries do.

use smolder::prelude::*;

// ── Wildfire ────────────────────────────────────────────────────

#[test]
fn wildfire_reference_run() {
    let rule = Wildfire::default();
    let mut stream = EntropyStream::with_seed(42);
    let initial = wildfire::basic_field(Point::new(9, 9), rule, &mut stream).unwrap();
    let history = run(initial, 50, &mut stream);

    assert_eq!(history.len(), 51);
    for field in &history {
        assert_eq!(field.bounds(), Point::new(9, 9));
        assert_eq!(field.cell_count(), 100);
        for (_, cell) in field.cells() {
            assert_eq!(cell.state, rule.derive_state(cell.age));
        }
    }
}

#[test]
fn wildfire_runs_are_seed_reproducible() {
    let trajectory = |seed: u64| {
        let rule = Wildfire::default();
        let mut stream = EntropyStream::with_seed(seed);
        let initial = wildfire::basic_field(Point::new(12, 12), rule, &mut stream).unwrap();
        run(initial, 30, &mut stream)
            .iter()
            .map(|field| field.cells().collect::<Vec<_>>())
            .collect::<Vec<_>>()
    };

    assert_eq!(trajectory(7), trajectory(7));
    assert_ne!(trajectory(7), trajectory(8));
}

// ── Epidemic ────────────────────────────────────────────────────

#[test]
fn epidemic_reference_run() {
    let rule = Epidemic::default();
    let mut stream = EntropyStream::with_seed(42);
    let initial = epidemic::basic_field(Point::new(24, 24), rule).unwrap();
    let history = run(initial, 60, &mut stream);

    for field in &history {
        let census = Census::of(field);
        assert_eq!(census.total(), 625);
    }

    // With certain infection, the outbreak spreads from the seeded cell.
    let contagious = Epidemic::new(1.0, 0.2).unwrap();
    let mut stream = EntropyStream::with_seed(42);
    let initial = epidemic::basic_field(Point::new(24, 24), contagious).unwrap();
    let spread = run(initial, 2, &mut stream);
    assert_eq!(Census::of(&spread[1]).sick, 9);
    assert!(Census::of(&spread[2]).sick > 9);
}

#[test]
fn epidemic_sick_cells_always_pass_through_immunity() {
    let rule = Epidemic::default();
    let mut stream = EntropyStream::with_seed(13);
    let initial = epidemic::basic_field(Point::new(10, 10), rule).unwrap();
    let history = run(initial, 80, &mut stream);

    for window in history.windows(2) {
        for (point, cell) in window[0].cells() {
            if cell.state == EpidemicState::Sick {
                let successor = window[1].get(point).state;
                assert_ne!(successor, EpidemicState::Healthy, "at {point}");
            }
        }
    }
}

// ── Rendering ───────────────────────────────────────────────────

#[test]
fn full_pipeline_produces_a_gif() {
    let rule = Epidemic::default();
    let mut stream = EntropyStream::with_seed(3);
    let initial = epidemic::basic_field(Point::new(24, 24), rule).unwrap();
    let history = run(initial, 10, &mut stream);

    let frames: Vec<_> = history[1..].iter().map(|f| rasterize(f, 500)).collect();
    // 25 cells per axis: 20-pixel cells fill the 500-pixel target exactly.
    assert!(frames.iter().all(|f| f.dimensions() == (500, 500)));

    let palette = StatePalette::for_rule(&rule);
    assert_eq!(palette.len(), 3);

    let indexed = quantize(&frames, &palette);
    assert_eq!(indexed.len(), 10);
    assert!(indexed
        .iter()
        .all(|frame| frame.indices.len() == 500 * 500));

    let mut gif_bytes = Vec::new();
    encode_gif(&mut gif_bytes, &indexed, &palette, FRAME_DELAY_CS).unwrap();
    assert!(gif_bytes.starts_with(b"GIF89a"));
}
