//! Windowless runs: tick the simulation into a recording canvas.

use std::time::Instant;

use starfield_config::StarfieldConfig;
use starfield_core::{FrameRecorder, FrameStats, Starfield};

/// Totals over a headless run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub frames: u64,
    pub stars: usize,
    pub seed: u64,
    pub totals: FrameStats,
}

/// Run `frames` ticks at `dt = 1` and log a summary.
pub fn run(config: &StarfieldConfig, frames: u64) -> HeadlessSummary {
    let started = Instant::now();
    let mut field = Starfield::from_config(config);
    let mut canvas = FrameRecorder::new();
    let mut totals = FrameStats::default();

    for _ in 0..frames {
        canvas.clear();
        let stats = field.tick(1.0, &mut canvas);
        totals.accumulate(&stats);
    }

    let summary = HeadlessSummary {
        frames,
        stars: field.len(),
        seed: field.seed(),
        totals,
    };

    tracing::info!(
        frames,
        stars = summary.stars,
        seed = summary.seed,
        drawn = totals.drawn,
        culled = totals.culled,
        recycled = totals.recycled,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Headless run finished"
    );
    summary
}
