//! Random rectangle arrangements (seeded, replayable).
//!
//! Purpose
//! - Provide deterministic input generators for benches and property tests:
//!   arbitrary sets (may touch or overlap) and cell-packed disjoint sets
//!   whose loop count is known in advance.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Rect;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Rectangle-set sampler configuration. Coordinates are drawn as integers so
/// generated fixtures survive quantization bit-exactly.
#[derive(Clone, Copy, Debug)]
pub struct RectSetCfg {
    pub count: usize,
    /// Positions are drawn in `[0, span)`.
    pub span: i64,
    pub min_size: i64,
    pub max_size: i64,
}

impl Default for RectSetCfg {
    fn default() -> Self {
        Self {
            count: 8,
            span: 400,
            min_size: 10,
            max_size: 80,
        }
    }
}

impl RectSetCfg {
    fn side<R: Rng>(&self, rng: &mut R) -> i64 {
        let lo = self.min_size.max(1);
        let hi = self.max_size.max(lo);
        rng.gen_range(lo..=hi)
    }
}

/// Draw an arbitrary rectangle set; members may touch, overlap, or coincide.
pub fn draw_rect_set(cfg: RectSetCfg, tok: ReplayToken) -> Vec<Rect> {
    let mut rng = tok.to_std_rng();
    let span = cfg.span.max(1);
    (0..cfg.count)
        .map(|_| {
            let w = cfg.side(&mut rng);
            let h = cfg.side(&mut rng);
            let x = rng.gen_range(0..span);
            let y = rng.gen_range(0..span);
            Rect::new(x as f64, y as f64, (x + w) as f64, (y + h) as f64)
        })
        .collect()
}

/// Draw pairwise-disjoint, non-touching rectangles by packing each into its
/// own cell of a square grid with a one-unit margin. The boundary tracer must
/// produce exactly `cfg.count` loops for such a set.
pub fn draw_disjoint_rect_set(cfg: RectSetCfg, tok: ReplayToken) -> Vec<Rect> {
    let mut rng = tok.to_std_rng();
    let cols = (cfg.count as f64).sqrt().ceil() as i64;
    let cell = cfg.max_size.max(cfg.min_size).max(1) + 2;
    (0..cfg.count as i64)
        .map(|i| {
            let w = cfg.side(&mut rng).min(cell - 2);
            let h = cfg.side(&mut rng).min(cell - 2);
            let cx = (i % cols) * cell;
            let cy = (i / cols) * cell;
            let x = cx + 1 + rng.gen_range(0..=(cell - 2 - w));
            let y = cy + 1 + rng.gen_range(0..=(cell - 2 - h));
            Rect::new(x as f64, y as f64, (x + w) as f64, (y + h) as f64)
        })
        .collect()
}
