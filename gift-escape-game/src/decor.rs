//! Decorative randomness: the completion confetti and the placeholder QR
//! block. Everything takes an injected [`Rng`] so renders can be replayed
//! from a seed.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

pub const CONFETTI_GLYPHS: [&str; 5] = ["🪵", "✨", "🎉", "🪚", "🧰"];
pub const DEFAULT_BURST: usize = 80;
/// Delay before a burst is cleared.
pub const CONFETTI_LIFETIME_MS: u32 = 4_500;
/// Interval of the falling animation.
pub const FALL_TICK_MS: u32 = 50;
pub const QR_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfettiParticle {
    pub id: u64,
    /// Horizontal position, percent of the viewport width.
    pub x: f32,
    /// Vertical position, percent of the viewport height.
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub rotation: u16,
    pub glyph: &'static str,
}

impl ConfettiParticle {
    /// Advance one animation tick.
    pub fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Below the bottom edge and no longer visible.
    #[must_use]
    pub fn is_offscreen(&self) -> bool {
        self.y > 105.0
    }
}

/// Generate `count` particles starting just above the viewport. Ids start at
/// `first_id` so consecutive bursts never collide.
pub fn confetti_burst<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    first_id: u64,
) -> Vec<ConfettiParticle> {
    (first_id..)
        .take(count)
        .map(|id| ConfettiParticle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: -5.0,
            vx: rng.gen_range(-0.5..0.5),
            vy: rng.gen_range(0.7..1.6),
            rotation: rng.gen_range(0..360),
            glyph: CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())],
        })
        .collect()
}

/// Dark/light pattern for the decorative QR block. It encodes nothing.
pub fn placeholder_qr<R: Rng + ?Sized>(rng: &mut R) -> [[bool; QR_SIZE]; QR_SIZE] {
    let mut grid = [[false; QR_SIZE]; QR_SIZE];
    for row in &mut grid {
        for cell in row.iter_mut() {
            *cell = rng.gen_bool(0.5);
        }
    }
    grid
}

#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_is_deterministic_for_a_seed() {
        let a = confetti_burst(&mut seeded_rng(7), DEFAULT_BURST, 0);
        let b = confetti_burst(&mut seeded_rng(7), DEFAULT_BURST, 0);
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_BURST);
        let c = confetti_burst(&mut seeded_rng(8), DEFAULT_BURST, 0);
        assert_ne!(a, c);
    }

    #[test]
    fn particles_stay_within_ranges() {
        for p in confetti_burst(&mut seeded_rng(42), 200, 1_000) {
            assert!((0.0..100.0).contains(&p.x));
            assert!((-0.5..0.5).contains(&p.vx));
            assert!((0.7..1.6).contains(&p.vy));
            assert!(p.rotation < 360);
            assert!(CONFETTI_GLYPHS.contains(&p.glyph));
            assert!((p.y + 5.0).abs() < f32::EPSILON);
            assert!(p.id >= 1_000);
        }
    }

    #[test]
    fn step_moves_particle_down_until_offscreen() {
        let mut p = confetti_burst(&mut seeded_rng(1), 1, 0).remove(0);
        let start_y = p.y;
        p.step();
        assert!(p.y > start_y);
        let mut ticks = 0;
        while !p.is_offscreen() {
            p.step();
            ticks += 1;
        }
        assert!(ticks < 200);
    }

    #[test]
    fn qr_pattern_replays_from_seed() {
        let a = placeholder_qr(&mut seeded_rng(99));
        assert_eq!(a, placeholder_qr(&mut seeded_rng(99)));
        let dark = a.iter().flatten().filter(|c| **c).count();
        assert!(dark > 0 && dark < QR_SIZE * QR_SIZE);
    }
}
