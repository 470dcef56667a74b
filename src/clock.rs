//! Tick-driven animation helpers.

use std::f64::consts::TAU;

use tinyrand::{Rand, StdRand};

use crate::surface::Color;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. `bound` must be nonzero.
    fn next_int(&mut self, bound: u32) -> u32;
}

impl RandomSource for StdRand {
    #[inline]
    fn next_int(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "random bound must be nonzero");
        self.next_lim_u32(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_int(&mut self, bound: u32) -> u32 {
        (**self).next_int(bound)
    }
}

/// The point reached after `tick` ticks when sweeping a circle of `radius`
/// around `(center_x, center_y)` once every `ticks_per_revolution` ticks.
///
/// Tick 0 lies at angle 0, i.e. `(center_x + radius, center_y)`, and the
/// sweep runs clockwise on screen since y grows downward. Coordinates
/// saturate at the bounds of `i32`.
pub fn position_on_circle(
    tick: u64,
    center_x: i32,
    center_y: i32,
    radius: f64,
    ticks_per_revolution: u64,
) -> (i32, i32) {
    assert!(ticks_per_revolution > 0, "ticks_per_revolution must be nonzero");

    let phase = (tick % ticks_per_revolution) as f64 / ticks_per_revolution as f64;
    let theta = TAU * phase;
    (
        center_x.saturating_add((radius * theta.cos()).round() as i32),
        center_y.saturating_add((radius * theta.sin()).round() as i32),
    )
}

pub fn random_color<R: RandomSource + ?Sized>(rand: &mut R) -> Color {
    let r = rand.next_int(256) as u8;
    let g = rand.next_int(256) as u8;
    let b = rand.next_int(256) as u8;
    Color::new(r, g, b)
}
