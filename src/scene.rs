//! The hello-cube sample: a background, a highlight square, a block glyph,
//! and a dot orbiting the screen center in a new random color every tick.

use crate::{
    clock::{self, RandomSource},
    surface::{Color, Rect, Surface},
};

pub const BACKGROUND: Color = Color::new(182, 218, 85);
pub const HIGHLIGHT: Color = Color::new(36, 182, 255);
pub const HIGHLIGHT_RECT: Rect = Rect::new(24, 24, 80, 80);

pub const GLYPH: Color = Color::new(255, 145, 0);
pub const GLYPH_SHADE: Color = Color::new(255, 100, 0);

pub const ORBIT_CENTER: (i32, i32) = (64, 64);
pub const ORBIT_RADIUS: f64 = 56.0;
/// At the default 20 ticks per second the dot takes three seconds per lap.
pub const TICKS_PER_REVOLUTION: u64 = 60;
pub const DOT_SIZE: u32 = 4;

/// Which picture the setup pass draws on top of the highlight square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    HelloWorld,
    Face,
}

// "HELLO" as a handful of blocks in the bottom-left corner.
const HELLO_WORLD: &[(Color, Rect)] = &[
    (GLYPH, Rect::new(1, 97, 23, 22)),
    (GLYPH, Rect::new(5, 109, 6, 6)),
    (GLYPH, Rect::new(14, 109, 6, 6)),
    (GLYPH, Rect::new(5, 101, 15, 4)),
    (GLYPH, Rect::new(8, 101, 3, 4)),
];

const FACE: &[(Color, Rect)] = &[
    // eyes
    (GLYPH, Rect::new(50, 50, 23, 22)),
    (GLYPH, Rect::new(90, 50, 23, 22)),
    // mouth
    (GLYPH_SHADE, Rect::new(60, 80, 50, 10)),
    // brows
    (GLYPH_SHADE, Rect::new(50, 40, 23, 5)),
    (GLYPH_SHADE, Rect::new(90, 40, 23, 5)),
];

impl Glyph {
    pub fn rects(self) -> &'static [(Color, Rect)] {
        match self {
            Glyph::HelloWorld => HELLO_WORLD,
            Glyph::Face => FACE,
        }
    }

    pub fn draw(self, surface: &mut Surface) {
        for &(color, rect) in self.rects() {
            surface.fill(color, rect);
        }
    }
}

/// The setup pass: paints the whole screen, then the square, then `glyph`.
pub fn draw_intro(surface: &mut Surface, glyph: Glyph) {
    surface.fill_all(BACKGROUND);
    surface.fill(HIGHLIGHT, HIGHLIGHT_RECT);
    glyph.draw(surface);
}

/// Top-left corner of the dot at `tick`, so that the dot is centered on the
/// orbit.
pub fn dot_origin(tick: u64) -> (i32, i32) {
    let (x, y) = clock::position_on_circle(
        tick,
        ORBIT_CENTER.0,
        ORBIT_CENTER.1,
        ORBIT_RADIUS,
        TICKS_PER_REVOLUTION,
    );
    let half = DOT_SIZE as i32 / 2;
    (x - half, y - half)
}

pub fn draw_dot(surface: &mut Surface, tick: u64, color: Color) {
    let (x, y) = dot_origin(tick);
    surface.fill(color, Rect::new(x, y, DOT_SIZE, DOT_SIZE));
}

/// Draws the orbiting dot on every cube, in one color per tick.
pub struct Orbit<R> {
    rand: R,
    frame_color: Option<(u64, Color)>,
}

impl<R: RandomSource> Orbit<R> {
    pub fn new(rand: R) -> Self {
        Self {
            rand,
            frame_color: None,
        }
    }

    /// The dot color for `tick`. All cubes share it.
    pub fn color_for(&mut self, tick: u64) -> Color {
        match self.frame_color {
            Some((frame, color)) if frame == tick => color,
            _ => {
                let color = clock::random_color(&mut self.rand);
                self.frame_color = Some((tick, color));
                color
            }
        }
    }

    pub fn draw(&mut self, surface: &mut Surface, tick: u64) {
        let color = self.color_for(tick);
        draw_dot(surface, tick, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CUBE_SCREEN_SIZE;
    use tinyrand::{Seeded, StdRand};

    fn cube() -> Surface {
        Surface::new(0, CUBE_SCREEN_SIZE, CUBE_SCREEN_SIZE)
    }

    #[test]
    fn intro_paints_background_and_highlight() {
        let mut surface = cube();
        draw_intro(&mut surface, Glyph::HelloWorld);

        assert_eq!(surface.pixel(0, 0), Some(BACKGROUND));
        assert_eq!(surface.pixel(127, 0), Some(BACKGROUND));
        assert_eq!(surface.pixel(64, 64), Some(HIGHLIGHT));
        assert_eq!(surface.pixel(24, 24), Some(HIGHLIGHT));
        assert_eq!(surface.pixel(104, 104), Some(BACKGROUND));
        assert_eq!(surface.pixel(2, 98), Some(GLYPH));
    }

    #[test]
    fn face_glyph_draws_over_highlight() {
        let mut surface = cube();
        draw_intro(&mut surface, Glyph::Face);

        assert_eq!(surface.pixel(60, 60), Some(GLYPH));
        assert_eq!(surface.pixel(70, 85), Some(GLYPH_SHADE));
        assert_eq!(surface.pixel(60, 42), Some(GLYPH_SHADE));
        // the mouth runs past the square's right edge
        assert_eq!(surface.pixel(108, 85), Some(GLYPH_SHADE));
        assert_eq!(surface.pixel(2, 98), Some(BACKGROUND));
    }

    #[test]
    fn glyph_rects_fit_on_screen() {
        for glyph in [Glyph::HelloWorld, Glyph::Face] {
            for (_, rect) in glyph.rects() {
                assert!(rect.x >= 0 && rect.y >= 0);
                assert!(rect.x as u32 + rect.width <= CUBE_SCREEN_SIZE);
                assert!(rect.y as u32 + rect.height <= CUBE_SCREEN_SIZE);
            }
        }
    }

    #[test]
    fn dot_is_centered_on_orbit() {
        assert_eq!(dot_origin(0), (118, 62));
        assert_eq!(dot_origin(TICKS_PER_REVOLUTION / 2), (6, 62));
        assert_eq!(dot_origin(TICKS_PER_REVOLUTION / 4), (62, 118));
    }

    #[test]
    fn dot_stays_on_screen() {
        for tick in 0..TICKS_PER_REVOLUTION {
            let (x, y) = dot_origin(tick);
            assert!(x >= 0 && y >= 0);
            assert!(x + DOT_SIZE as i32 <= CUBE_SCREEN_SIZE as i32);
            assert!(y + DOT_SIZE as i32 <= CUBE_SCREEN_SIZE as i32);
        }
    }

    #[test]
    fn orbit_uses_one_color_per_tick() {
        let mut orbit = Orbit::new(StdRand::seed(3));
        let first = orbit.color_for(1);
        assert_eq!(orbit.color_for(1), first);

        let mut reference = StdRand::seed(3);
        let expected_first = clock::random_color(&mut reference);
        let expected_second = clock::random_color(&mut reference);
        assert_eq!(first, expected_first);
        assert_eq!(orbit.color_for(2), expected_second);
    }
}
