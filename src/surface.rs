use std::ops::Range;

use bytemuck::{Pod, Zeroable};

/// Width and height of a cube's screen, in pixels.
pub const CUBE_SCREEN_SIZE: u32 = 128;

/// An RGB color with 8 bits per channel.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// An axis-aligned rectangle in surface pixel coordinates.
///
/// The origin may lie outside the surface; only the part overlapping the
/// surface is ever drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersects the rectangle with `[0, bound_width) x [0, bound_height)`.
    ///
    /// Returns the column and row ranges of the intersection, or `None` when
    /// it is empty.
    pub fn clip(
        &self,
        bound_width: u32,
        bound_height: u32,
    ) -> Option<(Range<usize>, Range<usize>)> {
        fn clip_axis(start: i32, len: u32, bound: u32) -> Option<Range<usize>> {
            let lo = (start as i64).max(0);
            let hi = (start as i64 + len as i64).min(bound as i64);
            (lo < hi).then(|| lo as usize..hi as usize)
        }

        let columns = clip_axis(self.x, self.width, bound_width)?;
        let rows = clip_axis(self.y, self.height, bound_height)?;
        Some((columns, rows))
    }
}

/// The framebuffer of a single cube.
///
/// Fills go to a back buffer; [`Surface::commit`] copies it to the front
/// buffer, which is what the host presents.
pub struct Surface {
    index: usize,
    width: u32,
    height: u32,

    pixels: Vec<Color>,
    displayed: Vec<Color>,

    dirty: bool,
    commits: u64,
}

impl Surface {
    pub fn new(index: usize, width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            index,
            width,
            height,

            pixels: vec![Color::BLACK; len],
            displayed: vec![Color::BLACK; len],

            dirty: false,
            commits: 0,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn fill_all(&mut self, color: Color) {
        self.pixels.fill(color);
        self.dirty = true;
    }

    /// Fills `[x, x + width) x [y, y + height)`, clipped to the surface.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is negative.
    pub fn fill_rect(&mut self, color: Color, x: i32, y: i32, width: i32, height: i32) {
        assert!(
            width >= 0 && height >= 0,
            "fill_rect with negative size {width}x{height}"
        );
        self.fill(color, Rect::new(x, y, width as u32, height as u32));
    }

    pub fn fill(&mut self, color: Color, rect: Rect) {
        let Some((columns, rows)) = rect.clip(self.width, self.height) else {
            return;
        };

        let stride = self.width as usize;
        for row in rows {
            let start = row * stride;
            self.pixels[start + columns.start..start + columns.end].fill(color);
        }
        self.dirty = true;
    }

    /// Makes the drawn pixels the displayed ones.
    pub fn commit(&mut self) {
        if !self.dirty {
            return;
        }
        self.displayed.copy_from_slice(&self.pixels);
        self.dirty = false;
        self.commits += 1;
    }

    /// Whether anything was drawn since the last commit.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
    /// Number of commits that changed the displayed buffer.
    #[inline]
    pub fn commits(&self) -> u64 {
        self.commits
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.offset(x, y).map(|i| self.pixels[i])
    }
    pub fn displayed_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.offset(x, y).map(|i| self.displayed[i])
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
    #[inline]
    pub fn displayed(&self) -> &[Color] {
        &self.displayed
    }
    /// The displayed buffer as packed RGB bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.displayed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn painted(width: u32, height: u32) -> Surface {
        let mut surface = Surface::new(0, width, height);
        surface.fill_all(BLUE);
        surface
    }

    fn assert_only_region(surface: &Surface, columns: Range<u32>, rows: Range<u32>) {
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                let expected = if columns.contains(&x) && rows.contains(&y) {
                    RED
                } else {
                    BLUE
                };
                assert_eq!(surface.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn new_surface_is_black() {
        let surface = Surface::new(3, 4, 2);
        assert_eq!(surface.index(), 3);
        assert!(surface.pixels().iter().all(|&c| c == Color::BLACK));
        assert!(surface.displayed().iter().all(|&c| c == Color::BLACK));
        assert!(!surface.is_dirty());
    }

    #[test]
    fn commit_without_drawing_shows_black() {
        let mut surface = Surface::new(0, 4, 4);
        surface.commit();
        surface.commit();
        assert!(surface.displayed().iter().all(|&c| c == Color::BLACK));
        assert_eq!(surface.commits(), 0);
    }

    #[test]
    fn fill_rect_inside() {
        let mut surface = painted(16, 16);
        surface.fill_rect(RED, 2, 3, 4, 5);
        assert_only_region(&surface, 2..6, 3..8);
    }

    #[test]
    fn fill_rect_clips_partially_outside() {
        let mut surface = painted(16, 16);
        surface.fill_rect(RED, -2, 12, 5, 10);
        assert_only_region(&surface, 0..3, 12..16);
    }

    #[test]
    fn fill_rect_fully_outside_is_noop() {
        let mut surface = painted(16, 16);
        surface.commit();
        surface.fill_rect(RED, 16, 0, 4, 4);
        surface.fill_rect(RED, -10, -10, 5, 5);
        surface.fill_rect(RED, 3, 3, 0, 7);
        assert_only_region(&surface, 0..0, 0..0);
        assert!(!surface.is_dirty());
    }

    #[test]
    fn fill_rect_handles_extreme_coordinates() {
        let mut surface = painted(8, 8);
        surface.fill_rect(RED, i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        surface.fill_rect(RED, i32::MIN, 6, i32::MAX, 1);
        assert_only_region(&surface, 0..0, 0..0);
    }

    #[test]
    #[should_panic]
    fn fill_rect_negative_width_panics() {
        let mut surface = painted(8, 8);
        surface.fill_rect(RED, 0, 0, -1, 4);
    }

    #[test]
    fn commit_publishes_back_buffer() {
        let mut surface = painted(8, 8);
        assert_eq!(surface.displayed_pixel(0, 0), Some(Color::BLACK));
        surface.commit();
        assert_eq!(surface.displayed_pixel(0, 0), Some(BLUE));
        assert_eq!(surface.commits(), 1);

        surface.fill_rect(RED, 0, 0, 1, 1);
        assert_eq!(surface.displayed_pixel(0, 0), Some(BLUE));
        surface.commit();
        assert_eq!(surface.displayed_pixel(0, 0), Some(RED));
    }

    #[test]
    fn commit_is_idempotent() {
        let mut surface = painted(8, 8);
        surface.fill_rect(RED, 1, 1, 2, 2);
        surface.commit();
        let once = surface.displayed().to_vec();
        surface.commit();
        assert_eq!(surface.displayed(), &once[..]);
        assert_eq!(surface.commits(), 1);
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let surface = Surface::new(0, 4, 4);
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.displayed_pixel(0, 4), None);
    }

    #[test]
    fn as_bytes_is_packed_rgb() {
        let mut surface = Surface::new(0, 2, 1);
        surface.fill_rect(Color::new(1, 2, 3), 1, 0, 1, 1);
        surface.commit();
        assert_eq!(surface.as_bytes(), &[0, 0, 0, 1, 2, 3]);
    }
}
