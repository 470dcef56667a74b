use crate::surface::{Color, Surface};

/// The fixed, ordered set of cube surfaces driven together.
pub struct DisplaySet {
    surfaces: Vec<Surface>,
}

impl DisplaySet {
    pub fn new(count: usize, width: u32, height: u32) -> Self {
        Self {
            surfaces: (0..count)
                .map(|index| Surface::new(index, width, height))
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Surface> {
        self.surfaces.get(index)
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Surface> {
        self.surfaces.iter()
    }

    /// Calls `f` on every surface in creation order.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Surface, usize),
    {
        for (index, surface) in self.surfaces.iter_mut().enumerate() {
            f(surface, index);
        }
    }

    /// Lays the displayed buffers out left to right, `gap` pixels apart, into
    /// `out`. Returns the dimensions of the composited image, which is empty
    /// when the surfaces have no area.
    pub fn composite(&self, gap: u32, gap_color: Color, out: &mut Vec<Color>) -> (u32, u32) {
        out.clear();

        let height = self.surfaces.iter().map(Surface::height).max().unwrap_or(0);
        let surfaces_width = self.surfaces.iter().map(Surface::width).sum::<u32>();
        if height == 0 || surfaces_width == 0 {
            return (0, 0);
        }
        let width = surfaces_width + gap * (self.surfaces.len() as u32 - 1);

        out.resize(width as usize * height as usize, gap_color);

        let mut offset_x = 0;
        for surface in &self.surfaces {
            let surface_width = surface.width() as usize;
            if surface_width == 0 {
                offset_x += gap as usize;
                continue;
            }
            for (row, line) in surface.displayed().chunks_exact(surface_width).enumerate() {
                let start = row * width as usize + offset_x;
                out[start..start + surface_width].copy_from_slice(line);
            }
            offset_x += surface_width + gap as usize;
        }

        (width, height)
    }
}

impl<'a> IntoIterator for &'a DisplaySet {
    type Item = &'a Surface;
    type IntoIter = std::slice::Iter<'a, Surface>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
