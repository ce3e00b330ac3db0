use crate::geometry::Point;

use rgb::RGBA8;

use alloc::vec::Vec;

pub type Color = RGBA8;

const fn opaque(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b, a: 255 }
}

pub const CRIMSON: Color = opaque(220, 20, 60);
pub const BLUE_VIOLET: Color = opaque(138, 43, 226);
pub const LIGHT_SEA_GREEN: Color = opaque(32, 178, 170);
pub const DEEP_PINK: Color = opaque(255, 20, 147);
pub const DIM_GRAY: Color = opaque(105, 105, 105);
pub const YELLOW_GREEN: Color = opaque(154, 205, 50);
pub const BLUE: Color = opaque(0, 0, 255);
pub const DARK_RED: Color = opaque(139, 0, 0);
pub const DARK_GREEN: Color = opaque(0, 100, 0);
pub const BEIGE: Color = opaque(245, 245, 220);

pub const DEFAULT_PALETTE: [Color; 9] = [
    CRIMSON,
    BLUE_VIOLET,
    LIGHT_SEA_GREEN,
    DEEP_PINK,
    DIM_GRAY,
    YELLOW_GREEN,
    BLUE,
    DARK_RED,
    DARK_GREEN,
];

/// A committed curve. Never mutated once built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Curve {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
    pub color: Color,
}

/// Ordered color cycle used to tint successive drags.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Falls back to [`DEFAULT_PALETTE`] when `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Self {
        match colors.is_empty() {
            true => {
                log::warn!("empty palette, using the default one");
                Self::default()
            }
            false => Self { colors },
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// Append-only list of committed curves, plus the palette cursor.
///
/// Insertion order is z-order: later curves are drawn on top.
#[derive(Debug, Clone, Default)]
pub struct CurveStore {
    curves: Vec<Curve>,
    palette: Palette,
    /// index of the color the next drag will get
    cursor: usize,
}

impl CurveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            curves: Vec::new(),
            palette,
            cursor: 0,
        }
    }

    /// Hands out the color for a new drag and advances the cursor.
    pub fn begin_drag(&mut self) -> Color {
        let color = self.palette.get(self.cursor);
        self.cursor = (self.cursor + 1) % self.palette.len();
        color
    }

    /// Zero-length curves are accepted.
    pub fn commit(&mut self, curve: Curve) {
        self.curves.push(curve);
        log::debug!("committed curve #{} ({:?} -> {:?})", self.curves.len(), curve.start, curve.end);
    }

    /// Drops every curve; the palette cursor keeps its position.
    pub fn clear(&mut self) {
        log::debug!("clearing {} curves", self.curves.len());
        self.curves.clear();
    }

    pub fn snapshot(&self) -> &[Curve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
