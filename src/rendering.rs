//! Software painter for draw lists.
//!
//! The editor core stops at [`Primitive`]s; hosts with a native 2D API
//! paint those directly. [`Canvas`] is for everything else: headless
//! exports, tests, framebuffers.

use crate::drawing::{Primitive, Rect};
use crate::geometry::{to_vek, Float, Path, PathStep, Point};
use crate::store::Color;

use wizdraw::push_cubic_bezier_segments;
use wizdraw::stroke;
use wizdraw::fill;

use vek::bezier::CubicBezier2;
use vek::vec::Vec2;

#[allow(unused_imports)]
use num_traits::real::Real;

use rgb::RGBA8;

use alloc::{vec, vec::Vec};

use RasterError::*;

/// Cubic approximation of a quarter circle.
const KAPPA: Float = 0.552_284_8;
const FLATNESS: Float = 0.6;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RasterError {
    EmptyCanvas,
    BufferSize,
}

pub type RasterResult<T> = Result<T, RasterError>;

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<RGBA8>,
    mask: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> RasterResult<Self> {
        Self::from_buffer(width, height, vec![RGBA8::new(0, 0, 0, 0); width * height])
    }

    /// Wraps an existing row-major buffer of exactly `width * height` pixels.
    pub fn from_buffer(width: usize, height: usize, pixels: Vec<RGBA8>) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Err(EmptyCanvas);
        }
        if pixels.len() != width * height {
            return Err(BufferSize);
        }
        Ok(Self {
            width,
            height,
            pixels,
            mask: vec![0; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<RGBA8> {
        self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<RGBA8> {
        match x < self.width && y < self.height {
            true => Some(self.pixels[y * self.width + x]),
            false => None,
        }
    }

    /// Paints `primitives` in order, each one over the previous ones.
    pub fn paint<const SSAA: usize, const SSAA_SQ: usize>(&mut self, primitives: &[Primitive]) {
        for primitive in primitives {
            self.mask.fill(0);
            let color = match primitive {
                Primitive::StrokePath { path, color, width } => {
                    for polyline in flatten_path(path) {
                        self.stroke::<SSAA>(&polyline, *width);
                    }
                    *color
                }
                Primitive::DottedLine { from, to, color, width, dots } => {
                    for dash in dashes(*from, *to, *dots) {
                        self.stroke::<SSAA>(&dash, *width);
                    }
                    *color
                }
                Primitive::FillRect { rect, color } => {
                    self.fill::<SSAA, SSAA_SQ>(&rect_outline(rect));
                    *color
                }
                Primitive::StrokeRect { rect, color, width } => {
                    self.stroke::<SSAA>(&rect_outline(rect), *width);
                    *color
                }
                Primitive::StrokeCircle { center, radius, color, width } => {
                    self.stroke::<SSAA>(&circle_outline(*center, *radius), *width);
                    *color
                }
                Primitive::FillCircle { center, radius, color } => {
                    self.fill::<SSAA, SSAA_SQ>(&circle_outline(*center, *radius));
                    *color
                }
            };
            self.blend_mask(color);
        }
    }

    fn mask_size(&self) -> Vec2<usize> {
        Vec2::new(self.width, self.height)
    }

    fn stroke<const SSAA: usize>(&mut self, polyline: &[Point], width: Float) {
        if polyline.len() < 2 {
            return;
        }
        let size = self.mask_size();
        stroke::<SSAA>(polyline, &mut self.mask, size, width);
    }

    fn fill<const SSAA: usize, const SSAA_SQ: usize>(&mut self, polygon: &[Point]) {
        if polygon.len() < 3 {
            return;
        }
        let size = self.mask_size();
        fill::<SSAA, SSAA_SQ>(polygon, &mut self.mask, size);
    }

    fn blend_mask(&mut self, color: Color) {
        for (dst, q) in self.pixels.iter_mut().zip(self.mask.iter()) {
            if *q != 0 {
                blend_pixel(dst, color, *q);
            }
        }
    }
}

/// Source-over blend of `src_pixel` weighted by the coverage `mask_alpha`.
#[inline(always)]
pub fn blend_pixel(dst_pixel: &mut RGBA8, src_pixel: RGBA8, mask_alpha: u8) {
    if src_pixel.a == 255 && mask_alpha == 255 {
        *dst_pixel = src_pixel;
        return;
    }

    let src_alpha = ((src_pixel.a as u32) * (mask_alpha as u32)) / 255;
    let u8_max = u8::MAX as u32;
    let dst_alpha = u8_max - src_alpha;

    let for_each = |src, dst: &mut u8| {
        let src_scaled = (src as u32) * src_alpha;
        let dst_scaled = (*dst as u32) * dst_alpha;
        *dst = ((src_scaled + dst_scaled) / u8_max) as u8;
    };

    for_each(src_pixel.r, &mut dst_pixel.r);
    for_each(src_pixel.g, &mut dst_pixel.g);
    for_each(src_pixel.b, &mut dst_pixel.b);
    dst_pixel.a = (src_alpha + ((dst_pixel.a as u32) * dst_alpha) / u8_max) as u8;
}

/// One polyline per `MoveTo`.
fn flatten_path(path: &Path) -> Vec<Vec<Point>> {
    let mut polylines = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for step in path {
        match *step {
            PathStep::MoveTo(p) => {
                if !current.is_empty() {
                    polylines.push(core::mem::take(&mut current));
                }
                current.push(p);
            }
            PathStep::CubicTo(c1, c2, end) => {
                let start = current.last().copied().unwrap_or(c1);
                if current.is_empty() {
                    current.push(start);
                }
                push_cubic_bezier_segments::<8>(&to_vek(start, c1, c2, end), FLATNESS, &mut current);
            }
        }
    }

    if !current.is_empty() {
        polylines.push(current);
    }

    // zero-length segments have no direction to stroke along
    for polyline in polylines.iter_mut() {
        polyline.dedup();
    }

    polylines
}

fn dashes(from: Point, to: Point, (on, off): (Float, Float)) -> Vec<[Point; 2]> {
    let length = (to - from).magnitude();
    let period = on + off;
    if length <= 0.0 || on <= 0.0 {
        return Vec::new();
    }
    if period <= on {
        return vec![[from, to]];
    }

    let direction = (to - from) / length;
    let mut dashes = Vec::new();
    let mut offset = 0.0;
    while offset < length {
        let end = (offset + on).min(length);
        dashes.push([from + direction * offset, from + direction * end]);
        offset += period;
    }
    dashes
}

fn rect_outline(rect: &Rect) -> [Point; 5] {
    let min = rect.min;
    let max = rect.max();
    [
        min,
        Point::new(max.x, min.y),
        max,
        Point::new(min.x, max.y),
        min,
    ]
}

fn circle_outline(center: Point, radius: Float) -> Vec<Point> {
    let mut outline = Vec::new();
    if radius <= 0.0 {
        return outline;
    }

    let k = KAPPA * radius;
    let r = radius;
    let c = center;
    // four quarter arcs, clockwise in screen space starting on the right
    let quarters = [
        (Point::new(r, 0.0), Point::new(r, k), Point::new(k, r), Point::new(0.0, r)),
        (Point::new(0.0, r), Point::new(-k, r), Point::new(-r, k), Point::new(-r, 0.0)),
        (Point::new(-r, 0.0), Point::new(-r, -k), Point::new(-k, -r), Point::new(0.0, -r)),
        (Point::new(0.0, -r), Point::new(k, -r), Point::new(r, -k), Point::new(r, 0.0)),
    ];

    outline.push(c + quarters[0].0);
    for (start, ctrl0, ctrl1, end) in quarters {
        let arc = CubicBezier2 {
            start: c + start,
            ctrl0: c + ctrl0,
            ctrl1: c + ctrl1,
            end: c + end,
        };
        push_cubic_bezier_segments::<8>(&arc, FLATNESS, &mut outline);
    }
    outline.dedup();

    // close the loop
    if let Some(first) = outline.first().copied() {
        if outline.last() != Some(&first) {
            outline.push(first);
        }
    }
    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_size_is_checked() {
        assert_eq!(Canvas::new(0, 10).err(), Some(EmptyCanvas));
        let pixels = vec![RGBA8::new(0, 0, 0, 0); 10];
        assert_eq!(Canvas::from_buffer(4, 4, pixels).err(), Some(BufferSize));
    }

    #[test]
    fn dotted_line_splits_into_dashes() {
        let d = dashes(Point::new(0.0, 0.0), Point::new(10.0, 0.0), (2.0, 2.0));
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], [Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
        assert_eq!(d[2], [Point::new(8.0, 0.0), Point::new(10.0, 0.0)]);
        assert!(dashes(Point::new(3.0, 3.0), Point::new(3.0, 3.0), (2.0, 2.0)).is_empty());
    }

    #[test]
    fn opaque_blend_replaces() {
        let mut dst = RGBA8::new(1, 2, 3, 4);
        blend_pixel(&mut dst, RGBA8::new(9, 8, 7, 255), 255);
        assert_eq!(dst, RGBA8::new(9, 8, 7, 255));
    }

    #[test]
    fn filled_circle_covers_its_center() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        let red = RGBA8::new(255, 0, 0, 255);
        canvas.paint::<4, 16>(&[Primitive::FillCircle {
            center: Point::new(10.0, 10.0),
            radius: 5.0,
            color: red,
        }]);
        let center = canvas.pixel(10, 10).unwrap();
        assert!(center.r > 200 && center.g == 0 && center.b == 0);
        assert_eq!(canvas.pixel(0, 0), Some(RGBA8::new(0, 0, 0, 0)));
    }
}
