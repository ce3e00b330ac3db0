use crate::geometry::{cubic_path, Float, Path, Point};
use crate::interaction::ViewState;
use crate::store::{Color, Curve, BEIGE};

use alloc::vec::Vec;

/// Fixed visual constants of a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub stroke_width: Float,
    /// handles are `2 * handle_half_size` wide squares
    pub handle_half_size: Float,
    pub marker_radius: Float,
    /// fill of handles and endpoint markers
    pub neutral: Color,
    /// (dot length, gap length) of the handle lines
    pub dots: (Float, Float),
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            handle_half_size: 3.0,
            marker_radius: 5.0,
            neutral: BEIGE,
            dots: (2.0, 2.0),
        }
    }
}

/// Axis aligned rectangle; `min` is the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub size: Point,
}

impl Rect {
    pub fn centered(center: Point, half_size: Float) -> Self {
        Self {
            min: center - Point::broadcast(half_size),
            size: Point::broadcast(2.0 * half_size),
        }
    }

    pub fn max(&self) -> Point {
        self.min + self.size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    StrokePath {
        path: Path,
        color: Color,
        width: Float,
    },
    DottedLine {
        from: Point,
        to: Point,
        color: Color,
        width: Float,
        dots: (Float, Float),
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: Float,
    },
    StrokeCircle {
        center: Point,
        radius: Float,
        color: Color,
        width: Float,
    },
    FillCircle {
        center: Point,
        radius: Float,
        color: Color,
    },
}

/// Builds the draw list of one frame.
///
/// Committed curves come first in insertion order, then the preview, so
/// the curve being dragged is always on top. Same inputs, same list.
pub fn render(curves: &[Curve], preview: Option<&Curve>, view: ViewState, style: &Style) -> Vec<Primitive> {
    let per_curve = match view.show_control_points {
        true => 11,
        false => 5,
    };
    let count = curves.len() + preview.is_some() as usize;
    let mut primitives = Vec::with_capacity(count * per_curve);

    for curve in curves.iter().chain(preview) {
        push_curve(&mut primitives, curve, view, style);
    }

    log::trace!("frame: {} curves, {} primitives", count, primitives.len());
    primitives
}

fn push_curve(dst: &mut Vec<Primitive>, curve: &Curve, view: ViewState, style: &Style) {
    let color = curve.color;
    let width = style.stroke_width;

    dst.push(Primitive::StrokePath {
        path: cubic_path(curve.start, curve.control1, curve.control2, curve.end),
        color,
        width,
    });

    if view.show_control_points {
        for (anchor, control) in [(curve.start, curve.control1), (curve.end, curve.control2)] {
            dst.push(Primitive::DottedLine {
                from: anchor,
                to: control,
                color,
                width,
                dots: style.dots,
            });
            let rect = Rect::centered(control, style.handle_half_size);
            dst.push(Primitive::FillRect { rect, color: style.neutral });
            dst.push(Primitive::StrokeRect { rect, color, width });
        }
    }

    // markers last so they cover the handle lines
    for center in [curve.start, curve.end] {
        dst.push(Primitive::StrokeCircle {
            center,
            radius: style.marker_radius,
            color,
            width,
        });
        dst.push(Primitive::FillCircle {
            center,
            radius: style.marker_radius,
            color: style.neutral,
        });
    }
}
