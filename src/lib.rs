//! Drag-to-draw cubic bezier editor.
//!
//! A host forwards pointer, resize and command events to an
//! [`EditorSession`], repaints whenever an [`Effect::Invalidate`] comes
//! back, and paints the [`Primitive`] list returned by
//! [`EditorSession::frame`]. [`Canvas`] can do the painting in software.

#![no_std]
extern crate alloc;

pub mod geometry;
pub mod store;
pub mod interaction;
pub mod drawing;
pub mod rendering;


#[doc(inline)]
pub use {
    geometry::Point,
    geometry::derive_control_points,
    geometry::evaluate_cubic_bezier,
    store::Color,
    store::Curve,
    store::CurveStore,
    store::Palette,
    interaction::EditorSession,
    interaction::Event,
    interaction::Effect,
    drawing::Primitive,
    drawing::Style,
    drawing::render,
    rendering::Canvas,
};
