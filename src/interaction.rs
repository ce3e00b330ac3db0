//! Drag lifecycle and editor commands.
//!
//! [`EditorSession`] is the single aggregate the host keeps around. Every
//! inbound event goes through [`EditorSession::handle`], which mutates the
//! session and reports what the host has to do next.

use crate::drawing::{render, Primitive, Style};
use crate::geometry::{center, derive_control_points, Float, Point, P_ZERO};
use crate::store::{Color, Curve, CurveStore, Palette};

use alloc::{vec, vec::Vec};

/// Inbound events, as delivered by the host.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased(Point),
    CanvasResized(Float, Float),
    ShowControlPoints,
    HideControlPoints,
    Clear,
}

/// Requests sent back to the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Effect {
    /// the canvas must be repainted
    Invalidate,
}

pub type Effects = Vec<Effect>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Dragging,
}

/// The in-progress drag. Zeroed when no drag is running.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub start: Point,
    pub current: Point,
    pub control1: Point,
    pub control2: Point,
    pub color: Color,
}

impl DragState {
    pub const fn neutral() -> Self {
        Self {
            active: false,
            start: P_ZERO,
            current: P_ZERO,
            control1: P_ZERO,
            control2: P_ZERO,
            color: Color { r: 0, g: 0, b: 0, a: 0 },
        }
    }

    fn update_controls(&mut self) {
        let (control1, control2) = derive_control_points(self.start, self.current);
        self.control1 = control1;
        self.control2 = control2;
    }

    fn curve(&self) -> Curve {
        Curve {
            start: self.start,
            control1: self.control1,
            control2: self.control2,
            end: self.current,
            color: self.color,
        }
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub show_control_points: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    store: CurveStore,
    drag: DragState,
    view: ViewState,
    canvas_size: (Float, Float),
    style: Style,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            store: CurveStore::with_palette(palette),
            ..Self::default()
        }
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Applies one event. Never fails: unexpected events (a move or a
    /// release without a press) are ignored and yield no effects.
    pub fn handle(&mut self, event: Event) -> Effects {
        match event {
            Event::PointerPressed(position) => {
                self.drag.active = true;
                self.drag.start = position;
                self.drag.current = position;
                self.drag.color = self.store.begin_drag();
                self.drag.update_controls();
                log::debug!("drag started at {:?}", position);
                vec![Effect::Invalidate]
            }
            Event::PointerMoved(position) => {
                if !self.drag.active {
                    return Vec::new();
                }
                self.drag.current = position;
                self.drag.update_controls();
                log::trace!("drag moved to {:?}", position);
                vec![Effect::Invalidate]
            }
            Event::PointerReleased(_) => {
                if !self.drag.active {
                    return Vec::new();
                }
                // the curve ends where the last move left it
                self.store.commit(self.drag.curve());
                self.drag = DragState::neutral();
                vec![Effect::Invalidate]
            }
            Event::CanvasResized(width, height) => {
                // also relocates the anchor of a running drag
                self.drag.start = center(width, height);
                self.canvas_size = (width, height);
                log::debug!("canvas resized to {}x{}", width, height);
                vec![Effect::Invalidate]
            }
            Event::ShowControlPoints => self.set_control_points(true),
            Event::HideControlPoints => self.set_control_points(false),
            Event::Clear => {
                self.store.clear();
                vec![Effect::Invalidate]
            }
        }
    }

    fn set_control_points(&mut self, visible: bool) -> Effects {
        self.view.show_control_points = visible;
        log::debug!("control points visible: {}", visible);
        vec![Effect::Invalidate]
    }

    pub fn pointer_pressed(&mut self, position: Point) -> Effects {
        self.handle(Event::PointerPressed(position))
    }

    pub fn pointer_moved(&mut self, position: Point) -> Effects {
        self.handle(Event::PointerMoved(position))
    }

    pub fn pointer_released(&mut self, position: Point) -> Effects {
        self.handle(Event::PointerReleased(position))
    }

    pub fn canvas_resized(&mut self, width: Float, height: Float) -> Effects {
        self.handle(Event::CanvasResized(width, height))
    }

    pub fn show_control_points(&mut self) -> Effects {
        self.handle(Event::ShowControlPoints)
    }

    pub fn hide_control_points(&mut self) -> Effects {
        self.handle(Event::HideControlPoints)
    }

    pub fn clear(&mut self) -> Effects {
        self.handle(Event::Clear)
    }

    pub fn mode(&self) -> Mode {
        match self.drag.active {
            true => Mode::Dragging,
            false => Mode::Idle,
        }
    }

    /// The live curve, present only while dragging.
    pub fn preview(&self) -> Option<Curve> {
        match self.drag.active {
            true => Some(self.drag.curve()),
            false => None,
        }
    }

    /// Draw list for the current state.
    pub fn frame(&self) -> Vec<Primitive> {
        let preview = self.preview();
        render(self.store.snapshot(), preview.as_ref(), self.view, &self.style)
    }

    pub fn store(&self) -> &CurveStore {
        &self.store
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn canvas_size(&self) -> (Float, Float) {
        self.canvas_size
    }
}
