//! Widget event types.
//!
//! TV platforms deliver physical presses (select buttons, remote clicks) as
//! phased press events rather than pointer events: a press begins, then
//! either ends normally or is cancelled by the system. Widgets receive these
//! through [`Widget::event`](super::Widget::event) as [`WidgetEvent`]s.

use focustv_render::Size;

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Phase of a physical press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressPhase {
    /// The press was initiated.
    Began,
    /// The press ended normally (the user released).
    Ended,
    /// The system cancelled the press (e.g. an interruption or focus loss).
    Cancelled,
}

/// A physical press event from the platform's input system.
#[derive(Debug, Clone, Copy)]
pub struct PressEvent {
    /// Common event data.
    pub base: EventBase,
    /// Which phase of the press this event reports.
    pub phase: PressPhase,
}

impl PressEvent {
    /// Create a press event in the given phase.
    pub fn new(phase: PressPhase) -> Self {
        Self {
            base: EventBase::new(),
            phase,
        }
    }
}

/// Event sent when a widget is resized.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    /// Common event data.
    pub base: EventBase,
    /// The widget's previous size.
    pub old_size: Size,
    /// The widget's new size.
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// All events a widget can receive.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    /// A physical press in one of its phases.
    Press(PressEvent),
    /// The widget was resized.
    Resize(ResizeEvent),
}

impl WidgetEvent {
    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        match self {
            Self::Press(e) => e.base.accept(),
            Self::Resize(e) => e.base.accept(),
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::Press(e) => e.base.is_accepted(),
            Self::Resize(e) => e.base.is_accepted(),
        }
    }
}
