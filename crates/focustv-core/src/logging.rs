//! Logging facilities.
//!
//! focustv instruments itself with the `tracing` crate. Install a subscriber
//! in the embedding application to see output:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! The constants in [`targets`] name each subsystem so logs can be filtered
//! with `tracing` directives, e.g. `focustv::animation=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core systems (signals, object identity).
    pub const CORE: &str = "focustv_core";
    /// Signal/slot system.
    pub const SIGNAL: &str = "focustv_core::signal";
    /// Widget layer.
    pub const WIDGET: &str = "focustv::widget";
    /// Animation scheduling and execution.
    pub const ANIMATION: &str = "focustv::animation";
    /// Render layer property changes.
    pub const LAYER: &str = "focustv_render::layer";
}
