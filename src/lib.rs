//! chartkit: typed bindings for an embeddable charting engine.
//!
//! The crate owns three concerns: strongly-typed chart configuration
//! records, a pure translation layer producing the engine's loosely-typed
//! native configuration object, and a widget/canvas-adapter pair that
//! ties engine instance lifetime to UI lifecycle events.

pub mod config;
pub mod engine;
pub mod error;
pub mod locale;
pub mod native;
pub mod shell;
pub mod surface;
pub mod telemetry;
pub mod translate;
pub mod widget;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use translate::translate;
pub use widget::ChartWidget;
