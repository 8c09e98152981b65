//! Breadcrumb map, engine, and presentation hints
//!
//! The map is static configuration; the engine derives a trail from it per
//! navigation event. Trails are ephemeral - recomputed on every call,
//! owned by the caller.

mod display;
mod engine;
mod map;

pub use display::{BreadcrumbDisplay, SectionVariant, TrailStyle};
pub use engine::{format_segment_label, BreadcrumbEngine, BreadcrumbItem};
pub use map::{BreadcrumbEntry, BreadcrumbMap};
