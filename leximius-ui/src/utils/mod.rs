//! Supporting utilities for the design system

pub mod format;
pub mod validate;
