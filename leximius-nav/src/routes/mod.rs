//! Route table and the query surface over it
//!
//! [`RouteRegistry`] holds the ordered route table (loaded once at process
//! start); [`RouteResolver`] answers availability, category, and
//! coming-soon queries over it.

mod descriptor;
mod registry;
mod resolver;

pub use descriptor::{ComingSoonInfo, RouteCategory, RouteDescriptor};
pub use registry::RouteRegistry;
pub use resolver::RouteResolver;
