//! Core services composing over the ports.
//!
//! Services hold `Arc<dyn Port>` dependencies injected at construction and
//! surface their own error taxonomies. They emit no log events; reporting
//! failures is the adapters' job.

pub mod resolver;
pub mod selector;

pub use resolver::{ResolveError, VariantResolver};
pub use selector::{SelectError, SourceSelector};
