//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No filesystem or codec crate types in any signature
//! - Byte streams cross the boundary as `tokio::io` trait objects
//! - Artifact presence is only ever learned from the result of
//!   `create_artifact`, never from a separate existence check

pub mod random;
pub mod store;
pub mod transform;

pub use random::{RandomSource, ThreadRandom};
pub use store::{ArtifactWriter, ImageStore, SourceReader, StoreError};
pub use transform::{ImageTransformer, TransformError};
