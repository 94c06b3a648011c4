pub mod error;
pub mod escape;
pub mod metadata;

pub use error::{RelationError, RelationResult, TransportError};
pub use metadata::{DataInfo, QueryMetadata};
