pub mod classifier;
pub mod delivery;
pub mod paginator;
pub mod renderer;

pub use crate::domain::model::{Chunk, MalformedContent, ParsedValue, RenderLine, Scalar};
pub use crate::domain::ports::{ReplySink, ResourceStore};
pub use crate::utils::error::Result;
