//! Frame selection shared by every pipeline: range clamping, stride
//! sampling, and splitting a selection into chunks.

mod chunk;
mod error;
mod window;

pub use chunk::{ChunkPlan, chunk_path};
pub use error::Error;
pub use window::{FrameRange, SelectionWindow};
