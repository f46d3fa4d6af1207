mod reader;
mod writer;

pub use reader::{XyzFrames, count_frames};
pub use writer::{PROPERTIES, real, write_converted, write_frame};
