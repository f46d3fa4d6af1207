mod reader;

pub use reader::{DumpFrames, count_frames};
