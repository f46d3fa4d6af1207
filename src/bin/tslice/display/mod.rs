mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{
    print_chunk_summary, print_convert_summary, print_input_info, print_resample_summary,
};

use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}

/// Prints a non-fatal warning to stderr. Shown even in quiet mode.
pub fn print_warning(message: &str) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "  \x1b[33m!\x1b[0m Warning: {message}");
}
