use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use trajslice::{Observer, Stage};

fn stage_label(stage: Stage) -> String {
    match stage {
        Stage::Converting => "Converting frames".to_string(),
        Stage::Resampling => "Resampling frames".to_string(),
        Stage::Buffering => "Loading frames".to_string(),
        Stage::WritingChunk { ordinal, of } => format!("Writing chunk {}/{}", ordinal + 1, of),
    }
}

/// One `indicatif` bar per pipeline stage, with a summary line as each
/// stage completes.
pub struct FrameBars {
    bar: Option<ProgressBar>,
    label: String,
    start: Instant,
    stage_start: Instant,
}

impl FrameBars {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            bar: None,
            label: String::new(),
            start: now,
            stage_start: now,
        }
    }

    fn begin(&mut self, stage: Stage, total: usize) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        self.label = stage_label(stage);
        self.stage_start = Instant::now();

        // Stages with an unknown length get a spinner.
        let bar = if total == 0 {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner:.cyan} {msg} ({pos} frames)")
                    .expect("invalid template")
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        } else {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {spinner:.cyan} {msg:<24} [{bar:30.cyan/blue}] {pos}/{len}")
                    .expect("invalid template")
                    .progress_chars("█▓░"),
            );
            bar
        };
        bar.set_message(self.label.clone());
        self.bar = Some(bar);
    }

    fn advance(&mut self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn complete(&mut self) {
        let Some(bar) = self.bar.take() else {
            return;
        };
        let frames = bar.position();
        bar.finish_and_clear();

        let elapsed = self.stage_start.elapsed();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<32} {:>8} {:>6.1}s",
            self.label,
            format!("{frames} fr"),
            elapsed.as_secs_f64()
        );
    }

    pub fn done(mut self) {
        self.complete();
        print_footer(self.start.elapsed());
    }
}

impl Default for FrameBars {
    fn default() -> Self {
        Self::new()
    }
}

fn print_footer(elapsed: Duration) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m Done {:>45}",
        format!("Total: {:.2}s", elapsed.as_secs_f64())
    );
    let _ = writeln!(stderr);
}

pub enum Progress {
    Interactive(FrameBars),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool) -> Self {
        if interactive {
            Self::Interactive(FrameBars::new())
        } else {
            Self::Silent
        }
    }

    /// Closes any open bar and prints the total elapsed time.
    pub fn done(self) {
        match self {
            Self::Interactive(bars) => bars.done(),
            Self::Silent => {}
        }
    }
}

impl Observer for Progress {
    fn begin(&mut self, stage: Stage, total: usize) {
        if let Self::Interactive(bars) = self {
            bars.begin(stage, total);
        }
    }

    fn advance(&mut self) {
        if let Self::Interactive(bars) = self {
            bars.advance();
        }
    }

    fn finish(&mut self) {
        if let Self::Interactive(bars) = self {
            bars.complete();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_chunks_from_one() {
        assert_eq!(
            stage_label(Stage::WritingChunk { ordinal: 0, of: 3 }),
            "Writing chunk 1/3"
        );
        assert_eq!(stage_label(Stage::Buffering), "Loading frames");
    }
}
