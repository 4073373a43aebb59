//! Percent progress bar driven by fractional pipeline progress.

use indicatif::{ProgressBar, ProgressStyle};

/// Bar resolution; fractions are scaled to this many ticks.
const TICKS: u64 = 1000;

pub struct Bar {
    bar: ProgressBar,
}

impl Bar {
    pub fn new(description: &str) -> Self {
        let bar = ProgressBar::new(TICKS);
        let style = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {percent}%")
            .expect("valid template")
            .progress_chars("●○ ");

        bar.set_style(style);
        bar.set_message(description.to_string());

        Self { bar }
    }

    /// A bar that renders nothing; used in tests and non-tty contexts.
    #[must_use]
    pub fn hidden() -> Self {
        Self { bar: ProgressBar::hidden() }
    }

    /// Moves the bar to an absolute fraction in `[0, 1]`.
    ///
    /// Positions only move forward, matching the non-decreasing progress
    /// contract of the pipelines.
    pub fn set_fraction(&self, fraction: f64) {
        let position = (fraction.clamp(0.0, 1.0) * TICKS as f64).round() as u64;
        if position > self.bar.position() {
            self.bar.set_position(position);
        }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Done");
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish();
        }
    }
}
