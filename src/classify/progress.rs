use indicatif::{ProgressBar, ProgressStyle};

/// Receives the completed fraction of a run, in `[0, 1]`, after every item.
pub trait ProgressSink {
    fn report_progress(&self, fraction: f64);
}

impl<F: Fn(f64)> ProgressSink for F {
    fn report_progress(&self, fraction: f64) {
        self(fraction)
    }
}

/// Terminal progress bar for batch runs.
pub struct ProgressBarSink {
    bar: ProgressBar,
    len: u64,
}

impl ProgressBarSink {
    pub fn new(len: usize) -> Self {
        let len = len as u64;
        let bar = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} items")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        Self { bar, len }
    }

    pub fn finish(&self, message: &'static str) {
        self.bar.finish_with_message(message);
    }
}

impl ProgressSink for ProgressBarSink {
    fn report_progress(&self, fraction: f64) {
        let position = (fraction.clamp(0.0, 1.0) * self.len as f64).round() as u64;
        self.bar.set_position(position);
    }
}
