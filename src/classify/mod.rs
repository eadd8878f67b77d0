pub mod pipeline;
pub mod progress;

pub use pipeline::ClassificationPipeline;
pub use progress::{ProgressBarSink, ProgressSink};
