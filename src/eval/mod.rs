pub mod metrics;

pub use metrics::{accuracy, argmax, flatten_outputs};
