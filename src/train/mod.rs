pub mod trainer;

pub use trainer::{train_network, train_network_with_costs};
