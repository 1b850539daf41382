pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod eval;
pub mod data;
pub mod config;

// Convenience re-exports
pub use error::{DataError, NetworkError, Position};
pub use math::matrix::Matrix;
pub use activation::{sigmoid, sigmoid_prime};
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::topology::Topology;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::trainer::{train_network, train_network_with_costs};
pub use eval::metrics::{accuracy, argmax, flatten_outputs};
pub use data::digits::{load_digits, DigitDataset, SampleSlice};
pub use data::export::write_costs;
pub use config::RunConfig;
