use rand::Rng;

use crate::activation::sigmoid;
use crate::math::matrix::Matrix;

/// A fully connected sigmoid layer.
///
/// The weight matrix has one row per output node and one column per
/// input node, so a forward pass computes `z = W·x + b`. The layer is
/// exclusively owned by its network; the fields stay public so that
/// callers (and tests) can inspect or hand-set parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub weights: Matrix,
    pub biases: Vec<f64>,
}

impl Layer {
    /// Creates a layer mapping `input_size` activations to `size`
    /// outputs. Weights start Xavier-distributed, biases at zero.
    pub fn new<R: Rng>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        Layer {
            weights: Matrix::xavier_uniform(size, input_size, rng),
            biases: vec![0.0; size],
        }
    }

    /// Number of input connections per node.
    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    /// Number of nodes in this layer.
    pub fn size(&self) -> usize {
        self.weights.rows()
    }

    /// Feeds one activation vector through the layer. Returns the
    /// pre-activation sums `z = W·x + b` together with the activations
    /// `sigmoid(z)`; backpropagation needs both.
    pub fn forward(&self, input: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let mut pre = self.weights.mul_vec(input);
        for (z, b) in pre.iter_mut().zip(&self.biases) {
            *z += b;
        }

        let act = pre.iter().map(|&z| sigmoid(z)).collect();
        (pre, act)
    }

    /// Batched [`Layer::forward`] keeping only the activations, one
    /// output vector per input in the same order.
    pub fn forward_batch(&self, inputs: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let mut outs = self.weights.mul_batch(inputs);
        for out in outs.iter_mut() {
            for (z, b) in out.iter_mut().zip(&self.biases) {
                *z = sigmoid(*z + b);
            }
        }

        outs
    }
}
