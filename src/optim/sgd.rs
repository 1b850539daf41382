use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;

/// Plain gradient descent: `param ← param - learning_rate * grad`.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one descent step to a layer given its accumulated
    /// weight and bias gradients.
    pub fn step(&self, layer: &mut Layer, weights_grad: &Matrix, biases_grad: &[f64]) {
        layer.weights.sub_scaled(weights_grad, self.learning_rate);
        for (b, g) in layer.biases.iter_mut().zip(biases_grad) {
            *b -= self.learning_rate * g;
        }
    }
}
