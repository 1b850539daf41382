use rand::Rng;

use crate::error::NetworkError;
use crate::layers::dense::Layer;
use crate::network::topology::Topology;

/// A feed-forward network: an ordered stack of dense sigmoid layers.
///
/// The first layer reads vectors of the declared input width; the last
/// layer produces one score per class. Only training mutates the
/// parameters; forward passes borrow the network immutably.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub layers: Vec<Layer>,
    input_size: usize,
    output_size: usize,
}

/// Intermediates recorded by one cached forward pass: every layer's
/// pre-activation sums and activations, in layer order. Consumed by
/// backpropagation and dropped with the training step that made it.
#[derive(Debug)]
pub(crate) struct ActivationCache {
    pub(crate) pre: Vec<Vec<f64>>,
    pub(crate) post: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a network with freshly initialized parameters, one layer
    /// per entry of the topology's layer chain.
    pub fn new<R: Rng>(topology: &Topology, rng: &mut R) -> Network {
        let layers = topology
            .layer_dims()
            .into_iter()
            .map(|(size, input_size)| Layer::new(size, input_size, rng))
            .collect();

        Network {
            layers,
            input_size: topology.input_size(),
            output_size: topology.output_size(),
        }
    }

    /// Width of the input vectors this network accepts.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Width of the output vectors this network produces.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Propagates one input vector through every layer and returns the
    /// final activations, one score in `(0, 1)` per class.
    ///
    /// Inference only: nothing is cached and the network is unchanged.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        if input.len() != self.input_size {
            return Err(NetworkError::InputWidthMismatch {
                expected: self.input_size,
                actual: input.len(),
            });
        }

        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current).1;
        }

        Ok(current)
    }

    /// Batched [`Network::forward`]: propagates every sample through the
    /// stack, outputs in input order. Each sample is independent.
    pub fn forward_batch(&self, inputs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, NetworkError> {
        for input in inputs {
            if input.len() != self.input_size {
                return Err(NetworkError::InputWidthMismatch {
                    expected: self.input_size,
                    actual: input.len(),
                });
            }
        }

        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward_batch(&current);
        }

        Ok(current)
    }

    /// Forward pass that records every layer's intermediates for
    /// backpropagation. The trainer validates input widths before any
    /// cached pass runs, so this skips the check.
    pub(crate) fn forward_cached(&self, input: &[f64]) -> ActivationCache {
        let mut pre = Vec::with_capacity(self.layers.len());
        let mut post: Vec<Vec<f64>> = Vec::with_capacity(self.layers.len());

        for (i, layer) in self.layers.iter().enumerate() {
            let prev: &[f64] = if i == 0 { input } else { &post[i - 1] };
            let (z, a) = layer.forward(prev);
            pre.push(z);
            post.push(a);
        }

        ActivationCache { pre, post }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn network_4_3_2() -> Network {
        let mut rng = StdRng::seed_from_u64(11);
        let topology = Topology::new(4, vec![3], 2).unwrap();
        Network::new(&topology, &mut rng)
    }

    #[test]
    fn construction_sizes_every_layer_to_its_predecessor() {
        let network = network_4_3_2();

        assert_eq!(network.layers.len(), 2);
        assert_eq!(network.layers[0].input_size(), 4);
        assert_eq!(network.layers[0].size(), 3);
        assert_eq!(network.layers[1].input_size(), 3);
        assert_eq!(network.layers[1].size(), 2);
        assert_eq!(network.input_size(), 4);
        assert_eq!(network.output_size(), 2);
    }

    #[test]
    fn cached_forward_records_one_entry_per_layer() {
        let network = network_4_3_2();
        let input = [0.5, 0.25, 0.0, 1.0];

        let cache = network.forward_cached(&input);
        assert_eq!(cache.pre.len(), 2);
        assert_eq!(cache.post.len(), 2);
        assert_eq!(cache.pre[0].len(), 3);
        assert_eq!(cache.post[1].len(), 2);
    }

    #[test]
    fn cached_forward_agrees_with_plain_forward() {
        let network = network_4_3_2();
        let input = [1.0, 2.0, 3.0, 4.0];

        let output = network.forward(&input).unwrap();
        let cache = network.forward_cached(&input);
        for (a, b) in output.iter().zip(cache.post.last().unwrap()) {
            assert_relative_eq!(*a, *b);
        }
    }
}
