use crate::error::NetworkError;

/// Describes a network's layer widths: the input dimensionality, the
/// ordered hidden layer sizes, and the number of output classes.
///
/// Widths are validated once here; a network built from a `Topology`
/// can assume every layer has at least one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    input_size: usize,
    hidden_sizes: Vec<usize>,
    output_size: usize,
}

impl Topology {
    /// Validates the widths. The hidden list may be empty, which yields
    /// a single input-to-output layer; a zero anywhere is rejected.
    pub fn new(
        input_size: usize,
        hidden_sizes: Vec<usize>,
        output_size: usize,
    ) -> Result<Topology, NetworkError> {
        if input_size == 0 {
            return Err(NetworkError::InvalidTopology(
                "input size must be at least 1".into(),
            ));
        }
        if output_size == 0 {
            return Err(NetworkError::InvalidTopology(
                "output size must be at least 1".into(),
            ));
        }
        if let Some(index) = hidden_sizes.iter().position(|&size| size == 0) {
            return Err(NetworkError::InvalidTopology(format!(
                "hidden layer {} has no nodes",
                index
            )));
        }

        Ok(Topology {
            input_size,
            hidden_sizes,
            output_size,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_sizes(&self) -> &[usize] {
        &self.hidden_sizes
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// `(size, input_size)` pairs for every layer, hidden layers first,
    /// output layer last.
    pub(crate) fn layer_dims(&self) -> Vec<(usize, usize)> {
        let mut dims = Vec::with_capacity(self.hidden_sizes.len() + 1);
        let mut prev = self.input_size;

        for &size in &self.hidden_sizes {
            dims.push((size, prev));
            prev = size;
        }
        dims.push((self.output_size, prev));

        dims
    }
}
