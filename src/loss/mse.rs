pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((output - target)²) over the output nodes.
    pub fn loss(output: &[f64], target: &[f64]) -> f64 {
        let n = output.len() as f64;
        output
            .iter()
            .zip(target.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n
    }

    /// Per-output error: output - target.
    pub fn derivative(output: &[f64], target: &[f64]) -> Vec<f64> {
        output
            .iter()
            .zip(target.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}
