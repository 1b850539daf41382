/// Index of the largest value; ties resolve to the first occurrence.
/// An empty slice yields 0.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = i;
        }
    }
    best
}

/// Collapses every score vector to one-hot in place: the winning class
/// becomes 1.0, every other entry 0.0. Already-flattened vectors are
/// left as they are, so applying this twice changes nothing.
pub fn flatten_outputs(outputs: &mut [Vec<f64>]) {
    for output in outputs.iter_mut() {
        let winner = argmax(output);
        for (i, value) in output.iter_mut().enumerate() {
            *value = if i == winner { 1.0 } else { 0.0 };
        }
    }
}

/// Fraction of samples whose predicted class matches the target's,
/// comparing argmax on both sides. Lies in `[0, 1]`; an empty set
/// scores 0.0.
pub fn accuracy(outputs: &[Vec<f64>], targets: &[Vec<f64>]) -> f64 {
    let n = outputs.len();
    if n == 0 {
        return 0.0;
    }

    let correct = outputs
        .iter()
        .zip(targets.iter())
        .filter(|(output, target)| argmax(output) == argmax(target))
        .count();

    correct as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_the_first_of_equal_maxima() {
        assert_eq!(argmax(&[0.2, 0.9, 0.9, 0.1]), 1);
        assert_eq!(argmax(&[0.5, 0.5]), 0);
    }

    #[test]
    fn argmax_of_empty_slice_is_zero() {
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn flatten_resolves_ties_to_the_first_class() {
        let mut outputs = vec![vec![0.7, 0.7, 0.1]];
        flatten_outputs(&mut outputs);
        assert_eq!(outputs[0], vec![1.0, 0.0, 0.0]);
    }
}
