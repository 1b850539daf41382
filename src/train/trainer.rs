use log::debug;

use crate::activation::sigmoid_prime;
use crate::error::NetworkError;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;

/// How often the training loop emits a debug-level progress line.
const PROGRESS_INTERVAL: usize = 1000;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` in place with full-batch gradient descent for a
/// fixed number of iterations.
///
/// # Arguments
/// - `network`    — modified in place; untouched if validation fails
/// - `inputs`     — training samples, each of the network's input width
/// - `targets`    — one-hot targets, same length as `inputs`, each of
///                  the network's output width
/// - `optimizer`  — carries the learning rate applied after each batch
/// - `iterations` — number of full passes; each accumulates gradients
///                  over every sample, then updates once
///
/// There is no convergence check: the loop always runs to the requested
/// count. A learning rate of zero is a valid no-op.
pub fn train_network(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    optimizer: &Sgd,
    iterations: usize,
) -> Result<(), NetworkError> {
    run_training(network, inputs, targets, optimizer, iterations, None)
}

/// Same training run as [`train_network`], but also records the mean
/// cost across the batch at the start of every iteration. The returned
/// trace has exactly `iterations` entries; recording it does not alter
/// the parameter updates.
pub fn train_network_with_costs(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    optimizer: &Sgd,
    iterations: usize,
) -> Result<Vec<f64>, NetworkError> {
    let mut costs = Vec::with_capacity(iterations);
    run_training(network, inputs, targets, optimizer, iterations, Some(&mut costs))?;
    Ok(costs)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Validates the whole training set against the network's widths. Runs
/// before the first update so a failing call never partially trains.
fn validate_training_set(
    network: &Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<(), NetworkError> {
    if inputs.is_empty() {
        return Err(NetworkError::EmptyTrainingSet);
    }
    if inputs.len() != targets.len() {
        return Err(NetworkError::SampleCountMismatch {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }

    for input in inputs {
        if input.len() != network.input_size() {
            return Err(NetworkError::InputWidthMismatch {
                expected: network.input_size(),
                actual: input.len(),
            });
        }
    }
    for target in targets {
        if target.len() != network.output_size() {
            return Err(NetworkError::TargetWidthMismatch {
                expected: network.output_size(),
                actual: target.len(),
            });
        }
    }

    Ok(())
}

/// The full-batch loop shared by both entry points. Per iteration:
/// forward every sample with cached intermediates, backpropagate the
/// output error down the stack, sum the per-sample gradients, then
/// apply one optimizer step per layer.
fn run_training(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    optimizer: &Sgd,
    iterations: usize,
    mut costs: Option<&mut Vec<f64>>,
) -> Result<(), NetworkError> {
    validate_training_set(network, inputs, targets)?;

    let n_layers = network.layers.len();
    let n_samples = inputs.len() as f64;

    // Gradient accumulators, one (weights, biases) pair per layer,
    // allocated once and zeroed at the top of every iteration.
    let mut acc_grads: Vec<(Matrix, Vec<f64>)> = network
        .layers
        .iter()
        .map(|layer| {
            (
                Matrix::zeros(layer.size(), layer.input_size()),
                vec![0.0; layer.size()],
            )
        })
        .collect();

    for iteration in 0..iterations {
        for (w_acc, b_acc) in acc_grads.iter_mut() {
            w_acc.fill(0.0);
            b_acc.fill(0.0);
        }
        let mut total_loss = 0.0;

        // Accumulate gradients over the full batch.
        for (input, target) in inputs.iter().zip(targets.iter()) {
            let cache = network.forward_cached(input);
            let output = &cache.post[n_layers - 1];

            total_loss += MseLoss::loss(output, target);

            // Output layer delta: (output - target) ⊙ σ'(z).
            let error = MseLoss::derivative(output, target);
            let mut delta: Vec<f64> = error
                .iter()
                .zip(&cache.pre[n_layers - 1])
                .map(|(e, z)| e * sigmoid_prime(*z))
                .collect();

            // Walk the stack top-down, summing this sample's gradients
            // and pushing the delta one layer further each step.
            for i in (0..n_layers).rev() {
                let prev_act: &[f64] = if i == 0 { input } else { &cache.post[i - 1] };

                let (w_acc, b_acc) = &mut acc_grads[i];
                w_acc.add_outer(&delta, prev_act);
                for (acc, d) in b_acc.iter_mut().zip(&delta) {
                    *acc += d;
                }

                if i > 0 {
                    let propagated = network.layers[i].weights.mul_vec_transposed(&delta);
                    delta = propagated
                        .iter()
                        .zip(&cache.pre[i - 1])
                        .map(|(p, z)| p * sigmoid_prime(*z))
                        .collect();
                }
            }
        }

        // One descent step per layer with the summed gradients.
        for (i, (w_acc, b_acc)) in acc_grads.iter().enumerate() {
            optimizer.step(&mut network.layers[i], w_acc, b_acc);
        }

        let mean_cost = total_loss / n_samples;
        if let Some(trace) = costs.as_deref_mut() {
            trace.push(mean_cost);
        }
        if (iteration + 1) % PROGRESS_INTERVAL == 0 || iteration + 1 == iterations {
            debug!(
                "iteration {}/{}: mean cost {:.6}",
                iteration + 1,
                iterations,
                mean_cost
            );
        }
    }

    Ok(())
}
