//! Logistic sigmoid activation.

/// Pre-activations beyond this magnitude are treated as saturated.
const PRE_ACTIVATION_LIMIT: f64 = 500.0;

/// Logistic sigmoid `1 / (1 + e^-x)`.
///
/// The input is clamped to `[-500, 500]` before the exponential, so
/// extreme pre-activation sums cannot overflow it; the output contract
/// is unchanged since the sigmoid is already saturated well before the
/// limit. Results lie in `(0, 1)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x.clamp(-PRE_ACTIVATION_LIMIT, PRE_ACTIVATION_LIMIT)).exp())
}

/// Derivative of the sigmoid at pre-activation `x`: `s * (1 - s)` with
/// `s = sigmoid(x)`.
pub fn sigmoid_prime(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}
