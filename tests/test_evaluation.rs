//! Evaluation helpers: winner-take-all flattening and accuracy scoring.

use digit_nn::{accuracy, argmax, flatten_outputs};

#[test]
fn argmax_prefers_the_first_of_equal_scores() {
    assert_eq!(argmax(&[0.1, 0.9, 0.9, 0.2]), 1);
    assert_eq!(argmax(&[0.5, 0.5]), 0);
    assert_eq!(argmax(&[0.0, 0.2, 0.1]), 1);
}

#[test]
fn flatten_turns_scores_into_one_hot_rows() {
    let mut outputs = vec![vec![0.2, 0.7, 0.1], vec![0.9, 0.05, 0.05]];
    flatten_outputs(&mut outputs);
    assert_eq!(outputs, vec![vec![0.0, 1.0, 0.0], vec![1.0, 0.0, 0.0]]);
}

#[test]
fn flatten_is_idempotent() {
    let mut outputs = vec![
        vec![0.31, 0.29, 0.4],
        vec![0.5, 0.5, 0.0],
        vec![0.01, 0.02, 0.97],
    ];
    flatten_outputs(&mut outputs);
    let once = outputs.clone();
    flatten_outputs(&mut outputs);
    assert_eq!(outputs, once);
}

#[test]
fn accuracy_counts_matching_winners() {
    let outputs = vec![
        vec![0.9, 0.1],
        vec![0.2, 0.8],
        vec![0.6, 0.4],
        vec![0.3, 0.7],
    ];
    let targets = vec![
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 1.0],
    ];
    let score = accuracy(&outputs, &targets);
    assert!((score - 0.75).abs() < 1e-12);
    assert!((0.0..=1.0).contains(&score));
}

#[test]
fn flattened_outputs_score_perfectly_against_themselves() {
    let mut outputs = vec![
        vec![0.2, 0.7, 0.1],
        vec![0.5, 0.5, 0.0],
        vec![0.1, 0.1, 0.8],
    ];
    flatten_outputs(&mut outputs);
    assert_eq!(accuracy(&outputs, &outputs), 1.0);
}

#[test]
fn accuracy_of_nothing_is_zero() {
    let outputs: Vec<Vec<f64>> = Vec::new();
    let targets: Vec<Vec<f64>> = Vec::new();
    assert_eq!(accuracy(&outputs, &targets), 0.0);
}
