//! Probabilistic estimators over sparse feature rows

use crate::artifact::MultiClassSpec;
use langid_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fitted estimator state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    /// Multinomial naive Bayes
    MultinomialNb {
        /// Log prior per class
        class_log_prior: Vec<f64>,
        /// Log probability of each feature given each class, `[class][feature]`
        feature_log_prob: Vec<Vec<f64>>,
    },

    /// Linear model (logistic regression, calibrated linear SVM)
    Linear {
        /// Weights, `[class][feature]`; a single row for binary models
        coef: Vec<Vec<f64>>,
        /// Bias per coef row
        intercept: Vec<f64>,
        #[serde(default)]
        multi_class: MultiClassSpec,
    },
}

impl Estimator {
    /// Check the fitted shapes against the class count and feature width
    pub fn validate(&self, n_classes: usize, n_features: usize) -> Result<()> {
        match self {
            Self::MultinomialNb {
                class_log_prior,
                feature_log_prob,
            } => {
                if class_log_prior.len() != n_classes || feature_log_prob.len() != n_classes {
                    return Err(Error::model(format!(
                        "naive Bayes has {} priors and {} feature rows for {n_classes} classes",
                        class_log_prior.len(),
                        feature_log_prob.len()
                    )));
                }
                check_row_widths(feature_log_prob, n_features)
            }
            Self::Linear {
                coef, intercept, ..
            } => {
                let binary = n_classes == 2 && coef.len() == 1;
                if !binary && coef.len() != n_classes {
                    return Err(Error::model(format!(
                        "linear model has {} coef rows for {n_classes} classes",
                        coef.len()
                    )));
                }
                if intercept.len() != coef.len() {
                    return Err(Error::model(format!(
                        "linear model has {} intercepts for {} coef rows",
                        intercept.len(),
                        coef.len()
                    )));
                }
                check_row_widths(coef, n_features)
            }
        }
    }

    /// Class probabilities for a sparse row
    pub fn predict_proba(&self, row: &[(usize, f64)]) -> Vec<f64> {
        match self {
            Self::MultinomialNb {
                class_log_prior,
                feature_log_prob,
            } => {
                let jll: Vec<f64> = class_log_prior
                    .iter()
                    .zip(feature_log_prob)
                    .map(|(prior, weights)| prior + dot(weights, row))
                    .collect();
                softmax(&jll)
            }
            Self::Linear {
                coef,
                intercept,
                multi_class,
            } => {
                let decision: Vec<f64> = coef
                    .iter()
                    .zip(intercept)
                    .map(|(weights, bias)| bias + dot(weights, row))
                    .collect();

                match (decision.as_slice(), multi_class) {
                    ([d], MultiClassSpec::Ovr) => {
                        let p = sigmoid(*d);
                        vec![1.0 - p, p]
                    }
                    ([d], MultiClassSpec::Multinomial) => softmax(&[-d, *d]),
                    (_, MultiClassSpec::Multinomial) => softmax(&decision),
                    // sigmoid(d_c) / sum(sigmoid), normalized in log space so
                    // uniformly tiny sigmoids cannot underflow to 0/0
                    (_, MultiClassSpec::Ovr) => {
                        let log_p: Vec<f64> = decision.iter().map(|&d| log_sigmoid(d)).collect();
                        softmax(&log_p)
                    }
                }
            }
        }
    }

    /// Index of the most probable class (first on ties)
    pub fn predict(&self, row: &[(usize, f64)]) -> Option<usize> {
        argmax(&self.predict_proba(row))
    }
}

fn check_row_widths(rows: &[Vec<f64>], n_features: usize) -> Result<()> {
    match rows.iter().position(|r| r.len() != n_features) {
        Some(i) => Err(Error::model(format!(
            "estimator row {i} has {} weights, vectorizer produces {n_features} features",
            rows[i].len()
        ))),
        None => Ok(()),
    }
}

fn dot(weights: &[f64], row: &[(usize, f64)]) -> f64 {
    row.iter().map(|&(column, x)| weights[column] * x).sum()
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// `ln(sigmoid(x))` without overflow or underflow at either tail
fn log_sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        -(-x).exp().ln_1p()
    } else {
        x - x.exp().ln_1p()
    }
}

/// Numerically stable softmax
pub(crate) fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}
