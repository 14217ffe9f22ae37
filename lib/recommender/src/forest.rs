//! Bagged regression-tree forest
//!
//! Each tree is a CART regressor fitted on a bootstrap sample, splitting
//! on the threshold that minimizes the summed squared error of the two
//! children. Prediction is the mean over trees. Trees are fitted in
//! parallel; tree `i` draws its bootstrap from a generator seeded with
//! `seed + i`, so the result does not depend on scheduling.

use crate::config::ForestConfig;
use crate::error::TrainingError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

struct Split {
    feature: usize,
    threshold: f64,
    sse: f64,
}

/// A single regression tree stored as a node arena, root at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    fn fit(rows: &[Vec<f64>], targets: &[f64], samples: Vec<usize>, config: &ForestConfig) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.grow(rows, targets, samples, 0, config);
        tree
    }

    fn grow(
        &mut self,
        rows: &[Vec<f64>],
        targets: &[f64],
        samples: Vec<usize>,
        depth: usize,
        config: &ForestConfig,
    ) -> usize {
        let mean = samples.iter().map(|&i| targets[i]).sum::<f64>() / samples.len() as f64;
        let node = self.nodes.len();
        self.nodes.push(Node::Leaf { value: mean });

        if depth >= config.max_depth || samples.len() < config.min_samples_split {
            return node;
        }
        let Some(split) = best_split(rows, targets, &samples) else {
            return node;
        };

        let (left, right): (Vec<usize>, Vec<usize>) = samples
            .into_iter()
            .partition(|&i| rows[i][split.feature] <= split.threshold);

        let left = self.grow(rows, targets, left, depth + 1, config);
        let right = self.grow(rows, targets, right, depth + 1, config);
        self.nodes[node] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        node
    }

    pub fn predict(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        fn depth_of(nodes: &[Node], idx: usize) -> usize {
            match nodes[idx] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + depth_of(nodes, left).max(depth_of(nodes, right)),
            }
        }
        depth_of(&self.nodes, 0)
    }
}

/// Lowest-SSE split over all features, if any split improves on the parent
fn best_split(rows: &[Vec<f64>], targets: &[f64], samples: &[usize]) -> Option<Split> {
    let n = samples.len();
    let total_sum: f64 = samples.iter().map(|&i| targets[i]).sum();
    let total_sq: f64 = samples.iter().map(|&i| targets[i] * targets[i]).sum();
    let parent_sse = total_sq - total_sum * total_sum / n as f64;
    if parent_sse <= 1e-12 {
        return None;
    }

    let dim = rows[samples[0]].len();
    let mut order = samples.to_vec();
    let mut best: Option<Split> = None;

    for feature in 0..dim {
        order.sort_by(|&a, &b| rows[a][feature].total_cmp(&rows[b][feature]));

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;
        for pos in 0..n - 1 {
            let i = order[pos];
            left_sum += targets[i];
            left_sq += targets[i] * targets[i];

            let here = rows[i][feature];
            let next = rows[order[pos + 1]][feature];
            if here >= next {
                continue;
            }

            let n_left = (pos + 1) as f64;
            let n_right = (n - pos - 1) as f64;
            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let sse = (left_sq - left_sum * left_sum / n_left)
                + (right_sq - right_sum * right_sum / n_right);

            if best.as_ref().map_or(true, |b| sse < b.sse - 1e-12) {
                best = Some(Split {
                    feature,
                    threshold: here + (next - here) / 2.0,
                    sse,
                });
            }
        }
    }

    best.filter(|b| b.sse < parent_sse - 1e-12)
}

/// Seeded random-forest regressor over dense feature rows
#[derive(Debug, Clone, PartialEq)]
pub struct RatingForest {
    trees: Vec<RegressionTree>,
    n_features: usize,
}

impl RatingForest {
    pub fn fit(
        rows: &[Vec<f64>],
        targets: &[f64],
        config: &ForestConfig,
    ) -> Result<Self, TrainingError> {
        if rows.len() != targets.len() {
            return Err(TrainingError::ShapeMismatch {
                rows: rows.len(),
                targets: targets.len(),
            });
        }
        if rows.is_empty() {
            return Err(TrainingError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        config
            .validate()
            .map_err(|e| TrainingError::InvalidConfig(e.to_string()))?;

        let n_features = rows[0].len();
        if let Some(row) = rows.iter().find(|r| r.len() != n_features) {
            return Err(TrainingError::InvalidConfig(format!(
                "feature rows differ in width: {} and {}",
                n_features,
                row.len()
            )));
        }

        let n = rows.len();
        let trees = (0..config.n_trees)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
                RegressionTree::fit(rows, targets, bootstrap, config)
            })
            .collect();

        Ok(Self { trees, n_features })
    }

    /// Mean prediction over all trees
    pub fn predict(&self, row: &[f64]) -> f64 {
        self.trees.iter().map(|t| t.predict(row)).sum::<f64>() / self.trees.len() as f64
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }
}
