//! Per-column standardization
//!
//! `z = (x - mean) / std` with the population standard deviation.
//! Columns with zero variance are divided by 1 so they standardize to 0.

use matsel_core::Vector;

#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vector,
    scale: Vector,
}

impl StandardScaler {
    /// Fit on a non-empty set of equal-width rows
    ///
    /// Returns `None` for an empty input.
    pub fn fit(rows: &[Vector]) -> Option<Self> {
        let first = rows.first()?;
        let dim = first.dim();
        let n = rows.len() as f64;

        let mut mean = Vector::zeros(dim);
        for row in rows {
            for (m, x) in mean.as_mut_slice().iter_mut().zip(row.as_slice()) {
                *m += x;
            }
        }
        mean.as_mut_slice().iter_mut().for_each(|m| *m /= n);

        let mut scale = Vector::zeros(dim);
        for row in rows {
            let centered = row - &mean;
            for (s, d) in scale.as_mut_slice().iter_mut().zip(centered.as_slice()) {
                *s += d * d;
            }
        }
        for s in scale.as_mut_slice() {
            let std = (*s / n).sqrt();
            *s = if std > 0.0 { std } else { 1.0 };
        }

        Some(Self { mean, scale })
    }

    pub fn mean(&self) -> &Vector {
        &self.mean
    }

    pub fn scale(&self) -> &Vector {
        &self.scale
    }

    pub fn dim(&self) -> usize {
        self.mean.dim()
    }

    pub fn transform(&self, row: &Vector) -> Vector {
        let mut centered = row - &self.mean;
        for (x, s) in centered.as_mut_slice().iter_mut().zip(self.scale.as_slice()) {
            *x /= s;
        }
        centered
    }

    pub fn transform_all(&self, rows: &[Vector]) -> Vec<Vector> {
        rows.iter().map(|r| self.transform(r)).collect()
    }
}
