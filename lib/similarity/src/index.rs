//! Standardized nearest-neighbor index
//!
//! Brute-force Euclidean search over standardized material rows. The
//! catalog is small and fixed, so every query scans all rows.

use crate::features::FeatureExtractor;
use crate::scaler::StandardScaler;
use ahash::AHashMap;
use matsel_core::{Error, Material, Result, Vector};
use ordered_float::OrderedFloat;

/// Nearest-neighbor structure over a frozen catalog
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    extractor: FeatureExtractor,
    scaler: StandardScaler,
    ids: Vec<u32>,
    rows: Vec<Vector>,
    positions: AHashMap<u32, usize>,
}

impl SimilarityIndex {
    /// Extract, fit and standardize the catalog once
    ///
    /// Material IDs must be unique.
    pub fn build(materials: &[Material]) -> Result<Self> {
        let mut positions = AHashMap::with_capacity(materials.len());
        for (i, material) in materials.iter().enumerate() {
            if positions.insert(material.id, i).is_some() {
                return Err(Error::invalid_argument(format!(
                    "duplicate material id {}",
                    material.id
                )));
            }
        }

        let extractor = FeatureExtractor::fit(materials);
        let raw = extractor.materials_to_feature_matrix(materials);
        let scaler = StandardScaler::fit(&raw).ok_or_else(|| {
            Error::invalid_argument("cannot build a similarity index over an empty catalog")
        })?;
        let rows = scaler.transform_all(&raw);

        let ids: Vec<u32> = materials.iter().map(|m| m.id).collect();

        tracing::debug!(
            materials = ids.len(),
            dim = extractor.dim(),
            "built similarity index"
        );

        Ok(Self {
            extractor,
            scaler,
            ids,
            rows,
            positions,
        })
    }

    /// The `k` closest materials to `material_id`, closest first
    pub fn nearest(&self, material_id: u32, k: usize) -> Result<Vec<u32>> {
        Ok(self
            .nearest_with_distances(material_id, k)?
            .into_iter()
            .map(|(id, _)| id)
            .collect())
    }

    /// Like [`nearest`](Self::nearest), with the standardized distance of each hit
    ///
    /// Equal distances order by ascending material ID.
    pub fn nearest_with_distances(&self, material_id: u32, k: usize) -> Result<Vec<(u32, f64)>> {
        if k == 0 {
            return Err(Error::invalid_argument("k must be at least 1"));
        }
        let &query_pos = self
            .positions
            .get(&material_id)
            .ok_or(Error::MaterialNotFound(material_id))?;
        let query = &self.rows[query_pos];

        let mut hits: Vec<(OrderedFloat<f64>, u32)> = self
            .rows
            .iter()
            .zip(&self.ids)
            .enumerate()
            .filter(|(pos, _)| *pos != query_pos)
            .map(|(_, (row, id))| (OrderedFloat(query.l2_distance(row)), *id))
            .collect();

        hits.sort_unstable();
        hits.truncate(k);

        Ok(hits.into_iter().map(|(d, id)| (id, d.into_inner())).collect())
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Standardized row of an indexed material
    pub fn standardized_row(&self, material_id: u32) -> Option<&Vector> {
        self.positions.get(&material_id).map(|&pos| &self.rows[pos])
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
