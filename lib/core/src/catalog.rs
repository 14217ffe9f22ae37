use crate::{Application, Error, Material, Result, Supplier};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Frozen table of materials and their suppliers
///
/// Material order is preserved exactly as loaded; ranking ties fall back
/// to this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogData", into = "CatalogData")]
pub struct Catalog {
    materials: Vec<Material>,
    suppliers: Vec<Supplier>,
    material_index: AHashMap<u32, usize>,
    supplier_index: AHashMap<String, usize>,
}

/// Serialized form of a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub materials: Vec<Material>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

impl Catalog {
    /// Build a catalog, validating every record
    pub fn new(materials: Vec<Material>, suppliers: Vec<Supplier>) -> Result<Self> {
        if materials.is_empty() {
            return Err(Error::InvalidCatalog("catalog must contain at least one material".into()));
        }

        let mut supplier_index = AHashMap::with_capacity(suppliers.len());
        for (pos, supplier) in suppliers.iter().enumerate() {
            supplier.validate()?;
            if supplier_index.insert(supplier.supplier_id.clone(), pos).is_some() {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate supplier id {}",
                    supplier.supplier_id
                )));
            }
        }

        let mut material_index = AHashMap::with_capacity(materials.len());
        for (pos, material) in materials.iter().enumerate() {
            material.validate()?;
            if material_index.insert(material.id, pos).is_some() {
                return Err(Error::InvalidCatalog(format!("duplicate material id {}", material.id)));
            }
            // An empty supplier table means suppliers are not tracked at all
            if !suppliers.is_empty() && !supplier_index.contains_key(&material.supplier_id) {
                return Err(Error::InvalidCatalog(format!(
                    "material {} references unknown supplier {}",
                    material.id, material.supplier_id
                )));
            }
        }

        Ok(Self {
            materials,
            suppliers,
            material_index,
            supplier_index,
        })
    }

    /// Parse and validate a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data.materials, data.suppliers)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Look up a material by id
    pub fn material(&self, id: u32) -> Result<&Material> {
        self.position(id)
            .map(|pos| &self.materials[pos])
            .ok_or(Error::MaterialNotFound(id))
    }

    /// Row position of a material in catalog order
    pub fn position(&self, id: u32) -> Option<usize> {
        self.material_index.get(&id).copied()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.material_index.contains_key(&id)
    }

    /// Look up a supplier by id
    pub fn supplier(&self, supplier_id: &str) -> Result<&Supplier> {
        self.supplier_index
            .get(supplier_id)
            .map(|pos| &self.suppliers[*pos])
            .ok_or_else(|| Error::SupplierNotFound(supplier_id.to_string()))
    }

    /// The supplier of a material, if suppliers are tracked
    pub fn supplier_for(&self, material: &Material) -> Option<&Supplier> {
        self.supplier(&material.supplier_id).ok()
    }

    /// Materials that list the given application, in catalog order
    pub fn filter_by_application(&self, application: Application) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| m.supports(application))
            .collect()
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = Error;

    fn try_from(data: CatalogData) -> Result<Self> {
        Catalog::new(data.materials, data.suppliers)
    }
}

impl From<Catalog> for CatalogData {
    fn from(catalog: Catalog) -> Self {
        CatalogData {
            materials: catalog.materials,
            suppliers: catalog.suppliers,
        }
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.materials == other.materials && self.suppliers == other.suppliers
    }
}
