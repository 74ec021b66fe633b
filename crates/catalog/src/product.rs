//! Product entity and partial-update semantics.

use serde::{Deserialize, Deserializer, Serialize};

use ordena_core::ProductId;

/// A catalog product.
///
/// Price changes never retroactively alter historical orders; orders capture
/// the unit price at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: f64,
    /// Lid/cap attributes: whether the product takes a lid, and which kind.
    #[serde(default)]
    pub has_lid: Option<bool>,
    #[serde(default)]
    pub lid_type: Option<String>,
}

/// Partial update for a product. Absent fields preserve the prior value;
/// explicit `null` clears the nullable attributes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub image: Option<Option<String>>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub has_lid: Option<Option<bool>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub lid_type: Option<Option<String>>,
}

impl ProductUpdate {
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(has_lid) = self.has_lid {
            product.has_lid = has_lid;
        }
        if let Some(lid_type) = self.lid_type {
            product.lid_type = lid_type;
        }
    }
}

fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
