//! Product entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `products` table. Serialized in camelCase, like
/// the page metadata it is listed with.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    /// `false` once the product has been soft-deleted.
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product. New products are always available.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

/// DTO for patching an existing product. All fields are optional.
///
/// Clients may echo the product `id` back in the body. It is accepted on the
/// wire but never written; see [`UpdateProduct::without_id`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl UpdateProduct {
    /// Drop any client-supplied `id` so it cannot be confused with patch data.
    pub fn without_id(self) -> Self {
        Self { id: None, ..self }
    }

    /// `true` when the patch carries no field to apply.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_id_keeps_patch_fields() {
        let patch = UpdateProduct {
            id: Some(99),
            name: Some("Gadget".into()),
            price: Some(2.5),
        }
        .without_id();

        assert_eq!(patch.id, None);
        assert_eq!(patch.name.as_deref(), Some("Gadget"));
        assert_eq!(patch.price, Some(2.5));
    }

    #[test]
    fn id_only_patch_is_empty() {
        let patch = UpdateProduct {
            id: Some(1),
            ..Default::default()
        };
        assert!(patch.is_empty());
    }
}
