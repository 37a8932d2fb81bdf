//! Repository for the `products` table.

use catalog_core::policy::VisibilityPolicy;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, available, created_at, updated_at";

/// Extra predicate appended after `WHERE ...` for the given visibility.
fn visibility_filter(visibility: VisibilityPolicy) -> &'static str {
    if visibility.hides_unavailable() {
        " AND available = true"
    } else {
        ""
    }
}

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row. `available` defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, price)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID, restricted to rows visible under `visibility`.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        visibility: VisibilityPolicy,
    ) -> Result<Option<Product>, sqlx::Error> {
        let filter = visibility_filter(visibility);
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1{filter}");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by ID, including unavailable rows.
    pub async fn find_by_id_include_unavailable(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        Self::find_by_id(pool, id, VisibilityPolicy::All).await
    }

    /// Count products visible under `visibility`.
    pub async fn count(pool: &PgPool, visibility: VisibilityPolicy) -> Result<i64, sqlx::Error> {
        let filter = visibility_filter(visibility);
        let query = format!("SELECT COUNT(*) FROM products WHERE true{filter}");
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// List one window of visible products ordered by ID.
    ///
    /// `take = None` returns every row after `skip` (`LIMIT NULL`).
    pub async fn list_page(
        pool: &PgPool,
        visibility: VisibilityPolicy,
        skip: i64,
        take: Option<i64>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let filter = visibility_filter(visibility);
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE true{filter}
             ORDER BY id ASC
             OFFSET $1 LIMIT $2"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(skip)
            .bind(take)
            .fetch_all(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied; `input.id`
    /// is never written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Mark a product unavailable, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET available = false
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a product, returning the row as it was.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("DELETE FROM products WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_only_adds_filter() {
        assert_eq!(
            visibility_filter(VisibilityPolicy::AvailableOnly),
            " AND available = true"
        );
    }

    #[test]
    fn all_adds_nothing() {
        assert_eq!(visibility_filter(VisibilityPolicy::All), "");
    }
}
