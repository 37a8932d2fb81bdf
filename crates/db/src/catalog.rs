//! Catalog service: product lifecycle under a configured [`CatalogPolicy`].
//!
//! The service owns a pool handle and a policy pair. Every operation that
//! targets a single product first resolves it through [`CatalogService::get_by_id`],
//! so a product hidden by the visibility policy can be neither updated nor
//! removed.
//!
//! The existence check and the following mutation run as separate statements
//! with no transaction around them. A product removed by another request in
//! between surfaces as [`CoreError::NotFound`] from the mutation itself.

use catalog_core::error::CoreError;
use catalog_core::pagination::{PageMeta, Paginated, Pagination};
use catalog_core::policy::{CatalogPolicy, DeletionPolicy};
use catalog_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::repositories::ProductRepo;
use crate::DbPool;

/// Entity name used in not-found errors.
const ENTITY: &str = "Product";

/// Errors returned by [`CatalogService`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A domain-level error (currently only not-found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A datastore failure, propagated unmodified.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn not_found(id: DbId) -> CatalogError {
    CatalogError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Product catalog operations bound to a pool and a lifecycle policy.
///
/// Cheaply cloneable; the pool is reference-counted internally.
#[derive(Debug, Clone)]
pub struct CatalogService {
    pool: DbPool,
    policy: CatalogPolicy,
}

impl CatalogService {
    pub fn new(pool: DbPool, policy: CatalogPolicy) -> Self {
        Self { pool, policy }
    }

    pub fn policy(&self) -> CatalogPolicy {
        self.policy
    }

    /// Insert a new product. The row starts out available.
    pub async fn create(&self, input: &CreateProduct) -> Result<Product, CatalogError> {
        let product = ProductRepo::create(&self.pool, input).await?;
        tracing::info!(product_id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Return one window of visible products plus pagination metadata.
    ///
    /// The count and the page are read by separate queries, so `meta.total`
    /// may disagree with `data` under concurrent writes.
    pub async fn list(&self, pagination: &Pagination) -> Result<Paginated<Product>, CatalogError> {
        let visibility = self.policy.visibility;
        let total = ProductRepo::count(&self.pool, visibility).await?;
        let data = ProductRepo::list_page(
            &self.pool,
            visibility,
            pagination.skip(),
            pagination.take(),
        )
        .await?;

        tracing::debug!(
            total,
            returned = data.len(),
            page = ?pagination.page,
            limit = ?pagination.limit,
            "Listed products"
        );

        Ok(Paginated {
            data,
            meta: PageMeta::new(total, pagination),
        })
    }

    /// Fetch a visible product or fail with not-found.
    pub async fn get_by_id(&self, id: DbId) -> Result<Product, CatalogError> {
        ProductRepo::find_by_id(&self.pool, id, self.policy.visibility)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetch a product regardless of visibility.
    pub async fn find_by_id_unfiltered(&self, id: DbId) -> Result<Option<Product>, CatalogError> {
        Ok(ProductRepo::find_by_id_include_unavailable(&self.pool, id).await?)
    }

    /// Apply `patch` to a visible product and return the updated row.
    ///
    /// Any `id` in the patch is discarded; the target is always `id`.
    pub async fn update(&self, id: DbId, patch: UpdateProduct) -> Result<Product, CatalogError> {
        let current = self.get_by_id(id).await?;

        let patch = patch.without_id();
        if patch.is_empty() {
            return Ok(current);
        }

        let product = ProductRepo::update(&self.pool, id, &patch)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(product_id = id, "Product updated");
        Ok(product)
    }

    /// Remove a visible product according to the deletion policy.
    ///
    /// Soft deletion returns the now-unavailable row; hard deletion returns the
    /// row as it was before removal.
    pub async fn remove(&self, id: DbId) -> Result<Product, CatalogError> {
        self.get_by_id(id).await?;

        let deletion = self.policy.deletion;
        let removed = match deletion {
            DeletionPolicy::Soft => ProductRepo::deactivate(&self.pool, id).await?,
            DeletionPolicy::Hard => ProductRepo::hard_delete(&self.pool, id).await?,
        }
        .ok_or_else(|| not_found(id))?;

        tracing::info!(product_id = id, deletion = deletion.as_str(), "Product removed");
        Ok(removed)
    }
}
