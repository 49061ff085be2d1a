//! Repository trait definitions
//!
//! The contract the product service needs from storage. Errors are the ORM's
//! own `DbErr` so the service can classify them.

use async_trait::async_trait;
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::product::ActiveModel as ProductRecord;
use crate::models::{CreateProductInput, Product, UpdateProductInput};

/// Result of a delete, as reported by storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeleteOutcome {
    pub affected: u64,
}

/// Repository trait for Product entity
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Build a transient record from input. Nothing is written.
    fn create(&self, input: CreateProductInput) -> ProductRecord;

    /// Persist a record: insert when new, update when preloaded
    async fn save(&self, record: ProductRecord) -> Result<Product, DbErr>;

    /// Fetch `take` records after skipping `skip`, in storage order
    async fn find(&self, take: u64, skip: u64) -> Result<Vec<Product>, DbErr>;

    /// Find a single product by ID
    async fn find_one_by_id(&self, id: Uuid) -> Result<Option<Product>, DbErr>;

    /// First product whose title matches `title` ignoring case, or whose slug equals `slug`
    async fn find_one_by_title_or_slug(
        &self,
        title: &str,
        slug: &str,
    ) -> Result<Option<Product>, DbErr>;

    /// Load the stored record and overlay the provided changes.
    /// Returns `None` when no record has `id`.
    async fn preload(
        &self,
        id: Uuid,
        changes: UpdateProductInput,
    ) -> Result<Option<ProductRecord>, DbErr>;

    /// Delete by ID without checking existence first
    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr>;
}
