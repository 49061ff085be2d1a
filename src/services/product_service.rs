//! Product Service - CRUD over the products table
//!
//! Holds one repository handle for the life of the process. Every operation
//! awaits the repository and shapes its result, classifying storage failures
//! into `ProductError`.

use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{DeleteOutcome, LookupTerm, PaginationDto, ProductError, ProductRepository};
use crate::models::{CreateProductInput, Product, UpdateProductInput};

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new product and return it with its generated id
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, ProductError> {
        let record = self.repo.create(input);

        let product = self.repo.save(record).await.map_err(handle_db_error)?;
        tracing::info!("Created product {} ({})", product.id, product.slug);
        Ok(product)
    }

    /// List one page of products in storage order
    pub async fn find_all(&self, pagination: PaginationDto) -> Result<Vec<Product>, ProductError> {
        self.repo
            .find(pagination.limit(), pagination.offset())
            .await
            .map_err(handle_db_error)
    }

    /// Resolve a term as an id, or else as a title/slug
    pub async fn find_one(&self, term: &str) -> Result<Product, ProductError> {
        let found = match LookupTerm::classify(term) {
            LookupTerm::Id(id) => self.repo.find_one_by_id(id).await,
            LookupTerm::Text { title, slug } => {
                self.repo.find_one_by_title_or_slug(&title, &slug).await
            }
        }
        .map_err(handle_db_error)?;

        found.ok_or_else(|| ProductError::not_found("Product not found with that term"))
    }

    /// Merge `changes` onto the stored product and save it
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateProductInput,
    ) -> Result<Product, ProductError> {
        let record = self
            .repo
            .preload(id, changes)
            .await
            .map_err(handle_db_error)?
            .ok_or_else(|| ProductError::not_found("Product not found"))?;

        self.repo.save(record).await.map_err(handle_db_error)
    }

    /// Delete by id. A missing id is not an error; `affected` is then 0.
    pub async fn remove(&self, id: Uuid) -> Result<DeleteOutcome, ProductError> {
        let outcome = self.repo.delete(id).await.map_err(handle_db_error)?;

        if outcome.affected == 0 {
            tracing::debug!("Delete of product {} matched no rows", id);
        }
        Ok(outcome)
    }
}

fn handle_db_error(err: DbErr) -> ProductError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return ProductError::conflict(detail);
    }

    tracing::error!("Product storage error: {:?}", err);
    ProductError::Internal
}
