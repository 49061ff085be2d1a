//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::domain::{DeleteOutcome, ProductRepository};
use crate::models::product::{ActiveModel, Column, Entity as ProductEntity};
use crate::models::{CreateProductInput, Product, UpdateProductInput};

/// SeaORM-based implementation of ProductRepository
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    fn create(&self, input: CreateProductInput) -> ActiveModel {
        ActiveModel::from(input)
    }

    async fn save(&self, record: ActiveModel) -> Result<Product, DbErr> {
        // NotSet id means a fresh record; the entity hook assigns one on insert
        let model = if record.id.is_set() || record.id.is_unchanged() {
            record.update(&self.db).await?
        } else {
            record.insert(&self.db).await?
        };
        Ok(Product::from(model))
    }

    async fn find(&self, take: u64, skip: u64) -> Result<Vec<Product>, DbErr> {
        let products = ProductEntity::find()
            .offset(skip)
            .limit(take)
            .all(&self.db)
            .await?;

        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn find_one_by_id(&self, id: Uuid) -> Result<Option<Product>, DbErr> {
        let product = ProductEntity::find_by_id(id).one(&self.db).await?;
        Ok(product.map(Product::from))
    }

    async fn find_one_by_title_or_slug(
        &self,
        title: &str,
        slug: &str,
    ) -> Result<Option<Product>, DbErr> {
        let cond = Condition::any()
            .add(
                Expr::expr(Func::upper(Expr::col(Column::Title)))
                    .eq(Func::upper(Expr::val(title))),
            )
            .add(Column::Slug.eq(slug));

        let product = ProductEntity::find().filter(cond).one(&self.db).await?;
        Ok(product.map(Product::from))
    }

    async fn preload(
        &self,
        id: Uuid,
        changes: UpdateProductInput,
    ) -> Result<Option<ActiveModel>, DbErr> {
        let Some(existing) = ProductEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        changes.apply_to(&mut active);
        Ok(Some(active))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr> {
        let result = ProductEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(DeleteOutcome {
            affected: result.rows_affected,
        })
    }
}
