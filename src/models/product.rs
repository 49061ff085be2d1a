use async_trait::async_trait;
use sea_orm::ActiveValue;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub price: f64,
    pub description: Option<String>,
    pub stock: i32,
    pub sizes: String, // JSON array
    pub gender: String,
    pub tags: String, // JSON array
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut this = self;
        let now = chrono::Utc::now().to_rfc3339();

        if insert {
            if matches!(this.id, ActiveValue::NotSet) {
                this.id = Set(Uuid::new_v4());
            }
            this.created_at = Set(now.clone());
        }
        this.updated_at = Set(now);

        // Only touch the slug when the caller is writing it (or on insert without one)
        let slug = match (&this.slug, &this.title) {
            (ActiveValue::Set(slug), _) => Some(normalize_slug(slug)),
            (ActiveValue::NotSet, ActiveValue::Set(title)) if insert => Some(normalize_slug(title)),
            _ => None,
        };
        if let Some(slug) = slug {
            this.slug = Set(slug);
        }

        Ok(this)
    }
}

/// Lower-case, spaces to underscores, apostrophes dropped.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('\'', "")
}

fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub price: f64,
    pub description: Option<String>,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            price: model.price,
            description: model.description,
            stock: model.stock,
            sizes: decode_list(&model.sizes),
            gender: model.gender,
            tags: decode_list(&model.tags),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Writable fields accepted when creating a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProductInput {
    pub title: String,
    /// Stored normalized (lower-case, `_` for spaces, no apostrophes);
    /// derived from the title when omitted.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateProductInput> for ActiveModel {
    fn from(input: CreateProductInput) -> Self {
        Self {
            title: Set(input.title),
            slug: input.slug.map_or(ActiveValue::NotSet, Set),
            price: Set(input.price.unwrap_or(0.0)),
            description: Set(input.description),
            stock: Set(input.stock.unwrap_or(0)),
            sizes: Set(encode_list(&input.sizes)),
            gender: Set(input.gender),
            tags: Set(encode_list(&input.tags)),
            ..Default::default()
        }
    }
}

/// Partial payload for updates. Omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductInput {
    pub title: Option<String>,
    /// Normalized on save, like `CreateProductInput::slug`
    pub slug: Option<String>,
    pub price: Option<f64>,
    /// `null` clears the stored description
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<String>,
    pub tags: Option<Vec<String>>,
}

// Tells an explicit `null` (Some(None)) apart from a missing field (None)
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateProductInput {
    /// Overlay the provided fields onto an existing record.
    pub fn apply_to(self, active: &mut ActiveModel) {
        if let Some(title) = self.title {
            active.title = Set(title);
        }
        if let Some(slug) = self.slug {
            active.slug = Set(slug);
        }
        if let Some(price) = self.price {
            active.price = Set(price);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(stock) = self.stock {
            active.stock = Set(stock);
        }
        if let Some(sizes) = self.sizes {
            active.sizes = Set(encode_list(&sizes));
        }
        if let Some(gender) = self.gender {
            active.gender = Set(gender);
        }
        if let Some(tags) = self.tags {
            active.tags = Set(encode_list(&tags));
        }
    }
}
