use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::models::CreateProductInput;
use crate::models::product::{self, ActiveModel};

fn demo_products() -> Vec<CreateProductInput> {
    vec![
        CreateProductInput {
            title: "Men's Chill Crew Neck Sweatshirt".to_owned(),
            price: Some(75.0),
            description: Some("Premium heavyweight cotton with a relaxed fit.".to_owned()),
            stock: Some(7),
            sizes: vec!["XS".to_owned(), "S".to_owned(), "M".to_owned(), "L".to_owned()],
            gender: "men".to_owned(),
            tags: vec!["sweatshirt".to_owned()],
            ..Default::default()
        },
        CreateProductInput {
            title: "Women's Cropped Puffer Jacket".to_owned(),
            price: Some(225.0),
            description: Some("Boxy cropped puffer with a water-repellent shell.".to_owned()),
            stock: Some(85),
            sizes: vec!["XS".to_owned(), "S".to_owned(), "M".to_owned()],
            gender: "women".to_owned(),
            tags: vec!["jacket".to_owned()],
            ..Default::default()
        },
        CreateProductInput {
            title: "Kids Cybertruck Long Sleeve Tee".to_owned(),
            price: Some(30.0),
            description: None,
            stock: Some(10),
            sizes: vec!["XS".to_owned(), "S".to_owned(), "M".to_owned()],
            gender: "kid".to_owned(),
            tags: vec!["shirt".to_owned()],
            ..Default::default()
        },
    ]
}

/// Insert demo products, leaving rows whose slug already exists alone
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<u64, DbErr> {
    let mut inserted = 0;

    for input in demo_products() {
        // Insert::exec skips the save hook, so run it explicitly
        let record = ActiveModel::from(input).before_save(db, true).await?;

        let result = product::Entity::insert(record)
            .on_conflict(
                OnConflict::column(product::Column::Slug)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
        inserted += result;
    }

    tracing::info!("Seeded {} demo products", inserted);
    Ok(inserted)
}
