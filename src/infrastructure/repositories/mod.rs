//! Repository implementations using SeaORM

pub mod product_repository;

pub use product_repository::SeaOrmProductRepository;
