pub mod product;

pub use product::{CreateProductInput, Product, UpdateProductInput};
