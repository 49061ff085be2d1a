//! Domain layer - Business abstractions
//!
//! Trait definitions, value objects and the error type the service speaks.
//! Implementations live in the infrastructure layer.

pub mod errors;
pub mod lookup;
pub mod pagination;
pub mod repositories;

pub use errors::ProductError;
pub use lookup::LookupTerm;
pub use pagination::PaginationDto;
pub use repositories::*;
