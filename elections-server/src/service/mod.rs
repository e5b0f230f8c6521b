//! Division service layer
//!
//! Sits between the HTTP routes and the repository: checks for empty
//! results, maps rows for presentation, stamps new records with ids, and
//! reduces every failure to one uniform error.

pub mod divisions;
pub mod error;
pub mod ids;
pub mod mapper;

pub use divisions::DivisionService;
pub use error::{collapse, DivisionError, Operation, ServiceError, SERVER_ERROR_STATUS};
pub use ids::{IdGenerator, UuidV4Ids};
