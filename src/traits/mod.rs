//! Trait definitions for TonicPow operations.
//!
//! Each entity type implements the traits its endpoints support; every
//! implementation is a thin call into [`TonicPowClient::request`](crate::TonicPowClient::request).

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::{List, DEFAULT_PAGE_SIZE};
pub use update::Update;
