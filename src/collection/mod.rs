//! Collections of records
//!
//! A collection owns an ordered sequence of records. Nested arrays of
//! records are wrapped into child collections on insertion, and an optional
//! schema checks each inserted record's key set.

mod builder;
mod collection;
mod errors;

pub use builder::CollectionBuilder;
pub use collection::Collection;
pub use errors::{BatchFailure, CollectionError, CollectionResult, PartialBuild};
