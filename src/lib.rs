//! recordset - in-memory ordered record collections
//!
//! Holds arrays of plain JSON records, optionally enforcing a required-key
//! schema on insertion, and pages through them with a clamped cursor.
//!
//! - [`Collection`]: ordered records; nested arrays of records become child
//!   collections
//! - [`Schema`]: required keys plus a strict flag
//! - [`PaginatedCollection`]: chunked view with `current/next/previous/last`
//!
//! ```
//! use recordset::{Collection, PaginatedCollection};
//! use serde_json::json;
//!
//! let mut family = Collection::from_json(json!([
//!     {"forename": "Mary", "surname": "Lamb"},
//!     {"forename": "Lucy", "surname": "Lamb"},
//! ]))?;
//! family.schema(["forename", "surname"]);
//! family.add_item(json!({"forename": "Steven", "surname": "Lamb"}))?;
//!
//! let mut pages = PaginatedCollection::from_collection(family, 2);
//! assert_eq!(pages.next().all().len(), 1);
//! # Ok::<(), recordset::CollectionError>(())
//! ```

pub mod cli;
pub mod collection;
pub mod config;
pub mod observability;
pub mod pagination;
pub mod record;
pub mod schema;

pub use collection::{
    BatchFailure, Collection, CollectionBuilder, CollectionError, CollectionResult, PartialBuild,
};
pub use config::CollectionConfig;
pub use pagination::{Pages, PaginatedCollection, DEFAULT_CHUNK_SIZE};
pub use record::{FieldValue, Record};
pub use schema::{Schema, SchemaError};
