//! Schema binding and validation for collections
//!
//! A schema is a required-key set plus a strictness flag. It checks key
//! *presence* only; value types are never inspected.
//!
//! - Non-strict: each missing key produces one warning, the record is kept
//! - Strict: the sorted key sets must be equal, otherwise the record is
//!   rejected with `SchemaError::Mismatch`
//! - Validation happens at insertion time and never retroactively

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use types::Schema;
pub use validator::{missing_key_message, SchemaValidator};
