//! Pagination over collections
//!
//! Splits a collection's records into fixed-size chunks addressed by
//! 1-based page numbers, with a cursor that never leaves `[1, last]`.

mod pages;
mod paginated;
mod size;

pub use pages::Pages;
pub use paginated::PaginatedCollection;
pub use size::{parse_chunk_size, IntoChunkSize, DEFAULT_CHUNK_SIZE};
