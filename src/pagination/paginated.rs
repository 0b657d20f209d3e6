//! Chunked view over a collection with a page cursor

use serde_json::{Map, Value};

use crate::collection::{Collection, CollectionResult};
use crate::record::Record;

use super::pages::Pages;
use super::size::IntoChunkSize;

/// A collection split into pages of `chunk_size` records.
///
/// `all()` returns only the records of the current page. The cursor is
/// reset by `paginate`, moved by `page`, `next` and `previous`, and kept in
/// bounds when records are added.
///
/// ```
/// use recordset::PaginatedCollection;
/// use serde_json::json;
///
/// let mut people = PaginatedCollection::from_json(
///     json!([{"n": 1}, {"n": 2}, {"n": 3}, {"n": 4}]),
///     "2",
/// )?;
///
/// assert_eq!(people.page(2).all().len(), 2);
/// assert_eq!(people.pages().previous(), 1);
/// # Ok::<(), recordset::CollectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCollection {
    collection: Collection,
    chunk_size: usize,
    pages: Pages,
}

impl PaginatedCollection {
    /// Paginates plain records.
    pub fn new<I, S>(records: I, chunk_size: S) -> Self
    where
        I: IntoIterator<Item = Map<String, Value>>,
        S: IntoChunkSize,
    {
        Self::from_collection(Collection::from_records(records), chunk_size)
    }

    /// Paginates a JSON array of objects.
    pub fn from_json<S: IntoChunkSize>(value: Value, chunk_size: S) -> CollectionResult<Self> {
        Ok(Self::from_collection(Collection::from_json(value)?, chunk_size))
    }

    /// Paginates an existing collection, keeping its schema and sink.
    pub fn from_collection<S: IntoChunkSize>(collection: Collection, chunk_size: S) -> Self {
        let chunk_size = chunk_size.into_chunk_size();
        let pages = Pages::new(collection.len(), chunk_size);

        Self {
            collection,
            chunk_size,
            pages,
        }
    }

    /// Re-chunks with a new size and returns to page 1.
    pub fn paginate<S: IntoChunkSize>(&mut self, chunk_size: S) -> &mut Self {
        self.chunk_size = chunk_size.into_chunk_size();
        self.pages = Pages::new(self.collection.len(), self.chunk_size);
        self
    }

    /// Moves to page `n`, clamped into `[1, last]`.
    pub fn page(&mut self, n: i64) -> &mut Self {
        self.pages.goto(n);
        self
    }

    /// Moves to the next page, staying on the last one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &mut Self {
        self.pages.advance();
        self
    }

    /// Moves to the previous page, staying on the first one.
    pub fn previous(&mut self) -> &mut Self {
        self.pages.retreat();
        self
    }

    /// Records on the current page.
    pub fn all(&self) -> &[Record] {
        let records = self.collection.all();
        &records[self.pages.range(self.chunk_size, records.len())]
    }

    /// Every chunk in page order. An empty collection has one empty chunk.
    pub fn chunks(&self) -> Vec<&[Record]> {
        let records = self.collection.all();
        if records.is_empty() {
            return vec![records];
        }
        records.chunks(self.chunk_size).collect()
    }

    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Record at zero-based `index` of the full sequence.
    pub fn get(&self, index: usize) -> CollectionResult<&Record> {
        self.collection.get(index)
    }

    /// Total number of records across all pages
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Inserts a record or batch, then recomputes the page count.
    ///
    /// Records accepted from a partially rejected batch stay inserted and are
    /// counted before the error is returned.
    pub fn add_item(&mut self, item: Value) -> CollectionResult<&mut Self> {
        let result = self.collection.add_item(item).map(|_| ());
        self.pages.resize(self.collection.len(), self.chunk_size);
        result?;
        Ok(self)
    }

    /// Binds a non-strict schema on the underlying collection.
    pub fn schema<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collection.schema(fields);
        self
    }

    /// Binds a strict schema on the underlying collection.
    pub fn strict_schema<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collection.strict_schema(fields);
        self
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn into_inner(self) -> Collection {
        self.collection
    }
}
