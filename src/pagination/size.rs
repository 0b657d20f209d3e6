//! Chunk size coercion
//!
//! Page sizes arrive as integers, numeric strings, or JSON values. Anything
//! that does not resolve to a positive integer falls back to
//! `DEFAULT_CHUNK_SIZE`.

use serde_json::Value;

/// Items per page when the requested size is unusable
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Conversion into a positive chunk size.
pub trait IntoChunkSize {
    fn into_chunk_size(self) -> usize;
}

/// Parses a chunk size from text.
///
/// Integers are accepted as-is, finite decimals are truncated
/// (`"2.9"` → 2). Empty, non-numeric, or non-positive input yields
/// `DEFAULT_CHUNK_SIZE`.
pub fn parse_chunk_size(input: &str) -> usize {
    let trimmed = input.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        return from_signed(n);
    }

    match trimmed.parse::<f64>() {
        Ok(f) => from_float(f),
        Err(_) => DEFAULT_CHUNK_SIZE,
    }
}

fn from_signed(n: i64) -> usize {
    if n <= 0 {
        return DEFAULT_CHUNK_SIZE;
    }
    usize::try_from(n).unwrap_or(DEFAULT_CHUNK_SIZE)
}

fn from_unsigned(n: u64) -> usize {
    if n == 0 {
        return DEFAULT_CHUNK_SIZE;
    }
    usize::try_from(n).unwrap_or(DEFAULT_CHUNK_SIZE)
}

fn from_float(f: f64) -> usize {
    let truncated = f.trunc();
    if !truncated.is_finite() || truncated < 1.0 || truncated > usize::MAX as f64 {
        return DEFAULT_CHUNK_SIZE;
    }
    truncated as usize
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(impl IntoChunkSize for $t {
            fn into_chunk_size(self) -> usize {
                from_signed(i64::from(self))
            }
        })*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(impl IntoChunkSize for $t {
            fn into_chunk_size(self) -> usize {
                from_unsigned(u64::from(self))
            }
        })*
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl IntoChunkSize for isize {
    fn into_chunk_size(self) -> usize {
        i64::try_from(self).map_or(DEFAULT_CHUNK_SIZE, from_signed)
    }
}

impl IntoChunkSize for usize {
    fn into_chunk_size(self) -> usize {
        if self == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            self
        }
    }
}

impl IntoChunkSize for f64 {
    fn into_chunk_size(self) -> usize {
        from_float(self)
    }
}

impl IntoChunkSize for &str {
    fn into_chunk_size(self) -> usize {
        parse_chunk_size(self)
    }
}

impl IntoChunkSize for String {
    fn into_chunk_size(self) -> usize {
        parse_chunk_size(&self)
    }
}

impl IntoChunkSize for &String {
    fn into_chunk_size(self) -> usize {
        parse_chunk_size(self)
    }
}

impl IntoChunkSize for &Value {
    fn into_chunk_size(self) -> usize {
        match self {
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => from_signed(i),
                (None, Some(u), _) => from_unsigned(u),
                (None, None, Some(f)) => from_float(f),
                _ => DEFAULT_CHUNK_SIZE,
            },
            Value::String(s) => parse_chunk_size(s),
            _ => DEFAULT_CHUNK_SIZE,
        }
    }
}

impl IntoChunkSize for Value {
    fn into_chunk_size(self) -> usize {
        (&self).into_chunk_size()
    }
}

impl<T: IntoChunkSize> IntoChunkSize for Option<T> {
    fn into_chunk_size(self) -> usize {
        self.map_or(DEFAULT_CHUNK_SIZE, IntoChunkSize::into_chunk_size)
    }
}
