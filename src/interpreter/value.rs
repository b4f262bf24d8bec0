use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The index form passed into [`U8::get`] and [`U8::set`].
///
/// A single bracketed number (`a[2]`) produces `Single`; a bitwise-or chain
/// in bracket position (`a[1 | 3]`) produces `List`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    /// One 1-based index.
    Single(i64),
    /// An ordered sequence of 1-based indexes.
    List(Vec<i64>),
}

/// The sole runtime value type of the he language.
///
/// A `U8` is either a single number or an array of numbers. Element access
/// is **1-based**: logical index `i` maps to storage offset `i - 1`, and
/// index `0` is reserved as the bulk-update sentinel in assignment position
/// (reading index `0` is an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum U8 {
    /// A single number.
    Scalar(i64),
    /// An ordered sequence of numbers.
    Array(Vec<i64>),
}

impl From<i64> for U8 {
    fn from(value: i64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<i64>> for U8 {
    fn from(values: Vec<i64>) -> Self {
        Self::Array(values)
    }
}

impl U8 {
    /// Creates a zero-filled array value of the given length.
    ///
    /// ## Example
    /// ```
    /// use helang::interpreter::value::U8;
    ///
    /// assert_eq!(U8::zeroed(3), U8::Array(vec![0, 0, 0]));
    /// ```
    #[must_use]
    pub fn zeroed(length: usize) -> Self {
        Self::Array(vec![0; length])
    }

    /// Reads one or more elements out of an array value.
    ///
    /// A `Single` index yields a new `Scalar`; a `List` gathers each mapped
    /// element, in order, into a new `Array`. Scalars have no elements, so
    /// reading from one yields `None` (the caller decides what that means).
    ///
    /// # Parameters
    /// - `index`: The 1-based index or index sequence to read.
    /// - `pos`: Token position for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidIndex` if any index is `0`.
    /// - `RuntimeError::IndexOutOfBounds` if any index is negative or past
    ///   the end of the array.
    pub fn get(&self, index: &Index, pos: usize) -> EvalResult<Option<Self>> {
        let items = match self {
            Self::Scalar(_) => return Ok(None),
            Self::Array(items) => items,
        };

        match index {
            Index::Single(i) => {
                let offset = Self::offset(*i, items.len(), pos)?;
                Ok(Some(Self::Scalar(items[offset])))
            },
            Index::List(list) => {
                let mut gathered = Vec::with_capacity(list.len());
                for &i in list {
                    let offset = Self::offset(i, items.len(), pos)?;
                    gathered.push(items[offset]);
                }
                Ok(Some(Self::Array(gathered)))
            },
        }
    }

    /// Writes a scalar into the value.
    ///
    /// For `Scalar` values the index is ignored and the scalar is replaced
    /// unconditionally; this is the whole-variable assignment path. For
    /// `Array` values, a `Single` index of exactly `0` is the **bulk
    /// update** sentinel and overwrites every element; any other index (or
    /// each index of a `List`) overwrites the corresponding slot.
    ///
    /// # Parameters
    /// - `index`: The 1-based index or index sequence to write.
    /// - `value`: The scalar to store.
    /// - `pos`: Token position for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidIndex` if a `List` contains `0`.
    /// - `RuntimeError::IndexOutOfBounds` if any index is negative or past
    ///   the end of the array.
    pub fn set(&mut self, index: &Index, value: i64, pos: usize) -> EvalResult<()> {
        let items = match self {
            Self::Scalar(_) => {
                *self = Self::Scalar(value);
                return Ok(());
            },
            Self::Array(items) => items,
        };

        match index {
            Index::Single(0) => {
                items.fill(value);
                Ok(())
            },
            Index::Single(i) => {
                let offset = Self::offset(*i, items.len(), pos)?;
                items[offset] = value;
                Ok(())
            },
            Index::List(list) => {
                for &i in list {
                    let offset = Self::offset(i, items.len(), pos)?;
                    items[offset] = value;
                }
                Ok(())
            },
        }
    }

    /// Adds 1 to a scalar, or to every element of an array, in place.
    pub fn increment(&mut self) {
        match self {
            Self::Scalar(n) => *n += 1,
            Self::Array(items) => {
                for n in items {
                    *n += 1;
                }
            },
        }
    }

    /// Subtracts 1 from a scalar, or from every element of an array, in
    /// place.
    pub fn decrement(&mut self) {
        match self {
            Self::Scalar(n) => *n -= 1,
            Self::Array(items) => {
                for n in items {
                    *n -= 1;
                }
            },
        }
    }

    /// Maps a 1-based logical index to a 0-based storage offset.
    ///
    /// Index `0` has no storage slot: it is the bulk-update sentinel, and
    /// reaching this function with it is an element access error.
    #[allow(clippy::cast_sign_loss)]
    fn offset(index: i64, len: usize, pos: usize) -> EvalResult<usize> {
        if index == 0 {
            return Err(RuntimeError::InvalidIndex { pos });
        }
        if index < 0 {
            return Err(RuntimeError::IndexOutOfBounds { max: len,
                                                        found: index,
                                                        pos });
        }

        let offset = (index - 1) as usize;
        if offset >= len {
            return Err(RuntimeError::IndexOutOfBounds { max: len,
                                                        found: index,
                                                        pos });
        }
        Ok(offset)
    }
}

impl std::fmt::Display for U8 {
    /// Formats the value the way `print` shows it: scalars as their decimal
    /// form, arrays as their elements joined with `" | "`.
    ///
    /// ## Example
    /// ```
    /// use helang::interpreter::value::U8;
    ///
    /// assert_eq!(U8::Scalar(7).to_string(), "7");
    /// assert_eq!(U8::Array(vec![1, 2, 3]).to_string(), "1 | 2 | 3");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(n) => write!(f, "{n}"),
            Self::Array(items) => {
                let joined = items.iter()
                                  .map(ToString::to_string)
                                  .collect::<Vec<_>>()
                                  .join(" | ");
                write!(f, "{joined}")
            },
        }
    }
}
