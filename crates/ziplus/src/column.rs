use crate::value::Value;
use std::{fmt, iter};

///
/// Column
///
/// One input sequence of the combinator. Owned by the combinator once
/// iteration starts and pulled at most once per row.
///

pub struct Column<'a, T> {
    inner: Box<dyn Iterator<Item = T> + 'a>,
}

impl<'a, T: 'a> Column<'a, T> {
    /// Build a column from any sequence of values.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            inner: Box::new(values.into_iter()),
        }
    }

    /// Build a one-element column holding `value`.
    #[must_use]
    pub fn scalar(value: T) -> Self {
        Self::new(iter::once(value))
    }

    /// Build a column that is exhausted on its first pull.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(iter::empty())
    }
}

impl<T> Column<'_, T> {
    pub(crate) fn pull(&mut self) -> Option<T> {
        self.inner.next()
    }

    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> Column<'a, Value> {
    /// Build a column yielding each character of `text` as a one-character
    /// `Value::Text`.
    #[must_use]
    pub fn chars(text: &'a str) -> Self {
        Self::new(text.chars().map(Value::from))
    }

    /// Build a column from values convertible into `Value`.
    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value> + 'a,
        I::IntoIter: 'a,
    {
        Self::new(values.into_iter().map(Into::into))
    }
}

impl<T> fmt::Debug for Column<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("size_hint", &self.inner.size_hint())
            .finish()
    }
}

impl<'a, T: 'a> From<Vec<T>> for Column<'a, T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

// a bare value stands in for a one-element column
impl<'a> From<Value> for Column<'a, Value> {
    fn from(value: Value) -> Self {
        Self::scalar(value)
    }
}

///
/// ColumnState
///
/// Exhaustion flag for one column. Starts live and flips to exhausted at
/// most once; it never resets.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ColumnState {
    exhausted: bool,
}

impl ColumnState {
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.exhausted
    }

    pub(crate) const fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}

///
/// TESTS
///
