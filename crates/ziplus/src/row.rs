use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// Row
///
/// One value per column, in column order, as produced by a single combinator
/// step. Read access goes through `Deref<Target = Vec<T>>`.
///

#[repr(transparent)]
#[derive(Clone, Debug, Deref, Deserialize, Eq, Hash, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct Row<T>(Vec<T>);

impl<T> Row<T> {
    #[must_use]
    pub const fn new(values: Vec<T>) -> Self {
        Self(values)
    }

    /// Number of columns in this row.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> From<Row<T>> for Vec<T> {
    fn from(row: Row<T>) -> Self {
        row.0
    }
}

impl<T: PartialEq> PartialEq<[T]> for Row<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.0.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Row<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_reads_through_deref() {
        let row = Row::new(vec![1, 2, 3]);

        assert_eq!(row.width(), 3);
        assert_eq!(row.get(1), Some(&2));
        assert_eq!(row, [1, 2, 3]);
        assert_eq!((&row).into_iter().sum::<i32>(), 6);
        assert_eq!(row.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn row_serializes_as_plain_list() {
        let row = Row::new(vec!["a", "b"]);
        let json = serde_json::to_string(&row).expect("row should serialize");

        assert_eq!(json, r#"["a","b"]"#);
    }
}
