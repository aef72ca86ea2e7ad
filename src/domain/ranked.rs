//! User-ranked values and their ordering.

use super::number::Number;

/// A value paired with a user-assigned sort key.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    rank: Number,
    value: T,
}

impl<T> Ranked<T> {
    pub fn new(rank: Number, value: T) -> Self {
        Self { rank, value }
    }

    pub fn rank(&self) -> Number {
        self.rank
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Ordering options for [`RankedCollection::sorted_values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOptions {
    /// Highest rank first instead of lowest.
    pub reverse: bool,
}

/// An unordered collection of ranked values.
///
/// # Example
///
/// ```
/// use resume_conversion::domain::{Number, Ranked, RankedCollection, SortOptions};
///
/// let collection: RankedCollection<&str> = [(3.0, "c"), (1.0, "a"), (2.0, "b")]
///     .into_iter()
///     .map(|(rank, value)| Ranked::new(Number::new(rank).unwrap(), value))
///     .collect();
///
/// assert_eq!(collection.sorted_values(SortOptions::default()), vec![&"a", &"b", &"c"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCollection<T> {
    entities: Vec<Ranked<T>>,
}

impl<T> RankedCollection<T> {
    pub fn new(entities: Vec<Ranked<T>>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The wrapped values ordered by rank alone.
    ///
    /// Ascending by default. Values sharing a rank keep their input order.
    pub fn sorted_values(&self, options: SortOptions) -> Vec<&T> {
        let mut entities: Vec<&Ranked<T>> = self.entities.iter().collect();
        entities.sort_by(|a, b| {
            let ordering = a.rank.value().total_cmp(&b.rank.value());
            if options.reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });
        entities.into_iter().map(|e| &e.value).collect()
    }
}

impl<T> Default for RankedCollection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<Ranked<T>> for RankedCollection<T> {
    fn from_iter<I: IntoIterator<Item = Ranked<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(ranks: &[f64]) -> RankedCollection<String> {
        ranks
            .iter()
            .map(|&r| Ranked::new(Number::new(r).unwrap(), format!("r{}", r)))
            .collect()
    }

    #[test]
    fn test_sorted_ascending_by_default() {
        let sorted = collection(&[3.0, 1.0, 2.0]);
        assert_eq!(
            sorted.sorted_values(SortOptions::default()),
            vec!["r1", "r2", "r3"]
        );
    }

    #[test]
    fn test_sorted_reverse() {
        let sorted = collection(&[3.0, 1.0, 2.0]);
        assert_eq!(
            sorted.sorted_values(SortOptions { reverse: true }),
            vec!["r3", "r2", "r1"]
        );
    }

    #[test]
    fn test_fractional_and_negative_ranks() {
        let sorted = collection(&[0.5, -2.0, 10.0, 0.25]);
        assert_eq!(
            sorted.sorted_values(SortOptions::default()),
            vec!["r-2", "r0.25", "r0.5", "r10"]
        );
    }

    #[test]
    fn test_empty_collection() {
        let empty: RankedCollection<String> = RankedCollection::default();
        assert!(empty.is_empty());
        assert!(empty.sorted_values(SortOptions::default()).is_empty());
    }
}
