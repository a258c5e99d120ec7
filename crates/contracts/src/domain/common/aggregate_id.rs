use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Aggregate identifier.
///
/// Identifiers are integers assigned as `max + 1`, so every id type knows
/// its first value and how to step past an existing one.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Ord + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Id rendered as text
    fn as_string(&self) -> String;

    /// Parse an id from text
    fn from_string(s: &str) -> Result<Self, String>;

    /// Id handed out when the collection is empty
    fn first() -> Self;

    /// The id immediately after this one
    fn successor(&self) -> Self;
}

/// Records that carry an aggregate id
pub trait Identified {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;
}

/// Next free id for a collection: max existing id + 1, or `first()` when empty.
///
/// Ids of deleted records below the current max are never handed out again,
/// but gaps are not filled either.
pub fn next_id<T: Identified>(items: &[T]) -> T::Id {
    items
        .iter()
        .map(Identified::id)
        .max()
        .map(|max| max.successor())
        .unwrap_or_else(T::Id::first)
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>().map_err(|e| format!("Invalid i64: {}", e))
    }

    fn first() -> Self {
        1
    }

    fn successor(&self) -> Self {
        self.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i64);

    impl Identified for Row {
        type Id = i64;

        fn id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_next_id_empty_collection() {
        assert_eq!(next_id::<Row>(&[]), 1);
    }

    #[test]
    fn test_next_id_skips_gaps() {
        let rows = vec![Row(3), Row(9), Row(4)];
        assert_eq!(next_id(&rows), 10);
    }

    #[test]
    fn test_i64_string_round_trip() {
        assert_eq!(i64::from_string("42"), Ok(42));
        assert!(i64::from_string("abc").is_err());
        assert_eq!(42i64.as_string(), "42");
    }
}
