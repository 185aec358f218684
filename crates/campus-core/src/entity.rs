//! Core Entity Trait
//!
//! Every view-model with an identity implements this so lists can be
//! searched and extended without caring about the concrete record.

/// A record with a unique identifier
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Find a record by id
pub fn find_by_id<E: Entity>(items: &[E], id: &E::Id) -> Option<E> {
    items.iter().find(|item| item.id() == *id).cloned()
}

/// Next free numeric id: one more than the highest id present (1 for an empty list)
pub fn next_id<E: Entity<Id = u32>>(items: &[E]) -> u32 {
    items.iter().map(Entity::id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(u32);

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id::<Row>(&[]), 1);
        assert_eq!(next_id(&[Row(3), Row(9), Row(4)]), 10);
    }

    #[test]
    fn test_find_by_id() {
        let rows = vec![Row(1), Row(2)];
        assert!(find_by_id(&rows, &2).is_some());
        assert!(find_by_id(&rows, &5).is_none());
    }
}
