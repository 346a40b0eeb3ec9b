#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(String),
    Tombstone,
}

impl Slot {
    pub fn occupied<S: Into<String>>(key: S) -> Self {
        Self::Occupied(key.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone)
    }

    /// Whether an insert may claim this slot. Tombstones are reusable.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Empty | Self::Tombstone)
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Occupied(key) => Some(key),
            _ => None,
        }
    }

    pub fn holds(&self, key: &str) -> bool {
        self.key() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_default_is_empty() {
        let slot = Slot::default();
        assert!(slot.is_empty());
        assert!(slot.is_open());
        assert!(!slot.is_occupied());
        assert!(!slot.is_tombstone());
        assert_eq!(slot.key(), None);
    }

    #[test]
    fn slot_occupied() {
        let slot = Slot::occupied("apple");
        assert!(slot.is_occupied());
        assert!(!slot.is_open());
        assert!(!slot.is_empty());
        assert!(!slot.is_tombstone());
        assert_eq!(slot.key(), Some("apple"));
        assert!(slot.holds("apple"));
        assert!(!slot.holds("orange"));
    }

    #[test]
    fn slot_tombstone_carries_no_key() {
        let slot = Slot::Tombstone;
        assert!(slot.is_tombstone());
        assert!(slot.is_open());
        assert!(!slot.is_occupied());
        assert_eq!(slot.key(), None);
        assert!(!slot.holds(""));
    }

    #[test]
    fn slot_equality_and_clone() {
        let slot1 = Slot::occupied("cat");
        let slot2 = Slot::occupied("cat");
        let slot3 = Slot::occupied("dog");

        assert_eq!(slot1, slot2);
        assert_ne!(slot1, slot3);
        assert_ne!(slot1, Slot::Tombstone);
        assert_ne!(Slot::Empty, Slot::Tombstone);

        let cloned = slot1.clone();
        assert_eq!(slot1, cloned);
    }
}
