use std::fmt;

use serde::Serialize;

use crate::probe::slot::Slot;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("invalid key {0:?}: keys must be non-empty ascii lowercase words")]
    InvalidKey(String),
    #[error("no open slot for key {0:?}: table is full")]
    TableFull(String),
}

/// Fixed-capacity open-addressing table over the lowercase alphabet.
///
/// A key's home slot is the alphabet ordinal of its *last* character; collisions
/// resolve by linear probing with wrap-around. Deletes leave a tombstone so the
/// probe chain stays intact for entries displaced past the deleted slot.
#[derive(Debug, Clone)]
pub struct ProbingTable {
    slots: Vec<Slot>,
}

impl Default for ProbingTable {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Occupied,
    Tombstone,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied => write!(f, "occupied"),
            Self::Tombstone => write!(f, "tombstone"),
        }
    }
}

/// One non-empty slot as seen by `snapshot_all`. Tombstones have no key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub key: Option<String>,
    pub status: SlotStatus,
}

impl ProbingTable {
    pub const CAPACITY: usize = 26;

    pub fn new() -> Self {
        Self {
            slots: vec![Slot::Empty; Self::CAPACITY],
        }
    }

    /// Starting slot for a key: the alphabet ordinal of its last character.
    pub fn home_index(key: &str) -> Result<usize, TableError> {
        let last = key
            .chars()
            .next_back()
            .ok_or_else(|| TableError::InvalidKey(key.to_string()))?;
        if !last.is_ascii_lowercase() {
            return Err(TableError::InvalidKey(key.to_string()));
        }
        Ok(last as usize - 'a' as usize)
    }

    /// Slot indices along the probe path: every slot exactly once, starting home.
    fn probe_from(start: usize) -> impl Iterator<Item = usize> {
        (0..Self::CAPACITY).map(move |step| (start + step) % Self::CAPACITY)
    }

    pub fn contains(&self, key: &str) -> Result<bool, TableError> {
        let start = Self::home_index(key)?;
        for idx in Self::probe_from(start) {
            match &self.slots[idx] {
                Slot::Occupied(stored) if stored == key => return Ok(true),
                // A never-used slot ends the chain; tombstones do not.
                Slot::Empty => return Ok(false),
                _ => {}
            }
        }
        Ok(false)
    }

    /// Inserts the key, reusing the first open slot along the probe path.
    /// Returns `false` without touching the table if the key is already present.
    pub fn add(&mut self, key: &str) -> Result<bool, TableError> {
        if self.contains(key)? {
            return Ok(false);
        }
        let start = Self::home_index(key)?;
        for idx in Self::probe_from(start) {
            if self.slots[idx].is_open() {
                self.slots[idx] = Slot::occupied(key);
                return Ok(true);
            }
        }
        Err(TableError::TableFull(key.to_string()))
    }

    /// Tombstones the slot holding the key. Returns `false` if the key is absent.
    pub fn delete(&mut self, key: &str) -> Result<bool, TableError> {
        let start = Self::home_index(key)?;
        for idx in Self::probe_from(start) {
            match &self.slots[idx] {
                Slot::Occupied(stored) if stored == key => {
                    self.slots[idx] = Slot::Tombstone;
                    return Ok(true);
                }
                Slot::Empty => return Ok(false),
                _ => {}
            }
        }
        Ok(false)
    }

    pub fn occupied_len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Every non-empty slot in index order, tombstones included.
    pub fn snapshot_all(&self) -> Vec<SlotView> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Empty => None,
                Slot::Occupied(key) => Some(SlotView {
                    index,
                    key: Some(key.clone()),
                    status: SlotStatus::Occupied,
                }),
                Slot::Tombstone => Some(SlotView {
                    index,
                    key: None,
                    status: SlotStatus::Tombstone,
                }),
            })
            .collect()
    }

    /// Keys of occupied slots in index order. The canonical current contents.
    pub fn snapshot_occupied(&self) -> Vec<String> {
        self.slots.iter().filter_map(|s| s.key().map(String::from)).collect()
    }
}
