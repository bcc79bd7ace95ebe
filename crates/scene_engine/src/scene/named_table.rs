//! Name-keyed ownership table
//!
//! Owns boxed entities in a slot map and indexes them by unique name. Used
//! for both game objects and GUI objects; the two differ only in how
//! auto-generated names are numbered.

use crate::foundation::collections::{Key, SlotMap};
use crate::scene::Named;
use std::collections::BTreeMap;

/// How a table numbers the names it generates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoName {
    /// `<label><n>` where `n` counts every insertion the table has ever seen.
    /// An insertion under a taken name counts twice. Names are never
    /// recycled, even after removals.
    TotalAdded,

    /// `<label><len + 1>`, moving upward past names already taken
    NextFreeSlot,
}

/// Result of [`NamedEntityTable::insert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion<K> {
    /// Slot of the inserted entity
    pub key: K,

    /// Name the entity was stored under
    pub name: String,

    /// Requested name that was already taken, if the entity had to be renamed
    pub collided_with: Option<String>,
}

/// Entities of type `T` owned under unique names
///
/// Iteration follows name order.
pub struct NamedEntityTable<K: Key, T: ?Sized + Named> {
    label: String,
    scheme: AutoName,
    total_added: u64,
    entries: SlotMap<K, Box<T>>,
    names: BTreeMap<String, K>,
}

impl<K: Key, T: ?Sized + Named> NamedEntityTable<K, T> {
    /// Create an empty table whose generated names start with `label`
    pub fn new(label: impl Into<String>, scheme: AutoName) -> Self {
        Self {
            label: label.into(),
            scheme,
            total_added: 0,
            entries: SlotMap::with_key(),
            names: BTreeMap::new(),
        }
    }

    /// Take ownership of `entity` under `requested`, or under a generated name
    /// when `requested` is empty or already in use
    ///
    /// Never overwrites an existing entry and never drops `entity`.
    pub fn insert(&mut self, mut entity: Box<T>, requested: &str) -> Insertion<K> {
        if self.scheme == AutoName::TotalAdded {
            self.total_added += 1;
        }

        let collided = !requested.is_empty() && self.names.contains_key(requested);
        // A taken name counts as a second, unnamed insertion
        if collided && self.scheme == AutoName::TotalAdded {
            self.total_added += 1;
        }

        let name = if requested.is_empty() || collided {
            self.generate_name()
        } else {
            requested.to_string()
        };

        entity.set_name(&name);
        let key = self.entries.insert(entity);
        self.names.insert(name.clone(), key);

        Insertion {
            key,
            name,
            collided_with: collided.then(|| requested.to_string()),
        }
    }

    fn generate_name(&mut self) -> String {
        match self.scheme {
            AutoName::TotalAdded => loop {
                let candidate = format!("{}{}", self.label, self.total_added);
                if !self.names.contains_key(&candidate) {
                    return candidate;
                }
                self.total_added += 1;
            },
            AutoName::NextFreeSlot => {
                let mut index = self.names.len() + 1;
                loop {
                    let candidate = format!("{}{}", self.label, index);
                    if !self.names.contains_key(&candidate) {
                        return candidate;
                    }
                    index += 1;
                }
            }
        }
    }

    /// Remove the entity stored under `name`, handing it back with its key
    pub fn remove(&mut self, name: &str) -> Option<(K, Box<T>)> {
        let key = self.names.remove(name)?;
        self.entries.remove(key).map(|entity| (key, entity))
    }

    /// Entity stored under `name`
    pub fn get(&self, name: &str) -> Option<&T> {
        let key = self.names.get(name)?;
        self.entries.get(*key).map(|entity| &**entity)
    }

    /// Mutable access to the entity stored under `name`
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let key = self.names.get(name)?;
        self.entries.get_mut(*key).map(|entity| &mut **entity)
    }

    /// Entity stored in slot `key`
    pub fn get_by_key(&self, key: K) -> Option<&T> {
        self.entries.get(key).map(|entity| &**entity)
    }

    /// Slot of the entity stored under `name`
    pub fn key_of(&self, name: &str) -> Option<K> {
        self.names.get(name).copied()
    }

    /// Whether `name` is in use
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insertions counted by [`AutoName::TotalAdded`] tables
    pub fn total_added(&self) -> u64 {
        self.total_added
    }

    /// Names in iteration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// `(name, entity)` pairs in iteration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.names.iter().filter_map(|(name, key)| {
            self.entries.get(*key).map(|entity| (name.as_str(), &**entity))
        })
    }

    /// Call `f` on every entity in iteration order
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&str, &mut T)) {
        for (name, key) in &self.names {
            if let Some(entity) = self.entries.get_mut(*key) {
                f(name.as_str(), &mut **entity);
            }
        }
    }

    /// Empty the table, yielding every owned entity with its key
    pub fn drain(&mut self) -> impl Iterator<Item = (K, Box<T>)> + '_ {
        self.names.clear();
        self.entries.drain()
    }

    /// Drop every owned entity
    pub fn clear(&mut self) {
        self.names.clear();
        self.entries.clear();
    }
}
