//! Keyed component registry: category → entity id → value.
//!
//! The circle simulation keeps its state in a plain
//! [`CircleSet`](crate::circle::CircleSet) and does not go through this
//! store. It is a building block for grouping components by name when more
//! than one kind of entity is needed.

use crate::types::EntityId;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown component category `{0}`")]
    UnknownCategory(String),
}

/// Registry of values of type `T`, partitioned by category name and
/// addressed by generated [`EntityId`]s.
///
/// Categories must be declared with [`EntityStore::add_category`] before
/// values can be inserted into them. One id may appear in several
/// categories, which is how an entity carries more than one component.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    ent: HashMap<String, HashMap<EntityId, T>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            ent: HashMap::new(),
        }
    }
}

impl<T> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every category and entity. Calling it repeatedly is harmless.
    pub fn init(&mut self) {
        self.ent.clear();
    }

    /// Declares `category`. Existing entries of the category are kept.
    pub fn add_category(&mut self, category: &str) {
        self.ent.entry(category.to_owned()).or_default();
    }

    /// Stores `value` under `category` with a freshly generated id.
    ///
    /// ### Errors
    /// [`StoreError::UnknownCategory`] if `category` was never declared.
    pub fn add_new_entity(&mut self, category: &str, value: T) -> Result<EntityId, StoreError> {
        let entities = self.category_mut(category)?;
        let id = Uuid::new_v4();
        entities.insert(id, value);
        Ok(id)
    }

    /// Stores `value` under `(category, id)` unless that slot is taken.
    ///
    /// Returns `Ok(true)` if the value was inserted and `Ok(false)` if an
    /// entry already existed, in which case the old value is kept.
    ///
    /// ### Errors
    /// [`StoreError::UnknownCategory`] if `category` was never declared.
    pub fn register_components_by_id(
        &mut self,
        id: EntityId,
        category: &str,
        value: T,
    ) -> Result<bool, StoreError> {
        let entities = self.category_mut(category)?;
        if entities.contains_key(&id) {
            return Ok(false);
        }
        entities.insert(id, value);
        Ok(true)
    }

    /// Removes `id` from every category. Unknown ids are ignored.
    pub fn delete_entity(&mut self, id: EntityId) {
        for entities in self.ent.values_mut() {
            entities.remove(&id);
        }
    }

    /// All entities of `category`, or `None` if it was never declared.
    pub fn get_entities(&self, category: &str) -> Option<&HashMap<EntityId, T>> {
        self.ent.get(category)
    }

    fn category_mut(&mut self, category: &str) -> Result<&mut HashMap<EntityId, T>, StoreError> {
        self.ent
            .get_mut(category)
            .ok_or_else(|| StoreError::UnknownCategory(category.to_owned()))
    }
}
