/// Identifier for a circle slot in a [`crate::circle::CircleSet`].
///
/// This is an index into `CircleSet::circles`. Slots are overwritten in
/// place on respawn, so an id names a slot, not a particular circle.
pub type CircleId = usize;

/// Identifier generated by [`crate::entity_store::EntityStore`].
pub type EntityId = uuid::Uuid;
