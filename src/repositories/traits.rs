//! Common repository traits.
//!
//! Generic interfaces for the database operations shared by the
//! repositories. Lifecycle transitions (redeem, revoke) are specialized
//! methods on the repositories that own them.

/// Trait for creating new entities in the database.
///
/// # Type Parameters
/// * `Entity` - type of the returned entity, with the id assigned by the
///   database
/// * `CreateDTO` - input carrying everything but the id
pub trait Create<Entity, CreateDTO> {
    /// Inserts a new entity and returns it with its assigned id.
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key.
///
/// # Type Parameters
/// * `Entity` - type of the entity to read
/// * `Id` - primary key type (e.g. `i64`, `(i64, i64)`)
pub trait Read<Entity, Id> {
    /// Reads an entity by primary key; `Ok(None)` when no row matches.
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}
