use anyhow::Result;

use crate::{
    ItemData,
    MoveData,
    ShopEntry,
    SpeciesData,
};

/// Collection of tables for all catalog data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
/// Catalog data is read-only: it is populated by import jobs and never written by the game.
pub trait DataStore: Send + Sync {
    /// Gets a species by Pokédex number.
    fn get_species(&self, pokedex_id: u32) -> Result<Option<SpeciesData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: u32) -> Result<Option<MoveData>>;
    /// Gets an item template by ID.
    fn get_item(&self, id: u32) -> Result<Option<ItemData>>;
    /// Gets an item template by name, ignoring case.
    fn get_item_by_name(&self, name: &str) -> Result<Option<ItemData>>;
    /// Gets a shop entry by ID.
    fn get_shop_entry(&self, id: u32) -> Result<Option<ShopEntry>>;
    /// Gets all shop entries, ordered by ID.
    fn all_shop_entries(&self) -> Result<Vec<ShopEntry>>;
}
