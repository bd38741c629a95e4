use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::Result;
use idlemon::{
    DataStore,
    ItemData,
    LocalDataStore,
    MoveData,
    ShopEntry,
    SpeciesData,
};

/// Wrapper around a [`LocalDataStore`] for testing.
///
/// Loads the catalog shipped with `idlemon-data`. Fake species can be inserted exclusively for the
/// test, shadowing catalog entries.
pub struct TestDataStore {
    local: LocalDataStore,
    fake_species: HashMap<u32, SpeciesData>,
}

impl TestDataStore {
    /// Directory of the catalog shipped with `idlemon-data`.
    pub const CATALOG_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../idlemon-data/data");

    pub fn new() -> Result<Self> {
        Ok(Self {
            local: LocalDataStore::new(Self::CATALOG_DIR)?,
            fake_species: HashMap::new(),
        })
    }

    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Ok(Self {
            local: LocalDataStore::new_from_env(env_var)?,
            fake_species: HashMap::new(),
        })
    }

    pub fn add_fake_species(&mut self, species: SpeciesData) {
        self.fake_species.insert(species.pokedex_id, species);
    }

    /// Mutable access to the underlying catalog.
    pub fn local_mut(&mut self) -> &mut LocalDataStore {
        &mut self.local
    }
}

impl DataStore for TestDataStore {
    fn get_species(&self, pokedex_id: u32) -> Result<Option<SpeciesData>> {
        match self.fake_species.get(&pokedex_id) {
            Some(species) => Ok(Some(species.clone())),
            None => self.local.get_species(pokedex_id),
        }
    }

    fn get_move(&self, id: u32) -> Result<Option<MoveData>> {
        self.local.get_move(id)
    }

    fn get_item(&self, id: u32) -> Result<Option<ItemData>> {
        self.local.get_item(id)
    }

    fn get_item_by_name(&self, name: &str) -> Result<Option<ItemData>> {
        self.local.get_item_by_name(name)
    }

    fn get_shop_entry(&self, id: u32) -> Result<Option<ShopEntry>> {
        self.local.get_shop_entry(id)
    }

    fn all_shop_entries(&self) -> Result<Vec<ShopEntry>> {
        self.local.all_shop_entries()
    }
}
