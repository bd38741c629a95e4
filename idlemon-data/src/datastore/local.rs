use std::{
    env,
    fs::File,
    path::Path,
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;
use unicase::UniCase;

use crate::{
    DataStore,
    ItemData,
    MoveData,
    ShopEntry,
    SpeciesData,
    SpeciesRecord,
};

/// An implementation of [`DataStore`] that reads catalog exports from disk.
///
/// Tables can also be filled in directly, which is how tests build small catalogs.
#[derive(Default)]
pub struct LocalDataStore {
    pub species: HashMap<u32, SpeciesData>,
    pub moves: HashMap<u32, MoveData>,
    pub items: HashMap<u32, ItemData>,
    pub shop: HashMap<u32, ShopEntry>,
}

impl LocalDataStore {
    /// Shop file name.
    pub const SHOP_FILE: &str = "shop.json";
    /// Items directory name.
    pub const ITEMS_DIR: &str = "items";
    /// Moves directory name.
    pub const MOVES_DIR: &str = "moves";
    /// Species directory name.
    pub const SPECIES_DIR: &str = "species";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Every file in the species, moves, and items directories holds a JSON array of records. Fails
    /// if the path does not exist, does not point to a directory, or any record is malformed
    /// (including species with incomplete base stats).
    pub fn new(root: &str) -> Result<Self> {
        let root = Path::new(root);
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display()
            )));
        }
        let mut store = Self::default();
        store
            .import_species(read_all_files_in_directory(&root.join(Self::SPECIES_DIR))?)
            .context("failed to import species")?;
        store.extend_moves(read_all_files_in_directory(&root.join(Self::MOVES_DIR))?);
        store.extend_items(read_all_files_in_directory(&root.join(Self::ITEMS_DIR))?);
        let shop: Vec<ShopEntry> = serde_json::from_reader(
            File::open(root.join(Self::SHOP_FILE)).context("failed to read shop")?,
        )
        .context("failed to parse shop")?;
        store.extend_shop(shop);
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(&env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Imports catalog species records, normalizing their base stats.
    ///
    /// Fails with [`crate::IncompleteSpeciesDataError`] on the first record that is missing a base
    /// stat. Records before the failing one remain imported.
    pub fn import_species<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = SpeciesRecord>,
    {
        for record in records {
            let species = SpeciesData::try_from(record)?;
            self.species.insert(species.pokedex_id, species);
        }
        Ok(())
    }

    pub fn extend_species<I>(&mut self, species: I)
    where
        I: IntoIterator<Item = SpeciesData>,
    {
        self.species
            .extend(species.into_iter().map(|species| (species.pokedex_id, species)));
    }

    pub fn extend_moves<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = MoveData>,
    {
        self.moves
            .extend(moves.into_iter().map(|move_data| (move_data.id, move_data)));
    }

    pub fn extend_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = ItemData>,
    {
        self.items
            .extend(items.into_iter().map(|item| (item.id, item)));
    }

    pub fn extend_shop<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = ShopEntry>,
    {
        self.shop
            .extend(entries.into_iter().map(|entry| (entry.id, entry)));
    }
}

fn read_all_files_in_directory<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let dir_name = dir.to_string_lossy().to_string();
    let mut paths = dir
        .read_dir()
        .context(format!("failed to read {dir_name} directory"))?
        .filter_map(|entry| Some(entry.ok()?.path()))
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();
    paths.sort();
    let tables = paths
        .into_iter()
        .map(|path| {
            let path_name = path.to_string_lossy().to_string();
            serde_json::from_reader::<File, Vec<T>>(
                File::open(&path).context(format!("{path_name} could not be opened"))?,
            )
            .context(format!("failed to read {dir_name} data from {path_name}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tables.into_iter().flatten().collect())
}

impl DataStore for LocalDataStore {
    fn get_species(&self, pokedex_id: u32) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(&pokedex_id).cloned())
    }

    fn get_move(&self, id: u32) -> Result<Option<MoveData>> {
        Ok(self.moves.get(&id).cloned())
    }

    fn get_item(&self, id: u32) -> Result<Option<ItemData>> {
        Ok(self.items.get(&id).cloned())
    }

    fn get_item_by_name(&self, name: &str) -> Result<Option<ItemData>> {
        let name = UniCase::new(name);
        Ok(self
            .items
            .values()
            .find(|item| UniCase::new(item.name.as_str()) == name)
            .cloned())
    }

    fn get_shop_entry(&self, id: u32) -> Result<Option<ShopEntry>> {
        Ok(self.shop.get(&id).cloned())
    }

    fn all_shop_entries(&self) -> Result<Vec<ShopEntry>> {
        let mut entries = self.shop.values().cloned().collect::<Vec<_>>();
        entries.sort_by_key(|entry| entry.id);
        Ok(entries)
    }
}
