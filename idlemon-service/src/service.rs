use std::{
    collections::BTreeMap,
    str::FromStr,
    sync::Arc,
};

use ahash::HashMap;
use anyhow::Result;
use futures_util::lock::Mutex;
use idlemon::{
    DataStore,
    Gender,
    ItemData,
    ShopCategory,
    ShopEntry,
    SpeciesData,
    capture::{
        CaptureAttempt,
        resolve_capture,
    },
    error::{
        WrapOptionError,
        general_error,
    },
    mons::{
        MonSeed,
        acquire_mon,
        roll_shiny,
    },
    rng::{
        RandomSource,
        default_random_source,
    },
};
use uuid::Uuid;

use crate::{
    Account,
    AccountView,
    CaptureResponse,
    CapturedMon,
    GameServiceOptions,
    InventoryItem,
    LevelUpResponse,
    OwnedMon,
    PurchaseResponse,
    ShopItem,
    StarterResponse,
    UseItemResponse,
    WildMon,
};

/// Service for managing player accounts, their Mons, and the shop.
///
/// Every operation on an account locks the account for its whole duration, so concurrent requests
/// for the same account are applied one after another.
pub struct GameService<'d> {
    data: &'d dyn DataStore,
    options: GameServiceOptions,
    accounts: Mutex<BTreeMap<Uuid, Arc<Mutex<Account>>>>,
    // Remaining stock by shop entry, for entries that have been bought from.
    stock: Mutex<HashMap<u32, u32>>,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl<'d> GameService<'d> {
    /// Creates a new game service.
    pub fn new(data: &'d dyn DataStore, options: GameServiceOptions) -> Self {
        let rng = default_random_source(options.seed);
        Self::new_with_rng(data, options, rng)
    }

    /// Creates a new game service that rolls with the given random source.
    pub fn new_with_rng(
        data: &'d dyn DataStore,
        options: GameServiceOptions,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            data,
            options,
            accounts: Mutex::new(BTreeMap::default()),
            stock: Mutex::new(HashMap::default()),
            rng: Mutex::new(rng),
        }
    }

    pub fn options(&self) -> &GameServiceOptions {
        &self.options
    }

    async fn find_account(&self, id: Uuid) -> Result<Arc<Mutex<Account>>> {
        self.accounts
            .lock()
            .await
            .get(&id)
            .cloned()
            .wrap_not_found("account", id)
    }

    fn species(&self, pokedex_id: u32) -> Result<SpeciesData> {
        self.data
            .get_species(pokedex_id)?
            .wrap_not_found("species", pokedex_id)
    }

    fn item(&self, id: u32) -> Result<ItemData> {
        self.data
            .get_item(id)?
            .wrap_not_found("item", id)
    }

    /// Creates a new account.
    pub async fn create_account(&self, nickname: &str) -> Result<Uuid> {
        let account = Account::new(nickname.to_owned(), self.options.initial_pokedollars);
        let id = account.id;
        self.accounts
            .lock()
            .await
            .insert(id, Arc::new(Mutex::new(account)));
        log::info!("created account {id} for {nickname}");
        Ok(id)
    }

    /// Generates the public view of an account.
    pub async fn account(&self, account: Uuid) -> Result<AccountView> {
        let account = self.find_account(account).await?;
        let account = account.lock().await;
        Ok(AccountView {
            id: account.id,
            nickname: account.nickname.clone(),
            pokedollars: account.pokedollars,
            starter_chosen: account.starter_chosen,
            team_size: account.team_size(),
            box_size: account.box_size(),
        })
    }

    /// Chooses the account's first Mon, along with the starter rewards.
    pub async fn choose_starter(&self, account: Uuid, pokedex_id: u32) -> Result<StarterResponse> {
        let account = self.find_account(account).await?;
        let mut account = account.lock().await;
        if account.starter_chosen {
            return Err(general_error("starter was already chosen"));
        }
        let species = self.species(pokedex_id)?;
        if account.team_size() >= self.options.max_team_size {
            return Err(general_error("team is full"));
        }

        let mut mon = {
            let mut rng = self.rng.lock().await;
            acquire_mon(
                &species,
                self.options.engine.starting_level,
                MonSeed::default(),
                rng.as_mut(),
                self.data,
                &self.options.engine,
                false,
            )?
        };
        mon.nickname = Some(species.name.clone());
        let id = account.add_mon(mon, self.options.max_team_size);

        account.pokedollars = account
            .pokedollars
            .saturating_add(self.options.starter_reward);
        for (name, quantity) in &self.options.starter_items {
            match self.data.get_item_by_name(name)? {
                Some(item) => account.add_item(item.id, *quantity),
                None => log::warn!("starter item {name} does not exist"),
            }
        }
        account.starter_chosen = true;
        log::info!("account {} chose {} as a starter", account.id, species.name);

        Ok(StarterResponse {
            message: format!("You chose {}!", species.name),
            mon: OwnedMon {
                id,
                mon: account.mon(id)?.clone(),
            },
            pokedollars: account.pokedollars,
        })
    }

    /// Throws a ball at a wild Mon, adding the Mon to the account on capture.
    pub async fn throw_ball(
        &self,
        account: Uuid,
        item_id: u32,
        wild: WildMon,
    ) -> Result<CaptureResponse> {
        let account = self.find_account(account).await?;
        let mut account = account.lock().await;
        let ball = self.item(item_id)?;
        if account.item_quantity(item_id) == 0 {
            return Err(general_error(format!("no {} left", ball.name)));
        }
        if !ball.is_ball() {
            return Err(general_error(format!("{} is not a ball", ball.name)));
        }
        let species = self.species(wild.pokedex_id)?;
        let attempt = CaptureAttempt {
            current_hp: wild.current_hp,
            max_hp: wild.max_hp,
            base_vitality: species.base_stats.hp,
            capture_rate: ball.capture_rate,
        };
        attempt.validate()?;
        let level = wild.level.unwrap_or(self.options.engine.starting_level);
        if level == 0 || level > self.options.engine.max_level {
            return Err(general_error(format!("invalid level {level}")));
        }

        let balls_left = account.consume_item(item_id)?;

        let mut rng = self.rng.lock().await;
        let outcome = resolve_capture(&attempt, rng.as_mut(), &self.options.engine)?;
        if !outcome.captured {
            return Ok(CaptureResponse {
                captured: false,
                message: format!("Oh no! The wild {} broke free!", species.name),
                mon: None,
                balls_left,
            });
        }

        let shiny = roll_shiny(rng.as_mut(), &self.options.engine);
        let seed = MonSeed {
            ivs: wild.ivs,
            nature: wild.nature,
            gender: wild
                .gender
                .as_deref()
                .and_then(|gender| Gender::from_str(gender).ok()),
            base_stats: wild.base_stats,
        };
        let mut mon = acquire_mon(
            &species,
            level,
            seed,
            rng.as_mut(),
            self.data,
            &self.options.engine,
            shiny,
        )?;
        drop(rng);

        mon.nickname = Some(species.name.clone());
        mon.set_current_hp(wild.current_hp.clamp(0, u16::MAX as i32) as u16);
        let id = account.add_mon(mon, self.options.max_team_size);
        let mon = account.mon(id)?;
        log::info!(
            "account {} caught {} at level {level}",
            account.id,
            species.name
        );

        Ok(CaptureResponse {
            captured: true,
            message: format!("Gotcha! {} was caught!", species.name),
            mon: Some(CapturedMon {
                id,
                nickname: species.name.clone(),
                level: mon.level(),
                gender: mon.gender(),
                nature: mon.nature(),
                ivs: mon.ivs().clone(),
                stats: mon.stats().clone(),
                current_hp: mon.current_hp(),
                shiny: mon.shiny(),
                active: mon.active,
                slot: mon.slot,
                slot_pc: mon.slot_pc,
            }),
            balls_left,
        })
    }

    /// Raises a Mon's level by one.
    pub async fn level_up(&self, account: Uuid, mon_id: u64) -> Result<LevelUpResponse> {
        let account = self.find_account(account).await?;
        let mut account = account.lock().await;
        let account_id = account.id;
        let mon = account.mon_mut(mon_id)?;
        let species = self.species(mon.species())?;
        mon.level_up(&species, &self.options.engine)?;
        let name = mon.nickname.clone().unwrap_or_else(|| species.name.clone());
        log::info!(
            "account {account_id} leveled {name} up to {}",
            mon.level()
        );
        Ok(LevelUpResponse {
            message: format!("{name} grew to level {}!", mon.level()),
            level: mon.level(),
            stats: mon.stats().clone(),
            current_hp: mon.current_hp(),
        })
    }

    /// Uses a healing item on a Mon.
    ///
    /// Nothing is consumed if the Mon is at full HP.
    pub async fn use_item(
        &self,
        account: Uuid,
        mon_id: u64,
        item_id: u32,
    ) -> Result<UseItemResponse> {
        let account = self.find_account(account).await?;
        let mut account = account.lock().await;
        let item = self.item(item_id)?;
        let remaining = account.item_quantity(item_id);
        if remaining == 0 {
            return Err(general_error(format!("no {} left", item.name)));
        }
        if !item.is_healing {
            return Err(general_error(format!("{} cannot be used on a mon", item.name)));
        }

        let mon = account.mon_mut(mon_id)?;
        let species = self.species(mon.species())?;
        let name = mon.nickname.clone().unwrap_or_else(|| species.name.clone());
        if mon.at_full_hp() {
            return Ok(UseItemResponse {
                message: format!("{name} already has full HP"),
                healed: 0,
                current_hp: mon.current_hp(),
                max_hp: mon.max_hp(),
                remaining,
            });
        }

        let amount = match item.heal_amount {
            0 => self.options.default_heal_amount,
            amount => amount,
        };
        let healed = mon.heal(amount);
        let (current_hp, max_hp) = (mon.current_hp(), mon.max_hp());
        let remaining = account.consume_item(item_id)?;
        Ok(UseItemResponse {
            message: format!("{name} recovered {healed} HP"),
            healed,
            current_hp,
            max_hp,
            remaining,
        })
    }

    /// Exchanges a Mon on the team with a Mon in the PC box.
    pub async fn swap(&self, account: Uuid, team_mon: u64, box_mon: u64) -> Result<()> {
        let account = self.find_account(account).await?;
        let mut account = account.lock().await;
        account.swap(team_mon, box_mon)
    }

    fn price(item: &ItemData, entry: &ShopEntry, quantity: u32) -> u32 {
        (item.cost as f64 * quantity as f64 * (1.0 - entry.discount)).floor() as u32
    }

    fn unlimited(&self, stock: u32) -> bool {
        stock == self.options.unlimited_stock
    }

    /// Buys items from the shop.
    pub async fn buy_item(
        &self,
        account: Uuid,
        shop_id: u32,
        quantity: u32,
    ) -> Result<PurchaseResponse> {
        if quantity == 0 {
            return Err(general_error("quantity must be positive"));
        }
        let account = self.find_account(account).await?;
        let mut account = account.lock().await;
        let entry = self
            .data
            .get_shop_entry(shop_id)?
            .wrap_not_found("shop entry", shop_id)?;
        if !entry.available {
            return Err(general_error("item is not for sale"));
        }
        let item = self.item(entry.item)?;

        let mut stock = self.stock.lock().await;
        let remaining = *stock.entry(entry.id).or_insert(entry.stock);
        let unlimited = self.unlimited(remaining);
        if !unlimited && remaining < quantity {
            return Err(general_error(format!(
                "only {remaining} {} left in stock",
                item.name
            )));
        }
        let total_cost = Self::price(&item, &entry, quantity);
        if account.pokedollars < total_cost {
            return Err(general_error(format!(
                "{total_cost} pokédollars needed, but only {} available",
                account.pokedollars
            )));
        }

        account.pokedollars -= total_cost;
        if !unlimited {
            stock.insert(entry.id, remaining - quantity);
        }
        account.add_item(item.id, quantity);
        Ok(PurchaseResponse {
            message: format!("Bought {quantity} {}", item.name),
            total_cost,
            pokedollars: account.pokedollars,
            quantity: account.item_quantity(item.id),
        })
    }

    /// Lists an account's Mons, ordered by team slot.
    pub async fn mons(&self, account: Uuid, active: Option<bool>) -> Result<Vec<OwnedMon>> {
        let account = self.find_account(account).await?;
        let account = account.lock().await;
        Ok(account.mons(active))
    }

    /// Lists an account's items, ordered by item ID.
    pub async fn items(&self, account: Uuid) -> Result<Vec<InventoryItem>> {
        let account = self.find_account(account).await?;
        let account = account.lock().await;
        account
            .inventory()
            .map(|(item, quantity)| -> Result<InventoryItem> {
                Ok(InventoryItem {
                    item: self.item(item)?,
                    quantity,
                })
            })
            .collect()
    }

    /// Lists items for sale, optionally on a single shelf.
    pub async fn shop_items(&self, category: Option<ShopCategory>) -> Result<Vec<ShopItem>> {
        let stock = self.stock.lock().await;
        self.data
            .all_shop_entries()?
            .into_iter()
            .filter(|entry| entry.available)
            .filter(|entry| category.is_none_or(|category| entry.category == category))
            .map(|mut entry| -> Result<ShopItem> {
                if let Some(remaining) = stock.get(&entry.id) {
                    entry.stock = *remaining;
                }
                let item_data = self.item(entry.item)?;
                let price = Self::price(&item_data, &entry, 1);
                Ok(ShopItem {
                    entry,
                    item_data,
                    price,
                })
            })
            .collect()
    }
}
