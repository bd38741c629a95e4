use std::collections::BTreeMap;

use anyhow::Result;
use idlemon::{
    error::{
        WrapOptionError,
        general_error,
    },
    mons::MonInstance,
};
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use crate::OwnedMon;

/// A player's saved game.
///
/// Mons are either on the active team, with a team slot starting at 1, or in the PC box, with a
/// box position starting at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub nickname: String,
    pub pokedollars: u32,
    pub starter_chosen: bool,
    mons: BTreeMap<u64, MonInstance>,
    inventory: BTreeMap<u32, u32>,
    next_mon_id: u64,
}

impl Account {
    pub fn new(nickname: String, pokedollars: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname,
            pokedollars,
            starter_chosen: false,
            mons: BTreeMap::new(),
            inventory: BTreeMap::new(),
            next_mon_id: 1,
        }
    }

    /// Number of Mons on the active team.
    pub fn team_size(&self) -> usize {
        self.mons.values().filter(|mon| mon.active).count()
    }

    /// Number of Mons in the PC box.
    pub fn box_size(&self) -> usize {
        self.mons.len() - self.team_size()
    }

    pub fn mon(&self, id: u64) -> Result<&MonInstance> {
        self.mons
            .get(&id)
            .wrap_not_found("mon", id)
    }

    pub fn mon_mut(&mut self, id: u64) -> Result<&mut MonInstance> {
        self.mons
            .get_mut(&id)
            .wrap_not_found("mon", id)
    }

    /// Mons ordered by team slot, then ID.
    ///
    /// Boxed Mons all share team slot 0, so they come first unless filtered out.
    pub fn mons(&self, active: Option<bool>) -> Vec<OwnedMon> {
        let mut mons = self
            .mons
            .iter()
            .filter(|(_, mon)| active.is_none_or(|active| mon.active == active))
            .map(|(id, mon)| OwnedMon {
                id: *id,
                mon: mon.clone(),
            })
            .collect::<Vec<_>>();
        mons.sort_by_key(|owned| (owned.mon.slot, owned.id));
        mons
    }

    /// Adds a new Mon to the account, on the team if there is room or in the box if not.
    ///
    /// Returns the ID of the Mon.
    pub fn add_mon(&mut self, mut mon: MonInstance, max_team_size: usize) -> u64 {
        let team_size = self.team_size();
        if team_size < max_team_size {
            mon.active = true;
            mon.slot = team_size as u8 + 1;
            mon.slot_pc = 0;
        } else {
            let last_box_slot = self
                .mons
                .values()
                .filter(|mon| !mon.active)
                .map(|mon| mon.slot_pc)
                .max()
                .unwrap_or(0);
            mon.active = false;
            mon.slot = 0;
            mon.slot_pc = last_box_slot + 1;
        }
        let id = self.next_mon_id;
        self.next_mon_id += 1;
        self.mons.insert(id, mon);
        id
    }

    /// Exchanges a Mon on the team with a Mon in the box.
    pub fn swap(&mut self, team_mon: u64, box_mon: u64) -> Result<()> {
        let (slot, slot_pc) = {
            let team = self.mon(team_mon)?;
            let boxed = self.mon(box_mon)?;
            if !team.active {
                return Err(general_error(format!("mon {team_mon} is not on the team")));
            }
            if boxed.active {
                return Err(general_error(format!("mon {box_mon} is not in the box")));
            }
            (team.slot, boxed.slot_pc)
        };

        let team = self.mon_mut(team_mon)?;
        team.active = false;
        team.slot = 0;
        team.slot_pc = slot_pc;

        let boxed = self.mon_mut(box_mon)?;
        boxed.active = true;
        boxed.slot = slot;
        boxed.slot_pc = 0;
        Ok(())
    }

    pub fn item_quantity(&self, item: u32) -> u32 {
        self.inventory.get(&item).copied().unwrap_or(0)
    }

    /// Items in the inventory, ordered by item ID.
    pub fn inventory(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.inventory
            .iter()
            .map(|(item, quantity)| (*item, *quantity))
    }

    pub fn add_item(&mut self, item: u32, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let entry = self.inventory.entry(item).or_default();
        *entry = entry.saturating_add(quantity);
    }

    /// Removes one of the item, returning the quantity left.
    pub fn consume_item(&mut self, item: u32) -> Result<u32> {
        let quantity = self
            .inventory
            .get_mut(&item)
            .wrap_expectation(format!("no item {item} in inventory"))?;
        *quantity -= 1;
        let left = *quantity;
        if left == 0 {
            self.inventory.remove(&item);
        }
        Ok(left)
    }
}
