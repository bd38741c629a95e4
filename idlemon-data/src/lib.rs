extern crate alloc;

mod datastore;
mod items;
mod mons;
mod moves;

#[cfg(test)]
pub mod test_util;

pub use datastore::*;
pub use items::*;
pub use mons::*;
pub use moves::*;
