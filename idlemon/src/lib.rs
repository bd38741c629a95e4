extern crate alloc;

pub mod capture;
pub mod config;
pub mod error;
pub mod mons;
pub mod rng;

pub use idlemon_data::*;
