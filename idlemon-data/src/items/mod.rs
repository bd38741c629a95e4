mod item_data;
mod shop;

pub use item_data::ItemData;
pub use shop::{
    ShopCategory,
    ShopEntry,
};
