mod account;
mod api;
mod options;
mod service;

pub use account::Account;
pub use api::*;
pub use options::GameServiceOptions;
pub use service::GameService;
