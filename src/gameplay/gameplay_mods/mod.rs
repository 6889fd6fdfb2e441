mod gameplay_mod;
mod mod_category;
mod mod_entry;
mod mod_definition;
mod mod_manager;
mod game_speed;

pub use gameplay_mod::*;
pub use mod_category::*;
pub use mod_entry::*;
pub use mod_definition::*;
pub use mod_manager::*;
pub use game_speed::*;
