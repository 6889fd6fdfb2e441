mod game_mode;
mod game_mode_info;
mod game_mode_meta;
mod default_game_mode;
mod key_counter;
mod mode_icon;
mod mode_settings;

pub use game_mode::*;
pub use game_mode_info::*;
pub use game_mode_meta::*;
pub use default_game_mode::*;
pub use key_counter::*;
pub use mode_icon::*;
pub use mode_settings::*;
