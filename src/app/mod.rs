pub mod hud;
pub mod render;
pub mod setup;

pub use hud::{spawn_hud, update_hotbar_label};
pub use render::{draw_highlight, setup_block_visuals, sync_block_visuals};
pub use setup::setup;
