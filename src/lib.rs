pub mod block;
pub mod error;
pub mod interaction;
pub mod player;
pub mod ron;
pub mod selection;
pub mod settings;
pub mod snapshot;
pub mod terrain;
pub mod world;
