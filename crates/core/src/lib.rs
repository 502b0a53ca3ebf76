//! Core game logic for the two-class race. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod confrontation;
pub mod deck;
pub mod decision;
pub mod events;
pub mod game;
pub mod player;
pub mod rng;
pub mod state;

pub use cards::*;
pub use config::*;
pub use confrontation::*;
pub use deck::*;
pub use decision::*;
pub use events::*;
pub use game::*;
pub use player::*;
pub use rng::*;
pub use state::*;
