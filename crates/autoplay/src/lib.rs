//! Seeded automated play over the core game API.

mod config;
mod error;
mod policy;
mod simulator;
mod trace;

pub use config::*;
pub use error::*;
pub use policy::*;
pub use simulator::*;
pub use trace::*;
