#![cfg_attr(not(feature = "std"), no_std)]

mod attack;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod fleet;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod pattern;
pub mod prelude;
#[cfg(feature = "std")]
mod render;
mod session;
mod ship;
mod stats;

pub use attack::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use fleet::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::*;
pub use pattern::*;
#[cfg(feature = "std")]
pub use render::*;
pub use session::*;
pub use ship::*;
pub use stats::*;
