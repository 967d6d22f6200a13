//! Sproutvale library crate: exposes every domain module.
//!
//! The binary crate (`main.rs`) is the actual game entry point and wires
//! these plugins into a windowed App. `tests/` integration tests import the
//! same types, systems, and resources and run them without a window or GPU.

pub mod shared;
pub mod input;
pub mod clock;
pub mod inventory;
pub mod player;
pub mod farming;
pub mod economy;
pub mod objectives;
pub mod settings;
pub mod tutorial;
pub mod data;
