//! Pure data structures. [`Order`] and [`Pancake`] implement the
//! [`Entity`](entity_framework::Entity) trait; [`Address`] and [`Delivery`] are plain values.

pub mod address;
pub mod delivery;
pub mod order;
pub mod pancake;

pub use address::*;
pub use delivery::*;
pub use order::*;
pub use pancake::*;
