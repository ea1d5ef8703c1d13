//! Domain model types for road repair planning.
//!
//! A [`Road`] carries its dimensions and pothole count; a [`RepairType`] binds
//! one of the three [`RepairKind`]s to a road and prices it.

mod repair;
mod road;

pub use repair::{RepairKind, RepairType};
pub use road::Road;
