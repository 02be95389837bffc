//! Chat domain - single-turn messages answered by the completion provider.

pub mod actions;
pub mod data;

pub use data::*;
