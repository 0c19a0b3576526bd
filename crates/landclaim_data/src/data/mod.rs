//! Core data structures for the Landclaim territory engine.

pub mod building;
pub mod event;
pub mod player;
pub mod point;
