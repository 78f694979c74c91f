//! Simon - Sequence Memory Game

pub mod core;
pub mod game;
pub mod presentation;
pub mod session;
