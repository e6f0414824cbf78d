//! Rules engine for a timed knight-versus-queens puzzle.
//!
//! A knight hops around a chessboard capturing randomly placed queens before a
//! countdown expires, across a table of increasingly hard levels. The engine is
//! presentation-free: a front end drives [`game::GameController`] and listens
//! through [`observer::GameObserver`].

pub mod board;
pub mod clock;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod levels;
pub mod moves;
pub mod observer;
pub mod placement;
pub mod scoring;
