//! Chess rules engine: board model, legal move generation, game-state
//! classification, alpha-beta search and position strings, with a UCI front
//! end for driving it from a GUI or another engine.

pub mod board;
pub mod config;
pub mod uci;

pub use board::{Board, Color, GameStatus, Move, Piece, PieceKind, Square};
pub use config::EngineConfig;
