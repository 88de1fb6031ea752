//! Calculatrice RPN
//!
//! - noyau    : tokenize -> shunting-yard -> pile (f64), sans état
//! - app      : écran + pavé egui (natif + wasm)
//! - reglages : calculatrice.toml

pub mod app;
pub mod noyau;
pub mod reglages;

// API publique minimale
pub use noyau::{compile, evaluate, tokenize};
