//! Noyau RPN
//!
//! Organisation interne :
//! - jetons.rs : tokenisation (moins unaire replié dans les nombres)
//! - rpn.rs    : shunting-yard (infixe -> postfix)
//! - eval.rs   : pipeline complet + pile de valeurs
//! - format.rs : arrondi + texte écran

pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_expression, evaluate};
pub use jetons::tokenize;
pub use rpn::compile;
