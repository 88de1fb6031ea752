//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs f64
//!
//! Remarque : aucune validation. Une pile vide fournit NaN ; une '(' jamais fermée,
//! laissée dans la RPN par to_rpn, tombe dans la branche par défaut (multiplication).

use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// Dépile une valeur ; pile vide => NaN (expression mal formée).
fn depiler(pile: &mut Vec<f64>) -> f64 {
    pile.pop().unwrap_or_else(|| {
        log::debug!("pile de valeurs vide: opérande manquant");
        f64::NAN
    })
}

/// Réduit une suite RPN à une valeur.
///
/// Le premier dépilé est l’opérande de DROITE (empilé en dernier).
pub fn eval_rpn(rpn: &[Tok]) -> f64 {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num { valeur, .. } => pile.push(*valeur),
            op => {
                let second = depiler(&mut pile);
                let premier = depiler(&mut pile);
                let v = match op {
                    Tok::Plus => premier + second,
                    Tok::Minus => premier - second,
                    Tok::Slash => premier / second,
                    // '*' et tout le reste
                    _ => premier * second,
                };
                pile.push(v);
            }
        }
    }

    pile.pop().unwrap_or(f64::NAN)
}

/// API publique : évalue une expression infixe.
pub fn evaluate(expr_str: &str) -> f64 {
    eval_rpn(&to_rpn(&tokenize(expr_str)))
}

/// Même valeur que `evaluate`, plus la démarche (jetons, RPN) pour l’affichage.
pub fn eval_expression(expr_str: &str) -> (f64, DemarcheNoyau) {
    // 1) Jetons
    let jetons = tokenize(expr_str);

    // 2) RPN
    let rpn = to_rpn(&jetons);

    // 3) Pile
    let valeur = eval_rpn(&rpn);

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };

    (valeur, d)
}
