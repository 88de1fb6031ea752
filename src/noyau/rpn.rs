// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix)
//
// Règles:
// - + - : priorité 1 ; * / : priorité 2
// - tous binaires, associatifs à gauche (on dépile sur >=, pas sur >)
// - pas de validation : parenthèses non appariées => sortie “telle quelle”
// - un littéral mal formé (Brut) est ignoré

use super::jetons::{format_tokens, tokenize, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Plus, Num(4), Star, Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Star, Plus]
///
/// Une '(' jamais fermée reste sur la pile et finit dans la sortie.
/// Une ')' sans '(' vide la pile dans la sortie.
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num { .. } => out.push(tok),

            Tok::Brut(texte) => log::debug!("rpn: littéral ignoré {texte:?}"),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                while let Some(top) = ops.last() {
                    if !top.est_operateur() || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (exclue), puis jette la '('
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    out.push(top);
                }
            }
        }
    }

    // vide la pile ops (LIFO)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    log::trace!("rpn: {}", format_tokens(&out));
    out
}

/// Infixe (texte) -> RPN (texte), jetons séparés par une espace.
pub fn compile(s: &str) -> String {
    format_tokens(&to_rpn(&tokenize(s)))
}
