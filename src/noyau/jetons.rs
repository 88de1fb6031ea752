// src/noyau/jetons.rs

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Forme d’un nombre : chiffres, puis éventuellement '.' et des chiffres.
    /// ".5", "5." ou "1.2.3" n’en sont pas.
    static ref NOMBRE: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
}

/// Jeton typé une fois pour toutes à la tokenisation.
/// Les consommateurs (RPN, évaluation) font un `match`, sans re-tester le texte.
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Littéral tel que tapé (signe unaire inclus) + valeur parsée une seule fois
    Num { texte: String, valeur: f64 },

    // Tampon de chiffres/points qui n’a pas la forme d’un nombre ("1.2.3", ".5").
    // Gardé dans les jetons, ignoré par la RPN.
    Brut(String),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    /// Opérateur binaire (+ - * /), par opposition aux nombres et parenthèses.
    pub fn est_operateur(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash)
    }

    fn depuis_operateur(c: char) -> Option<Tok> {
        match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num { texte, .. } | Tok::Brut(texte) => f.write_str(texte),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Vide le tampon numérique dans `out` (préfixe `-` si un moins unaire attend).
/// Un tampon qui n’a pas la forme d’un nombre (".", ".5", "1.2.3") sort en `Brut`.
fn vider_nombre(out: &mut Vec<Tok>, nombre: &mut String, moins_unaire: &mut bool) {
    if nombre.is_empty() {
        return;
    }

    let texte = if *moins_unaire {
        format!("-{nombre}")
    } else {
        nombre.clone()
    };

    let valeur = if NOMBRE.is_match(&texte) {
        texte.parse::<f64>().ok()
    } else {
        None
    };

    match valeur {
        Some(valeur) => out.push(Tok::Num { texte, valeur }),
        None => {
            log::debug!("littéral mal formé: {texte:?}");
            out.push(Tok::Brut(texte));
        }
    }

    nombre.clear();
    *moins_unaire = false;
}

/// Un '-' est unaire en tête d’expression, après '(' ou après un opérateur.
fn moins_est_unaire(out: &[Tok]) -> bool {
    match out.last() {
        None => true,
        Some(t) => matches!(t, Tok::LPar) || t.est_operateur(),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 12.5)
/// - moins unaire, replié dans le nombre suivant (ex: "-5" -> Num(-5))
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Tout autre caractère (espaces, lettres…) est ignoré, mais termine le nombre en cours.
///
/// NOTE: le drapeau de moins unaire n’est consommé que par un nombre.
/// "-(4)" donne donc ( -4 ), et un '-' sans nombre derrière disparaît.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut nombre = String::new();
    let mut moins_unaire = false;

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        vider_nombre(&mut out, &mut nombre, &mut moins_unaire);

        if c == '-' && moins_est_unaire(&out) {
            moins_unaire = true;
            continue;
        }

        if let Some(op) = Tok::depuis_operateur(c) {
            out.push(op);
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => {}
        }
    }

    vider_nombre(&mut out, &mut nombre, &mut moins_unaire);

    log::trace!("jetons: {}", format_tokens(&out));
    out
}

/// Liste de jetons en texte, séparés par une espace.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
