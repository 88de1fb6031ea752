// src/noyau/format.rs
//
// Affichage du résultat sur l’écran de la calculatrice.

/* ------------------------ Arrondi ------------------------ */

/// Arrondi à `decimales` chiffres, moitié vers +∞ (comme `Math.round`).
/// NaN et ±∞ traversent sans changement.
pub fn arrondi(valeur: f64, decimales: u32) -> f64 {
    if !valeur.is_finite() {
        return valeur;
    }
    let facteur = 10f64.powi(decimales as i32);
    let x = valeur * facteur;
    // f64::round envoie les moitiés loin de zéro ; Math.round vers +∞
    let mut entier = x.round();
    if x - entier == 0.5 {
        entier += 1.0;
    }
    let r = entier / facteur;
    // le produit peut déborder pour de très grandes valeurs
    if r.is_finite() {
        r
    } else {
        valeur
    }
}

/* ------------------------ Texte écran ------------------------ */

/// Texte écran d’une valeur : `14`, `0.33`, `NaN`, `Infinity`, `-Infinity`.
/// Notation exponentielle hors de [1e-6, 1e21[ : `1e+21`, `1.5e-7`.
pub fn format_resultat(valeur: f64) -> String {
    if valeur.is_nan() {
        return "NaN".to_string();
    }
    if valeur.is_infinite() {
        return if valeur.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // -0 s’affiche 0
    if valeur == 0.0 {
        return "0".to_string();
    }
    let abs = valeur.abs();
    if !(1e-6..1e21).contains(&abs) {
        return format_exposant(valeur);
    }
    format!("{valeur}")
}

/// `{:e}` donne "1e21" / "1.5e-7" ; l’écran attend un signe explicite : "1e+21".
fn format_exposant(valeur: f64) -> String {
    let s = format!("{valeur:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}
