//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’écran de la calculatrice (tampon de caractères) et la démarche
//! du dernier calcul.
//!
//! Contrat : `appliquer_touche` reçoit l’écran courant et rend le nouvel écran.
//! Le noyau ne lit ni n’écrit jamais l’écran lui-même.

use crate::noyau::eval_expression;
use crate::noyau::format::{arrondi, format_resultat};
use crate::reglages::Reglages;

/// Touche du pavé (ou équivalent clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre, '.', opérateur ou parenthèse : ajouté tel quel.
    Caractere(char),
    /// C : vide l’écran.
    Effacer,
    /// = : remplace l’écran par le résultat arrondi.
    Resultat,
}

/// Nouvel écran après une touche.
pub fn appliquer_touche(ecran: &str, touche: Touche, decimales: u32) -> String {
    match touche {
        Touche::Caractere(c) => {
            let mut s = ecran.to_string();
            s.push(c);
            s
        }
        Touche::Effacer => String::new(),
        Touche::Resultat => {
            let v = crate::noyau::evaluate(ecran);
            format_resultat(arrondi(v, decimales))
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub expression: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran (tampon) ---
    pub ecran: String,

    // --- démarche du dernier "=" ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’écran après un clic sur un bouton.
    pub focus_ecran: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            ecran: String::new(),
            demarche: Demarche::default(),
            reglages,
            focus_ecran: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /// Applique une touche à l’écran. Sur "=", garde aussi la démarche.
    pub fn touche(&mut self, touche: Touche) {
        if touche == Touche::Resultat {
            let (valeur, d) = eval_expression(&self.ecran);
            log::debug!("{:?} = {valeur} (rpn: {})", self.ecran, d.rpn);
            self.demarche = Demarche {
                expression: self.ecran.clone(),
                jetons: d.jetons,
                rpn: d.rpn,
            };
        }

        // un seul chemin pour l’écran : appliquer_touche
        self.ecran = appliquer_touche(&self.ecran, touche, self.reglages.decimales);
        self.focus_ecran = true;
    }

    /// C : effacer l’écran (la démarche reste).
    pub fn clear_ecran(&mut self) {
        self.touche(Touche::Effacer);
    }
}
