//! src/reglages.rs
//!
//! Réglages de la calculatrice (fichier TOML facultatif).
//!
//! Exemple de `calculatrice.toml` :
//!
//! ```toml
//! decimales = 2
//! demarche = true
//! largeur = 360.0
//! hauteur = 520.0
//! ```
//!
//! Tout champ absent prend sa valeur par défaut. En natif, le fichier est cherché
//! dans `$CALCULATRICE_CONFIG`, sinon `./calculatrice.toml`. En wasm : défauts.

use serde::Deserialize;
use thiserror::Error;

/// Arrondi par défaut sur "=" (deux décimales).
const DECIMALES_DEFAUT: u32 = 2;

/// Garde-fou : au-delà, 10^decimales n’a plus de sens en f64.
const DECIMALES_MAX: u32 = 10;

#[cfg(not(target_arch = "wasm32"))]
const VAR_CHEMIN: &str = "CALCULATRICE_CONFIG";

#[cfg(not(target_arch = "wasm32"))]
const FICHIER_DEFAUT: &str = "calculatrice.toml";

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin} impossible: {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages invalides: {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Décimales gardées par l’arrondi du résultat.
    pub decimales: u32,
    /// Affiche le panneau « Démarche » (jetons + RPN).
    pub demarche: bool,
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            demarche: true,
            largeur: 360.0,
            hauteur: 520.0,
        }
    }
}

impl Reglages {
    /// Parse un texte TOML ; les bornes sont appliquées ici.
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let mut r: Reglages = toml::from_str(texte)?;
        r.decimales = r.decimales.min(DECIMALES_MAX);
        Ok(r)
    }

    /// Lit le fichier de réglages. Fichier absent => défauts.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Result<Self, ErreurReglages> {
        let chemin = std::env::var(VAR_CHEMIN).unwrap_or_else(|_| FICHIER_DEFAUT.to_string());

        let texte = match std::fs::read_to_string(&chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("pas de fichier {chemin}, réglages par défaut");
                return Ok(Self::default());
            }
            Err(source) => return Err(ErreurReglages::Lecture { chemin, source }),
        };

        let r = Self::depuis_toml(&texte)?;
        log::info!("réglages chargés depuis {chemin}: {r:?}");
        Ok(r)
    }

    /// Comme `charger`, mais une erreur est journalisée et remplacée par les défauts.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger_ou_defaut() -> Self {
        Self::charger().unwrap_or_else(|e| {
            log::warn!("{e} ; réglages par défaut");
            Self::default()
        })
    }
}
