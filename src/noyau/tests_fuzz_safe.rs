//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : expression entièrement parenthésée => même valeur (au bit près)
//!   que l’évaluation récursive de l’arbre qui l’a générée

use std::time::{Duration, Instant};

use super::{compile, evaluate};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arbre de référence ------------------------ */

enum Arbre {
    Feuille(f64, String),
    Bin(char, Box<Arbre>, Box<Arbre>),
}

impl Arbre {
    fn valeur(&self) -> f64 {
        match self {
            Arbre::Feuille(v, _) => *v,
            Arbre::Bin(op, a, b) => {
                let (a, b) = (a.valeur(), b.valeur());
                match op {
                    '+' => a + b,
                    '-' => a - b,
                    '*' => a * b,
                    _ => a / b,
                }
            }
        }
    }

    fn texte(&self, rng: &mut Rng) -> String {
        match self {
            Arbre::Feuille(_, t) => t.clone(),
            Arbre::Bin(op, a, b) => {
                let (ta, tb) = (a.texte(rng), b.texte(rng));
                // espaces aléatoires : le tokenizer doit s’en moquer
                if rng.coin() {
                    format!("({ta} {op} {tb})")
                } else {
                    format!("({ta}{op}{tb})")
                }
            }
        }
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_feuille(rng: &mut Rng) -> Arbre {
    // inclut 0 (utile pour la division par zéro)
    let n = rng.pick(10);
    let (v, t) = match rng.pick(3) {
        0 => {
            let f = rng.pick(100);
            let t = format!("{n}.{f:02}");
            (t.parse::<f64>().unwrap_or(f64::NAN), t)
        }
        _ => (n as f64, format!("{n}")),
    };

    // négatif : uniquement sous la forme "(-x)" (moins unaire après '(')
    if rng.pick(4) == 0 {
        Arbre::Feuille(-v, format!("(-{t})"))
    } else {
        Arbre::Feuille(v, t)
    }
}

fn gen_arbre(rng: &mut Rng, depth: usize) -> Arbre {
    if depth == 0 || rng.pick(5) == 0 {
        return gen_feuille(rng);
    }

    let op = match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    };
    let a = gen_arbre(rng, depth - 1);
    let b = gen_arbre(rng, depth - 1);
    Arbre::Bin(op, Box::new(a), Box::new(b))
}

fn meme_valeur(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeur_egale_arbre_de_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_finis = 0usize;
    let mut vus_speciaux = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let arbre = gen_arbre(&mut rng, 5);
        let expr = arbre.texte(&mut rng);

        let attendu = arbre.valeur();
        let obtenu = evaluate(&expr);

        assert!(
            meme_valeur(attendu, obtenu),
            "expr={expr:?} attendu={attendu} obtenu={obtenu} rpn={:?}",
            compile(&expr)
        );

        if obtenu.is_finite() {
            vus_finis += 1;
        } else {
            vus_speciaux += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_finis > 50, "trop peu de valeurs finies: {vus_finis}");
    assert!(vus_speciaux > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // Même seed => mêmes expressions => mêmes sorties
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        budget(t0, max);

        let e1 = gen_arbre(&mut r1, 4).texte(&mut r1);
        let e2 = gen_arbre(&mut r2, 4).texte(&mut r2);
        assert_eq!(e1, e2);
        assert_eq!(compile(&e1), compile(&e2));
        assert_eq!(evaluate(&e1).to_bits(), evaluate(&e2).to_bits());
    }
}

#[test]
fn fuzz_safe_caracteres_quelconques_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // Entrées mal formées : pas de diagnostic, mais jamais de panique.
    const ALPHABET: &[char] = &[
        '0', '1', '7', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', 'é',
    ];

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let n = rng.pick(24) as usize;
        let expr: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        let _ = compile(&expr);
        let _ = evaluate(&expr);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    // 800*0.5 = 400 (exact en binaire)
    assert_eq!(evaluate(&expr), 400.0);
}
