// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::noeud::Noeud;

/* ------------------------ Helpers rationnels ------------------------ */

/// p/q réduit, ou p si entier.
pub fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Écriture décimale exacte si le dénominateur n’a que des facteurs 2 et 5
/// (ex: 13/4 -> "3.25"), sinon None (ex: 1/3).
pub fn format_decimal_exact(r: &BigRational) -> Option<String> {
    let mut d = r.denom().clone();
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut n2 = 0usize;
    let mut n5 = 0usize;
    while (&d % &deux).is_zero() {
        d /= &deux;
        n2 += 1;
    }
    while (&d % &cinq).is_zero() {
        d /= &cinq;
        n5 += 1;
    }
    if !d.is_one() {
        return None;
    }

    let digits = n2.max(n5);
    let scale = BigInt::from(10).pow(digits as u32);
    let scaled = (r.numer() * &scale) / r.denom();

    let neg = scaled.is_negative();
    let abs = scaled.abs();
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let signe = if neg { "-" } else { "" };
    if digits == 0 {
        return Some(format!("{signe}{int_part}"));
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    Some(format!("{signe}{int_part}.{frac}"))
}

/// Affichage d’une valeur : décimal si possible, sinon fraction.
pub fn format_valeur(r: &BigRational) -> String {
    format_decimal_exact(r).unwrap_or_else(|| format_rat_pretty(r))
}

/* ------------------------ Arbre -> texte ------------------------ */

/// Parcours infixe avec parenthèses minimales.
/// - gauche entre parenthèses si précédence strictement plus faible
/// - droite entre parenthèses si précédence plus faible OU égale (associativité à gauche)
pub fn format_infixe_parenthese(noeud: &Noeud) -> String {
    match noeud {
        Noeud::Feuille(n) => n.to_string(),
        Noeud::Operation { op, gauche, droite } => {
            let p = op.precedence();

            let g = format_infixe_parenthese(gauche);
            let g = match gauche.as_ref() {
                Noeud::Operation { op: og, .. } if og.precedence() < p => format!("({g})"),
                _ => g,
            };

            let d = format_infixe_parenthese(droite);
            let d = match droite.as_ref() {
                Noeud::Operation { op: od, .. } if od.precedence() <= p => format!("({d})"),
                _ => d,
            };

            format!("{g} {op} {d}")
        }
    }
}

/// Dessin indenté de l’arbre (une valeur par ligne, gauche avant droite).
///
/// ```text
/// +
/// ├── 2
/// └── *
///     ├── 3
///     └── 4
/// ```
pub fn format_arbre(racine: &Noeud) -> String {
    let mut out = String::new();
    out.push_str(&racine.valeur().to_string());
    out.push('\n');
    if let Noeud::Operation { gauche, droite, .. } = racine {
        dessine_enfant(gauche, "", false, &mut out);
        dessine_enfant(droite, "", true, &mut out);
    }
    out
}

fn dessine_enfant(noeud: &Noeud, prefixe: &str, dernier: bool, out: &mut String) {
    let branche = if dernier { "└── " } else { "├── " };
    out.push_str(prefixe);
    out.push_str(branche);
    out.push_str(&noeud.valeur().to_string());
    out.push('\n');

    if let Noeud::Operation { gauche, droite, .. } = noeud {
        let suite = format!("{prefixe}{}", if dernier { "    " } else { "│   " });
        dessine_enfant(gauche, &suite, false, out);
        dessine_enfant(droite, &suite, true, out);
    }
}
