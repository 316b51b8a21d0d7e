//! Noyau — évaluation + pipeline d’analyse
//!
//! tokenize -> postfixe -> arbre -> parcours -> valeur exacte
//!
//! Le pipeline est partagé par la vue (eframe) et le banc d’essai.

use num_rational::BigRational;
use num_traits::Zero;

use super::arbre::ArbreExpression;
use super::construction::build_tree;
use super::erreur::ErreurExpression;
use super::format::{format_arbre, format_valeur};
use super::jetons::{format_jetons, tokenize, Operateur};
use super::noeud::Noeud;
use super::postfixe::to_postfix;

/// Résultat complet d’une analyse (tout en texte, prêt à afficher).
#[derive(Clone, Debug)]
pub struct Analyse {
    pub jetons: String,
    pub postfixe: String,
    pub prefixe: String,
    pub infixe: String,
    pub postfixe_concat: String,
    pub parenthese: String,
    pub dessin: String,
    pub profondeur: usize,
    pub nb_noeuds: usize,
    /// L’arbre peut être valide sans que sa valeur existe (division par zéro, "1.2.3").
    pub valeur: Result<String, ErreurExpression>,
}

/// API publique : construit l’arbre et calcule toutes les vues d’une expression.
pub fn analyser_expression(expr_str: &str) -> Result<Analyse, ErreurExpression> {
    // 1) Jetons
    let jetons = tokenize(expr_str);
    let jetons_txt = format_jetons(&jetons);

    // 2) Postfixe
    let postfixe = to_postfix(&jetons)?;
    let postfixe_txt = format_jetons(&postfixe);

    // 3) Arbre (depuis le postfixe déjà calculé)
    let racine = build_tree(&postfixe)?;
    let arbre = ArbreExpression::depuis_racine(expr_str, racine);

    // 4) Valeur exacte
    let valeur = arbre.evaluer().map(|r| format_valeur(&r));
    if let Err(e) = &valeur {
        tracing::debug!(expr = expr_str, erreur = %e, "valeur indisponible");
    }

    Ok(Analyse {
        jetons: jetons_txt,
        postfixe: postfixe_txt,
        prefixe: arbre.chaine_prefixe(),
        infixe: arbre.chaine_infixe(),
        postfixe_concat: arbre.chaine_postfixe(),
        parenthese: arbre.infixe_parenthese(),
        dessin: arbre.racine().map(format_arbre).unwrap_or_default(),
        profondeur: arbre.profondeur(),
        nb_noeuds: arbre.nb_noeuds(),
        valeur,
    })
}

/// Valeur exacte d’un sous-arbre (rationnels, sans flottants).
pub fn evaluer_noeud(noeud: &Noeud) -> Result<BigRational, ErreurExpression> {
    match noeud {
        Noeud::Feuille(n) => n
            .valeur()
            .ok_or_else(|| ErreurExpression::NombreInvalide(n.texte().to_string())),

        Noeud::Operation { op, gauche, droite } => {
            let a = evaluer_noeud(gauche)?;
            let b = evaluer_noeud(droite)?;
            match op {
                Operateur::Plus => Ok(a + b),
                Operateur::Moins => Ok(a - b),
                Operateur::Fois => Ok(a * b),
                Operateur::Divise => {
                    if b.is_zero() {
                        return Err(ErreurExpression::DivisionParZero);
                    }
                    Ok(a / b)
                }
            }
        }
    }
}
