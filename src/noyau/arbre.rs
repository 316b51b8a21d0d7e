// src/noyau/arbre.rs
//
// Arbre d’expression : racine (optionnelle) + texte infixe d’origine.
// Construit une fois (tokenize -> postfixe -> arbre), immuable ensuite.
//
// NOTE: `==` compare les trois chaînes de parcours (égalité faible : deux arbres de
// formes différentes peuvent coïncider si les valeurs se recollent).
// Pour une comparaison exacte : `structure_egale`.

use num_rational::BigRational;

use std::fmt;

use super::construction::build_tree;
use super::erreur::ErreurExpression;
use super::eval::evaluer_noeud;
use super::format::format_infixe_parenthese;
use super::jetons::tokenize;
use super::noeud::Noeud;
use super::postfixe::to_postfix;

#[derive(Clone, Debug)]
pub struct ArbreExpression {
    racine: Option<Noeud>,
    infixe: String,
}

impl Default for ArbreExpression {
    fn default() -> Self {
        Self::vide()
    }
}

impl ArbreExpression {
    /// Arbre vide (aucune racine, texte vide).
    pub fn vide() -> Self {
        Self {
            racine: None,
            infixe: String::new(),
        }
    }

    /// Construit l’arbre d’une expression infixe.
    pub fn nouveau(infixe: &str) -> Result<Self, ErreurExpression> {
        let jetons = tokenize(infixe);
        let postfixe = to_postfix(&jetons)?;
        let racine = build_tree(&postfixe)?;
        Ok(Self::depuis_racine(infixe, racine))
    }

    /// Assemble un arbre déjà construit (postfixe calculé par l’appelant).
    pub(crate) fn depuis_racine(infixe: &str, racine: Option<Noeud>) -> Self {
        tracing::debug!(
            infixe,
            noeuds = racine.as_ref().map_or(0, Noeud::nb_noeuds),
            "arbre construit"
        );

        Self {
            racine,
            infixe: infixe.to_string(),
        }
    }

    pub fn racine(&self) -> Option<&Noeud> {
        self.racine.as_ref()
    }

    pub fn infixe(&self) -> &str {
        &self.infixe
    }

    pub fn est_vide(&self) -> bool {
        self.racine.is_none()
    }

    /* ------------------------ Parcours ------------------------ */

    pub fn parcours_prefixe(&self) -> Vec<&Noeud> {
        let mut out = Vec::new();
        if let Some(r) = &self.racine {
            r.parcours_prefixe(&mut out);
        }
        out
    }

    pub fn parcours_infixe(&self) -> Vec<&Noeud> {
        let mut out = Vec::new();
        if let Some(r) = &self.racine {
            r.parcours_infixe(&mut out);
        }
        out
    }

    pub fn parcours_postfixe(&self) -> Vec<&Noeud> {
        let mut out = Vec::new();
        if let Some(r) = &self.racine {
            r.parcours_postfixe(&mut out);
        }
        out
    }

    pub fn chaine_prefixe(&self) -> String {
        concatene(&self.parcours_prefixe())
    }

    pub fn chaine_infixe(&self) -> String {
        concatene(&self.parcours_infixe())
    }

    pub fn chaine_postfixe(&self) -> String {
        concatene(&self.parcours_postfixe())
    }

    /// Postfixe lisible, valeurs séparées par des espaces ("2 3 4 * +").
    pub fn postfixe(&self) -> String {
        self.parcours_postfixe()
            .iter()
            .map(|n| n.valeur().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Infixe reconstruit depuis l’arbre, parenthèses minimales selon la précédence.
    pub fn infixe_parenthese(&self) -> String {
        self.racine
            .as_ref()
            .map(format_infixe_parenthese)
            .unwrap_or_default()
    }

    pub fn nb_noeuds(&self) -> usize {
        self.racine.as_ref().map_or(0, Noeud::nb_noeuds)
    }

    pub fn profondeur(&self) -> usize {
        self.racine.as_ref().map_or(0, Noeud::profondeur)
    }

    /// Valeur exacte de l’expression.
    pub fn evaluer(&self) -> Result<BigRational, ErreurExpression> {
        let racine = self.racine.as_ref().ok_or(ErreurExpression::ArbreVide)?;
        evaluer_noeud(racine)
    }

    /// Égalité stricte (valeur + forme).
    pub fn structure_egale(&self, autre: &ArbreExpression) -> bool {
        match (&self.racine, &autre.racine) {
            (Some(a), Some(b)) => a.structure_egale(b),
            (None, None) => true,
            _ => false,
        }
    }
}

fn concatene(noeuds: &[&Noeud]) -> String {
    noeuds.iter().map(|n| n.valeur().to_string()).collect()
}

/// Égalité faible : les trois parcours coïncident.
impl PartialEq for ArbreExpression {
    fn eq(&self, other: &Self) -> bool {
        self.chaine_infixe() == other.chaine_infixe()
            && self.chaine_prefixe() == other.chaine_prefixe()
            && self.chaine_postfixe() == other.chaine_postfixe()
    }
}

impl Eq for ArbreExpression {}

impl fmt::Display for ArbreExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "typeArbre: [ArbreExpression]\ninfixe: [{}]\nprefixe: [{}]\npostfixe: [{}]",
            self.infixe(),
            self.chaine_prefixe(),
            self.chaine_postfixe(),
        )
    }
}
