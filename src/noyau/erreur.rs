// src/noyau/erreur.rs
//
// Erreurs du noyau (construction + évaluation).
// - Chaque pile (opérateurs, nœuds) est dépilée avec contrôle : jamais de panique.
// - Les messages sont destinés à l’utilisateur (UI + banc), donc en clair.

use thiserror::Error;

use super::jetons::Operateur;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurExpression {
    /// ')' sans '(' correspondante sur la pile d’opérateurs.
    #[error("parenthèse fermante sans parenthèse ouvrante")]
    ParentheseFermanteOrpheline,

    /// Opérateur binaire rencontré avec moins de deux opérandes disponibles.
    #[error("opérandes manquantes pour '{operateur}' ({disponibles} disponible(s) sur 2)")]
    OperandesManquantes {
        operateur: Operateur,
        disponibles: usize,
    },

    /// Fin du postfixe avec plusieurs sous-arbres non reliés.
    #[error("expression malformée : {restants} sous-arbres non reliés")]
    NoeudsOrphelins { restants: usize },

    /// Arbre plus profond que la borne de construction.
    #[error("expression trop profonde (plus de {max} niveaux)")]
    TropProfond { max: usize },

    /// Une suite postfixe ne contient jamais de parenthèses.
    #[error("parenthèse inattendue en postfixe")]
    ParentheseEnPostfixe,

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("arbre vide")]
    ArbreVide,
}
