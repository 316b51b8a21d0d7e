//! Noyau : expression infixe -> arbre binaire
//!
//! Organisation interne :
//! - jetons.rs       : tokenisation (nombres décimaux, + - * /, parenthèses)
//! - postfixe.rs     : shunting-yard -> postfixe
//! - construction.rs : postfixe -> arbre (pile de nœuds)
//! - noeud.rs        : nœud (feuille / opération), parcours, égalités
//! - arbre.rs        : ArbreExpression (racine + texte d’origine)
//! - format.rs       : affichage (valeurs exactes, infixe parenthésé, dessin)
//! - eval.rs         : valeur exacte + pipeline complet
//! - erreur.rs       : erreurs typées

pub mod arbre;
pub mod construction;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod noeud;
pub mod postfixe;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use arbre::ArbreExpression;
pub use erreur::ErreurExpression;
pub use eval::{analyser_expression, Analyse};
