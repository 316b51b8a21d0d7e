// src/noyau/construction.rs
//
// Postfixe -> arbre binaire
// - Nombre    : feuille empilée
// - Opérateur : dépile droite PUIS gauche, empile le nœud Operation
// - Fin       : exactement un nœud => racine ; aucun jeton => arbre vide
//
// Garde-fou : parcours, évaluation et libération de l’arbre sont récursifs
// => profondeur bornée à la construction (MAX_PROFONDEUR), erreur typée au-delà.

use super::erreur::ErreurExpression;
use super::jetons::Jeton;
use super::noeud::Noeud;

/// Profondeur maximale d’un arbre (une feuille seule => 1).
pub const MAX_PROFONDEUR: usize = 1_000;

/// Construit l’arbre à partir d’une suite postfixe.
///
/// `Ok(None)` pour une suite vide (arbre vide), jamais de panique sur une pile trop courte.
pub fn build_tree(postfix: &[Jeton]) -> Result<Option<Noeud>, ErreurExpression> {
    // (nœud, profondeur du sous-arbre)
    let mut pile: Vec<(Noeud, usize)> = Vec::with_capacity(postfix.len() / 2 + 1);

    for tok in postfix {
        match tok {
            Jeton::Nombre(n) => pile.push((Noeud::feuille(n.clone()), 1)),

            Jeton::Op(op) => {
                let disponibles = pile.len();
                let manque = || ErreurExpression::OperandesManquantes {
                    operateur: *op,
                    disponibles,
                };
                let (droite, pd) = pile.pop().ok_or_else(manque)?;
                let (gauche, pg) = pile.pop().ok_or_else(manque)?;

                let profondeur = 1 + pg.max(pd);
                if profondeur > MAX_PROFONDEUR {
                    tracing::debug!(profondeur, "arbre trop profond");
                    return Err(ErreurExpression::TropProfond {
                        max: MAX_PROFONDEUR,
                    });
                }
                pile.push((Noeud::operation(*op, gauche, droite), profondeur));
            }

            Jeton::ParOuvrante | Jeton::ParFermante => {
                return Err(ErreurExpression::ParentheseEnPostfixe)
            }
        }
    }

    if pile.len() > 1 {
        tracing::debug!(restants = pile.len(), "postfixe malformé");
        return Err(ErreurExpression::NoeudsOrphelins {
            restants: pile.len(),
        });
    }
    Ok(pile.pop().map(|(racine, _)| racine))
}
