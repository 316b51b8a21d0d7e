// src/noyau/postfixe.rs
//
// Shunting-yard -> postfixe
// Objectif:
// - Convertir une suite de Jeton (infixe) en postfixe (notation polonaise inversée)
//
// Règles:
// - quatre opérateurs binaires, tous associatifs à gauche
// - '(' sur la pile a la précédence 0 : elle n’est jamais dépilée par un opérateur
// - ')' sans '(' => erreur ; '(' restée ouverte en fin d’entrée => ignorée

use super::erreur::ErreurExpression;
use super::jetons::Jeton;

/// Convertit une suite de jetons en postfixe.
///
/// Exemple:
///   jetons:   [2, +, 3, *, 4]
///   postfixe: [2, 3, 4, *, +]
pub fn to_postfix(tokens: &[Jeton]) -> Result<Vec<Jeton>, ErreurExpression> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Jeton::Nombre(_) => out.push(tok),

            Jeton::ParOuvrante => ops.push(tok),

            Jeton::ParFermante => {
                // dépile jusqu’à '(' (qui est jetée)
                loop {
                    match ops.pop() {
                        Some(Jeton::ParOuvrante) => break,
                        Some(top) => out.push(top),
                        None => {
                            tracing::debug!("')' sans '(' correspondante");
                            return Err(ErreurExpression::ParentheseFermanteOrpheline);
                        }
                    }
                }
            }

            Jeton::Op(op) => {
                // dépile tant que le sommet n’est pas '(' et a une précédence >= :
                // égalité => on dépile d’abord (associativité à gauche)
                while let Some(top) = ops.last() {
                    if matches!(top, Jeton::ParOuvrante) || top.precedence() < op.precedence() {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops (les '(' non fermées disparaissent)
    while let Some(top) = ops.pop() {
        if !matches!(top, Jeton::ParOuvrante) {
            out.push(top);
        }
    }

    Ok(out)
}
