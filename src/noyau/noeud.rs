// src/noyau/noeud.rs
//
// Nœud d’arbre d’expression.
// - Feuille   : opérande (nombre), sans enfant
// - Operation : opérateur, exactement deux enfants possédés (Box)
//
// L’arbre est donc toujours binaire plein : pas de nœud à un seul enfant possible.
//
// Égalité:
// - `==` compare SEULEMENT la valeur du nœud (superficielle)
// - `structure_egale` compare valeur + forme, récursivement

use std::fmt;

use super::jetons::{Nombre, Operateur};

#[derive(Clone, Debug)]
pub enum Noeud {
    Feuille(Nombre),
    Operation {
        op: Operateur,
        gauche: Box<Noeud>,
        droite: Box<Noeud>,
    },
}

/// Valeur portée par un nœud : opérande ou opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Valeur<'a> {
    Operande(&'a Nombre),
    Operateur(Operateur),
}

impl fmt::Display for Valeur<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valeur::Operande(n) => write!(f, "{n}"),
            Valeur::Operateur(op) => write!(f, "{op}"),
        }
    }
}

impl Noeud {
    pub fn feuille(n: Nombre) -> Noeud {
        Noeud::Feuille(n)
    }

    pub fn operation(op: Operateur, gauche: Noeud, droite: Noeud) -> Noeud {
        Noeud::Operation {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    pub fn valeur(&self) -> Valeur<'_> {
        match self {
            Noeud::Feuille(n) => Valeur::Operande(n),
            Noeud::Operation { op, .. } => Valeur::Operateur(*op),
        }
    }

    pub fn gauche(&self) -> Option<&Noeud> {
        match self {
            Noeud::Feuille(_) => None,
            Noeud::Operation { gauche, .. } => Some(gauche.as_ref()),
        }
    }

    pub fn droite(&self) -> Option<&Noeud> {
        match self {
            Noeud::Feuille(_) => None,
            Noeud::Operation { droite, .. } => Some(droite.as_ref()),
        }
    }

    pub fn est_feuille(&self) -> bool {
        matches!(self, Noeud::Feuille(_))
    }

    /// Nom du type de nœud (affichage).
    pub fn type_noeud(&self) -> &'static str {
        if self.est_feuille() {
            "Feuille"
        } else {
            "Operation"
        }
    }

    /// Égalité stricte : même valeur et même forme sur tout le sous-arbre.
    pub fn structure_egale(&self, autre: &Noeud) -> bool {
        match (self, autre) {
            (Noeud::Feuille(a), Noeud::Feuille(b)) => a == b,
            (
                Noeud::Operation {
                    op: op_a,
                    gauche: ga,
                    droite: da,
                },
                Noeud::Operation {
                    op: op_b,
                    gauche: gb,
                    droite: db,
                },
            ) => op_a == op_b && ga.structure_egale(gb) && da.structure_egale(db),
            _ => false,
        }
    }

    /* ------------------------ Parcours ------------------------ */

    /// Préfixe : nœud, gauche, droite.
    pub fn parcours_prefixe<'a>(&'a self, out: &mut Vec<&'a Noeud>) {
        out.push(self);
        if let Noeud::Operation { gauche, droite, .. } = self {
            gauche.parcours_prefixe(out);
            droite.parcours_prefixe(out);
        }
    }

    /// Infixe : gauche, nœud, droite.
    pub fn parcours_infixe<'a>(&'a self, out: &mut Vec<&'a Noeud>) {
        match self {
            Noeud::Feuille(_) => out.push(self),
            Noeud::Operation { gauche, droite, .. } => {
                gauche.parcours_infixe(out);
                out.push(self);
                droite.parcours_infixe(out);
            }
        }
    }

    /// Postfixe : gauche, droite, nœud.
    pub fn parcours_postfixe<'a>(&'a self, out: &mut Vec<&'a Noeud>) {
        if let Noeud::Operation { gauche, droite, .. } = self {
            gauche.parcours_postfixe(out);
            droite.parcours_postfixe(out);
        }
        out.push(self);
    }

    pub fn nb_noeuds(&self) -> usize {
        match self {
            Noeud::Feuille(_) => 1,
            Noeud::Operation { gauche, droite, .. } => 1 + gauche.nb_noeuds() + droite.nb_noeuds(),
        }
    }

    /// Profondeur (une feuille seule => 1).
    pub fn profondeur(&self) -> usize {
        match self {
            Noeud::Feuille(_) => 1,
            Noeud::Operation { gauche, droite, .. } => {
                1 + gauche.profondeur().max(droite.profondeur())
            }
        }
    }
}

/// Égalité superficielle : seule la valeur du nœud compte, pas ses enfants.
impl PartialEq for Noeud {
    fn eq(&self, other: &Self) -> bool {
        self.valeur() == other.valeur()
    }
}

impl Eq for Noeud {}

impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn valeur_enfant(n: Option<&Noeud>) -> String {
            n.map(|n| n.valeur().to_string())
                .unwrap_or_else(|| "aucun".to_string())
        }

        write!(
            f,
            "typeNoeud: [{}]\nvaleur: [{}]\nvaleurGauche: [{}]\nvaleurDroite: [{}]",
            self.type_noeud(),
            self.valeur(),
            valeur_enfant(self.gauche()),
            valeur_enfant(self.droite()),
        )
    }
}
