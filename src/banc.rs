// src/banc.rs
//
// Banc d’essai (natif seulement)
// ------------------------------
// Lit un fichier d’expressions infixes (une par ligne) et, pour chaque ligne :
// - affiche l’arbre puis sa racine
// - construit un second arbre indépendant et vérifie l’égalité (attendu : toujours vrai)
//
// Une ligne invalide n’arrête pas le banc ; une erreur d’E/S, si.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::noyau::format::{format_arbre, format_valeur};
use crate::noyau::ArbreExpression;

#[derive(Error, Debug)]
pub enum ErreurBanc {
    #[error("lecture impossible de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source ligne à ligne sans chemin (stdin, mémoire...).
    #[error("lecture impossible de l’entrée: {0}")]
    LectureEntree(#[source] io::Error),

    #[error("écriture impossible: {0}")]
    Ecriture(#[from] io::Error),
}

/// Options d’affichage du banc.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptionsBanc {
    /// Ajoute le dessin de l’arbre et sa valeur exacte.
    pub dessin: bool,
}

/// Bilan d’une exécution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub lignes: usize,
    pub erreurs: usize,
}

pub fn executer_fichier(
    chemin: &Path,
    options: OptionsBanc,
    sortie: &mut impl Write,
) -> Result<Bilan, ErreurBanc> {
    let lecture = |source: io::Error| ErreurBanc::Lecture {
        chemin: chemin.to_path_buf(),
        source,
    };

    let fichier = File::open(chemin).map_err(lecture)?;
    tracing::info!(chemin = %chemin.display(), "banc: ouverture");

    executer(BufReader::new(fichier), options, sortie).map_err(|e| match e {
        // une erreur d’E/S côté entrée porte le chemin
        ErreurBanc::LectureEntree(source) => lecture(source),
        autre => autre,
    })
}

/// Exécute le banc sur n’importe quelle source ligne à ligne.
pub fn executer(
    entree: impl BufRead,
    options: OptionsBanc,
    sortie: &mut impl Write,
) -> Result<Bilan, ErreurBanc> {
    let mut bilan = Bilan::default();

    for ligne in entree.lines() {
        let ligne = ligne.map_err(ErreurBanc::LectureEntree)?;
        let expr = ligne.trim_end_matches('\r');
        if expr.trim().is_empty() {
            continue;
        }

        bilan.lignes += 1;
        if !traiter_ligne(expr, options, sortie)? {
            bilan.erreurs += 1;
        }
    }

    writeln!(sortie)?;
    writeln!(
        sortie,
        "bilan: {} expression(s), {} erreur(s)",
        bilan.lignes, bilan.erreurs
    )?;

    if bilan.erreurs > 0 {
        tracing::warn!(erreurs = bilan.erreurs, "banc: expressions rejetées");
    }
    Ok(bilan)
}

/// Affiche une ligne ; Ok(false) si l’expression est rejetée.
fn traiter_ligne(expr: &str, options: OptionsBanc, sortie: &mut impl Write) -> io::Result<bool> {
    writeln!(sortie)?;
    writeln!(sortie, "expression d’origine: {expr}")?;

    let (arbre, arbre2) = match (ArbreExpression::nouveau(expr), ArbreExpression::nouveau(expr)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(expr, erreur = %e, "banc: expression rejetée");
            writeln!(sortie, "erreur: {e}")?;
            return Ok(false);
        }
    };

    writeln!(sortie, "{arbre}")?;
    match arbre.racine() {
        Some(r) => writeln!(sortie, "{r}")?,
        None => writeln!(sortie, "racine: [aucune]")?,
    }

    let racines_egales = match (arbre.racine(), arbre2.racine()) {
        (Some(a), Some(b)) => a == b,
        _ => arbre.est_vide() && arbre2.est_vide(),
    };
    writeln!(sortie, "arbres egaux = {}", arbre == arbre2)?;
    writeln!(sortie, "racines egales = {racines_egales}")?;
    writeln!(sortie, "structures egales = {}", arbre.structure_egale(&arbre2))?;

    if options.dessin {
        if let Some(r) = arbre.racine() {
            write!(sortie, "{}", format_arbre(r))?;
        }
        match arbre.evaluer() {
            Ok(v) => writeln!(sortie, "valeur = {}", format_valeur(&v))?,
            Err(e) => writeln!(sortie, "valeur indisponible: {e}")?,
        }
    }

    Ok(true)
}
