// src/main.rs
//
// Arbre d’expression — point d’entrée NATIF + WEB (WASM)
// -----------------------------------------------------
// But:
// - NATIF avec FICHIER : banc d’essai en ligne de commande (une expression par ligne)
// - NATIF sans FICHIER : visualiseur eframe::run_native + NativeOptions
// - WEB  (wasm32)      : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

#[cfg(not(target_arch = "wasm32"))]
mod banc;


use app::AppArbre;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Arbre d’expression";

/* ------------------------ Ligne de commande (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    /// Expression infixe -> postfixe -> arbre binaire.
    ///
    /// Sans FICHIER : ouvre le visualiseur.
    #[derive(Parser, Debug)]
    #[command(name = "arbre_expression")]
    #[command(author, version, about, long_about = None)]
    pub struct Args {
        /// Fichier d’expressions infixes, une par ligne
        #[arg(env = "ARBRE_EXPRESSION_FICHIER")]
        pub fichier: Option<PathBuf>,

        /// Dessine aussi chaque arbre et sa valeur exacte
        #[arg(long)]
        pub arbre: bool,

        /// Verbosité du journal (-v info, -vv debug, -vvv trace)
        #[arg(short, long, action = clap::ArgAction::Count)]
        pub verbeux: u8,
    }

    /// RUST_LOG, s’il est défini, l’emporte sur -v.
    pub fn init_journal(verbeux: u8) {
        let niveau = match verbeux {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau));

        // Journal sur stderr : stdout reste réservé au banc.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    }
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;

    let args = cli::Args::parse();
    cli::init_journal(args.verbeux);

    let Some(chemin) = args.fichier else {
        return match lancer_fenetre() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(erreur = %e, "visualiseur");
                eprintln!("erreur: {e}");
                ExitCode::FAILURE
            }
        };
    };

    let options = banc::OptionsBanc { dessin: args.arbre };
    let mut sortie = std::io::stdout().lock();
    match banc::executer_fichier(&chemin, options, &mut sortie) {
        Ok(bilan) => {
            tracing::info!(lignes = bilan.lignes, erreurs = bilan.erreurs, "banc terminé");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(erreur = %e, "banc interrompu");
            eprintln!("erreur: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_fenetre() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppArbre>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppArbre, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppArbre>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
