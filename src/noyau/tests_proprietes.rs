//! Tests de propriétés : tokenisation, postfixe, forme de l’arbre, parcours, égalités,
//! erreurs explicites sur entrée malformée.

use num_rational::BigRational;
use rstest::rstest;

use super::construction::build_tree;
use super::erreur::ErreurExpression;
use super::format::{format_arbre, format_valeur};
use super::jetons::{format_jetons, tokenize, Jeton, Nombre, Operateur};
use super::noeud::{Noeud, Valeur};
use super::postfixe::to_postfix;
use super::{analyser_expression, ArbreExpression};

fn arbre(expr: &str) -> ArbreExpression {
    ArbreExpression::nouveau(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn postfixe_txt(expr: &str) -> String {
    let pf = to_postfix(&tokenize(expr)).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    format_jetons(&pf)
}

fn num(s: &str) -> Jeton {
    Jeton::Nombre(Nombre::new(s))
}

/* ------------------------ Tokenisation ------------------------ */

#[test]
fn jetons_decimaux_multi_caracteres() {
    assert_eq!(
        tokenize("1.5+2.25"),
        vec![num("1.5"), Jeton::Op(Operateur::Plus), num("2.25")]
    );
}

#[test]
fn jetons_bruit_ignore() {
    // espaces, lettres, ^ : silencieusement ignorés
    assert_eq!(
        tokenize(" 12 x^ ( 3 ) "),
        vec![num("12"), Jeton::ParOuvrante, num("3"), Jeton::ParFermante]
    );
    assert!(tokenize("abc ^ %").is_empty());
}

#[test]
fn jetons_plusieurs_points_acceptes() {
    assert_eq!(tokenize("1.2.3"), vec![num("1.2.3")]);
    assert_eq!(Nombre::new("1.2.3").valeur(), None);
}

#[rstest]
#[case("12", 12, 1)]
#[case("1.25", 5, 4)]
#[case(".5", 1, 2)]
#[case("7.", 7, 1)]
#[case("0.10", 1, 10)]
fn nombre_valeur_exacte(#[case] texte: &str, #[case] n: i64, #[case] d: i64) {
    let attendu = BigRational::new(n.into(), d.into());
    assert_eq!(Nombre::new(texte).valeur(), Some(attendu));
}

#[test]
fn nombre_point_seul_invalide() {
    assert_eq!(Nombre::new(".").valeur(), None);
}

/* ------------------------ Postfixe ------------------------ */

#[rstest]
#[case("2+3*4", "2 3 4 * +")]
#[case("8-3-2", "8 3 - 2 -")]
#[case("(2+3)*4", "2 3 + 4 *")]
#[case("1+2*3-4/2", "1 2 3 * + 4 2 / -")]
#[case("8/4/2", "8 4 / 2 /")]
#[case("2*(3+4)*5", "2 3 4 + * 5 *")]
#[case("((1))", "1")]
#[case("1.5+2.25", "1.5 2.25 +")]
fn postfixe_precedence_et_associativite(#[case] infixe: &str, #[case] attendu: &str) {
    assert_eq!(postfixe_txt(infixe), attendu);
}

#[test]
fn postfixe_parenthese_ouverte_restante_ignoree() {
    assert_eq!(postfixe_txt("(2+3"), "2 3 +");
    assert_eq!(postfixe_txt("((2"), "2");
}

#[test]
fn postfixe_parenthese_fermante_orpheline() {
    assert_eq!(
        to_postfix(&tokenize("2+3)")),
        Err(ErreurExpression::ParentheseFermanteOrpheline)
    );
    assert_eq!(
        to_postfix(&tokenize(")")),
        Err(ErreurExpression::ParentheseFermanteOrpheline)
    );
}

/* ------------------------ Construction ------------------------ */

#[test]
fn arbre_precedence_forme() {
    let a = arbre("2+3*4");
    let r = a.racine().expect("racine");

    assert_eq!(r.valeur(), Valeur::Operateur(Operateur::Plus));
    let g = r.gauche().expect("gauche");
    assert!(g.est_feuille());
    assert_eq!(g.valeur().to_string(), "2");

    let d = r.droite().expect("droite");
    assert_eq!(d.valeur(), Valeur::Operateur(Operateur::Fois));
    assert_eq!(d.gauche().map(|n| n.valeur().to_string()).as_deref(), Some("3"));
    assert_eq!(d.droite().map(|n| n.valeur().to_string()).as_deref(), Some("4"));
}

#[test]
fn arbre_vide_sans_jeton() {
    for expr in ["", "   ", "abc"] {
        let a = arbre(expr);
        assert!(a.est_vide(), "expr={expr:?}");
        assert_eq!(a.chaine_prefixe(), "");
        assert_eq!(a.nb_noeuds(), 0);
        assert_eq!(a.evaluer(), Err(ErreurExpression::ArbreVide));
    }
    assert!(ArbreExpression::vide() == arbre(""));
    let defaut = ArbreExpression::default();
    assert!(defaut.est_vide());
    assert_eq!(defaut.infixe(), "");
    assert_eq!(defaut.to_string().lines().nth(1), Some("infixe: []"));
}

#[rstest]
#[case("1+", Operateur::Plus, 1)]
#[case("+", Operateur::Plus, 0)]
#[case("*3", Operateur::Fois, 1)]
fn arbre_operandes_manquantes(
    #[case] expr: &str,
    #[case] operateur: Operateur,
    #[case] disponibles: usize,
) {
    assert_eq!(
        ArbreExpression::nouveau(expr).err(),
        Some(ErreurExpression::OperandesManquantes {
            operateur,
            disponibles
        })
    );
}

#[test]
fn arbre_noeuds_orphelins() {
    assert_eq!(
        ArbreExpression::nouveau("1 2").err(),
        Some(ErreurExpression::NoeudsOrphelins { restants: 2 })
    );
    assert_eq!(
        ArbreExpression::nouveau("(1)(2)(3)").err(),
        Some(ErreurExpression::NoeudsOrphelins { restants: 3 })
    );
}

#[test]
fn construction_refuse_parenthese_en_postfixe() {
    assert_eq!(
        build_tree(&[num("1"), Jeton::ParOuvrante]).err(),
        Some(ErreurExpression::ParentheseEnPostfixe)
    );
}

/* ------------------------ Parcours ------------------------ */

#[test]
fn parcours_feuille_seule() {
    let a = arbre("5");
    assert_eq!(a.chaine_prefixe(), "5");
    assert_eq!(a.chaine_infixe(), "5");
    assert_eq!(a.chaine_postfixe(), "5");
    assert_eq!(a.profondeur(), 1);
}

#[rstest]
#[case("2+3*4", "+2*34", "2+3*4", "234*+")]
#[case("(2+3)*4", "*+234", "2+3*4", "23+4*")]
#[case("8-3-2", "--832", "8-3-2", "83-2-")]
fn parcours_chaines(
    #[case] expr: &str,
    #[case] pre: &str,
    #[case] inf: &str,
    #[case] post: &str,
) {
    let a = arbre(expr);
    assert_eq!(a.chaine_prefixe(), pre);
    assert_eq!(a.chaine_infixe(), inf);
    assert_eq!(a.chaine_postfixe(), post);
}

#[test]
fn parcours_noeuds_dans_l_ordre() {
    let a = arbre("1-2");
    let vals = |v: Vec<&Noeud>| v.iter().map(|n| n.valeur().to_string()).collect::<Vec<_>>();
    assert_eq!(vals(a.parcours_prefixe()), ["-", "1", "2"]);
    assert_eq!(vals(a.parcours_infixe()), ["1", "-", "2"]);
    assert_eq!(vals(a.parcours_postfixe()), ["1", "2", "-"]);
}

#[test]
fn postfixe_depuis_arbre() {
    assert_eq!(arbre("1+2*3-4/2").postfixe(), "1 2 3 * + 4 2 / -");
}

/* ------------------------ Égalités ------------------------ */

#[rstest]
#[case("2+3*4")]
#[case("(1.5 + 2) / (3 - 0.25) * 8")]
#[case("5")]
#[case("")]
fn egalite_idempotente(#[case] expr: &str) {
    let a = arbre(expr);
    let b = arbre(expr);
    assert!(a == b);
    assert!(a.structure_egale(&b));
}

#[test]
fn egalite_faible_infixe_seul_insuffisant() {
    // même parcours infixe, formes différentes : les deux autres parcours tranchent
    let a = arbre("(2+3)*4");
    let b = arbre("2+3*4");
    assert_eq!(a.chaine_infixe(), b.chaine_infixe());
    assert_ne!(a.chaine_prefixe(), b.chaine_prefixe());
    assert!(a != b);
    assert!(!a.structure_egale(&b));
}

#[test]
fn egalite_noeud_superficielle() {
    let a = arbre("1+2");
    let b = arbre("3+4");
    let (ra, rb) = (a.racine().expect("a"), b.racine().expect("b"));
    assert!(ra == rb, "même opérateur => nœuds égaux");
    assert!(!ra.structure_egale(rb));

    assert!(arbre("2+3") != arbre("2*3"));
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn affichage_arbre() {
    let a = arbre("2+3*4");
    assert_eq!(
        a.to_string(),
        "typeArbre: [ArbreExpression]\ninfixe: [2+3*4]\nprefixe: [+2*34]\npostfixe: [234*+]"
    );
}

#[test]
fn affichage_noeud() {
    let a = arbre("2+3*4");
    let r = a.racine().expect("racine");
    assert_eq!(
        r.to_string(),
        "typeNoeud: [Operation]\nvaleur: [+]\nvaleurGauche: [2]\nvaleurDroite: [*]"
    );
    let feuille = r.gauche().expect("gauche");
    assert_eq!(
        feuille.to_string(),
        "typeNoeud: [Feuille]\nvaleur: [2]\nvaleurGauche: [aucun]\nvaleurDroite: [aucun]"
    );
}

#[test]
fn dessin_arbre() {
    let a = arbre("2+3*4");
    let dessin = format_arbre(a.racine().expect("racine"));
    assert_eq!(dessin, "+\n├── 2\n└── *\n    ├── 3\n    └── 4\n");
}

/* ------------------------ Infixe parenthésé + valeur ------------------------ */

#[rstest]
#[case("2+3*4", "2 + 3 * 4", "14")]
#[case("(2+3)*4", "(2 + 3) * 4", "20")]
#[case("8-(3-2)", "8 - (3 - 2)", "7")]
#[case("8-3-2", "8 - 3 - 2", "3")]
#[case("1.5+2.25", "1.5 + 2.25", "3.75")]
#[case("1/3", "1 / 3", "1/3")]
#[case("1+2*3-4/2", "1 + 2 * 3 - 4 / 2", "5")]
fn infixe_parenthese_et_valeur(#[case] expr: &str, #[case] parenthese: &str, #[case] valeur: &str) {
    let a = arbre(expr);
    assert_eq!(a.infixe_parenthese(), parenthese);

    let v = a.evaluer().unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert_eq!(format_valeur(&v), valeur);

    // ré-analyser l’infixe parenthésé redonne la même valeur et la même forme
    let b = arbre(&a.infixe_parenthese());
    assert_eq!(b.evaluer().ok(), Some(v));
    assert!(a.structure_egale(&b));
}

#[test]
fn valeur_erreurs() {
    assert_eq!(arbre("1/(2-2)").evaluer(), Err(ErreurExpression::DivisionParZero));
    assert_eq!(
        arbre("1.2.3+1").evaluer(),
        Err(ErreurExpression::NombreInvalide("1.2.3".into()))
    );
}

/* ------------------------ Pipeline ------------------------ */

#[test]
fn pipeline_analyse() {
    let a = analyser_expression("(2+3)*4").unwrap_or_else(|e| panic!("err={e}"));
    assert_eq!(a.jetons, "( 2 + 3 ) * 4");
    assert_eq!(a.postfixe, "2 3 + 4 *");
    assert_eq!(a.prefixe, "*+234");
    assert_eq!(a.infixe, "2+3*4");
    assert_eq!(a.postfixe_concat, "23+4*");
    assert_eq!(a.parenthese, "(2 + 3) * 4");
    assert_eq!(a.nb_noeuds, 5);
    assert_eq!(a.profondeur, 3);
    assert_eq!(a.valeur, Ok("20".to_string()));
}

#[test]
fn pipeline_erreur_propagee() {
    assert_eq!(
        analyser_expression("(1))").err(),
        Some(ErreurExpression::ParentheseFermanteOrpheline)
    );
    // erreur de construction (après un postfixe valide)
    assert_eq!(
        analyser_expression("1 2").err(),
        Some(ErreurExpression::NoeudsOrphelins { restants: 2 })
    );
}

#[rstest]
#[case("2+3*4")]
#[case("8-3-2")]
#[case("1+2*3-4/2")]
#[case("abc")]
fn pipeline_coherent_avec_arbre(#[case] expr: &str) {
    let an = analyser_expression(expr).unwrap_or_else(|e| panic!("err={e}"));
    let a = arbre(expr);
    assert_eq!(an.postfixe, a.postfixe());
    assert_eq!(an.prefixe, a.chaine_prefixe());
    assert_eq!(an.infixe, a.chaine_infixe());
    assert_eq!(an.nb_noeuds, a.nb_noeuds());
}
