// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use std::fmt;

/// Les quatre opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// `*` `/` => 2 ; `+` `-` => 1.
    /// (Les parenthèses ont la précédence 0, voir `Jeton::precedence`.)
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Plus | Operateur::Moins => 1,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Opérande tel que lu dans le texte (chiffres et points).
///
/// Le lexème est conservé tel quel : "1.2.3" passe la tokenisation,
/// seule la valeur exacte (`valeur`) le refuse.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Nombre {
    texte: String,
}

impl Nombre {
    pub fn new(texte: impl Into<String>) -> Self {
        Self {
            texte: texte.into(),
        }
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Valeur décimale exacte : "1.25" => 5/4, ".5" => 1/2, "7." => 7.
    /// None si plusieurs points ou aucun chiffre.
    pub fn valeur(&self) -> Option<BigRational> {
        let mut morceaux = self.texte.splitn(2, '.');
        let entier = morceaux.next().unwrap_or("");
        let decimales = morceaux.next().unwrap_or("");

        if decimales.contains('.') || (entier.is_empty() && decimales.is_empty()) {
            return None;
        }

        let mut numer = BigInt::zero();
        for c in entier.chars().chain(decimales.chars()) {
            let d = c.to_digit(10)?;
            numer = numer * 10u32 + d;
        }

        let denom = BigInt::from(10u32).pow(decimales.len() as u32);
        Some(BigRational::new(numer, denom))
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texte)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Nombre(Nombre),
    Op(Operateur),
    ParOuvrante,
    ParFermante,
}

impl Jeton {
    /// Précédence sur la pile d’opérateurs ; 0 pour les parenthèses et les nombres.
    pub fn precedence(&self) -> u8 {
        match self {
            Jeton::Op(op) => op.precedence(),
            _ => 0,
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(n) => write!(f, "{n}"),
            Jeton::Op(op) => write!(f, "{op}"),
            Jeton::ParOuvrante => f.write_str("("),
            Jeton::ParFermante => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .25) : chiffres et points consommés d’un bloc
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Tout autre caractère (espaces, lettres, ^, ...) est ignoré : pas d’erreur possible ici.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : lecture gloutonne de [0-9.]+
        if est_car_nombre(c) {
            let start = i;
            while i < chars.len() && est_car_nombre(chars[i]) {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Jeton::Nombre(Nombre::new(texte)));
            continue;
        }

        match c {
            '(' => out.push(Jeton::ParOuvrante),
            ')' => out.push(Jeton::ParFermante),
            _ => {
                if let Some(op) = Operateur::depuis_char(c) {
                    out.push(Jeton::Op(op));
                }
                // sinon : bruit, on ignore
            }
        }
        i += 1;
    }

    tracing::trace!(entree = s, jetons = out.len(), "tokenisation");
    out
}

fn est_car_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Format utilitaire : liste de jetons séparés par des espaces ("2 3 4 * +").
pub fn format_jetons(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
