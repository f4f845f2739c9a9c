// src/noyau/jetons.rs
//
// Lecture EXACTE des littéraux saisis (jamais de flottant intermédiaire) :
// - entiers          : 12, -3, +7
// - décimaux         : 0.1 -> 1/10, -1.25 -> -5/4, .5 -> 1/2, 3. -> 3
// - fractions        : 3/4, -2/6 -> -1/3, 0.5/3 -> 1/6 (chaque côté peut être décimal)
//
// Découpage d’une saisie de matrice :
// - lignes  : '\n' ou ';'
// - valeurs : espaces ou ','
// - opérandes (chaînes) : blocs séparés par une ligne vide

use num_bigint::BigInt;

use super::rationnel::Rationnel;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// [+-]?chiffres[.chiffres] -> Rationnel exact.
fn lire_decimal(s: &str) -> Result<Rationnel, String> {
    let (negatif, corps) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (entiere, fraction) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    let chiffres_ok = |t: &str| t.bytes().all(|c| c.is_ascii_digit());
    if (entiere.is_empty() && fraction.is_empty()) || !chiffres_ok(entiere) || !chiffres_ok(fraction)
    {
        return Err(format!("nombre invalide: '{s}'"));
    }

    let tous: String = format!("{entiere}{fraction}");
    let mut num = BigInt::parse_bytes(tous.as_bytes(), 10)
        .ok_or_else(|| format!("nombre invalide: '{s}'"))?;
    if negatif {
        num = -num;
    }

    Rationnel::reduire(num, pow10(fraction.len())).map_err(|e| e.to_string())
}

/// Littéral exact : entier, décimal ou fraction p/q.
pub fn lire_rationnel(s: &str) -> Result<Rationnel, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("nombre vide".into());
    }

    match s.split_once('/') {
        None => lire_decimal(s),
        Some((p, q)) => {
            let p = lire_decimal(p.trim())?;
            let q = lire_decimal(q.trim())?;
            if q.est_nul() {
                return Err("division par zéro dans une fraction".into());
            }
            p.diviser(&q).map_err(|e| e.to_string())
        }
    }
}

/// Une ligne de valeurs ("1 2/3, -0.5").
pub fn lire_ligne(s: &str) -> Result<Vec<Rationnel>, String> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(lire_rationnel)
        .collect()
}

/// Grille de valeurs (lignes : '\n' ou ';'). Les lignes vides sont ignorées.
/// La rectangularité est vérifiée par l’appelant (Matrice::nouvelle).
pub fn lire_grille(bloc: &str) -> Result<Vec<Vec<Rationnel>>, String> {
    bloc.split(['\n', ';'])
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .map(|(i, l)| lire_ligne(l).map_err(|e| format!("ligne {} : {e}", i + 1)))
        .collect()
}

/// Découpe une saisie en blocs séparés par au moins une ligne vide.
pub fn decouper_blocs(texte: &str) -> Vec<String> {
    let mut blocs = Vec::new();
    let mut courant: Vec<&str> = Vec::new();

    for ligne in texte.lines() {
        if ligne.trim().is_empty() {
            if !courant.is_empty() {
                blocs.push(courant.join("\n"));
                courant.clear();
            }
        } else {
            courant.push(ligne);
        }
    }
    if !courant.is_empty() {
        blocs.push(courant.join("\n"));
    }

    blocs
}
