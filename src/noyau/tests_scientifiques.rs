//! Tests scientifiques (campagne) : scénarios de référence + invariants algébriques.
//!
//! Tout est comparé par égalité EXACTE (rationnels canoniques), jamais à epsilon près.

use std::time::{Duration, Instant};

use super::jetons::lire_rationnel;
use super::operations::{additionner, multiplier, soustraire};
use super::*;

fn mat(lignes: &[&[&str]]) -> Matrice {
    let valeurs = lignes
        .iter()
        .map(|l| {
            l.iter()
                .map(|s| lire_rationnel(s).unwrap_or_else(|e| panic!("littéral {s:?}: {e}")))
                .collect()
        })
        .collect();
    Matrice::depuis_lignes(valeurs).unwrap_or_else(|e| panic!("matrice invalide: {e}"))
}

fn r(s: &str) -> Rationnel {
    lire_rationnel(s).unwrap()
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn scenario_1_somme() {
    let a = mat(&[&["1", "2"], &["3", "4"]]);
    let b = mat(&[&["5", "6"], &["7", "8"]]);
    assert_eq!(additionner(&a, &b).unwrap(), mat(&[&["6", "8"], &["10", "12"]]));
}

#[test]
fn scenario_2_determinant() {
    let a = mat(&[&["1", "2"], &["3", "4"]]);
    assert_eq!(determinant(&a).unwrap(), r("-2"));
}

#[test]
fn scenario_3_inverse_diagonale() {
    let a = mat(&[&["2", "0"], &["0", "2"]]);
    let attendu = mat(&[&["1/2", "0"], &["0", "1/2"]]);
    let (adj, _) = inverser(&a, MethodeInversion::Adjointe).unwrap();
    let (gj, _) = inverser(&a, MethodeInversion::GaussJordan).unwrap();
    assert_eq!(adj, attendu);
    assert_eq!(gj, attendu);
}

#[test]
fn scenario_4_pivot_nul_asymetrie() {
    let a = mat(&[&["0", "1"], &["1", "0"]]);
    assert_eq!(
        inverser(&a, MethodeInversion::GaussJordan).unwrap_err(),
        ErreurNoyau::PivotNul { ligne: 1 }
    );

    // même système, moteur de réduction : récupéré par échange
    let augmentee = mat(&[&["0", "1", "1", "0"], &["1", "0", "0", "1"]]);
    let (reduite, demarche) = reduire(&augmentee).unwrap();
    assert_eq!(reduite, mat(&[&["1", "0", "0", "1"], &["0", "1", "1", "0"]]));
    assert_eq!(demarche.etapes()[0], "Échanger la ligne 1 avec la ligne 2");
}

#[test]
fn scenario_5_cramer() {
    let augmentee = mat(&[&["2", "1", "5"], &["1", "-1", "1"]]);
    let (x, d) = resoudre_cramer(&augmentee).unwrap();
    assert_eq!(x, vec![r("2"), r("1")]);
    assert!(d.etapes().iter().any(|l| l == "x_1 = det(A_1) / det(A) = -6 / -3 = 2"));
}

#[test]
fn scenario_6_singuliere() {
    let a = mat(&[&["1", "2"], &["2", "4"]]);
    assert_eq!(determinant(&a).unwrap(), r("0"));
    for methode in [MethodeInversion::Adjointe, MethodeInversion::GaussJordan] {
        assert_eq!(inverser(&a, methode).unwrap_err(), ErreurNoyau::Singuliere);
    }
}

/* ------------------------ Invariants ------------------------ */

#[test]
fn soustraire_annule_additionner() {
    let a = mat(&[&["1/3", "-2"], &["0.1", "7/9"]]);
    let b = mat(&[&["5", "1/7"], &["-0.25", "2/3"]]);
    let s = additionner(&a, &b).unwrap();
    assert_eq!(soustraire(&s, &b).unwrap(), a);
}

#[test]
fn identite_determinant_un() {
    for n in 1..=5 {
        assert_eq!(determinant(&Matrice::identite(n)).unwrap(), Rationnel::un(), "n={n}");
    }
}

#[test]
fn ligne_nulle_determinant_zero() {
    let a = mat(&[&["3", "1", "4"], &["0", "0", "0"], &["2", "7", "1"]]);
    assert_eq!(determinant(&a).unwrap(), Rationnel::zero());
}

#[test]
fn determinant_transposee() {
    let a = mat(&[
        &["1/2", "3", "-1", "0"],
        &["2", "0.5", "4", "1"],
        &["-3", "1", "1/3", "2"],
        &["0", "2", "5", "-1"],
    ]);
    assert_eq!(determinant(&a).unwrap(), determinant(&a.transposee()).unwrap());
}

#[test]
fn inverses_concordantes_4x4() {
    let a = mat(&[
        &["4", "7", "2", "3"],
        &["0", "5", "0", "1"],
        &["1", "0", "3", "0"],
        &["2", "1", "0", "6"],
    ]);
    let (adj, _) = inverser(&a, MethodeInversion::Adjointe).unwrap();
    let (gj, _) = inverser(&a, MethodeInversion::GaussJordan).unwrap();
    assert_eq!(adj, gj);
    let (p, _) = multiplier(&a, &adj).unwrap();
    assert_eq!(p, Matrice::identite(4));
}

#[test]
fn cramer_egale_gauss_jordan() {
    let systemes = [
        mat(&[&["2", "1", "5"], &["1", "-1", "1"]]),
        mat(&[&["2", "1", "-1", "8"], &["-3", "-1", "2", "-11"], &["-2", "1", "2", "-3"]]),
        mat(&[&["0.5", "1/3", "1"], &["0.2", "-1", "0"]]),
        mat(&[&["0", "2", "4"], &["3", "0", "9"]]),
    ];
    for s in &systemes {
        let (x_cramer, _) = resoudre_cramer(s).unwrap();
        let (reduite, _) = reduire(s).unwrap();
        assert_eq!(x_cramer, solutions(&reduite), "système:\n{}", s.rendu());
    }
}

#[test]
fn reduction_idempotente() {
    let s = mat(&[&["1", "2", "-1", "3"], &["2", "-1", "3", "1/2"], &["0", "4", "1", "-2"]]);
    let (une_fois, _) = reduire(&s).unwrap();
    let (deux_fois, _) = reduire(&une_fois).unwrap();
    assert_eq!(une_fois, deux_fois);
}

#[test]
fn decimal_jamais_approche() {
    // 0.1 × 3 = 0.3 exactement ; inverse de [[0.1]] = [[10]]
    let a = mat(&[&["0.1"]]);
    let (p, _) = produit(&[Operande::Scalaire(r("3")), Operande::Matrice(a.clone())]).unwrap();
    assert_eq!(p, Operande::Matrice(mat(&[&["0.3"]])));
    let (inv, _) = inverser(&a, MethodeInversion::GaussJordan).unwrap();
    assert_eq!(inv, mat(&[&["10"]]));
}

#[test]
fn inverse_de_hilbert_entiere() {
    // Hilbert 4×4 : inverse à coefficients entiers, piège classique des flottants.
    let start = Instant::now();
    let h = Matrice::depuis_lignes(
        (1..=4i64)
            .map(|i| {
                (1..=4i64)
                    .map(|j| Rationnel::fraction(1, i + j - 1).unwrap())
                    .collect()
            })
            .collect(),
    )
    .unwrap();

    let (inv, _) = inverser(&h, MethodeInversion::Adjointe).unwrap();
    assert!(inv.valeurs().iter().flatten().all(Rationnel::est_entier));
    assert_eq!(inv.get(0, 0), &r("16"));
    assert_eq!(inv.get(3, 3), &r("2800"));

    let (gj, _) = inverser(&h, MethodeInversion::GaussJordan).unwrap();
    assert_eq!(inv, gj);
    budget(start, Duration::from_secs(5));
}
