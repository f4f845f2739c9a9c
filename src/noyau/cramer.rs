// src/noyau/cramer.rs
//
// Règle de Cramer sur une matrice augmentée [A | b] (n lignes, n+1 colonnes) :
//   x_i = det(A_i) / det(A), A_i = A dont la colonne i est remplacée par b.

use super::demarche::Demarche;
use super::determinant::determinant;
use super::erreur::{ErreurNoyau, ResultatNoyau};
use super::matrice::Matrice;
use super::rationnel::Rationnel;

pub fn resoudre_cramer(augmentee: &Matrice) -> ResultatNoyau<(Vec<Rationnel>, Demarche)> {
    let n = augmentee.lignes();
    if augmentee.colonnes() != n + 1 {
        return Err(ErreurNoyau::DimensionsIncompatibles(format!(
            "la matrice augmentée doit avoir une colonne de plus que de lignes ({}×{})",
            n,
            augmentee.colonnes()
        )));
    }

    let a = augmentee.sous_colonnes(0..n);
    let b = augmentee.colonne(n);

    let det_a = determinant(&a)?;
    if det_a.est_nul() {
        return Err(ErreurNoyau::Singuliere);
    }

    let mut demarche = Demarche::new();
    demarche.ajouter(format!("Déterminant de la matrice des coefficients A : {det_a}"));

    let mut solutions = Vec::with_capacity(n);
    for i in 0..n {
        let a_i = a.remplacer_colonne(i, &b)?;
        let det_a_i = determinant(&a_i)?;
        let x_i = det_a_i.diviser(&det_a)?;

        demarche.ajouter(format!(
            "x_{k} = det(A_{k}) / det(A) = {det_a_i} / {det_a} = {x_i}",
            k = i + 1
        ));
        solutions.push(x_i);
    }

    Ok((solutions, demarche))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(v: &[&[i64]]) -> Matrice {
        Matrice::depuis_lignes(
            v.iter()
                .map(|l| l.iter().map(|&x| Rationnel::from(x)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn systeme_2x2() {
        let (x, d) = resoudre_cramer(&m(&[&[2, 1, 5], &[1, -1, 1]])).unwrap();
        assert_eq!(x, vec![Rationnel::from(2), Rationnel::from(1)]);
        assert_eq!(
            d.etapes(),
            [
                "Déterminant de la matrice des coefficients A : -3",
                "x_1 = det(A_1) / det(A) = -6 / -3 = 2",
                "x_2 = det(A_2) / det(A) = -3 / -3 = 1",
            ]
        );
    }

    #[test]
    fn solution_fractionnaire() {
        // x + y = 1 ; x − y = 0  => x = y = 1/2
        let (x, _) = resoudre_cramer(&m(&[&[1, 1, 1], &[1, -1, 0]])).unwrap();
        let demi = Rationnel::fraction(1, 2).unwrap();
        assert_eq!(x, vec![demi.clone(), demi]);
    }

    #[test]
    fn forme_invalide() {
        assert!(matches!(
            resoudre_cramer(&m(&[&[1, 2], &[3, 4]])),
            Err(ErreurNoyau::DimensionsIncompatibles(_))
        ));
    }

    #[test]
    fn systeme_singulier() {
        assert_eq!(
            resoudre_cramer(&m(&[&[1, 2, 3], &[2, 4, 6]])).unwrap_err(),
            ErreurNoyau::Singuliere
        );
    }
}
