// src/noyau/determinant.rs
//
// Déterminant par développement de Laplace sur la première ligne :
//   det(M) = Σ_c (−1)^c · M[0][c] · det(mineur(M, 0, c))
//
// Coût factoriel assumé (petites matrices saisies à la main) : la démarche
// produite fait partie du contrat. Aucun flottant : le résultat alimente des
// divisions exactes (inverse, Cramer).

use super::demarche::Demarche;
use super::erreur::ResultatNoyau;
use super::matrice::Matrice;
use super::rationnel::Rationnel;

pub fn determinant(m: &Matrice) -> ResultatNoyau<Rationnel> {
    m.exiger_carree()?;
    Ok(det_recursif(m))
}

/// Forme déjà vérifiée carrée.
fn det_recursif(m: &Matrice) -> Rationnel {
    if m.lignes() == 1 {
        return m.get(0, 0).clone();
    }

    (0..m.colonnes()).fold(Rationnel::zero(), |acc, c| {
        let a = m.get(0, c);
        if a.est_nul() {
            return acc;
        }
        acc + Rationnel::signe_alterne(c) * a * det_recursif(&m.mineur(0, c))
    })
}

/// Cofacteur C[i][j] = (−1)^(i+j) · det(mineur(M, i, j)). M carrée, n ≥ 2.
pub fn cofacteur(m: &Matrice, i: usize, j: usize) -> Rationnel {
    Rationnel::signe_alterne(i + j) * det_recursif(&m.mineur(i, j))
}

/// Déterminant + démarche du premier niveau de développement.
pub fn determinant_demarche(m: &Matrice) -> ResultatNoyau<(Rationnel, Demarche)> {
    let n = m.exiger_carree()?;
    let mut demarche = Demarche::new();

    if n == 1 {
        let d = m.get(0, 0).clone();
        demarche.ajouter(format!("Matrice 1×1 : det = {d}"));
        return Ok((d, demarche));
    }

    demarche.ajouter("Développement selon la ligne 1 :".to_string());

    let mut total = Rationnel::zero();
    for c in 0..n {
        let signe = Rationnel::signe_alterne(c);
        let a = m.get(0, c);
        let mineur = m.mineur(0, c);
        let det_mineur = det_recursif(&mineur);
        let terme = &signe * a * &det_mineur;

        let signe_txt = if c % 2 == 0 { "+1" } else { "-1" };
        demarche.ajouter(format!(
            "({signe_txt})×{a}×det(M_1,{}) = ({signe_txt})×{a}×{det_mineur} = {terme}",
            c + 1
        ));

        total = total + terme;
    }

    demarche.ajouter(format!("det = {total}"));
    Ok((total, demarche))
}
