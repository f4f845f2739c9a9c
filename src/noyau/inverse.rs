// src/noyau/inverse.rs
//
// Inverse exacte, deux méthodes séparées :
// - Adjointe     : cofacteurs -> transposée (adjointe) -> ÷ det (division exacte)
// - GaussJordan  : [M | I] réduite, pivot nul => PivotNul (pas d’échange)
//
// Dans les deux cas : matrice carrée exigée, puis det ≠ 0 vérifié une seule fois
// avant tout calcul.

use std::str::FromStr;

use super::demarche::Demarche;
use super::determinant::{cofacteur, determinant};
use super::erreur::{ErreurNoyau, ResultatNoyau};
use super::matrice::Matrice;
use super::rationnel::Rationnel;
use super::reduction::{Grille, PolitiquePivot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodeInversion {
    Adjointe,
    GaussJordan,
}

impl MethodeInversion {
    pub fn libelle(self) -> &'static str {
        match self {
            MethodeInversion::Adjointe => "adjointe",
            MethodeInversion::GaussJordan => "gauss-jordan",
        }
    }
}

impl FromStr for MethodeInversion {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "adjointe" | "adjugate" | "adjuncion" => Ok(MethodeInversion::Adjointe),
            "g" | "gauss-jordan" | "gauss" | "elimination" | "élimination" => {
                Ok(MethodeInversion::GaussJordan)
            }
            _ => Err(ErreurNoyau::MethodeInconnue(s.trim().to_string())),
        }
    }
}

/// Point d’entrée : sélecteur de méthode.
pub fn inverser(m: &Matrice, methode: MethodeInversion) -> ResultatNoyau<(Matrice, Demarche)> {
    match methode {
        MethodeInversion::Adjointe => inverse_adjointe(m),
        MethodeInversion::GaussJordan => inverse_gauss_jordan(m),
    }
}

/// Carrée + déterminant non nul (calculé une fois, réutilisé).
fn exiger_inversible(m: &Matrice) -> ResultatNoyau<(usize, Rationnel)> {
    let n = m.exiger_carree()?;
    let det = determinant(m)?;
    if det.est_nul() {
        return Err(ErreurNoyau::Singuliere);
    }
    Ok((n, det))
}

pub fn adjointe(m: &Matrice) -> ResultatNoyau<Matrice> {
    let n = m.exiger_carree()?;
    if n == 1 {
        // mineur vide : convention adj([a]) = [1]
        return Ok(Matrice::identite(1));
    }
    let cofacteurs = (0..n)
        .map(|i| (0..n).map(|j| cofacteur(m, i, j)).collect())
        .collect();
    Ok(Matrice::depuis_grille(cofacteurs).transposee())
}

pub fn inverse_adjointe(m: &Matrice) -> ResultatNoyau<(Matrice, Demarche)> {
    let (_, det) = exiger_inversible(m)?;
    let adj = adjointe(m)?;

    let mut demarche = Demarche::new();
    demarche.ajouter("Étape 1 : calculer la matrice adjointe (transposée des cofacteurs).");
    demarche.ajouter(adj.rendu());
    demarche.ajouter(format!(
        "Étape 2 : diviser chaque élément de l’adjointe par le déterminant {det}."
    ));

    let valeurs = adj
        .valeurs()
        .iter()
        .map(|l| {
            l.iter()
                .map(|x| x.diviser(&det))
                .collect::<ResultatNoyau<Vec<_>>>()
        })
        .collect::<ResultatNoyau<Vec<_>>>()?;
    let inv = Matrice::depuis_grille(valeurs);

    demarche.ajouter("Résultat final :");
    demarche.ajouter(inv.rendu());
    Ok((inv, demarche))
}

pub fn inverse_gauss_jordan(m: &Matrice) -> ResultatNoyau<(Matrice, Demarche)> {
    let (n, _) = exiger_inversible(m)?;

    let mut g = Grille::augmentee_identite(m);
    let mut demarche = Demarche::new();

    demarche.ajouter("Étape 1 : former la matrice augmentée avec la matrice identité.");
    demarche.ajouter(g.rendu_augmente(n));

    for i in 0..n {
        g.assurer_pivot(i, PolitiquePivot::Strict)?;

        let pivot = g.normaliser(i)?;
        demarche.ajouter(format!(
            "Étape {} : rendre le pivot {pivot} égal à 1 en divisant la ligne {}.",
            i + 2,
            i + 1
        ));
        demarche.ajouter(g.rendu_augmente(n));

        for j in (0..n).filter(|&j| j != i) {
            g.eliminer(j, i, i);
            demarche.ajouter(format!(
                "Réduire la ligne {} à l’aide de la ligne {}.",
                j + 1,
                i + 1
            ));
            demarche.ajouter(g.rendu_augmente(n));
        }
    }

    let inv = g.en_matrice().sous_colonnes(n..2 * n);
    demarche.ajouter("Résultat final :");
    demarche.ajouter(inv.rendu());
    Ok((inv, demarche))
}
