// src/noyau/reduction.rs
//
// Moteur de réduction (Gauss-Jordan) + machinerie d’élimination partagée.
//
// Deux politiques de pivot, volontairement distinctes :
// - Strict  : pivot nul => PivotNul (inverse par Gauss-Jordan)
// - Echange : pivot nul => échange avec la première ligne non nulle en dessous
//             (réduction générale) ; aucune ligne => PivotNul
// Les unifier changerait le comportement observable sur les pivots récupérables.

use super::demarche::Demarche;
use super::erreur::{ErreurNoyau, ResultatNoyau};
use super::format::{format_grille, format_grille_augmentee};
use super::matrice::Matrice;
use super::rationnel::Rationnel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolitiquePivot {
    Strict,
    Echange,
}

/// Grille de travail mutable, privée à un algorithme (jamais exposée).
#[derive(Clone, Debug)]
pub(crate) struct Grille {
    lignes: Vec<Vec<Rationnel>>,
}

impl Grille {
    pub(crate) fn depuis(m: &Matrice) -> Self {
        Self { lignes: m.grille() }
    }

    /// [M | I]
    pub(crate) fn augmentee_identite(m: &Matrice) -> Self {
        let n = m.lignes();
        let lignes = m
            .valeurs()
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let mut l = l.clone();
                l.extend((0..n).map(|j| if i == j { Rationnel::un() } else { Rationnel::zero() }));
                l
            })
            .collect();
        Self { lignes }
    }

    pub(crate) fn nb_lignes(&self) -> usize {
        self.lignes.len()
    }

    pub(crate) fn nb_colonnes(&self) -> usize {
        self.lignes.first().map_or(0, Vec::len)
    }

    pub(crate) fn pivot(&self, i: usize) -> &Rationnel {
        &self.lignes[i][i]
    }

    /// Première ligne sous `i` dont la colonne `i` est non nulle.
    fn chercher_ligne_non_nulle(&self, i: usize) -> Option<usize> {
        (i + 1..self.nb_lignes()).find(|&j| !self.lignes[j][i].est_nul())
    }

    /// Garantit un pivot non nul en (i, i) selon la politique.
    /// Rend Some(j) si la ligne j a été échangée avec i.
    pub(crate) fn assurer_pivot(
        &mut self,
        i: usize,
        politique: PolitiquePivot,
    ) -> ResultatNoyau<Option<usize>> {
        if !self.pivot(i).est_nul() {
            return Ok(None);
        }
        let erreur = ErreurNoyau::PivotNul { ligne: i + 1 };
        match politique {
            PolitiquePivot::Strict => Err(erreur),
            PolitiquePivot::Echange => {
                let j = self.chercher_ligne_non_nulle(i).ok_or(erreur)?;
                self.lignes.swap(i, j);
                Ok(Some(j))
            }
        }
    }

    /// Divise la ligne i par son pivot (qui devient exactement 1). Rend le pivot.
    pub(crate) fn normaliser(&mut self, i: usize) -> ResultatNoyau<Rationnel> {
        let pivot = self.pivot(i).clone();
        self.lignes[i] = self.lignes[i]
            .iter()
            .map(|x| x.diviser(&pivot))
            .collect::<ResultatNoyau<Vec<_>>>()?;
        Ok(pivot)
    }

    /// ligne[cible] -= facteur · ligne[source], facteur = ligne[cible][colonne]. Rend le facteur.
    pub(crate) fn eliminer(&mut self, cible: usize, source: usize, colonne: usize) -> Rationnel {
        let facteur = self.lignes[cible][colonne].clone();
        let nouvelle = self.lignes[cible]
            .iter()
            .zip(&self.lignes[source])
            .map(|(x, s)| x - &(&facteur * s))
            .collect();
        self.lignes[cible] = nouvelle;
        facteur
    }

    pub(crate) fn rendu(&self) -> String {
        format_grille(&self.lignes)
    }

    pub(crate) fn rendu_augmente(&self, coupure: usize) -> String {
        format_grille_augmentee(&self.lignes, coupure)
    }

    pub(crate) fn en_matrice(self) -> Matrice {
        Matrice::depuis_grille(self.lignes)
    }
}

/// Gauss-Jordan général sur une matrice n×m quelconque (échanges permis).
///
/// Colonnes pivots : 0..min(n, m). Le résultat est la forme échelonnée réduite ;
/// pour un système augmenté n×(n+1), la dernière colonne porte la solution.
pub fn reduire(m: &Matrice) -> ResultatNoyau<(Matrice, Demarche)> {
    let mut g = Grille::depuis(m);
    let mut demarche = Demarche::new();
    let pivots = g.nb_lignes().min(g.nb_colonnes());

    for i in 0..pivots {
        if let Some(j) = g.assurer_pivot(i, PolitiquePivot::Echange)? {
            demarche.ajouter(format!("Échanger la ligne {} avec la ligne {}", i + 1, j + 1));
        }

        let pivot = g.normaliser(i)?;
        demarche.ajouter(format!("Diviser la ligne {} par {pivot}", i + 1));

        for j in (0..g.nb_lignes()).filter(|&j| j != i) {
            let facteur = g.eliminer(j, i, i);
            demarche.ajouter(format!(
                "Soustraire {facteur} fois la ligne {} de la ligne {}",
                i + 1,
                j + 1
            ));
        }
    }

    demarche.ajouter("Résultat final :".to_string());
    demarche.ajouter(g.rendu());
    Ok((g.en_matrice(), demarche))
}

/// Solution lue dans la dernière colonne (x_i = ligne i).
pub fn solutions(reduite: &Matrice) -> Vec<Rationnel> {
    reduite.colonne(reduite.colonnes() - 1)
}
