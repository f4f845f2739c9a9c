// src/noyau/matrice.rs
//
// Matrice immuable de rationnels exacts.
// - lignes ≥ 1, colonnes ≥ 1, chaque ligne a exactement `colonnes` valeurs
// - 0-indexée ici, 1-indexée dans toutes les démarches
// - aucune mutation observable : chaque opération rend une nouvelle matrice

use std::ops::Range;

use super::erreur::{ErreurNoyau, ResultatNoyau};
use super::rationnel::Rationnel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrice {
    lignes: usize,
    colonnes: usize,
    valeurs: Vec<Vec<Rationnel>>,
}

impl Matrice {
    /// Construit une matrice à partir de valeurs déjà validées par l’appelant.
    /// Toute incohérence de forme => DimensionsIncompatibles.
    pub fn nouvelle(
        lignes: usize,
        colonnes: usize,
        valeurs: Vec<Vec<Rationnel>>,
    ) -> ResultatNoyau<Self> {
        if lignes == 0 || colonnes == 0 {
            return Err(ErreurNoyau::DimensionsIncompatibles(format!(
                "dimensions nulles ({lignes}×{colonnes})"
            )));
        }
        if valeurs.len() != lignes {
            return Err(ErreurNoyau::DimensionsIncompatibles(format!(
                "{} lignes fournies, {lignes} attendues",
                valeurs.len()
            )));
        }
        if let Some((i, ligne)) = valeurs
            .iter()
            .enumerate()
            .find(|(_, l)| l.len() != colonnes)
        {
            return Err(ErreurNoyau::DimensionsIncompatibles(format!(
                "la ligne {} a {} valeurs, {colonnes} attendues",
                i + 1,
                ligne.len()
            )));
        }
        Ok(Self {
            lignes,
            colonnes,
            valeurs,
        })
    }

    /// Forme déduite des lignes (pratique pour les tests et le dispatcher).
    pub fn depuis_lignes(valeurs: Vec<Vec<Rationnel>>) -> ResultatNoyau<Self> {
        let lignes = valeurs.len();
        let colonnes = valeurs.first().map_or(0, Vec::len);
        Self::nouvelle(lignes, colonnes, valeurs)
    }

    /// Construction interne : la forme est garantie par l’algorithme appelant.
    pub(crate) fn depuis_grille(valeurs: Vec<Vec<Rationnel>>) -> Self {
        let lignes = valeurs.len();
        let colonnes = valeurs.first().map_or(0, Vec::len);
        debug_assert!(valeurs.iter().all(|l| l.len() == colonnes));
        Self {
            lignes,
            colonnes,
            valeurs,
        }
    }

    pub fn identite(n: usize) -> Self {
        let valeurs = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { Rationnel::un() } else { Rationnel::zero() })
                    .collect()
            })
            .collect();
        Self::depuis_grille(valeurs)
    }

    /// Copie profonde indépendante.
    pub fn dupliquer(&self) -> Self {
        self.clone()
    }

    pub fn lignes(&self) -> usize {
        self.lignes
    }

    pub fn colonnes(&self) -> usize {
        self.colonnes
    }

    pub fn est_carree(&self) -> bool {
        self.lignes == self.colonnes
    }

    pub fn get(&self, i: usize, j: usize) -> &Rationnel {
        &self.valeurs[i][j]
    }

    pub fn valeurs(&self) -> &[Vec<Rationnel>] {
        &self.valeurs
    }

    /// Copie des valeurs (grille de travail pour les algorithmes).
    pub(crate) fn grille(&self) -> Vec<Vec<Rationnel>> {
        self.valeurs.clone()
    }

    pub fn exiger_carree(&self) -> ResultatNoyau<usize> {
        if self.est_carree() {
            Ok(self.lignes)
        } else {
            Err(ErreurNoyau::NonCarree {
                lignes: self.lignes,
                colonnes: self.colonnes,
            })
        }
    }

    pub fn meme_forme(&self, autre: &Matrice) -> bool {
        self.lignes == autre.lignes && self.colonnes == autre.colonnes
    }

    pub fn transposee(&self) -> Self {
        let valeurs = (0..self.colonnes)
            .map(|j| (0..self.lignes).map(|i| self.valeurs[i][j].clone()).collect())
            .collect();
        Self::depuis_grille(valeurs)
    }

    /// Sous-matrice sans la ligne `ligne` ni la colonne `colonne`.
    /// Exige au moins 2 lignes et 2 colonnes (sinon la forme serait vide).
    pub fn mineur(&self, ligne: usize, colonne: usize) -> Self {
        debug_assert!(self.lignes > 1 && self.colonnes > 1);
        let valeurs = self
            .valeurs
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != ligne)
            .map(|(_, l)| {
                l.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != colonne)
                    .map(|(_, v)| v.clone())
                    .collect()
            })
            .collect();
        Self::depuis_grille(valeurs)
    }

    pub fn colonne(&self, j: usize) -> Vec<Rationnel> {
        self.valeurs.iter().map(|l| l[j].clone()).collect()
    }

    /// Nouvelle matrice dont la colonne `j` est remplacée par `vecteur`.
    pub fn remplacer_colonne(&self, j: usize, vecteur: &[Rationnel]) -> ResultatNoyau<Self> {
        if vecteur.len() != self.lignes || j >= self.colonnes {
            return Err(ErreurNoyau::DimensionsIncompatibles(format!(
                "colonne {} de longueur {} dans une matrice {}×{}",
                j + 1,
                vecteur.len(),
                self.lignes,
                self.colonnes
            )));
        }
        let mut valeurs = self.grille();
        for (ligne, v) in valeurs.iter_mut().zip(vecteur) {
            ligne[j] = v.clone();
        }
        Ok(Self::depuis_grille(valeurs))
    }

    /// Bloc de colonnes `plage` (toutes les lignes).
    pub fn sous_colonnes(&self, plage: Range<usize>) -> Self {
        debug_assert!(plage.start < plage.end && plage.end <= self.colonnes);
        let valeurs = self
            .valeurs
            .iter()
            .map(|l| l[plage.clone()].to_vec())
            .collect();
        Self::depuis_grille(valeurs)
    }
}
