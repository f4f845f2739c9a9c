// src/noyau/operations.rs
//
// Opérations élémentaires + chaînes (pli gauche → droite).
//
// Démarche d’une chaîne : un bloc par étape
//   <courant>\n<op>\n<opérande>\n=\n<nouveau courant>\n
// Produit matriciel : une ligne par élément, dans l’ordre ligne par ligne :
//   Élément [i,j]: (a×b) + (c×d) = total

use super::demarche::Demarche;
use super::erreur::{ErreurNoyau, ResultatNoyau};
use super::matrice::Matrice;
use super::rationnel::Rationnel;

/// Opérande d’une chaîne de produits : le genre (scalaire / matrice) est porté
/// par la variante, jamais deviné à l’exécution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operande {
    Scalaire(Rationnel),
    Matrice(Matrice),
}

impl Operande {
    pub fn rendu(&self) -> String {
        match self {
            Operande::Scalaire(k) => k.to_string(),
            Operande::Matrice(m) => m.rendu(),
        }
    }
}

/* ------------------------ Paires ------------------------ */

fn exiger_meme_forme(a: &Matrice, b: &Matrice, op: &str) -> ResultatNoyau<()> {
    if a.meme_forme(b) {
        return Ok(());
    }
    Err(ErreurNoyau::DimensionsIncompatibles(format!(
        "{op} d’une {}×{} et d’une {}×{}",
        a.lignes(),
        a.colonnes(),
        b.lignes(),
        b.colonnes()
    )))
}

fn combiner(a: &Matrice, b: &Matrice, f: impl Fn(&Rationnel, &Rationnel) -> Rationnel) -> Matrice {
    let valeurs = a
        .valeurs()
        .iter()
        .zip(b.valeurs())
        .map(|(la, lb)| la.iter().zip(lb).map(|(x, y)| f(x, y)).collect())
        .collect();
    Matrice::depuis_grille(valeurs)
}

pub fn additionner(a: &Matrice, b: &Matrice) -> ResultatNoyau<Matrice> {
    exiger_meme_forme(a, b, "somme")?;
    Ok(combiner(a, b, |x, y| x + y))
}

pub fn soustraire(a: &Matrice, b: &Matrice) -> ResultatNoyau<Matrice> {
    exiger_meme_forme(a, b, "différence")?;
    Ok(combiner(a, b, |x, y| x - y))
}

/// k·M : toujours défini.
pub fn multiplier_scalaire(m: &Matrice, k: &Rationnel) -> Matrice {
    let valeurs = m
        .valeurs()
        .iter()
        .map(|l| l.iter().map(|x| x * k).collect())
        .collect();
    Matrice::depuis_grille(valeurs)
}

/// A (m×n) · B (n×p) avec le développement de chaque élément.
pub fn multiplier(a: &Matrice, b: &Matrice) -> ResultatNoyau<(Matrice, Demarche)> {
    if a.colonnes() != b.lignes() {
        return Err(ErreurNoyau::DimensionsIncompatibles(format!(
            "produit d’une {}×{} par une {}×{} (colonnes de la première ≠ lignes de la seconde)",
            a.lignes(),
            a.colonnes(),
            b.lignes(),
            b.colonnes()
        )));
    }

    let mut demarche = Demarche::new();
    let mut valeurs = Vec::with_capacity(a.lignes());

    for i in 0..a.lignes() {
        let mut ligne = Vec::with_capacity(b.colonnes());
        for j in 0..b.colonnes() {
            let mut total = Rationnel::zero();
            let mut termes = Vec::with_capacity(a.colonnes());
            for k in 0..a.colonnes() {
                let (x, y) = (a.get(i, k), b.get(k, j));
                total = total + x * y;
                termes.push(format!("({x}×{y})"));
            }
            demarche.ajouter(format!(
                "Élément [{},{}]: {} = {total}",
                i + 1,
                j + 1,
                termes.join(" + ")
            ));
            ligne.push(total);
        }
        valeurs.push(ligne);
    }

    Ok((Matrice::depuis_grille(valeurs), demarche))
}

/* ------------------------ Chaînes ------------------------ */

fn bloc(courant: &str, symbole: &str, operande: &str, nouveau: &str) -> String {
    format!("{courant}\n{symbole}\n{operande}\n=\n{nouveau}\n")
}

fn chaine_additive(
    matrices: &[Matrice],
    symbole: &str,
    op: fn(&Matrice, &Matrice) -> ResultatNoyau<Matrice>,
) -> ResultatNoyau<(Matrice, Demarche)> {
    let (premiere, reste) = matrices
        .split_first()
        .ok_or_else(|| ErreurNoyau::DimensionsIncompatibles("aucun opérande".into()))?;

    let mut courant = premiere.dupliquer();
    let mut demarche = Demarche::new();

    for suivante in reste {
        let nouveau = op(&courant, suivante)?;
        demarche.ajouter(bloc(
            &courant.rendu(),
            symbole,
            &suivante.rendu(),
            &nouveau.rendu(),
        ));
        courant = nouveau;
    }

    Ok((courant, demarche))
}

/// M1 + M2 + … (pli gauche).
pub fn somme(matrices: &[Matrice]) -> ResultatNoyau<(Matrice, Demarche)> {
    chaine_additive(matrices, "+", additionner)
}

/// M1 − M2 − … (pli gauche).
pub fn difference(matrices: &[Matrice]) -> ResultatNoyau<(Matrice, Demarche)> {
    chaine_additive(matrices, "-", soustraire)
}

/// Une étape de produit, selon le couple de variantes.
fn produit_paire(
    courant: &Operande,
    suivant: &Operande,
) -> ResultatNoyau<(Operande, &'static str, Demarche)> {
    Ok(match (courant, suivant) {
        (Operande::Scalaire(a), Operande::Scalaire(b)) => {
            (Operande::Scalaire(a * b), "×", Demarche::new())
        }
        (Operande::Scalaire(k), Operande::Matrice(m))
        | (Operande::Matrice(m), Operande::Scalaire(k)) => (
            Operande::Matrice(multiplier_scalaire(m, k)),
            "× scalaire",
            Demarche::new(),
        ),
        (Operande::Matrice(a), Operande::Matrice(b)) => {
            let (p, d) = multiplier(a, b)?;
            (Operande::Matrice(p), "×", d)
        }
    })
}

/// Chaîne mixte scalaires / matrices. Le genre du résultat final est conservé.
pub fn produit(operandes: &[Operande]) -> ResultatNoyau<(Operande, Demarche)> {
    let (premier, reste) = operandes
        .split_first()
        .ok_or_else(|| ErreurNoyau::DimensionsIncompatibles("aucun opérande".into()))?;

    let mut courant = premier.clone();
    let mut demarche = Demarche::new();

    for suivant in reste {
        let (nouveau, symbole, explication) = produit_paire(&courant, suivant)?;
        demarche.prolonger(explication);
        demarche.ajouter(bloc(
            &courant.rendu(),
            symbole,
            &suivant.rendu(),
            &nouveau.rendu(),
        ));
        courant = nouveau;
    }

    Ok((courant, demarche))
}
