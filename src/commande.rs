// src/commande.rs
//
// Dispatcher de commandes (hors noyau).
// ------------------------------------
// Rôle :
// - texte saisi -> Requete typée (validation de saisie : nombre d’opérandes,
//   rectangularité, garde-fous de taille)
// - Requete -> noyau -> Reponse (valeur + démarche)
// - aucun état entre deux appels
//
// Saisie :
// - opérandes séparés par une ligne vide
// - lignes d’une matrice : retour à la ligne ou ';'
// - dans un produit, un bloc "k = 3/4" est un scalaire

use tracing::{debug, trace, warn};

use crate::noyau::format::format_solutions;
use crate::noyau::jetons::{decouper_blocs, lire_grille, lire_rationnel};
use crate::noyau::lecture::{matrice_en_decimal, rationnel_en_decimal, solutions_en_decimal};
use crate::noyau::{
    determinant_demarche, difference, inverser, produit, reduire, resoudre_cramer, solutions,
    somme, Demarche, ErreurNoyau, Matrice, MethodeInversion, Operande, Rationnel,
};

/// Garde-fou : taille maximale d’une matrice saisie.
pub const DIMENSION_MAX: usize = 12;

/// Garde-fou : Laplace est factoriel (déterminant, adjointe, Cramer).
pub const DIMENSION_MAX_EXPANSION: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Somme,
    Difference,
    Produit,
    Determinant,
    Inverse,
    GaussJordan,
    Cramer,
}

impl Operation {
    pub const TOUTES: [Operation; 7] = [
        Operation::Somme,
        Operation::Difference,
        Operation::Produit,
        Operation::Determinant,
        Operation::Inverse,
        Operation::GaussJordan,
        Operation::Cramer,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Operation::Somme => "Somme",
            Operation::Difference => "Différence",
            Operation::Produit => "Produit",
            Operation::Determinant => "Déterminant",
            Operation::Inverse => "Inverse",
            Operation::GaussJordan => "Gauss-Jordan",
            Operation::Cramer => "Cramer",
        }
    }

    pub fn aide(self) -> &'static str {
        match self {
            Operation::Somme | Operation::Difference => {
                "Au moins 2 matrices de même taille, séparées par une ligne vide."
            }
            Operation::Produit => {
                "Au moins 2 opérandes séparés par une ligne vide ; un scalaire s’écrit k = 3/4."
            }
            Operation::Determinant | Operation::Inverse => "Une matrice carrée.",
            Operation::GaussJordan => "Une matrice augmentée [A | b] (b en dernière colonne).",
            Operation::Cramer => "Une matrice augmentée [A | b] : n lignes, n+1 colonnes.",
        }
    }

    fn demande_expansion(self) -> bool {
        matches!(
            self,
            Operation::Determinant | Operation::Inverse | Operation::Cramer
        )
    }
}

/// Requête complète, prête pour le noyau.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Requete {
    Somme(Vec<Matrice>),
    Difference(Vec<Matrice>),
    Produit(Vec<Operande>),
    Determinant(Matrice),
    Inverse(Matrice, MethodeInversion),
    GaussJordan(Matrice),
    Cramer(Matrice),
}

impl Requete {
    pub fn operation(&self) -> Operation {
        match self {
            Requete::Somme(_) => Operation::Somme,
            Requete::Difference(_) => Operation::Difference,
            Requete::Produit(_) => Operation::Produit,
            Requete::Determinant(_) => Operation::Determinant,
            Requete::Inverse(..) => Operation::Inverse,
            Requete::GaussJordan(_) => Operation::GaussJordan,
            Requete::Cramer(_) => Operation::Cramer,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resultat {
    Matrice(Matrice),
    Scalaire(Rationnel),
    Solutions(Vec<Rationnel>),
    /// Forme échelonnée réduite + solution lue en dernière colonne.
    Systeme {
        reduite: Matrice,
        solutions: Vec<Rationnel>,
    },
}

impl Resultat {
    /// Rendu EXACT, imprimé tel quel par l’interface.
    pub fn rendu(&self) -> String {
        match self {
            Resultat::Matrice(m) => m.rendu(),
            Resultat::Scalaire(k) => k.to_string(),
            Resultat::Solutions(x) => format_solutions(x),
            Resultat::Systeme { solutions, .. } => format_solutions(solutions),
        }
    }

    /// Lecture décimale tronquée (affichage seulement).
    pub fn lecture(&self, digits: usize) -> String {
        match self {
            Resultat::Matrice(m) => matrice_en_decimal(m, digits),
            Resultat::Scalaire(k) => rationnel_en_decimal(k, digits),
            Resultat::Solutions(x) | Resultat::Systeme { solutions: x, .. } => {
                solutions_en_decimal(x, digits)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reponse {
    pub resultat: Resultat,
    pub demarche: Demarche,
}

/* ------------------------ Texte -> Requete ------------------------ */

fn lire_matrice(bloc: &str, rang: usize) -> Result<Matrice, String> {
    let grille = lire_grille(bloc).map_err(|e| format!("matrice {rang} : {e}"))?;
    let lignes = grille.len();
    let colonnes = grille.first().map_or(0, Vec::len);

    if lignes > DIMENSION_MAX || colonnes > DIMENSION_MAX {
        return Err(format!(
            "matrice {rang} : {lignes}×{colonnes} dépasse la taille maximale {DIMENSION_MAX}×{DIMENSION_MAX}"
        ));
    }

    Matrice::depuis_lignes(grille).map_err(|e| format!("matrice {rang} : {e}"))
}

/// "k = 3/4" -> Some(3/4)
fn lire_scalaire(bloc: &str) -> Option<Result<Rationnel, String>> {
    let (gauche, droite) = bloc.trim().split_once('=')?;
    if !gauche.trim().eq_ignore_ascii_case("k") {
        return None;
    }
    Some(lire_rationnel(droite))
}

fn exiger_au_moins_deux(blocs: &[String], operation: Operation) -> Result<(), String> {
    if blocs.len() < 2 {
        return Err(format!(
            "{} : au moins 2 opérandes sont requis ({} fourni)",
            operation.libelle(),
            blocs.len()
        ));
    }
    Ok(())
}

fn une_seule_matrice(blocs: &[String], operation: Operation) -> Result<Matrice, String> {
    match blocs {
        [bloc] => {
            let m = lire_matrice(bloc, 1)?;
            if operation.demande_expansion()
                && m.lignes().min(m.colonnes()) > DIMENSION_MAX_EXPANSION
            {
                return Err(format!(
                    "{} : au plus {DIMENSION_MAX_EXPANSION} lignes (développement factoriel)",
                    operation.libelle()
                ));
            }
            Ok(m)
        }
        [] => Err("Entrée vide".into()),
        _ => Err(format!(
            "{} : une seule matrice attendue ({} fournies)",
            operation.libelle(),
            blocs.len()
        )),
    }
}

/// Analyse la saisie (validation de saisie, pas d’algèbre).
pub fn analyser(
    operation: Operation,
    methode: MethodeInversion,
    texte: &str,
) -> Result<Requete, String> {
    let blocs = decouper_blocs(texte);
    if blocs.is_empty() {
        return Err("Entrée vide".into());
    }

    let requete = match operation {
        Operation::Somme | Operation::Difference => {
            exiger_au_moins_deux(&blocs, operation)?;
            let matrices = blocs
                .iter()
                .enumerate()
                .map(|(i, b)| lire_matrice(b, i + 1))
                .collect::<Result<Vec<_>, _>>()?;
            if operation == Operation::Somme {
                Requete::Somme(matrices)
            } else {
                Requete::Difference(matrices)
            }
        }

        Operation::Produit => {
            exiger_au_moins_deux(&blocs, operation)?;
            let operandes = blocs
                .iter()
                .enumerate()
                .map(|(i, b)| match lire_scalaire(b) {
                    Some(k) => k
                        .map(Operande::Scalaire)
                        .map_err(|e| format!("scalaire {} : {e}", i + 1)),
                    None => lire_matrice(b, i + 1).map(Operande::Matrice),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Requete::Produit(operandes)
        }

        Operation::Determinant => Requete::Determinant(une_seule_matrice(&blocs, operation)?),
        Operation::Inverse => Requete::Inverse(une_seule_matrice(&blocs, operation)?, methode),
        Operation::GaussJordan => Requete::GaussJordan(une_seule_matrice(&blocs, operation)?),
        Operation::Cramer => Requete::Cramer(une_seule_matrice(&blocs, operation)?),
    };

    Ok(requete)
}

/* ------------------------ Requete -> noyau -> Reponse ------------------------ */

fn executer_noyau(requete: &Requete) -> Result<Reponse, ErreurNoyau> {
    let (resultat, demarche) = match requete {
        Requete::Somme(ms) => {
            let (m, d) = somme(ms)?;
            (Resultat::Matrice(m), d)
        }
        Requete::Difference(ms) => {
            let (m, d) = difference(ms)?;
            (Resultat::Matrice(m), d)
        }
        Requete::Produit(ops) => match produit(ops)? {
            (Operande::Scalaire(k), d) => (Resultat::Scalaire(k), d),
            (Operande::Matrice(m), d) => (Resultat::Matrice(m), d),
        },
        Requete::Determinant(m) => {
            let (det, d) = determinant_demarche(m)?;
            (Resultat::Scalaire(det), d)
        }
        Requete::Inverse(m, methode) => {
            let (inv, d) = inverser(m, *methode)?;
            (Resultat::Matrice(inv), d)
        }
        Requete::GaussJordan(m) => {
            let (reduite, d) = reduire(m)?;
            let x = solutions(&reduite);
            (
                Resultat::Systeme {
                    reduite,
                    solutions: x,
                },
                d,
            )
        }
        Requete::Cramer(m) => {
            let (x, d) = resoudre_cramer(m)?;
            (Resultat::Solutions(x), d)
        }
    };

    Ok(Reponse { resultat, demarche })
}

/// Exécute une requête complète ; l’erreur du noyau remonte telle quelle.
pub fn executer(requete: &Requete) -> Result<Reponse, ErreurNoyau> {
    let operation = requete.operation();
    match executer_noyau(requete) {
        Ok(reponse) => {
            debug!(
                operation = operation.libelle(),
                etapes = reponse.demarche.len(),
                "requête exécutée"
            );
            trace!("démarche :\n{}", reponse.demarche.texte());
            Ok(reponse)
        }
        Err(e) => {
            warn!(operation = operation.libelle(), erreur = %e, "requête refusée par le noyau");
            Err(e)
        }
    }
}

/// Pipeline complet pour l’interface : saisie -> requête -> réponse (erreurs en texte).
pub fn evaluer(
    operation: Operation,
    methode: MethodeInversion,
    texte: &str,
) -> Result<Reponse, String> {
    let requete = analyser(operation, methode, texte).inspect_err(|e| {
        debug!(operation = operation.libelle(), erreur = %e, "saisie invalide");
    })?;
    executer(&requete).map_err(|e| format!("Erreur : {e}"))
}
