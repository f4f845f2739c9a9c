// src/noyau/demarche.rs
//
// Démarche : suite ordonnée d’étapes lisibles, dans l’ordre réel du calcul.
// Ajout seulement (jamais de réordonnancement). Peut être vide.

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    etapes: Vec<String>,
}

impl Demarche {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ajouter(&mut self, etape: impl Into<String>) {
        self.etapes.push(etape.into());
    }

    /// Concatène une sous-démarche (ex: explication d’un produit matriciel dans une chaîne).
    pub fn prolonger(&mut self, autre: Demarche) {
        self.etapes.extend(autre.etapes);
    }

    pub fn etapes(&self) -> &[String] {
        &self.etapes
    }

    pub fn len(&self) -> usize {
        self.etapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.etapes.is_empty()
    }

    /// Texte complet : une étape par ligne (les étapes multi-lignes restent intactes).
    pub fn texte(&self) -> String {
        self.etapes.join("\n")
    }
}
