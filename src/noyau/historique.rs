// src/noyau/historique.rs

use std::fmt;

/// Une ligne d’historique : "<source> = <résultat>". Immuable une fois créée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    description: String,
}

impl EntreeHistorique {
    pub fn nouvelle(source: &str, resultat: &str) -> Self {
        Self {
            description: format!("{source} = {resultat}"),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for EntreeHistorique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Journal ordonné des calculs terminés.
/// Ajout en fin uniquement (pas de dédoublonnage, pas de limite) ; seul `vider` retire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.push(entree);
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Ordre d’insertion.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    /// Plus récentes d’abord (ordre d’affichage du panneau).
    pub fn iter_recent(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter().rev()
    }
}
