// src/noyau/saisie.rs
//
// Saisie canonique : UNE suite ordonnée de jetons typés.
// -----------------------------------------------------
// L’affichage (ligne principale), l’expression (ligne d’aperçu) et la forme
// évaluable sont tous dérivés de cette suite : ils ne peuvent pas diverger.
//
// Invariants:
// - jamais deux opérateurs { + - × ÷ * / } consécutifs en fin de suite
//   (un nouvel opérateur remplace le précédent)
// - `^` n’est jamais posé après un opérateur (ni après un autre `^`)
// - un littéral `Nombre` n’est jamais vide et ne finit jamais par un signe

/// Opérateurs binaires de la calculatrice (glyphes d’affichage inclus).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,   // ×
    Divise, // ÷
    Etoile, // *
    Barre,  // /
}

impl Operateur {
    pub const TOUS: [Operateur; 6] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Etoile,
        Operateur::Barre,
    ];

    /// Glyphe tel qu’affiché.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
            Operateur::Etoile => '*',
            Operateur::Barre => '/',
        }
    }

    /// Glyphe compris par l’évaluateur (× -> *, ÷ -> /).
    pub fn symbole_evaluable(self) -> char {
        match self {
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            _ => self.symbole(),
        }
    }

    pub fn depuis_symbole(s: &str) -> Option<Operateur> {
        let mut it = s.chars();
        let c = it.next()?;
        if it.next().is_some() {
            return None;
        }
        Self::TOUS.into_iter().find(|op| op.symbole() == c)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JetonSaisie {
    /// Littéral tel que tapé ou produit par un calcul ("12", "0.", "1.2.3", "NaN"…).
    Nombre(String),
    Operateur(Operateur),
    Puissance,
    ParOuvrante,
    ParFermante,
}

impl JetonSaisie {
    fn ecrire(&self, out: &mut String, evaluable: bool) {
        match self {
            JetonSaisie::Nombre(lit) => out.push_str(lit),
            JetonSaisie::Operateur(op) if evaluable => out.push(op.symbole_evaluable()),
            JetonSaisie::Operateur(op) => out.push(op.symbole()),
            JetonSaisie::Puissance => out.push('^'),
            JetonSaisie::ParOuvrante => out.push('('),
            JetonSaisie::ParFermante => out.push(')'),
        }
    }
}

/// Suite canonique des jetons saisis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    jetons: Vec<JetonSaisie>,
}

impl Saisie {
    /// Saisie réduite à une valeur calculée (résultat, constante, anomalie).
    pub fn depuis_valeur(texte: impl Into<String>) -> Self {
        let texte = texte.into();
        if texte.is_empty() {
            return Self::default();
        }
        Self {
            jetons: vec![JetonSaisie::Nombre(texte)],
        }
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    pub fn jetons(&self) -> &[JetonSaisie] {
        &self.jetons
    }

    /// Texte lisible (glyphes × ÷ conservés).
    pub fn texte(&self) -> String {
        self.rendre(false)
    }

    /// Texte soumis à l’évaluateur (× ÷ normalisés).
    pub fn texte_evaluable(&self) -> String {
        self.rendre(true)
    }

    fn rendre(&self, evaluable: bool) -> String {
        let mut out = String::new();
        for j in &self.jetons {
            j.ecrire(&mut out, evaluable);
        }
        out
    }

    fn dernier_est_operateur(&self) -> bool {
        matches!(self.jetons.last(), Some(JetonSaisie::Operateur(_)))
    }

    /// Chiffre, '.', '(' ou ')'. Retourne false si le caractère n’est pas une touche de saisie.
    ///
    /// Aucun garde-fou sur un second '.' : "1.2.3" sera refusé par l’évaluateur.
    pub fn ajouter_chiffre(&mut self, c: char) -> bool {
        match c {
            '(' => self.jetons.push(JetonSaisie::ParOuvrante),
            ')' => self.jetons.push(JetonSaisie::ParFermante),
            '0'..='9' | '.' => match self.jetons.last_mut() {
                Some(JetonSaisie::Nombre(lit)) => lit.push(c),
                _ => {
                    // saisie vide + '.' : on garde le "0" affiché comme partie entière
                    let lit = if c == '.' && self.jetons.is_empty() {
                        "0.".to_string()
                    } else {
                        c.to_string()
                    };
                    self.jetons.push(JetonSaisie::Nombre(lit));
                }
            },
            _ => return false,
        }
        true
    }

    /// Résolution de chaîne d’opérateurs : un opérateur final est remplacé, jamais doublé.
    /// Saisie vide : le "0" affiché devient l’opérande gauche.
    pub fn ajouter_operateur(&mut self, op: Operateur) {
        if self.dernier_est_operateur() {
            self.jetons.pop();
        } else if self.jetons.is_empty() {
            self.jetons.push(JetonSaisie::Nombre("0".to_string()));
        }
        self.jetons.push(JetonSaisie::Operateur(op));
    }

    /// `^` ignoré après un opérateur ou un autre `^`. Retourne true si posé.
    pub fn ajouter_puissance(&mut self) -> bool {
        if self.dernier_est_operateur() || matches!(self.jetons.last(), Some(JetonSaisie::Puissance))
        {
            return false;
        }
        if self.jetons.is_empty() {
            self.jetons.push(JetonSaisie::Nombre("0".to_string()));
        }
        self.jetons.push(JetonSaisie::Puissance);
        true
    }

    /// Retire le dernier caractère rendu.
    /// Un littéral ne garde jamais un signe ou un 'e' pendant ("1e+2" -> "1", "-5" -> rien).
    pub fn supprimer_dernier(&mut self) {
        let vide = match self.jetons.last_mut() {
            Some(JetonSaisie::Nombre(lit)) => {
                lit.pop();
                let garde = lit.trim_end_matches(['e', 'E', '+', '-']).len();
                lit.truncate(garde);
                lit.is_empty()
            }
            Some(_) => true,
            None => false,
        };
        if vide {
            self.jetons.pop();
        }
    }
}
