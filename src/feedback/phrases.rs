use crate::grade::Band;

/// The three slots a band fills: opening, development, closing.
#[derive(Debug)]
pub struct BandPhrases {
    pub intro: &'static [&'static str],
    pub body: &'static [&'static str],
    pub conclusion: &'static [&'static str],
}

pub fn for_band(band: Band) -> &'static BandPhrases {
    match band {
        Band::Excellent => &EXCELLENT,
        Band::Good => &GOOD,
        Band::Average => &AVERAGE,
        Band::Below => &BELOW,
        Band::Poor => &POOR,
    }
}

/// Lead-in for the list of criteria to work on.
pub const IMPROVEMENT_LEAD: &str = "Points à améliorer : ";

/// Prefix of the teacher's own note.
pub const NOTE_PREFIX: &str = "Note personnelle : ";

static EXCELLENT: BandPhrases = BandPhrases {
    intro: &[
        "Excellent travail !",
        "Félicitations pour ce travail de grande qualité !",
        "Bravo, c'est un travail remarquable !",
        "Un travail qui témoigne d'un réel investissement.",
    ],
    body: &[
        "Tu maîtrises parfaitement les concepts abordés.",
        "Ta réflexion est approfondie et bien structurée.",
        "L'argumentation est solide et convaincante.",
        "Tu fais preuve d'une excellente compréhension du sujet.",
    ],
    conclusion: &[
        "Continue sur cette lancée !",
        "C'est exactement ce qui est attendu, voire au-delà.",
        "Un travail qui peut servir d'exemple.",
        "Tes efforts portent leurs fruits, bravo !",
    ],
};

static GOOD: BandPhrases = BandPhrases {
    intro: &[
        "Bon travail dans l'ensemble.",
        "Un travail satisfaisant.",
        "Tu as fourni un travail de bonne qualité.",
        "C'est un travail bien mené.",
    ],
    body: &[
        "Tu as compris l'essentiel des notions.",
        "Ton travail montre une bonne maîtrise du sujet.",
        "L'analyse est pertinente dans sa globalité.",
        "Tu démontres de bonnes capacités de réflexion.",
    ],
    conclusion: &[
        "Quelques approfondissements te permettraient de viser l'excellence.",
        "Avec un peu plus de rigueur, tu peux encore progresser.",
        "Continue à approfondir ton analyse pour aller encore plus loin.",
        "Tu es sur la bonne voie !",
    ],
};

static AVERAGE: BandPhrases = BandPhrases {
    intro: &[
        "Un travail correct qui mérite d'être approfondi.",
        "Tu as fait des efforts, mais le résultat reste moyen.",
        "C'est un travail acceptable, avec des points à améliorer.",
        "Tu as posé les bases, mais il faut aller plus loin.",
    ],
    body: &[
        "Certaines notions semblent comprises, d'autres méritent d'être revues.",
        "L'analyse reste en surface et gagnerait à être développée.",
        "Il y a de bonnes idées, mais elles ne sont pas assez exploitées.",
        "La structure est présente mais le contenu doit être enrichi.",
    ],
    conclusion: &[
        "Je t'encourage à revoir les points essentiels du cours.",
        "N'hésite pas à me solliciter si tu as des questions.",
        "Avec plus de travail, tu peux nettement progresser.",
        "Prends le temps de relire les consignes pour les prochains travaux.",
    ],
};

static BELOW: BandPhrases = BandPhrases {
    intro: &[
        "Ce travail est en dessous des attentes.",
        "Des difficultés importantes sont visibles dans ce travail.",
        "Le travail fourni n'est pas suffisant.",
        "Il y a des lacunes importantes à combler.",
    ],
    body: &[
        "Les notions fondamentales ne semblent pas acquises.",
        "L'analyse est trop superficielle ou hors sujet par endroits.",
        "Il manque des éléments essentiels à la réflexion.",
        "La méthodologie n'est pas respectée.",
    ],
    conclusion: &[
        "Il est important que tu reviennes me voir pour en discuter.",
        "Je te conseille de revoir l'ensemble du cours sur ce chapitre.",
        "Avec un accompagnement ciblé, tu peux remonter la pente.",
        "Ne te décourage pas, mais il faut reprendre les bases.",
    ],
};

static POOR: BandPhrases = BandPhrases {
    intro: &[
        "Ce travail nécessite une reprise complète.",
        "Le travail rendu ne correspond pas aux attentes.",
        "Des efforts importants restent à fournir.",
        "Ce travail reflète des difficultés majeures.",
    ],
    body: &[
        "Les concepts de base ne sont pas maîtrisés.",
        "Le sujet n'a pas été compris ou traité correctement.",
        "Il y a un décalage important entre le travail attendu et ce qui a été fourni.",
        "La méthodologie et les connaissances sont à revoir entièrement.",
    ],
    conclusion: &[
        "Un rendez-vous pour faire le point est nécessaire.",
        "Il faut reprendre le travail depuis le début avec de l'aide.",
        "Je reste disponible pour t'aider à comprendre ce qui n'a pas fonctionné.",
        "Ne reste pas seul(e) face à ces difficultés, viens me voir.",
    ],
};
