//! Editorial reference tables: curated vocabulary, stopwords, topical themes
//! and cover artwork. They are plain data, read-only once built, and can be
//! replaced wholesale from configuration.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Bien-être général";
pub const DEFAULT_COVER: &str = "/covers/general.png";

/// Phrases that are relevant whenever they appear, in priority order.
///
/// Spelling variants are separate entries; nothing is matched fuzzily.
const CURATED_VOCABULARY: &[&str] = &[
    "stress",
    "anxiété",
    "anxiete",
    "angoisse",
    "burn-out",
    "burnout",
    "épuisement",
    "charge mentale",
    "émotions",
    "émotion",
    "respiration",
    "sommeil",
    "confiance en soi",
    "estime de soi",
    "bienveillance",
    "communication",
    "conflit",
    "management",
    "leadership",
    "télétravail",
    "qvct",
    "risques psychosociaux",
    "harcèlement",
    "motivation",
    "sophrologie",
    "méditation",
    "pleine conscience",
    "résilience",
    "équilibre",
];

const FRENCH_STOPWORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "de", "du", "au", "aux",
    "et", "ou", "mais", "donc", "or", "ni", "car", "que", "qui", "quoi", "dont", "où",
    "ce", "cet", "cette", "ces", "ça", "cela", "ceci", "c'est", "c'était",
    "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses",
    "notre", "nos", "votre", "vos", "leur", "leurs",
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles",
    "me", "te", "se", "moi", "toi", "lui", "eux", "en", "y",
    "ne", "pas", "plus", "moins", "très", "trop", "peu", "beaucoup",
    "tout", "tous", "toute", "toutes", "autre", "autres", "même", "mêmes",
    "avec", "sans", "pour", "par", "sur", "sous", "dans", "entre", "vers", "chez",
    "est", "sont", "être", "été", "était", "étaient", "sera", "serait",
    "avoir", "ai", "as", "avons", "avez", "ont", "avait", "avaient", "eu",
    "j'ai", "qu'il", "qu'elle", "qu'on", "n'est", "n'a", "s'il",
    "fait", "faire", "fais", "faut", "peut", "peuvent", "dit", "dire",
    "comme", "aussi", "alors", "bien", "encore", "quand", "comment", "pourquoi",
    "parce", "puis", "ensuite", "voilà", "voila", "oui", "non", "si",
    "chose", "choses", "fois", "vraiment", "juste", "ici", "là",
    "euh", "ben", "bon", "hein", "bref",
];

/// Topic label and trigger phrases, in declaration order.
const THEMES: &[(&str, &[&str])] = &[
    (
        "Stress & émotions",
        &["stress", "anxiété", "anxiete", "angoisse", "émotion", "emotion", "respiration", "peur", "colère", "tristesse"],
    ),
    (
        "Burn-out & épuisement",
        &["burn-out", "burnout", "épuisement", "epuisement", "charge mentale", "fatigue", "surmenage"],
    ),
    (
        "Relations au travail",
        &["conflit", "équipe", "manager", "hiérarchie", "communication", "collègue", "collaboration"],
    ),
    (
        "Leadership & management",
        &["leadership", "management", "leader", "feedback", "délégation", "décision"],
    ),
    (
        "Sommeil & récupération",
        &["sommeil", "insomnie", "repos", "récupération", "sieste"],
    ),
    (
        "Qualité de vie au travail",
        &["qvct", "qualité de vie", "télétravail", "équilibre", "bien-être au travail"],
    ),
];

const COVERS: &[(&str, &str)] = &[
    ("Stress & émotions", "/covers/emotions.png"),
    ("Burn-out & épuisement", "/covers/burnout.png"),
    ("Relations au travail", "/covers/relations.png"),
    ("Leadership & management", "/covers/leadership.png"),
    ("Sommeil & récupération", "/covers/sommeil.png"),
    ("Qualité de vie au travail", "/covers/qvct.png"),
    (DEFAULT_CATEGORY, DEFAULT_COVER),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary(pub Vec<String>);

impl Default for Vocabulary {
    fn default() -> Self {
        Self(owned(CURATED_VOCABULARY))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stopwords(pub HashSet<String>);

impl Default for Stopwords {
    fn default() -> Self {
        Self(FRENCH_STOPWORDS.iter().map(|s| s.to_string()).collect())
    }
}

impl Stopwords {
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub label: String,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLexicon {
    pub themes: Vec<Theme>,
    pub default_category: String,
}

impl Default for ThemeLexicon {
    fn default() -> Self {
        Self {
            themes: THEMES
                .iter()
                .map(|(label, phrases)| Theme {
                    label: label.to_string(),
                    phrases: owned(phrases),
                })
                .collect(),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverEntry {
    pub category: String,
    pub asset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverTable {
    pub entries: Vec<CoverEntry>,
    pub default_asset: String,
}

impl Default for CoverTable {
    fn default() -> Self {
        Self {
            entries: COVERS
                .iter()
                .map(|(category, asset)| CoverEntry {
                    category: category.to_string(),
                    asset: asset.to_string(),
                })
                .collect(),
            default_asset: DEFAULT_COVER.to_string(),
        }
    }
}
