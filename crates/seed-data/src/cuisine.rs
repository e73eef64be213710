//! Cuisine catalogue and restaurant name synthesis.
//!
//! Five cuisines carry themed name parts. The remaining ten share
//! [`NameTheme::GENERIC`], which yields names such as `"Restaurant Ortega"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::provider::FakeDataProvider;

/// One of the fifteen cuisines a seeded restaurant may serve.
///
/// Labels are Spanish, matching the feed's audience. The serialised form is
/// the label itself.
///
/// # Example
///
/// ```
/// use seed_data::Cuisine;
///
/// let cuisine: Cuisine = "Tailandesa".parse().expect("known cuisine");
/// assert_eq!(cuisine, Cuisine::Tailandesa);
/// assert_eq!(cuisine.as_str(), "Tailandesa");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    /// Italian.
    Italiana,
    /// Mexican.
    Mexicana,
    /// Japanese.
    Japonesa,
    /// Chinese.
    China,
    /// American.
    Americana,
    /// French.
    Francesa,
    /// Indian.
    India,
    /// Thai.
    Tailandesa,
    /// Mediterranean.
    #[serde(rename = "Mediterránea")]
    Mediterranea,
    /// Spanish.
    #[serde(rename = "Española")]
    Espanola,
    /// Peruvian.
    Peruana,
    /// Korean.
    Coreana,
    /// Vegetarian.
    Vegetariana,
    /// Greek.
    Griega,
    /// Arabic.
    #[serde(rename = "Árabe")]
    Arabe,
}

impl Cuisine {
    /// Every cuisine, in catalogue order.
    pub const ALL: [Self; 15] = [
        Self::Italiana,
        Self::Mexicana,
        Self::Japonesa,
        Self::China,
        Self::Americana,
        Self::Francesa,
        Self::India,
        Self::Tailandesa,
        Self::Mediterranea,
        Self::Espanola,
        Self::Peruana,
        Self::Coreana,
        Self::Vegetariana,
        Self::Griega,
        Self::Arabe,
    ];

    /// Display label stored on the restaurant record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Italiana => "Italiana",
            Self::Mexicana => "Mexicana",
            Self::Japonesa => "Japonesa",
            Self::China => "China",
            Self::Americana => "Americana",
            Self::Francesa => "Francesa",
            Self::India => "India",
            Self::Tailandesa => "Tailandesa",
            Self::Mediterranea => "Mediterránea",
            Self::Espanola => "Española",
            Self::Peruana => "Peruana",
            Self::Coreana => "Coreana",
            Self::Vegetariana => "Vegetariana",
            Self::Griega => "Griega",
            Self::Arabe => "Árabe",
        }
    }

    /// Name parts used when synthesising a restaurant name.
    ///
    /// Cuisines without a themed vocabulary return [`NameTheme::GENERIC`].
    #[must_use]
    pub const fn name_theme(self) -> &'static NameTheme {
        match self {
            Self::Italiana => &ITALIANA,
            Self::Mexicana => &MEXICANA,
            Self::Japonesa => &JAPONESA,
            Self::China => &CHINA,
            Self::Americana => &AMERICANA,
            Self::Francesa
            | Self::India
            | Self::Tailandesa
            | Self::Mediterranea
            | Self::Espanola
            | Self::Peruana
            | Self::Coreana
            | Self::Vegetariana
            | Self::Griega
            | Self::Arabe => &NameTheme::GENERIC,
        }
    }

    /// Picks a cuisine uniformly at random.
    #[must_use]
    pub fn random(provider: &mut dyn FakeDataProvider) -> Self {
        provider
            .pick_index(Self::ALL.len())
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or(Self::Italiana)
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label names no known cuisine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cuisine: {0}")]
pub struct UnknownCuisine(pub String);

impl FromStr for Cuisine {
    type Err = UnknownCuisine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cuisine| cuisine.as_str() == s)
            .ok_or_else(|| UnknownCuisine(s.to_owned()))
    }
}

/// Prefix and suffix vocabulary for one cuisine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTheme {
    /// Words placed before the surname.
    pub prefixes: &'static [&'static str],
    /// Words placed after the surname. An empty string yields no suffix.
    pub suffixes: &'static [&'static str],
}

impl NameTheme {
    /// Theme shared by cuisines without their own vocabulary.
    pub const GENERIC: Self = Self {
        prefixes: &["Restaurant"],
        suffixes: &[""],
    };
}

const ITALIANA: NameTheme = NameTheme {
    prefixes: &["Trattoria", "Pizzería", "Osteria", "Cucina"],
    suffixes: &["Italiano", "Napoli", "Roma", "della Nonna"],
};

const MEXICANA: NameTheme = NameTheme {
    prefixes: &["Taquería", "Cocina", "Fonda", "Antojitos"],
    suffixes: &["Mexicana", "del Barrio", "de la Abuela", "Tradicional"],
};

const JAPONESA: NameTheme = NameTheme {
    prefixes: &["Sushi", "Ramen", "Izakaya", "Teppanyaki"],
    suffixes: &["House", "Bar", "Tokyo", "Zen"],
};

const CHINA: NameTheme = NameTheme {
    prefixes: &["Dragón", "Palacio", "Jardín", "Wok"],
    suffixes: &["Dorado", "Imperial", "de Jade", "Express"],
};

const AMERICANA: NameTheme = NameTheme {
    prefixes: &["Diner", "Burger", "Grill", "Smokehouse"],
    suffixes: &["& Co.", "Joint", "Kitchen", "Bros"],
};

fn pick<'a>(provider: &mut dyn FakeDataProvider, words: &[&'a str]) -> &'a str {
    provider
        .pick_index(words.len())
        .and_then(|index| words.get(index).copied())
        .unwrap_or_default()
}

/// Synthesises a display name of the form `{prefix} {surname} {suffix}`.
///
/// Empty parts are dropped so the result never carries stray whitespace.
///
/// # Example
///
/// ```
/// use seed_data::{Cuisine, FakerProvider, restaurant_name};
///
/// let mut provider = FakerProvider::from_seed(3);
/// let name = restaurant_name(&mut provider, Cuisine::Tailandesa);
/// assert!(name.starts_with("Restaurant "));
/// assert_eq!(name.trim(), name);
/// ```
pub fn restaurant_name(provider: &mut dyn FakeDataProvider, cuisine: Cuisine) -> String {
    let theme = cuisine.name_theme();
    let prefix = pick(provider, theme.prefixes);
    let surname = provider.last_name();
    let suffix = pick(provider, theme.suffixes);

    [prefix, surname.trim(), suffix]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
