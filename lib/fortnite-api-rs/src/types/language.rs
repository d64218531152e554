/// Error when a str is not a known option value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid {kind}")]
pub struct InvalidOption {
    /// The kind of option
    pub kind: &'static str,

    /// The rejected value
    pub value: String,
}

impl InvalidOption {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A language supported by the api
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "de")]
    German,
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "es-419")]
    LatinAmericanSpanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt-BR")]
    BrazilianPortuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "zh-CN")]
    SimplifiedChinese,
    #[serde(rename = "zh-Hant")]
    TraditionalChinese,
}

impl Language {
    /// Every supported language
    pub const ALL: [Self; 15] = [
        Self::Arabic,
        Self::German,
        Self::English,
        Self::Spanish,
        Self::LatinAmericanSpanish,
        Self::French,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Polish,
        Self::BrazilianPortuguese,
        Self::Russian,
        Self::Turkish,
        Self::SimplifiedChinese,
        Self::TraditionalChinese,
    ];

    /// Get the language code the api uses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::German => "de",
            Self::English => "en",
            Self::Spanish => "es",
            Self::LatinAmericanSpanish => "es-419",
            Self::French => "fr",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Polish => "pl",
            Self::BrazilianPortuguese => "pt-BR",
            Self::Russian => "ru",
            Self::Turkish => "tr",
            Self::SimplifiedChinese => "zh-CN",
            Self::TraditionalChinese => "zh-Hant",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| InvalidOption::new("language", s))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
