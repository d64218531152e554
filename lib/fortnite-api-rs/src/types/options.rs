use crate::{
    endpoint::Endpoint,
    query::QueryParams,
    types::{
        InvalidOption,
        Language,
    },
    ConfigError,
};

/// Declare a closed set of string values the api accepts for an option.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Get the value the api uses.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    s => Err(InvalidOption::new($kind, s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum! {
    /// The encoding of returned aes keys
    pub enum AesKeyFormat ("key format") {
        Hex => "hex",
        Base64 => "base64",
    }
}

impl Default for AesKeyFormat {
    fn default() -> Self {
        Self::Hex
    }
}

option_enum! {
    /// A cosmetics listing
    pub enum CosmeticType ("cosmetic type") {
        /// Every cosmetic, grouped by kind
        All => "all",
        /// Recently added cosmetics of every kind
        New => "new",
        /// Jam tracks
        Tracks => "tracks",
        Cars => "cars",
        Instruments => "instruments",
        Lego => "lego",
        LegoKits => "lego-kits",
    }
}

impl CosmeticType {
    /// Get the endpoint that lists this kind of cosmetic.
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::All => Endpoint::Cosmetics,
            Self::New => Endpoint::NewCosmetics,
            Self::Tracks => Endpoint::Tracks,
            Self::Cars => Endpoint::Cars,
            Self::Instruments => Endpoint::Instruments,
            Self::Lego => Endpoint::Lego,
            Self::LegoKits => Endpoint::LegoKits,
        }
    }
}

option_enum! {
    /// A game mode that has news
    pub enum NewsMode ("news mode") {
        /// Battle Royale
        Br => "br",
        /// Save the World
        Stw => "stw",
        Creative => "creative",
    }
}

impl NewsMode {
    /// Get the news endpoint for this mode.
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::Br => Endpoint::BrNews,
            Self::Stw => Endpoint::StwNews,
            Self::Creative => Endpoint::CreativeNews,
        }
    }
}

option_enum! {
    /// How search values are compared to cosmetics.
    ///
    /// The api defaults to `Full`.
    pub enum MatchMethod ("match method") {
        Full => "full",
        Contains => "contains",
        Starts => "starts",
        Ends => "ends",
    }
}

option_enum! {
    /// The platform an account name belongs to.
    ///
    /// The api defaults to `Epic`.
    pub enum AccountType ("account type") {
        Epic => "epic",
        /// PlayStation Network
        Psn => "psn",
        /// Xbox Live
        Xbl => "xbl",
    }
}

option_enum! {
    /// The period stats cover.
    ///
    /// The api defaults to `Lifetime`.
    pub enum TimeWindow ("time window") {
        Season => "season",
        Lifetime => "lifetime",
    }
}

option_enum! {
    /// The input whose stats should be rendered to an image
    pub enum StatsImage ("stats image") {
        All => "all",
        KeyboardMouse => "keyboardMouse",
        Gamepad => "gamepad",
        Touch => "touch",
    }
}

/// Search filters for battle royale cosmetics.
///
/// Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CosmeticFilters {
    /// The language of the search values
    pub search_language: Option<Language>,
    pub match_method: Option<MatchMethod>,

    /// The in-game name
    pub name: Option<String>,
    pub description: Option<String>,

    pub cosmetic_type: Option<String>,
    pub display_type: Option<String>,
    pub backend_type: Option<String>,

    pub rarity: Option<String>,
    pub display_rarity: Option<String>,
    pub backend_rarity: Option<String>,

    pub has_series: Option<bool>,
    pub series: Option<String>,
    pub backend_series: Option<String>,

    pub has_set: Option<bool>,
    pub set: Option<String>,
    pub set_text: Option<String>,
    pub backend_set: Option<String>,

    pub has_introduction: Option<bool>,
    pub backend_introduction: Option<u64>,
    pub introduction_chapter: Option<String>,
    pub introduction_season: Option<String>,

    pub has_featured_image: Option<bool>,
    pub has_variants: Option<bool>,
    pub has_gameplay_tags: Option<bool>,
    pub gameplay_tag: Option<String>,
    pub has_meta_tags: Option<bool>,
    pub meta_tag: Option<String>,
    pub has_dynamic_pak_id: Option<bool>,
    pub dynamic_pak_id: Option<String>,

    /// Unix timestamp of when the cosmetic was added
    pub added: Option<u64>,
    /// Unix timestamp, matching cosmetics added since then
    pub added_since: Option<u64>,
    /// Seconds since the cosmetic was last seen
    pub unseen_for: Option<u64>,
    /// Unix timestamp of the last appearance
    pub last_appearance: Option<u64>,
}

impl CosmeticFilters {
    /// Whether no filters are set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(&self, params: &mut QueryParams) {
        params
            .set_opt("searchLanguage", self.search_language.map(Language::as_str))
            .set_opt("matchMethod", self.match_method.map(MatchMethod::as_str))
            .set_opt("name", self.name.as_deref())
            .set_opt("description", self.description.as_deref())
            .set_opt("type", self.cosmetic_type.as_deref())
            .set_opt("displayType", self.display_type.as_deref())
            .set_opt("backendType", self.backend_type.as_deref())
            .set_opt("rarity", self.rarity.as_deref())
            .set_opt("displayRarity", self.display_rarity.as_deref())
            .set_opt("backendRarity", self.backend_rarity.as_deref())
            .set_bool("hasSeries", self.has_series)
            .set_opt("series", self.series.as_deref())
            .set_opt("backendSeries", self.backend_series.as_deref())
            .set_bool("hasSet", self.has_set)
            .set_opt("set", self.set.as_deref())
            .set_opt("setText", self.set_text.as_deref())
            .set_opt("backendSet", self.backend_set.as_deref())
            .set_bool("hasIntroduction", self.has_introduction)
            .set_u64("backendIntroduction", self.backend_introduction)
            .set_opt("introductionChapter", self.introduction_chapter.as_deref())
            .set_opt("introductionSeason", self.introduction_season.as_deref())
            .set_bool("hasFeaturedImage", self.has_featured_image)
            .set_bool("hasVariants", self.has_variants)
            .set_bool("hasGameplayTags", self.has_gameplay_tags)
            .set_opt("gameplayTag", self.gameplay_tag.as_deref())
            .set_bool("hasMetaTags", self.has_meta_tags)
            .set_opt("metaTag", self.meta_tag.as_deref())
            .set_bool("hasDynamicPakId", self.has_dynamic_pak_id)
            .set_opt("dynamicPakId", self.dynamic_pak_id.as_deref())
            .set_u64("added", self.added)
            .set_u64("addedSince", self.added_since)
            .set_u64("unseenFor", self.unseen_for)
            .set_u64("lastAppearance", self.last_appearance);
    }
}

/// Options for finding a single cosmetic.
///
/// If `id` is set, the cosmetic is looked up directly and `filters` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindCosmeticOptions {
    pub id: Option<String>,
    pub language: Option<Language>,
    pub filters: CosmeticFilters,
}

impl FindCosmeticOptions {
    /// Find a cosmetic by id.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Find the first cosmetic matching some filters.
    pub fn by_filters(filters: CosmeticFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Set the language.
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// Options for finding every matching cosmetic.
///
/// If `ids` is not empty, those cosmetics are looked up and `filters` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCosmeticsOptions {
    pub ids: Vec<String>,
    pub language: Option<Language>,
    pub filters: CosmeticFilters,
}

impl FilterCosmeticsOptions {
    /// Look up many cosmetics by id.
    pub fn by_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Find every cosmetic matching some filters.
    pub fn by_filters(filters: CosmeticFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Set the language.
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// Options for looking up battle royale stats.
///
/// Exactly one of `name` or `id` must be set.
/// `account_type` may only be used with `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsOptions {
    /// The account name
    pub name: Option<String>,
    /// The account id
    pub id: Option<String>,
    pub account_type: Option<AccountType>,
    pub time_window: Option<TimeWindow>,
    pub image: Option<StatsImage>,
}

/// Who to look up stats for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatsTarget<'a> {
    Name(&'a str),
    Id(&'a str),
}

impl StatsOptions {
    /// Look up stats by account name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Look up stats by account id.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the account type.
    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    /// Set the time window.
    pub fn time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = Some(time_window);
        self
    }

    /// Request a rendered image of an input's stats.
    pub fn image(mut self, image: StatsImage) -> Self {
        self.image = Some(image);
        self
    }

    pub(crate) fn target(&self) -> Result<StatsTarget<'_>, ConfigError> {
        match (self.name.as_deref(), self.id.as_deref()) {
            (None, None) => Err(ConfigError::MissingStatsTarget),
            (Some(_), Some(_)) => Err(ConfigError::ConflictingStatsTarget),
            (None, Some(_)) if self.account_type.is_some() => Err(ConfigError::AccountTypeWithId),
            (Some(name), None) => Ok(StatsTarget::Name(name)),
            (None, Some(id)) => Ok(StatsTarget::Id(id)),
        }
    }
}
