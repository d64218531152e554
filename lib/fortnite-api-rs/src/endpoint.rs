/// An api endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Aes,

    Banners,
    BannerColors,

    Cosmetics,
    NewCosmetics,
    BrCosmetics,
    NewBrCosmetics,
    CosmeticById,
    CosmeticSearch,
    CosmeticSearchAll,
    CosmeticSearchByIds,
    Tracks,
    Cars,
    Instruments,
    Lego,
    LegoKits,

    CreatorCode,

    Map,

    News,
    BrNews,
    StwNews,
    CreativeNews,

    Playlists,
    PlaylistById,

    Shop,
    BrShop,
    BrShopCombined,

    BrStats,
    BrStatsByAccountId,
}

impl Endpoint {
    /// The path template, relative to the api host.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Aes => "/v2/aes",

            Self::Banners => "/v1/banners",
            Self::BannerColors => "/v1/banners/colors",

            Self::Cosmetics => "/v2/cosmetics",
            Self::NewCosmetics => "/v2/cosmetics/new",
            Self::BrCosmetics => "/v2/cosmetics/br",
            Self::NewBrCosmetics => "/v2/cosmetics/br/new",
            Self::CosmeticById => "/v2/cosmetics/br/{cosmetic-id}",
            Self::CosmeticSearch => "/v2/cosmetics/br/search",
            Self::CosmeticSearchAll => "/v2/cosmetics/br/search/all",
            Self::CosmeticSearchByIds => "/v2/cosmetics/br/search/ids",
            Self::Tracks => "/v2/cosmetics/tracks",
            Self::Cars => "/v2/cosmetics/cars",
            Self::Instruments => "/v2/cosmetics/instruments",
            Self::Lego => "/v2/cosmetics/lego",
            Self::LegoKits => "/v2/cosmetics/lego/kits",

            Self::CreatorCode => "/v2/creatorcode",

            Self::Map => "/v1/map",

            Self::News => "/v2/news",
            Self::BrNews => "/v2/news/br",
            Self::StwNews => "/v2/news/stw",
            Self::CreativeNews => "/v2/news/creative",

            Self::Playlists => "/v1/playlists",
            Self::PlaylistById => "/v1/playlists/{playlist-id}",

            Self::Shop => "/v2/shop",
            Self::BrShop => "/v2/shop/br",
            Self::BrShopCombined => "/v2/shop/br/combined",

            Self::BrStats => "/v2/stats/br/v2",
            Self::BrStatsByAccountId => "/v2/stats/br/v2/{accountId}",
        }
    }

    /// The path placeholder token, if this endpoint has one.
    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::CosmeticById => Some("{cosmetic-id}"),
            Self::PlaylistById => Some("{playlist-id}"),
            Self::BrStatsByAccountId => Some("{accountId}"),
            _ => None,
        }
    }

    /// Get the full url template for this endpoint on the given host.
    pub fn url(self, base_url: &str) -> String {
        let mut url = String::with_capacity(base_url.len() + self.path().len());
        url.push_str(base_url);
        url.push_str(self.path());
        url
    }

    /// Get the full url for this endpoint, replacing its placeholder with `value`.
    ///
    /// The value is inserted as-is.
    /// Callers must make sure it is already url-safe.
    /// Endpoints without a placeholder are returned unchanged.
    pub fn url_with(self, base_url: &str, value: &str) -> String {
        let url = self.url(base_url);
        match self.placeholder() {
            Some(placeholder) => url.replace(placeholder, value),
            None => url,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn substitutes_placeholders() {
        assert_eq!(
            Endpoint::CosmeticById.url_with(crate::DEFAULT_BASE_URL, "abc"),
            "https://fortnite-api.com/v2/cosmetics/br/abc"
        );
        assert_eq!(
            Endpoint::PlaylistById.url_with("http://localhost:8080", "Playlist_DefaultSolo"),
            "http://localhost:8080/v1/playlists/Playlist_DefaultSolo"
        );
        assert_eq!(
            Endpoint::BrStatsByAccountId.url_with(crate::DEFAULT_BASE_URL, "4735ce91"),
            "https://fortnite-api.com/v2/stats/br/v2/4735ce91"
        );
    }

    #[test]
    fn no_placeholder_is_unchanged() {
        assert_eq!(
            Endpoint::Map.url_with(crate::DEFAULT_BASE_URL, "ignored"),
            "https://fortnite-api.com/v1/map"
        );
    }

    #[test]
    fn placeholders_are_in_templates() {
        for endpoint in [
            Endpoint::CosmeticById,
            Endpoint::PlaylistById,
            Endpoint::BrStatsByAccountId,
        ] {
            let placeholder = endpoint.placeholder().expect("missing placeholder");
            assert!(endpoint.path().contains(placeholder));
        }
    }
}
