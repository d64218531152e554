use crate::{
    endpoint::Endpoint,
    query::{
        build_url,
        QueryParams,
    },
    transport::{
        ReqwestTransport,
        Request,
        Transport,
    },
    types::{
        options::StatsTarget,
        Aes,
        AesKeyFormat,
        AllCosmetics,
        AllNews,
        Banner,
        BannerColor,
        BrCosmetic,
        BrShop,
        CarCosmetic,
        CombinedShop,
        CosmeticType,
        CreatorCode,
        Envelope,
        FilterCosmeticsOptions,
        FindCosmeticOptions,
        FortniteMap,
        InstrumentCosmetic,
        Language,
        LegoCosmetic,
        LegoKit,
        NewBrCosmetics,
        NewCosmetics,
        News,
        NewsMode,
        Playlist,
        Shop,
        Stats,
        StatsOptions,
        TrackCosmetic,
    },
    ApiError,
    ConfigError,
    Error,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// A Fortnite-API client.
///
/// Configuration is fixed at construction,
/// so a client can be cloned and shared between tasks freely.
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
    transport: T,

    /// The api key
    key: Option<Arc<str>>,

    /// The language used when a call does not pick one
    language: Language,

    /// The api host, with no trailing slash
    base_url: Arc<str>,
}

impl Client {
    /// Make a new client with no api key, using english.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Make a new client with an api key, using english.
    pub fn with_key(key: impl Into<Arc<str>>) -> Self {
        Self::builder().key(key).build()
    }

    /// Make a [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Client<T>
where
    T: Transport,
{
    /// The api key, if there is one
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The default language
    pub fn language(&self) -> Language {
        self.language
    }

    /// The api host
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the url for an endpoint.
    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        endpoint.url(&self.base_url)
    }

    /// Make params holding only the effective language.
    fn language_params(&self, language: Option<Language>) -> QueryParams {
        let mut params = QueryParams::new();
        params.set("language", language.unwrap_or(self.language).as_str());
        params
    }

    /// Send a GET request to `url` and unwrap the api envelope.
    ///
    /// `authorization` is only sent when given.
    async fn get<D>(&self, url: String, authorization: Option<Arc<str>>) -> Result<D, Error>
    where
        D: DeserializeOwned,
    {
        debug!(%url, authorized = authorization.is_some(), "sending request");

        let request = Request { url, authorization };
        let response = self.transport.get(&request).await?;
        let envelope: Envelope = serde_json::from_str(&response.body)?;

        if envelope.is_error() {
            let error = ApiError {
                status_code: envelope.status.unwrap_or(response.status),
                message: envelope.error.unwrap_or_default(),
                request_url: request.url,
            };
            debug!(status_code = error.status_code, message = %error.message, "api returned an error");
            return Err(error.into());
        }

        Ok(serde_json::from_value(envelope.data)?)
    }

    /// Get the current aes keys.
    ///
    /// Keys are hex-encoded unless another format is given.
    pub async fn aes(&self, key_format: Option<AesKeyFormat>) -> Result<Aes, Error> {
        let mut params = QueryParams::new();
        params.set("keyFormat", key_format.unwrap_or_default().as_str());
        let url = build_url(&self.endpoint_url(Endpoint::Aes), &params);
        self.get(url, None).await
    }

    /// Get every banner.
    pub async fn banners(&self, language: Option<Language>) -> Result<Vec<Banner>, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::Banners),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get every banner color.
    pub async fn banner_colors(&self) -> Result<Vec<BannerColor>, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::BannerColors),
            &QueryParams::new(),
        );
        self.get(url, None).await
    }

    /// Get a cosmetics listing.
    async fn cosmetics<D>(&self, kind: CosmeticType, language: Option<Language>) -> Result<D, Error>
    where
        D: DeserializeOwned,
    {
        let url = build_url(
            &self.endpoint_url(kind.endpoint()),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get every cosmetic, grouped by kind.
    pub async fn all_cosmetics(&self, language: Option<Language>) -> Result<AllCosmetics, Error> {
        self.cosmetics(CosmeticType::All, language).await
    }

    /// Get recently added cosmetics of every kind.
    pub async fn new_cosmetics(&self, language: Option<Language>) -> Result<NewCosmetics, Error> {
        self.cosmetics(CosmeticType::New, language).await
    }

    /// Get every jam track.
    pub async fn track_cosmetics(
        &self,
        language: Option<Language>,
    ) -> Result<Vec<TrackCosmetic>, Error> {
        self.cosmetics(CosmeticType::Tracks, language).await
    }

    /// Get every car cosmetic.
    pub async fn car_cosmetics(&self, language: Option<Language>) -> Result<Vec<CarCosmetic>, Error> {
        self.cosmetics(CosmeticType::Cars, language).await
    }

    /// Get every instrument cosmetic.
    pub async fn instrument_cosmetics(
        &self,
        language: Option<Language>,
    ) -> Result<Vec<InstrumentCosmetic>, Error> {
        self.cosmetics(CosmeticType::Instruments, language).await
    }

    /// Get every lego cosmetic.
    pub async fn lego_cosmetics(
        &self,
        language: Option<Language>,
    ) -> Result<Vec<LegoCosmetic>, Error> {
        self.cosmetics(CosmeticType::Lego, language).await
    }

    /// Get every lego kit.
    pub async fn lego_kits(&self, language: Option<Language>) -> Result<Vec<LegoKit>, Error> {
        self.cosmetics(CosmeticType::LegoKits, language).await
    }

    /// Get every battle royale cosmetic.
    pub async fn br_cosmetics(&self, language: Option<Language>) -> Result<Vec<BrCosmetic>, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::BrCosmetics),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get recently added battle royale cosmetics.
    pub async fn new_br_cosmetics(
        &self,
        language: Option<Language>,
    ) -> Result<NewBrCosmetics, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::NewBrCosmetics),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Build the url for [`Client::find_cosmetic`].
    fn find_cosmetic_url(&self, options: &FindCosmeticOptions) -> String {
        match options.id.as_deref() {
            Some(id) => build_url(
                &Endpoint::CosmeticById.url_with(&self.base_url, id),
                &self.language_params(options.language),
            ),
            None => {
                let mut params = QueryParams::new();
                options.filters.apply(&mut params);
                params.set(
                    "language",
                    options.language.unwrap_or(self.language).as_str(),
                );
                build_url(&self.endpoint_url(Endpoint::CosmeticSearch), &params)
            }
        }
    }

    /// Find a battle royale cosmetic, either by id or as the first match for some filters.
    pub async fn find_cosmetic(&self, options: &FindCosmeticOptions) -> Result<BrCosmetic, Error> {
        let url = self.find_cosmetic_url(options);
        self.get(url, None).await
    }

    /// Build the url for [`Client::filter_cosmetics`].
    fn filter_cosmetics_url(&self, options: &FilterCosmeticsOptions) -> String {
        let mut params = QueryParams::new();
        if options.ids.is_empty() {
            options.filters.apply(&mut params);
            params.set(
                "language",
                options.language.unwrap_or(self.language).as_str(),
            );
            build_url(&self.endpoint_url(Endpoint::CosmeticSearchAll), &params)
        } else {
            params
                .set("id", options.ids.clone())
                .set("language", options.language.unwrap_or(self.language).as_str());
            build_url(&self.endpoint_url(Endpoint::CosmeticSearchByIds), &params)
        }
    }

    /// Find every battle royale cosmetic with one of the given ids, or that matches some filters.
    pub async fn filter_cosmetics(
        &self,
        options: &FilterCosmeticsOptions,
    ) -> Result<Vec<BrCosmetic>, Error> {
        let url = self.filter_cosmetics_url(options);
        self.get(url, None).await
    }

    /// Look up a creator code.
    pub async fn creator_code(&self, name: &str) -> Result<CreatorCode, Error> {
        let mut params = QueryParams::new();
        params.set("name", name);
        let url = build_url(&self.endpoint_url(Endpoint::CreatorCode), &params);
        self.get(url, None).await
    }

    /// Get the current battle royale map.
    pub async fn map(&self, language: Option<Language>) -> Result<FortniteMap, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::Map),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get the news for every game mode.
    pub async fn all_news(&self, language: Option<Language>) -> Result<AllNews, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::News),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get the news for one game mode.
    pub async fn news(&self, mode: NewsMode, language: Option<Language>) -> Result<News, Error> {
        let url = build_url(
            &self.endpoint_url(mode.endpoint()),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get every playlist.
    pub async fn playlists(&self, language: Option<Language>) -> Result<Vec<Playlist>, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::Playlists),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get a playlist by id.
    pub async fn playlist(&self, id: &str, language: Option<Language>) -> Result<Playlist, Error> {
        let url = build_url(
            &Endpoint::PlaylistById.url_with(&self.base_url, id),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get the current item shop.
    pub async fn shop(&self, language: Option<Language>) -> Result<Shop, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::Shop),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get the battle royale item shop, with special sections kept apart.
    pub async fn br_shop(&self, language: Option<Language>) -> Result<BrShop, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::BrShop),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Get the battle royale item shop, with special sections merged into the normal ones.
    pub async fn br_shop_combined(&self, language: Option<Language>) -> Result<CombinedShop, Error> {
        let url = build_url(
            &self.endpoint_url(Endpoint::BrShopCombined),
            &self.language_params(language),
        );
        self.get(url, None).await
    }

    /// Build the url for [`Client::stats`].
    fn stats_url(&self, options: &StatsOptions) -> Result<String, ConfigError> {
        let mut params = QueryParams::new();
        let endpoint = match options.target()? {
            StatsTarget::Name(name) => {
                params
                    .set("name", name)
                    .set_opt("accountType", options.account_type.map(|t| t.as_str()));
                self.endpoint_url(Endpoint::BrStats)
            }
            StatsTarget::Id(id) => Endpoint::BrStatsByAccountId.url_with(&self.base_url, id),
        };
        params
            .set_opt("timeWindow", options.time_window.map(|t| t.as_str()))
            .set_opt("image", options.image.map(|i| i.as_str()));

        Ok(build_url(&endpoint, &params))
    }

    /// Get battle royale stats for an account.
    ///
    /// # Errors
    /// Fails before sending anything if:
    /// 1. The client has no api key
    /// 2. Neither or both of `name` and `id` are set
    /// 3. `account_type` is set along with `id`
    pub async fn stats(&self, options: &StatsOptions) -> Result<Stats, Error> {
        let key = self.key.clone().ok_or(ConfigError::MissingKey)?;
        let url = self.stats_url(options)?;
        self.get(url, Some(key)).await
    }
}

/// A builder for a [`Client`]
#[derive(Debug)]
pub struct ClientBuilder<T = ReqwestTransport> {
    transport: T,
    key: Option<Arc<str>>,
    language: Language,
    base_url: Arc<str>,
}

impl ClientBuilder {
    /// Make a new [`ClientBuilder`].
    pub fn new() -> Self {
        Self {
            transport: ReqwestTransport::new(),
            key: None,
            language: Language::default(),
            base_url: crate::DEFAULT_BASE_URL.into(),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ClientBuilder<T>
where
    T: Transport,
{
    /// Set the api key, sent with requests that need one.
    pub fn key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the language used when a call does not pick one.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the api host.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').into();
        self
    }

    /// Use a different transport.
    pub fn transport<U>(self, transport: U) -> ClientBuilder<U>
    where
        U: Transport,
    {
        ClientBuilder {
            transport,
            key: self.key,
            language: self.language,
            base_url: self.base_url,
        }
    }

    /// Build the [`Client`].
    pub fn build(self) -> Client<T> {
        Client {
            transport: self.transport,
            key: self.key,
            language: self.language,
            base_url: self.base_url,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        transport::mock::MockTransport,
        types::{
            AccountType,
            CosmeticFilters,
            MatchMethod,
            StatsImage,
            TimeWindow,
        },
    };

    const KEY: &str = "00000000-1111-2222-3333-444444444444";

    const CREATOR_CODE: &str = r#"{
        "status": 200,
        "data": {
            "code": "ninja",
            "account": { "id": "4735ce9132924caf8a5b17789b40f79c", "name": "Ninja" },
            "status": "ACTIVE",
            "verified": false
        }
    }"#;

    const STATS: &str = r#"{
        "status": 200,
        "data": {
            "account": { "id": "4735ce9132924caf8a5b17789b40f79c", "name": "Ninja" },
            "battlePass": { "level": 12, "progress": 40 },
            "image": null,
            "stats": {
                "all": {
                    "overall": {
                        "score": 100, "scorePerMin": 1.5, "scorePerMatch": 50.0,
                        "wins": 1, "kills": 7, "killsPerMin": 0.1, "killsPerMatch": 3.5,
                        "deaths": 1, "kd": 7.0, "matches": 2, "winRate": 50.0,
                        "minutesPlayed": 60, "playersOutlived": 150,
                        "lastModified": "2024-01-01T00:00:00Z",
                        "top3": 1, "top5": 1, "top10": 2
                    },
                    "solo": null, "duo": null, "trio": null, "squad": null, "ltm": null
                },
                "keyboardMouse": null,
                "gamepad": null,
                "touch": null
            }
        }
    }"#;

    fn client(transport: &Arc<MockTransport>) -> Client<Arc<MockTransport>> {
        Client::builder()
            .base_url("https://fortnite-api.com/")
            .transport(transport.clone())
            .build()
    }

    fn keyed_client(transport: &Arc<MockTransport>) -> Client<Arc<MockTransport>> {
        Client::builder()
            .key(KEY)
            .transport(transport.clone())
            .build()
    }

    #[tokio::test]
    async fn success_unwraps_data() {
        let transport = MockTransport::new();
        transport.push(200, CREATOR_CODE);

        let code = client(&transport).creator_code("ninja").await.unwrap();
        assert_eq!(code.code, "ninja");
        assert_eq!(code.account.name, "Ninja");
        assert_eq!(
            transport.only_url(),
            "https://fortnite-api.com/v2/creatorcode?name=ninja"
        );
    }

    #[tokio::test]
    async fn error_envelope_is_api_error() {
        let transport = MockTransport::new();
        transport.push(404, r#"{"status":404,"error":"not found"}"#);

        let error = client(&transport)
            .creator_code("nobody")
            .await
            .unwrap_err();
        let api_error = error.as_api_error().expect("not an api error");
        assert_eq!(api_error.status_code, 404);
        assert_eq!(api_error.message, "not found");
        assert_eq!(
            api_error.request_url,
            "https://fortnite-api.com/v2/creatorcode?name=nobody"
        );
    }

    #[tokio::test]
    async fn embedded_status_wins_over_http_status() {
        let transport = MockTransport::new();
        transport.push(200, r#"{"status":400,"error":"invalid keyFormat"}"#);

        let error = client(&transport).aes(None).await.unwrap_err();
        assert_eq!(error.as_api_error().unwrap().status_code, 400);
    }

    #[tokio::test]
    async fn legacy_error_without_status() {
        let transport = MockTransport::new();
        transport.push(403, r#"{"error":"invalid or missing api key"}"#);

        let error = client(&transport).map(None).await.unwrap_err();
        let api_error = error.as_api_error().expect("not an api error");
        assert_eq!(api_error.status_code, 403);
        assert_eq!(api_error.message, "invalid or missing api key");
    }

    #[tokio::test]
    async fn non_json_body_is_json_error() {
        let transport = MockTransport::new();
        transport.push(502, "<html>Bad Gateway</html>");

        let error = client(&transport).banner_colors().await.unwrap_err();
        assert!(matches!(error, Error::Json(_)), "{error:?}");
    }

    #[tokio::test]
    async fn transport_error_propagates() {
        let transport = MockTransport::new();

        let error = client(&transport).banner_colors().await.unwrap_err();
        assert!(matches!(error, Error::Transport(_)), "{error:?}");
    }

    #[tokio::test]
    async fn language_defaults_and_overrides() {
        let transport = MockTransport::new();
        transport.push(200, r#"{"status":200,"data":[]}"#);
        transport.push(200, r#"{"status":200,"data":[]}"#);
        transport.push(200, r#"{"status":200,"data":[]}"#);

        let client = Client::builder()
            .language(Language::German)
            .transport(transport.clone())
            .build();
        client.banners(None).await.unwrap();
        client.banners(Some(Language::Japanese)).await.unwrap();
        client.banners(Some(Language::German)).await.unwrap();

        let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "https://fortnite-api.com/v1/banners?language=de",
                "https://fortnite-api.com/v1/banners?language=ja",
                "https://fortnite-api.com/v1/banners?language=de",
            ]
        );
    }

    #[tokio::test]
    async fn aes_defaults_to_hex() {
        let transport = MockTransport::new();
        let body = r#"{"status":200,"data":{"build":"++Fortnite+Release-28.00","mainKey":"0x00","dynamicKeys":[],"updated":"2024-01-01T00:00:00Z"}}"#;
        transport.push(200, body);
        transport.push(200, body);

        let client = client(&transport);
        let aes = client.aes(None).await.unwrap();
        assert_eq!(aes.build, "++Fortnite+Release-28.00");
        client.aes(Some(AesKeyFormat::Base64)).await.unwrap();

        let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "https://fortnite-api.com/v2/aes?keyFormat=hex",
                "https://fortnite-api.com/v2/aes?keyFormat=base64",
            ]
        );
    }

    #[tokio::test]
    async fn banner_colors_has_no_query() {
        let transport = MockTransport::new();
        transport.push(
            200,
            r#"{"status":200,"data":[{"id":"DefaultColor1","color":"ff2400ff","category":"Red","subCategoryGroup":1}]}"#,
        );

        let colors = client(&transport).banner_colors().await.unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].sub_category_group, 1);
        assert_eq!(
            transport.only_url(),
            "https://fortnite-api.com/v1/banners/colors"
        );
    }

    const EMPTY_LIST: &str = r#"{"status":200,"data":[]}"#;

    fn request_urls(transport: &MockTransport) -> Vec<String> {
        transport.requests().into_iter().map(|r| r.url).collect()
    }

    #[tokio::test]
    async fn cosmetic_listing_urls() {
        let transport = MockTransport::new();
        transport.push(200, r#"{"status":200,"data":{}}"#);
        transport.push(
            200,
            r#"{"status":200,"data":{"date":"2024-01-01T00:00:00Z","build":"b","previousBuild":"a","items":{}}}"#,
        );
        for _ in 0..5 {
            transport.push(200, EMPTY_LIST);
        }

        let client = client(&transport);
        let language = Some(Language::French);
        let all = client.all_cosmetics(language).await.unwrap();
        assert!(all.br.is_empty());
        let new = client.new_cosmetics(language).await.unwrap();
        assert_eq!(new.previous_build, "a");
        client.track_cosmetics(language).await.unwrap();
        client.car_cosmetics(language).await.unwrap();
        client.instrument_cosmetics(language).await.unwrap();
        client.lego_cosmetics(language).await.unwrap();
        client.lego_kits(language).await.unwrap();

        assert_eq!(
            request_urls(&transport),
            [
                "https://fortnite-api.com/v2/cosmetics?language=fr",
                "https://fortnite-api.com/v2/cosmetics/new?language=fr",
                "https://fortnite-api.com/v2/cosmetics/tracks?language=fr",
                "https://fortnite-api.com/v2/cosmetics/cars?language=fr",
                "https://fortnite-api.com/v2/cosmetics/instruments?language=fr",
                "https://fortnite-api.com/v2/cosmetics/lego?language=fr",
                "https://fortnite-api.com/v2/cosmetics/lego/kits?language=fr",
            ]
        );
    }

    #[tokio::test]
    async fn br_cosmetic_listing_urls() {
        let transport = MockTransport::new();
        transport.push(200, EMPTY_LIST);
        transport.push(
            200,
            r#"{"status":200,"data":{"build":"b","previousBuild":"a","hash":"h","date":"2024-01-01T00:00:00Z","lastAddition":"2024-01-01T00:00:00Z","items":[]}}"#,
        );

        let client = client(&transport);
        assert!(client.br_cosmetics(None).await.unwrap().is_empty());
        let new = client.new_br_cosmetics(Some(Language::Korean)).await.unwrap();
        assert_eq!(new.hash, "h");

        assert_eq!(
            request_urls(&transport),
            [
                "https://fortnite-api.com/v2/cosmetics/br?language=en",
                "https://fortnite-api.com/v2/cosmetics/br/new?language=ko",
            ]
        );
    }

    #[tokio::test]
    async fn shop_urls() {
        let transport = MockTransport::new();
        transport.push(
            200,
            r#"{"status":200,"data":{"hash":"h","date":"2024-01-01T00:00:00Z","vbuckIcon":"https://fortnite-api.com/images/vbuck.png","entries":[]}}"#,
        );
        transport.push(
            200,
            r#"{
                "status": 200,
                "data": {
                    "hash": "h",
                    "date": "2024-01-01T00:00:00Z",
                    "vbuckIcon": null,
                    "featured": { "name": "Featured", "entries": [] },
                    "daily": null,
                    "specialFeatured": { "name": "SF", "entries": [] },
                    "specialDaily": null
                }
            }"#,
        );
        transport.push(
            200,
            r#"{"status":200,"data":{"hash":"h","date":"2024-01-01T00:00:00Z","featured":null,"daily":null}}"#,
        );

        let client = client(&transport);
        let shop = client.shop(None).await.unwrap();
        assert!(shop.entries.is_empty());

        let br_shop = client.br_shop(None).await.unwrap();
        assert_eq!(
            br_shop
                .special_featured
                .as_ref()
                .and_then(|category| category.name.as_deref()),
            Some("SF")
        );
        assert_eq!(br_shop.special_daily, None);
        assert_eq!(
            br_shop
                .shop
                .featured
                .as_ref()
                .and_then(|category| category.name.as_deref()),
            Some("Featured")
        );
        assert!(br_shop.shop.unknown.is_empty(), "{:?}", br_shop.shop.unknown);

        let combined = client
            .br_shop_combined(Some(Language::German))
            .await
            .unwrap();
        assert_eq!(combined.hash, "h");

        assert_eq!(
            request_urls(&transport),
            [
                "https://fortnite-api.com/v2/shop?language=en",
                "https://fortnite-api.com/v2/shop/br?language=en",
                "https://fortnite-api.com/v2/shop/br/combined?language=de",
            ]
        );
    }

    #[test]
    fn find_cosmetic_by_id_substitutes_path() {
        let transport = MockTransport::new();
        let client = client(&transport);

        let mut options = FindCosmeticOptions::by_id("abc");
        // Filters are ignored when looking up by id.
        options.filters.name = Some("Renegade Raider".into());

        assert_eq!(
            client.find_cosmetic_url(&options),
            "https://fortnite-api.com/v2/cosmetics/br/abc?language=en"
        );
    }

    #[test]
    fn find_cosmetic_by_filters() {
        let transport = MockTransport::new();
        let client = client(&transport);

        let options = FindCosmeticOptions::by_filters(CosmeticFilters {
            match_method: Some(MatchMethod::Contains),
            name: Some("Renegade Raider".into()),
            has_variants: Some(true),
            ..CosmeticFilters::default()
        })
        .language(Language::Spanish);

        assert_eq!(
            client.find_cosmetic_url(&options),
            "https://fortnite-api.com/v2/cosmetics/br/search?matchMethod=contains&name=Renegade+Raider&hasVariants=true&language=es"
        );
    }

    #[test]
    fn filter_cosmetics_by_ids_repeats_key() {
        let transport = MockTransport::new();
        let client = client(&transport);

        let options = FilterCosmeticsOptions::by_ids(["a", "b"]);
        assert_eq!(
            client.filter_cosmetics_url(&options),
            "https://fortnite-api.com/v2/cosmetics/br/search/ids?id=a&id=b&language=en"
        );
    }

    #[test]
    fn filter_cosmetics_by_filters() {
        let transport = MockTransport::new();
        let client = client(&transport);

        let options = FilterCosmeticsOptions::by_filters(CosmeticFilters {
            rarity: Some("legendary".into()),
            ..CosmeticFilters::default()
        });
        assert_eq!(
            client.filter_cosmetics_url(&options),
            "https://fortnite-api.com/v2/cosmetics/br/search/all?rarity=legendary&language=en"
        );
    }

    #[tokio::test]
    async fn news_by_mode() {
        let transport = MockTransport::new();
        transport.push(
            200,
            r#"{"status":200,"data":{"hash":"abc","date":"2024-01-01T00:00:00Z","image":null,"motds":null,"messages":null}}"#,
        );
        transport.push(
            200,
            r#"{"status":200,"data":{"br":null,"stw":null,"creative":null}}"#,
        );

        let client = client(&transport);
        let news = client.news(NewsMode::Stw, None).await.unwrap();
        assert_eq!(news.hash, "abc");
        let all = client.all_news(None).await.unwrap();
        assert!(all.br.is_none());

        let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "https://fortnite-api.com/v2/news/stw?language=en",
                "https://fortnite-api.com/v2/news?language=en",
            ]
        );
    }

    const PLAYLIST: &str = r#"{
        "status": 200,
        "data": {
            "id": "Playlist_DefaultDuo",
            "name": "Duos",
            "subName": null,
            "description": null,
            "gameType": null,
            "ratingType": null,
            "minPlayers": 2,
            "maxPlayers": 100,
            "maxTeams": 50,
            "maxTeamSize": 2,
            "maxSquads": 50,
            "maxSquadSize": 2,
            "isDefault": true,
            "isTournament": false,
            "isLimitedTimeMode": false,
            "isLargeTeamGame": false,
            "accumulateToProfileStats": true,
            "images": { "showcase": null, "missionIcon": null },
            "gameplayTags": [],
            "path": "FortniteGame/Content/Athena/Playlists/Playlist_DefaultDuo",
            "added": "2019-08-02T09:37:24Z"
        }
    }"#;

    #[tokio::test]
    async fn playlist_urls() {
        let transport = MockTransport::new();
        transport.push(200, EMPTY_LIST);
        transport.push(200, PLAYLIST);

        let client = client(&transport);
        assert!(client
            .playlists(Some(Language::Polish))
            .await
            .unwrap()
            .is_empty());
        let playlist = client.playlist("Playlist_DefaultDuo", None).await.unwrap();
        assert_eq!(playlist.max_team_size, 2);

        assert_eq!(
            request_urls(&transport),
            [
                "https://fortnite-api.com/v1/playlists?language=pl",
                "https://fortnite-api.com/v1/playlists/Playlist_DefaultDuo?language=en",
            ]
        );
    }

    #[tokio::test]
    async fn stats_requires_key_before_sending() {
        let transport = MockTransport::new();
        transport.push(200, STATS);

        let error = client(&transport)
            .stats(&StatsOptions::by_name("Ninja"))
            .await
            .unwrap_err();
        assert_eq!(error.as_config_error(), Some(&ConfigError::MissingKey));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn stats_option_conflicts_fail_before_sending() {
        let transport = MockTransport::new();
        let client = keyed_client(&transport);

        let cases = [
            (StatsOptions::default(), ConfigError::MissingStatsTarget),
            (
                StatsOptions {
                    name: Some("a".into()),
                    id: Some("b".into()),
                    ..StatsOptions::default()
                },
                ConfigError::ConflictingStatsTarget,
            ),
            (
                StatsOptions::by_id("b").account_type(AccountType::Psn),
                ConfigError::AccountTypeWithId,
            ),
        ];
        for (options, expected) in cases {
            let error = client.stats(&options).await.unwrap_err();
            assert_eq!(error.as_config_error(), Some(&expected));
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn stats_by_name_sends_key() {
        let transport = MockTransport::new();
        transport.push(200, STATS);

        let options = StatsOptions::by_name("Ninja")
            .account_type(AccountType::Epic)
            .time_window(TimeWindow::Season)
            .image(StatsImage::KeyboardMouse);
        let stats = keyed_client(&transport).stats(&options).await.unwrap();
        assert_eq!(stats.account.name, "Ninja");
        let overall = stats.stats.all.and_then(|all| all.overall).unwrap();
        assert_eq!(overall.kills, 7);
        assert_eq!(overall.top25, None);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://fortnite-api.com/v2/stats/br/v2?name=Ninja&accountType=epic&timeWindow=season&image=keyboardMouse"
        );
        assert_eq!(requests[0].authorization.as_deref(), Some(KEY));
    }

    #[test]
    fn stats_by_id_url() {
        let transport = MockTransport::new();
        let client = keyed_client(&transport);

        assert_eq!(
            client.stats_url(&StatsOptions::by_id("4735ce91")).unwrap(),
            "https://fortnite-api.com/v2/stats/br/v2/4735ce91"
        );
        assert_eq!(
            client
                .stats_url(&StatsOptions::by_id("4735ce91").time_window(TimeWindow::Lifetime))
                .unwrap(),
            "https://fortnite-api.com/v2/stats/br/v2/4735ce91?timeWindow=lifetime"
        );
    }

    #[tokio::test]
    async fn key_is_not_sent_to_public_endpoints() {
        let transport = MockTransport::new();
        transport.push(200, r#"{"status":200,"data":[]}"#);

        keyed_client(&transport).playlists(None).await.unwrap();
        let requests = transport.requests();
        assert_eq!(requests[0].authorization, None);
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let transport = MockTransport::new();
        transport.push(200, CREATOR_CODE);
        transport.push(200, CREATOR_CODE);

        let client = client(&transport);
        let first = client.creator_code("ninja").await.unwrap();
        let second = client.creator_code("ninja").await.unwrap();
        assert_eq!(first, second);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
