mod client;
mod endpoint;
mod error;
mod query;
mod transport;
pub mod types;

pub use crate::{
    client::{
        Client,
        ClientBuilder,
    },
    endpoint::Endpoint,
    error::{
        ApiError,
        ConfigError,
        Error,
    },
    query::{
        build_url,
        QueryParams,
        QueryValue,
    },
    transport::{
        ReqwestTransport,
        Request,
        Response,
        Transport,
    },
    types::{
        AccountType,
        AesKeyFormat,
        CosmeticFilters,
        CosmeticType,
        FilterCosmeticsOptions,
        FindCosmeticOptions,
        Language,
        MatchMethod,
        NewsMode,
        StatsImage,
        StatsOptions,
        TimeWindow,
    },
};

/// The default api host
pub const DEFAULT_BASE_URL: &str = "https://fortnite-api.com";

/// The status code the api embeds in successful responses
const SUCCESS_STATUS: u16 = 200;
