use url::form_urlencoded::byte_serialize;

/// A query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A single value, emitted as `key=value`
    Single(String),

    /// Many values, emitted as one `key=value` pair per element
    Multiple(Vec<String>),
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.into())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

/// Query parameters, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Make an empty [`QueryParams`].
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a parameter.
    ///
    /// A key that is already present keeps its position and has its value replaced.
    pub fn set<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Set a parameter if it has a value.
    pub fn set_opt<K, V>(&mut self, key: K, value: Option<V>) -> &mut Self
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set a boolean parameter if it has a value.
    pub fn set_bool<K>(&mut self, key: K, value: Option<bool>) -> &mut Self
    where
        K: Into<String>,
    {
        self.set_opt(key, value.map(|value| if value { "true" } else { "false" }))
    }

    /// Set an integer parameter if it has a value.
    pub fn set_u64<K>(&mut self, key: K, value: Option<u64>) -> &mut Self
    where
        K: Into<String>,
    {
        if let Some(value) = value {
            let mut buffer = itoa::Buffer::new();
            self.set(key, buffer.format(value));
        }
        self
    }

    /// Get a parameter.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Build a url from an endpoint and its query parameters.
///
/// Parameters are emitted in insertion order.
/// Multiple values use repeated keys, so `id: [a, b]` becomes `id=a&id=b`.
/// Keys and values are form-urlencoded.
/// An empty set of parameters yields the endpoint unchanged.
pub fn build_url(endpoint: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }

    let mut url = String::from(endpoint);
    url.push('?');

    let mut first = true;
    let mut push_pair = |url: &mut String, key: &str, value: &str| {
        if !first {
            url.push('&');
        }
        first = false;

        url.extend(byte_serialize(key.as_bytes()));
        url.push('=');
        url.extend(byte_serialize(value.as_bytes()));
    };

    for (key, value) in params.iter() {
        match value {
            QueryValue::Single(value) => push_pair(&mut url, key, value),
            QueryValue::Multiple(values) => {
                for value in values {
                    push_pair(&mut url, key, value);
                }
            }
        }
    }

    url
}
