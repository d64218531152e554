use crate::config::{
    Config,
    Severity,
};
use anyhow::{
    ensure,
    Context,
};
use camino::Utf8Path;
use fortnite_api::Language;

/// Load a config, apply command line overrides, and validate the result.
///
/// With no path, the default config is used.
/// This prints to the stderr directly.
/// It is intended to be called BEFORE the loggers are set up.
pub(crate) fn load_config(
    path: Option<&Utf8Path>,
    key: Option<String>,
    language: Option<Language>,
) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => {
            eprintln!("loading `{path}`...");
            Config::load_from_path(path).with_context(|| format!("failed to load `{path}`"))?
        }
        None => Config::default(),
    };
    config.set_key(key);
    config.set_language(language);

    let mut error_count = 0;
    for message in config.validate() {
        match message.severity() {
            Severity::Warn => {
                eprintln!("validation warning: {}", message.error());
            }
            Severity::Error => {
                eprintln!("validation error: {}", message.error());
                error_count += 1;
            }
        }
    }

    ensure!(
        error_count == 0,
        "validation failed with {error_count} errors."
    );

    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_path_uses_defaults() {
        let config = load_config(None, None, None).expect("failed to load config");
        assert_eq!(config.key(), None);
        assert_eq!(config.language(), Language::English);
    }

    #[test]
    fn overrides_are_applied() {
        let config = load_config(None, Some("abc".into()), Some(Language::Turkish))
            .expect("failed to load config");
        assert_eq!(config.key(), Some("abc"));
        assert_eq!(config.language(), Language::Turkish);
    }

    #[test]
    fn empty_key_override_fails_validation() {
        assert!(load_config(None, Some(String::new()), None).is_err());
        assert!(load_config(None, Some("  ".into()), None).is_err());
    }
}
