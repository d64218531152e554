use crate::commands;
use camino::Utf8PathBuf;
use fortnite_api::Language;
use std::str::FromStr;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "A CLI to interact with fortnite-api.com")]
pub struct CliOptions {
    #[argh(option, description = "the path to a config file")]
    pub config: Option<Utf8PathBuf>,

    #[argh(option, description = "the api key, overriding the config")]
    pub key: Option<String>,

    #[argh(option, description = "the default language, overriding the config")]
    pub language: Option<Language>,

    #[argh(switch, short = 'v', description = "log requests")]
    pub verbose: bool,

    #[argh(
        option,
        long = "output-type",
        short = 't',
        default = "OutputType::Human",
        description = "the output type"
    )]
    pub output_type: OutputType,

    #[argh(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
pub enum SubCommand {
    Aes(commands::aes::Options),
    Banners(commands::banners::Options),
    BannerColors(commands::banner_colors::Options),
    Cosmetics(commands::cosmetics::Options),
    FindCosmetic(commands::find_cosmetic::Options),
    FilterCosmetics(commands::filter_cosmetics::Options),
    CreatorCode(commands::creator_code::Options),
    Map(commands::map::Options),
    News(commands::news::Options),
    Playlists(commands::playlists::Options),
    Shop(commands::shop::Options),
    Stats(commands::stats::Options),
}

#[derive(Debug)]
pub struct OutputTypeParseError(String);

impl std::fmt::Display for OutputTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not valid. Try 'human' or 'json'.", self.0)
    }
}

/// The output type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Human,
    Json,
}

impl FromStr for OutputType {
    type Err = OutputTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "human" => Ok(Self::Human),
            "j" | "json" => Ok(Self::Json),
            s => Err(OutputTypeParseError(s.into())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Result<CliOptions, argh::EarlyExit> {
        CliOptions::from_args(&["fnapi"], args)
    }

    #[test]
    fn global_options() {
        let options = parse(&[
            "--key",
            "abc",
            "--language",
            "ja",
            "-t",
            "json",
            "-v",
            "map",
        ])
        .expect("failed to parse");

        assert_eq!(options.key.as_deref(), Some("abc"));
        assert_eq!(options.language, Some(Language::Japanese));
        assert_eq!(options.output_type, OutputType::Json);
        assert!(options.verbose);
        assert!(matches!(options.subcommand, SubCommand::Map(_)));
    }

    #[test]
    fn bad_language() {
        assert!(parse(&["--language", "klingon", "map"]).is_err());
    }

    #[test]
    fn stats_subcommand() {
        let options = parse(&["stats", "--name", "Ninja", "--account-type", "psn"])
            .expect("failed to parse");
        let SubCommand::Stats(options) = options.subcommand else {
            panic!("expected stats subcommand");
        };
        let stats_options = options.to_stats_options();
        assert_eq!(stats_options.name.as_deref(), Some("Ninja"));
        assert_eq!(
            stats_options.account_type,
            Some(fortnite_api::AccountType::Psn)
        );
    }

    #[test]
    fn filter_cosmetics_ids() {
        let options = parse(&["filter-cosmetics", "--id", "a", "--id", "b"])
            .expect("failed to parse");
        let SubCommand::FilterCosmetics(options) = options.subcommand else {
            panic!("expected filter-cosmetics subcommand");
        };
        assert_eq!(options.to_filter_options().ids, ["a", "b"]);
    }

    #[test]
    fn output_type() {
        assert_eq!("h".parse::<OutputType>().unwrap(), OutputType::Human);
        assert_eq!("json".parse::<OutputType>().unwrap(), OutputType::Json);
        assert!("xml".parse::<OutputType>().is_err());
    }
}
