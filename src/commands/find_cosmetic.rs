use crate::{
    cli_options::OutputType,
    commands::{
        print_br_cosmetic,
        print_json,
    },
};
use fortnite_api::{
    Client,
    CosmeticFilters,
    FindCosmeticOptions,
    Language,
    MatchMethod,
};

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "find-cosmetic",
    description = "find the first battle royale cosmetic matching an id or filters"
)]
pub struct Options {
    #[argh(option, long = "id", description = "the cosmetic id")]
    id: Option<String>,

    #[argh(option, long = "name", description = "the cosmetic name")]
    name: Option<String>,

    #[argh(
        option,
        long = "match-method",
        description = "full, contains, starts, or ends"
    )]
    match_method: Option<MatchMethod>,

    #[argh(
        option,
        long = "search-language",
        description = "the language of the search values"
    )]
    search_language: Option<Language>,

    #[argh(option, long = "type", description = "the cosmetic type, like outfit")]
    cosmetic_type: Option<String>,

    #[argh(option, long = "rarity", description = "the rarity, like legendary")]
    rarity: Option<String>,

    #[argh(option, long = "set", description = "the set name")]
    set: Option<String>,
}

impl Options {
    /// Get the library options for this command.
    pub fn to_find_options(&self) -> FindCosmeticOptions {
        FindCosmeticOptions {
            id: self.id.clone(),
            language: None,
            filters: CosmeticFilters {
                search_language: self.search_language,
                match_method: self.match_method,
                name: self.name.clone(),
                cosmetic_type: self.cosmetic_type.clone(),
                rarity: self.rarity.clone(),
                set: self.set.clone(),
                ..CosmeticFilters::default()
            },
        }
    }
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    let cosmetic = client.find_cosmetic(&options.to_find_options()).await?;

    match output_type {
        OutputType::Human => print_br_cosmetic(&cosmetic),
        OutputType::Json => print_json(&cosmetic)?,
    }

    Ok(())
}
