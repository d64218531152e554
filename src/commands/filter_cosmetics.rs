use crate::{
    cli_options::OutputType,
    commands::{
        print_br_cosmetic_list,
        print_json,
    },
};
use fortnite_api::{
    Client,
    CosmeticFilters,
    FilterCosmeticsOptions,
    Language,
    MatchMethod,
};

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "filter-cosmetics",
    description = "find every battle royale cosmetic matching some ids or filters"
)]
pub struct Options {
    #[argh(option, long = "id", description = "a cosmetic id. may be repeated")]
    ids: Vec<String>,

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

    #[argh(
        option,
        long = "added-since",
        description = "only match cosmetics added since this unix timestamp"
    )]
    added_since: Option<u64>,
}

impl Options {
    /// Get the library options for this command.
    pub fn to_filter_options(&self) -> FilterCosmeticsOptions {
        FilterCosmeticsOptions {
            ids: self.ids.clone(),
            language: None,
            filters: CosmeticFilters {
                search_language: self.search_language,
                match_method: self.match_method,
                name: self.name.clone(),
                cosmetic_type: self.cosmetic_type.clone(),
                rarity: self.rarity.clone(),
                set: self.set.clone(),
                added_since: self.added_since,
                ..CosmeticFilters::default()
            },
        }
    }
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    let cosmetics = client
        .filter_cosmetics(&options.to_filter_options())
        .await?;

    match output_type {
        OutputType::Human => print_br_cosmetic_list(&cosmetics),
        OutputType::Json => print_json(&cosmetics)?,
    }

    Ok(())
}
