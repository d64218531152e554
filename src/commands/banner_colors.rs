use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use fortnite_api::Client;

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand, name = "banner-colors", description = "list banner colors")]
pub struct Options {}

pub async fn exec(
    client: &Client,
    _options: Options,
    output_type: OutputType,
) -> anyhow::Result<()> {
    let colors = client.banner_colors().await?;

    match output_type {
        OutputType::Human => {
            for color in colors.iter() {
                println!(
                    "{}: #{} ({}, group {})",
                    color.id, color.color, color.category, color.sub_category_group
                );
            }
        }
        OutputType::Json => print_json(&colors)?,
    }

    Ok(())
}
