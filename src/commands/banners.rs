use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use fortnite_api::Client;

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand, name = "banners", description = "list banners")]
pub struct Options {}

pub async fn exec(
    client: &Client,
    _options: Options,
    output_type: OutputType,
) -> anyhow::Result<()> {
    let banners = client.banners(None).await?;

    match output_type {
        OutputType::Human => {
            if banners.is_empty() {
                println!("No Results");
            }

            for banner in banners.iter() {
                let name = banner.name.as_deref().unwrap_or(&banner.dev_name);
                println!("{} ({})", name, banner.id);
                if let Some(category) = banner.category.as_deref() {
                    println!("  Category: {category}");
                }
                println!("  Icon: {}", banner.images.icon);
            }
        }
        OutputType::Json => print_json(&banners)?,
    }

    Ok(())
}
