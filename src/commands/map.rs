use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use fortnite_api::Client;

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand, name = "map", description = "get the current map")]
pub struct Options {
    #[argh(switch, description = "list points of interest")]
    pois: bool,
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    let map = client.map(None).await?;

    match output_type {
        OutputType::Human => {
            println!("Blank: {}", map.images.blank);
            println!("With POIs: {}", map.images.pois);
            if options.pois {
                println!();
                for poi in map.pois.iter() {
                    println!(
                        "{} ({:.0}, {:.0}, {:.0})",
                        poi.name, poi.location.x, poi.location.y, poi.location.z
                    );
                }
            }
        }
        OutputType::Json => print_json(&map)?,
    }

    Ok(())
}
