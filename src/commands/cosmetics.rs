use crate::{
    cli_options::OutputType,
    commands::{
        print_br_cosmetic_list,
        print_json,
    },
};
use anyhow::bail;
use fortnite_api::{
    Client,
    CosmeticType,
};

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand, name = "cosmetics", description = "list cosmetics")]
pub struct Options {
    #[argh(
        positional,
        default = "CosmeticType::All",
        description = "all, new, tracks, cars, instruments, lego, or lego-kits"
    )]
    cosmetic_type: CosmeticType,

    #[argh(
        switch,
        description = "only list battle royale cosmetics. only valid with all or new"
    )]
    br: bool,
}

/// Print a listing of some cosmetic kind.
fn print_listing<T>(items: &[T], describe: impl Fn(&T) -> String) {
    if items.is_empty() {
        println!("No Results");
    }

    for item in items {
        println!("{}", describe(item));
    }
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    match (options.cosmetic_type, options.br) {
        (CosmeticType::All, true) => {
            let cosmetics = client.br_cosmetics(None).await?;
            match output_type {
                OutputType::Human => print_br_cosmetic_list(&cosmetics),
                OutputType::Json => print_json(&cosmetics)?,
            }
        }
        (CosmeticType::New, true) => {
            let cosmetics = client.new_br_cosmetics(None).await?;
            match output_type {
                OutputType::Human => {
                    println!("Build: {}", cosmetics.build);
                    println!("Previous Build: {}", cosmetics.previous_build);
                    println!();
                    print_br_cosmetic_list(&cosmetics.items);
                }
                OutputType::Json => print_json(&cosmetics)?,
            }
        }
        (cosmetic_type, true) => {
            bail!("`--br` cannot be used with `{cosmetic_type}`");
        }
        (CosmeticType::All, false) => {
            let cosmetics = client.all_cosmetics(None).await?;
            match output_type {
                OutputType::Human => {
                    println!("Battle Royale: {}", cosmetics.br.len());
                    println!("Tracks: {}", cosmetics.tracks.len());
                    println!("Instruments: {}", cosmetics.instruments.len());
                    println!("Cars: {}", cosmetics.cars.len());
                    println!("Lego: {}", cosmetics.lego.len());
                    println!("Lego Kits: {}", cosmetics.lego_kits.len());
                }
                OutputType::Json => print_json(&cosmetics)?,
            }
        }
        (CosmeticType::New, false) => {
            let cosmetics = client.new_cosmetics(None).await?;
            match output_type {
                OutputType::Human => {
                    println!("Date: {}", cosmetics.date);
                    println!("Build: {}", cosmetics.build);
                    println!("Previous Build: {}", cosmetics.previous_build);
                    println!();
                    print_br_cosmetic_list(cosmetics.items.br.as_deref().unwrap_or(&[]));
                }
                OutputType::Json => print_json(&cosmetics)?,
            }
        }
        (CosmeticType::Tracks, false) => {
            let tracks = client.track_cosmetics(None).await?;
            match output_type {
                OutputType::Human => print_listing(&tracks, |track| {
                    format!("{} - {} ({})", track.artist, track.title, track.id)
                }),
                OutputType::Json => print_json(&tracks)?,
            }
        }
        (CosmeticType::Cars, false) => {
            let cars = client.car_cosmetics(None).await?;
            match output_type {
                OutputType::Human => {
                    print_listing(&cars, |car| format!("{} ({})", car.name, car.id));
                }
                OutputType::Json => print_json(&cars)?,
            }
        }
        (CosmeticType::Instruments, false) => {
            let instruments = client.instrument_cosmetics(None).await?;
            match output_type {
                OutputType::Human => print_listing(&instruments, |instrument| {
                    format!("{} ({})", instrument.name, instrument.id)
                }),
                OutputType::Json => print_json(&instruments)?,
            }
        }
        (CosmeticType::Lego, false) => {
            let lego = client.lego_cosmetics(None).await?;
            match output_type {
                OutputType::Human => print_listing(&lego, |lego| {
                    format!("{} (for {})", lego.id, lego.cosmetic_id)
                }),
                OutputType::Json => print_json(&lego)?,
            }
        }
        (CosmeticType::LegoKits, false) => {
            let kits = client.lego_kits(None).await?;
            match output_type {
                OutputType::Human => {
                    print_listing(&kits, |kit| format!("{} ({})", kit.name, kit.id));
                }
                OutputType::Json => print_json(&kits)?,
            }
        }
    }

    Ok(())
}
