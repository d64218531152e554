pub mod aes;
pub mod banner_colors;
pub mod banners;
pub mod cosmetics;
pub mod creator_code;
pub mod filter_cosmetics;
pub mod find_cosmetic;
pub mod map;
pub mod news;
pub mod playlists;
pub mod shop;
pub mod stats;

use fortnite_api::types::BrCosmetic;
use serde::Serialize;

/// Print a value as pretty json to the stdout.
pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a short summary of a cosmetic.
pub(crate) fn print_br_cosmetic(cosmetic: &BrCosmetic) {
    println!("Name: {}", cosmetic.name);
    println!("ID: {}", cosmetic.id);
    println!("Type: {}", cosmetic.cosmetic_type.display_value);
    println!("Rarity: {}", cosmetic.rarity.display_value);
    if let Some(series) = cosmetic.series.as_ref() {
        println!("Series: {}", series.value);
    }
    if let Some(set) = cosmetic.set.as_ref() {
        println!("Set: {}", set.value);
    }
    if let Some(introduction) = cosmetic.introduction.as_ref() {
        println!("Introduced: {}", introduction.text);
    }
    if !cosmetic.description.is_empty() {
        println!("Description: {}", cosmetic.description);
    }
    if let Some(icon) = cosmetic.images.icon.as_deref() {
        println!("Icon: {icon}");
    }
    println!("Added: {}", cosmetic.added);
}

/// Print a numbered list of cosmetics.
pub(crate) fn print_br_cosmetic_list(cosmetics: &[BrCosmetic]) {
    if cosmetics.is_empty() {
        println!("No Results");
    }

    for (i, cosmetic) in cosmetics.iter().enumerate() {
        println!("{})", i + 1);
        print_br_cosmetic(cosmetic);
        println!();
    }
}
