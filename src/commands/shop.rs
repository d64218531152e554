use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use anyhow::bail;
use fortnite_api::{
    types::shop::{
        ShopCategory,
        ShopEntry,
    },
    Client,
};

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand, name = "shop", description = "get the item shop")]
pub struct Options {
    #[argh(
        switch,
        description = "use the battle royale shop with every section combined"
    )]
    combined: bool,

    #[argh(switch, description = "use the battle royale shop")]
    br: bool,
}

/// Which shop to get
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopKind {
    Shop,
    Br,
    BrCombined,
}

impl Options {
    /// Get the shop these options select.
    pub fn kind(&self) -> anyhow::Result<ShopKind> {
        match (self.br, self.combined) {
            (true, true) => bail!("`--br` and `--combined` cannot be used together"),
            (true, false) => Ok(ShopKind::Br),
            (false, true) => Ok(ShopKind::BrCombined),
            (false, false) => Ok(ShopKind::Shop),
        }
    }
}

fn print_entry(entry: &ShopEntry) {
    let name = entry
        .bundle
        .as_ref()
        .map(|bundle| bundle.name.as_str())
        .or_else(|| entry.br_cosmetics().first().map(|item| item.name.as_str()))
        .or(entry.dev_name.as_deref())
        .unwrap_or("Unknown");

    if entry.regular_price == entry.final_price {
        println!("  {} - {} V-Bucks", name, entry.final_price);
    } else {
        println!(
            "  {} - {} V-Bucks (was {})",
            name, entry.final_price, entry.regular_price
        );
    }
}

fn print_category(title: &str, category: Option<&ShopCategory>) {
    let category = match category {
        Some(category) => category,
        None => return,
    };

    println!("== {} ==", category.name.as_deref().unwrap_or(title));
    for entry in category.entries.iter() {
        print_entry(entry);
    }
    println!();
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    match options.kind()? {
        ShopKind::BrCombined => {
            let shop = client.br_shop_combined(None).await?;
            match output_type {
                OutputType::Human => {
                    println!("Date: {}", shop.date);
                    print_category("Featured", shop.featured.as_ref());
                    print_category("Daily", shop.daily.as_ref());
                }
                OutputType::Json => print_json(&shop)?,
            }
        }
        ShopKind::Br => {
            let shop = client.br_shop(None).await?;
            match output_type {
                OutputType::Human => {
                    println!("Date: {}", shop.shop.date);
                    print_category("Featured", shop.shop.featured.as_ref());
                    print_category("Daily", shop.shop.daily.as_ref());
                    print_category("Special Featured", shop.special_featured.as_ref());
                    print_category("Special Daily", shop.special_daily.as_ref());
                }
                OutputType::Json => print_json(&shop)?,
            }
        }
        ShopKind::Shop => {
            let shop = client.shop(None).await?;
            match output_type {
                OutputType::Human => {
                    println!("Date: {}", shop.date);
                    for entry in shop.entries.iter() {
                        print_entry(entry);
                    }
                }
                OutputType::Json => print_json(&shop)?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use argh::FromArgs;

    fn kind(args: &[&str]) -> anyhow::Result<ShopKind> {
        Options::from_args(&["shop"], args)
            .expect("failed to parse")
            .kind()
    }

    #[test]
    fn shop_kinds() {
        assert_eq!(kind(&[]).unwrap(), ShopKind::Shop);
        assert_eq!(kind(&["--br"]).unwrap(), ShopKind::Br);
        assert_eq!(kind(&["--combined"]).unwrap(), ShopKind::BrCombined);
    }

    #[test]
    fn br_and_combined_conflict() {
        assert!(kind(&["--br", "--combined"]).is_err());
    }
}
