use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use fortnite_api::{
    types::stats::ModeStats,
    AccountType,
    Client,
    StatsImage,
    StatsOptions,
    TimeWindow,
};

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "stats",
    description = "get battle royale stats. needs an api key"
)]
pub struct Options {
    #[argh(option, long = "name", description = "the account name")]
    name: Option<String>,

    #[argh(option, long = "id", description = "the account id")]
    id: Option<String>,

    #[argh(
        option,
        long = "account-type",
        description = "epic, psn, or xbl. only valid with a name"
    )]
    account_type: Option<AccountType>,

    #[argh(option, long = "time-window", description = "season or lifetime")]
    time_window: Option<TimeWindow>,

    #[argh(
        option,
        long = "image",
        description = "all, keyboardMouse, gamepad, or touch"
    )]
    image: Option<StatsImage>,
}

impl Options {
    /// Get the library options for this command.
    pub fn to_stats_options(&self) -> StatsOptions {
        StatsOptions {
            name: self.name.clone(),
            id: self.id.clone(),
            account_type: self.account_type,
            time_window: self.time_window,
            image: self.image,
        }
    }
}

fn print_mode(title: &str, stats: Option<&ModeStats>) {
    let stats = match stats {
        Some(stats) => stats,
        None => return,
    };

    println!("{title}:");
    println!("  Wins: {}", stats.wins);
    println!("  Matches: {}", stats.matches);
    println!("  Win Rate: {:.2}%", stats.win_rate);
    println!("  Kills: {}", stats.kills);
    println!("  K/D: {:.2}", stats.kd);
    println!("  Minutes Played: {}", stats.minutes_played);
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    let stats = client.stats(&options.to_stats_options()).await?;

    match output_type {
        OutputType::Human => {
            println!("Account: {} ({})", stats.account.name, stats.account.id);
            if let Some(battle_pass) = stats.battle_pass.as_ref() {
                println!(
                    "Battle Pass: level {} ({}%)",
                    battle_pass.level, battle_pass.progress
                );
            }
            if let Some(image) = stats.image.as_deref() {
                println!("Image: {image}");
            }
            if let Some(all) = stats.stats.all.as_ref() {
                print_mode("Overall", all.overall.as_ref());
                print_mode("Solo", all.solo.as_ref());
                print_mode("Duo", all.duo.as_ref());
                print_mode("Trio", all.trio.as_ref());
                print_mode("Squad", all.squad.as_ref());
                print_mode("LTM", all.ltm.as_ref());
            }
        }
        OutputType::Json => print_json(&stats)?,
    }

    Ok(())
}
