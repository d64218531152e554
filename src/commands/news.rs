use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use fortnite_api::{
    types::News,
    Client,
    NewsMode,
};

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand, name = "news", description = "get the in-game news")]
pub struct Options {
    #[argh(
        option,
        long = "mode",
        description = "br, stw, or creative. omit for every mode"
    )]
    mode: Option<NewsMode>,
}

fn print_news(title: &str, news: &News) {
    println!("== {title} ==");
    println!("Date: {}", news.date);
    for motd in news.motds.iter().flatten() {
        println!("* {}", motd.title);
        println!("  {}", motd.body);
    }
    for message in news.messages.iter().flatten() {
        println!("* {}", message.title);
        println!("  {}", message.body);
    }
    println!();
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    match options.mode {
        Some(mode) => {
            let news = client.news(mode, None).await?;
            match output_type {
                OutputType::Human => print_news(mode.as_str(), &news),
                OutputType::Json => print_json(&news)?,
            }
        }
        None => {
            let news = client.all_news(None).await?;
            match output_type {
                OutputType::Human => {
                    let modes = [
                        (NewsMode::Br, news.br.as_ref()),
                        (NewsMode::Stw, news.stw.as_ref()),
                        (NewsMode::Creative, news.creative.as_ref()),
                    ];
                    for (mode, news) in modes {
                        if let Some(news) = news {
                            print_news(mode.as_str(), news);
                        }
                    }
                }
                OutputType::Json => print_json(&news)?,
            }
        }
    }

    Ok(())
}
