use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use fortnite_api::Client;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "creator-code", description = "look up a creator code")]
pub struct Options {
    #[argh(positional, description = "the creator code")]
    name: String,
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    let code = client.creator_code(&options.name).await?;

    match output_type {
        OutputType::Human => {
            println!("Code: {}", code.code);
            println!("Account: {} ({})", code.account.name, code.account.id);
            println!("Status: {}", code.status);
            println!("Verified: {}", code.verified);
        }
        OutputType::Json => print_json(&code)?,
    }

    Ok(())
}
