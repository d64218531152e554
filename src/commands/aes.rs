use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use fortnite_api::{
    AesKeyFormat,
    Client,
};

#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand, name = "aes", description = "get the current aes keys")]
pub struct Options {
    #[argh(option, long = "key-format", description = "hex or base64")]
    key_format: Option<AesKeyFormat>,
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    let aes = client.aes(options.key_format).await?;

    match output_type {
        OutputType::Human => {
            println!("Build: {}", aes.build);
            println!("Main Key: {}", aes.main_key.as_deref().unwrap_or("none"));
            println!("Updated: {}", aes.updated);
            println!("Dynamic Keys: {}", aes.dynamic_keys.len());
            for key in aes.dynamic_keys.iter() {
                println!("  {} ({}): {}", key.pak_filename, key.pak_guid, key.key);
            }
        }
        OutputType::Json => print_json(&aes)?,
    }

    Ok(())
}
