use crate::{
    cli_options::OutputType,
    commands::print_json,
};
use fortnite_api::{
    types::Playlist,
    Client,
};

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "playlists",
    description = "list playlists, or get one by id"
)]
pub struct Options {
    #[argh(option, long = "id", description = "the playlist id")]
    id: Option<String>,
}

fn print_playlist(playlist: &Playlist) {
    println!("ID: {}", playlist.id);
    if let Some(name) = playlist.name.as_deref() {
        match playlist.sub_name.as_deref() {
            Some(sub_name) => println!("Name: {name} ({sub_name})"),
            None => println!("Name: {name}"),
        }
    }
    if let Some(description) = playlist.description.as_deref() {
        println!("Description: {description}");
    }
    println!(
        "Players: {}-{}, Teams: {}",
        playlist.min_players, playlist.max_players, playlist.max_teams
    );
    println!("Limited Time: {}", playlist.is_limited_time_mode);
}

pub async fn exec(client: &Client, options: Options, output_type: OutputType) -> anyhow::Result<()> {
    match options.id.as_deref() {
        Some(id) => {
            let playlist = client.playlist(id, None).await?;
            match output_type {
                OutputType::Human => print_playlist(&playlist),
                OutputType::Json => print_json(&playlist)?,
            }
        }
        None => {
            let playlists = client.playlists(None).await?;
            match output_type {
                OutputType::Human => {
                    for playlist in playlists.iter() {
                        print_playlist(playlist);
                        println!();
                    }
                }
                OutputType::Json => print_json(&playlists)?,
            }
        }
    }

    Ok(())
}
