#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # fnapi

pub mod cli_options;
pub mod commands;
pub mod config;
pub mod logger;
pub mod setup;

use crate::{
    cli_options::{
        CliOptions,
        OutputType,
        SubCommand,
    },
    config::Config,
};
use anyhow::Context as _;
use fortnite_api::Client;
use tokio::runtime::Builder as RuntimeBuilder;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

/// Data from the setup function
struct SetupData {
    tokio_rt: tokio::runtime::Runtime,
    config: Config,
    output_type: OutputType,
    subcommand: SubCommand,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    let tokio_rt = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .thread_name("fnapi-tokio-worker")
        .build()
        .context("failed to start tokio runtime")?;

    let config = setup::load_config(
        cli_options.config.as_deref(),
        cli_options.key,
        cli_options.language,
    )
    .context("failed to load config")?;

    let worker_guard =
        logger::setup(&config, cli_options.verbose).context("failed to initialize logger")?;

    Ok(SetupData {
        tokio_rt,
        config,
        output_type: cli_options.output_type,
        subcommand: cli_options.subcommand,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// Config errors are printed to the stderr, as the loggers are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let client = build_client(&setup_data.config);
    let ret = setup_data.tokio_rt.block_on(async_main(
        client,
        setup_data.subcommand,
        setup_data.output_type,
    ));

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret
}

/// Make an api client from the config
fn build_client(config: &Config) -> Client {
    let mut builder = Client::builder().language(config.language());
    if let Some(key) = config.key() {
        builder = builder.key(key);
    }
    if let Some(base_url) = config.base_url() {
        builder = builder.base_url(base_url);
    }

    let client = builder.build();
    debug!(
        base_url = client.base_url(),
        language = %client.language(),
        has_key = client.key().is_some(),
        "built client"
    );
    client
}

/// The async entry
async fn async_main(
    client: Client,
    subcommand: SubCommand,
    output_type: OutputType,
) -> anyhow::Result<()> {
    match subcommand {
        SubCommand::Aes(options) => commands::aes::exec(&client, options, output_type).await,
        SubCommand::Banners(options) => {
            commands::banners::exec(&client, options, output_type).await
        }
        SubCommand::BannerColors(options) => {
            commands::banner_colors::exec(&client, options, output_type).await
        }
        SubCommand::Cosmetics(options) => {
            commands::cosmetics::exec(&client, options, output_type).await
        }
        SubCommand::FindCosmetic(options) => {
            commands::find_cosmetic::exec(&client, options, output_type).await
        }
        SubCommand::FilterCosmetics(options) => {
            commands::filter_cosmetics::exec(&client, options, output_type).await
        }
        SubCommand::CreatorCode(options) => {
            commands::creator_code::exec(&client, options, output_type).await
        }
        SubCommand::Map(options) => commands::map::exec(&client, options, output_type).await,
        SubCommand::News(options) => commands::news::exec(&client, options, output_type).await,
        SubCommand::Playlists(options) => {
            commands::playlists::exec(&client, options, output_type).await
        }
        SubCommand::Shop(options) => commands::shop::exec(&client, options, output_type).await,
        SubCommand::Stats(options) => commands::stats::exec(&client, options, output_type).await,
    }
}
