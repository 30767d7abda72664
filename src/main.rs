mod bot;
mod config;
mod lookup;

use bot::{bot, bot_run};
use clap::arg;
use config::Config;

async fn async_main(config_file: &str) -> anyhow::Result<()> {
    let config = Config::read(config_file).await?;
    config.check()?;

    let bot = bot(&config)?;

    bot_run(bot, config).await
}

fn enable_log(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose < 2 {
        builder
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("reqwest", log::LevelFilter::Warn);
    }
    if verbose < 1 {
        builder.filter_module("teloxide", log::LevelFilter::Warn);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let matches = clap::command!()
        .args(&[
            arg!([CONFIG] "Configure file to read").default_value("config.toml"),
            arg!(-v --verbose ... "More verbose log output"),
        ])
        .get_matches();

    enable_log(matches.get_count("verbose"));

    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_main(matches.get_one::<String>("CONFIG").unwrap()))
}
