use std::sync::Arc;

use teloxide::{
    Bot,
    dispatching::{HandlerExt as _, UpdateFilterExt as _},
    dptree,
    prelude::{Dispatcher, Requester as _, RequesterExt as _},
    types::{Message, ParseMode, Update},
    utils::command::BotCommands,
};

use crate::{bot::arg::NecessaryArg, config::Config, lookup::FactClient};

use super::BotType;
use super::facts::handle_fact_lookup;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "snake_case")]
enum Command {
    Start,
    Help,
}

pub fn bot(config: &Config) -> anyhow::Result<BotType> {
    let bot = Bot::new(config.telegram().api_key());
    Ok(match config.telegram().api_server() {
        Some(url) => bot.set_api_url(url.parse()?),
        None => bot,
    }
    .parse_mode(ParseMode::MarkdownV2))
}

pub async fn bot_run(bot: BotType, config: Config) -> anyhow::Result<()> {
    let arg = Arc::new(NecessaryArg::new(
        FactClient::create(config.lookup().facts_url())?,
        config.footer().clone(),
    ));

    let handle_command_message = Update::filter_message().branch(
        dptree::entry()
            .filter(|msg: Message| msg.chat.is_private())
            .filter_command::<Command>()
            .endpoint(|msg: Message, bot: BotType, cmd: Command| async move {
                match cmd {
                    Command::Start | Command::Help => handle_help(bot, msg).await,
                }
            }),
    );

    let handle_message = Update::filter_message()
        .filter(|msg: Message| msg.chat.is_private())
        .endpoint(
            |msg: Message, bot: BotType, arg: Arc<NecessaryArg>| async move {
                let Some(text) = msg.text() else {
                    return Ok(());
                };

                if text.starts_with('/') {
                    bot.send_message(
                        msg.chat.id,
                        "Unknown command\\. Use /start to see available commands\\.",
                    )
                    .await?;
                    return Ok(());
                }

                handle_fact_lookup(bot, arg, msg.chat.id, text.to_string()).await
            },
        );

    let dispatcher = Dispatcher::builder(
        bot,
        dptree::entry()
            .branch(handle_command_message)
            .branch(handle_message),
    )
    .dependencies(dptree::deps![arg])
    .default_handler(|_| async {});

    #[cfg(not(debug_assertions))]
    dispatcher.enable_ctrlc_handler().build().dispatch().await;

    #[cfg(debug_assertions)]
    tokio::select! {
        _ = async move {
            dispatcher.build().dispatch().await
        } => {}
        _ = tokio::signal::ctrl_c() => {}
    }
    Ok(())
}

async fn handle_help(bot: BotType, msg: Message) -> anyhow::Result<()> {
    bot.send_message(
        msg.chat.id,
        "🤖 *Welcome to the Number Trivia Bot\\!*\n\n\
        Send me any number and I will reply with a fact about it\\.\n\n\
        Examples:\n\
        `42`\n\
        `3.14`\n\
        `1,000,000`\n\n\
        Use /help to show this message again\\.",
    )
    .await?;
    Ok(())
}
