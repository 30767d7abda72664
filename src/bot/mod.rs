mod arg;
mod command;
mod facts;
mod functions;

use std::sync::LazyLock;

use teloxide::{Bot, adaptors::DefaultParseMode};

pub type BotType = DefaultParseMode<Bot>;

static TELEGRAM_ESCAPE_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"([_*\[\]\(\)~>#\+\-=|\{}\.!])").unwrap());

pub use command::{bot, bot_run};
pub use functions::replace_all;
