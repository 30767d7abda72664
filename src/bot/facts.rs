use std::sync::Arc;

use teloxide::{
    payloads::SendMessageSetters,
    prelude::Requester as _,
    types::{ChatId, MessageId},
};

use crate::config::Footer;
use crate::lookup::QueryError;

use super::functions::{link_preview_options, timestamp_now};
use super::{BotType, arg::NecessaryArg, replace_all};

const PLACEHOLDER_TEXT: &str = "🔍 Searching for a fact… please wait\\.";
const API_UNAVAILABLE_TEXT: &str = "🚨 Alas\\! I could not fetch information right now\\. \
    The external API may be unavailable or returned a non\\-success status code\\.";
const NETWORK_ISSUE_TEXT: &str =
    "🚨 A network issue occurred while fetching your fact\\. Please try again later\\.";
const UNEXPECTED_TEXT: &str = "🛑 An unexpected error occurred\\. Check the logs for details\\.";

/// Accept digits or anything that reads as a finite float, with commas and
/// inner spaces stripped. Returns the cleaned string sent to the API.
fn normalize_number(input: &str) -> Option<String> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' '))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    if cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Some(cleaned);
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|_| cleaned)
}

/// Transient "searching" message. Consumed on clear, so it can only be
/// deleted once per request.
struct Placeholder {
    chat: ChatId,
    id: MessageId,
}

impl Placeholder {
    async fn send(bot: &BotType, chat: ChatId) -> anyhow::Result<Self> {
        let msg = bot.send_message(chat, PLACEHOLDER_TEXT).await?;
        Ok(Self { chat, id: msg.id })
    }

    async fn clear(self, bot: &BotType) {
        if let Err(e) = bot.delete_message(self.chat, self.id).await {
            log::warn!("Failed to delete placeholder message {}: {e:?}", self.id.0);
        }
    }
}

pub(super) async fn handle_fact_lookup(
    bot: BotType,
    arg: Arc<NecessaryArg>,
    chat_id: ChatId,
    text: String,
) -> anyhow::Result<()> {
    let Some(number) = normalize_number(&text) else {
        bot.send_message(
            chat_id,
            format!(
                "❌ '{}' does not look like a valid number\\. Send me a plain number like `42` or `3.14`\\.",
                replace_all(text.trim())
            ),
        )
        .await?;
        return Ok(());
    };

    let placeholder = Placeholder::send(&bot, chat_id).await?;

    let outcome = lookup_and_format(&arg, &number).await;

    placeholder.clear(&bot).await;

    let reply = outcome.unwrap_or_else(|e| {
        log::error!("An unexpected error occurred while handling {number}: {e:?}");
        UNEXPECTED_TEXT.to_string()
    });

    bot.send_message(chat_id, reply)
        .link_preview_options(link_preview_options(false))
        .await?;

    Ok(())
}

async fn lookup_and_format(arg: &NecessaryArg, number: &str) -> anyhow::Result<String> {
    let body = match arg.lookup().fetch_fact(number).await {
        Ok(body) => body,
        Err(QueryError::Status { code, url }) => {
            log::error!("API call failed with status code: {code} for URL: {url}");
            return Ok(API_UNAVAILABLE_TEXT.to_string());
        }
        Err(QueryError::Network(e)) => {
            log::error!("Network error during API call: {e:?}");
            return Ok(NETWORK_ISSUE_TEXT.to_string());
        }
    };

    let fact = body.trim();
    if fact.is_empty() {
        log::warn!("API returned an empty body for {number}");
        return Ok(not_found_text(number));
    }

    Ok(format_fact(number, fact, arg.footer()))
}

fn not_found_text(number: &str) -> String {
    format!("🤷 Search completed, but no fact found for input: `{number}`\\.")
}

fn format_fact(number: &str, fact: &str, footer: &Footer) -> String {
    format!(
        "🔎 ✅ *NUMBER FACT FOUND* {time}\n\
        ━━━━━━━━━━━━━━━━━━━━━━━━━━\n\
        *FACT RECORD*\n\
        🔢 ├ Number: {number}\n\
        📚 └ Fact: {fact}\n\
        ──────────────────────────\n\
        \n\
        {footer}",
        time = replace_all(&timestamp_now()),
        number = replace_all(number),
        fact = replace_all(fact),
        footer = render_footer(footer),
    )
}

fn render_footer(footer: &Footer) -> String {
    let mut out = format!(
        "*{}*\nChannels to join for full use:",
        replace_all(footer.signature())
    );
    for channel in footer.channels() {
        out.push_str(&format!(
            "\n👇 [{}]({})",
            replace_all(channel.label()),
            channel.url().replace('\\', "\\\\").replace(')', "\\)")
        ));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize_number() {
        assert_eq!(normalize_number("42"), Some("42".to_string()));
        assert_eq!(normalize_number(" 1,234 "), Some("1234".to_string()));
        assert_eq!(normalize_number("1 000 000"), Some("1000000".to_string()));
        assert_eq!(normalize_number("3.14"), Some("3.14".to_string()));
        assert_eq!(normalize_number("-7"), Some("-7".to_string()));

        assert_eq!(normalize_number(""), None);
        assert_eq!(normalize_number("   "), None);
        assert_eq!(normalize_number("abc"), None);
        assert_eq!(normalize_number("12a"), None);
        assert_eq!(normalize_number("nan"), None);
        assert_eq!(normalize_number("inf"), None);
        assert_eq!(normalize_number(","), None);
    }

    #[test]
    fn test_not_found_text() {
        let text = not_found_text("404");
        assert!(text.contains("`404`"));
        assert!(text.contains("no fact found"));
    }

    #[test]
    fn test_format_fact() {
        let footer = Footer::default();
        let text = format_fact("42", "42 is the answer.", &footer);

        assert!(text.starts_with("🔎 ✅ *NUMBER FACT FOUND* "));
        assert!(text.contains("🔢 ├ Number: 42"));
        // markdown metacharacters in the fact body must arrive escaped
        assert!(text.contains("📚 └ Fact: 42 is the answer\\."));
        assert!(text.ends_with(&render_footer(&footer)));
    }

    #[test]
    fn test_render_footer() {
        let footer = Footer::default();
        let text = render_footer(&footer);

        assert!(text.contains("Channels to join for full use:"));
        assert_eq!(text.matches("👇 [").count(), 2);
        assert!(text.contains("(https://t.me/"));
    }
}
