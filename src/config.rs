use serde::Deserialize;
use tokio::fs::read_to_string;

pub const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN";

fn default_facts_url() -> String {
    "http://numbersapi.com/".to_string()
}

fn default_signature() -> String {
    "made with number-trivia-bot".to_string()
}

fn default_channels() -> Vec<Channel> {
    vec![
        Channel {
            label: "@examplechannel".to_string(),
            url: "https://t.me/examplechannel".to_string(),
        },
        Channel {
            label: "@examplegroup".to_string(),
            url: "https://t.me/examplegroup".to_string(),
        },
    ]
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    telegram: Telegram,
    #[serde(default)]
    lookup: Lookup,
    #[serde(default)]
    footer: Footer,
}

impl Config {
    pub fn telegram(&self) -> &Telegram {
        &self.telegram
    }

    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    pub async fn read(file: &str) -> anyhow::Result<Self> {
        let content = read_to_string(file).await?;
        Ok(toml::from_str(&content)?)
    }

    /// Refuse to serve traffic with a missing or placeholder bot token.
    pub fn check(&self) -> anyhow::Result<()> {
        let key = self.telegram.api_key();
        if key.is_empty() || key.eq(TOKEN_PLACEHOLDER) {
            anyhow::bail!(
                "Telegram bot token is not set, replace {TOKEN_PLACEHOLDER:?} in the configuration file with your token"
            );
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Telegram {
    #[serde(alias = "server", alias = "api-server")]
    api_server: Option<String>,
    #[serde(alias = "key", alias = "api-key", alias = "api")]
    api_key: String,
}

impl Telegram {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_server(&self) -> Option<&String> {
        self.api_server.as_ref()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Lookup {
    #[serde(
        alias = "url",
        alias = "facts-url",
        default = "default_facts_url"
    )]
    facts_url: String,
}

impl Lookup {
    pub fn facts_url(&self) -> &str {
        &self.facts_url
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            facts_url: default_facts_url(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Footer {
    #[serde(default = "default_signature")]
    signature: String,
    #[serde(default = "default_channels")]
    channels: Vec<Channel>,
}

impl Footer {
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            signature: default_signature(),
            channels: default_channels(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Channel {
    label: String,
    url: String,
}

impl Channel {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_minimal() {
        let config: Config = toml::from_str(
            r#"
            [telegram]
            api-key = "123456:abcdef"
            "#,
        )
        .unwrap();

        assert!(config.check().is_ok());
        assert_eq!(config.lookup().facts_url(), "http://numbersapi.com/");
        assert_eq!(config.footer().channels().len(), 2);
    }

    #[test]
    fn test_aliases() {
        let config: Config = toml::from_str(
            r#"
            [telegram]
            key = "123456:abcdef"
            server = "https://tg.example.com"

            [lookup]
            url = "http://facts.example.com/"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.telegram().api_server().map(String::as_str),
            Some("https://tg.example.com")
        );
        assert_eq!(config.lookup().facts_url(), "http://facts.example.com/");
    }

    #[test]
    fn test_reject_placeholder_token() {
        let config: Config = toml::from_str(
            r#"
            [telegram]
            api-key = "YOUR_BOT_TOKEN"
            "#,
        )
        .unwrap();

        assert!(config.check().is_err());

        let config: Config = toml::from_str(
            r#"
            [telegram]
            api-key = ""
            "#,
        )
        .unwrap();

        assert!(config.check().is_err());
    }

    #[test]
    fn test_footer_section() {
        let config: Config = toml::from_str(
            r#"
            [telegram]
            api-key = "123456:abcdef"

            [footer]
            signature = "made by example"
            channels = [
                { label = "@first", url = "https://t.me/first" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.footer().signature(), "made by example");
        assert_eq!(config.footer().channels().len(), 1);
        assert_eq!(config.footer().channels()[0].label(), "@first");
    }
}
