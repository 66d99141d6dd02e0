pub mod fetch;
pub mod grade;
pub mod init;
pub mod play;
pub mod validate;

use anyhow::Result;

use orthoquiz_client::OrthoquizConfig;
use orthoquiz_core::locale::Language;

/// `--lang` wins over the configured language.
pub fn resolve_language(lang: Option<&str>, config: &OrthoquizConfig) -> Result<Language> {
    match lang {
        Some(l) => l.parse().map_err(|e: String| anyhow::anyhow!("{}", e)),
        None => Ok(config.language),
    }
}
