use anyhow::Result;
use reqwest::blocking::Client;

use crate::model::lyric::LyricQuote;

/// Where lyrics come from. The engine only ever pulls one quote at a time;
/// the trait exists so tests can script responses.
pub trait LyricSource {
    fn fetch(&mut self) -> Result<LyricQuote>;
}

/// Production source: blocking GET against the public lyric API, decoded
/// straight into the wire model. The blocking client's default timeout
/// bounds how long the engine thread can stall on a dead endpoint.
pub struct HttpLyricSource {
    client: Client,
    url: String,
}

impl HttpLyricSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl LyricSource for HttpLyricSource {
    fn fetch(&mut self) -> Result<LyricQuote> {
        let quote = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json::<LyricQuote>()?;
        Ok(quote)
    }
}
