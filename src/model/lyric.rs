use serde::Deserialize;

/// Payload returned by the lyric API. `quote` is the line shown to the
/// player; `song` and `album` are the answers the round is scored against.
#[derive(Debug, Clone, Deserialize)]
pub struct LyricQuote {
    pub quote: String,
    pub song: String,
    pub album: String,
}
