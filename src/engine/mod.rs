pub mod config;
pub mod engine;
pub mod evaluate;
pub mod lyric_client;
pub mod normalize;
pub mod protocol;
pub mod sampler;
pub mod schedule;
pub mod streak;
