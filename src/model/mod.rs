pub mod feedback;
pub mod lyric;
pub mod round;
pub mod snapshot;
