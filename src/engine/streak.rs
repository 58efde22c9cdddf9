use std::fs;
use std::path::PathBuf;

/// Persistence port for the streak counter: one integer, read once at
/// startup, written on every change. Writes are fire-and-forget.
pub trait StreakStore {
    /// Stored streak; missing or unparseable values read as 0.
    fn read(&self) -> u32;
    fn write(&mut self, streak: u32);
}

/// Streak kept as a bare decimal string in the platform data directory,
/// e.g. `~/.local/share/bar-and-car/streak` on Linux.
pub struct FileStreakStore {
    path: PathBuf,
}

impl FileStreakStore {
    pub fn new() -> Self {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("bar-and-car");
        fs::create_dir_all(&path).ok();
        path.push("streak");
        Self { path }
    }
}

impl StreakStore for FileStreakStore {
    fn read(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn write(&mut self, streak: u32) {
        let _ = fs::write(&self.path, streak.to_string());
    }
}
