use std::path::PathBuf;

pub const DATA_DIR: &str = "data/knowledge";
pub const TOP_K: usize = 5;
pub const CHUNK_SIZE: usize = 800;
pub const CHUNK_OVERLAP: usize = 100;

/// Window length and shared characters between consecutive windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    pub size: usize,
    pub overlap: usize,
}

impl ChunkConfig {
    /// Window length, never zero.
    pub fn window(&self) -> usize {
        self.size.max(1)
    }

    /// Distance between window starts, clamped to 1 so chunking always advances.
    pub fn step(&self) -> usize {
        self.window().saturating_sub(self.overlap).max(1)
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self { size: CHUNK_SIZE, overlap: CHUNK_OVERLAP }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Folder scanned (non-recursively) for `.pdf` files.
    pub folder: PathBuf,
    pub top_k: usize,
    pub chunk: ChunkConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self { folder: PathBuf::from(DATA_DIR), top_k: TOP_K, chunk: ChunkConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_700() {
        assert_eq!(ChunkConfig::default().step(), 700);
    }

    #[test]
    fn step_is_clamped() {
        assert_eq!(ChunkConfig { size: 100, overlap: 100 }.step(), 1);
        assert_eq!(ChunkConfig { size: 0, overlap: 0 }.step(), 1);
    }
}
