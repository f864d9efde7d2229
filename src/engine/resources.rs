use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ab_glyph::FontVec;
use anyhow::{Context, Result, anyhow};

/// Encoded sound file kept in memory; decoded on every playback.
#[derive(Debug, Clone)]
pub struct SoundClip {
    name: String,
    bytes: Arc<[u8]>,
}

impl SoundClip {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }
}

#[derive(Debug)]
pub struct ResourceManager {
    root: PathBuf,
    sounds: HashMap<PathBuf, SoundClip>,
}

impl ResourceManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sounds: HashMap::new(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn load_font(&self, path: &Path) -> Result<FontVec> {
        let full = self.resolve(path);
        let bytes = fs::read(&full).with_context(|| format!("reading {}", full.display()))?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|err| anyhow!("parsing {}: {err}", full.display()))?;
        tracing::info!(target: "resources", path = %full.display(), "font loaded");
        Ok(font)
    }

    /// Loads a sound on first use. Failures are not cached, so a file that
    /// appears later is picked up on the next request.
    pub fn sound(&mut self, path: &Path) -> Result<SoundClip> {
        if let Some(clip) = self.sounds.get(path) {
            return Ok(clip.clone());
        }

        let full = self.resolve(path);
        let bytes = fs::read(&full).with_context(|| format!("reading {}", full.display()))?;
        let clip = SoundClip::new(path.display().to_string(), bytes);
        tracing::debug!(target: "resources", path = %full.display(), "sound cached");
        self.sounds.insert(path.to_path_buf(), clip.clone());
        Ok(clip)
    }

    pub fn cached_sound_count(&self) -> usize {
        self.sounds.len()
    }
}
