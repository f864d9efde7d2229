use std::io::Cursor;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

use crate::engine::resources::SoundClip;

/// Owns the output stream; dropping it stops every playing sound.
pub struct AudioEngine {
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl AudioEngine {
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok(output) => {
                tracing::info!(target: "audio", "audio output opened");
                Self {
                    output: Some(output),
                }
            }
            Err(err) => {
                tracing::warn!(target: "audio", %err, "no audio output, running silent");
                Self::silent()
            }
        }
    }

    pub fn silent() -> Self {
        Self { output: None }
    }

    /// Decodes even when silent, so a broken clip is reported either way.
    pub fn play(&self, clip: &SoundClip) -> Result<()> {
        let decoder = Decoder::new(Cursor::new(clip.bytes()))
            .with_context(|| format!("failed to decode {}", clip.name()))?;
        let Some((_, handle)) = self.output.as_ref() else {
            tracing::trace!(target: "audio", clip = %clip.name(), "silent, skipping clip");
            return Ok(());
        };

        handle
            .play_raw(decoder.convert_samples::<f32>())
            .with_context(|| format!("failed to play {}", clip.name()))?;
        Ok(())
    }
}
