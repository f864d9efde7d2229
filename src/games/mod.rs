pub mod tile_destroyer;

use std::path::PathBuf;

use crate::engine::input::InputState;
use crate::ui::UiElement;

#[derive(Debug, Clone)]
pub struct GameWindowDescriptor {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resizable: bool,
    pub font: Option<PathBuf>,
}

impl Default for GameWindowDescriptor {
    fn default() -> Self {
        Self {
            title: None,
            width: None,
            height: None,
            resizable: true,
            font: None,
        }
    }
}

/// Request to play a sound file, resolved by the engine's resource manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCue {
    pub path: PathBuf,
}

pub trait Game: Send {
    fn name(&self) -> &str;
    fn update(&mut self, input: &InputState);

    fn window_descriptor(&self) -> GameWindowDescriptor {
        GameWindowDescriptor::default()
    }

    fn ui_elements(&self) -> Vec<UiElement> {
        Vec::new()
    }

    fn drain_sound_cues(&mut self) -> Vec<SoundCue> {
        Vec::new()
    }
}

pub use tile_destroyer::TileDestroyer;
