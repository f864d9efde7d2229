pub mod audio;
pub mod core;
pub mod input;
pub mod renderer;
pub mod resources;
pub mod text;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use audio::AudioEngine;
use self::core::{EngineConfig, FrameLimiter};
use input::InputState;
use renderer::Renderer;
use resources::ResourceManager;
use text::TextRasterizer;
use wgpu::SurfaceError;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{WindowBuilder, WindowButtons},
};

use crate::games::Game;
use crate::ui::UiElement;

pub struct EngineApp {
    config: EngineConfig,
    input: InputState,
    resources: ResourceManager,
    audio: AudioEngine,
    game: Box<dyn Game>,
    ui_elements: Vec<UiElement>,
}

impl EngineApp {
    pub fn new(config: EngineConfig, resources: ResourceManager, game: impl Game + 'static) -> Self {
        Self {
            input: InputState::default(),
            resources,
            audio: AudioEngine::new(),
            game: Box::new(game),
            config,
            ui_elements: Vec::new(),
        }
    }

    pub fn run(self) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            game = %self.game.name(),
            "Engine starting"
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut engine = self;
        let window_prefs = engine.game.window_descriptor();
        let window_width = window_prefs.width.unwrap_or(engine.config.window_width);
        let window_height = window_prefs.height.unwrap_or(engine.config.window_height);
        let world = [window_width as f32, window_height as f32];
        let window_title = window_prefs
            .title
            .clone()
            .unwrap_or_else(|| engine.config.app_name.clone());

        let buttons = if window_prefs.resizable {
            WindowButtons::all()
        } else {
            WindowButtons::CLOSE
        };
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(window_title)
                .with_resizable(window_prefs.resizable)
                .with_enabled_buttons(buttons)
                .with_inner_size(LogicalSize::new(window_width as f64, window_height as f64))
                .build(&event_loop)
                .context("failed to create window")?,
        );

        let font = window_prefs
            .font
            .as_deref()
            .and_then(|path| match engine.resources.load_font(path) {
                Ok(font) => Some(font),
                Err(err) => {
                    tracing::error!(target: "engine", "failed to load font: {err:#}");
                    None
                }
            });
        let mut text = TextRasterizer::new(font);
        let mut renderer: Option<Renderer> = None;
        let mut limiter = FrameLimiter::from_fps(engine.config.target_fps, Instant::now());
        let mut last_frame = Instant::now();

        event_loop
            .run(move |event, target| match event {
                Event::Resumed => {
                    if renderer.is_none() {
                        match pollster::block_on(Renderer::new(window.clone(), world)) {
                            Ok(new_renderer) => {
                                tracing::info!(target: "engine", "renderer initialized");
                                renderer = Some(new_renderer);
                            }
                            Err(err) => {
                                tracing::error!(target: "engine", "failed to initialize renderer: {err:#}");
                                target.exit();
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    if renderer.is_some() {
                        if limiter.ready(Instant::now()) {
                            window.request_redraw();
                        }
                        target.set_control_flow(ControlFlow::WaitUntil(limiter.deadline()));
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    let surface = renderer
                        .as_ref()
                        .map(Renderer::size)
                        .unwrap_or_else(|| window.inner_size());
                    engine.input.handle_window_event(&event, surface, world);
                    if engine.input.quit_requested() {
                        target.exit();
                        return;
                    }

                    match event {
                        WindowEvent::Resized(size) => {
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(size);
                            }
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            let new_size = window.inner_size();
                            let _ = inner_size_writer.request_inner_size(new_size);
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(new_size);
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            if let Some(renderer) = renderer.as_mut() {
                                let now = Instant::now();
                                let delta = now.duration_since(last_frame);
                                last_frame = now;

                                engine.tick(delta);
                                match renderer.render(&engine.ui_elements, &mut text) {
                                    Ok(()) => {}
                                    Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                                        renderer.resize(window.inner_size());
                                    }
                                    Err(SurfaceError::OutOfMemory) => {
                                        tracing::error!(target: "engine", "GPU out of memory, shutting down engine");
                                        target.exit();
                                    }
                                    Err(SurfaceError::Timeout) => {
                                        tracing::warn!(target: "engine", "surface timeout, retrying next frame");
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            })
            .map_err(|err| anyhow!(err))?;

        tracing::info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }

    fn tick(&mut self, delta: std::time::Duration) {
        tracing::trace!(
            target: "engine",
            frame_delta_us = %delta.as_micros(),
            "frame tick"
        );
        self.game.update(&self.input);
        self.ui_elements = self.game.ui_elements();
        for cue in self.game.drain_sound_cues() {
            self.play(&cue.path);
        }
    }

    fn play(&mut self, path: &Path) {
        if let Err(err) = play_cue(&mut self.resources, &self.audio, path) {
            tracing::error!(target: "engine", "failed to play sound: {err:#}");
        }
    }
}

fn play_cue(resources: &mut ResourceManager, audio: &AudioEngine, path: &Path) -> Result<()> {
    let clip = resources.sound(path).context("failed to load sound")?;
    audio.play(&clip)
}
