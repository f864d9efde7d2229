//! Click the falling tiles before they reach the bottom.
//!
//! Enemies spawn at the top edge on a frame-counted timer while fewer than
//! the cap are alive, fall a fixed distance every frame, and cost one health
//! when they drop past the bottom. A fresh left click removes the first enemy
//! under the cursor and scores its tier. The game ends at zero health.

pub mod enemy;
pub mod hud;
pub mod rules;
pub mod spawner;
pub mod states;

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::AppConfig;
use crate::engine::input::InputState;
use crate::games::{Game, GameWindowDescriptor, SoundCue};
use crate::ui::UiElement;
use enemy::Enemy;
use rules::Rules;
use spawner::{RandomSpawns, SpawnSource, SpawnTimer};
use states::GameState;

#[derive(Debug)]
pub struct TileDestroyer<S = RandomSpawns<StdRng>> {
    title: String,
    playfield: [f32; 2],
    rules: Rules,
    font: PathBuf,
    hit_sound: PathBuf,
    state: GameState,
    enemies: Vec<Enemy>,
    points: u32,
    health: i32,
    spawn_timer: SpawnTimer,
    mouse_held: bool,
    cursor: [f32; 2],
    hud_text: String,
    sound_cues: Vec<SoundCue>,
    spawns: S,
}

impl TileDestroyer {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_spawns(config, RandomSpawns::new(StdRng::from_entropy()))
    }
}

impl<S: SpawnSource> TileDestroyer<S> {
    pub fn with_spawns(config: &AppConfig, spawns: S) -> Self {
        let rules = config.rules.clone();
        let points = 0;
        let health = rules.starting_health;
        Self {
            title: config.engine.app_name.clone(),
            playfield: [
                config.engine.window_width as f32,
                config.engine.window_height as f32,
            ],
            spawn_timer: SpawnTimer::new(rules.spawn_timer_max),
            rules,
            font: config.assets.font.clone(),
            hit_sound: config.assets.hit_sound.clone(),
            state: GameState::Playing,
            enemies: Vec::new(),
            points,
            health,
            mouse_held: false,
            cursor: [0.0, 0.0],
            hud_text: hud::score_line(points, health),
            sound_cues: Vec::new(),
            spawns,
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn hud_text(&self) -> &str {
        &self.hud_text
    }

    pub fn spawn_enemy(&mut self) {
        let enemy = spawner::spawn_enemy(&mut self.spawns, self.playfield[0]);
        tracing::debug!(
            target: "tile_destroyer",
            tier = ?enemy.tier,
            x = enemy.rect.x,
            "enemy spawned"
        );
        self.enemies.push(enemy);
    }

    fn update_enemies(&mut self, left_pressed: bool) {
        if self.enemies.len() < self.rules.max_enemies && self.spawn_timer.tick() {
            self.spawn_enemy();
        }

        let fall = self.rules.fall_speed;
        let bottom = self.playfield[1];
        let before = self.enemies.len();
        self.enemies.retain_mut(|enemy| {
            enemy.fall(fall);
            !enemy.escaped(bottom)
        });
        let escaped = before - self.enemies.len();
        if escaped > 0 {
            self.health -= escaped as i32;
            tracing::info!(target: "tile_destroyer", escaped, health = self.health, "enemy escaped");
        }

        if !left_pressed {
            self.mouse_held = false;
            return;
        }
        if self.mouse_held {
            return;
        }
        self.mouse_held = true;

        let cursor = self.cursor;
        if let Some(index) = self.enemies.iter().position(|enemy| enemy.contains(cursor)) {
            let enemy = self.enemies.remove(index);
            self.points = self.points.saturating_add(enemy.tier.points());
            self.sound_cues.push(SoundCue {
                path: self.hit_sound.clone(),
            });
            tracing::info!(
                target: "tile_destroyer",
                tier = ?enemy.tier,
                points = self.points,
                "enemy destroyed"
            );
        }
    }
}

impl<S: SpawnSource> Game for TileDestroyer<S> {
    fn name(&self) -> &str {
        &self.title
    }

    fn update(&mut self, input: &InputState) {
        if self.state == GameState::Playing {
            self.cursor = input.cursor();
            self.update_enemies(input.left_pressed());
            self.hud_text = hud::score_line(self.points, self.health);
        }

        if self.health <= 0 && self.state == GameState::Playing {
            self.state = GameState::GameOver;
            tracing::info!(target: "tile_destroyer", points = self.points, "game over");
        }
    }

    fn window_descriptor(&self) -> GameWindowDescriptor {
        GameWindowDescriptor {
            title: Some(self.title.clone()),
            width: Some(self.playfield[0] as u32),
            height: Some(self.playfield[1] as u32),
            resizable: false,
            font: Some(self.font.clone()),
        }
    }

    fn ui_elements(&self) -> Vec<UiElement> {
        let mut elements: Vec<UiElement> = self
            .enemies
            .iter()
            .map(|enemy| UiElement::quad(enemy.rect, enemy.tier.color()))
            .collect();
        elements.push(hud::score_text(&self.hud_text));
        if self.health <= 0 {
            elements.push(hud::game_over_text(self.playfield));
        }
        elements
    }

    fn drain_sound_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sound_cues)
    }
}
