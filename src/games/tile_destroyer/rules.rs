use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub starting_health: i32,
    /// Frames between spawns while below the cap.
    pub spawn_timer_max: f32,
    pub max_enemies: usize,
    /// Distance every enemy falls per frame.
    pub fall_speed: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_health: 20,
            spawn_timer_max: 10.0,
            max_enemies: 5,
            fall_speed: 1.0,
        }
    }
}
