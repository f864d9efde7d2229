use crate::ui::{Color, TextAnchor, UiElement};

pub const SCORE_TEXT_SIZE: f32 = 24.0;
pub const GAME_OVER_TEXT_SIZE: f32 = 60.0;
pub const GAME_OVER_TEXT: &str = "Game Over!";

pub fn score_line(points: u32, health: i32) -> String {
    format!("Points: {points}\nHealth: {health}")
}

pub fn score_text(content: &str) -> UiElement {
    UiElement::text(
        content,
        [0.0, 0.0],
        SCORE_TEXT_SIZE,
        Color::WHITE,
        TextAnchor::TopLeft,
    )
}

pub fn game_over_text(playfield: [f32; 2]) -> UiElement {
    UiElement::text(
        GAME_OVER_TEXT,
        [playfield[0] / 2.0, playfield[1] / 2.0],
        GAME_OVER_TEXT_SIZE,
        Color::RED,
        TextAnchor::Center,
    )
}
