/// One-way: `Playing` becomes `GameOver` once health reaches zero and never
/// goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}
