use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tile_destroyer::config::AppConfig;
use tile_destroyer::engine::input::InputState;
use tile_destroyer::games::Game;
use tile_destroyer::games::TileDestroyer;
use tile_destroyer::games::tile_destroyer::enemy::Tier;
use tile_destroyer::games::tile_destroyer::spawner::{RandomSpawns, SpawnSource};
use tile_destroyer::games::tile_destroyer::states::GameState;
use tile_destroyer::ui::UiElement;

/// Replays fixed (tier, offset) pairs, then keeps spawning red tiles at x = 0.
struct ScriptedSpawns {
    script: VecDeque<(Tier, u32)>,
}

impl ScriptedSpawns {
    fn new(script: &[(Tier, u32)]) -> Self {
        Self {
            script: script.iter().copied().collect(),
        }
    }

    fn peek(&self) -> (Tier, u32) {
        self.script.front().copied().unwrap_or((Tier::Red, 0))
    }
}

impl SpawnSource for ScriptedSpawns {
    fn tier_index(&mut self) -> usize {
        let tier = self.peek().0;
        Tier::ALL.iter().position(|t| *t == tier).unwrap()
    }

    fn offset(&mut self, max: u32) -> u32 {
        let offset = self.script.pop_front().map(|(_, x)| x).unwrap_or(0);
        offset.min(max.saturating_sub(1))
    }
}

fn scripted_game(script: &[(Tier, u32)]) -> TileDestroyer<ScriptedSpawns> {
    TileDestroyer::with_spawns(&AppConfig::default(), ScriptedSpawns::new(script))
}

fn idle() -> InputState {
    InputState::default()
}

fn click_at(cursor: [f32; 2]) -> InputState {
    let mut input = InputState::default();
    input.set_cursor(cursor);
    input.set_left_pressed(true);
    input
}

#[test]
fn first_update_spawns_immediately() {
    let mut game = scripted_game(&[(Tier::Blue, 300)]);
    assert!(game.enemies().is_empty());

    game.update(&idle());

    assert_eq!(game.enemies().len(), 1);
    let enemy = game.enemies()[0];
    assert_eq!(enemy.tier, Tier::Blue);
    assert_eq!(enemy.rect.x, 300.0);
    assert_eq!(enemy.rect.y, 1.0, "spawned at the top, then fell one step");
}

#[test]
fn clicking_a_fresh_red_enemy_scores_ten() {
    let mut game = scripted_game(&[(Tier::Red, 100)]);
    game.update(&idle());
    assert_eq!(game.points(), 0);

    // The enemy falls to y = 2 before the click is tested.
    game.update(&click_at([105.0, 5.0]));

    assert_eq!(game.points(), 10);
    assert!(game.enemies().is_empty());
    assert_eq!(game.health(), 20);
    assert_eq!(game.hud_text(), "Points: 10\nHealth: 20");

    let cues = game.drain_sound_cues();
    assert_eq!(cues.len(), 1);
    assert!(cues[0].path.ends_with("Explosion.wav"));
    assert!(game.drain_sound_cues().is_empty());
}

#[test]
fn every_tier_scores_its_fixed_value() {
    for tier in Tier::ALL {
        let mut game = scripted_game(&[(tier, 0)]);
        game.update(&idle());
        game.update(&click_at([1.0, 3.0]));
        assert_eq!(game.points(), tier.points(), "{tier:?}");
        assert!(game.enemies().is_empty());
    }
}

#[test]
fn one_click_removes_at_most_one_enemy_and_holding_does_not_repeat() {
    let mut game = scripted_game(&[(Tier::Red, 100), (Tier::Red, 100)]);
    for _ in 0..12 {
        game.update(&idle());
    }
    // First spawn has fallen 12 steps, second spawned on frame 12.
    let ys: Vec<f32> = game.enemies().iter().map(|e| e.rect.y).collect();
    assert_eq!(ys, vec![12.0, 1.0]);

    // After the next fall the enemies cover y in [13, 33) and [2, 22).
    let overlap = [110.0, 15.0];
    game.update(&click_at(overlap));
    assert_eq!(game.points(), 10);
    assert_eq!(game.enemies().len(), 1);
    assert_eq!(game.enemies()[0].rect.y, 2.0, "list order decides which one goes");

    let survivor = game.enemies()[0].rect;
    let on_survivor = [110.0, survivor.y + 1.0 + 5.0];
    game.update(&click_at(on_survivor));
    assert_eq!(game.points(), 10, "held button must not score again");
    assert_eq!(game.enemies().len(), 1);

    game.update(&idle());
    let survivor = game.enemies()[0].rect;
    game.update(&click_at([110.0, survivor.y + 1.0 + 5.0]));
    assert_eq!(game.points(), 20);
    assert!(game.enemies().is_empty());
}

#[test]
fn missed_click_changes_nothing() {
    let mut game = scripted_game(&[(Tier::Green, 0)]);
    game.update(&idle());
    game.update(&click_at([700.0, 500.0]));

    assert_eq!(game.points(), 0);
    assert_eq!(game.enemies().len(), 1);
    assert!(game.drain_sound_cues().is_empty());
}

#[test]
fn enemy_count_never_exceeds_the_cap() {
    let mut game = scripted_game(&[]);
    let mut most = 0;
    for _ in 0..2_000 {
        game.update(&idle());
        assert!(game.enemies().len() <= 5);
        most = most.max(game.enemies().len());
    }
    assert_eq!(most, 5);
}

#[test]
fn escaping_enemy_costs_exactly_one_health() {
    let mut game = scripted_game(&[(Tier::Yellow, 0)]);
    let mut escapes = 0;
    let mut health = game.health();
    for _ in 0..700 {
        game.update(&idle());
        assert!(game.health() <= health, "health never increases");
        escapes += health - game.health();
        health = game.health();
        if escapes > 0 {
            break;
        }
    }
    assert_eq!(escapes, 1);
    assert_eq!(game.health(), 19);
    assert!(game.enemies().iter().all(|e| e.rect.y <= 600.0));
}

#[test]
fn twenty_escapes_end_the_game_and_freeze_it() {
    let mut game = scripted_game(&[]);
    let mut frames = 0;
    while !game.is_game_over() {
        let before = game.health();
        game.update(&idle());
        assert!(game.health() == before || game.health() == before - 1);
        frames += 1;
        assert!(frames < 100_000, "game never ended");
    }

    assert_eq!(game.health(), 0);
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.hud_text(), "Points: 0\nHealth: 0");

    let frozen = game.enemies().to_vec();
    let target = frozen
        .first()
        .map(|enemy| [enemy.rect.x + 1.0, enemy.rect.y + 1.0])
        .unwrap_or([0.0, 0.0]);
    for frame in 0..500 {
        let input = if frame % 2 == 0 {
            click_at(target)
        } else {
            idle()
        };
        game.update(&input);
        assert_eq!(game.enemies(), frozen.as_slice());
        assert_eq!(game.health(), 0);
        assert_eq!(game.points(), 0);
        assert!(game.is_game_over());
    }
}

#[test]
fn game_over_banner_only_after_the_end() {
    let has_banner = |game: &TileDestroyer<ScriptedSpawns>| {
        game.ui_elements().iter().any(|element| {
            matches!(element, UiElement::Text(text) if text.content == "Game Over!")
        })
    };

    let mut config = AppConfig::default();
    config.rules.starting_health = 1;
    let mut game = TileDestroyer::with_spawns(&config, ScriptedSpawns::new(&[]));

    game.update(&idle());
    assert!(!has_banner(&game));
    while !game.is_game_over() {
        game.update(&idle());
    }
    assert!(has_banner(&game));
}

#[test]
fn draw_list_puts_enemies_under_the_score() {
    let mut game = scripted_game(&[(Tier::Magenta, 40)]);
    game.update(&idle());

    let elements = game.ui_elements();
    assert_eq!(elements.len(), 2);
    match &elements[0] {
        UiElement::Quad { rect, color } => {
            assert_eq!(rect.x, 40.0);
            assert_eq!(rect.width, 80.0);
            assert_eq!(*color, Tier::Magenta.color());
        }
        other => panic!("expected enemy quad, got {other:?}"),
    }
    match &elements[1] {
        UiElement::Text(text) => assert_eq!(text.content, "Points: 0\nHealth: 20"),
        other => panic!("expected score text, got {other:?}"),
    }
}

#[test]
fn window_is_fixed_size_with_the_game_font() {
    let game = scripted_game(&[]);
    let window = game.window_descriptor();
    assert_eq!(window.width, Some(800));
    assert_eq!(window.height, Some(600));
    assert!(!window.resizable);
    assert_eq!(window.title.as_deref(), Some("Tile Destroyer"));
    assert!(window.font.unwrap().ends_with("Retro Gaming.ttf"));
}

#[test]
fn random_play_keeps_score_and_health_consistent() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let spawns = RandomSpawns::new(ChaCha8Rng::seed_from_u64(99));
    let mut game = TileDestroyer::with_spawns(&AppConfig::default(), spawns);

    let mut held = false;
    for _ in 0..20_000 {
        let mut input = InputState::default();
        input.set_cursor([rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)]);
        let pressed = rng.gen_bool(0.3);
        input.set_left_pressed(pressed);

        let (points, health, count) = (game.points(), game.health(), game.enemies().len());
        let was_over = game.is_game_over();
        game.update(&input);

        let gained = game.points() - points;
        let fresh_click = pressed && !held;
        if gained > 0 {
            assert!(fresh_click, "points only on a click edge");
            assert!(Tier::ALL.iter().any(|tier| tier.points() == gained));
        }
        assert!(game.health() <= health);
        assert!(game.enemies().len() <= 5);
        let lost = (health - game.health()) as usize;
        let clicked = usize::from(gained > 0);
        assert!(game.enemies().len() + lost + clicked <= count + 1);
        if was_over {
            assert!(game.is_game_over());
        }
        held = pressed;
    }
}
