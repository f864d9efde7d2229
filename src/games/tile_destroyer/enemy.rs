use crate::ui::{Color, Rect};

/// Enemy classes ordered smallest to largest. Smaller enemies are worth more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Red,
    Blue,
    Cyan,
    Magenta,
    Green,
    Yellow,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::Red,
        Tier::Blue,
        Tier::Cyan,
        Tier::Magenta,
        Tier::Green,
        Tier::Yellow,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Indices past the last tier fold into `Yellow`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Tier::Yellow)
    }

    pub fn size(self) -> f32 {
        match self {
            Tier::Red => 20.0,
            Tier::Blue => 40.0,
            Tier::Cyan => 60.0,
            Tier::Magenta => 80.0,
            Tier::Green => 100.0,
            Tier::Yellow => 120.0,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Tier::Red => Color::RED,
            Tier::Blue => Color::BLUE,
            Tier::Cyan => Color::CYAN,
            Tier::Magenta => Color::MAGENTA,
            Tier::Green => Color::GREEN,
            Tier::Yellow => Color::YELLOW,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Tier::Red => 10,
            Tier::Blue => 8,
            Tier::Cyan => 6,
            Tier::Magenta => 4,
            Tier::Green => 2,
            Tier::Yellow => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub tier: Tier,
}

impl Enemy {
    pub fn new(tier: Tier, x: f32, y: f32) -> Self {
        let size = tier.size();
        Self {
            rect: Rect::new(x, y, size, size),
            tier,
        }
    }

    pub fn fall(&mut self, distance: f32) {
        self.rect.y += distance;
    }

    /// The top edge has passed the bottom of the playfield.
    pub fn escaped(&self, playfield_height: f32) -> bool {
        self.rect.y > playfield_height
    }

    pub fn contains(&self, point: [f32; 2]) -> bool {
        self.rect.contains(point)
    }
}
