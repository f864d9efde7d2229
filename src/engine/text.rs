use std::collections::HashMap;
use std::sync::Arc;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};

const COVERAGE_LEVELS: f32 = 8.0;
const CACHE_LIMIT: usize = 32;

/// Horizontal span of pixels sharing one quantized coverage value, in
/// coordinates relative to the top-left of the text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageRun {
    pub x: u32,
    pub y: u32,
    pub len: u32,
    pub alpha: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBlock {
    pub width: f32,
    pub height: f32,
    pub runs: Vec<CoverageRun>,
}

/// Row-major glyph coverage in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct CoverageGrid {
    width: u32,
    height: u32,
    cells: Vec<f32>,
}

impl CoverageGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0.0; (width * height) as usize],
        }
    }

    pub fn accumulate(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.cells[idx] = (self.cells[idx] + coverage).min(1.0);
    }

    pub fn runs(&self) -> Vec<CoverageRun> {
        let mut runs = Vec::new();
        for y in 0..self.height {
            let row = &self.cells[(y * self.width) as usize..((y + 1) * self.width) as usize];
            let mut current: Option<CoverageRun> = None;
            for (x, &coverage) in row.iter().enumerate() {
                let alpha = (coverage * COVERAGE_LEVELS).round() / COVERAGE_LEVELS;
                if let Some(run) = current.as_mut() {
                    if run.alpha == alpha {
                        run.len += 1;
                        continue;
                    }
                }
                runs.extend(current.take());
                if alpha > 0.0 {
                    current = Some(CoverageRun {
                        x: x as u32,
                        y,
                        len: 1,
                        alpha,
                    });
                }
            }
            runs.extend(current);
        }
        runs
    }
}

/// Lays out text with the UI font. Without a font every request yields
/// nothing, so the game keeps running with no visible text.
pub struct TextRasterizer {
    font: Option<FontVec>,
    cache: HashMap<(String, u32), Arc<TextBlock>>,
}

impl TextRasterizer {
    pub fn new(font: Option<FontVec>) -> Self {
        Self {
            font,
            cache: HashMap::new(),
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn rasterize(&mut self, text: &str, size: f32) -> Option<Arc<TextBlock>> {
        let font = self.font.as_ref()?;
        let key = (text.to_string(), size.to_bits());
        if let Some(block) = self.cache.get(&key) {
            return Some(Arc::clone(block));
        }

        if self.cache.len() >= CACHE_LIMIT {
            self.cache.clear();
        }
        let block = Arc::new(layout(font, text, size));
        self.cache.insert(key, Arc::clone(&block));
        Some(block)
    }
}

fn layout(font: &FontVec, text: &str, size: f32) -> TextBlock {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let line_height = scaled.height() + scaled.line_gap();

    let mut glyphs = Vec::new();
    let mut width: f32 = 0.0;
    for (line_idx, line) in text.lines().enumerate() {
        let mut caret = point(0.0, scaled.ascent() + line_idx as f32 * line_height);
        let mut previous = None;
        for ch in line.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(scale, caret));
            caret.x += scaled.h_advance(id);
            previous = Some(id);
        }
        width = width.max(caret.x);
    }
    let height = text.lines().count() as f32 * line_height;

    let mut grid = CoverageGrid::new(width.ceil() as u32, height.ceil() as u32);
    for glyph in glyphs {
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                grid.accumulate(
                    bounds.min.x as i32 + x as i32,
                    bounds.min.y as i32 + y as i32,
                    coverage,
                );
            });
        }
    }

    TextBlock {
        width,
        height,
        runs: grid.runs(),
    }
}
