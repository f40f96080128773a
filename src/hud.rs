//! Score overlay layout
//!
//! The score is drawn as a row of digit quads centred on x = 0. The
//! least-significant digit is laid out first, at the right end of the row.

use glam::Vec3;

use crate::scene::{DrawItem, MeshHandle, Sprite, TextureHandle};
use crate::tuning::SimConfig;

/// Base-10 digits, least significant first (`0` yields `[0]`)
pub fn score_digits(mut score: u32) -> Vec<u8> {
    let mut digits = Vec::new();
    loop {
        digits.push((score % 10) as u8);
        score /= 10;
        if score == 0 {
            break;
        }
    }
    digits
}

/// Where one digit quad goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitPlacement {
    pub digit: u8,
    pub position: Vec3,
    pub scale: Vec3,
}

/// Placements for every digit of `score`, least significant first
pub fn layout_score(score: u32, config: &SimConfig) -> Vec<DigitPlacement> {
    let digits = score_digits(score);
    let mut x = (digits.len() - 1) as f32 * config.digit_spacing * 0.5;
    let scale = Vec3::new(config.digit_scale, config.digit_scale, 1.0);

    digits
        .into_iter()
        .map(|digit| {
            let placement = DigitPlacement {
                digit,
                position: Vec3::new(x, config.digit_row_y, config.digit_z),
                scale,
            };
            x -= config.digit_spacing;
            placement
        })
        .collect()
}

/// Reusable digit quad for the score row
#[derive(Debug, Clone)]
pub struct ScoreHud {
    sprite: Sprite,
    digits: [TextureHandle; 10],
}

impl ScoreHud {
    pub fn new(mesh: MeshHandle, digits: [TextureHandle; 10]) -> Self {
        Self {
            sprite: Sprite::new(mesh, digits[0]),
            digits,
        }
    }

    /// One draw item per digit; the shared quad is re-posed for each
    pub fn draw_items(&mut self, score: u32, config: &SimConfig) -> Vec<DrawItem> {
        layout_score(score, config)
            .into_iter()
            .map(|p| {
                self.sprite.transform.set_position(p.position);
                self.sprite.transform.set_scale(p.scale);
                self.sprite.texture = self.digits[p.digit as usize];
                self.sprite.draw_item()
            })
            .collect()
    }
}
