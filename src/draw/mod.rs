// src/draw/mod.rs
// The figure drawing module

pub mod figure_draw;

pub use figure_draw::FigureLayout;

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgb(0.1, 0.1, 0.1),
            stroke_weight: 5.0,
        }
    }
}
