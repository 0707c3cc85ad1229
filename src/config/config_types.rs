// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub stroke_color: [f32; 3],
    pub background_color: [f32; 3],
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    pub node_count: usize,
    pub ring_count: usize,   // semicircle arcs per figure
    pub tick_interval: f32,  // seconds between animation ticks
    pub size_factor: f32,    // figure size = slot gap / size_factor
    pub stroke_factor: f32,  // stroke weight = min(w, h) / stroke_factor
}
