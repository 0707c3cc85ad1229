// src/draw/figure_draw.rs
//
// Draws one semicircular-line figure: an axis line that rotates with the
// first half of the node's scale, and a ring of concentric semicircle arcs
// that fill in sequence with the second half.

use nannou::prelude::*;
use std::f32::consts::PI;

use super::DrawParams;
use crate::animation::scale::divide_scale;

/// Screen geometry shared by all figures, derived once from the window size.
#[derive(Debug, Clone)]
pub struct FigureLayout {
    pub gap: f32,
    pub size: f32,
    pub stroke_weight: f32,
    pub node_count: usize,
    pub ring_count: usize,
}

impl FigureLayout {
    pub fn new(
        width: f32,
        height: f32,
        node_count: usize,
        ring_count: usize,
        size_factor: f32,
        stroke_factor: f32,
    ) -> Self {
        let gap = width / (node_count + 1) as f32;
        Self {
            gap,
            size: gap / size_factor,
            stroke_weight: width.min(height) / stroke_factor,
            node_count,
            ring_count,
        }
    }

    /// Horizontal slot center for a node, in nannou's centered coordinates.
    pub fn slot_x(&self, index: usize) -> f32 {
        self.gap * (index + 1) as f32 - self.gap * (self.node_count + 1) as f32 / 2.0
    }
}

pub fn draw_figure(
    draw: &Draw,
    index: usize,
    scale: f32,
    layout: &FigureLayout,
    params: &DrawParams,
) {
    let sc_rotate = divide_scale(scale, 0, 2);
    let sc_ring = divide_scale(scale, 1, 2);

    let draw = draw
        .x_y(layout.slot_x(index), 0.0)
        .rotate(sc_rotate * PI / 2.0);

    // the node's axis
    draw.line()
        .points(pt2(0.0, -layout.size), pt2(0.0, layout.size))
        .color(params.color)
        .stroke_weight(params.stroke_weight);

    for j in 0..layout.ring_count {
        let sweep = divide_scale(sc_ring, j, layout.ring_count);
        if sweep <= 0.0 {
            continue;
        }
        let radius = layout.size * (j + 1) as f32 / layout.ring_count as f32;
        // outer half of the ring mirrors across the axis
        let flip = if j >= layout.ring_count / 2 { -1.0 } else { 1.0 };
        draw.scale_x(flip)
            .polyline()
            .weight(params.stroke_weight)
            .points(semi_arc_points(radius, sweep))
            .color(params.color);
    }
}

/// Polyline approximation of a partial semicircle: one-degree steps from the
/// -90° start angle through `180° * sweep`.
pub fn semi_arc_points(radius: f32, sweep: f32) -> Vec<Point2> {
    let extent = (180.0 * sweep).round() as i32;
    (0..=extent)
        .map(|deg| {
            let theta = (deg as f32 - 90.0) * PI / 180.0;
            pt2(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}
