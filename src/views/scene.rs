// src/views/scene.rs
//
// Composes the node chain with the ticker. A tap arms the active node and
// starts the ticker; each tick advances the node; settlement stops the
// ticker, so one tap drives exactly one rest-to-rest transition.

use nannou::prelude::*;

use crate::animation::{Chain, StepStatus, Ticker};
use crate::config::AnimationConfig;
use crate::draw::{figure_draw, DrawParams, FigureLayout};

pub struct Scene {
    chain: Chain,
    ticker: Ticker,
    layout: FigureLayout,
    ring_count: usize,
}

impl Scene {
    pub fn new(width: f32, height: f32, animation: &AnimationConfig) -> Self {
        let layout = FigureLayout::new(
            width,
            height,
            animation.node_count,
            animation.ring_count,
            animation.size_factor,
            animation.stroke_factor,
        );
        Self {
            chain: Chain::new(animation.node_count),
            ticker: Ticker::new(animation.tick_interval),
            layout,
            ring_count: animation.ring_count,
        }
    }

    pub fn handle_tap(&mut self) {
        if self.chain.start() {
            self.ticker.start();
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.ticker.tick(dt) {
            if let StepStatus::Settled = self.chain.update(self.ring_count) {
                self.ticker.stop();
            }
        }
    }

    pub fn draw(&self, draw: &Draw, params: &DrawParams) {
        for (index, node) in self.chain.nodes().iter().enumerate() {
            figure_draw::draw_figure(draw, index, node.scale(), &self.layout, params);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn stroke_weight(&self) -> f32 {
        self.layout.stroke_weight
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }
}
