// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use ringline::{config::Config, draw::DrawParams, views::Scene};

struct Model {
    scene: Scene,
    stroke: DrawParams,
    background_color: Rgb<f32>,
    last_update: Instant,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().expect("Failed to load config file");

    app.new_window()
        .title("ringline 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();

    let scene = Scene::new(
        config.window.width as f32,
        config.window.height as f32,
        &config.animation,
    );

    let [r, g, b] = config.style.stroke_color;
    let [br, bg, bb] = config.style.background_color;

    Model {
        stroke: DrawParams {
            color: rgb(r, g, b),
            stroke_weight: scene.stroke_weight(),
        },
        scene,
        background_color: rgb(br, bg, bb),
        last_update: Instant::now(),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if let MouseButton::Left = button {
        model.scene.handle_tap();
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    model.scene.update(dt);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background_color);

    model.scene.draw(&draw, &model.stroke);

    draw.to_frame(app, &frame).unwrap();
}
