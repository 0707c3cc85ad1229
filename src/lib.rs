// src/lib.rs

pub mod animation;
pub mod config;
pub mod draw;
pub mod views;
