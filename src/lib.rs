// Lunar Lander and a simple 2D scene on winit + wgpu

pub mod core;
pub mod engine;
pub mod game;
