// Engine modules: app runner, timing, input, assets, renderer

pub mod app;
pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
