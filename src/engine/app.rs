// Window, event loop and per-frame driver shared by every demo

use crate::engine::assets::AssetLoader;
use crate::engine::game_loop::GameLoop;
use crate::engine::input::{Action, InputManager};
use crate::engine::renderer::{DrawList, Renderer};
use anyhow::Result;
use glam::Vec4;
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

/// Window parameters for a demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

/// What the host loop should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppFlow {
    Continue,
    Exit,
}

/// A demo driven by [`run`]: input → update → render, once per frame
pub trait Game {
    fn window_settings(&self) -> WindowSettings;

    /// Acquire GPU resources. Called once before the first frame.
    fn load(&mut self, _renderer: &mut Renderer) -> Result<()> {
        Ok(())
    }

    /// Advance the simulation by `dt` seconds using the current input
    fn update(&mut self, _input: &InputManager, _dt: f32) -> AppFlow {
        AppFlow::Continue
    }

    /// Queue this frame's sprites
    fn render(&mut self, _draws: &mut DrawList, _dt: f32) {}

    /// Background color for the frame
    fn clear_color(&self) -> Vec4;
}

/// Open the window, load the game and run until it quits
pub fn run<G: Game>(mut game: G, loader: AssetLoader) -> Result<()> {
    let settings = game.window_settings();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(settings.title)
            .with_inner_size(LogicalSize::new(settings.width, settings.height))
            .with_resizable(settings.resizable)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone(), loader))?;

    if let Err(e) = game.load(&mut renderer) {
        error!("Failed to load {}: {:#}", settings.title, e);
        return Err(e);
    }

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    let mut draws = DrawList::new();
    let mut fatal: Option<anyhow::Error> = None;

    event_loop
        .run(|event, elwt| {
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        info!("Close requested, shutting down...");
                        game_loop.quit();
                    }
                    WindowEvent::Resized(physical_size) => {
                        renderer.resize(physical_size);
                    }
                    WindowEvent::Focused(false) => {
                        input.reset_all();
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        input.process_keyboard_event(&event);
                    }
                    WindowEvent::RedrawRequested => {
                        if input.just_pressed(Action::Quit) {
                            game_loop.quit();
                        } else {
                            tick(
                                &mut game,
                                &mut renderer,
                                &mut input,
                                &mut game_loop,
                                &mut draws,
                                &mut fatal,
                            );
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    window.request_redraw();
                }
                _ => {}
            }

            if !game_loop.is_running() {
                elwt.exit();
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    info!(
        "{} stopped after {} frames at {:.1} fps",
        settings.title,
        game_loop.frame_count(),
        game_loop.fps()
    );

    match fatal {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// One input → update → render cycle
fn tick<G: Game>(
    game: &mut G,
    renderer: &mut Renderer,
    input: &mut InputManager,
    game_loop: &mut GameLoop,
    draws: &mut DrawList,
    fatal: &mut Option<anyhow::Error>,
) {
    let dt = game_loop.begin_frame();
    if game.update(input, dt) == AppFlow::Exit {
        game_loop.quit();
    }
    input.update();

    draws.clear();
    game.render(draws, dt);

    match renderer.render(draws, game.clear_color()) {
        Ok(()) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            renderer.reconfigure();
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
            *fatal = Some(anyhow::anyhow!("GPU out of memory"));
            game_loop.quit();
        }
        Err(e) => warn!("Dropped frame: {}", e),
    }
}
