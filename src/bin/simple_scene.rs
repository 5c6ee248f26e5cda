use anyhow::Result;
use log::info;
use lunar_lander::engine::{app, assets::AssetLoader};
use lunar_lander::game::scene::SceneGame;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting simple scene...");

    app::run(SceneGame::default(), AssetLoader::working_dir())
}
