use anyhow::Result;
use log::{error, info};
use lunar_lander::engine::{app, assets::AssetLoader};
use lunar_lander::game::{lander::LanderConfig, world::LanderGame};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Lunar Lander (arcade tuning)...");

    let game = match LanderGame::new(LanderConfig::arcade()) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid lander config: {}", e);
            return Err(e.into());
        }
    };

    app::run(game, AssetLoader::working_dir())
}
