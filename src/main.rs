use anyhow::Result;
use tile_destroyer::config::{AppConfig, DEFAULT_CONFIG_PATH};
use tile_destroyer::engine::EngineApp;
use tile_destroyer::engine::resources::ResourceManager;
use tile_destroyer::games::TileDestroyer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load_or_default(DEFAULT_CONFIG_PATH);
    let resources = ResourceManager::new(config.assets.root.clone());
    let game = TileDestroyer::new(&config);
    let app = EngineApp::new(config.engine.clone(), resources, game);
    app.run()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
