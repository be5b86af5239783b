use std::path::PathBuf;

use kinetica::app::App;
use kinetica::config::AppConfig;

fn main() {
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    };

    log::info!(
        "starting: {} rings x {} segments, {} point lights",
        config.rings,
        config.segments,
        config.point_lights
    );

    App::new(config).run();
}
