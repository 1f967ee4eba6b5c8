//! Example04: two textures blended on a quad
//!
//! UV mode, wrap and filter come from the `[texture]` table of the config
//! file, e.g.
//!
//! ```toml
//! [texture]
//! uv_mode = "Bigger"
//! wrap = "ClampToBorder"
//! filter = "Nearest"
//! ```

use learn_gl::config::DEFAULT_CONFIG_PATH;
use learn_gl::foundation::logging;
use learn_gl::prelude::*;

fn main() {
    logging::init();
    println!("ESC - Exit");

    let config = HostConfig::load_or_default(DEFAULT_CONFIG_PATH);
    log::info!(
        "Texture settings: {:?} UVs, {:?} wrap, {:?} filter",
        config.texture.uv_mode,
        config.texture.wrap,
        config.texture.filter
    );

    let mut example = TexturedQuadExample::new(&config.texture);
    if let Err(e) = run(&config, &mut example) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &HostConfig, example: &mut dyn RenderableExample) -> Result<(), Box<dyn std::error::Error>> {
    WindowHost::create(&config.window, example.title())?.run(example)?;
    Ok(())
}
