//! Example03: a triangle with interpolated vertex colors

use learn_gl::config::DEFAULT_CONFIG_PATH;
use learn_gl::foundation::logging;
use learn_gl::prelude::*;

fn main() {
    logging::init();
    println!("ESC - Exit");

    let config = HostConfig::load_or_default(DEFAULT_CONFIG_PATH);
    let mut example = ColoredTriangleExample::new();
    if let Err(e) = run(&config, &mut example) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &HostConfig, example: &mut dyn RenderableExample) -> Result<(), Box<dyn std::error::Error>> {
    WindowHost::create(&config.window, example.title())?.run(example)?;
    Ok(())
}
