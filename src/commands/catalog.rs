use anyhow::{Context, Result};
use fruitcart::presentation::Renderer;
use fruitcart::Config;

pub fn cmd_catalog(config: &Config, renderer: &dyn Renderer) -> Result<()> {
    let catalog = config
        .catalog()
        .context("failed to build catalog from config")?;
    println!("{}", renderer.render_catalog(&catalog));
    Ok(())
}
