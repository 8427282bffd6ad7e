mod sprite;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chrdump=info,nes=info")),
        )
        .init();

    let Some(rom_filepath) = std::env::args().nth(1) else {
        bail!("usage: chrdump <rom>");
    };
    let rom = std::fs::read(&rom_filepath).with_context(|| format!("failed to read {rom_filepath}"))?;

    let dir = Path::new(sprite::DIR);
    let sprites = nes::sprites(&rom).with_context(|| format!("failed to load {rom_filepath}"))?;

    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut count = 0;
    for (index, tile) in sprites {
        sprite::save(dir, index, &tile)?;
        debug!(index, "wrote sprite");
        count += 1;
    }

    info!(count, dir = %dir.display(), "done");
    Ok(())
}
