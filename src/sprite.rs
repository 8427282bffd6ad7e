use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nes::{Tile, PALETTE};

pub const DIR: &str = "sprites";

pub fn path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("sprite{index}.png"))
}

/// Encodes a tile as an 8x8 PNG with a 2 bit palette.
pub fn write_png<W: Write>(tile: &Tile, w: W) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, 8, 8);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Two);
    encoder.set_palette(PALETTE.concat());

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pack(tile))?;
    writer.finish()
}

/// 4 pixels per byte, leftmost pixel in the high bits
fn pack(tile: &Tile) -> [u8; 16] {
    let mut data = [0; 16];
    for (y, row) in tile.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            data[y * 2 + x / 4] |= px << (6 - 2 * (x % 4));
        }
    }
    data
}

pub fn save(dir: &Path, index: usize, tile: &Tile) -> Result<()> {
    let path = path(dir, index);
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    write_png(tile, BufWriter::new(file)).with_context(|| format!("failed to encode {}", path.display()))
}
