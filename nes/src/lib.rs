pub mod cart;
pub mod ines;
pub mod ppu;


use tracing::info;

pub use cart::ChrRom;
pub use ines::{locate, Header, InesFile};
pub use ppu::{Tile, PALETTE};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("CHR ROM not found, the cartridge uses CHR RAM")]
    MissingGraphicsRom,

    #[error("file too short: expected at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },
}

/// Every tile in the CHR ROM of an iNES file, in order.
///
/// Fails before yielding anything if the header has no CHR ROM or the file
/// ends before it does.
pub fn sprites(bytes: &[u8]) -> Result<impl Iterator<Item = (usize, Tile)> + '_> {
    let file = InesFile::new(bytes)?;
    let chr_rom = ChrRom::new(file.chr_rom);

    info!(
        offset = file.header.chr_rom_offset(),
        len = file.chr_rom.len(),
        tiles = chr_rom.len(),
        "found CHR ROM"
    );

    Ok(chr_rom.tiles())
}
