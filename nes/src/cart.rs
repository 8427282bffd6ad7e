use crate::ppu::{Tile, TILE_SIZE};

/// Pattern table data of a cartridge, read as a flat run of tiles
#[derive(Debug, Clone, Copy)]
pub struct ChrRom<'a>(&'a [u8]);

impl<'a> ChrRom<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self(data)
    }

    /// Number of whole tiles, a trailing partial record is not counted
    pub fn len(&self) -> usize {
        self.0.len() / TILE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tile(&self, index: usize) -> Option<Tile> {
        let start = index.checked_mul(TILE_SIZE)?;
        let end = start.checked_add(TILE_SIZE)?;
        self.0.get(start..end).map(record).map(|r| Tile::decode(&r))
    }

    /// Tiles in pattern table order, paired with their index
    pub fn tiles(&self) -> impl Iterator<Item = (usize, Tile)> + 'a {
        self.0
            .chunks_exact(TILE_SIZE)
            .map(|chunk| Tile::decode(&record(chunk)))
            .enumerate()
    }
}

fn record(chunk: &[u8]) -> [u8; TILE_SIZE] {
    let mut r = [0; TILE_SIZE];
    r.copy_from_slice(chunk);
    r
}
