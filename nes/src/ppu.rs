/// Bytes per tile in the pattern table, two 8 byte bit planes
pub const TILE_SIZE: usize = 16;

/// Grayscale stand-in for the 4 colors a tile can index
pub const PALETTE: [[u8; 3]; 4] = [
    [211, 211, 211],
    [169, 169, 169],
    [105, 105, 105],
    [0, 0, 0],
];

/// 8x8 tile, every pixel is a 2 bit palette index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile(pub [[u8; 8]; 8]);

impl Tile {
    pub fn decode(data: &[u8; TILE_SIZE]) -> Self {
        let mut pixels = [[0; 8]; 8];

        // plane 0, low bit
        for (y, row) in pixels.iter_mut().enumerate() {
            let line = data[y];
            for (x, px) in row.iter_mut().enumerate() {
                *px = (line >> x) & 1;
            }
        }

        // plane 1, high bit
        for (y, row) in pixels.iter_mut().enumerate() {
            let line = data[y + 8];
            for (x, px) in row.iter_mut().enumerate() {
                *px |= ((line >> x) & 1) << 1;
            }
        }

        Self(pixels)
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.0[y][x]
    }

    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        PALETTE[self.pixel(x, y) as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8; 8]> {
        self.0.iter()
    }
}
