use std::ops::Range;

use bitflags::bitflags;
use tracing::debug;

use crate::{Error, Result};

pub const HEADER_SIZE: usize = 16;
pub const TRAINER_SIZE: usize = 512;
pub const PRG_ROM_UNIT: usize = 16384;
pub const CHR_ROM_UNIT: usize = 8192;

bitflags! {
    /// Header byte 6
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags6: u8 {
        const VERT_MIRROR = 0b0000_0001;
        const BATTERY = 0b0000_0010;
        /// 512 byte trainer stored before PRG ROM
        const TRAINER = 0b0000_0100;
        const ALT_NT_LAYOUT = 0b0000_1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// in 16 kib
    pub prg_rom_size: u8,
    /// in 8 kib, 0 means the board uses CHR RAM
    pub chr_rom_size: u8,
    pub flags6: Flags6,
}

impl Header {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::TruncatedInput { expected: HEADER_SIZE, actual: bytes.len() });
        }

        let header = Self {
            prg_rom_size: bytes[4],
            chr_rom_size: bytes[5],
            flags6: Flags6::from_bits_retain(bytes[6]),
        };

        debug!(?header, "parsed header");
        Ok(header)
    }

    pub fn has_trainer(&self) -> bool {
        self.flags6.contains(Flags6::TRAINER)
    }

    pub fn prg_rom_len(&self) -> usize {
        self.prg_rom_size as usize * PRG_ROM_UNIT
    }

    /// Where the PRG ROM starts, after the header and the trainer if present
    fn prg_rom_offset(&self) -> usize {
        HEADER_SIZE + self.has_trainer() as usize * TRAINER_SIZE
    }

    pub fn chr_rom_offset(&self) -> usize {
        self.prg_rom_offset() + self.prg_rom_len()
    }

    pub fn chr_rom_len(&self) -> usize {
        self.chr_rom_size as usize * CHR_ROM_UNIT
    }

    /// Byte range of CHR ROM within the whole file. Not checked against the file length.
    pub fn chr_rom_range(&self) -> Result<Range<usize>> {
        if self.chr_rom_size == 0 {
            return Err(Error::MissingGraphicsRom);
        }

        let start = self.chr_rom_offset();
        Ok(start..start + self.chr_rom_len())
    }
}

/// Locates CHR ROM from the header alone.
pub fn locate(bytes: &[u8]) -> Result<Range<usize>> {
    Header::from_bytes(bytes)?.chr_rom_range()
}

pub struct InesFile<'a> {
    pub header: Header,

    pub trainer: Option<&'a [u8]>,
    pub prg_rom: &'a [u8],
    pub chr_rom: &'a [u8],
}

impl<'a> InesFile<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        let header = Header::from_bytes(bytes)?;
        let chr_rom = header.chr_rom_range()?;

        if chr_rom.end > bytes.len() {
            return Err(Error::TruncatedInput { expected: chr_rom.end, actual: bytes.len() });
        }

        let prg_rom_start = header.prg_rom_offset();
        let trainer = header.has_trainer().then(|| &bytes[HEADER_SIZE..prg_rom_start]);

        Ok(Self {
            header,

            trainer,
            prg_rom: &bytes[prg_rom_start..chr_rom.start],
            chr_rom: &bytes[chr_rom],
        })
    }
}
