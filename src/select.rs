// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt::{Display, Error, Formatter};

use crate::signals::{Output, OutputVector};

/// A device on the other end of one of the PLA's outputs.
///
/// This is what a memory map dispatcher actually wants to know: which of the C64's chips
/// is going to put data on (or take data from) the bus for the current access.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Device {
    /// The 64k of dynamic RAM.
    Ram,
    /// The 8k BASIC ROM.
    Basic,
    /// The 8k KERNAL ROM.
    Kernal,
    /// The 4k character generator ROM.
    CharRom,
    /// The static color RAM, write side. The read side is enabled through the I/O block.
    ColorRamWrite,
    /// The I/O block at $D000 - $DFFF. The 74139 decodes A8-A11 to pick the chip.
    Io,
    /// Cartridge ROM enabled by ROML.
    RomL,
    /// Cartridge ROM enabled by ROMH.
    RomH,
}

impl Device {
    /// Devices in output order.
    pub const ALL: [Device; 8] = [
        Device::Ram,
        Device::Basic,
        Device::Kernal,
        Device::CharRom,
        Device::ColorRamWrite,
        Device::Io,
        Device::RomL,
        Device::RomH,
    ];

    /// The PLA output that enables this device.
    pub const fn output(self) -> Output {
        match self {
            Device::Ram => Output::Casram,
            Device::Basic => Output::Basic,
            Device::Kernal => Output::Kernal,
            Device::CharRom => Output::Charom,
            Device::ColorRamWrite => Output::GrW,
            Device::Io => Output::Io,
            Device::RomL => Output::Roml,
            Device::RomH => Output::Romh,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Device::Ram => "RAM",
            Device::Basic => "BASIC ROM",
            Device::Kernal => "KERNAL ROM",
            Device::CharRom => "character ROM",
            Device::ColorRamWrite => "color RAM (write)",
            Device::Io => "I/O",
            Device::RomL => "cartridge ROML",
            Device::RomH => "cartridge ROMH",
        }
    }
}

impl Display for Device {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.name())
    }
}

impl OutputVector {
    /// The devices whose enables are asserted, in output order.
    ///
    /// An empty result is legitimate. With CAS high, or with an Ultimax cartridge that
    /// leaves a hole in the map, nothing is selected and the data bus floats.
    pub fn devices(self) -> Vec<Device> {
        Device::ALL
            .iter()
            .copied()
            .filter(|d| self.selected(d.output()))
            .collect()
    }
}
