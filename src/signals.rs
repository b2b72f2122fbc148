// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! Named input and output signals of the C64 PLA and the packed vectors that carry them.
//!
//! Every signal is stored at its raw line level: `true` is a high line, `false` a low one.
//! Signals that are active-low (most of them) are asserted when their level is `false`.
//! Nothing here inverts anything; the equations consume the raw levels directly.

use std::fmt::{Display, Error, Formatter};

use crate::utils::{bit, levels_to_value, value_to_levels};

/// One of the sixteen PLA inputs. The discriminant is the bit position of the signal in an
/// [`InputVector`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// Column address strobe from the VIC, gated through to RAM as CASRAM.
    Cas = 0,
    /// 6510 port bit 0. High banks in BASIC at $A000 - $BFFF.
    Loram = 1,
    /// 6510 port bit 1. High banks in the KERNAL at $E000 - $FFFF.
    Hiram = 2,
    /// 6510 port bit 2. High shows I/O at $D000 - $DFFF, low shows the character ROM.
    Charen = 3,
    /// Video address bit 14, as CIA2 drives it (inverted).
    Va14 = 4,
    /// CPU address bit 15.
    A15 = 5,
    /// CPU address bit 14.
    A14 = 6,
    /// CPU address bit 13.
    A13 = 7,
    /// CPU address bit 12.
    A12 = 8,
    /// Bus available.
    Ba = 9,
    /// Inverted address enable control. High when the VIC owns the bus.
    Aec = 10,
    /// CPU read/write line. High is a read.
    RW = 11,
    /// Cartridge EXROM line.
    Exrom = 12,
    /// Cartridge GAME line.
    Game = 13,
    /// Video address bit 13.
    Va13 = 14,
    /// Video address bit 12.
    Va12 = 15,
}

impl Input {
    /// All inputs in bit order.
    pub const ALL: [Input; 16] = [
        Input::Cas,
        Input::Loram,
        Input::Hiram,
        Input::Charen,
        Input::Va14,
        Input::A15,
        Input::A14,
        Input::A13,
        Input::A12,
        Input::Ba,
        Input::Aec,
        Input::RW,
        Input::Exrom,
        Input::Game,
        Input::Va13,
        Input::Va12,
    ];

    /// The bit position of this input within an input vector.
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// The name of the signal as it appears on the C64 schematic.
    pub const fn name(self) -> &'static str {
        match self {
            Input::Cas => "CAS",
            Input::Loram => "LORAM",
            Input::Hiram => "HIRAM",
            Input::Charen => "CHAREN",
            Input::Va14 => "VA14",
            Input::A15 => "A15",
            Input::A14 => "A14",
            Input::A13 => "A13",
            Input::A12 => "A12",
            Input::Ba => "BA",
            Input::Aec => "AEC",
            Input::RW => "R_W",
            Input::Exrom => "EXROM",
            Input::Game => "GAME",
            Input::Va13 => "VA13",
            Input::Va12 => "VA12",
        }
    }

    /// Whether the signal is asserted by a low level.
    pub const fn active_low(self) -> bool {
        matches!(
            self,
            Input::Cas
                | Input::Loram
                | Input::Hiram
                | Input::Charen
                | Input::Va14
                | Input::Aec
                | Input::RW
                | Input::Exrom
                | Input::Game
        )
    }
}

/// One of the eight PLA outputs. The discriminant is the bit position of the signal in an
/// [`OutputVector`]. All outputs are active-low chip selects (GR_W is a write gate rather
/// than a chip select, but it is active-low all the same).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Output {
    Casram = 0,
    Basic = 1,
    Kernal = 2,
    Charom = 3,
    GrW = 4,
    Io = 5,
    Roml = 6,
    Romh = 7,
}

impl Output {
    /// All outputs in bit order.
    pub const ALL: [Output; 8] = [
        Output::Casram,
        Output::Basic,
        Output::Kernal,
        Output::Charom,
        Output::GrW,
        Output::Io,
        Output::Roml,
        Output::Romh,
    ];

    /// The bit position of this output within an output vector.
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// The name of the signal as it appears on the C64 schematic.
    pub const fn name(self) -> &'static str {
        match self {
            Output::Casram => "CASRAM",
            Output::Basic => "BASIC",
            Output::Kernal => "KERNAL",
            Output::Charom => "CHAROM",
            Output::GrW => "GR_W",
            Output::Io => "I_O",
            Output::Roml => "ROML",
            Output::Romh => "ROMH",
        }
    }
}

/// The sixteen PLA inputs at one instant, packed one signal per bit.
///
/// The vector is a plain value. It is built fresh for every memory access, either directly
/// from a sampled 16-bit value or from named levels with the builder methods:
///
/// ```
/// use c64_pla::signals::{Input, InputVector};
///
/// let input = InputVector::default()
///     .with(Input::Loram, true)
///     .with(Input::Hiram, true)
///     .with(Input::RW, true)
///     .cpu_address(0xa000);
/// assert!(input.level(Input::A15));
/// assert!(!input.level(Input::A14));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InputVector(u16);

impl InputVector {
    pub const fn new(value: u16) -> InputVector {
        InputVector(value)
    }

    /// Creates a vector from sixteen levels given in bit order.
    pub fn from_levels(levels: [bool; 16]) -> InputVector {
        InputVector(levels_to_value(&levels))
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// The level of a single input.
    #[inline]
    pub fn level(self, input: Input) -> bool {
        bit(self.0, input.bit())
    }

    /// All sixteen levels in bit order.
    pub fn levels(self) -> [bool; 16] {
        value_to_levels(self.0)
    }

    /// Returns a copy of this vector with one input set to the given level.
    pub fn with(self, input: Input, level: bool) -> InputVector {
        let mask = 1 << input.bit();
        if level {
            InputVector(self.0 | mask)
        } else {
            InputVector(self.0 & !mask)
        }
    }

    /// Returns a copy of this vector with A15 - A12 taken from the top four bits of a full
    /// CPU address. The low twelve bits of the address never reach the PLA.
    pub fn cpu_address(self, address: u16) -> InputVector {
        self.with(Input::A15, bit(address, 15))
            .with(Input::A14, bit(address, 14))
            .with(Input::A13, bit(address, 13))
            .with(Input::A12, bit(address, 12))
    }

    /// Returns a copy of this vector with VA14, VA13, and VA12 taken from a full VIC
    /// address. CIA2 supplies VA14 inverted, so the VA14 input is high when the VIC is
    /// looking at the lower 16k of a 32k half of memory.
    pub fn vic_address(self, address: u16) -> InputVector {
        self.with(Input::Va14, !bit(address, 14))
            .with(Input::Va13, bit(address, 13))
            .with(Input::Va12, bit(address, 12))
    }
}

impl From<u16> for InputVector {
    fn from(value: u16) -> Self {
        InputVector(value)
    }
}

impl From<InputVector> for u16 {
    fn from(input: InputVector) -> Self {
        input.0
    }
}

impl Display for InputVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{:016b}", self.0)
    }
}

/// The eight PLA outputs at one instant, packed one signal per bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutputVector(u8);

impl OutputVector {
    pub const fn new(value: u8) -> OutputVector {
        OutputVector(value)
    }

    /// Creates a vector from eight levels given in bit order.
    pub fn from_levels(levels: [bool; 8]) -> OutputVector {
        OutputVector(levels_to_value(&levels) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The level of a single output.
    #[inline]
    pub fn level(self, output: Output) -> bool {
        bit(self.0 as u16, output.bit())
    }

    /// Whether an output is asserted. Every output is active-low, so this is simply the
    /// inverse of its level.
    #[inline]
    pub fn selected(self, output: Output) -> bool {
        !self.level(output)
    }

    /// All eight levels in bit order.
    pub fn levels(self) -> [bool; 8] {
        value_to_levels(self.0 as u16)
    }
}

impl From<OutputVector> for u8 {
    fn from(output: OutputVector) -> Self {
        output.0
    }
}

impl Display for OutputVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{:08b}", self.0)
    }
}
