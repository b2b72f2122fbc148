// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod constants {
    /// Pin assignment for input pin 0.
    pub const I0: usize = 9;
    /// Pin assignment for input pin 1.
    pub const I1: usize = 8;
    /// Pin assignment for input pin 2.
    pub const I2: usize = 7;
    /// Pin assignment for input pin 3.
    pub const I3: usize = 6;
    /// Pin assignment for input pin 4.
    pub const I4: usize = 5;
    /// Pin assignment for input pin 5.
    pub const I5: usize = 4;
    /// Pin assignment for input pin 6.
    pub const I6: usize = 3;
    /// Pin assignment for input pin 7.
    pub const I7: usize = 2;
    /// Pin assignment for input pin 8.
    pub const I8: usize = 27;
    /// Pin assignment for input pin 9.
    pub const I9: usize = 26;
    /// Pin assignment for input pin 10.
    pub const I10: usize = 25;
    /// Pin assignment for input pin 11.
    pub const I11: usize = 24;
    /// Pin assignment for input pin 12.
    pub const I12: usize = 23;
    /// Pin assignment for input pin 13.
    pub const I13: usize = 22;
    /// Pin assignment for input pin 14.
    pub const I14: usize = 21;
    /// Pin assignment for input pin 15.
    pub const I15: usize = 20;

    /// Pin assignment for output pin 0.
    pub const F0: usize = 18;
    /// Pin assignment for output pin 1.
    pub const F1: usize = 17;
    /// Pin assignment for output pin 2.
    pub const F2: usize = 16;
    /// Pin assignment for output pin 3.
    pub const F3: usize = 15;
    /// Pin assignment for output pin 4.
    pub const F4: usize = 13;
    /// Pin assignment for output pin 5.
    pub const F5: usize = 12;
    /// Pin assignment for output pin 6.
    pub const F6: usize = 11;
    /// Pin assignment for output pin 7.
    pub const F7: usize = 10;

    /// Pin assignment for the active-low chip enable pin.
    pub const CE: usize = 19;
    /// Pin assignment for the field programming pin.
    pub const FE: usize = 1;
    /// Pin assignment for the +5V power supply pin.
    pub const VCC: usize = 28;
    /// Pin assignment for the ground pin.
    pub const VSS: usize = 14;

    /// Package pins of the inputs, indexed by input number (and therefore by bit position
    /// in an input vector).
    pub const INPUTS: [usize; 16] = [
        I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, I10, I11, I12, I13, I14, I15,
    ];
    /// Package pins of the outputs, indexed by output number.
    pub const OUTPUTS: [usize; 8] = [F0, F1, F2, F3, F4, F5, F6, F7];
}

use log::{debug, trace};

use crate::signals::{Input, InputVector, Output, OutputVector};

use self::constants::*;

/// The number of P-terms in the C64 programming of the 82S100. The array has room for 48.
pub const PRODUCT_TERMS: usize = 32;

/// P-terms that are present in the C64 programming but connected to no output. P8 looks
/// like a relic of an earlier prototype; P29 is simply `!LORAM`.
pub const UNUSED_TERMS: [usize; 2] = [8, 29];

/// Returns the package pin that carries an input.
pub fn input_pin(input: Input) -> usize {
    INPUTS[input.bit() as usize]
}

/// Returns the package pin that carries an output.
pub fn output_pin(output: Output) -> usize {
    OUTPUTS[output.bit() as usize]
}

/// The P-terms of the C64's 82S100 for a single input vector, one bit per term.
///
/// Each P-term is a logical AND of some selection of inputs and inverted inputs. The array
/// has room for 48 of them; the C64 programming uses P0 - P31. The comment on each term
/// gives, in order, the state of the 6510 bank switching lines (LORAM, HIRAM, CHAREN), the
/// address range that selects it (from the CPU or VIC address bus), and who is on the bus,
/// the access direction, and the cartridge configuration. Anything not mentioned doesn't
/// matter to that term.
///
/// Pairs of terms that differ only in "no cartridge or 8k cartridge" vs. "16k cartridge"
/// together mean "anything but Ultimax". There is no OR inside a P-term, so that's the only
/// way to express it.
///
/// All of this comes from "The C64 PLA Dissected" at
/// skoe.de/docs/c64-dissected/pla/c64_pla_dissected_a4ds.pdf.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductTerms(u32);

impl ProductTerms {
    pub fn from_input(input: InputVector) -> ProductTerms {
        let [i0, i1, i2, i3, i4, i5, i6, i7, i8, i9, i10, i11, i12, i13, i14, i15] =
            input.levels();

        let terms = [
            // LORAM deselected, HIRAM deselected
            // $A000 - $BFFF
            // CPU active, Read, No cartridge or 8k cartridge
            i1 & i2 & i5 & !i6 & i7 & !i10 & i11 & i13,
            // HIRAM deselected
            // $E000 - $FFFF
            // CPU active, Read, No cartridge or 8k cartridge
            i2 & i5 & i6 & i7 & !i10 & i11 & i13,
            // HIRAM deselected
            // $E000 - $FFFF
            // CPU active, Read, 16k cartridge
            i2 & i5 & i6 & i7 & !i10 & i11 & !i12 & !i13,
            // HIRAM deselected, CHAREN selected
            // $D000 - $DFFF
            // CPU active, Read, No cartridge or 8k cartridge
            i2 & !i3 & i5 & i6 & !i7 & i8 & !i10 & i11 & i13,
            // LORAM deselected, CHAREN selected
            // $D000 - $DFFF
            // CPU active, Read, No cartridge or 8k cartridge
            i1 & !i3 & i5 & i6 & !i7 & i8 & !i10 & i11 & i13,
            // HIRAM deselected, CHAREN selected
            // $D000 - $DFFF
            // CPU active, Read, 16k cartridge
            i2 & !i3 & i5 & i6 & !i7 & i8 & !i10 & i11 & !i12 & !i13,
            //
            // $1000 - $1FFF or $9000 - $9FFF
            // VIC active, No cartridge or 8k cartridge
            i4 & !i14 & i15 & i10 & i13,
            //
            // $1000 - $1FFF or $9000 - $9FFF
            // VIC active, 16k cartridge
            i4 & !i14 & i15 & i10 & !i12 & !i13,
            // CAS deselected
            // $D000 - $DFFF
            // CPU active, Write
            i0 & i5 & i6 & !i7 & i8 & !i10 & !i11,
            // HIRAM deselected, CHAREN deselected
            // $D000 - $DFFF
            // CPU active, Bus available, Read, No cartridge or 8k cartridge
            i2 & i3 & i5 & i6 & !i7 & i8 & !i10 & i9 & i11 & i13,
            // HIRAM deselected, CHAREN deselected
            // $D000 - $DFFF
            // CPU active, Write, No cartridge or 8k cartridge
            i2 & i3 & i5 & i6 & !i7 & i8 & !i10 & !i11 & i13,
            // LORAM deselected, CHAREN deselected
            // $D000 - $DFFF
            // CPU active, Bus available, Read, No cartridge or 8k cartridge
            i1 & i3 & i5 & i6 & !i7 & i8 & !i10 & i9 & i11 & i13,
            // LORAM deselected, CHAREN deselected
            // $D000 - $DFFF
            // CPU active, Write, No cartridge or 8k cartridge
            i1 & i3 & i5 & i6 & !i7 & i8 & !i10 & !i11 & i13,
            // HIRAM deselected, CHAREN deselected
            // $D000 - $DFFF
            // CPU active, Bus available, Read, 16k cartridge
            i2 & i3 & i5 & i6 & !i7 & i8 & !i10 & i9 & i11 & !i12 & !i13,
            // HIRAM deselected, CHAREN deselected
            // $D000 - $DFFF
            // CPU active, Write, 16k cartridge
            i2 & i3 & i5 & i6 & !i7 & i8 & !i10 & !i11 & !i12 & !i13,
            // LORAM deselected, CHAREN deselected
            // $D000 - $DFFF
            // CPU active, Bus available, Read, 16k cartridge
            i1 & i3 & i5 & i6 & !i7 & i8 & !i10 & i9 & i11 & !i12 & !i13,
            // LORAM deselected, CHAREN deselected
            // $D000 - $DFFF
            // CPU active, Write, 16k cartridge
            i1 & i3 & i5 & i6 & !i7 & i8 & !i10 & !i11 & !i12 & !i13,
            //
            // $D000 - $DFFF
            // CPU active, Bus available, Read, Ultimax cartridge
            i5 & i6 & !i7 & i8 & !i10 & i9 & i11 & i12 & !i13,
            //
            // $D000 - $DFFF
            // CPU active, Write, Ultimax cartridge
            i5 & i6 & !i7 & i8 & !i10 & !i11 & i12 & !i13,
            // LORAM deselected, HIRAM deselected
            // $8000 - $9FFF
            // CPU active, Read, 8k or 16k cartridge
            i1 & i2 & i5 & !i6 & !i7 & !i10 & i11 & !i12,
            //
            // $8000 - $9FFF
            // CPU active, Ultimax cartridge
            i5 & !i6 & !i7 & !i10 & i12 & !i13,
            // HIRAM deselected
            // $A000 - $BFFF
            // CPU active, Read, 16k cartridge
            i2 & i5 & !i6 & i7 & !i10 & i11 & !i12 & !i13,
            //
            // $E000 - $FFFF
            // CPU active, Ultimax cartridge
            i5 & i6 & i7 & !i10 & i12 & !i13,
            //
            // $3000 - $3FFF, $7000 - $7FFF, $B000 - $BFFF, or $F000 - $FFFF
            // VIC active, Ultimax cartridge
            i14 & i15 & i10 & i12 & !i13,
            //
            // $1000 - $1FFF or $3000 - $3FFF
            // Ultimax cartridge
            !i5 & !i6 & i8 & i12 & !i13,
            //
            // $2000 - $3FFF
            // Ultimax cartridge
            !i5 & !i6 & i7 & i12 & !i13,
            //
            // $4000 - $7FFF
            // Ultimax cartridge
            !i5 & i6 & i12 & !i13,
            //
            // $A000 - $BFFF
            // Ultimax cartridge
            i5 & !i6 & i7 & i12 & !i13,
            //
            // $C000 - $CFFF
            // Ultimax cartridge
            i5 & i6 & !i7 & !i8 & i12 & !i13,
            // LORAM selected
            //
            //
            !i1,
            // CAS deselected
            //
            //
            i0,
            // CAS selected
            // $D000 - $DFFF
            // CPU active, Write
            !i0 & i5 & i6 & !i7 & i8 & !i10 & !i11,
        ];

        let mut mask = 0;
        for (n, term) in terms.iter().enumerate() {
            mask |= (*term as u32) << n;
        }
        ProductTerms(mask)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether P-term `n` is true.
    pub fn is_active(self, n: usize) -> bool {
        n < PRODUCT_TERMS && (self.0 >> n) & 1 != 0
    }

    /// The numbers of all true P-terms, lowest first.
    pub fn active(self) -> impl Iterator<Item = usize> {
        (0..PRODUCT_TERMS).filter(move |n| self.is_active(*n))
    }

    fn any(self, terms: &[usize]) -> bool {
        terms.iter().any(|n| self.is_active(*n))
    }
}

/// The S-terms of the C64's 82S100, each a logical OR of P-terms.
///
/// Every S-term but S0 selects a chip, so the outputs they drive are inverted. S0 is the
/// one *de*selection: it pulls in every other chip's terms (except the color RAM write
/// gate), the Ultimax holes, and CAS, and RAM is deselected if any of them is true. That's
/// why CASRAM is the only output that isn't inverted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SumTerms(u8);

impl SumTerms {
    pub fn from_product_terms(p: ProductTerms) -> SumTerms {
        // Selects BASIC ROM.
        let s1 = p.is_active(0);
        // Selects KERNAL ROM.
        let s2 = p.any(&[1, 2]);
        // Selects Character ROM.
        let s3 = p.any(&[3, 4, 5, 6, 7]);
        // Selects I/O, color RAM, or processor registers.
        let s4 = p.any(&[9, 10, 11, 12, 13, 14, 15, 16, 17, 18]);
        // Selects low cartridge ROM.
        let s5 = p.any(&[19, 20]);
        // Selects high cartridge ROM.
        let s6 = p.any(&[21, 22, 23]);
        // Selects write mode for color RAM.
        let s7 = p.is_active(31);
        // Deselects RAM.
        let s0 = s1 | s2 | s3 | s4 | s5 | s6 | p.any(&[24, 25, 26, 27, 28, 30]);

        let mut mask = 0;
        for (n, term) in [s0, s1, s2, s3, s4, s5, s6, s7].iter().enumerate() {
            mask |= (*term as u8) << n;
        }
        SumTerms(mask)
    }

    pub fn is_active(self, n: usize) -> bool {
        n < 8 && (self.0 >> n) & 1 != 0
    }

    /// The output levels the S-terms drive. The S-terms are numbered by the chip they
    /// select, which isn't quite the output order: S4 (I/O) comes out on F5 and S7 (color
    /// RAM write) on F4.
    pub fn outputs(self) -> OutputVector {
        OutputVector::from_levels([
            self.is_active(0),
            !self.is_active(1),
            !self.is_active(2),
            !self.is_active(3),
            !self.is_active(7),
            !self.is_active(4),
            !self.is_active(5),
            !self.is_active(6),
        ])
    }
}

/// An emulation of the 82S100 Programmable Logic Array, as it was programmed for early
/// Commodore 64s.
///
/// The 82S100 is a field-programmable logic array made by Signetics, first released in
/// 1975. Its sixteen inputs feed an AND array that can form up to 48 product terms
/// (P-terms) from any selection of inputs and inverted inputs. Those P-terms feed an OR
/// array that forms eight sum terms (S-terms), each of which can be inverted on its way to
/// an output pin. Commodore programmed these parts during C64 production, and later
/// replaced them with the hard-wired 906114-01 that implements the same logic.
///
/// In the C64 this chip (U17) provides the chip enables for RAM and color RAM; the BASIC,
/// KERNAL, and character ROMs; the I/O block; and the two cartridge ROM banks. The 6510 can
/// address 64k, but all of that memory together adds up to closer to 84k, so on every
/// memory access (twice per cycle, once for the CPU and once for the VIC) the PLA looks at
/// the top of the address bus, the 6510 port's bank switching lines, the VIC's bus control
/// and video address lines, and the cartridge lines, and enables the one device that should
/// answer. When that device is the I/O block, a 74139 decodes A8-A11 to pick the actual
/// chip.
///
/// ### Input pin assignments
///
/// * I0: CAS. The VIC's RAM strobe, passed to the RAM as CASRAM only if RAM is selected.
/// * I1: LORAM. High (normal) puts BASIC at $A000 - $BFFF; low puts RAM there.
/// * I2: HIRAM. High (normal) puts the KERNAL at $E000 - $FFFF; low puts RAM there.
/// * I3: CHAREN. High (normal) puts I/O at $D000 - $DFFF; low puts the character ROM there.
///   Other signals can override this and put RAM there instead.
/// * I4, I14-I15: VA14, VA13, and VA12. The VIC's view of memory while it's on the bus. VA14
///   comes from CIA2 and is active low.
/// * I5-I8: A15-A12. The CPU's view of memory while it's on the bus.
/// * I9: BA. Bus available. The VIC pulls it low when it is about to take the bus for more
///   than its normal half-cycle.
/// * I10: AEC. Inverted address enable control. Low means the CPU has the bus, high means
///   the VIC does.
/// * I11: R_W. High for a read, low for a write. Writes to ROM addresses go to RAM.
/// * I12-I13: EXROM and GAME. Cartridge lines. Both high means no cartridge; EXROM high
///   with GAME low is an Ultimax cartridge. The rest of the mapping depends on LORAM,
///   HIRAM, and CHAREN as well; see https://www.c64-wiki.com/wiki/Bank_Switching.
///
/// ### Output pin assignments
///
/// All outputs drive active-low enables, so at most one chip select will be low for any
/// real access (GR_W, the color RAM write gate, comes on alongside IO).
///
/// * F0: CASRAM. Enables RAM. Its S-term is a deselection: any ROM, I/O, or cartridge term
///   turns RAM off, as does a high CAS or an Ultimax hole in the map.
/// * F1: BASIC.
/// * F2: KERNAL.
/// * F3: CHAROM.
/// * F4: GR_W. Color RAM write gate.
/// * F5: IO. One of the I/O devices at $D000 - $DFFF. The 74139 picks which.
/// * F6: ROML. Cartridge ROM at $8000 - $9FFF.
/// * F7: ROMH. Cartridge ROM at $A000 - $BFFF or (Ultimax) $E000 - $FFFF.
///
/// The chip enable pin CE is tied to ground in the C64, so the chip is always enabled
/// there. It is emulated anyway: with CE high every output floats. FE, VCC, and VSS are
/// not emulated.
///
/// ```text
///         +-----+--+-----+
///      FE |1    +--+   28| VCC
///      I7 |2           27| I8
///      I6 |3           26| I9
///      I5 |4           25| I10
///      I4 |5           24| I11
///      I3 |6           23| I12
///      I2 |7           22| I13
///      I1 |8   82S100  21| I14
///      I0 |9           20| I15
///      F7 |10          19| CE
///      F6 |11          18| F0
///      F5 |12          17| F1
///      F4 |13          16| F2
///     VSS |14          15| F3
///         +--------------+
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ic82S100 {
    enabled: bool,
}

impl Ic82S100 {
    /// Creates a chip with CE low, as it is wired in the C64.
    pub fn new() -> Ic82S100 {
        Ic82S100 { enabled: true }
    }

    /// Runs an input vector through the programmed arrays, ignoring CE.
    pub fn program(input: InputVector) -> OutputVector {
        SumTerms::from_product_terms(ProductTerms::from_input(input)).outputs()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pulls CE low.
    pub fn enable(&mut self) {
        if !self.enabled {
            debug!("82S100 enabled");
        }
        self.enabled = true;
    }

    /// Pulls CE high, floating all outputs.
    pub fn disable(&mut self) {
        if self.enabled {
            debug!("82S100 disabled, outputs floating");
        }
        self.enabled = false;
    }

    /// Drives the outputs for an input vector. Returns `None` while the chip is disabled,
    /// since the outputs are then in a high-impedance state.
    pub fn drive(&self, input: InputVector) -> Option<OutputVector> {
        if !self.enabled {
            trace!("82S100 in {}: outputs floating", input);
            return None;
        }
        let output = Ic82S100::program(input);
        trace!("82S100 in {} out {}", input, output);
        Some(output)
    }
}

impl Default for Ic82S100 {
    fn default() -> Self {
        Ic82S100::new()
    }
}
