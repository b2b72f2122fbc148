// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! The eight output equations of the C64 PLA.
//!
//! These are the equations as published with the 64k PLA truth table dump: F0 (CASRAM) is
//! a sum of products, and F1 through F7 are products of sums, the sum form being the one
//! that falls out naturally when an inverting output is fed by a handful of P-terms. Each
//! equation works on raw line levels. A `true` result is a high output, which for every one
//! of these active-low chip selects means "not selected".
//!
//! Every function here is a pure function of its input vector.

use crate::signals::{Input::*, InputVector, OutputVector};

/// The input vector unpacked into named levels so the equations read like the schematic.
#[derive(Copy, Clone)]
struct Lines {
    cas: bool,
    loram: bool,
    hiram: bool,
    charen: bool,
    va14: bool,
    a15: bool,
    a14: bool,
    a13: bool,
    a12: bool,
    ba: bool,
    aec: bool,
    r_w: bool,
    exrom: bool,
    game: bool,
    va13: bool,
    va12: bool,
}

impl From<InputVector> for Lines {
    fn from(input: InputVector) -> Self {
        Lines {
            cas: input.level(Cas),
            loram: input.level(Loram),
            hiram: input.level(Hiram),
            charen: input.level(Charen),
            va14: input.level(Va14),
            a15: input.level(A15),
            a14: input.level(A14),
            a13: input.level(A13),
            a12: input.level(A12),
            ba: input.level(Ba),
            aec: input.level(Aec),
            r_w: input.level(RW),
            exrom: input.level(Exrom),
            game: input.level(Game),
            va13: input.level(Va13),
            va12: input.level(Va12),
        }
    }
}

/// Evaluates all eight outputs for one input vector.
///
/// This is total over all 65536 inputs, including combinations a real C64 never produces.
/// Output *n* lands in bit *n* of the result, so F0 (CASRAM) is bit 0 and F7 (ROMH) is
/// bit 7.
pub fn evaluate(input: InputVector) -> OutputVector {
    let l = Lines::from(input);
    OutputVector::from_levels([
        f0(&l),
        f1(&l),
        f2(&l),
        f3(&l),
        f4(&l),
        f5(&l),
        f6(&l),
        f7(&l),
    ])
}

/// F0, the RAM chip select. High (RAM deselected) when any ROM, I/O, or cartridge term
/// claims the access, when an Ultimax cartridge leaves a hole in the map, or when CAS is
/// high.
pub fn casram(input: InputVector) -> bool {
    f0(&Lines::from(input))
}

/// F1, the BASIC ROM chip select.
pub fn basic(input: InputVector) -> bool {
    f1(&Lines::from(input))
}

/// F2, the KERNAL ROM chip select.
pub fn kernal(input: InputVector) -> bool {
    f2(&Lines::from(input))
}

/// F3, the character ROM chip select, for both CPU and VIC accesses.
pub fn charom(input: InputVector) -> bool {
    f3(&Lines::from(input))
}

/// F4, the color RAM write gate.
pub fn gr_w(input: InputVector) -> bool {
    f4(&Lines::from(input))
}

/// F5, the I/O block select.
pub fn io(input: InputVector) -> bool {
    f5(&Lines::from(input))
}

/// F6, the cartridge low ROM select.
pub fn roml(input: InputVector) -> bool {
    f6(&Lines::from(input))
}

/// F7, the cartridge high ROM select.
pub fn romh(input: InputVector) -> bool {
    f7(&Lines::from(input))
}

#[rustfmt::skip]
fn f0(l: &Lines) -> bool {
    let Lines { cas, loram, hiram, charen, va14, a15, a14, a13, a12, ba, aec, r_w, exrom, game, va13, va12 } = *l;

    (loram & hiram & a15 & !a14 & a13 & !aec & r_w & game)
        | (hiram & a15 & a14 & a13 & !aec & r_w & game)
        | (hiram & a15 & a14 & a13 & !aec & r_w & !exrom & !game)
        | (hiram & !charen & a15 & a14 & !a13 & a12 & !aec & r_w & game)
        | (loram & !charen & a15 & a14 & !a13 & a12 & !aec & r_w & game)
        | (hiram & !charen & a15 & a14 & !a13 & a12 & !aec & r_w & !exrom & !game)
        | (va14 & aec & game & !va13 & va12)
        | (va14 & aec & !exrom & !game & !va13 & va12)
        | (hiram & charen & a15 & a14 & !a13 & a12 & ba & !aec & r_w & game)
        | (hiram & charen & a15 & a14 & !a13 & a12 & !aec & !r_w & game)
        | (loram & charen & a15 & a14 & !a13 & a12 & ba & !aec & r_w & game)
        | (loram & charen & a15 & a14 & !a13 & a12 & !aec & !r_w & game)
        | (hiram & charen & a15 & a14 & !a13 & a12 & ba & !aec & r_w & !exrom & !game)
        | (hiram & charen & a15 & a14 & !a13 & a12 & !aec & !r_w & !exrom & !game)
        | (loram & charen & a15 & a14 & !a13 & a12 & ba & !aec & r_w & !exrom & !game)
        | (loram & charen & a15 & a14 & !a13 & a12 & !aec & !r_w & !exrom & !game)
        | (a15 & a14 & !a13 & a12 & ba & !aec & r_w & exrom & !game)
        | (a15 & a14 & !a13 & a12 & !aec & !r_w & exrom & !game)
        | (loram & hiram & a15 & !a14 & !a13 & !aec & r_w & !exrom)
        | (a15 & !a14 & !a13 & !aec & exrom & !game)
        | (hiram & a15 & !a14 & a13 & !aec & r_w & !exrom & !game)
        | (a15 & a14 & a13 & !aec & exrom & !game)
        | (aec & exrom & !game & va13 & va12)
        | (!a15 & !a14 & a12 & exrom & !game)
        | (!a15 & !a14 & a13 & exrom & !game)
        | (!a15 & a14 & exrom & !game)
        | (a15 & !a14 & a13 & exrom & !game)
        | (a15 & a14 & !a13 & !a12 & exrom & !game)
        // CAS goes in last and on its own: a high CAS deselects RAM no matter what.
        | cas
}

fn f1(l: &Lines) -> bool {
    !l.loram | !l.hiram | !l.a15 | l.a14 | !l.a13 | l.aec | !l.r_w | !l.game
}

#[rustfmt::skip]
fn f2(l: &Lines) -> bool {
    let Lines { hiram, a15, a14, a13, aec, r_w, exrom, game, .. } = *l;

    (!hiram | !a15 | !a14 | !a13 | aec | !r_w | !game)
        & (!hiram | !a15 | !a14 | !a13 | aec | !r_w | exrom | game)
}

#[rustfmt::skip]
fn f3(l: &Lines) -> bool {
    let Lines { loram, hiram, charen, va14, a15, a14, a13, a12, aec, r_w, exrom, game, va13, va12, .. } = *l;

    (!hiram | charen | !a15 | !a14 | a13 | !a12 | aec | !r_w | !game)
        & (!loram | charen | !a15 | !a14 | a13 | !a12 | aec | !r_w | !game)
        & (!hiram | charen | !a15 | !a14 | a13 | !a12 | aec | !r_w | exrom | game)
        // VIC character fetches from $1000 - $1FFF and $9000 - $9FFF
        & (!va14 | !aec | !game | va13 | !va12)
        & (!va14 | !aec | exrom | game | va13 | !va12)
}

fn f4(l: &Lines) -> bool {
    l.cas | !l.a15 | !l.a14 | l.a13 | !l.a12 | l.aec | l.r_w
}

#[rustfmt::skip]
fn f5(l: &Lines) -> bool {
    let Lines { loram, hiram, charen, a15, a14, a13, a12, ba, aec, r_w, exrom, game, .. } = *l;

    (!hiram | !charen | !a15 | !a14 | a13 | !a12 | !ba | aec | !r_w | !game)
        & (!hiram | !charen | !a15 | !a14 | a13 | !a12 | aec | r_w | !game)
        & (!loram | !charen | !a15 | !a14 | a13 | !a12 | !ba | aec | !r_w | !game)
        & (!loram | !charen | !a15 | !a14 | a13 | !a12 | aec | r_w | !game)
        & (!hiram | !charen | !a15 | !a14 | a13 | !a12 | !ba | aec | !r_w | exrom | game)
        & (!hiram | !charen | !a15 | !a14 | a13 | !a12 | aec | r_w | exrom | game)
        & (!loram | !charen | !a15 | !a14 | a13 | !a12 | !ba | aec | !r_w | exrom | game)
        & (!loram | !charen | !a15 | !a14 | a13 | !a12 | aec | r_w | exrom | game)
        & (!a15 | !a14 | a13 | !a12 | !ba | aec | !r_w | !exrom | game)
        & (!a15 | !a14 | a13 | !a12 | aec | r_w | !exrom | game)
}

#[rustfmt::skip]
fn f6(l: &Lines) -> bool {
    let Lines { loram, hiram, a15, a14, a13, aec, r_w, exrom, game, .. } = *l;

    (!loram | !hiram | !a15 | a14 | a13 | aec | !r_w | exrom)
        & (!a15 | a14 | a13 | aec | !exrom | game)
}

#[rustfmt::skip]
fn f7(l: &Lines) -> bool {
    let Lines { hiram, a15, a14, a13, aec, r_w, exrom, game, va13, va12, .. } = *l;

    (!hiram | !a15 | a14 | !a13 | aec | !r_w | exrom | game)
        & (!a15 | !a14 | !a13 | aec | !exrom | game)
        // Ultimax VIC fetches from the top 4k of each 16k bank
        & (!aec | !exrom | game | !va13 | !va12)
}
