// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::signals::{Input, InputVector};

/// An input vector for a stock C64 with nothing plugged into the expansion port: all three
/// bank lines high, CPU on the bus, bus available, reading, CAS low. The address lines are
/// all low.
pub fn default_map() -> InputVector {
    InputVector::default()
        .with(Input::Loram, true)
        .with(Input::Hiram, true)
        .with(Input::Charen, true)
        .with(Input::Ba, true)
        .with(Input::RW, true)
        .with(Input::Exrom, true)
        .with(Input::Game, true)
}

// This function was adapted from a C program that provides a 64k table of outputs for the
// PLA based on all of the possible inputs. The original is located at
// http://www.zimmers.net/anonftp/pub/cbm/firmware/computers/c64/pla.c. It deliberately
// works on raw bit masks rather than on the signal types so that it stays independent of
// the code under test.
pub fn expected_outputs(input: u16) -> u8 {
    let cas = input & 1 != 0;
    let loram = input & (1 << 1) != 0;
    let hiram = input & (1 << 2) != 0;
    let charen = input & (1 << 3) != 0;
    let va14 = input & (1 << 4) != 0;
    let a15 = input & (1 << 5) != 0;
    let a14 = input & (1 << 6) != 0;
    let a13 = input & (1 << 7) != 0;
    let a12 = input & (1 << 8) != 0;
    let ba = input & (1 << 9) != 0;
    let aec = input & (1 << 10) != 0;
    let r_w = input & (1 << 11) != 0;
    let exrom = input & (1 << 12) != 0;
    let game = input & (1 << 13) != 0;
    let va13 = input & (1 << 14) != 0;
    let va12 = input & (1 << 15) != 0;

    let f0 = (loram && hiram && a15 && !a14 && a13 && !aec && r_w && game)
        || (hiram && a15 && a14 && a13 && !aec && r_w && game)
        || (hiram && a15 && a14 && a13 && !aec && r_w && !exrom && !game)
        || (hiram && !charen && a15 && a14 && !a13 && a12 && !aec && r_w && game)
        || (loram && !charen && a15 && a14 && !a13 && a12 && !aec && r_w && game)
        || (hiram && !charen && a15 && a14 && !a13 && a12 && !aec && r_w && !exrom && !game)
        || (va14 && aec && game && !va13 && va12)
        || (va14 && aec && !exrom && !game && !va13 && va12)
        || (hiram && charen && a15 && a14 && !a13 && a12 && ba && !aec && r_w && game)
        || (hiram && charen && a15 && a14 && !a13 && a12 && !aec && !r_w && game)
        || (loram && charen && a15 && a14 && !a13 && a12 && ba && !aec && r_w && game)
        || (loram && charen && a15 && a14 && !a13 && a12 && !aec && !r_w && game)
        || (hiram && charen && a15 && a14 && !a13 && a12 && ba && !aec && r_w && !exrom && !game)
        || (hiram && charen && a15 && a14 && !a13 && a12 && !aec && !r_w && !exrom && !game)
        || (loram && charen && a15 && a14 && !a13 && a12 && ba && !aec && r_w && !exrom && !game)
        || (loram && charen && a15 && a14 && !a13 && a12 && !aec && !r_w && !exrom && !game)
        || (a15 && a14 && !a13 && a12 && ba && !aec && r_w && exrom && !game)
        || (a15 && a14 && !a13 && a12 && !aec && !r_w && exrom && !game)
        || (loram && hiram && a15 && !a14 && !a13 && !aec && r_w && !exrom)
        || (a15 && !a14 && !a13 && !aec && exrom && !game)
        || (hiram && a15 && !a14 && a13 && !aec && r_w && !exrom && !game)
        || (a15 && a14 && a13 && !aec && exrom && !game)
        || (aec && exrom && !game && va13 && va12)
        || (!a15 && !a14 && a12 && exrom && !game)
        || (!a15 && !a14 && a13 && exrom && !game)
        || (!a15 && a14 && exrom && !game)
        || (a15 && !a14 && a13 && exrom && !game)
        || (a15 && a14 && !a13 && !a12 && exrom && !game)
        || cas;
    let f1 = !loram || !hiram || !a15 || a14 || !a13 || aec || !r_w || !game;
    let f2 = (!hiram || !a15 || !a14 || !a13 || aec || !r_w || !game)
        && (!hiram || !a15 || !a14 || !a13 || aec || !r_w || exrom || game);
    let f3 = (!hiram || charen || !a15 || !a14 || a13 || !a12 || aec || !r_w || !game)
        && (!loram || charen || !a15 || !a14 || a13 || !a12 || aec || !r_w || !game)
        && (!hiram || charen || !a15 || !a14 || a13 || !a12 || aec || !r_w || exrom || game)
        && (!va14 || !aec || !game || va13 || !va12)
        && (!va14 || !aec || exrom || game || va13 || !va12);
    let f4 = cas || !a15 || !a14 || a13 || !a12 || aec || r_w;
    let f5 = (!hiram || !charen || !a15 || !a14 || a13 || !a12 || !ba || aec || !r_w || !game)
        && (!hiram || !charen || !a15 || !a14 || a13 || !a12 || aec || r_w || !game)
        && (!loram || !charen || !a15 || !a14 || a13 || !a12 || !ba || aec || !r_w || !game)
        && (!loram || !charen || !a15 || !a14 || a13 || !a12 || aec || r_w || !game)
        && (!hiram || !charen || !a15 || !a14 || a13 || !a12 || !ba || aec || !r_w || exrom || game)
        && (!hiram || !charen || !a15 || !a14 || a13 || !a12 || aec || r_w || exrom || game)
        && (!loram || !charen || !a15 || !a14 || a13 || !a12 || !ba || aec || !r_w || exrom || game)
        && (!loram || !charen || !a15 || !a14 || a13 || !a12 || aec || r_w || exrom || game)
        && (!a15 || !a14 || a13 || !a12 || !ba || aec || !r_w || !exrom || game)
        && (!a15 || !a14 || a13 || !a12 || aec || r_w || !exrom || game);
    let f6 = (!loram || !hiram || !a15 || a14 || a13 || aec || !r_w || exrom)
        && (!a15 || a14 || a13 || aec || !exrom || game);
    let f7 = (!hiram || !a15 || a14 || !a13 || aec || !r_w || exrom || game)
        && (!a15 || !a14 || !a13 || aec || !exrom || game)
        && (!aec || !exrom || game || !va13 || !va12);

    let mut output = 0;
    for (i, f) in [f0, f1, f2, f3, f4, f5, f6, f7].iter().enumerate() {
        if *f {
            output |= 1 << i;
        }
    }
    output
}
