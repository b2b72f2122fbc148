// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! The address decoding logic of the Commodore 64's PLA.
//!
//! [`equations::evaluate`] turns the sixteen PLA inputs into its eight chip select outputs,
//! bit for bit as the chip does. [`chips::Ic82S100`] models the same logic the way it is
//! laid out in silicon, as P-terms and S-terms behind a chip enable. The [`table`] module
//! handles the full 64k truth table.

pub mod chips;
pub mod equations;
pub mod select;
pub mod signals;
pub mod table;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use crate::{
    equations::evaluate,
    select::Device,
    signals::{Input, InputVector, Output, OutputVector},
    table::{TableError, TruthTable},
};
