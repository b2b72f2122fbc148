// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod ic82s100;

pub use self::ic82s100::Ic82S100;
