//! Optional state-presentation renderer: prints one line per nonzero
//! amplitude, ordered by index, in the form `|b_{n-1}...b_0> a+bi`. Reads
//! amplitudes; never mutates them.

use std::fmt::Write as _;

use crate::system::System;
use crate::types::R;

/// Renders every amplitude whose squared magnitude exceeds `threshold` as
/// one `|...> a+bi` line, in ascending index order.
pub fn render(system: &System, threshold: R) -> String {
    let n = system.count();
    let mut out = String::new();
    for (i, a) in system.amplitudes().iter().enumerate() {
        if a.norm_sqr() <= threshold {
            continue;
        }
        let bits: String = (0..n).rev().map(|b| if (i >> b) & 1 == 1 { '1' } else { '0' }).collect();
        let sign = if a.im < 0.0 { '-' } else { '+' };
        let _ = writeln!(out, "|{bits}> {}{}{}i", a.re, sign, a.im.abs());
    }
    out
}
