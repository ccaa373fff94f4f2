//! Projective measurement.

use crate::error::Result;
use crate::gates::single::h;
use crate::qubit::Qubit;
use crate::rng;
use crate::system::System;
use crate::types::R;

/// Below this distance from 0 or 1, a sampled `p` is treated as exactly
/// feasible rather than drawn — guards against a measurement collapsing
/// onto a partition whose apparent mass is only accumulated floating-point
/// drift rather than a real amplitude.
const FEASIBILITY_EPS: R = 1e-9;

/// Measures `q` in the computational (Z) basis using the process-wide
/// default randomness source. Collapses and renormalises the state, and
/// returns the classical outcome.
pub fn m(system: &mut System, q: &Qubit) -> Result<bool> {
    m_with(system, q, |p| rng::chance(p))
}

/// Measures `q` in the sign (X) basis: `H(q); M(q); H(q)`.
pub fn mx(system: &mut System, q: &Qubit) -> Result<bool> {
    h(system, q)?;
    let outcome = m(system, q)?;
    h(system, q)?;
    Ok(outcome)
}

/// Like [`m`], but draws the classical outcome from `rng` instead of the
/// process-wide default — useful for deterministic tests.
pub fn m_with_rng(system: &mut System, q: &Qubit, rng: &mut crate::rng::Rng) -> Result<bool> {
    m_with(system, q, |p| rng.chance(p))
}

fn m_with(system: &mut System, q: &Qubit, mut draw: impl FnMut(R) -> bool) -> Result<bool> {
    system.check_qubit(q)?;
    let target = q.index();

    let amps = system.amplitudes();
    let p: R = amps
        .iter()
        .enumerate()
        .filter(|(i, _)| (i >> target) & 1 == 1)
        .map(|(_, a)| a.norm_sqr())
        .sum();

    let outcome = if p < FEASIBILITY_EPS {
        false
    } else if p > 1.0 - FEASIBILITY_EPS {
        true
    } else {
        draw(p)
    };

    let amps = system.amplitudes_mut();
    for (i, a) in amps.iter_mut().enumerate() {
        let bit_is_one = (i >> target) & 1 == 1;
        if bit_is_one != outcome {
            *a = crate::types::C::new(0.0, 0.0);
        }
    }

    let survivor_norm_sqr: R = amps.iter().map(|a| a.norm_sqr()).sum();
    let scale = 1.0 / survivor_norm_sqr.sqrt();
    for a in amps.iter_mut() {
        *a = *a * crate::types::C::new(scale, 0.0);
    }

    log::debug!("measured qubit {target}: p(true)={p}, outcome={outcome}");
    Ok(outcome)
}
