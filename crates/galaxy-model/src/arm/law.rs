//! Radius and width laws, piecewise over angular regimes.
//!
//! Radius: `r = R_kink * exp((B_kink - B) * tan psi)`, angles in degrees,
//! evaluated with the pitch angle of the regime containing `B`. Strictly
//! positive for any real `B`.
//!
//! Width: `w = w_kink + 0.042 * (r - R_kink) * 1.65 + offset`, with the
//! coefficients of the width table whose bound admits `B`. The caller passes
//! the smoothed radius so the half-width stays continuous across regime
//! boundaries.

use super::params::{ArmParams, Regime, WidthLaw};

/// Linear width growth per kpc of radial distance from the kink.
const WIDTH_SLOPE: f64 = 0.042;
/// Calibration multiplier on the width slope.
const WIDTH_SIGMA: f64 = 1.65;

#[inline]
fn select_regime(regimes: &[Regime], b: f64) -> &Regime {
    debug_assert!(!regimes.is_empty());
    let mut idx = regimes.len() - 1;
    for (i, reg) in regimes.iter().enumerate() {
        let hit = if reg.closed { b <= reg.until } else { b < reg.until };
        if hit {
            idx = i;
            break;
        }
    }
    &regimes[idx]
}

#[inline]
fn select_width(widths: &[(f64, WidthLaw)], b: f64) -> &WidthLaw {
    debug_assert!(!widths.is_empty());
    let mut idx = widths.len() - 1;
    for (i, (until, _)) in widths.iter().enumerate() {
        if b < *until {
            idx = i;
            break;
        }
    }
    &widths[idx].1
}

/// Galactocentric radius (kpc) of the spine at angle `b` (degrees).
pub fn radius_at(params: &ArmParams, b: f64) -> f64 {
    let reg = select_regime(params.regimes, b);
    ((reg.b_kink - b).to_radians() * reg.psi_deg.to_radians().tan()).exp() * reg.r_kink
}

/// Ribbon half-width (kpc) at angle `b`, given the smoothed radius `r`.
pub fn width_at(params: &ArmParams, b: f64, r: f64) -> f64 {
    let law = select_width(params.widths, b);
    law.w_kink + WIDTH_SLOPE * (r - law.r_kink) * WIDTH_SIGMA + law.offset
}

/// Total triangular spine correction at angle `b` (zero for most arms).
pub fn trim_at(params: &ArmParams, b: f64) -> f64 {
    params
        .trims
        .iter()
        .filter(|t| b <= t.only_until)
        .map(|t| (t.amplitude - (t.center - b).abs() / t.influence).max(0.0))
        .sum()
}
