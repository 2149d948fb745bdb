//! Calibrated parameter tables for the six spiral arms.
//!
//! All constants follow Reid et al. (2019); modification is not encouraged.
//! Angles are galactic longitudes in degrees parametrizing the spine and are
//! not wrapped to [0, 360): domains may start negative or run past 360.

use std::fmt;

use serde::Serialize;

/// One angular regime of the piecewise radius law.
///
/// Regime selection walks the list in order and picks the first entry whose
/// bound admits the query angle; the last entry is open-ended.
#[derive(Clone, Copy, Debug)]
pub struct Regime {
    /// Upper angle bound (degrees); `f64::INFINITY` for the final regime.
    pub until: f64,
    /// Boundary ownership: `true` means `b <= until`, `false` means `b < until`.
    pub closed: bool,
    /// Pitch angle ψ of the logarithmic segment (degrees).
    pub psi_deg: f64,
    /// Kink angle for this regime (degrees).
    pub b_kink: f64,
    /// Galactocentric radius at the kink (kpc).
    pub r_kink: f64,
}

/// Half-width law coefficients for one underlying parameter table.
#[derive(Clone, Copy, Debug)]
pub struct WidthLaw {
    pub w_kink: f64,
    pub r_kink: f64,
    /// Per-arm additive calibration offset (kpc).
    pub offset: f64,
}

/// Triangular spine correction: `max(0, amplitude - |center - b| / influence)`.
///
/// Purely empirical de-kinking term; only the composite Norma–Outer arm
/// carries these.
#[derive(Clone, Copy, Debug)]
pub struct Trim {
    pub center: f64,
    pub amplitude: f64,
    pub influence: f64,
    /// Apply only while `b <= only_until` (`INFINITY` = everywhere).
    pub only_until: f64,
}

/// Immutable per-arm constants: angular span(s), radius regimes, width
/// tables, spine corrections, and the smoothing window length.
///
/// Invariants:
/// - Every span satisfies `end > begin`.
/// - `window` is odd, >= 3, and <= the sample count of the shortest span.
/// - `regimes` and `widths` are non-empty and end with an open-ended entry.
#[derive(Clone, Copy, Debug)]
pub struct ArmParams {
    /// Angular domain(s) `[begin, end]` in degrees; the split arm has two.
    pub spans: &'static [(f64, f64)],
    pub regimes: &'static [Regime],
    /// `(upper angle bound, law)`; a law applies while `b < bound`.
    pub widths: &'static [(f64, WidthLaw)],
    pub trims: &'static [Trim],
    /// Smoothing window length (odd, >= 3).
    pub window: usize,
}

const INF: f64 = f64::INFINITY;

pub static SCT_CEN: ArmParams = ArmParams {
    spans: &[(0.0, 430.0)],
    regimes: &[
        Regime { until: 67.0, closed: true, psi_deg: -12.5, b_kink: 67.0, r_kink: 4.91 },
        Regime { until: 145.0, closed: false, psi_deg: -15.0, b_kink: 67.0, r_kink: 4.91 },
        Regime { until: 292.0, closed: false, psi_deg: -11.7, b_kink: 67.0, r_kink: 4.91 },
        // beyond 292 deg the pitch relaxes by 0.75 deg
        Regime { until: INF, closed: true, psi_deg: -10.95, b_kink: 67.0, r_kink: 4.91 },
    ],
    widths: &[(INF, WidthLaw { w_kink: 0.23, r_kink: 4.91, offset: 0.2 })],
    trims: &[],
    window: 51,
};

pub static SGR_CAR: ArmParams = ArmParams {
    spans: &[(-140.0, 260.0)],
    regimes: &[
        Regime { until: 66.0, closed: true, psi_deg: -7.5, b_kink: 66.0, r_kink: 6.04 },
        Regime { until: 126.5, closed: false, psi_deg: -16.8, b_kink: 66.0, r_kink: 6.04 },
        // past the tangency the spine runs 0.6 kpc outside the kink radius
        Regime { until: INF, closed: true, psi_deg: -10.5, b_kink: 66.0, r_kink: 6.64 },
    ],
    widths: &[(INF, WidthLaw { w_kink: 0.27, r_kink: 6.04, offset: 0.25 })],
    trims: &[],
    window: 51,
};

pub static PERSEUS: ArmParams = ArmParams {
    spans: &[(188.0, 482.0)],
    regimes: &[
        Regime { until: 410.0, closed: true, psi_deg: -13.0, b_kink: 410.0, r_kink: 8.87 },
        Regime { until: INF, closed: true, psi_deg: -10.3, b_kink: 410.0, r_kink: 8.87 },
    ],
    widths: &[(INF, WidthLaw { w_kink: 0.35, r_kink: 8.87, offset: 0.3 })],
    trims: &[],
    window: 3,
};

pub static LOCAL: ArmParams = ArmParams {
    spans: &[(50.0, 123.0)],
    regimes: &[Regime { until: INF, closed: true, psi_deg: -11.4, b_kink: 81.0, r_kink: 8.26 }],
    widths: &[(INF, WidthLaw { w_kink: 0.31, r_kink: 8.26, offset: 0.2 })],
    trims: &[],
    window: 3,
};

/// Composite arm: the Norma table up to the 300-degree join, the Outer table
/// (kink at 72 + 360 deg) beyond it. The width table switches at 350 deg.
pub static NORMA_OUTER: ArmParams = ArmParams {
    spans: &[(30.0, 481.0)],
    regimes: &[
        Regime { until: 72.0, closed: true, psi_deg: 5.0, b_kink: 72.0, r_kink: 4.46 },
        Regime { until: 153.5, closed: false, psi_deg: -10.0, b_kink: 72.0, r_kink: 4.46 },
        Regime { until: 300.0, closed: true, psi_deg: -5.0, b_kink: 72.0, r_kink: 4.46 },
        Regime { until: 432.0, closed: false, psi_deg: -15.0, b_kink: 432.0, r_kink: 12.24 },
        Regime { until: INF, closed: true, psi_deg: -15.0, b_kink: 432.0, r_kink: 12.24 },
    ],
    widths: &[
        (350.0, WidthLaw { w_kink: 0.14, r_kink: 4.46, offset: 0.2 }),
        (INF, WidthLaw { w_kink: 0.65, r_kink: 12.24, offset: 0.2 }),
    ],
    trims: &[
        Trim { center: 153.5, amplitude: 0.7, influence: 200.0, only_until: INF },
        Trim { center: 30.0, amplitude: 0.8, influence: 50.0, only_until: 72.0 },
    ],
    window: 301,
};

/// Split arm: disjoint near and far angular spans, one ring each.
pub static THREE_KPC: ArmParams = ArmParams {
    spans: &[(75.0, 225.0), (260.0, 400.0)],
    regimes: &[Regime { until: INF, closed: true, psi_deg: 0.0, b_kink: 75.0, r_kink: 3.25 }],
    widths: &[(INF, WidthLaw { w_kink: 0.18, r_kink: 3.25, offset: 0.1 })],
    trims: &[],
    window: 3,
};

/// The six modeled arms (tagged variant; each carries its parameter table).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ArmKind {
    ThreeKpc,
    NormaOuter,
    SctCen,
    SgrCar,
    Perseus,
    Local,
}

impl ArmKind {
    pub const ALL: [ArmKind; 6] = [
        ArmKind::ThreeKpc,
        ArmKind::NormaOuter,
        ArmKind::SctCen,
        ArmKind::SgrCar,
        ArmKind::Perseus,
        ArmKind::Local,
    ];

    #[inline]
    pub fn params(self) -> &'static ArmParams {
        match self {
            ArmKind::ThreeKpc => &THREE_KPC,
            ArmKind::NormaOuter => &NORMA_OUTER,
            ArmKind::SctCen => &SCT_CEN,
            ArmKind::SgrCar => &SGR_CAR,
            ArmKind::Perseus => &PERSEUS,
            ArmKind::Local => &LOCAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArmKind::ThreeKpc => "ThreeKpc",
            ArmKind::NormaOuter => "NormaOuter",
            ArmKind::SctCen => "SctCen",
            ArmKind::SgrCar => "SgrCar",
            ArmKind::Perseus => "Perseus",
            ArmKind::Local => "Local",
        }
    }
}

impl fmt::Display for ArmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
