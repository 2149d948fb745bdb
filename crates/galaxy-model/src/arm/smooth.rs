//! Degree-1 moving-window smoothing.
//!
//! Local linear least-squares over an odd window: in the interior the fitted
//! value at the window center equals the plain average; at the edges a line
//! is fitted to the first (last) `window` samples and evaluated in place, so
//! affine sequences pass through unchanged. This removes the small radius and
//! width discontinuities introduced where the piecewise pitch angle changes.

/// Smooth `values` with a degree-1 filter of odd length `window`.
///
/// Invariants: `window` odd, `3 <= window <= values.len()`.
pub fn smooth_linear(values: &[f64], window: usize) -> Vec<f64> {
    debug_assert!(window >= 3 && window % 2 == 1);
    debug_assert!(window <= values.len());
    let n = values.len();
    let half = window / 2;
    let mut out = vec![0.0; n];

    // Interior: centered average (= linear fit evaluated at the center).
    for i in half..n - half {
        let sum: f64 = values[i - half..=i + half].iter().sum();
        out[i] = sum / window as f64;
    }

    // Edges: fit a line to the boundary window and evaluate at each position.
    let (head_slope, head_mean) = line_fit(&values[..window]);
    let t_mid = (window as f64 - 1.0) / 2.0;
    for (i, o) in out.iter_mut().take(half).enumerate() {
        *o = head_mean + head_slope * (i as f64 - t_mid);
    }
    let (tail_slope, tail_mean) = line_fit(&values[n - window..]);
    for (i, o) in out.iter_mut().enumerate().skip(n - half) {
        let t = (i - (n - window)) as f64;
        *o = tail_mean + tail_slope * (t - t_mid);
    }

    out
}

/// Least-squares line through `values` at positions `0..len`; returns
/// `(slope, mean)` with the mean taken at the window midpoint.
fn line_fit(values: &[f64]) -> (f64, f64) {
    let m = values.len() as f64;
    let t_mid = (m - 1.0) / 2.0;
    let mean = values.iter().sum::<f64>() / m;
    let mut num = 0.0;
    let mut den = 0.0;
    for (i, &v) in values.iter().enumerate() {
        let dt = i as f64 - t_mid;
        num += dt * (v - mean);
        den += dt * dt;
    }
    (num / den, mean)
}
