//! Population Stability Index primitives.

/// Probability substituted for an empty bin before taking the ratio/log.
///
/// An empty bin on either side would make `ln(p_new / p_ref)` undefined, so
/// a zero proportion is replaced by this floor. The substitution is part of
/// the PSI contract: results never contain NaN or infinity.
pub const PSI_FLOOR: f64 = 1e-4;

/// PSI = Σ (p_new - p_ref) · ln(p_new / p_ref) over matching bins
///
/// Zero proportions are replaced by [`PSI_FLOOR`]. Every term is
/// non-negative, and identical inputs give exactly 0.
pub fn psi(reference: &[f64], current: &[f64]) -> f64 {
    debug_assert_eq!(reference.len(), current.len(), "PSI bins must align");
    reference
        .iter()
        .zip(current.iter())
        .map(|(&p_ref, &p_new)| {
            let p_ref = smoothed(p_ref);
            let p_new = smoothed(p_new);
            (p_new - p_ref) * (p_new / p_ref).ln()
        })
        .sum()
}

fn smoothed(p: f64) -> f64 {
    if p > 0.0 {
        p
    } else {
        PSI_FLOOR
    }
}

/// Bin index of `value` for left-closed bins `[edges[i], edges[i+1])`
///
/// Edges carry ±infinity sentinels, so values outside the training range
/// fall into the outermost bins. The result is in `0..edges.len() - 1`.
pub fn bucket_index(edges: &[f64], value: f64) -> usize {
    if edges.len() <= 2 {
        return 0;
    }
    let interior = &edges[1..edges.len() - 1];
    interior.partition_point(|&edge| edge <= value)
}

/// Proportion of finite-or-infinite (non-NaN) values in each bin
///
/// Returns the proportions and the number of values counted.
pub fn bin_proportions(edges: &[f64], values: &[f64]) -> (Vec<f64>, usize) {
    let n_bins = edges.len().saturating_sub(1).max(1);
    let mut counts = vec![0usize; n_bins];
    let mut observed = 0usize;
    for &value in values {
        if value.is_nan() {
            continue;
        }
        counts[bucket_index(edges, value)] += 1;
        observed += 1;
    }
    (to_proportions(&counts, observed), observed)
}

pub(crate) fn to_proportions(counts: &[usize], total: usize) -> Vec<f64> {
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|&c| c as f64 / total as f64).collect()
}
