use lifedelta_core::models::RiskFactor;

/// Sort by descending absolute impact and keep the first `limit`.
///
/// The sort is stable, so ties keep evaluation order. `total_cmp` gives NaN
/// impacts a fixed position (ahead of every finite magnitude).
pub fn top_by_magnitude(mut factors: Vec<RiskFactor>, limit: usize) -> Vec<RiskFactor> {
    factors.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude()));
    factors.truncate(limit);
    factors
}
