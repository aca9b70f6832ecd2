//! Forecast overlays for the ward comparison chart.

use ward_air_analytics_models::{ForecastComparison, ForecastSeries};
use ward_air_ward_models::{WINDOW_LEN, Ward};

use crate::AnalyticsError;

/// Overlays the forecasts of `with` on the forecast of `base_id`.
///
/// Repeated ids and the base ward itself are dropped from `with`; the rest
/// keep the order they were given in.
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownWard`] for the first id, base or
/// compared, that is not in `wards`.
pub fn compare_forecasts<S: AsRef<str>>(
    wards: &[Ward],
    base_id: &str,
    with: &[S],
) -> Result<ForecastComparison, AnalyticsError> {
    let find = |id: &str| {
        wards
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| AnalyticsError::UnknownWard { id: id.to_string() })
    };

    let base = find(base_id)?;

    let mut seen: Vec<&str> = vec![base_id];
    let mut others = Vec::with_capacity(with.len());
    for id in with.iter().map(AsRef::as_ref) {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        others.push(ForecastSeries::from(find(id)?));
    }

    log::debug!("Comparing {base_id} against {} wards", others.len());

    Ok(ForecastComparison {
        hours: (1..=WINDOW_LEN).map(|h| format!("+{h}h")).collect(),
        base: ForecastSeries::from(base),
        others,
    })
}
