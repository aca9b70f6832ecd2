//! Ward lookup by free text and by location.

use ward_air_ward_models::Ward;

/// Returns wards whose name, id or any point of interest contains `query`,
/// ignoring case. Results keep catalog order. A blank query matches nothing.
#[must_use]
pub fn search_wards<'a>(wards: &'a [Ward], query: &str) -> Vec<&'a Ward> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    wards
        .iter()
        .filter(|ward| {
            ward.name.to_lowercase().contains(&needle)
                || ward.id.to_lowercase().contains(&needle)
                || ward
                    .points_of_interest
                    .iter()
                    .any(|poi| poi.to_lowercase().contains(&needle))
        })
        .collect()
}

/// The first point of interest matching `query`, falling back to the zone.
///
/// Used to tell the user why a ward showed up in the results.
#[must_use]
pub fn matched_landmark<'a>(ward: &'a Ward, query: &str) -> &'a str {
    let needle = query.trim().to_lowercase();
    ward.points_of_interest
        .iter()
        .find(|poi| !needle.is_empty() && poi.to_lowercase().contains(&needle))
        .map_or(ward.zone.as_str(), String::as_str)
}

/// Resolves a coordinate to a ward.
///
/// Wards have no real boundaries, so this returns the first ward in the
/// catalog regardless of the coordinate.
#[must_use]
pub fn locate_ward(wards: &[Ward], latitude: f64, longitude: f64) -> Option<&Ward> {
    log::debug!("Locating ward for ({latitude}, {longitude})");
    wards.first()
}
