use market::types::PricePoint;

use crate::align::align;

/// Spread series `A − β·B` over the inner-joined timestamps.
///
/// Points whose value is not finite are dropped. An empty result is
/// reported as `None`, never as an empty series: both "nothing aligns"
/// and "every point dropped" mean there is no spread to reason about,
/// and downstream stages treat absence, not emptiness, as the
/// not-enough-data signal. Callers that lack a hedge ratio never get
/// here (absence propagates before this stage).
pub fn spread(series_a: &[PricePoint], series_b: &[PricePoint], beta: f64) -> Option<Vec<PricePoint>> {
    let aligned = align(series_a, series_b);
    if aligned.is_empty() {
        return None;
    }

    let points: Vec<PricePoint> = aligned
        .ts
        .iter()
        .zip(aligned.a.iter().zip(&aligned.b))
        .map(|(&ts, (&a, &b))| PricePoint {
            ts,
            close: a - beta * b,
        })
        .filter(|p| p.close.is_finite())
        .collect();

    if points.is_empty() { None } else { Some(points) }
}
