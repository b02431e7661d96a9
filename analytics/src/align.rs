use chrono::{DateTime, Utc};

use market::types::PricePoint;

/// Two price series inner-joined on timestamp.
///
/// `a[i]` and `b[i]` were observed at `ts[i]`; timestamps present in only
/// one input are dropped.
#[derive(Debug, Clone, Default)]
pub struct AlignedPair {
    pub ts: Vec<DateTime<Utc>>,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.ts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ts.is_empty()
    }
}

/// Inner-join two time-ascending price series on their timestamps.
pub fn align(series_a: &[PricePoint], series_b: &[PricePoint]) -> AlignedPair {
    let mut out = AlignedPair::default();

    let mut ia = 0;
    let mut ib = 0;
    while ia < series_a.len() && ib < series_b.len() {
        let ta = series_a[ia].ts;
        let tb = series_b[ib].ts;

        if ta == tb {
            out.ts.push(ta);
            out.a.push(series_a[ia].close);
            out.b.push(series_b[ib].close);
            ia += 1;
            ib += 1;
        } else if ta < tb {
            ia += 1;
        } else {
            ib += 1;
        }
    }

    out
}
