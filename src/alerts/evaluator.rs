//! Threshold evaluation
//!
//! Pure functions, no I/O.

use crate::domain::Sample;

/// Samples whose usage is strictly above `limit_percent`, in input order
pub fn exceeding<'a, I>(samples: I, limit_percent: f64) -> Vec<Sample>
where
    I: IntoIterator<Item = &'a Sample>,
{
    samples
        .into_iter()
        .filter(|sample| sample.used_percent.exceeds(limit_percent))
        .cloned()
        .collect()
}
