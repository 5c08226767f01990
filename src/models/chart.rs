//! Chart series models

/// A labelled series of recent transaction amounts, ready to hand to a
/// plotting component. `points` are (slot index, amount) pairs; `labels`
/// is always the fixed six-slot axis, unused labels simply go unplotted.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest amount in the series, padded a little so the
    /// plot never sits on the frame edge
    pub fn value_bounds(&self) -> (f64, f64) {
        let min = self
            .points
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::NEG_INFINITY, f64::max);
        let range = (max - min).max(1e-8);
        let padding = range * 0.1;
        (min - padding, max + padding)
    }
}
