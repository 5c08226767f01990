//! Recent-transaction chart series
//!
//! Builds the six-slot line series from the trailing transaction amounts
//! and hands it to a plotting component. On screen the series feeds the
//! terminal chart widget; `export_png` renders the same series to disk.

use plotters::prelude::*;
use std::path::Path;
use tracing::info;

use crate::models::{ChartSeries, Transaction};
use crate::utils::DashboardError;

/// Fixed axis labels; when fewer than six amounts exist the trailing
/// labels are simply unused
const SLOT_LABELS: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

/// Line color, matching the dashboard accent (RGB 59,130,246)
pub const LINE_COLOR: RGBColor = RGBColor(59, 130, 246);

/// Build the chart series from the trailing six transaction amounts,
/// keeping ledger order. Shorter inputs produce a shorter series.
pub fn build_series(transactions: &[Transaction]) -> ChartSeries {
    let start = transactions.len().saturating_sub(6);
    let points = transactions[start..]
        .iter()
        .enumerate()
        .map(|(i, tx)| ((i + 1) as f64, tx.amount))
        .collect();

    ChartSeries {
        labels: SLOT_LABELS.iter().map(|l| l.to_string()).collect(),
        points,
    }
}

/// Render the series to a PNG file. Needs at least two points to draw a
/// line worth looking at.
pub fn export_png(
    series: &ChartSeries,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), DashboardError> {
    if series.points.len() < 2 {
        return Err(DashboardError::Chart(
            "not enough transactions to draw a chart (minimum 2)".to_string(),
        ));
    }

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| DashboardError::Chart(e.to_string()))?;

    let (y_min, y_max) = series.value_bounds();
    let x_max = SLOT_LABELS.len() as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption("Recent Transactions", ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, y_min..y_max)
        .map_err(|e| DashboardError::Chart(e.to_string()))?;

    chart
        .configure_mesh()
        .x_labels(SLOT_LABELS.len())
        .y_desc("Amount ($)")
        .draw()
        .map_err(|e| DashboardError::Chart(e.to_string()))?;

    // translucent fill under the line, then the line and its points
    chart
        .draw_series(AreaSeries::new(
            series.points.iter().copied(),
            0.0,
            LINE_COLOR.mix(0.2),
        ))
        .map_err(|e| DashboardError::Chart(e.to_string()))?;
    chart
        .draw_series(LineSeries::new(series.points.iter().copied(), &LINE_COLOR))
        .map_err(|e| DashboardError::Chart(e.to_string()))?;
    chart
        .draw_series(
            series
                .points
                .iter()
                .map(|p| Circle::new(*p, 3, LINE_COLOR.filled())),
        )
        .map_err(|e| DashboardError::Chart(e.to_string()))?;

    root.present()
        .map_err(|e| DashboardError::Chart(e.to_string()))?;
    info!(path = %path.display(), "chart exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(amount: f64) -> Transaction {
        Transaction {
            amount,
            transaction_type: "General".to_string(),
            description: String::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_series_takes_trailing_six() {
        let ledger: Vec<Transaction> = (1..=9).map(|i| tx(i as f64)).collect();
        let series = build_series(&ledger);
        assert_eq!(series.points.len(), 6);
        // ledger order preserved, oldest of the window first
        let amounts: Vec<f64> = series.points.iter().map(|(_, y)| *y).collect();
        assert_eq!(amounts, vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(series.labels.len(), 6);
    }

    #[test]
    fn test_short_ledger_keeps_fixed_labels() {
        let series = build_series(&[tx(10.0), tx(-4.0)]);
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.labels.len(), 6);
        assert_eq!(series.points[0], (1.0, 10.0));
        assert_eq!(series.points[1], (2.0, -4.0));
    }

    #[test]
    fn test_empty_ledger_builds_empty_series() {
        let series = build_series(&[]);
        assert!(series.is_empty());
    }

    #[test]
    fn test_value_bounds_are_padded() {
        let series = build_series(&[tx(0.0), tx(100.0)]);
        let (lo, hi) = series.value_bounds();
        assert!(lo < 0.0);
        assert!(hi > 100.0);
    }

    #[test]
    fn test_export_rejects_single_point() {
        let series = build_series(&[tx(5.0)]);
        let result = export_png(&series, Path::new("/tmp/zenith-chart-test.png"), 640, 480);
        assert!(result.is_err());
    }
}
