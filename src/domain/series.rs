// Plottable chart series built from hourly records
use crate::domain::error::ForecastError;
use crate::domain::hour::HourRecord;
use serde::Serialize;

/// Default number of axis points a temperature chart is reduced to.
pub const DEFAULT_TARGET_POINTS: usize = 8;

/// One plottable chart point: hour index on x, temperature on y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Map hourly records to (index, temperature) points in input order.
pub fn build_series(records: &[HourRecord]) -> Vec<Point> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| Point::new(index as f64, record.temperature))
        .collect()
}

/// Reduce a series to at most `target_count` evenly strided points.
///
/// The stride is `len / target_count`. When that rounds down to zero the
/// series already fits within the target and every point is kept. Points
/// are selected at indices 0, stride, 2*stride, ... with no wrapping and
/// no interpolation.
pub fn downsample(points: &[Point], target_count: usize) -> Result<Vec<Point>, ForecastError> {
    if target_count == 0 {
        return Err(ForecastError::InvalidTargetCount);
    }

    let stride = (points.len() / target_count).max(1);
    Ok(points.iter().copied().step_by(stride).collect())
}
