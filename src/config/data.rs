use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cartesian point for line and scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point with a pixel radius for bubble series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl BubblePoint {
    #[must_use]
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }
}

/// Timestamped observation; translated to epoch milliseconds on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl TimePoint {
    #[must_use]
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }

    #[must_use]
    pub(crate) fn epoch_millis(self) -> f64 {
        self.time.timestamp_millis() as f64
    }
}

/// The values of one series.
///
/// Untagged variant order matters for deserialization: bubble points carry
/// a superset of the cartesian point fields and must be tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSeries {
    Numbers(Vec<f64>),
    Bubbles(Vec<BubblePoint>),
    Points(Vec<DataPoint>),
    TimePoints(Vec<TimePoint>),
}

impl DataSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(values) => values.len(),
            Self::Bubbles(points) => points.len(),
            Self::Points(points) => points.len(),
            Self::TimePoints(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for DataSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::Numbers(values)
    }
}

impl From<Vec<DataPoint>> for DataSeries {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::Points(points)
    }
}

impl From<Vec<BubblePoint>> for DataSeries {
    fn from(points: Vec<BubblePoint>) -> Self {
        Self::Bubbles(points)
    }
}

impl From<Vec<TimePoint>> for DataSeries {
    fn from(points: Vec<TimePoint>) -> Self {
        Self::TimePoints(points)
    }
}
