//! Named numeric series attached to a submission.
//!
//! Metrics come from an external collaborator (typically a benchmark
//! harness) as a JSON object mapping series name to either a bare number or
//! an array of numbers. On the wire a series is always an array, so a bare
//! number becomes a one-element series. Grouping by a "/"-delimited name
//! prefix is a naming convention only; nothing here enforces it.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CoreError, CoreResult};

/// One named series of measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Ordered collection of metric series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics(Vec<MetricSeries>);

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, series: MetricSeries) {
        self.0.push(series);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricSeries> {
        self.0.iter()
    }
}

impl FromIterator<MetricSeries> for Metrics {
    fn from_iter<I: IntoIterator<Item = MetricSeries>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Metrics {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for series in &self.0 {
            map.serialize_entry(&series.name, &series.values)?;
        }
        map.end()
    }
}

/// Accepts `name: 3.5` as shorthand for `name: [3.5]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrList {
    One(f64),
    Many(Vec<f64>),
}

impl From<NumberOrList> for Vec<f64> {
    fn from(v: NumberOrList) -> Self {
        match v {
            NumberOrList::One(n) => vec![n],
            NumberOrList::Many(list) => list,
        }
    }
}

impl<'de> Deserialize<'de> for Metrics {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MetricsVisitor;

        impl<'de> Visitor<'de> for MetricsVisitor {
            type Value = Metrics;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of series name to a number or an array of numbers")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut metrics = Metrics::new();
                while let Some((name, values)) = access.next_entry::<String, NumberOrList>()? {
                    metrics.push(MetricSeries::new(name, values.into()));
                }
                Ok(metrics)
            }
        }

        deserializer.deserialize_map(MetricsVisitor)
    }
}

/// Load metric series from a JSON file.
pub fn load_metrics(path: &Path) -> CoreResult<Metrics> {
    let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| CoreError::Metrics {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bare_number_becomes_one_element_series() {
        let metrics: Metrics = serde_json::from_str(r#"{"build/time": 42.5}"#).unwrap();
        assert_eq!(metrics.len(), 1);
        let series = metrics.iter().next().unwrap();
        assert_eq!(series.name, "build/time");
        assert_eq!(series.values, vec![42.5]);
    }

    #[test]
    fn array_is_kept_in_order() {
        let metrics: Metrics =
            serde_json::from_str(r#"{"boot/cycles": [1.0, 3.0, 2.0]}"#).unwrap();
        let series = metrics.iter().next().unwrap();
        assert_eq!(series.values, vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn serializes_every_series_as_array() {
        let metrics: Metrics = [
            MetricSeries::new("a", vec![1.5]),
            MetricSeries::new("b", vec![2.0, 4.0]),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&metrics).unwrap();
        assert_eq!(json, r#"{"a":[1.5],"b":[2.0,4.0]}"#);
    }

    #[test]
    fn values_round_trip_exactly() {
        let original: Metrics = [MetricSeries::new("perf/score", vec![0.25, 1099.75])]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&original).unwrap();
        let back: Metrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn non_numeric_value_is_a_metrics_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "not a number"}}"#).unwrap();

        let err = load_metrics(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Metrics { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_metrics(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
