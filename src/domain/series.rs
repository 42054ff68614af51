// Decoded render data - one series per returned target
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub value: f64,
    pub time: DateTime<Utc>,
}

impl DataPoint {
    pub fn new(value: f64, time: DateTime<Utc>) -> Self {
        Self { value, time }
    }
}

/// Samples for one target, in the order the service returned them
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub target: String,
    pub data_points: Vec<DataPoint>,
}

impl Series {
    pub fn new(target: String, data_points: Vec<DataPoint>) -> Self {
        Self {
            target,
            data_points,
        }
    }

    pub fn latest(&self) -> Option<&DataPoint> {
        self.data_points.last()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_points.iter().map(|p| p.value)
    }
}

/// Series in the order the service returned them, which need not match target insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    series: Vec<Series>,
}

impl ResultSet {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// First series returned for `target`
    pub fn get(&self, target: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.target == target)
    }
}

impl IntoIterator for ResultSet {
    type Item = Series;
    type IntoIter = std::vec::IntoIter<Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn series_of(values: &[f64]) -> Series {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(*v, at(1000 + 10 * i as i64)))
            .collect();
        Series::new("a".to_string(), points)
    }

    #[test]
    fn test_result_set_lookup() {
        let set = ResultSet::new(vec![series_of(&[1.0, 2.5])]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("a").and_then(|s| s.latest()).map(|p| p.value), Some(2.5));
        assert!(set.get("b").is_none());
        assert_eq!(set.iter().flat_map(|s| s.values()).sum::<f64>(), 3.5);
    }
}
