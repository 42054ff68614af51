// Render JSON wire format and its conversion into domain series
use crate::domain::series::{DataPoint, ResultSet, Series};
use crate::error::DecodeError;
use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RenderSeries {
    target: String,
    datapoints: Vec<RenderPoint>,
}

/// `[value, timestamp]`; value is null when the service has no sample
#[derive(Debug, Deserialize)]
struct RenderPoint(Option<f64>, f64);

/// Decode a `format=json` render body.
///
/// Null-valued samples are dropped. Timestamps are truncated to whole seconds.
pub fn decode_render_body(body: &[u8]) -> Result<ResultSet, DecodeError> {
    let raw: Vec<RenderSeries> = serde_json::from_slice(body)?;

    let series = raw
        .into_iter()
        .map(into_series)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResultSet::new(series))
}

fn into_series(raw: RenderSeries) -> Result<Series, DecodeError> {
    let mut data_points = Vec::with_capacity(raw.datapoints.len());

    for RenderPoint(value, timestamp) in raw.datapoints {
        let Some(value) = value else {
            continue;
        };

        let time = DateTime::from_timestamp(timestamp.trunc() as i64, 0).ok_or_else(|| {
            DecodeError::Timestamp {
                target: raw.target.clone(),
                timestamp,
            }
        })?;

        data_points.push(DataPoint::new(value, time));
    }

    Ok(Series::new(raw.target, data_points))
}
