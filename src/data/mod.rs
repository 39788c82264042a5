//! Startup data loading and the immutable dashboard context.
//!
//! The loader runs exactly once, before the server binds: fetch the CSV,
//! project it to the dashboard columns, derive the UI control parameters.
//! Both failure modes are fatal; the process must not start serving with a
//! broken or empty table.

use std::sync::Arc;

use thiserror::Error;

use crate::models::{LaunchRecord, ALL_SITES};

/// Canonical dataset location, used when `--data-url` is not given.
pub const DEFAULT_DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Payload range slider granularity, in kilograms.
pub const PAYLOAD_STEP: f64 = 2000.0;

/// Startup load failures. Both variants abort the process before the
/// listener binds.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to download dataset: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed dataset: {0}")]
    Format(String),
}

/// Fetch the raw CSV payload from `url`.
pub async fn fetch_csv(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Parse CSV text into launch records.
///
/// The header must include the four dashboard columns; anything else in the
/// source is dropped by the serde projection. A missing column or an
/// unparseable field is a [`LoadError::Format`].
pub fn parse_records(text: &str) -> Result<Vec<LaunchRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<LaunchRecord>, _>>()
        .map_err(|e| LoadError::Format(e.to_string()))
}

/// Download and parse the dataset in one step.
pub async fn load(url: &str) -> Result<Vec<LaunchRecord>, LoadError> {
    let text = fetch_csv(url).await?;
    parse_records(&text)
}

/// Immutable context shared by every handler: the record table plus the
/// control parameters derived from it at load time.
///
/// Cloning is cheap (one `Arc` bump); axum clones the state per request.
#[derive(Clone, Debug)]
pub struct DashboardState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: (f64, f64),
}

impl DashboardState {
    /// Derive the UI control parameters from a loaded table.
    ///
    /// `sites` keeps unique launch sites in first-seen order with the
    /// [`ALL_SITES`] sentinel appended last. An empty table is rejected:
    /// the payload bounds would be undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Format("dataset contains no records".into()));
        }

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }
        sites.push(ALL_SITES.to_string());

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in &records {
            min = min.min(record.payload_mass);
            max = max.max(record.payload_mass);
        }

        Ok(Self {
            inner: Arc::new(Inner {
                records,
                sites,
                payload_bounds: (min, max),
            }),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.inner.records
    }

    /// Unique sites in first-seen order, `"All"` last.
    pub fn sites(&self) -> &[String] {
        &self.inner.sites
    }

    /// (min, max) payload mass over all records.
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.inner.payload_bounds
    }

    /// Coerce a requested payload range into the table's bounds.
    ///
    /// Missing or non-finite endpoints fall back to the full bounds,
    /// out-of-range endpoints are clamped, and inverted endpoints are
    /// swapped. Control input degrades, it never errors.
    pub fn clamp_range(&self, low: Option<f64>, high: Option<f64>) -> (f64, f64) {
        let (min, max) = self.inner.payload_bounds;
        let mut low = low.filter(|v| v.is_finite()).unwrap_or(min).clamp(min, max);
        let mut high = high.filter(|v| v.is_finite()).unwrap_or(max).clamp(min, max);
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        (low, high)
    }
}
