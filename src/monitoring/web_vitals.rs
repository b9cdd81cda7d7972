//! Client-side performance metrics (CLS, LCP, FID, TTFB, ...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether a metric is one of the standard web vitals or an app-defined one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricLabel {
    WebVital,
    Custom,
}

/// A single measurement as emitted by the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebVitalsMetric {
    pub id: String,
    pub name: String,
    pub start_time: f64,
    pub value: f64,
    pub label: MetricLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Map<String, Value>>,
}

/// Hook invoked for every web-vitals measurement.
///
/// Currently discards the metric.
pub fn report_web_vitals(_metric: &WebVitalsMetric) {}
