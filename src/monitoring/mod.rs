pub mod web_vitals;

pub use web_vitals::{report_web_vitals, MetricLabel, WebVitalsMetric};
