// JSON API routes mounted under /api

pub mod games;
pub mod metrics;
