pub(crate) mod liberation_metrics;
pub(crate) mod recorded_runs;
