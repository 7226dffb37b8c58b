use metrics_exporter_prometheus::PrometheusHandle;
use rent_to_own::config::AnalysisConfig;
use rent_to_own::error::AppError;
use rent_to_own::workflows::readiness::{BatchPolicy, ReadinessAnalysis};
use rent_to_own::workflows::roster::RosterImporter;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) analysis: Arc<AnalysisConfig>,
}

/// Loads a roster file and scores it under the given batch policy.
pub(crate) fn load_analysis(
    data_path: &Path,
    policy: BatchPolicy,
) -> Result<ReadinessAnalysis, AppError> {
    let records = RosterImporter::from_path(data_path)?;
    let analysis = ReadinessAnalysis::from_records(records, policy)?;
    Ok(analysis)
}

/// Runs [`load_analysis`] on the blocking pool.
pub(crate) async fn load_analysis_blocking(
    data_path: PathBuf,
    policy: BatchPolicy,
) -> Result<ReadinessAnalysis, AppError> {
    tokio::task::spawn_blocking(move || load_analysis(&data_path, policy))
        .await
        .map_err(|join_error| AppError::Io(std::io::Error::other(join_error)))?
}

pub(crate) fn batch_policy(skip_invalid: bool, configured: BatchPolicy) -> BatchPolicy {
    if skip_invalid {
        BatchPolicy::SkipInvalid
    } else {
        configured
    }
}
