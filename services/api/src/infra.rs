use metrics_exporter_prometheus::PrometheusHandle;
use pair_insight::i18n::Language;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) default_language: Language,
}

impl AppState {
    /// Language for a request: explicit request code wins, then the
    /// configured default; unknown codes fall through to English.
    pub(crate) fn request_language(&self, requested: Option<&str>) -> Language {
        match requested.and_then(Language::from_code) {
            Some(language) => language,
            None => self.default_language,
        }
    }
}
