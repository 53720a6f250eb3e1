use super::views::ReportView;

/// Ticket identifying one in-flight analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Tracks the active view model across overlapping analysis requests with
/// last-write-wins semantics: only the most recently issued request may
/// install its result, and a stale completion is discarded without touching
/// the active view.
///
/// While a request is outstanding the prior view (if any) stays available,
/// displayed-but-stale. Single-threaded by design; there is no shared
/// writable state between concurrent assemblies, so no locking.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    sequence: u64,
    active: Option<ReportView>,
    loading: bool,
    error: Option<String>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request. Any previously issued token becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.sequence += 1;
        self.loading = true;
        self.error = None;
        RequestToken(self.sequence)
    }

    /// Installs a completed view model if `token` is still current. Returns
    /// whether the view was installed.
    pub fn complete(&mut self, token: RequestToken, view: ReportView) -> bool {
        if token.0 != self.sequence {
            tracing::debug!(token = token.0, current = self.sequence, "discarding stale result");
            return false;
        }

        self.active = Some(view);
        self.loading = false;
        true
    }

    /// Records a retryable failure for the current request. Stale failures
    /// are ignored the same way stale completions are.
    pub fn fail(&mut self, token: RequestToken, message: impl Into<String>) -> bool {
        if token.0 != self.sequence {
            return false;
        }

        self.error = Some(message.into());
        self.loading = false;
        true
    }

    pub fn active(&self) -> Option<&ReportView> {
        self.active.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::report::assembler::{assemble, ReportKind};
    use serde_json::json;

    fn view(marker: &str) -> ReportView {
        assemble(
            &json!({"policy_metadata": {"policy_name": marker}}),
            ReportKind::Policy,
            Language::En,
        )
    }

    fn policy_name(view: &ReportView) -> Option<String> {
        match view {
            ReportView::Policy(policy) => policy
                .metadata
                .as_ref()
                .and_then(|meta| meta.policy_name.clone()),
            ReportView::Competitor(_) => None,
        }
    }

    #[test]
    fn stale_response_cannot_overwrite_newer_result() {
        let mut session = AnalysisSession::new();
        let first = session.begin();
        let second = session.begin();

        // B resolves first, then A arrives late.
        assert!(session.complete(second, view("Policy B")));
        assert!(!session.complete(first, view("Policy A")));

        let active = session.active().expect("active view");
        assert_eq!(policy_name(active).as_deref(), Some("Policy B"));
        assert!(!session.is_loading());
    }

    #[test]
    fn prior_view_stays_available_while_loading() {
        let mut session = AnalysisSession::new();
        let token = session.begin();
        assert!(session.complete(token, view("Initial")));

        let _newer = session.begin();
        assert!(session.is_loading());
        let active = session.active().expect("stale view still displayed");
        assert_eq!(policy_name(active).as_deref(), Some("Initial"));
    }

    #[test]
    fn failures_are_retryable_and_respect_staleness() {
        let mut session = AnalysisSession::new();
        let first = session.begin();
        assert!(session.fail(first, "network unreachable"));
        assert_eq!(session.last_error(), Some("network unreachable"));
        assert!(session.active().is_none());

        let second = session.begin();
        assert!(session.last_error().is_none());
        assert!(!session.fail(first, "late failure"));
        assert!(session.complete(second, view("Recovered")));
        assert!(session.last_error().is_none());
    }
}
