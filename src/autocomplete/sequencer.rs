use crate::autocomplete::response::lock_to_query_type;
use crate::autocomplete::traits::AutocompleteSource;
use crate::models::AutocompleteResults;
use crate::search::{
    build_autocomplete_request, AutocompleteRequest, SearchCriteria, MIN_QUERY_LENGTH,
};
use chrono::Utc;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Identifies one issued request. Only the newest token may deliver results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone)]
pub enum AutocompleteOutcome {
    Suggestions(AutocompleteResults),
    /// Term below [`MIN_QUERY_LENGTH`]; nothing was sent
    TooShort,
    /// A newer request was issued (or the form was left) before this one answered
    Superseded,
    /// The lookup failed. Shown as a notice; the form stays submittable.
    Unavailable(String),
}

impl AutocompleteOutcome {
    /// Offer only what the search box accepts right now. Call this with the
    /// live criteria once the response is in: a selection made while the
    /// lookup was in flight may have locked the query type.
    pub fn locked_to(self, criteria: &SearchCriteria) -> Self {
        match self {
            Self::Suggestions(mut results) => {
                results.groups = lock_to_query_type(results.groups, criteria.query_type());
                Self::Suggestions(results)
            }
            other => other,
        }
    }
}

/// A request prepared against the criteria as they were when the user typed
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub request: AutocompleteRequest,
}

/// Runs autocomplete lookups for one search form, last request wins.
pub struct AutocompleteController<S> {
    source: S,
    latest: AtomicU64,
}

impl<S: AutocompleteSource> AutocompleteController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            latest: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot the request for `term` and take a fresh token.
    /// `None` when the term is too short to look up.
    pub fn prepare(&self, criteria: &SearchCriteria, term: &str) -> Option<PendingRequest> {
        let term = term.trim();
        if term.chars().count() < MIN_QUERY_LENGTH {
            return None;
        }

        let token = RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        Some(PendingRequest {
            token,
            request: build_autocomplete_request(criteria, term),
        })
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Supersede everything in flight, e.g. on navigation or resubmission
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub async fn run(&self, pending: PendingRequest) -> AutocompleteOutcome {
        let result = self.source.autocomplete(&pending.request).await;

        if !self.is_current(pending.token) {
            debug!(
                token = pending.token.0,
                query = %pending.request.query,
                "discarding stale suggestions"
            );
            return AutocompleteOutcome::Superseded;
        }

        match result {
            Ok(groups) => AutocompleteOutcome::Suggestions(AutocompleteResults {
                term: pending.request.query,
                groups,
                fetched_at: Utc::now(),
            }),
            Err(err) => {
                warn!("{} lookup failed: {}", self.source.source_name(), err);
                AutocompleteOutcome::Unavailable(format!(
                    "Suggestions are unavailable right now ({})",
                    err
                ))
            }
        }
    }

    /// Look up `term`. The request is taken from `criteria` before returning,
    /// so the criteria may change while the lookup is in flight. Results come
    /// back unfiltered; see [`AutocompleteOutcome::locked_to`].
    pub fn suggest(
        &self,
        criteria: &SearchCriteria,
        term: &str,
    ) -> impl Future<Output = AutocompleteOutcome> + Send + '_ {
        let pending = self.prepare(criteria, term);
        async move {
            match pending {
                Some(pending) => self.run(pending).await,
                None => AutocompleteOutcome::TooShort,
            }
        }
    }
}
