//! Interview Persistence
//!
//! Draft, result, and summary records as user-scoped JSON blobs, built on
//! the `user-storage` wrapper. Read failures degrade to "treat as absent"
//! and are logged; write failures are returned so the UI can show a save
//! status. One storage instance is bound to one user id for its lifetime.

use std::fmt;

use crate::logging;
use crate::models::{Candidate, DraftRecord, FormRecord, LegacySummary, ResultRecord, ResultSummary};
use crate::services::ServiceKind;
use user_storage::{KeyValueStore, StoreError, StoreResult, UserStore};

/// Company-diagnosis draft keys read for the brand-name carryover,
/// checked in order (newer scheme first)
pub const DIAGNOSIS_DRAFT_KEYS: [&str; 2] = ["diagnosisInterviewDraft_v1", "diagnosisDraft"];

/// Backend the running app persists to: browser local storage on wasm,
/// an in-memory map elsewhere (native test builds)
#[cfg(target_arch = "wasm32")]
pub type AppBackend = user_storage::LocalStore;
#[cfg(not(target_arch = "wasm32"))]
pub type AppBackend = user_storage::MemoryStore;

pub type AppStorage = InterviewStorage<AppBackend>;

pub fn app_storage(user_id: impl Into<String>) -> AppStorage {
    InterviewStorage::new(AppBackend::default(), user_id)
}

pub fn draft_key(kind: ServiceKind) -> String {
    format!("promoInterviewDraft_{}_v1", kind.as_str())
}

pub fn result_key(kind: ServiceKind) -> String {
    format!("promoInterviewResult_{}_v1", kind.as_str())
}

fn legacy_key(kind: ServiceKind) -> &'static str {
    kind.descriptor().legacy_key
}

/// Current wall clock in epoch milliseconds
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Why a result submission did not happen
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// No candidate is selected; nothing was written
    NothingSelected,
    /// The result could not be persisted
    Store(StoreError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NothingSelected => write!(f, "no candidate selected"),
            SubmitError::Store(e) => write!(f, "save failed: {}", e),
        }
    }
}

/// All interview reads and writes for one user
#[derive(Clone)]
pub struct InterviewStorage<S> {
    store: UserStore<S>,
}

impl<S: KeyValueStore> InterviewStorage<S> {
    pub fn new(backend: S, user_id: impl Into<String>) -> Self {
        Self {
            store: UserStore::new(backend, user_id),
        }
    }

    pub fn user_id(&self) -> &str {
        self.store.user_id()
    }

    /// Load the in-progress draft; any failure reads as "no draft yet"
    pub fn load_draft(&self, kind: ServiceKind) -> Option<DraftRecord> {
        match self.store.get_json(&draft_key(kind)) {
            Ok(draft) => draft,
            Err(e) => {
                logging::warn(&format!(
                    "[STORE] draft load failed for {}: {}",
                    kind.as_str(),
                    e
                ));
                None
            }
        }
    }

    /// Overwrite the draft record for `kind`
    pub fn save_draft(&self, kind: ServiceKind, draft: &DraftRecord) -> StoreResult<()> {
        self.store.set_json(&draft_key(kind), draft)
    }

    pub fn load_result(&self, kind: ServiceKind) -> Option<ResultRecord> {
        match self.store.get_json(&result_key(kind)) {
            Ok(result) => result,
            Err(e) => {
                logging::warn(&format!(
                    "[STORE] result load failed for {}: {}",
                    kind.as_str(),
                    e
                ));
                None
            }
        }
    }

    /// Validate the selection and persist the finalized result.
    ///
    /// With a blank `selected_id` this is a pure rejection: nothing is
    /// written. Otherwise exactly one result record and one summary record
    /// are written, and the pre-namespacing keys are cleaned up.
    pub fn submit_result(
        &self,
        kind: ServiceKind,
        form: &FormRecord,
        candidates: &[Candidate],
        selected_id: &str,
        now_ms: u64,
    ) -> Result<ResultRecord, SubmitError> {
        let selected_id = selected_id.trim();
        if selected_id.is_empty() {
            return Err(SubmitError::NothingSelected);
        }
        let selected = candidates.iter().find(|c| c.id == selected_id).cloned();
        let record = ResultRecord {
            form: form.clone(),
            candidates: candidates.to_vec(),
            selected_id: selected_id.to_string(),
            updated_at: now_ms,
            selected,
        };
        self.save_result(kind, &record).map_err(SubmitError::Store)?;
        Ok(record)
    }

    /// Write the result record plus the summary record the badges read
    pub fn save_result(&self, kind: ServiceKind, record: &ResultRecord) -> StoreResult<()> {
        self.store.set_json(&result_key(kind), record)?;
        self.store
            .set_json(legacy_key(kind), &legacy_summary_of(kind, record))?;
        self.cleanup_unscoped_keys(kind)?;
        Ok(())
    }

    pub fn load_legacy_summary(&self, kind: ServiceKind) -> Option<LegacySummary> {
        match self.store.get_json(legacy_key(kind)) {
            Ok(summary) => summary,
            Err(e) => {
                logging::warn(&format!(
                    "[STORE] summary load failed for {}: {}",
                    kind.as_str(),
                    e
                ));
                None
            }
        }
    }

    /// Completion badge: a summary exists and something was selected
    pub fn service_complete(&self, kind: ServiceKind) -> bool {
        self.load_legacy_summary(kind)
            .map(|s| !s.selected_id.trim().is_empty() || s.selected.is_some())
            .unwrap_or(false)
    }

    /// Per-service completion, panel display order
    pub fn completion(&self) -> Vec<(ServiceKind, bool)> {
        ServiceKind::ALL
            .into_iter()
            .map(|kind| (kind, self.service_complete(kind)))
            .collect()
    }

    /// Remove every record for `kind` (home-page reset action)
    pub fn reset_service(&self, kind: ServiceKind) -> StoreResult<()> {
        self.store.remove(&draft_key(kind))?;
        self.store.remove(&result_key(kind))?;
        self.store.remove(legacy_key(kind))?;
        self.cleanup_unscoped_keys(kind)
    }

    /// Remove leftovers from the scheme that predates user-id suffixes
    fn cleanup_unscoped_keys(&self, kind: ServiceKind) -> StoreResult<()> {
        self.store.remove_legacy(&draft_key(kind))?;
        self.store.remove_legacy(&result_key(kind))?;
        self.store.remove_legacy(legacy_key(kind))
    }

    /// One-shot read of the company-diagnosis draft for a brand name to
    /// pre-fill the interview form. Best-effort: any failure is `None`.
    pub fn carryover_brand_name(&self) -> Option<String> {
        for key in DIAGNOSIS_DRAFT_KEYS {
            match self.store.get_json::<serde_json::Value>(key) {
                Ok(Some(value)) => {
                    if let Some(name) = diagnosis_brand_name(&value) {
                        return Some(name);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    logging::warn(&format!("[STORE] diagnosis read failed for {}: {}", key, e));
                }
            }
        }
        None
    }
}

/// Pull a usable brand name out of a diagnosis draft blob. The diagnosis
/// page owns that record's shape, so this stays tolerant: either nesting,
/// either field name.
fn diagnosis_brand_name(value: &serde_json::Value) -> Option<String> {
    let spots = [
        &value["form"]["companyName"],
        &value["form"]["brandName"],
        &value["companyName"],
        &value["brandName"],
    ];
    for spot in spots {
        if let Some(s) = spot.as_str() {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

fn legacy_summary_of(kind: ServiceKind, record: &ResultRecord) -> LegacySummary {
    let title = record
        .selected
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Selected proposal".to_string());
    let product = record.form.trimmed("productName");
    let subtitle = if product.is_empty() {
        kind.label().to_string()
    } else {
        format!("{} · {}", kind.label(), product)
    };
    LegacySummary {
        updated_at: record.updated_at,
        selected_id: record.selected_id.clone(),
        selected: record.selected.clone(),
        summary: ResultSummary { title, subtitle },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::make_candidates;
    use crate::schema::ServiceSchema;
    use user_storage::MemoryStore;

    fn poster_form() -> FormRecord {
        let mut form = FormRecord::new();
        form.set("productName", "Tumbler".to_string());
        form.set("targetPlatform", "Instagram".to_string());
        form.set("targetCustomer", "20s office workers".to_string());
        form.set("tone", "minimal".to_string());
        form.set("keyMessage", "Keeps drinks cold for 12h".to_string());
        form.set("goal", "increase CTR".to_string());
        form
    }

    fn poster_candidates(form: &FormRecord) -> Vec<Candidate> {
        make_candidates(ServiceSchema::for_kind(ServiceKind::Poster), form)
    }

    #[test]
    fn test_draft_round_trip() {
        let storage = InterviewStorage::new(MemoryStore::new(), "u1");
        let form = poster_form();
        let draft = DraftRecord {
            candidates: poster_candidates(&form),
            form,
            selected_id: "B".to_string(),
            updated_at: 1234,
        };
        storage.save_draft(ServiceKind::Poster, &draft).unwrap();
        assert_eq!(storage.load_draft(ServiceKind::Poster), Some(draft));
    }

    #[test]
    fn test_load_draft_treats_corrupt_as_absent() {
        let backend = MemoryStore::new();
        backend
            .set_raw("promoInterviewDraft_poster_v1__uid__u1", "{broken")
            .unwrap();
        let storage = InterviewStorage::new(&backend, "u1");
        assert_eq!(storage.load_draft(ServiceKind::Poster), None);
    }

    #[test]
    fn test_drafts_are_user_scoped() {
        let backend = MemoryStore::new();
        let draft = DraftRecord {
            form: poster_form(),
            candidates: vec![],
            selected_id: String::new(),
            updated_at: 1,
        };
        InterviewStorage::new(&backend, "alice")
            .save_draft(ServiceKind::Poster, &draft)
            .unwrap();
        assert_eq!(
            InterviewStorage::new(&backend, "bob").load_draft(ServiceKind::Poster),
            None
        );
    }

    #[test]
    fn test_submit_with_blank_selection_writes_nothing() {
        let backend = MemoryStore::new();
        let storage = InterviewStorage::new(&backend, "u1");
        let form = poster_form();
        let candidates = poster_candidates(&form);

        let err = storage
            .submit_result(ServiceKind::Poster, &form, &candidates, "  ", 99)
            .unwrap_err();
        assert_eq!(err, SubmitError::NothingSelected);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_submit_writes_result_and_summary() {
        let backend = MemoryStore::new();
        let storage = InterviewStorage::new(&backend, "u1");
        let form = poster_form();
        let candidates = poster_candidates(&form);

        let record = storage
            .submit_result(ServiceKind::Poster, &form, &candidates, "B", 777)
            .unwrap();
        assert_eq!(record.selected.as_ref().map(|c| c.id.as_str()), Some("B"));
        assert_eq!(record.updated_at, 777);

        // exactly one result record and one summary record
        assert_eq!(backend.len(), 2);
        assert!(backend
            .get_raw("promoInterviewResult_poster_v1__uid__u1")
            .unwrap()
            .is_some());
        assert!(backend.get_raw("promo_poster_v1__uid__u1").unwrap().is_some());

        let summary = storage.load_legacy_summary(ServiceKind::Poster).unwrap();
        assert_eq!(summary.selected_id, "B");
        assert_eq!(summary.summary.title, record.selected.unwrap().name);
        assert!(summary.summary.subtitle.contains("Tumbler"));
    }

    #[test]
    fn test_submit_cleans_up_unscoped_keys() {
        let backend = MemoryStore::new();
        backend.set_raw("promo_poster_v1", "old summary").unwrap();
        backend
            .set_raw("promoInterviewDraft_poster_v1", "old draft")
            .unwrap();
        let storage = InterviewStorage::new(&backend, "u1");
        let form = poster_form();
        let candidates = poster_candidates(&form);

        storage
            .submit_result(ServiceKind::Poster, &form, &candidates, "A", 1)
            .unwrap();
        assert_eq!(backend.get_raw("promo_poster_v1").unwrap(), None);
        assert_eq!(backend.get_raw("promoInterviewDraft_poster_v1").unwrap(), None);
    }

    #[test]
    fn test_unknown_selected_id_still_persists_without_selected() {
        let storage = InterviewStorage::new(MemoryStore::new(), "u1");
        let form = poster_form();
        let candidates = poster_candidates(&form);

        let record = storage
            .submit_result(ServiceKind::Poster, &form, &candidates, "Z", 5)
            .unwrap();
        assert_eq!(record.selected, None);
        let summary = storage.load_legacy_summary(ServiceKind::Poster).unwrap();
        assert_eq!(summary.summary.title, "Selected proposal");
    }

    #[test]
    fn test_completion_badges() {
        let storage = InterviewStorage::new(MemoryStore::new(), "u1");
        assert!(!storage.service_complete(ServiceKind::Poster));

        let form = poster_form();
        let candidates = poster_candidates(&form);
        storage
            .submit_result(ServiceKind::Poster, &form, &candidates, "A", 1)
            .unwrap();

        assert!(storage.service_complete(ServiceKind::Poster));
        let completion = storage.completion();
        assert_eq!(completion.len(), 4);
        for (kind, complete) in completion {
            assert_eq!(complete, kind == ServiceKind::Poster);
        }
    }

    #[test]
    fn test_reset_service_removes_every_record() {
        let backend = MemoryStore::new();
        let storage = InterviewStorage::new(&backend, "u1");
        let form = poster_form();
        let candidates = poster_candidates(&form);

        let draft = DraftRecord {
            form: form.clone(),
            candidates: candidates.clone(),
            selected_id: "A".to_string(),
            updated_at: 1,
        };
        storage.save_draft(ServiceKind::Poster, &draft).unwrap();
        storage
            .submit_result(ServiceKind::Poster, &form, &candidates, "A", 2)
            .unwrap();

        storage.reset_service(ServiceKind::Poster).unwrap();
        assert!(backend.is_empty());
        assert!(!storage.service_complete(ServiceKind::Poster));
    }

    #[test]
    fn test_carryover_prefers_company_name() {
        let backend = MemoryStore::new();
        backend
            .set_raw(
                "diagnosisInterviewDraft_v1__uid__u1",
                r#"{"form":{"companyName":"  Mellow Lab  ","brandName":"Other"}}"#,
            )
            .unwrap();
        let storage = InterviewStorage::new(&backend, "u1");
        assert_eq!(storage.carryover_brand_name().as_deref(), Some("Mellow Lab"));
    }

    #[test]
    fn test_carryover_falls_through_key_family() {
        let backend = MemoryStore::new();
        backend
            .set_raw(
                "diagnosisDraft__uid__u1",
                r#"{"brandName":"Fallback Brand"}"#,
            )
            .unwrap();
        let storage = InterviewStorage::new(&backend, "u1");
        assert_eq!(
            storage.carryover_brand_name().as_deref(),
            Some("Fallback Brand")
        );
    }

    #[test]
    fn test_carryover_absent_is_none() {
        let storage = InterviewStorage::new(MemoryStore::new(), "u1");
        assert_eq!(storage.carryover_brand_name(), None);
    }
}
