use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::progress::{ProgressDraft, ProgressEntry, ProgressSnapshot};

/// Storage seam for progress history. Implement this to swap in a durable
/// backend without touching handlers.
///
/// Carried in `AppState` as `Arc<dyn ProgressStore>`.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Resolves the draft's week against the current history and appends it,
    /// as one step.
    async fn append(&self, draft: ProgressDraft) -> ProgressSnapshot;

    /// Full history in insertion order.
    async fn list(&self) -> Vec<ProgressEntry>;
}

/// Process-lifetime history. Lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryProgressStore {
    history: Mutex<Vec<ProgressEntry>>,
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn append(&self, draft: ProgressDraft) -> ProgressSnapshot {
        let mut history = self.history.lock().await;
        let latest = draft.resolve(history.len());
        history.push(latest.clone());
        ProgressSnapshot {
            latest,
            history: history.clone(),
        }
    }

    async fn list(&self) -> Vec<ProgressEntry> {
        self.history.lock().await.clone()
    }
}
