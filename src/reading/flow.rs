use super::{ReadingResult, ReadingService};
use crate::catalog::BottleRecord;
use crate::llm::TextGenerator;
use crate::selection::{SelectionState, Slot};

/// The guided-reading controller: a selection plus the reading produced
/// for it.
///
/// A reading belongs to the exact selection it was requested for, so any
/// change to the selection drops it.
#[derive(Debug, Default)]
pub struct ReadingFlow<'a> {
    selection: SelectionState<'a>,
    result: Option<ReadingResult>,
}

impl<'a> ReadingFlow<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionState<'a> {
        &self.selection
    }

    pub fn result(&self) -> Option<&ReadingResult> {
        self.result.as_ref()
    }

    pub fn pick(&mut self, bottle: &'a BottleRecord) -> Slot {
        self.result = None;
        self.selection.pick(bottle)
    }

    pub fn clear_slot(&mut self, slot: Slot) {
        self.result = None;
        self.selection.clear_slot(slot);
    }

    pub fn focus(&mut self, slot: Slot) {
        self.selection.focus(slot);
    }

    /// Back to four empty slots; any reading is discarded.
    pub fn reset(&mut self) {
        self.selection.reset();
        self.result = None;
    }

    pub fn can_request(&self) -> bool {
        self.selection.is_complete()
    }

    /// Request the reading if all four slots are filled.
    ///
    /// Returns `None` without calling the service when the selection is
    /// incomplete.
    pub async fn request<G: TextGenerator>(
        &mut self,
        service: &ReadingService<G>,
    ) -> Option<&ReadingResult> {
        if !self.can_request() {
            tracing::debug!(
                filled = self.selection.filled_count(),
                "reading requested before selection was complete"
            );
            return None;
        }

        let reading = service.request_reading(&self.selection).await;
        Some(&*self.result.insert(reading))
    }
}
