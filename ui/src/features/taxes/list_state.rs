// Tax rate list state - no dioxus imports needed here
use tracing::debug;

use super::types::*;

/// Page size of the tax rate settings list
pub const TAX_RATES_PAGE_SIZE: u32 = 20;

/// Placeholder rows shown after the real rows while a page is appending
pub const SKELETON_ROW_COUNT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QueryKind {
    Initial,
    Append,
}

/// A `taxRates` query the list wants issued
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TaxRatesQuery {
    pub limit: u32,
    /// `None` lets the API default to the first page
    pub page: Option<u32>,
    pub kind: QueryKind,
    /// Load session the query belongs to; responses from older sessions are dropped
    pub generation: u64,
}

/// What the list region renders
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListRegion {
    Loading,
    Error,
    Empty,
    Populated { appending: bool },
}

/// Transient notifications raised outside the list region
#[derive(Clone, PartialEq, Debug)]
pub enum ListNotification {
    LoadMoreFailed { message: String },
}

impl ListNotification {
    pub fn translation_key(&self) -> &'static str {
        match self {
            ListNotification::LoadMoreFailed { .. } => "taxes.notifications.load_more_failed",
        }
    }
}

/// Row selected in the delete confirmation dialog
#[derive(Clone, PartialEq, Debug)]
pub struct PendingDeletion {
    pub id: TaxRateId,
    pub is_deleting: bool,
    pub error: Option<String>,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum TaxRateListAction {
    PageLoaded {
        query: TaxRatesQuery,
        result: Result<TaxRatesPage, String>,
    },
    RequestDeletion(TaxRateId),
    CancelDeletion,
    DeletionSucceeded(TaxRateId),
    DeletionFailed { id: TaxRateId, message: String },
    /// Dismiss the notification raised with this sequence number
    DismissNotification(u64),
}

#[derive(Clone, PartialEq, Debug)]
pub struct TaxRateListState {
    pub collection: Vec<TaxRate>,
    pub metadata: PaginationMetadata,
    /// Initial load failure, only set when no data was received
    pub error: Option<String>,
    pub selected_for_deletion: Option<PendingDeletion>,
    pub notification: Option<ListNotification>,
    page_size: u32,
    in_flight: Option<QueryKind>,
    has_loaded: bool,
    generation: u64,
    notification_seq: u64,
}

impl Default for TaxRateListState {
    fn default() -> Self {
        Self::new(TAX_RATES_PAGE_SIZE)
    }
}

impl TaxRateListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            collection: Vec::new(),
            metadata: PaginationMetadata::default(),
            error: None,
            selected_for_deletion: None,
            notification: None,
            page_size: page_size.max(1),
            in_flight: None,
            has_loaded: false,
            generation: 0,
            notification_seq: 0,
        }
    }

    pub fn region(&self) -> ListRegion {
        if self.error.is_some() {
            ListRegion::Error
        } else if !self.has_loaded {
            ListRegion::Loading
        } else if self.collection.is_empty() {
            ListRegion::Empty
        } else {
            ListRegion::Populated {
                appending: self.in_flight == Some(QueryKind::Append),
            }
        }
    }

    pub fn is_loading_initial(&self) -> bool {
        self.in_flight == Some(QueryKind::Initial)
    }

    pub fn is_appending(&self) -> bool {
        self.in_flight == Some(QueryKind::Append)
    }

    /// Sequence number of the current notification, bumped every time one is raised
    pub fn notification_seq(&self) -> u64 {
        self.notification_seq
    }

    fn is_deleting(&self) -> bool {
        self.selected_for_deletion
            .as_ref()
            .is_some_and(|pending| pending.is_deleting)
    }

    /// Start (or restart) from the first page, discarding everything loaded so far
    pub fn request_initial_page(&mut self) -> TaxRatesQuery {
        self.generation += 1;
        self.collection.clear();
        self.metadata = PaginationMetadata::default();
        self.error = None;
        self.selected_for_deletion = None;
        self.has_loaded = false;
        self.in_flight = Some(QueryKind::Initial);

        TaxRatesQuery {
            limit: self.page_size,
            page: None,
            kind: QueryKind::Initial,
            generation: self.generation,
        }
    }

    /// Called when the scroll region reaches its bottom.
    ///
    /// Returns the query for the next page, or `None` when a fetch is already
    /// in flight or the last page has been received.
    pub fn request_next_page(&mut self) -> Option<TaxRatesQuery> {
        if !self.has_loaded || self.error.is_some() || self.in_flight.is_some() {
            return None;
        }
        if !self.metadata.has_next_page() {
            return None;
        }

        self.in_flight = Some(QueryKind::Append);
        Some(TaxRatesQuery {
            limit: self.page_size,
            page: Some(self.metadata.current_page + 1),
            kind: QueryKind::Append,
            generation: self.generation,
        })
    }

    /// Confirm the dialog; returns the identifier to delete unless a deletion is already running
    pub fn confirm_deletion(&mut self) -> Option<TaxRateId> {
        let pending = self.selected_for_deletion.as_mut()?;
        if pending.is_deleting {
            return None;
        }
        pending.is_deleting = true;
        pending.error = None;
        Some(pending.id.clone())
    }

    pub fn reduce_in_place(&mut self, action: TaxRateListAction) {
        match action {
            TaxRateListAction::PageLoaded { query, result } => self.apply_page(query, result),
            TaxRateListAction::RequestDeletion(id) => {
                if self.is_deleting() {
                    return;
                }
                if self.collection.iter().any(|tax_rate| tax_rate.id == id) {
                    self.selected_for_deletion = Some(PendingDeletion {
                        id,
                        is_deleting: false,
                        error: None,
                    });
                }
            }
            TaxRateListAction::CancelDeletion => {
                if !self.is_deleting() {
                    self.selected_for_deletion = None;
                }
            }
            TaxRateListAction::DeletionSucceeded(id) => {
                if let Some(index) = self.collection.iter().position(|tax_rate| tax_rate.id == id) {
                    self.collection.remove(index);
                }
                if self
                    .selected_for_deletion
                    .as_ref()
                    .is_some_and(|pending| pending.id == id)
                {
                    self.selected_for_deletion = None;
                }
            }
            TaxRateListAction::DeletionFailed { id, message } => {
                match self.selected_for_deletion.as_mut() {
                    Some(pending) if pending.id == id => {
                        pending.is_deleting = false;
                        pending.error = Some(message);
                    }
                    _ => debug!("Ignoring deletion failure for closed dialog of {}", id),
                }
            }
            TaxRateListAction::DismissNotification(seq) => {
                if seq == self.notification_seq {
                    self.notification = None;
                }
            }
        }
    }

    fn apply_page(&mut self, query: TaxRatesQuery, result: Result<TaxRatesPage, String>) {
        if query.generation != self.generation || self.in_flight != Some(query.kind) {
            debug!(
                "Dropping stale tax rates response (generation {}, current {})",
                query.generation, self.generation
            );
            return;
        }
        self.in_flight = None;

        match (query.kind, result) {
            (QueryKind::Initial, Ok(page)) => {
                self.has_loaded = true;
                self.metadata = page.metadata;
                self.collection.clear();
                self.append_unique(page.collection);
            }
            (QueryKind::Initial, Err(message)) => {
                self.error = Some(message);
            }
            (QueryKind::Append, Ok(page)) => {
                self.metadata.current_page =
                    self.metadata.current_page.max(page.metadata.current_page);
                self.metadata.total_pages = page.metadata.total_pages;
                self.append_unique(page.collection);
            }
            (QueryKind::Append, Err(message)) => {
                self.notification_seq += 1;
                self.notification = Some(ListNotification::LoadMoreFailed { message });
            }
        }
    }

    fn append_unique(&mut self, tax_rates: Vec<TaxRate>) {
        for tax_rate in tax_rates {
            if !self.collection.iter().any(|existing| existing.id == tax_rate.id) {
                self.collection.push(tax_rate);
            }
        }
    }
}
