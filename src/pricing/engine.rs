use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::QuoteError;
use crate::pricing::calculator;
use crate::pricing::catalog::{self, CatalogKind};
use crate::pricing::models::{
    AcademicLevel, FieldOption, PriceBreakdown, ProjectType, Quote, Selection,
};

/// Holds the user's selections and derives the quotation from them
///
/// Every derived value is recomputed from the current [`Selection`] on read.
/// Subscribers obtained through [`PricingEngine::subscribe`] are notified
/// after a mutation whenever the resulting [`Quote`] differs from the last one.
///
/// The engine is not internally synchronized; share it behind a mutex if it
/// must be reached from more than one thread.
#[derive(Debug)]
pub struct PricingEngine {
    selection: Selection,
    quote_tx: watch::Sender<Quote>,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingEngine {
    /// Create an engine with the default selection (thesis, master, nothing chosen)
    pub fn new() -> Self {
        let selection = Selection::default();
        let (quote_tx, _) = watch::channel(derive_quote(&selection));
        Self {
            selection,
            quote_tx,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Receive the latest quote every time it changes
    pub fn subscribe(&self) -> watch::Receiver<Quote> {
        self.quote_tx.subscribe()
    }

    pub fn set_project_type(&mut self, project_type: ProjectType) {
        debug!(%project_type, "Setting project type");
        self.selection.project_type = project_type;
        self.publish();
    }

    /// Switch academic level and clear the field selection
    ///
    /// The field catalogs differ per level, so the previous key is dropped
    /// even when the level does not change.
    pub fn set_academic_level(&mut self, level: AcademicLevel) {
        debug!(%level, previous_field = %self.selection.field_key, "Setting academic level");
        self.selection.academic_level = level;
        self.selection.field_key.clear();
        self.publish();
    }

    /// Select a field of study by key
    ///
    /// Unknown keys are stored as given and resolve to a base price of zero.
    pub fn set_selected_field(&mut self, key: impl Into<String>) {
        self.selection.field_key = key.into();
        debug!(field = %self.selection.field_key, "Setting field");
        self.publish();
    }

    pub fn set_work_type_multiplier(&mut self, value: f64) {
        self.set_multiplier(CatalogKind::WorkType, value);
    }

    pub fn set_university_multiplier(&mut self, value: f64) {
        self.set_multiplier(CatalogKind::University, value);
    }

    pub fn set_time_multiplier(&mut self, value: f64) {
        self.set_multiplier(CatalogKind::DeliveryTime, value);
    }

    /// Set a multiplier without checking it against its catalog
    pub fn set_multiplier(&mut self, kind: CatalogKind, value: f64) {
        debug!(catalog = kind.name(), value, "Setting multiplier");
        *self.multiplier_mut(kind) = value;
        self.publish();
    }

    /// Select a field, rejecting keys the current level does not offer
    ///
    /// An empty key clears the selection and is always accepted.
    pub fn select_field(&mut self, key: &str) -> Result<(), QuoteError> {
        let level = self.selection.academic_level;
        if !key.is_empty() && catalog::find_field(level, key).is_none() {
            warn!(%level, key, "Rejected unknown field");
            return Err(QuoteError::UnknownField {
                level: level.to_string(),
                key: key.to_string(),
            });
        }
        self.set_selected_field(key);
        Ok(())
    }

    /// Set a multiplier, rejecting values its catalog does not offer
    ///
    /// Zero is the "unset" sentinel and is always accepted.
    pub fn select_multiplier(&mut self, kind: CatalogKind, value: f64) -> Result<(), QuoteError> {
        if value != 0.0 && !kind.contains(value) {
            warn!(catalog = kind.name(), value, "Rejected multiplier outside catalog");
            return Err(QuoteError::NotInCatalog {
                catalog: kind.name(),
                value,
            });
        }
        self.set_multiplier(kind, value);
        Ok(())
    }

    pub fn select_work_type(&mut self, value: f64) -> Result<(), QuoteError> {
        self.select_multiplier(CatalogKind::WorkType, value)
    }

    pub fn select_university(&mut self, value: f64) -> Result<(), QuoteError> {
        self.select_multiplier(CatalogKind::University, value)
    }

    pub fn select_delivery_time(&mut self, value: f64) -> Result<(), QuoteError> {
        self.select_multiplier(CatalogKind::DeliveryTime, value)
    }

    /// Restore the construction-time defaults
    pub fn reset(&mut self) {
        debug!("Resetting selection");
        self.selection = Selection::default();
        self.publish();
    }

    /// Field catalog for the current academic level
    pub fn current_fields(&self) -> &'static [FieldOption] {
        catalog::fields_for(self.selection.academic_level)
    }

    /// Base price of the selected field, zero if none or unknown
    pub fn base_price(&self) -> u64 {
        base_price_of(&self.selection)
    }

    pub fn project_type_multiplier(&self) -> f64 {
        self.selection.project_type.multiplier()
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        breakdown_of(&self.selection)
    }

    pub fn thesis_price(&self) -> f64 {
        self.breakdown().thesis_price
    }

    pub fn final_price(&self) -> f64 {
        self.breakdown().final_price
    }

    pub fn quote(&self) -> Quote {
        derive_quote(&self.selection)
    }

    fn multiplier_mut(&mut self, kind: CatalogKind) -> &mut f64 {
        match kind {
            CatalogKind::WorkType => &mut self.selection.work_type_multiplier,
            CatalogKind::University => &mut self.selection.university_multiplier,
            CatalogKind::DeliveryTime => &mut self.selection.time_multiplier,
        }
    }

    fn publish(&self) {
        let quote = self.quote();
        let changed = self.quote_tx.send_if_modified(|current| {
            if *current == quote {
                false
            } else {
                *current = quote;
                true
            }
        });
        if changed {
            debug!(final_price = self.final_price(), "Quote updated");
        }
    }
}

fn base_price_of(selection: &Selection) -> u64 {
    catalog::find_field(selection.academic_level, &selection.field_key)
        .map(|field| field.value)
        .unwrap_or(0)
}

fn breakdown_of(selection: &Selection) -> PriceBreakdown {
    calculator::calculate(
        base_price_of(selection),
        selection.work_type_multiplier,
        selection.university_multiplier,
        selection.time_multiplier,
        selection.project_type.multiplier(),
    )
}

fn derive_quote(selection: &Selection) -> Quote {
    let breakdown = breakdown_of(selection);
    let base_price = base_price_of(selection);
    let is_complete = base_price != 0
        && selection.work_type_multiplier != 0.0
        && selection.university_multiplier != 0.0
        && selection.time_multiplier != 0.0
        && breakdown.final_price.is_finite();
    Quote {
        selection: selection.clone(),
        base_price,
        project_type_multiplier: selection.project_type.multiplier(),
        thesis_price: breakdown.thesis_price,
        final_price: breakdown.final_price,
        is_complete,
    }
}
