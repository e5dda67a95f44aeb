//! Query dispatcher: validation, backend calls, and the busy-control guard.
//!
//! Every operation follows the same shape: validate input, mark the trigger
//! control busy, call the backend, shape the response into a view-model. The
//! busy state is a scoped acquisition — [`ControlPanel::begin`] disables the
//! control and swaps its label, and the returned guard restores it on every
//! exit path, success or failure. Distinct controls are independent: two
//! different buttons in flight at once are not coordinated.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::api::SymptomApi;
use crate::config;
use crate::error::CheckerError;
use crate::selection::SelectionStore;
use crate::view::{
    analysis_view, dropdown_options, related_view, selected_analysis_view, AnalysisView,
    DiseasePanel, DropdownView, RelatedView,
};

// Controls -------------------------------------------------------------------

/// The three request-triggering controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    FindRelated,
    AnalyzeText,
    AnalyzeSelected,
}

impl Control {
    pub fn idle_label(self) -> &'static str {
        match self {
            Control::FindRelated => "Find Related Symptoms",
            Control::AnalyzeText => "Analyze My Symptoms",
            Control::AnalyzeSelected => "Analyze Selected",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Control::FindRelated => "Finding...",
            Control::AnalyzeText | Control::AnalyzeSelected => "Analyzing...",
        }
    }
}

/// Observable state of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    Loading,
}

/// Tracks which controls are busy. Single-threaded interior mutability so a
/// held guard and state queries can coexist.
#[derive(Default)]
pub struct ControlPanel {
    busy: RefCell<HashSet<Control>>,
    history: RefCell<Vec<(Control, ControlState)>>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the control busy for the duration of the returned guard.
    pub fn begin(&self, control: Control) -> BusyGuard<'_> {
        self.busy.borrow_mut().insert(control);
        self.history
            .borrow_mut()
            .push((control, ControlState::Loading));
        BusyGuard {
            panel: self,
            control,
        }
    }

    pub fn state(&self, control: Control) -> ControlState {
        if self.busy.borrow().contains(&control) {
            ControlState::Loading
        } else {
            ControlState::Idle
        }
    }

    /// The label the control should currently display.
    pub fn label(&self, control: Control) -> &'static str {
        match self.state(control) {
            ControlState::Loading => control.busy_label(),
            ControlState::Idle => control.idle_label(),
        }
    }

    /// Every state transition so far, in order. Lets tests prove the
    /// Loading → Idle round trip happened on failure paths too.
    pub fn history(&self) -> Vec<(Control, ControlState)> {
        self.history.borrow().clone()
    }

    fn end(&self, control: Control) {
        self.busy.borrow_mut().remove(&control);
        self.history
            .borrow_mut()
            .push((control, ControlState::Idle));
    }
}

/// RAII busy token. Dropping it re-enables the control and restores its
/// idle label, no matter how the operation exited.
pub struct BusyGuard<'a> {
    panel: &'a ControlPanel,
    control: Control,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.panel.end(self.control);
    }
}

// Dispatcher -----------------------------------------------------------------

/// Issues backend requests and maps responses into view-models.
pub struct Dispatcher<'a> {
    api: &'a dyn SymptomApi,
    pub controls: ControlPanel,
}

impl<'a> Dispatcher<'a> {
    pub fn new(api: &'a dyn SymptomApi) -> Self {
        Self {
            api,
            controls: ControlPanel::new(),
        }
    }

    /// Populate the symptom dropdown. Never surfaces a blocking error: any
    /// failure — transport, status, or payload shape — falls back to the
    /// built-in sample list with a logged warning.
    pub fn load_symptoms(&self) -> DropdownView {
        match self.api.fetch_all_symptoms() {
            Ok(symptoms) => {
                tracing::info!(count = symptoms.len(), "symptom dropdown populated");
                dropdown_options(symptoms)
            }
            Err(err) => {
                tracing::warn!(%err, "all-symptoms fetch failed, using fallback symptoms");
                dropdown_options(
                    config::FALLBACK_SYMPTOMS
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                )
            }
        }
    }

    /// Fetch symptoms related to one selected symptom.
    pub fn find_related(&self, symptom: &str) -> Result<RelatedView, CheckerError> {
        if symptom.is_empty() {
            return Err(CheckerError::UserInput(
                "Please select a symptom first.".into(),
            ));
        }

        let _busy = self.controls.begin(Control::FindRelated);
        let result = self.api.fetch_related(symptom)?;
        Ok(related_view(result.as_ref()))
    }

    /// Analyze a free-text symptom description.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisView, CheckerError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CheckerError::UserInput(
                "Please describe your symptoms first.".into(),
            ));
        }

        let _busy = self.controls.begin(Control::AnalyzeText);
        let response = self.api.analyze_text(text)?;
        Ok(analysis_view(&response))
    }

    /// Analyze the current selection: members joined with `", "` in
    /// insertion order go through the same analyze endpoint.
    pub fn analyze_selected(
        &self,
        selection: &SelectionStore,
    ) -> Result<DiseasePanel, CheckerError> {
        if selection.is_empty() {
            return Err(CheckerError::UserInput(
                "Please select at least one symptom first.".into(),
            ));
        }

        let _busy = self.controls.begin(Control::AnalyzeSelected);
        let response = self.api.analyze_text(&selection.joined())?;
        Ok(selected_analysis_view(&response))
    }

    /// Backend liveness check.
    pub fn ping(&self) -> Result<String, CheckerError> {
        self.api.ping()
    }
}
