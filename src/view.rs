//! Pure view-model shaping: JSON payloads in, declarative render data out.
//!
//! Nothing here touches the network or the UI chrome. The chrome consumes
//! these structures and owns element construction; every decision the chrome
//! would otherwise make inline (sorting, normalizing, placeholder selection,
//! visibility) is made here so it stays unit-testable.

use std::collections::HashMap;

use crate::models::{AnalysisResponse, RelatedSymptoms};

// Placeholder texts ----------------------------------------------------------

pub const NO_COOCCURRENCE: &str = "No co-occurring symptoms found.";
pub const NO_SEMANTIC: &str = "No semantically similar symptoms found.";
pub const NO_RELATED: &str = "No related symptoms found.";
pub const NO_EXTRACTED: &str = "No symptoms could be identified in your description.";
pub const NO_CONDITIONS: &str = "No associated conditions found.";
pub const NO_SELECTED: &str = "No symptoms selected yet.";

// Badges ---------------------------------------------------------------------

/// Visual class of a symptom badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Related,
    Extracted,
    Selected,
}

/// One clickable symptom token. Clicking any badge toggles that symptom in
/// the selection store — the only write path into the store from rendered
/// content. Selected badges additionally carry a remove affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub symptom: String,
    pub kind: BadgeKind,
    pub tooltip: Option<String>,
    pub removable: bool,
}

impl Badge {
    fn new(symptom: &str, kind: BadgeKind, tooltip: Option<String>) -> Self {
        Self {
            symptom: symptom.to_string(),
            kind,
            tooltip,
            removable: kind == BadgeKind::Selected,
        }
    }

    pub fn related(symptom: &str) -> Self {
        Self::new(symptom, BadgeKind::Related, Some("related".to_string()))
    }

    pub fn semantic(symptom: &str, score: f64) -> Self {
        let tooltip = format!("Similarity: {}%", percent(score));
        Self::new(symptom, BadgeKind::Related, Some(tooltip))
    }

    pub fn extracted(symptom: &str, confidence: f64) -> Self {
        let tooltip = format!("Confidence: {}%", percent(confidence));
        Self::new(symptom, BadgeKind::Extracted, Some(tooltip))
    }

    pub fn selected(symptom: &str) -> Self {
        Self::new(symptom, BadgeKind::Selected, None)
    }
}

/// Round a [0,1] score to a whole percentage, matching `toFixed(0)`.
fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// A badge row with its own empty-state placeholder. The placeholder is
/// populated exactly when the row has no badges.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeSection {
    pub badges: Vec<Badge>,
    pub placeholder: Option<&'static str>,
}

impl BadgeSection {
    fn of(badges: Vec<Badge>, empty_text: &'static str) -> Self {
        let placeholder = badges.is_empty().then_some(empty_text);
        Self { badges, placeholder }
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

// Related symptoms -----------------------------------------------------------

/// Render data for the related-symptoms result area.
#[derive(Debug, Clone, PartialEq)]
pub enum RelatedView {
    /// Backend knew nothing about the query: hide the results container and
    /// show a single standalone placeholder.
    Nothing { placeholder: &'static str },
    /// Two badge rows, each with its own empty-state text.
    Sections {
        cooccurring: BadgeSection,
        semantic: BadgeSection,
    },
}

/// Shape a related-symptoms response (possibly `null`) into render data.
pub fn related_view(result: Option<&RelatedSymptoms>) -> RelatedView {
    let Some(result) = result else {
        return RelatedView::Nothing {
            placeholder: NO_RELATED,
        };
    };

    let cooccurring = result
        .cooccurence_related
        .iter()
        .map(|s| Badge::related(s))
        .collect();
    let semantic = result
        .semantic_related
        .iter()
        .map(|m| Badge::semantic(&m.symptom, m.score))
        .collect();

    RelatedView::Sections {
        cooccurring: BadgeSection::of(cooccurring, NO_COOCCURRENCE),
        semantic: BadgeSection::of(semantic, NO_SEMANTIC),
    }
}

// Disease scores -------------------------------------------------------------

/// One labeled horizontal score bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub disease: String,
    /// Raw score formatted to one decimal place.
    pub display_score: String,
    /// Filled width in percent of the widest bar, in [0,100].
    pub width_pct: f64,
}

/// Disease panel: either score bars or the static no-conditions message.
#[derive(Debug, Clone, PartialEq)]
pub enum DiseasePanel {
    Bars(Vec<ScoreBar>),
    Placeholder(&'static str),
}

/// Sort disease scores descending and normalize widths against the maximum.
///
/// Tie order between equal scores is unspecified. An all-zero map yields
/// zero-width bars rather than dividing by zero. An empty map yields no bars;
/// callers wanting the placeholder go through [`disease_panel`].
pub fn score_bars(scores: &HashMap<String, f64>) -> Vec<ScoreBar> {
    let mut entries: Vec<(&str, f64)> = scores.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let Some(&(_, max_score)) = entries.first() else {
        return Vec::new();
    };

    entries
        .into_iter()
        .map(|(disease, score)| ScoreBar {
            disease: disease.to_string(),
            display_score: format!("{score:.1}"),
            width_pct: if max_score > 0.0 {
                score / max_score * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Panel for a possibly-empty disease score map.
pub fn disease_panel(scores: &HashMap<String, f64>) -> DiseasePanel {
    if scores.is_empty() {
        DiseasePanel::Placeholder(NO_CONDITIONS)
    } else {
        DiseasePanel::Bars(score_bars(scores))
    }
}

// Text analysis --------------------------------------------------------------

/// Render data for the text-analysis result area.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub extracted: BadgeSection,
    pub diseases: DiseasePanel,
    /// False when nothing was extracted: the results container hides and the
    /// extracted section's placeholder stands alone.
    pub container_visible: bool,
}

/// Shape an analyze-text response into render data.
pub fn analysis_view(response: &AnalysisResponse) -> AnalysisView {
    let badges: Vec<Badge> = response
        .extracted_symptoms
        .iter()
        .map(|e| Badge::extracted(&e.symptom, e.confidence))
        .collect();
    let container_visible = !badges.is_empty();

    AnalysisView {
        extracted: BadgeSection::of(badges, NO_EXTRACTED),
        diseases: disease_panel(&response.possible_diseases),
        container_visible,
    }
}

/// Render data for analyzing the current selection — only the disease panel
/// is shown (the inputs are already on screen as selected badges).
pub fn selected_analysis_view(response: &AnalysisResponse) -> DiseasePanel {
    disease_panel(&response.possible_diseases)
}

// Selection ------------------------------------------------------------------

/// Render data for the selected-symptoms area.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionView {
    pub badges: Vec<Badge>,
    /// Analyze/clear buttons show only when something is selected.
    pub actions_visible: bool,
    pub placeholder: Option<&'static str>,
}

/// Shape the current selection members into render data. Any selection change
/// invalidates previously shown analysis results, so the chrome should hide
/// them whenever this view is re-rendered.
pub fn selection_view(members: &[String]) -> SelectionView {
    let badges: Vec<Badge> = members.iter().map(|m| Badge::selected(m)).collect();
    let actions_visible = !badges.is_empty();
    let placeholder = badges.is_empty().then_some(NO_SELECTED);

    SelectionView {
        badges,
        actions_visible,
        placeholder,
    }
}

// Symptom dropdown -----------------------------------------------------------

/// Render data for the symptom dropdown: a fixed prompt option followed by
/// the fetched names sorted alphabetically.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownView {
    pub prompt: &'static str,
    pub options: Vec<String>,
}

pub const DROPDOWN_PROMPT: &str = "Select a symptom...";

pub fn dropdown_options(mut symptoms: Vec<String>) -> DropdownView {
    symptoms.sort();
    DropdownView {
        prompt: DROPDOWN_PROMPT,
        options: symptoms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractedSymptom, SemanticMatch};

    fn scores(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn score_bars_sort_descending_and_normalize() {
        let bars = score_bars(&scores(&[("A", 10.0), ("B", 5.0), ("C", 10.0)]));
        assert_eq!(bars.len(), 3);

        // A and C (both maximal) come before B; their mutual order is not
        // part of the contract.
        assert_eq!(bars[2].disease, "B");
        assert!((bars[0].width_pct - 100.0).abs() < 1e-9);
        assert!((bars[1].width_pct - 100.0).abs() < 1e-9);
        assert!((bars[2].width_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn score_bars_display_one_decimal() {
        let bars = score_bars(&scores(&[("Influenza", 7.25)]));
        assert_eq!(bars[0].display_score, "7.2");

        let bars = score_bars(&scores(&[("Migraine", 3.0)]));
        assert_eq!(bars[0].display_score, "3.0");
    }

    #[test]
    fn all_zero_scores_yield_zero_widths() {
        let bars = score_bars(&scores(&[("A", 0.0), ("B", 0.0)]));
        assert!(bars.iter().all(|b| b.width_pct == 0.0));
    }

    #[test]
    fn empty_score_map_yields_no_bars() {
        assert!(score_bars(&HashMap::new()).is_empty());
    }

    #[test]
    fn empty_disease_map_yields_exactly_the_placeholder() {
        match disease_panel(&HashMap::new()) {
            DiseasePanel::Placeholder(text) => assert_eq!(text, NO_CONDITIONS),
            DiseasePanel::Bars(bars) => panic!("expected placeholder, got {} bars", bars.len()),
        }
    }

    #[test]
    fn related_view_null_hides_container() {
        let view = related_view(None);
        assert_eq!(
            view,
            RelatedView::Nothing {
                placeholder: NO_RELATED
            }
        );
    }

    #[test]
    fn related_view_builds_both_sections() {
        let result = RelatedSymptoms {
            cooccurence_related: vec!["Chills".into()],
            semantic_related: vec![SemanticMatch {
                symptom: "High temperature".into(),
                score: 0.874,
            }],
        };
        let RelatedView::Sections {
            cooccurring,
            semantic,
        } = related_view(Some(&result))
        else {
            panic!("expected sections");
        };

        assert_eq!(cooccurring.badges[0].symptom, "Chills");
        assert_eq!(cooccurring.badges[0].tooltip.as_deref(), Some("related"));
        assert!(cooccurring.placeholder.is_none());

        // 0.874 rounds to 87, matching toFixed(0).
        assert_eq!(
            semantic.badges[0].tooltip.as_deref(),
            Some("Similarity: 87%")
        );
    }

    #[test]
    fn related_view_empty_lists_get_per_section_placeholders() {
        let RelatedView::Sections {
            cooccurring,
            semantic,
        } = related_view(Some(&RelatedSymptoms::default()))
        else {
            panic!("expected sections");
        };
        assert_eq!(cooccurring.placeholder, Some(NO_COOCCURRENCE));
        assert_eq!(semantic.placeholder, Some(NO_SEMANTIC));
    }

    #[test]
    fn analysis_view_builds_confidence_tooltips() {
        let response = AnalysisResponse {
            extracted_symptoms: vec![ExtractedSymptom {
                symptom: "headache".into(),
                confidence: 0.955,
                is_direct_match: false,
            }],
            possible_diseases: scores(&[("Migraine", 4.0)]),
        };
        let view = analysis_view(&response);
        assert!(view.container_visible);
        assert_eq!(
            view.extracted.badges[0].tooltip.as_deref(),
            Some("Confidence: 96%")
        );
        assert!(matches!(view.diseases, DiseasePanel::Bars(ref b) if b.len() == 1));
    }

    #[test]
    fn analysis_view_empty_extraction_hides_container() {
        let view = analysis_view(&AnalysisResponse::default());
        assert!(!view.container_visible);
        assert_eq!(view.extracted.placeholder, Some(NO_EXTRACTED));
        assert_eq!(view.diseases, DiseasePanel::Placeholder(NO_CONDITIONS));
    }

    #[test]
    fn selection_view_toggles_actions_and_placeholder() {
        let empty = selection_view(&[]);
        assert!(!empty.actions_visible);
        assert_eq!(empty.placeholder, Some(NO_SELECTED));

        let members = vec!["Fever".to_string(), "Cough".to_string()];
        let view = selection_view(&members);
        assert!(view.actions_visible);
        assert!(view.placeholder.is_none());
        assert!(view.badges.iter().all(|b| b.removable));
        assert_eq!(view.badges[0].symptom, "Fever");
    }

    #[test]
    fn dropdown_sorts_alphabetically_after_prompt() {
        let view = dropdown_options(vec!["Fever".into(), "Cough".into()]);
        assert_eq!(view.prompt, DROPDOWN_PROMPT);
        assert_eq!(view.options, vec!["Cough", "Fever"]);
    }

    #[test]
    fn badge_click_target_is_the_symptom_itself() {
        let badge = Badge::semantic("Chills", 0.5);
        assert_eq!(badge.symptom, "Chills");
        assert_eq!(badge.kind, BadgeKind::Related);
        assert!(!badge.removable);
    }
}
