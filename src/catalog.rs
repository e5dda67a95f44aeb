//! Diseases catalog: fetch-once, searchable list of collapsible cards.
//!
//! The collection is fetched a single time and every search afterwards is a
//! pure client-side filter over it. Card expansion state lives here so the
//! chrome can re-render the whole list from one view call.

use crate::api::SymptomApi;

pub const NO_CATALOG: &str = "No diseases information available.";
pub const NO_MATCHES: &str = "No diseases found matching your search.";
pub const MISSING_DESCRIPTION: &str = "No description available.";

/// One collapsible disease card. `expanded` starts false; the header click
/// flips it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseCard {
    pub name: String,
    pub description: String,
    pub expanded: bool,
}

/// A card row in the rendered list. Hidden cards stay in the list so
/// expansion state survives filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub expanded: bool,
    pub visible: bool,
}

/// Render data for the catalog tab.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView<'a> {
    /// Nothing was fetched: one standalone placeholder, no search input.
    Unavailable { placeholder: &'static str },
    /// Search input plus the card list; `no_results` is present exactly
    /// when the current filter leaves zero cards visible.
    List {
        cards: Vec<CardView<'a>>,
        no_results: Option<&'static str>,
    },
}

/// The fetched catalog with per-card expansion state.
pub struct DiseaseCatalog {
    cards: Vec<DiseaseCard>,
}

impl DiseaseCatalog {
    /// Fetch the full collection once and sort it by name.
    ///
    /// A failed or malformed fetch logs a warning and yields an empty
    /// catalog — the catalog tab degrades to its placeholder instead of
    /// surfacing a blocking error.
    pub fn load(api: &dyn SymptomApi) -> Self {
        match api.fetch_diseases() {
            Ok(diseases) => {
                tracing::info!(count = diseases.len(), "diseases catalog loaded");
                let cards = diseases
                    .into_iter()
                    .map(|d| DiseaseCard {
                        name: d.disease,
                        description: d
                            .description
                            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
                        expanded: false,
                    })
                    .collect();
                Self::from_cards(cards)
            }
            Err(err) => {
                tracing::warn!(%err, "diseases catalog fetch failed, showing empty catalog");
                Self::from_cards(Vec::new())
            }
        }
    }

    /// Build from already-shaped cards (tests, preloaded data).
    pub fn from_cards(mut cards: Vec<DiseaseCard>) -> Self {
        // Case-insensitive name sort standing in for locale-aware collation.
        cards.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Flip the expansion state of the named card. Unknown names are ignored.
    pub fn toggle_expanded(&mut self, name: &str) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.name == name) {
            card.expanded = !card.expanded;
        }
    }

    /// Render the list under the current search term: case-insensitive
    /// substring match against the name only. An empty term shows everything.
    pub fn filtered(&self, search: &str) -> CatalogView<'_> {
        if self.cards.is_empty() {
            return CatalogView::Unavailable {
                placeholder: NO_CATALOG,
            };
        }

        let needle = search.trim().to_lowercase();
        let cards: Vec<CardView<'_>> = self
            .cards
            .iter()
            .map(|card| CardView {
                name: &card.name,
                description: &card.description,
                expanded: card.expanded,
                visible: needle.is_empty() || card.name.to_lowercase().contains(&needle),
            })
            .collect();

        let any_visible = cards.iter().any(|c| c.visible);
        CatalogView::List {
            cards,
            no_results: (!any_visible).then_some(NO_MATCHES),
        }
    }

}
