//! SymptomScope — client core for a symptom-checker backend.
//!
//! The library owns everything between a UI event and the render data that
//! answers it: input validation, backend requests, selection state, and the
//! pure payload → view-model shaping. It renders nothing itself; a front-end
//! (the bundled terminal chrome, or any other) consumes the view-models and
//! owns element construction.

pub mod api;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod selection;
pub mod view;

pub use api::{BackendClient, SymptomApi};
pub use catalog::DiseaseCatalog;
pub use dispatch::Dispatcher;
pub use error::CheckerError;
pub use selection::SelectionStore;
