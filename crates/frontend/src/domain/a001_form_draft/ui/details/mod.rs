//! Form Draft Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: browser-backed controller construction
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::FormDraftDetails;
pub use view_model::FormDraftViewModel;
