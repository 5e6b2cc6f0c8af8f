//! Context-sensitive filter-expression suggestions
//!
//! The engine watches the tail of the expression being typed and offers one
//! of three fixed vocabularies: column names, comparison operators, or
//! boolean joiners. All UI access goes through the [`SuggestionView`] trait
//! so the classification logic stays independent of the terminal toolkit.

mod context;
mod dropdown_state;
mod engine;
mod rows;
mod vocabulary;

pub mod dropdown_render;

pub use context::TailContext;
pub use dropdown_state::DropdownState;
pub use engine::{INPUT_ELEMENT_ID, ROW_ELEMENT_ID, SuggestionEngine, SuggestionView};
pub use rows::{Badge, Suggestion, suggestion_rows};
pub use vocabulary::Vocabulary;
