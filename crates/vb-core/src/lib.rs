//! Vision-board preference pipeline.
//!
//! Turns a sequence of per-question image selections into a deduplicated
//! style-tag set, a deterministically positioned image collage, and a
//! category filter over a shoppable product catalog, with a small state
//! machine driving the survey itself.
//!
//! Zero I/O — pure logic with no opinions about rendering or persistence.

pub mod board;
pub mod catalog;
pub mod layout;
pub mod selection;
pub mod shop;
pub mod survey;
pub mod time;

pub use board::{Board, BoardError, BoardFeedback, finalize};
pub use catalog::{
    MAX_SELECTIONS_PER_QUESTION, Product, Question, StyleOption, product_catalog,
    survey_questions,
};
pub use layout::{SizeClass, Slot, WIDE_BREAKPOINT_PX, layout_for, slot_for, slot_table};
pub use selection::{SelectionError, SelectionSet, Toggled};
pub use shop::{ALL_CATEGORIES, by_category, category_counts, discount_percent};
pub use survey::{Survey, SurveyError, SurveyState};
pub use time::{millis_to_iso8601, now_unix_millis};
