#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod api;
pub mod app;
pub mod cli;
pub mod events;
pub mod input;
pub mod progress;
pub mod status;
pub mod theme;
pub mod traits;
pub mod tui;
pub mod view;
