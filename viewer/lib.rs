//! Client-side state and rendering for the dataset viewer pages.
//!
//! Everything here is independent of the browser. The page clients supply a [`Transport`] and a view, then drive
//! the [`ColumnSelector`] and [`RowViewer`] controllers from DOM events.

mod api;
mod column_selector;
mod config;
mod cursor;
mod error;
mod occurrences;
mod row_viewer;
mod rows;
mod selection;
mod transport;
mod value;

#[cfg(test)]
mod test_support;

pub use self::api::*;
pub use self::column_selector::*;
pub use self::config::*;
pub use self::cursor::*;
pub use self::error::*;
pub use self::occurrences::*;
pub use self::row_viewer::*;
pub use self::rows::*;
pub use self::selection::*;
pub use self::transport::*;
pub use self::value::*;
