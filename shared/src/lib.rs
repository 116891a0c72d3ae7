//! Types and presentation logic shared by the subscription table frontend.
//!
//! Nothing in here depends on a UI framework: the frontend crate turns the
//! row model and style map produced here into Yew markup.

pub mod format;
pub mod pagination;
pub mod styles;
pub mod table;
pub mod theme;
pub mod transaction;

pub use format::{format_currency, format_date, format_date_or_raw};
pub use pagination::{PageState, PAGE_SIZE};
pub use styles::{compute_styles, StyleMap, StyleRule, StyleSlot};
pub use table::{rows_for_page, BalanceChip, HeadCell, SubscriptionRow, SUBSCRIPTION_COLUMNS};
pub use theme::{Breakpoint, Breakpoints, Color, Palette, PaletteColor, Theme};
pub use transaction::{BalanceDirection, TransactionRecord};

/// Errors raised by the formatters and configuration loaders.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("timestamp {0} is outside the representable date range")]
    TimestampOutOfRange(i64),
    #[error("invalid color value: {0}")]
    InvalidColor(String),
    #[error("could not parse fixture: {0}")]
    Fixture(String),
}

pub type Result<T> = std::result::Result<T, Error>;
