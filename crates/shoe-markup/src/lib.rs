//! HTML painter for shoe card view models.
//!
//! - `render_card_html` - One card as an `<a><article>` fragment
//! - `render_card_grid` - A grid section of cards
//! - `card_stylesheet` - CSS generated from the theme tokens
//! - `Document` - A standalone page around a grid

mod card;
mod document;
mod escape;
mod style;

pub use card::*;
pub use document::*;
pub use escape::html_escape;
pub use style::*;
