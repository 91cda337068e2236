//! Markup recipes: media records in, TV markup out.
//!
//! - [`CarouselItemFormatter`] renders show tiles for the welcome carousel.
//! - [`ProductPageFormatter`] renders a movie's product page from a template.

mod carousel;
mod error;
mod product;

pub use carousel::{CarouselItemFormatter, ACTION_SEPARATOR, SHOW_ACTION};
pub use error::{Error, Result};
pub use product::{
    actors_string, cast_string, directors_string, genres_string, runtime_string, split_seconds,
    suggestions_string, watchlist_action, wrap_document, ProductPageFormatter,
    CRITIC_BADGE_MARKUP, DEFAULT_CONTENT_TYPE, PRODUCT_TEMPLATE,
};
