//! Movie product page.
//!
//! The page is a template from a [`TemplateSource`] with placeholders for
//! every piece of movie metadata. Fragments for people, genres, suggestions
//! and cast are built here; the template is rendered in a single pass.

use super::error::{Error, Result};
use popcorntv_common::text::cleaned;
use popcorntv_common::{Movie, Person};
use popcorntv_template::{TemplateContext, TemplateSource, UnboundPolicy};

/// Name of the product page template.
pub const PRODUCT_TEMPLATE: &str = "ProductRecipe";

/// Content type reported to the watch list action.
pub const DEFAULT_CONTENT_TYPE: &str = "movie";

/// Critic badge block, removed from the template when a movie has no critic rating.
pub const CRITIC_BADGE_MARKUP: &str =
    "<text><badge src=\"resource://tomato-{{TOMATO_CRITIC_RATING}}\"/> {{TOMATO_CRITIC_SCORE}}%</text>";

const SUGGESTION_POSTER_WIDTH: u32 = 150;
const SUGGESTION_POSTER_HEIGHT: u32 = 226;

/// Builds the product page for a movie.
///
/// # Example
///
/// ```
/// use popcorntv::recipes::ProductPageFormatter;
/// use popcorntv_common::{Movie, Torrent};
/// use popcorntv_template::StaticSource;
///
/// let source = StaticSource::new()
///     .with_template("ProductRecipe", "<title>{{TITLE}}</title><text>{{RUNTIME}}</text>");
/// let formatter = ProductPageFormatter::new(source)
///     .with_unbound_policy(popcorntv_template::UnboundPolicy::Keep);
///
/// let mut movie = Movie::new(1, "Heat");
/// movie.runtime = 170;
/// movie.genres = vec!["Crime".into()];
/// movie.torrents = vec![Torrent::new("abc")];
///
/// let page = formatter.format(&movie, &[], false)?;
/// assert!(page.ends_with("<document><title>Heat</title><text>2h 50m</text></document>"));
/// # Ok::<(), popcorntv::recipes::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProductPageFormatter<S> {
    source: S,
    template_name: String,
    policy: UnboundPolicy,
    content_type: String,
    fallback_to_empty: bool,
}

impl<S: TemplateSource> ProductPageFormatter<S> {
    /// Create a formatter reading the product template from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            template_name: PRODUCT_TEMPLATE.to_string(),
            policy: UnboundPolicy::default(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            fallback_to_empty: false,
        }
    }

    /// Load a differently named template.
    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    /// Set how placeholders without a value are rendered.
    pub fn with_unbound_policy(mut self, policy: UnboundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the literal substituted for `{{TYPE}}`.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Render an empty document instead of failing when the template is missing or unreadable.
    pub fn with_fallback_to_empty(mut self, fallback: bool) -> Self {
        self.fallback_to_empty = fallback;
        self
    }

    /// Render the full product page document.
    pub fn format(
        &self,
        movie: &Movie,
        suggestions: &[Movie],
        exists_in_watch_list: bool,
    ) -> Result<String> {
        match self.body(movie, suggestions, exists_in_watch_list) {
            Ok(body) => Ok(wrap_document(&body)),
            Err(Error::TemplateNotFound(name)) if self.fallback_to_empty => {
                tracing::warn!(template = %name, "product template unavailable, rendering empty page");
                Ok(wrap_document(""))
            }
            Err(e) => Err(e),
        }
    }

    /// Render the template body without the document envelope.
    pub fn body(
        &self,
        movie: &Movie,
        suggestions: &[Movie],
        exists_in_watch_list: bool,
    ) -> Result<String> {
        tracing::debug!(
            movie = movie.id,
            suggestions = suggestions.len(),
            template = %self.template_name,
            "rendering product page"
        );

        let mut template = self.source.load_template(&self.template_name)?;
        if movie.critic_rating().badge_token().is_none() {
            template = template.without_fragment(CRITIC_BADGE_MARKUP);
        }

        let ctx = self.context(movie, suggestions, exists_in_watch_list)?;
        Ok(template.render(&ctx)?)
    }

    /// Placeholder bindings for a movie.
    pub fn context(
        &self,
        movie: &Movie,
        suggestions: &[Movie],
        exists_in_watch_list: bool,
    ) -> Result<TemplateContext> {
        let rating = movie.critic_rating();
        let tomato = rating.badge_token().unwrap_or("none");

        let ctx = TemplateContext::new()
            .with_policy(self.policy)
            .with_var("DIRECTORS", directors_string(&movie.directors))
            .with_var("ACTORS", actors_string(&movie.actors))
            .with_var("TOMATO_CRITIC_RATING", cleaned(tomato))
            .with_var("TOMATO_CRITIC_SCORE", movie.tomatoes_critics_score.to_string())
            .with_var("RUNTIME", runtime_string(movie.runtime))
            .with_var("TITLE", cleaned(&movie.title))
            .with_var("GENRES", genres_string(&movie.genres)?)
            .with_var("DESCRIPTION", cleaned(&movie.description_full))
            .with_var("SHORT_DESCRIPTION", cleaned(&movie.summary))
            .with_var("IMAGE", cleaned(&movie.large_cover_image))
            .with_var("BACKGROUND_IMAGE", cleaned(&movie.background_image))
            .with_var("YEAR", movie.year.to_string())
            .with_var("RATING", cleaned(&movie.mpa_rating.to_lowercase()))
            .with_var("YOUTUBE_PREVIEW_URL", cleaned(&movie.youtube_trailer_url))
            .with_var("MAGNET", cleaned(movie.primary_hash()?))
            .with_var("SUGGESTIONS", suggestions_string(suggestions))
            .with_var("CAST", cast_string(&movie.actors)?)
            .with_var("WATCHLIST_ACTION", watchlist_action(exists_in_watch_list))
            .with_var("MOVIE_ID", movie.id.to_string())
            .with_var("TYPE", cleaned(&self.content_type));

        Ok(ctx)
    }
}

/// Wrap a page body in the XML declaration and `document` root element.
pub fn wrap_document(body: &str) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>");
    xml += "<document>";
    xml += body;
    xml += "</document>";
    xml
}

fn people_string(people: &[Person]) -> String {
    people
        .iter()
        .map(|p| format!("<text>{}</text>", cleaned(&p.name)))
        .collect()
}

/// One `<text>` element per director, unseparated.
pub fn directors_string(directors: &[Person]) -> String {
    people_string(directors)
}

/// One `<text>` element per actor, unseparated.
pub fn actors_string(actors: &[Person]) -> String {
    people_string(actors)
}

/// Both genres when there are exactly two, otherwise the first one.
pub fn genres_string(genres: &[String]) -> Result<String> {
    match genres {
        [] => Err(Error::invalid_record("movie has no genres")),
        [first, second] => Ok(format!(
            "<text>{}</text>/<text>{}</text>",
            cleaned(first),
            cleaned(second)
        )),
        [first, ..] => Ok(format!("<text>{}</text>", cleaned(first))),
    }
}

/// Split a duration in seconds into hours, minutes and seconds.
pub fn split_seconds(seconds: u64) -> (u64, u64, u64) {
    (seconds / 3600, (seconds % 3600) / 60, (seconds % 3600) % 60)
}

/// `"<H>h <M>m"` for a runtime in minutes.
pub fn runtime_string(minutes: u32) -> String {
    let (hours, minutes, _) = split_seconds(u64::from(minutes) * 60);
    format!("{hours}h {minutes}m")
}

/// Poster lockups for related movies, newline separated.
pub fn suggestions_string(suggestions: &[Movie]) -> String {
    suggestions
        .iter()
        .map(|movie| {
            let mut xml = format!("<lockup actionID=\"showMovie:{}\">\n", movie.id);
            xml += &format!(
                "<img src=\"{}\" width=\"{SUGGESTION_POSTER_WIDTH}\" height=\"{SUGGESTION_POSTER_HEIGHT}\" />\n",
                cleaned(&movie.parallax_poster)
            );
            xml += &format!("<title>{}</title>\n", cleaned(&movie.title));
            xml += "</lockup>\n";
            xml
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Monogram lockups for the cast shelf, newline separated.
///
/// Every actor needs a first and last name for the monogram.
pub fn cast_string(actors: &[Person]) -> Result<String> {
    let lockups = actors
        .iter()
        .map(|actor| -> Result<String> {
            let (first, last) = actor.monogram()?;
            let mut xml = String::from("<monogramLockup>\n");
            xml += &format!(
                "<monogram firstName=\"{}\" lastName=\"{}\"/>",
                cleaned(first),
                cleaned(last)
            );
            xml += &format!("<title>{}</title>\n", cleaned(&actor.name));
            xml += "<subtitle>Actor</subtitle>\n";
            xml += "</monogramLockup>\n";
            Ok(xml)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(lockups.join("\n"))
}

/// Watch list action verb for the button.
pub fn watchlist_action(exists_in_watch_list: bool) -> &'static str {
    if exists_in_watch_list {
        "remove"
    } else {
        "add"
    }
}
