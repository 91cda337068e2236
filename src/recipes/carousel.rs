//! Carousel tiles for the welcome screen.

use super::error::Result;
use popcorntv_common::text::{cleaned, slugged};
use popcorntv_common::Show;

/// Separator between the parts of a carousel action identifier.
pub const ACTION_SEPARATOR: &str = "»";

/// Action tag the app routes to the show detail page.
pub const SHOW_ACTION: &str = "showShow";

const IMAGE_WIDTH: u32 = 1740;
const IMAGE_HEIGHT: u32 = 500;
const SUBTITLE: &str = "TV Show";

/// Builds `lockup` tiles for the show carousel.
///
/// # Example
///
/// ```
/// use popcorntv::recipes::CarouselItemFormatter;
/// use popcorntv_common::Show;
///
/// let mut show = Show::new("tt0903747", "Breaking Bad");
/// show.tvdb_id = Some("81189".into());
/// show.fanart_image = Some("http://img/bb.jpg".into());
///
/// let tile = CarouselItemFormatter.format(&show)?;
/// assert!(tile.starts_with("<lockup actionID=\"showShow»tt0903747»breaking-bad»81189\""));
/// # Ok::<(), popcorntv::recipes::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CarouselItemFormatter;

impl CarouselItemFormatter {
    /// Render one tile.
    pub fn format(&self, show: &Show) -> Result<String> {
        let action = action_id(show)?;
        let fanart = cleaned(show.fanart_image()?);
        let title = cleaned(&show.title);

        let mut xml = format!("<lockup actionID=\"{action}\" playActionID=\"{action}\">");
        xml += &format!(
            "<img class=\"carousel\" src=\"{fanart}\" width=\"{IMAGE_WIDTH}\" height=\"{IMAGE_HEIGHT}\" />"
        );
        xml += "<overlay class=\"overlay\">";
        xml += &format!("<title class=\"text\">{title}</title>");
        xml += &format!("<subtitle class=\"text\">{SUBTITLE}</subtitle>");
        xml += "</overlay>";
        xml += "</lockup>";
        Ok(xml)
    }

    /// Render tiles for a whole carousel row, in order.
    ///
    /// The first invalid show fails the row.
    pub fn format_all(&self, shows: &[Show]) -> Result<String> {
        let tiles = shows
            .iter()
            .map(|show| self.format(show))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(tiles = tiles.len(), "rendered carousel");
        Ok(tiles.concat())
    }
}

/// `showShow»<id>»<title slug>»<tvdb id>`.
fn action_id(show: &Show) -> Result<String> {
    let parts = [
        SHOW_ACTION.to_string(),
        cleaned(&show.id),
        slugged(&show.title),
        cleaned(show.tvdb_id()?),
    ];
    Ok(parts.join(ACTION_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::Error;

    fn make_show() -> Show {
        let mut show = Show::new("tt0903747", "Breaking Bad");
        show.tvdb_id = Some("81189".to_string());
        show.fanart_image = Some("http://img/bb.jpg".to_string());
        show
    }

    #[test]
    fn test_format_exact() {
        let xml = CarouselItemFormatter.format(&make_show()).unwrap();
        assert_eq!(
            xml,
            "<lockup actionID=\"showShow»tt0903747»breaking-bad»81189\" \
             playActionID=\"showShow»tt0903747»breaking-bad»81189\">\
             <img class=\"carousel\" src=\"http://img/bb.jpg\" width=\"1740\" height=\"500\" />\
             <overlay class=\"overlay\">\
             <title class=\"text\">Breaking Bad</title>\
             <subtitle class=\"text\">TV Show</subtitle>\
             </overlay>\
             </lockup>"
        );
    }

    #[test]
    fn test_title_is_escaped_and_slugged() {
        let mut show = make_show();
        show.title = "Law & Order".to_string();
        let xml = CarouselItemFormatter.format(&show).unwrap();
        assert!(xml.contains("»law-order»"));
        assert!(xml.contains("<title class=\"text\">Law &amp; Order</title>"));
    }

    #[test]
    fn test_missing_fanart_is_invalid() {
        let mut show = make_show();
        show.fanart_image = None;
        let err = CarouselItemFormatter.format(&show).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_missing_tvdb_id_is_invalid() {
        let mut show = make_show();
        show.tvdb_id = None;
        assert!(matches!(
            CarouselItemFormatter.format(&show),
            Err(Error::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_format_all() {
        let mut other = make_show();
        other.id = "tt2".to_string();
        let row = CarouselItemFormatter
            .format_all(&[make_show(), other])
            .unwrap();
        assert_eq!(row.matches("<lockup ").count(), 2);
        assert!(row.find("tt0903747").unwrap() < row.find("tt2").unwrap());

        assert_eq!(CarouselItemFormatter.format_all(&[]).unwrap(), "");
    }

    #[test]
    fn test_format_all_fails_on_invalid_show() {
        let mut bad = make_show();
        bad.fanart_image = Some("  ".to_string());
        assert!(CarouselItemFormatter.format_all(&[make_show(), bad]).is_err());
    }
}
