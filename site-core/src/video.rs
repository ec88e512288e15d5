/// Where a video plays from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoSource {
    /// A file the browser plays in a `<video>` element.
    File(String),
    Facebook(String),
    YouTube(String),
}

impl VideoSource {
    /// Embeds render in an iframe; files get the native player.
    pub fn is_embed(&self) -> bool {
        !matches!(self, Self::File(_))
    }

    pub fn url(&self) -> &str {
        match self {
            Self::File(url) | Self::Facebook(url) | Self::YouTube(url) => url,
        }
    }

    /// Classify a URL by host.
    pub fn from_url(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.contains("facebook.com") {
            Self::Facebook(url.to_string())
        } else if lower.contains("youtube.com") || lower.contains("youtu.be") {
            Self::YouTube(url.to_string())
        } else {
            Self::File(url.to_string())
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub description: Option<String>,
    pub source: VideoSource,
}

/// Which arrows of a horizontal scroller are usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollState {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self { can_scroll_left: false, can_scroll_right: true }
    }
}

impl ScrollState {
    pub fn measure(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            can_scroll_left: scroll_left > 0.0,
            can_scroll_right: scroll_left < scroll_width - client_width - 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Arrow buttons move by this fraction of the visible width.
pub const SCROLL_PAGE_FRACTION: f64 = 0.8;

pub fn scroll_target(direction: ScrollDirection, scroll_left: f64, client_width: f64) -> f64 {
    let step = client_width * SCROLL_PAGE_FRACTION;
    match direction {
        ScrollDirection::Left => scroll_left - step,
        ScrollDirection::Right => scroll_left + step,
    }
}

/// Keyboard commands understood by the scroller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollKey {
    Page(ScrollDirection),
    Start,
    End,
}

impl ScrollKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Page(ScrollDirection::Left)),
            "ArrowRight" => Some(Self::Page(ScrollDirection::Right)),
            "Home" => Some(Self::Start),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_state_edges() {
        assert_eq!(
            ScrollState::measure(0.0, 2000.0, 800.0),
            ScrollState { can_scroll_left: false, can_scroll_right: true }
        );
        assert_eq!(
            ScrollState::measure(1200.0, 2000.0, 800.0),
            ScrollState { can_scroll_left: true, can_scroll_right: false }
        );
        // Within a pixel of the end counts as the end
        assert!(!ScrollState::measure(1199.5, 2000.0, 800.0).can_scroll_right);
    }

    #[test]
    fn test_scroll_target_is_eighty_percent() {
        assert_eq!(scroll_target(ScrollDirection::Right, 100.0, 500.0), 500.0);
        assert_eq!(scroll_target(ScrollDirection::Left, 100.0, 500.0), -300.0);
    }

    #[test]
    fn test_source_classification() {
        assert!(VideoSource::from_url("https://www.facebook.com/plugins/video.php?href=x").is_embed());
        assert!(matches!(
            VideoSource::from_url("https://www.youtube.com/embed/abc"),
            VideoSource::YouTube(_)
        ));
        assert!(!VideoSource::from_url("/sermons/faith.mp4").is_embed());
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(ScrollKey::from_key("End"), Some(ScrollKey::End));
        assert_eq!(ScrollKey::from_key("x"), None);
    }
}
