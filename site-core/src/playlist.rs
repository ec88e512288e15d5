#[derive(Clone, Debug, PartialEq)]
pub struct AudioTrack {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub date: &'static str,
    pub audio_url: Option<&'static str>,
}

/// Filter tabs shown above the playlist.
pub const CATEGORY_TABS: [&str; 5] = ["all", "sermon", "worship-music", "devotional", "teaching-series"];

/// Tab label: "All", otherwise the slug upper-cased with the first dash as a space.
pub fn tab_label(tab: &str) -> String {
    if tab == "all" {
        "All".to_string()
    } else {
        tab.replacen('-', " ", 1).to_uppercase()
    }
}

/// Slug used to match a track against a tab (only the first space is replaced).
pub fn category_slug(category: &str) -> String {
    category.to_lowercase().replacen(' ', "-", 1)
}

pub fn matches_tab(track: &AudioTrack, tab: &str) -> bool {
    tab == "all" || category_slug(track.category) == tab
}

/// Track selection over the full list. Prev/next are clamped, never wrap.
#[derive(Clone, Debug)]
pub struct Playlist {
    tracks: Vec<AudioTrack>,
    current: usize,
    tab: String,
}

impl Playlist {
    pub fn new(tracks: Vec<AudioTrack>) -> Self {
        Self { tracks, current: 0, tab: "all".to_string() }
    }

    pub fn tracks(&self) -> &[AudioTrack] {
        &self.tracks
    }

    pub fn current(&self) -> Option<&AudioTrack> {
        self.tracks.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn set_tab(&mut self, tab: &str) {
        self.tab = tab.to_string();
    }

    pub fn filtered(&self) -> Vec<&AudioTrack> {
        self.tracks.iter().filter(|t| matches_tab(t, &self.tab)).collect()
    }

    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.tracks.len()
    }

    /// Returns whether the current track changed.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Make the track with `id` current. Returns whether it exists.
    pub fn select(&mut self, id: u32) -> bool {
        match self.tracks.iter().position(|t| t.id == id) {
            Some(i) => {
                self.current = i;
                true
            }
            None => false,
        }
    }
}

/// Playback position of the media element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transport {
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
}

impl Transport {
    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 && self.duration.is_finite() {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Seek target for a click `click_x` pixels into a bar `width` pixels wide.
    pub fn seek_time(&self, click_x: f64, width: f64) -> f64 {
        if width <= 0.0 || !self.duration.is_finite() {
            return self.current_time;
        }
        (click_x / width).clamp(0.0, 1.0) * self.duration
    }

    /// Stop and rewind when the track changes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `m:ss`.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{minutes}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: u32, category: &'static str) -> AudioTrack {
        AudioTrack {
            id,
            title: "t",
            artist: "a",
            category,
            duration: "1:00",
            date: "Nov 1, 2024",
            audio_url: None,
        }
    }

    fn playlist() -> Playlist {
        Playlist::new(vec![
            track(1, "Sermon"),
            track(2, "Worship Music"),
            track(3, "Devotional"),
            track(4, "Worship Music"),
            track(5, "Teaching Series"),
        ])
    }

    #[test]
    fn test_tab_filtering() {
        let mut list = playlist();
        assert_eq!(list.filtered().len(), 5);
        list.set_tab("worship-music");
        let ids: Vec<u32> = list.filtered().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4]);
        list.set_tab("teaching-series");
        assert_eq!(list.filtered().len(), 1);
    }

    #[test]
    fn test_prev_next_clamp() {
        let mut list = playlist();
        assert!(!list.prev());
        for _ in 0..10 {
            list.next();
        }
        assert_eq!(list.current_index(), 4);
        assert!(!list.can_next());
    }

    #[test]
    fn test_select_by_id() {
        let mut list = playlist();
        assert!(list.select(3));
        assert_eq!(list.current().map(|t| t.id), Some(3));
        assert!(!list.select(42));
        assert_eq!(list.current_index(), 2);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(tab_label("all"), "All");
        assert_eq!(tab_label("worship-music"), "WORSHIP MUSIC");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(2730.0), "45:30");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn test_progress_and_seek() {
        let t = Transport { is_playing: true, current_time: 30.0, duration: 120.0 };
        assert_eq!(t.progress_percent(), 25.0);
        assert_eq!(t.seek_time(50.0, 200.0), 30.0);
        assert_eq!(t.seek_time(300.0, 200.0), 120.0);
        let unknown = Transport::default();
        assert_eq!(unknown.progress_percent(), 0.0);
    }
}
