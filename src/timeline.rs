use chrono::{DateTime, Utc};

use crate::api::types::{AuthorPayload, WarblePayload};

/// Maximum entries to keep in the timeline before trimming
const MAX_TIMELINE_ENTRIES: usize = 500;
/// Number of oldest entries to remove when trimming
const TIMELINE_TRIM_COUNT: usize = 100;

/// One warble as displayed in the timeline, together with the viewer's
/// like state and the anti-forgery token embedded for this entry.
#[derive(Clone, Debug)]
pub struct TimelineEntry {
    pub message_id: u64,
    pub username: String,
    pub avatar_url: Option<String>,
    pub text: String,
    pub location: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Only flipped after the server acknowledged a toggle for this id
    pub liked: bool,
    /// The viewer's own warble; the server refuses self-likes
    pub own: bool,
    /// Per-entry token, read at click time and never reused
    pub csrf_token: String,
}

impl TimelineEntry {
    pub fn from_payload(
        warble: &WarblePayload,
        author: &AuthorPayload,
        liked: bool,
        own: bool,
        csrf_token: String,
    ) -> Self {
        Self {
            message_id: warble.id,
            username: author.username.clone(),
            avatar_url: author.image_url.clone(),
            text: warble.text.clone(),
            location: warble.location.clone(),
            timestamp: warble.timestamp,
            liked,
            own,
            csrf_token,
        }
    }

    /// Human-readable creation date: day, full month name, year.
    pub fn long_date(&self) -> String {
        self.timestamp.format("%-d %B %Y").to_string()
    }
}

/// The viewer's home timeline, newest entry first.
#[derive(Default, Clone)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all contents (timeline bootstrap or refresh).
    pub fn replace(&mut self, entries: Vec<TimelineEntry>) {
        self.entries = entries;
        if self.entries.len() > MAX_TIMELINE_ENTRIES {
            self.entries.truncate(MAX_TIMELINE_ENTRIES);
        }
    }

    /// Put a freshly created warble at the top of the list.
    pub fn prepend(&mut self, entry: TimelineEntry) {
        self.entries.insert(0, entry);
        // Trim old entries if the list gets too large
        if self.entries.len() > MAX_TIMELINE_ENTRIES {
            let keep = self.entries.len() - TIMELINE_TRIM_COUNT;
            self.entries.truncate(keep);
        }
    }

    pub fn get(&self, message_id: u64) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.message_id == message_id)
    }

    /// Flip the liked flag of one entry. Unknown ids are ignored; the
    /// entry may have been trimmed since the request went out.
    ///
    /// Returns the new liked state if the entry was found.
    pub fn toggle_liked(&mut self, message_id: u64) -> Option<bool> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.message_id == message_id)?;
        entry.liked = !entry.liked;
        Some(entry.liked)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: u64, text: &str) -> TimelineEntry {
        TimelineEntry {
            message_id: id,
            username: "alice".into(),
            avatar_url: None,
            text: text.into(),
            location: None,
            timestamp: Utc.with_ymd_and_hms(2021, 3, 5, 0, 0, 0).unwrap(),
            liked: false,
            own: false,
            csrf_token: format!("tok-{}", id),
        }
    }

    #[test]
    fn test_long_date_formatting() {
        // 2021-03-05T00:00:00Z renders without a zero-padded day
        assert_eq!(entry(1, "hello").long_date(), "5 March 2021");

        let mut e = entry(2, "x");
        e.timestamp = Utc.with_ymd_and_hms(2023, 12, 25, 18, 30, 0).unwrap();
        assert_eq!(e.long_date(), "25 December 2023");
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut tl = Timeline::new();
        tl.prepend(entry(1, "first"));
        tl.prepend(entry(2, "second"));
        assert_eq!(tl.entries[0].message_id, 2);
        assert_eq!(tl.entries[1].message_id, 1);
    }

    #[test]
    fn test_toggle_liked_double_toggle_is_identity() {
        let mut tl = Timeline::new();
        tl.prepend(entry(42, "hello"));

        assert_eq!(tl.toggle_liked(42), Some(true));
        assert!(tl.get(42).unwrap().liked);

        assert_eq!(tl.toggle_liked(42), Some(false));
        assert!(!tl.get(42).unwrap().liked);
    }

    #[test]
    fn test_toggle_liked_unknown_id() {
        let mut tl = Timeline::new();
        tl.prepend(entry(1, "hello"));
        assert_eq!(tl.toggle_liked(99), None);
        assert!(!tl.get(1).unwrap().liked);
    }

    #[test]
    fn test_prepend_trims_old_entries() {
        let mut tl = Timeline::new();
        for i in 0..(MAX_TIMELINE_ENTRIES as u64 + 50) {
            tl.prepend(entry(i, "x"));
        }
        assert!(tl.len() <= MAX_TIMELINE_ENTRIES);
        // Newest entries survive the trim
        assert_eq!(tl.entries[0].message_id, MAX_TIMELINE_ENTRIES as u64 + 49);
    }
}
