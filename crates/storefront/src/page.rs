//! In-memory presentation surface.
//!
//! `Page` keeps the latest content of every region, the set of open
//! overlays, and every notice raised, in order. The shell prints from it and
//! tests assert against it.

use std::collections::{BTreeMap, BTreeSet};

use crate::surface::{Overlay, PresentationSurface, Region};

/// Content last written to a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionContent {
    Text(String),
    Html(String),
}

impl RegionContent {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Html(s) => s,
        }
    }
}

/// A page held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct Page {
    regions: BTreeMap<Region, RegionContent>,
    open: BTreeSet<Overlay>,
    notices: Vec<String>,
    notices_read: usize,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a region, if anything has been written to it.
    #[must_use]
    pub fn region(&self, region: Region) -> Option<&RegionContent> {
        self.regions.get(&region)
    }

    /// Content of a region as a string; empty if never written.
    #[must_use]
    pub fn region_str(&self, region: Region) -> &str {
        self.regions.get(&region).map_or("", RegionContent::as_str)
    }

    #[must_use]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.open.contains(&overlay)
    }

    /// Every notice raised so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Notices raised since the previous call.
    pub fn unread_notices(&mut self) -> &[String] {
        let start = self.notices_read.min(self.notices.len());
        self.notices_read = self.notices.len();
        self.notices.get(start..).unwrap_or_default()
    }
}

impl PresentationSurface for Page {
    fn set_text(&mut self, region: Region, text: &str) {
        self.regions.insert(region, RegionContent::Text(text.to_string()));
    }

    fn set_html(&mut self, region: Region, html: &str) {
        self.regions.insert(region, RegionContent::Html(html.to_string()));
    }

    fn show(&mut self, overlay: Overlay) {
        self.open.insert(overlay);
    }

    fn hide(&mut self, overlay: Overlay) {
        self.open.remove(&overlay);
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
