//! View model consumed by renderers
//!
//! Everything a renderer needs to paint the tag filter: the mode, the rows
//! with their follow/block state, the empty-state message and the menu.

use super::menu::{MenuAction, MenuState};
use crate::categories::{TagCatalog, TagCategory};
use crate::flags::{FeedFilterVariant, FilterLayout};
use crate::store::FeedSettings;
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "No matching tags.";
pub const HEADLINE: &str = "Choose tags to follow";
pub const INTRO_COPY: &str = "Let's super-charge your feed with relevant content! Start by choosing tags you want to follow, and we will curate your feed accordingly.";

/// Browsing categories or showing search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Browse,
    Search,
}

impl FilterMode {
    /// Search iff the query is non-empty
    #[must_use]
    pub const fn for_query(query: &str) -> Self {
        if query.is_empty() { Self::Browse } else { Self::Search }
    }

    /// Origin attached to mutations for analytics
    #[must_use]
    pub const fn origin(self) -> &'static str {
        match self {
            Self::Browse => "tags filter",
            Self::Search => "tags search",
        }
    }
}

/// One tag with its state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRow {
    pub tag: String,
    pub is_followed: bool,
    pub is_blocked: bool,
}

impl TagRow {
    /// Build a row; blocked wins if the store reports both
    #[must_use]
    pub fn new(tag: &str, settings: &FeedSettings) -> Self {
        let is_blocked = settings.is_blocked(tag);
        Self {
            tag: tag.to_string(),
            is_followed: !is_blocked && settings.is_followed(tag),
            is_blocked,
        }
    }
}

/// Rows of one category in browse mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub id: String,
    pub title: String,
    pub emoji: Option<String>,
    pub rows: Vec<TagRow>,
}

impl CategoryGroup {
    fn new(category: &TagCategory, settings: &FeedSettings) -> Self {
        Self {
            id: category.id.clone(),
            title: category.title.clone(),
            emoji: category.emoji.clone(),
            rows: category
                .tags
                .iter()
                .map(|tag| TagRow::new(tag, settings))
                .collect(),
        }
    }
}

/// Menu as rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MenuView {
    Closed,
    Open {
        tag: String,
        can_block: bool,
        can_unblock: bool,
    },
}

impl From<&MenuState> for MenuView {
    fn from(state: &MenuState) -> Self {
        match state {
            MenuState::Closed => Self::Closed,
            MenuState::OpenFor { tag, is_blocked } => Self::Open {
                tag: tag.clone(),
                can_block: !is_blocked,
                can_unblock: *is_blocked,
            },
        }
    }
}

impl MenuView {
    #[must_use]
    pub const fn action(&self) -> Option<MenuAction> {
        match self {
            Self::Open { can_unblock: true, .. } => Some(MenuAction::Unblock),
            Self::Open { can_block: true, .. } => Some(MenuAction::Block),
            Self::Open { .. } | Self::Closed => None,
        }
    }
}

/// Header copy and layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterHeader {
    #[serde(skip)]
    pub layout: FilterLayout,
    pub headline: Option<&'static str>,
    pub intro: &'static str,
}

impl FilterHeader {
    #[must_use]
    pub const fn new(layout: FilterLayout) -> Self {
        Self {
            layout,
            headline: if layout.show_headline { Some(HEADLINE) } else { None },
            intro: INTRO_COPY,
        }
    }
}

/// Full state of the tag filter panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterViewModel {
    pub mode: FilterMode,
    pub query: String,
    /// Search results; empty in browse mode
    pub items: Vec<TagRow>,
    /// Category groups; empty in search mode
    pub groups: Vec<CategoryGroup>,
    pub empty_message: Option<&'static str>,
    /// A lookup for the current query is outstanding
    pub pending: bool,
    pub menu: MenuView,
    pub header: FilterHeader,
}

impl FilterViewModel {
    /// Browse mode: one group per category
    #[must_use]
    pub fn browse(catalog: &TagCatalog, settings: &FeedSettings) -> Self {
        let groups: Vec<_> = catalog
            .categories
            .iter()
            .map(|category| CategoryGroup::new(category, settings))
            .collect();
        Self {
            mode: FilterMode::Browse,
            query: String::new(),
            items: Vec::new(),
            empty_message: groups.is_empty().then_some(EMPTY_MESSAGE),
            groups,
            pending: false,
            menu: MenuView::Closed,
            header: FilterHeader::new(FeedFilterVariant::Control.layout()),
        }
    }

    /// Search mode: flat result list
    #[must_use]
    pub fn search(query: &str, results: &[String], settings: &FeedSettings) -> Self {
        let items: Vec<_> = results.iter().map(|tag| TagRow::new(tag, settings)).collect();
        Self {
            mode: FilterMode::Search,
            query: query.to_string(),
            empty_message: items.is_empty().then_some(EMPTY_MESSAGE),
            items,
            groups: Vec::new(),
            pending: false,
            menu: MenuView::Closed,
            header: FilterHeader::new(FeedFilterVariant::Control.layout()),
        }
    }

    #[must_use]
    pub fn with_menu(mut self, menu: MenuView) -> Self {
        self.menu = menu;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: FilterLayout) -> Self {
        self.header = FilterHeader::new(layout);
        self
    }

    #[must_use]
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Number of rendered rows across items and groups
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.items.len() + self.groups.iter().map(|g| g.rows.len()).sum::<usize>()
    }
}
