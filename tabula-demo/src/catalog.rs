//! Story registration for inventory-based auto-discovery.

use crate::config::DemoConfig;
use crate::error::DemoError;

/// Settings a story renders with.
#[derive(Debug, Clone)]
pub struct StoryContext {
    /// Rows per page in paged stories.
    pub page_size: usize,
    /// Empty-state text override.
    pub empty_text: Option<String>,
}

impl From<&DemoConfig> for StoryContext {
    fn from(config: &DemoConfig) -> Self {
        Self {
            page_size: config.page_size,
            empty_text: config.empty_text.clone(),
        }
    }
}

impl Default for StoryContext {
    fn default() -> Self {
        Self::from(&DemoConfig::default())
    }
}

/// Story registration entry for inventory.
pub struct Story {
    /// Story name, `group/name`.
    pub name: &'static str,
    /// One-line description for the listing.
    pub description: &'static str,
    /// Renders the story snapshot.
    pub render: fn(&StoryContext) -> Result<String, DemoError>,
}

impl Story {
    /// Create a new story registration.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        render: fn(&StoryContext) -> Result<String, DemoError>,
    ) -> Self {
        Self {
            name,
            description,
            render,
        }
    }
}

inventory::collect!(Story);

/// All registered stories, sorted by name.
pub fn stories() -> Vec<&'static Story> {
    let mut stories: Vec<_> = inventory::iter::<Story>().collect();
    stories.sort_by_key(|story| story.name);
    stories
}

/// Find a story by name.
pub fn find(name: &str) -> Option<&'static Story> {
    inventory::iter::<Story>().find(|story| story.name == name)
}
