use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Deepest menu tree accepted on write. Storefront menus rarely exceed three
/// levels; anything far beyond that is a malformed or hostile payload.
pub const MAX_NAVIGATION_DEPTH: usize = 16;

/// A node of the mega-menu tree. Children are owned, so the structure is
/// always a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavigationItem>>,
}

impl NavigationItem {
    pub fn leaf(name: &str, slug: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
            children: None,
        }
    }

    pub fn branch(name: &str, slug: &str, children: Vec<NavigationItem>) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
            children: Some(children),
        }
    }

    /// Number of levels in the subtree rooted at this node (a leaf is 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map(tree_depth)
            .unwrap_or(0)
    }
}

fn tree_depth(items: &[NavigationItem]) -> usize {
    items.iter().map(NavigationItem::depth).max().unwrap_or(0)
}

fn validate_tree_depth(items: &[NavigationItem]) -> Result<(), ValidationError> {
    if tree_depth(items) > MAX_NAVIGATION_DEPTH {
        let mut err = ValidationError::new("max_depth");
        err.message = Some(
            format!("navigation tree is deeper than {} levels", MAX_NAVIGATION_DEPTH).into(),
        );
        return Err(err);
    }
    Ok(())
}

/// Navigation document: `{ "items": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NavigationPayload {
    #[validate(custom(function = "validate_tree_depth"))]
    pub items: Vec<NavigationItem>,
}
