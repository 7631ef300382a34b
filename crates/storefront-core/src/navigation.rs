//! Header and footer navigation globals.

use serde::{Deserialize, Serialize};

use crate::documents::{null_as_empty, Relation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Reference,
    Custom,
}

/// Target document of a reference link; only the slug is needed for routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedDocument {
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReference {
    pub relation_to: String,
    pub value: Relation<LinkedDocument>,
}

/// A CMS-managed link: either a custom URL or a reference to another document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(rename = "type", default)]
    pub kind: Option<LinkKind>,
    #[serde(default)]
    pub new_tab: Option<bool>,
    #[serde(default)]
    pub reference: Option<LinkReference>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl Link {
    /// Resolved target. Reference links to `pages` route at the root
    /// (`/about`); other collections are prefixed (`/products/iron`).
    #[must_use]
    pub fn href(&self) -> Option<String> {
        if self.kind == Some(LinkKind::Reference) {
            if let Some(reference) = &self.reference {
                let slug = reference
                    .value
                    .populated()
                    .and_then(|doc| doc.slug.as_deref());
                if let Some(slug) = slug {
                    return Some(if reference.relation_to == "pages" {
                        format!("/{slug}")
                    } else {
                        format!("/{}/{slug}", reference.relation_to)
                    });
                }
            }
        }
        self.url.clone().filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(default)]
    pub id: Option<String>,
    pub link: Link,
}

/// The `header` and `footer` globals share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationGlobal {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nav_items: Vec<NavItem>,
}

/// A nav entry ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub new_tab: bool,
    pub active: bool,
}

/// Whether a header link is highlighted for the current path. The home link
/// is never highlighted, since every path would contain it.
#[must_use]
pub fn is_nav_active(pathname: &str, url: &str) -> bool {
    !url.is_empty() && url != "/" && pathname.contains(url)
}

impl NavigationGlobal {
    /// Renderable links; items without a resolvable target are skipped.
    /// `pathname` enables active-state highlighting (header only).
    #[must_use]
    pub fn links(&self, pathname: Option<&str>) -> Vec<NavLink> {
        self.nav_items
            .iter()
            .filter_map(|item| {
                let href = item.link.href()?;
                let active = pathname.is_some_and(|path| {
                    item.link
                        .url
                        .as_deref()
                        .is_some_and(|url| is_nav_active(path, url))
                });
                Some(NavLink {
                    label: item.link.label.clone().unwrap_or_else(|| href.clone()),
                    new_tab: item.link.new_tab.unwrap_or(false),
                    active,
                    href,
                })
            })
            .collect()
    }
}
