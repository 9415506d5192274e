//! One-level navigation tree assembled from flat link rows.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::NavLinkRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavNode {
    pub link: NavLinkRecord,
    pub children: Vec<NavLinkRecord>,
}

impl NavNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Build the public navigation tree from rows sorted by `sort_order`.
///
/// Only visible links appear. A child whose parent is hidden or missing is
/// dropped rather than promoted; nesting is a single level deep, so a
/// parent id pointing at another child is treated as missing.
pub fn build_nav_tree(links: Vec<NavLinkRecord>) -> Vec<NavNode> {
    let mut roots: Vec<NavNode> = Vec::new();
    let mut children: Vec<NavLinkRecord> = Vec::new();

    for link in links {
        if !link.is_visible {
            continue;
        }
        match link.parent_id {
            None => roots.push(NavNode {
                link,
                children: Vec::new(),
            }),
            Some(_) => children.push(link),
        }
    }

    for child in children {
        let parent_id = child.parent_id.expect("partitioned on parent_id");
        if let Some(parent) = roots.iter_mut().find(|node| node.link.id == parent_id) {
            parent.children.push(child);
        }
    }

    roots
}

/// Ids of every link that would survive deleting `id`: the link itself and
/// its direct children go together.
pub fn cascade_delete_ids(links: &[NavLinkRecord], id: Uuid) -> Vec<Uuid> {
    let mut ids = vec![id];
    ids.extend(
        links
            .iter()
            .filter(|link| link.parent_id == Some(id))
            .map(|link| link.id),
    );
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, sort_order: i32, parent_id: Option<Uuid>) -> NavLinkRecord {
        NavLinkRecord {
            id: Uuid::new_v4(),
            label: label.to_string(),
            url: format!("/{label}"),
            parent_id,
            sort_order,
            is_visible: true,
            open_new_tab: false,
        }
    }

    #[test]
    fn children_attach_to_their_parent_in_order() {
        let parent = link("services", 1, None);
        let parent_id = parent.id;
        let rows = vec![
            parent,
            link("web", 2, Some(parent_id)),
            link("about", 3, None),
            link("seo", 4, Some(parent_id)),
        ];
        let tree = build_nav_tree(rows);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[0].children[0].label, "web");
        assert_eq!(tree[0].children[1].label, "seo");
        assert!(!tree[1].has_children());
    }

    #[test]
    fn hidden_links_and_orphans_are_dropped() {
        let mut hidden_parent = link("hidden", 1, None);
        hidden_parent.is_visible = false;
        let hidden_id = hidden_parent.id;
        let rows = vec![
            hidden_parent,
            link("child", 2, Some(hidden_id)),
            link("orphan", 3, Some(Uuid::new_v4())),
            link("home", 4, None),
        ];
        let tree = build_nav_tree(rows);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].link.label, "home");
    }

    #[test]
    fn cascade_collects_direct_children() {
        let parent = link("services", 1, None);
        let parent_id = parent.id;
        let child = link("web", 2, Some(parent_id));
        let child_id = child.id;
        let unrelated = link("about", 3, None);
        let rows = vec![parent, child, unrelated];
        let ids = cascade_delete_ids(&rows, parent_id);
        assert_eq!(ids, vec![parent_id, child_id]);
    }
}
