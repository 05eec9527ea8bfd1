//! Comment tree

use super::fragment::CommentFragment;
use super::model::{CommentNode, CommentSeed};
use crate::error::{RecipePageError, Result};
use crate::types::{AuthorHandle, CommentId};
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info};

/// The page's comments: top-level list plus nested replies
#[derive(Debug, Clone, Default)]
pub struct CommentTree {
    /// All comments by ID
    nodes: HashMap<CommentId, CommentNode>,
    /// Top-level comments in display order
    roots: Vec<CommentId>,
}

impl CommentTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from the comments present at page load
    pub fn from_seeds(seeds: Vec<CommentSeed>) -> Result<Self> {
        let mut tree = Self::new();
        for seed in seeds {
            let id = seed.id.clone();
            tree.add_seed(seed, None)?;
            tree.roots.push(id);
        }
        debug!("Comment tree built with {} comments", tree.len());
        Ok(tree)
    }

    fn add_seed(&mut self, seed: CommentSeed, parent: Option<CommentId>) -> Result<()> {
        if self.nodes.contains_key(&seed.id) {
            return Err(RecipePageError::DuplicateComment(seed.id.to_string()));
        }

        let children: Vec<CommentId> = seed.replies.iter().map(|r| r.id.clone()).collect();
        self.nodes.insert(
            seed.id.clone(),
            CommentNode {
                id: seed.id.clone(),
                author: Some(seed.author),
                markup: seed.html,
                parent,
                children,
                inserted_at: None,
            },
        );

        for reply in seed.replies {
            self.add_seed(reply, Some(seed.id.clone()))?;
        }
        Ok(())
    }

    fn node_from_fragment(
        &self,
        fragment: CommentFragment,
        parent: Option<CommentId>,
    ) -> Result<CommentNode> {
        if self.nodes.contains_key(&fragment.id) {
            return Err(RecipePageError::DuplicateComment(fragment.id.to_string()));
        }
        Ok(CommentNode {
            id: fragment.id,
            author: fragment.author,
            markup: fragment.markup,
            parent,
            children: Vec::new(),
            inserted_at: Some(Utc::now()),
        })
    }

    /// Insert a comment at the head of the top-level list
    pub fn prepend_top_level(&mut self, fragment: CommentFragment) -> Result<CommentId> {
        let node = self.node_from_fragment(fragment, None)?;
        let id = node.id.clone();

        self.nodes.insert(id.clone(), node);
        self.roots.insert(0, id.clone());
        info!("Inserted top-level comment {}", id);
        Ok(id)
    }

    /// Append a comment to the replies of `parent`
    pub fn append_reply(&mut self, parent: &CommentId, fragment: CommentFragment) -> Result<CommentId> {
        if !self.nodes.contains_key(parent) {
            return Err(RecipePageError::CommentNotFound(parent.to_string()));
        }
        let node = self.node_from_fragment(fragment, Some(parent.clone()))?;
        let id = node.id.clone();

        self.nodes.insert(id.clone(), node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id.clone());
        }
        info!("Inserted reply {} under comment {}", id, parent);
        Ok(id)
    }

    /// Remove a comment and all of its replies
    pub fn remove(&mut self, id: &CommentId) -> Result<CommentNode> {
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| RecipePageError::CommentNotFound(id.to_string()))?;

        match &node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(parent) {
                    parent_node.children.retain(|c| c != id);
                }
            }
            None => self.roots.retain(|r| r != id),
        }

        let mut pending = node.children.clone();
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.nodes.remove(&child) {
                pending.extend(removed.children);
            }
        }

        debug!("Removed comment {} and its replies", id);
        Ok(node)
    }

    /// Get a comment by ID
    pub fn get(&self, id: &CommentId) -> Option<&CommentNode> {
        self.nodes.get(id)
    }

    /// Check if a comment is on the page
    pub fn contains(&self, id: &CommentId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Author of a comment
    pub fn author_of(&self, id: &CommentId) -> Option<&AuthorHandle> {
        self.nodes.get(id).and_then(|n| n.author.as_ref())
    }

    /// Top-level comments in display order
    pub fn roots(&self) -> &[CommentId] {
        &self.roots
    }

    /// Replies of a comment in display order
    pub fn children(&self, id: &CommentId) -> &[CommentId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a reply
    pub fn parent(&self, id: &CommentId) -> Option<&CommentId> {
        self.nodes.get(id).and_then(|n| n.parent.as_ref())
    }

    /// Nesting depth: 0 for top-level comments, +1 per ancestor
    pub fn depth(&self, id: &CommentId) -> Option<usize> {
        let mut node = self.nodes.get(id)?;
        let mut depth = 0;
        while let Some(parent) = &node.parent {
            node = self.nodes.get(parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Whether a comment is a reply
    pub fn is_reply(&self, id: &CommentId) -> bool {
        self.parent(id).is_some()
    }

    /// Depth-first pre-order walk in display order
    pub fn walk(&self) -> Vec<(usize, &CommentNode)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, &CommentId)> = self.roots.iter().rev().map(|id| (0, id)).collect();

        while let Some((depth, id)) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                out.push((depth, node));
                stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
            }
        }
        out
    }

    /// Total comment count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
