//! Nested collection: an editable outline of line buffers.
//!
//! Nodes live in a slot map and refer to each other by [`NodeId`]. A node
//! owns its children's ids; the parent id is a plain back-reference used for
//! upward traversal only. The root is hidden: it never renders, never takes
//! the highlight and never collapses.
//!
//! Navigation walks the visible nodes in pre-order. Structural commands
//! (`add_child`, `add_sibling`) move the highlight by repeated single steps
//! rather than by jumping, so the highlight always travels through what is
//! on screen. Every walk is bounded by the node count.

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

use super::navigable::Step;
use crate::actor::InputEvent;
use crate::event::{CollectionId, Context, Event};
use crate::keymap::{Action, KeyBindings};
use crate::text::LineBuffer;

new_key_type! {
    /// Handle to a node in a [`NestedCollection`].
    pub struct NodeId;
}

/// One outline entry.
#[derive(Debug, Clone)]
pub struct Node {
    payload: LineBuffer,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    expanded: bool,
}

impl Node {
    fn new(parent: Option<NodeId>, payload: LineBuffer) -> Self {
        Self {
            payload,
            children: Vec::new(),
            parent,
            expanded: true,
        }
    }

    /// The node's text.
    pub const fn payload(&self) -> &LineBuffer {
        &self.payload
    }

    /// Child ids in display order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent id. `None` only for the root.
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Check if descendants are shown.
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// A tree of [`LineBuffer`]s with a highlighted node and edit mode.
#[derive(Debug, Clone)]
pub struct NestedCollection {
    id: CollectionId,
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    /// `None` only when the root has no children.
    highlighted: Option<NodeId>,
    editing: bool,
    width: Option<usize>,
    /// Columns of indentation per depth level.
    guide_width: usize,
    bindings: KeyBindings,
}

impl NestedCollection {
    /// Create an outline holding only the hidden root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(None, LineBuffer::new()));
        Self {
            id: CollectionId::next(),
            nodes,
            root,
            highlighted: None,
            editing: false,
            width: None,
            guide_width: 4,
            bindings: KeyBindings::default(),
        }
    }

    /// Replace the key bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Set the indentation per depth level.
    #[must_use]
    pub const fn with_guide_width(mut self, guide_width: usize) -> Self {
        self.guide_width = guide_width;
        self
    }

    /// Identity used in emitted events.
    pub const fn id(&self) -> CollectionId {
        self.id
    }

    /// The hidden root.
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes, root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Check if the outline has no nodes besides the root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// A node's text.
    pub fn payload(&self, id: NodeId) -> Option<&LineBuffer> {
        self.nodes.get(id).map(Node::payload)
    }

    /// A node's children. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// A node's parent. `None` for the root and unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(Node::parent)
    }

    /// Check if a node shows its descendants.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(Node::is_expanded)
    }

    /// Depth below the root: the root's children sit at depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len().saturating_sub(2)
    }

    /// The highlighted node.
    pub const fn highlighted(&self) -> Option<NodeId> {
        self.highlighted
    }

    /// Check if the highlighted node owns keystrokes.
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// The key bindings.
    pub const fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Columns of indentation per depth level.
    pub const fn guide_width(&self) -> usize {
        self.guide_width
    }

    /// The highlighted node's text.
    pub fn current(&self) -> Option<&LineBuffer> {
        self.highlighted.and_then(|id| self.payload(id))
    }

    /// The highlighted node's text, mutably.
    pub fn current_mut(&mut self) -> Option<&mut LineBuffer> {
        let id = self.highlighted?;
        self.nodes.get_mut(id).map(|node| &mut node.payload)
    }

    /// Visible nodes with their depth, in pre-order.
    ///
    /// Children of collapsed nodes are skipped.
    pub fn visible_rows(&self) -> Vec<(NodeId, usize)> {
        let mut rows = Vec::new();
        let mut stack: Vec<(NodeId, usize)> =
            self.children(self.root).iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            if rows.len() >= self.nodes.len() {
                break;
            }
            rows.push((id, depth));
            if let Some(node) = self.nodes.get(id) {
                if node.expanded {
                    stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
                }
            }
        }
        rows
    }

    /// Visible node ids in navigation order.
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        self.visible_rows().into_iter().map(|(id, _)| id).collect()
    }

    /// Append a child with `text` under `parent` without touching the
    /// highlight or edit mode. Highlights the new node if nothing was.
    pub fn push_child(&mut self, parent: NodeId, text: &str) -> Option<NodeId> {
        let id = self.attach(parent, LineBuffer::from_text(text))?;
        if self.highlighted.is_none() {
            self.highlighted = Some(id);
        }
        Some(id)
    }

    /// Move the highlight one visible node. Only legal while idle.
    pub fn navigate(&mut self, step: Step) -> bool {
        if self.editing {
            return false;
        }
        self.step(step)
    }

    /// Highlight the first top-level node. Only legal while idle.
    pub fn move_to_top(&mut self) -> bool {
        match self.children(self.root).first() {
            Some(&first) if !self.editing => self.set_highlight(first),
            _ => false,
        }
    }

    /// Highlight the last top-level node. Only legal while idle.
    pub fn move_to_bottom(&mut self) -> bool {
        match self.children(self.root).last() {
            Some(&last) if !self.editing => self.set_highlight(last),
            _ => false,
        }
    }

    /// Expand or collapse a node. The root cannot collapse.
    ///
    /// Collapsing an ancestor of the highlighted node pulls the highlight up
    /// to the collapsed node, so it never rests on a hidden node.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        if id == self.root {
            return false;
        }
        let changed = match self.nodes.get_mut(id) {
            Some(node) if node.expanded != expanded => {
                node.expanded = expanded;
                true
            }
            _ => false,
        };
        if changed && !expanded {
            let hidden = self
                .highlighted
                .is_some_and(|current| current != id && self.ancestors(current).contains(&id));
            if hidden {
                self.set_highlight(id);
            }
        }
        changed
    }

    /// Flip the highlighted node between expanded and collapsed.
    ///
    /// Collapsed descendants are hidden, not destroyed.
    pub fn toggle_expand(&mut self) -> bool {
        let Some(id) = self.highlighted else {
            return false;
        };
        let expanded = self.is_expanded(id);
        self.set_expanded(id, !expanded)
    }

    /// Walk up to the highlighted node's parent and toggle it.
    ///
    /// Top-level nodes have no visible parent; nothing happens for them.
    pub fn toggle_expand_parent(&mut self) -> bool {
        match self.highlighted.and_then(|id| self.parent(id)) {
            Some(parent) if parent != self.root => self.reach_parent() && self.toggle_expand(),
            _ => false,
        }
    }

    /// Step upwards until the highlighted node's parent is highlighted.
    pub fn reach_parent(&mut self) -> bool {
        match self.highlighted.and_then(|id| self.parent(id)) {
            Some(parent) if parent != self.root => self.reach(parent),
            _ => false,
        }
    }

    /// Step downwards to the highlighted node's last descendant.
    ///
    /// That is the last child's last child, and so on down to a leaf.
    pub fn reach_last_descendant(&mut self) -> bool {
        let Some(start) = self.highlighted else {
            return false;
        };
        let mut target = start;
        for _ in 0..self.nodes.len() {
            match self.children(target).last() {
                Some(&last) => target = last,
                None => break,
            }
        }
        target != start && self.reach(target)
    }

    /// Step through visible nodes until `target` is highlighted.
    ///
    /// Collapsed ancestors of `target` are expanded first so the walk can
    /// reach it. Gives up after visiting every visible node once.
    pub fn reach(&mut self, target: NodeId) -> bool {
        if target == self.root || !self.nodes.contains_key(target) {
            return false;
        }
        self.expand_ancestors(target);
        if self.highlighted.is_none() {
            return self.set_highlight(target) || self.highlighted == Some(target);
        }

        let bound = self.nodes.len();
        for _ in 0..bound {
            if self.highlighted == Some(target) {
                return true;
            }
            let order = self.visible_nodes();
            let goal = order.iter().position(|&id| id == target);
            let here = order.iter().position(|&id| Some(id) == self.highlighted);
            let step = match (here, goal) {
                (Some(here), Some(goal)) if here < goal => Step::Next,
                (Some(_), Some(_)) => Step::Previous,
                _ => break,
            };
            if !self.step(step) {
                break;
            }
        }
        self.highlighted == Some(target)
    }

    /// Add an empty child under the highlighted node and edit it.
    ///
    /// The node is expanded and the highlight walks down to the new child.
    /// With nothing highlighted the child goes under the root.
    pub fn add_child(&mut self) -> Option<NodeId> {
        let parent = self.highlighted.unwrap_or(self.root);
        self.add_child_of(parent)
    }

    /// Add an empty sibling after the highlighted node's last sibling and edit it.
    ///
    /// For top-level nodes this appends to the root. Otherwise the highlight
    /// walks up to the parent and a child is added there.
    pub fn add_sibling(&mut self) -> Option<NodeId> {
        match self.highlighted.and_then(|id| self.parent(id)) {
            Some(parent) if parent != self.root => {
                if !self.reach_parent() {
                    return None;
                }
                self.add_child_of(parent)
            }
            _ => self.add_child_of(self.root),
        }
    }

    /// Remove the highlighted node together with its descendants.
    ///
    /// The highlight moves to the next visible node after the removed
    /// subtree, else to the previous one. Returns the removed node's text.
    pub fn remove_current(&mut self) -> Option<LineBuffer> {
        let id = self.highlighted?;
        let subtree = self.subtree(id);
        let order = self.visible_nodes();
        let here = order.iter().position(|&visible| visible == id);
        let replacement = match here {
            Some(here) => order[here + 1..]
                .iter()
                .find(|visible| !subtree.contains(visible))
                .or_else(|| here.checked_sub(1).map(|prev| &order[prev])),
            None => order.iter().find(|visible| !subtree.contains(visible)),
        }
        .copied();

        if let Some(parent) = self.parent(id) {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children.retain(|&child| child != id);
            }
        }
        let mut removed = None;
        for node_id in subtree {
            let node = self.nodes.remove(node_id);
            if node_id == id {
                removed = node.map(|node| node.payload);
            }
        }

        self.editing = false;
        self.highlighted = replacement;
        if let Some(payload) = removed.as_mut() {
            payload.set_focused(false);
        }
        trace!(collection = ?self.id, remaining = self.len(), "node removed");
        removed
    }

    /// Start editing the highlighted node.
    pub fn enter_edit(&mut self) -> bool {
        if self.editing || self.highlighted.is_none() {
            return false;
        }
        self.editing = true;
        self.focus_current(true);
        trace!(collection = ?self.id, "enter edit");
        true
    }

    /// Stop editing and return to idle.
    pub fn exit_edit(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        self.focus_current(false);
        self.editing = false;
        trace!(collection = ?self.id, "exit edit");
        true
    }

    /// The selection event for the highlighted node, if idle.
    pub fn confirm(&self) -> Option<Event> {
        if self.editing {
            return None;
        }
        self.current().map(|payload| Event::ItemSelected {
            collection: self.id,
            value: payload.text(),
        })
    }

    /// Apply a new width; each node gets it minus its indentation.
    pub fn on_resize(&mut self, width: usize) {
        self.width = Some(width);
        let ids: Vec<NodeId> = self.nodes.keys().filter(|&id| id != self.root).collect();
        for id in ids {
            let node_width = self.width_at(self.depth(id));
            if let Some(node) = self.nodes.get_mut(id) {
                node.payload.on_resize(node_width);
            }
        }
    }

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent, cx: &mut Context<'_>) -> bool {
        if self.editing {
            if self.bindings.action_for_event(event) == Some(Action::Cancel) {
                return self.exit_edit();
            }
            return match self.current_mut() {
                Some(payload) => payload.handle_input(event, cx),
                None => false,
            };
        }

        let Some(action) = self.bindings.action_for_event(event) else {
            return false;
        };
        self.apply(action, cx)
    }

    /// Run an idle-mode action.
    pub fn apply(&mut self, action: Action, cx: &mut Context<'_>) -> bool {
        match action {
            Action::Down => {
                self.navigate(Step::Next);
            }
            Action::Up => {
                self.navigate(Step::Previous);
            }
            Action::Top => {
                self.move_to_top();
            }
            Action::Bottom => {
                self.move_to_bottom();
            }
            Action::Edit => {
                self.enter_edit();
            }
            Action::InsertBelow => {
                self.add_sibling();
            }
            Action::InsertAtEnd => {
                self.add_child();
            }
            Action::Remove => {
                self.remove_current();
            }
            Action::ToggleExpand => {
                self.toggle_expand();
            }
            Action::ToggleExpandParent => {
                self.toggle_expand_parent();
            }
            Action::Confirm => {
                if let Some(event) = self.confirm() {
                    cx.emit(event);
                }
            }
            _ => return false,
        }
        true
    }

    fn add_child_of(&mut self, parent: NodeId) -> Option<NodeId> {
        if self.editing {
            self.focus_current(false);
            self.editing = false;
        }
        let child = self.attach(parent, LineBuffer::new())?;
        if let Some(node) = self.nodes.get_mut(parent) {
            node.expanded = true;
        }

        let reached = if parent == self.root || self.highlighted.is_none() {
            self.reach(child)
        } else {
            self.reach(parent) && self.reach_last_descendant()
        };
        if !reached {
            return None;
        }
        self.enter_edit();
        trace!(collection = ?self.id, depth = self.depth(child), "node added");
        Some(child)
    }

    fn attach(&mut self, parent: NodeId, mut payload: LineBuffer) -> Option<NodeId> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        let depth = if parent == self.root { 0 } else { self.depth(parent) + 1 };
        if self.width.is_some() {
            payload.on_resize(self.width_at(depth));
        }
        let child = self.nodes.insert(Node::new(Some(parent), payload));
        self.nodes[parent].children.push(child);
        Some(child)
    }

    fn step(&mut self, step: Step) -> bool {
        let order = self.visible_nodes();
        let Some(current) = self.highlighted else {
            return order.first().is_some_and(|&first| self.set_highlight(first));
        };
        let Some(here) = order.iter().position(|&id| id == current) else {
            return false;
        };
        let target = match step {
            Step::Next => order.get(here + 1),
            Step::Previous => here.checked_sub(1).and_then(|prev| order.get(prev)),
        };
        target.is_some_and(|&id| self.set_highlight(id))
    }

    fn set_highlight(&mut self, id: NodeId) -> bool {
        if self.highlighted == Some(id) || id == self.root || !self.nodes.contains_key(id) {
            return false;
        }
        if self.editing {
            self.focus_current(false);
        }
        self.highlighted = Some(id);
        if self.editing {
            self.focus_current(true);
        }
        true
    }

    fn focus_current(&mut self, focused: bool) {
        if let Some(payload) = self.current_mut() {
            payload.set_focused(focused);
        }
    }

    /// `id` followed by its ancestors up to and including the root.
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if chain.len() >= self.nodes.len() || !self.nodes.contains_key(current) {
                break;
            }
            chain.push(current);
            cursor = self.parent(current);
        }
        chain
    }

    fn expand_ancestors(&mut self, id: NodeId) {
        for ancestor in self.ancestors(id).into_iter().skip(1) {
            if let Some(node) = self.nodes.get_mut(ancestor) {
                node.expanded = true;
            }
        }
    }

    /// `id` and all its descendants.
    fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if out.len() >= self.nodes.len() {
                break;
            }
            out.push(current);
            stack.extend(self.children(current).iter().copied());
        }
        out
    }

    fn width_at(&self, depth: usize) -> usize {
        self.width
            .map_or(usize::MAX, |width| width.saturating_sub(depth * self.guide_width))
            .max(1)
    }
}

impl Default for NestedCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyCode;

    /// fruit
    ///     apple
    ///     pear
    /// veg
    fn sample() -> (NestedCollection, [NodeId; 4]) {
        let mut tree = NestedCollection::new();
        let root = tree.root();
        let fruit = tree.push_child(root, "fruit").unwrap();
        let apple = tree.push_child(fruit, "apple").unwrap();
        let pear = tree.push_child(fruit, "pear").unwrap();
        let veg = tree.push_child(root, "veg").unwrap();
        (tree, [fruit, apple, pear, veg])
    }

    fn texts(tree: &NestedCollection) -> Vec<String> {
        tree.visible_nodes()
            .into_iter()
            .map(|id| tree.payload(id).unwrap().text())
            .collect()
    }

    #[test]
    fn test_preorder_navigation() {
        let (mut tree, [fruit, apple, pear, veg]) = sample();
        assert_eq!(tree.highlighted(), Some(fruit));

        let mut seen = Vec::new();
        while tree.navigate(Step::Next) {
            seen.push(tree.highlighted().unwrap());
        }
        assert_eq!(seen, vec![apple, pear, veg]);

        tree.navigate(Step::Previous);
        assert_eq!(tree.highlighted(), Some(pear));
    }

    #[test]
    fn test_up_never_reaches_root() {
        let (mut tree, [fruit, ..]) = sample();
        assert!(!tree.navigate(Step::Previous));
        assert_eq!(tree.highlighted(), Some(fruit));
    }

    #[test]
    fn test_collapse_hides_but_keeps() {
        let (mut tree, [fruit, _, _, veg]) = sample();
        assert!(tree.toggle_expand());
        assert_eq!(texts(&tree), vec!["fruit", "veg"]);
        assert_eq!(tree.len(), 4);

        tree.navigate(Step::Next);
        assert_eq!(tree.highlighted(), Some(veg));

        tree.reach(fruit);
        tree.toggle_expand();
        assert_eq!(texts(&tree), vec!["fruit", "apple", "pear", "veg"]);
    }

    #[test]
    fn test_add_child_expands_and_edits() {
        let (mut tree, [fruit, ..]) = sample();
        tree.toggle_expand();

        let child = tree.add_child().unwrap();
        assert!(tree.is_expanded(fruit));
        assert_eq!(tree.highlighted(), Some(child));
        assert_eq!(tree.parent(child), Some(fruit));
        assert_eq!(tree.children(fruit).last(), Some(&child));
        assert!(tree.is_editing());
        assert!(tree.current().unwrap().is_focused());
        assert_eq!(tree.depth(child), 1);
    }

    #[test]
    fn test_add_sibling_at_top_level() {
        let mut tree = NestedCollection::new();
        let only = tree.push_child(tree.root(), "only").unwrap();

        let sibling = tree.add_sibling().unwrap();
        assert_eq!(tree.children(tree.root()), &[only, sibling]);
        assert_eq!(tree.parent(sibling), Some(tree.root()));
        assert_eq!(tree.highlighted(), Some(sibling));
        assert!(tree.is_editing());
    }

    #[test]
    fn test_add_sibling_of_nested_node() {
        let (mut tree, [fruit, apple, pear, _]) = sample();
        tree.reach(apple);

        let sibling = tree.add_sibling().unwrap();
        assert_eq!(tree.children(fruit), &[apple, pear, sibling]);
        assert_eq!(tree.highlighted(), Some(sibling));
    }

    #[test]
    fn test_add_on_empty_tree() {
        let mut tree = NestedCollection::new();
        let first = tree.add_child().unwrap();
        assert_eq!(tree.children(tree.root()), &[first]);
        assert_eq!(tree.highlighted(), Some(first));
        assert!(tree.is_editing());
    }

    #[test]
    fn test_reach_expands_collapsed_ancestors() {
        let (mut tree, [fruit, _, pear, veg]) = sample();
        tree.set_expanded(fruit, false);
        tree.reach(veg);

        assert!(tree.reach(pear));
        assert!(tree.is_expanded(fruit));
    }

    #[test]
    fn test_reach_helpers() {
        let (mut tree, [fruit, apple, pear, veg]) = sample();
        assert!(tree.reach_last_descendant());
        assert_eq!(tree.highlighted(), Some(pear));
        assert!(!tree.reach_last_descendant());

        tree.reach(apple);
        assert!(tree.reach_parent());
        assert_eq!(tree.highlighted(), Some(fruit));

        tree.reach(veg);
        assert!(!tree.reach_parent());
        assert_eq!(tree.highlighted(), Some(veg));
    }

    #[test]
    fn test_root_never_collapses() {
        let mut tree = NestedCollection::new();
        let root = tree.root();
        assert!(!tree.set_expanded(root, false));
        assert!(tree.is_expanded(root));
    }

    #[test]
    fn test_collapsing_ancestor_pulls_highlight_up() {
        let (mut tree, [fruit, apple, _, veg]) = sample();
        tree.reach(apple);
        assert!(tree.set_expanded(fruit, false));
        assert_eq!(tree.highlighted(), Some(fruit));

        assert!(tree.navigate(Step::Next));
        assert_eq!(tree.highlighted(), Some(veg));
        assert!(tree.navigate(Step::Previous));
        assert_eq!(tree.highlighted(), Some(fruit));

        let sibling = tree.add_sibling().unwrap();
        assert_eq!(tree.highlighted(), Some(sibling));
        assert_eq!(tree.parent(sibling), Some(tree.root()));
        tree.exit_edit();

        tree.remove_current();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.highlighted(), Some(veg));

        tree.reach(fruit);
        tree.remove_current();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.highlighted(), Some(veg));
    }

    #[test]
    fn test_toggle_expand_parent() {
        let (mut tree, [fruit, apple, ..]) = sample();
        tree.reach(apple);
        assert!(tree.toggle_expand_parent());
        assert_eq!(tree.highlighted(), Some(fruit));
        assert!(!tree.is_expanded(fruit));

        // top level: nothing to do
        assert!(!tree.toggle_expand_parent());
    }

    #[test]
    fn test_remove_subtree() {
        let (mut tree, [fruit, _, _, veg]) = sample();
        let removed = tree.remove_current().unwrap();
        assert_eq!(removed.text(), "fruit");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.highlighted(), Some(veg));
        assert!(tree.node(fruit).is_none());

        tree.remove_current();
        assert!(tree.is_empty());
        assert_eq!(tree.highlighted(), None);
        assert!(tree.remove_current().is_none());
    }

    #[test]
    fn test_remove_last_falls_back_to_previous() {
        let (mut tree, [_, _, pear, veg]) = sample();
        tree.reach(veg);
        tree.remove_current();
        assert_eq!(tree.highlighted(), Some(pear));
    }

    #[test]
    fn test_resize_indents_by_depth() {
        let (mut tree, [fruit, apple, ..]) = sample();
        tree.on_resize(20);
        assert_eq!(tree.payload(fruit).unwrap().width(), Some(20));
        assert_eq!(tree.payload(apple).unwrap().width(), Some(16));

        tree.reach(apple);
        let child = tree.add_child().unwrap();
        assert_eq!(tree.payload(child).unwrap().width(), Some(12));
    }

    #[test]
    fn test_keys() {
        let (mut tree, [fruit, apple, ..]) = sample();
        let mut cx = Context::detached();

        tree.handle_input(&InputEvent::char('j'), &mut cx);
        assert_eq!(tree.highlighted(), Some(apple));

        tree.handle_input(&InputEvent::char('A'), &mut cx);
        assert!(tree.is_editing());
        tree.handle_input(&InputEvent::char('x'), &mut cx);
        tree.handle_input(&InputEvent::key(KeyCode::Esc), &mut cx);
        assert!(!tree.is_editing());
        assert_eq!(tree.current().unwrap().text(), "x");
        assert_eq!(tree.depth(tree.highlighted().unwrap()), 2);

        tree.handle_input(&InputEvent::char('g'), &mut cx);
        assert_eq!(tree.highlighted(), Some(fruit));

        cx.take_events();
        tree.handle_input(&InputEvent::key(KeyCode::Enter), &mut cx);
        assert_eq!(
            cx.take_events(),
            vec![Event::ItemSelected {
                collection: tree.id(),
                value: "fruit".into(),
            }]
        );
    }
}
