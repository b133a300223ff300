//! An unbalanced Binary Search Tree over keys only. Every `Node` owns its children outright and
//! keeps no pointer back to its parent, so the operations that need ancestry (removal and
//! successor lookup) carry it along while descending.
//!
//! The tree is configured with a `(min, max)` pair when it is built. These bounds are not limits on
//! what can be inserted; they are the outermost interval used by
//! [`OrderedTree::is_binary_search_tree`].
//!
//! # Examples
//!
//! ```
//! use ordered::tree::OrderedTree;
//!
//! let mut tree = OrderedTree::with_keys(i32::MIN, i32::MAX, [1, 10, 33, 41, 5, -1, 9, 17]);
//!
//! assert_eq!(tree.height(), Some(4));
//! assert_eq!(tree.min(), Some(&-1));
//! assert_eq!(tree.max(), Some(&41));
//! assert_eq!(tree.successor(&33), Some(&41));
//!
//! // Inserting a key that is already present changes nothing.
//! tree.insert(10);
//! assert_eq!(tree.node_count(), 8);
//!
//! assert!(tree.remove(&10));
//! assert!(!tree.contains(&10));
//! assert!(!tree.remove(&111));
//! assert!(tree.is_binary_search_tree());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// A Binary Search Tree holding distinct keys in ascending order, along with the bounds it is
/// validated against.
pub struct OrderedTree<K> {
    root: Tree<K>,
    min: K,
    max: K,
}

/// A (possibly empty) subtree.
enum Tree<K> {
    /// A marker for the empty slot at the bottom of a subtree.
    Leaf,
    Node(Box<Node<K>>),
}

struct Node<K> {
    key: K,
    left: Tree<K>,
    right: Tree<K>,
}

impl<K> OrderedTree<K> {
    /// Generates a new, empty `OrderedTree` that will be validated against `(min, max)`.
    pub fn new(min: K, max: K) -> Self {
        Self {
            root: Tree::Leaf,
            min,
            max,
        }
    }

    /// Generates a tree with the given bounds and inserts each of `keys` in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::OrderedTree;
    ///
    /// let tree = OrderedTree::with_keys(0, 100, [50, 25, 75, 25]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![25, 50, 75]);
    /// ```
    pub fn with_keys<I>(min: K, max: K, keys: I) -> Self
    where
        K: Ord,
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new(min, max);
        tree.extend(keys);
        tree
    }

    /// The `(min, max)` pair this tree was configured with.
    pub fn bounds(&self) -> (&K, &K) {
        (&self.min, &self.max)
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Inserts `key` at the empty slot found by descending from the root. A key that is already
    /// in the tree is silently ignored.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root.insert(key);
    }

    /// Removes `key` from the tree, returning whether it was present. When it isn't, the tree is
    /// left untouched.
    ///
    /// A node with two children is not unlinked. Instead it takes over the key of its in-order
    /// successor (the leftmost key of its right subtree) and that successor is removed from the
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_keys(0, 10, [5, 3, 8, 7, 9]);
    ///
    /// assert!(tree.remove(&8));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 5, 7, 9]);
    /// assert!(!tree.remove(&8));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        self.root.remove(key)
    }

    /// Counts the nodes in the tree. This walks every node.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// The number of nodes on the longest path from the root to a leaf, so a lone root has a
    /// height of 1. An empty tree has no height at all and returns `None`.
    pub fn height(&self) -> Option<usize> {
        match self.root.height() {
            0 => None,
            height => Some(height),
        }
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root.min()
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.node()?;
        while let Some(right) = node.right.node() {
            node = right;
        }
        Some(&node.key)
    }

    /// Whether `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.root.find(key).is_some()
    }

    /// Looks up the successor of `key`: the minimum of its right subtree if it has one, otherwise
    /// the key of its parent. Returns `None` if `key` isn't in the tree or if it is a root without
    /// a right subtree.
    ///
    /// The parent rule only yields the next larger key when `key` sits in its parent's left
    /// subtree. For a right child without a right subtree (the maximum, for example) the parent is
    /// *smaller*. Use [`OrderedTree::next_greater`] for the strict in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::OrderedTree;
    ///
    /// let tree = OrderedTree::with_keys(0, 10, [5, 3, 8]);
    ///
    /// assert_eq!(tree.successor(&5), Some(&8));
    /// assert_eq!(tree.successor(&3), Some(&5));
    /// // 8 is the maximum and a right child, so this is its parent.
    /// assert_eq!(tree.successor(&8), Some(&5));
    /// assert_eq!(tree.successor(&4), None);
    /// ```
    pub fn successor(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut parent = None;
        let mut current = &self.root;
        while let Tree::Node(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = &node.left,
                Ordering::Equal => return node.right.min().or(parent),
                Ordering::Greater => current = &node.right,
            }
            parent = Some(&node.key);
        }

        None
    }

    /// The smallest key in the tree that is strictly greater than `key`. Unlike
    /// [`OrderedTree::successor`], `key` itself doesn't need to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::OrderedTree;
    ///
    /// let tree = OrderedTree::with_keys(0, 10, [5, 3, 8]);
    ///
    /// assert_eq!(tree.next_greater(&3), Some(&5));
    /// assert_eq!(tree.next_greater(&6), Some(&8));
    /// assert_eq!(tree.next_greater(&8), None);
    /// ```
    pub fn next_greater(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut candidate = None;
        let mut current = &self.root;
        while let Tree::Node(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => {
                    candidate = Some(&node.key);
                    current = &node.left;
                }
                Ordering::Equal | Ordering::Greater => current = &node.right,
            }
        }

        candidate
    }

    /// Checks that every key lies strictly between the configured `(min, max)` bounds as they are
    /// narrowed by the keys of its ancestors: keys in a left subtree must be below their ancestor,
    /// keys in a right subtree above it.
    ///
    /// Because the outermost interval is the configured one and not the limits of `K`, a tree that
    /// is correctly ordered can still fail this check if it holds a key outside (or equal to) the
    /// configured bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::OrderedTree;
    ///
    /// let tree = OrderedTree::with_keys(0, 100, [50, 25, 75]);
    /// assert!(tree.is_binary_search_tree());
    ///
    /// let tree = OrderedTree::with_keys(0, 100, [50, 25, 175]);
    /// assert!(!tree.is_binary_search_tree());
    /// ```
    pub fn is_binary_search_tree(&self) -> bool
    where
        K: Ord,
    {
        self.root.is_within(&self.min, &self.max)
    }

    /// Calls `f` with every key in ascending order.
    pub fn for_each_in_order<F>(&self, f: F)
    where
        F: FnMut(&K),
    {
        self.iter().for_each(f);
    }

    /// Prints every key on its own line, smallest first.
    pub fn print_nodes(&self)
    where
        K: fmt::Display,
    {
        self.for_each_in_order(|key| println!("{key}"));
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root)
    }
}

impl<K> Extend<K> for OrderedTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Clone for OrderedTree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            min: self.min.clone(),
            max: self.max.clone(),
        }
    }
}

impl<K> fmt::Debug for OrderedTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> Drop for OrderedTree<K> {
    /// Tears the tree down one node at a time. Letting each `Box<Node>` drop its children would
    /// recurse once per level, and a tree fed sorted keys is as deep as it is large.
    fn drop(&mut self) {
        let mut pending = vec![mem::take(&mut self.root)];
        while let Some(tree) = pending.pop() {
            if let Tree::Node(mut node) = tree {
                pending.push(mem::take(&mut node.left));
                pending.push(mem::take(&mut node.right));
            }
        }
    }
}

/// A step of the post-order walk that clones a `Tree` without recursing.
enum CloneStep<'a, K> {
    /// Clone this subtree: both children first, then the node itself.
    Enter(&'a Tree<K>),
    /// Both children of this node are on top of the finished stack, right above left.
    Build(&'a Node<K>),
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let mut steps = vec![CloneStep::Enter(self)];
        let mut finished: Vec<Self> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Enter(Self::Leaf) => finished.push(Self::Leaf),
                CloneStep::Enter(Self::Node(node)) => {
                    steps.push(CloneStep::Build(&**node));
                    steps.push(CloneStep::Enter(&node.right));
                    steps.push(CloneStep::Enter(&node.left));
                }
                CloneStep::Build(node) => {
                    let right = finished.pop().unwrap_or_default();
                    let left = finished.pop().unwrap_or_default();
                    finished.push(Self::Node(Box::new(Node {
                        key: node.key.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        finished.pop().unwrap_or_default()
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::Leaf
    }
}

impl<K> Tree<K> {
    fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    fn node(&self) -> Option<&Node<K>> {
        match self {
            Self::Leaf => None,
            Self::Node(node) => Some(node),
        }
    }

    /// Walks down the slots to the empty one `key` belongs in. Every walk here is a loop: the
    /// tree isn't balanced, so its height can be as large as its node count.
    fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut slot = self;
        loop {
            match slot {
                Self::Leaf => {
                    *slot = Self::Node(Box::new(Node {
                        key,
                        left: Self::Leaf,
                        right: Self::Leaf,
                    }));
                    return;
                }
                Self::Node(node) => {
                    slot = match key.cmp(&node.key) {
                        Ordering::Less => &mut node.left,
                        Ordering::Equal => return,
                        Ordering::Greater => &mut node.right,
                    }
                }
            }
        }
    }

    /// The slot being walked is the parent's link to the current node, which is all the parent
    /// context removal needs.
    fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut slot = self;
        loop {
            let ordering = match &*slot {
                Self::Leaf => return false,
                Self::Node(node) => key.cmp(&node.key),
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Self::Node(node) = slot else {
                return false;
            };
            slot = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        slot.unlink();

        // In debug builds, after restructuring, assert that the spliced node still sits between
        // its children.
        if cfg!(debug_assertions) {
            assert!(slot.is_locally_ordered());
        }
        true
    }

    /// Removes the root of this subtree: a childless node clears the slot and a node with one
    /// child hands the slot to that child. A node with two children takes over its in-order
    /// successor's key instead, and the successor is removed from the right subtree.
    fn unlink(&mut self) {
        let Self::Node(node) = self else {
            return;
        };

        match (node.left.is_leaf(), node.right.is_leaf()) {
            (true, true) => *self = Self::Leaf,
            (true, false) => {
                let right = mem::take(&mut node.right);
                *self = right;
            }
            (false, true) => {
                let left = mem::take(&mut node.left);
                *self = left;
            }
            (false, false) => {
                if let Some(successor) = node.right.take_min() {
                    node.key = successor;
                }
            }
        }
    }

    /// Unlinks the leftmost node of this subtree and returns its key. Its right child (if any)
    /// takes its place.
    fn take_min(&mut self) -> Option<K> {
        let mut slot = self;
        loop {
            let has_left = match &*slot {
                Self::Leaf => return None,
                Self::Node(node) => !node.left.is_leaf(),
            };
            if !has_left {
                break;
            }
            let Self::Node(node) = slot else {
                return None;
            };
            slot = &mut node.left;
        }

        let right = match slot {
            Self::Leaf => return None,
            Self::Node(node) => mem::take(&mut node.right),
        };
        match mem::replace(slot, right) {
            Self::Leaf => None,
            Self::Node(min) => Some(min.key),
        }
    }

    fn is_locally_ordered(&self) -> bool
    where
        K: Ord,
    {
        let Self::Node(node) = self else {
            return true;
        };
        node.left.node().map_or(true, |left| left.key < node.key)
            && node.right.node().map_or(true, |right| node.key < right.key)
    }

    fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self;
        while let Self::Node(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(node),
                Ordering::Greater => &node.right,
            };
        }

        None
    }

    fn min(&self) -> Option<&K> {
        let mut node = self.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(&node.key)
    }

    /// Gets the height of this subtree. A `Leaf` has a height of 0.
    fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1)];
        while let Some((tree, depth)) = pending.pop() {
            if let Self::Node(node) = tree {
                height = height.max(depth);
                pending.push((&node.left, depth + 1));
                pending.push((&node.right, depth + 1));
            }
        }

        height
    }

    fn is_within(&self, lower: &K, upper: &K) -> bool
    where
        K: Ord,
    {
        let mut pending = vec![(self, lower, upper)];
        while let Some((tree, lower, upper)) = pending.pop() {
            if let Self::Node(node) = tree {
                if !(*lower < node.key && node.key < *upper) {
                    return false;
                }
                pending.push((&node.left, lower, &node.key));
                pending.push((&node.right, &node.key, upper));
            }
        }

        true
    }
}

/// An ascending iterator over the keys of an [`OrderedTree`], created by [`OrderedTree::iter`].
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet, deepest last. Each one's left subtree has already
    /// been pushed.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: &'a Tree<K>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<K>) {
        while let Tree::Node(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}
