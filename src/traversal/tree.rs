//! Binary trees and the usual ways of walking them. Every order comes in a
//! recursive and an iterative flavor that visit nodes identically.

use std::collections::VecDeque;

/// A binary tree node that owns its children outright.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }
}

impl<T> Drop for TreeNode<T> {
    // detach subtrees onto a work list so a tree that is one long branch
    // doesn't drop one stack frame per node
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Node, left subtree, right subtree.
pub fn preorder_recursive<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    fn walk<T: Clone>(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            out.push(node.value.clone());
            walk(node.left.as_deref(), out);
            walk(node.right.as_deref(), out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Left subtree, node, right subtree.
pub fn inorder_recursive<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    fn walk<T: Clone>(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            walk(node.left.as_deref(), out);
            out.push(node.value.clone());
            walk(node.right.as_deref(), out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Left subtree, right subtree, node.
pub fn postorder_recursive<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    fn walk<T: Clone>(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            walk(node.left.as_deref(), out);
            walk(node.right.as_deref(), out);
            out.push(node.value.clone());
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Same order as [`preorder_recursive`], driven by an explicit stack.
pub fn preorder_iterative<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(node.value.clone());

        // right goes in first so left comes out first
        if let Some(right) = node.right.as_deref() {
            stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            stack.push(left);
        }
    }

    out
}

/// Same order as [`inorder_recursive`]. Runs down the left spine stacking
/// ancestors, emits on the way back up, then does the same for the right
/// subtree.
pub fn inorder_iterative<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    let mut curr = root;

    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = node.left.as_deref();
        }

        match stack.pop() {
            Some(node) => {
                out.push(node.value.clone());
                curr = node.right.as_deref();
            }
            None => break,
        }
    }

    out
}

/// Same order as [`postorder_recursive`], using two stacks: the first walks
/// node, right, left; the second collects that order so it can be read back
/// reversed.
pub fn postorder_iterative<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();
    let mut collected: Vec<&TreeNode<T>> = Vec::new();

    while let Some(node) = stack.pop() {
        collected.push(node);

        if let Some(left) = node.left.as_deref() {
            stack.push(left);
        }
        if let Some(right) = node.right.as_deref() {
            stack.push(right);
        }
    }

    collected.iter().rev().map(|node| node.value.clone()).collect()
}

/// Breadth first, one `Vec` per depth. Each pass drains exactly the nodes that
/// were queued when the level started.
pub fn level_order<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<Vec<T>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode<T>> = root.into_iter().collect();

    while !queue.is_empty() {
        let generation = queue.len();
        let mut level = Vec::with_capacity(generation);

        for _ in 0..generation {
            if let Some(node) = queue.pop_front() {
                level.push(node.value.clone());

                if let Some(left) = node.left.as_deref() {
                    queue.push_back(left);
                }
                if let Some(right) = node.right.as_deref() {
                    queue.push_back(right);
                }
            }
        }

        levels.push(level);
    }

    levels
}

/// Same grouping as [`level_order`], built depth first by appending each node
/// to the level matching its depth.
pub fn level_order_recursive<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<Vec<T>> {
    fn walk<T: Clone>(node: Option<&TreeNode<T>>, depth: usize, levels: &mut Vec<Vec<T>>) {
        if let Some(node) = node {
            if levels.len() == depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node.value.clone());
            walk(node.left.as_deref(), depth + 1, levels);
            walk(node.right.as_deref(), depth + 1, levels);
        }
    }

    let mut levels = Vec::new();
    walk(root, 0, &mut levels);
    levels
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    //       1
    //      / \
    //     2   3
    //    / \   \
    //   4   5   6
    fn sample_tree() -> TreeNode<u32> {
        TreeNode::new(
            1,
            Some(TreeNode::new(2, Some(TreeNode::leaf(4)), Some(TreeNode::leaf(5)))),
            Some(TreeNode::new(3, None, Some(TreeNode::leaf(6)))),
        )
    }

    // a left-leaning chain 1 -> 2 -> 3 with a right child hung off 2
    fn lopsided_tree() -> TreeNode<u32> {
        TreeNode::new(
            1,
            Some(TreeNode::new(2, Some(TreeNode::leaf(3)), Some(TreeNode::leaf(7)))),
            None,
        )
    }

    #[test]
    fn sample_orders() {
        let tree = sample_tree();
        let root = Some(&tree);

        assert_eq!(vec![1, 2, 4, 5, 3, 6], preorder_recursive(root));
        assert_eq!(vec![4, 2, 5, 1, 3, 6], inorder_recursive(root));
        assert_eq!(vec![4, 5, 2, 6, 3, 1], postorder_recursive(root));
        assert_eq!(vec![vec![1], vec![2, 3], vec![4, 5, 6]], level_order(root));
    }

    #[rstest]
    #[case(sample_tree())]
    #[case(lopsided_tree())]
    #[case(TreeNode::leaf(9))]
    fn iterative_matches_recursive(#[case] tree: TreeNode<u32>) {
        let root = Some(&tree);

        assert_eq!(preorder_recursive(root), preorder_iterative(root));
        assert_eq!(inorder_recursive(root), inorder_iterative(root));
        assert_eq!(postorder_recursive(root), postorder_iterative(root));
        assert_eq!(level_order(root), level_order_recursive(root));
    }

    #[test]
    fn lopsided_orders() {
        let tree = lopsided_tree();
        let root = Some(&tree);

        assert_eq!(vec![1, 2, 3, 7], preorder_iterative(root));
        assert_eq!(vec![3, 2, 7, 1], inorder_iterative(root));
        assert_eq!(vec![3, 7, 2, 1], postorder_iterative(root));
        assert_eq!(vec![vec![1], vec![2], vec![3, 7]], level_order(root));
    }

    #[test]
    fn dropping_a_long_branch() {
        let mut tree = TreeNode::leaf(0u32);
        for value in 1..200_000 {
            tree = if value % 2 == 0 {
                TreeNode::new(value, Some(tree), None)
            } else {
                TreeNode::new(value, None, Some(tree))
            };
        }

        assert_eq!(199_999, tree.value);
        drop(tree);
    }

    #[test]
    fn empty_tree() {
        let root: Option<&TreeNode<u32>> = None;

        assert!(preorder_recursive(root).is_empty());
        assert!(preorder_iterative(root).is_empty());
        assert!(inorder_iterative(root).is_empty());
        assert!(postorder_iterative(root).is_empty());
        assert!(level_order(root).is_empty());
        assert!(level_order_recursive(root).is_empty());
    }
}
