//! Binary tree traversals: bottom-up level order, zigzag level order and
//! maximum width.

use std::collections::VecDeque;

use crate::error::{Result, ScratchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }
}

/// Build a tree from an array in heap layout: the children of slot `i` live
/// in slots `2i + 1` and `2i + 2`. `None` slots are absent nodes, and any
/// slot below an absent node is ignored.
pub fn from_level_order(values: &[Option<i32>]) -> Option<Box<TreeNode>> {
    fn build(values: &[Option<i32>], i: usize) -> Option<Box<TreeNode>> {
        let val = (*values.get(i)?)?;
        Some(Box::new(TreeNode {
            val,
            left: build(values, 2 * i + 1),
            right: build(values, 2 * i + 2),
        }))
    }
    build(values, 0)
}

/// Node values level by level, deepest level first, each level left to right.
pub fn level_order_bottom(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = level_order(root);
    levels.reverse();
    levels
}

/// Node values level by level, alternating direction: the root level left
/// to right, the next right to left, and so on.
pub fn zigzag_level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = level_order(root);
    for level in levels.iter_mut().skip(1).step_by(2) {
        level.reverse();
    }
    levels
}

/// Widest level of the tree, counting the absent positions between the
/// leftmost and rightmost nodes of that level as if the tree were complete.
///
/// Positions are rebased on each level's leftmost node, so lopsided trees of
/// any depth are fine. A tree with nodes on both outer edges more than 63
/// levels down is wider than `u64` and is rejected.
pub fn width_of_binary_tree(root: Option<&TreeNode>) -> Result<u64> {
    let Some(root) = root else {
        return Ok(0);
    };

    let mut widest = 0;
    let mut level: Vec<(&TreeNode, u64)> = vec![(root, 0)];
    while let (Some(&(_, first)), Some(&(_, last))) = (level.first(), level.last()) {
        let width = (last - first).checked_add(1).ok_or_else(too_wide)?;
        widest = widest.max(width);

        let mut next = Vec::with_capacity(level.len() * 2);
        for &(node, position) in &level {
            let left_slot = (position - first).checked_mul(2);
            if let Some(left) = node.left.as_deref() {
                next.push((left, left_slot.ok_or_else(too_wide)?));
            }
            if let Some(right) = node.right.as_deref() {
                let slot = left_slot.and_then(|p| p.checked_add(1));
                next.push((right, slot.ok_or_else(too_wide)?));
            }
        }
        level = next;
    }

    Ok(widest)
}

fn too_wide() -> anyhow::Error {
    ScratchError::ValidationError("tree width exceeds u64".into()).into()
}

fn level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<(&TreeNode, usize)> = root.map(|r| (r, 0)).into_iter().collect();

    while let Some((node, depth)) = queue.pop_front() {
        if levels.len() == depth {
            levels.push(Vec::new());
        }
        levels[depth].push(node.val);
        if let Some(left) = node.left.as_deref() {
            queue.push_back((left, depth + 1));
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back((right, depth + 1));
        }
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(values: &[Option<i32>]) -> Option<Box<TreeNode>> {
        from_level_order(values)
    }

    #[test]
    fn test_from_level_order_heap_layout() {
        let root = tree(&[Some(1), Some(2), None, Some(4), Some(5), Some(6)]).unwrap();
        assert_eq!(root.val, 1);
        let left = root.left.as_deref().unwrap();
        assert_eq!(left.val, 2);
        assert_eq!(left.left.as_deref().unwrap().val, 4);
        assert_eq!(left.right.as_deref().unwrap().val, 5);
        // slot 5 hangs below the absent slot 2
        assert!(root.right.is_none());
    }

    #[test]
    fn test_empty_tree() {
        assert!(tree(&[]).is_none());
        assert!(tree(&[None, Some(1)]).is_none());
        assert!(level_order_bottom(None).is_empty());
        assert!(zigzag_level_order(None).is_empty());
        assert_eq!(width_of_binary_tree(None).unwrap(), 0);
    }

    #[test]
    fn test_level_order_bottom() {
        let root = tree(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(
            level_order_bottom(root.as_deref()),
            vec![vec![15, 7], vec![9, 20], vec![3]]
        );
    }

    #[test]
    fn test_zigzag_level_order() {
        let root = tree(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(
            zigzag_level_order(root.as_deref()),
            vec![vec![3], vec![20, 9], vec![15, 7]]
        );

        let root = tree(&[
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            Some(6),
            Some(7),
        ]);
        assert_eq!(
            zigzag_level_order(root.as_deref()),
            vec![vec![1], vec![3, 2], vec![4, 5, 6, 7]]
        );
    }

    #[test]
    fn test_width_counts_gaps() {
        let root = tree(&[Some(1), Some(3), Some(2), Some(5), Some(3), None, Some(9)]);
        assert_eq!(width_of_binary_tree(root.as_deref()).unwrap(), 4);

        let root = tree(&[Some(1), Some(3), None, Some(5), Some(3)]);
        assert_eq!(width_of_binary_tree(root.as_deref()).unwrap(), 2);

        let root = tree(&[Some(1)]);
        assert_eq!(width_of_binary_tree(root.as_deref()).unwrap(), 1);
    }

    #[test]
    fn test_width_of_deep_chain() {
        // A 100-deep right-leaning chain: absolute positions would reach
        // 2^100 without rebasing.
        let mut node = TreeNode::new(0);
        for val in 1..100 {
            node = TreeNode {
                val,
                left: None,
                right: Some(Box::new(node)),
            };
        }
        assert_eq!(width_of_binary_tree(Some(&node)).unwrap(), 1);
    }

    fn chain(depth: usize, leftwards: bool) -> Option<Box<TreeNode>> {
        let mut node: Option<Box<TreeNode>> = None;
        for val in 0..depth as i32 {
            let mut parent = TreeNode::new(val);
            if leftwards {
                parent.left = node;
            } else {
                parent.right = node;
            }
            node = Some(Box::new(parent));
        }
        node
    }

    #[test]
    fn test_width_beyond_u64_is_rejected() {
        let root = TreeNode {
            val: 0,
            left: chain(70, true),
            right: chain(70, false),
        };
        let err = width_of_binary_tree(Some(&root)).unwrap_err();
        assert!(err.to_string().contains("exceeds u64"));
    }

    #[test]
    fn test_width_at_u64_boundary() {
        // Outer edges 63 levels down span 2^63 slots, the widest that fits.
        let root = TreeNode {
            val: 0,
            left: chain(62, true),
            right: chain(62, false),
        };
        assert_eq!(width_of_binary_tree(Some(&root)).unwrap(), 1u64 << 62);

        let root = TreeNode {
            val: 0,
            left: chain(63, true),
            right: chain(63, false),
        };
        assert_eq!(width_of_binary_tree(Some(&root)).unwrap(), 1u64 << 63);
    }
}
