//! Flatten a multilevel doubly linked list
//!
//! Nodes live in an arena and refer to each other by index, so `prev`,
//! `next` and `child` links need no shared ownership.

use crate::error::{Result, ScratchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNode {
    pub val: i32,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub child: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultilevelList {
    nodes: Vec<ListNode>,
    head: Option<usize>,
}

impl MultilevelList {
    /// Build a list from its level serialisation.
    ///
    /// Levels are written top to bottom, each terminated by `None`. The
    /// `None`s that follow a terminator count how many nodes of the level
    /// above to skip before the one that owns the next level as its child:
    /// `[1, 2, 3, None, None, 4, 5]` hangs `4 <-> 5` off node `2`.
    pub fn from_serialized(values: &[Option<i32>]) -> Result<Self> {
        let mut list = Self::default();
        let mut pos = 0;

        let mut level = list.read_level(values, &mut pos);
        if level.is_empty() {
            if values.is_empty() {
                return Ok(list);
            }
            return Err(invalid("serialization must start with a value"));
        }
        list.head = level.first().copied();

        while pos < values.len() {
            // skip the terminator of the level just read
            pos += 1;
            let mut offset = 0;
            while pos < values.len() && values[pos].is_none() {
                offset += 1;
                pos += 1;
            }
            if pos >= values.len() {
                break;
            }

            let parent = *level.get(offset).ok_or_else(|| {
                invalid(&format!(
                    "child offset {} is past a level of {} node(s)",
                    offset,
                    level.len()
                ))
            })?;
            let next_level = list.read_level(values, &mut pos);
            list.nodes[parent].child = next_level.first().copied();
            level = next_level;
        }

        Ok(list)
    }

    /// Append one run of values as a new doubly linked level.
    fn read_level(&mut self, values: &[Option<i32>], pos: &mut usize) -> Vec<usize> {
        let mut ids: Vec<usize> = Vec::new();
        while let Some(Some(val)) = values.get(*pos) {
            let id = self.push(*val, ids.last().copied());
            ids.push(id);
            *pos += 1;
        }
        ids
    }

    fn push(&mut self, val: i32, prev: Option<usize>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(ListNode {
            val,
            prev,
            next: None,
            child: None,
        });
        if let Some(prev) = prev {
            self.nodes[prev].next = Some(id);
        }
        id
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn node(&self, id: usize) -> Option<&ListNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values of the top level, following `next` from the head.
    pub fn values(&self) -> Vec<i32> {
        let mut out = Vec::new();
        let mut cursor = self.head;
        while let Some(id) = cursor {
            out.push(self.nodes[id].val);
            cursor = self.nodes[id].next;
        }
        out
    }

    /// Values of the top level walked backwards from its tail via `prev`.
    pub fn values_backwards(&self) -> Vec<i32> {
        let mut tail = self.head;
        while let Some(next) = tail.and_then(|id| self.nodes[id].next) {
            tail = Some(next);
        }

        let mut out = Vec::new();
        let mut cursor = tail;
        while let Some(id) = cursor {
            out.push(self.nodes[id].val);
            cursor = self.nodes[id].prev;
        }
        out
    }

    /// A single-level copy of the list: every child level is spliced in
    /// right after its parent node, ahead of the parent's `next`.
    pub fn flatten(&self) -> MultilevelList {
        let mut flat = MultilevelList::default();
        let mut pending_next: Vec<usize> = Vec::new();
        let mut cursor = self.head;
        let mut last = None;

        while let Some(id) = cursor {
            let node = &self.nodes[id];
            let new_id = flat.push(node.val, last);
            if flat.head.is_none() {
                flat.head = Some(new_id);
            }
            last = Some(new_id);

            cursor = match (node.child, node.next) {
                (Some(child), next) => {
                    if let Some(next) = next {
                        pending_next.push(next);
                    }
                    Some(child)
                }
                (None, Some(next)) => Some(next),
                (None, None) => pending_next.pop(),
            };
        }

        flat
    }
}

fn invalid(message: &str) -> anyhow::Error {
    ScratchError::ValidationError(message.to_string()).into()
}
