// Algorithm exercises
//
// Each exercise is a pure function over a small in-memory input. The
// registry below pairs every exercise with its sample input so the CLI can
// run them.

pub mod binary_tree;
pub mod course_schedule;
pub mod hamming;
pub mod multilevel_list;
pub mod prison_cells;
pub mod three_sum;
pub mod top_k_frequent;
pub mod ugly_number;
pub mod word_break;

use crate::error::Result;

pub use binary_tree::{
    from_level_order, level_order_bottom, width_of_binary_tree, zigzag_level_order, TreeNode,
};
pub use course_schedule::find_order;
pub use hamming::hamming_distance;
pub use multilevel_list::MultilevelList;
pub use prison_cells::prison_after_n_days;
pub use three_sum::three_sum;
pub use top_k_frequent::top_k_frequent;
pub use ugly_number::nth_ugly_number;
pub use word_break::word_break;

/// A runnable exercise with a built-in sample input
#[derive(Debug, Clone, Copy)]
pub struct Exercise {
    pub name: &'static str,
    pub summary: &'static str,
    /// Human readable description of the sample input
    pub sample: &'static str,
    run: fn() -> Result<String>,
}

impl Exercise {
    /// Run the exercise on its sample input and render the answer.
    pub fn run(&self) -> Result<String> {
        (self.run)()
    }
}

pub const EXERCISES: &[Exercise] = &[
    Exercise {
        name: "flatten-multilevel-list",
        summary: "Flatten a multilevel doubly linked list depth-first",
        sample: "[1,2,3,4,5,6,null,null,null,7,8,9,10,null,null,11,12]",
        run: run_flatten,
    },
    Exercise {
        name: "top-k-frequent",
        summary: "K most frequent elements",
        sample: "nums=[1,1,1,2,2,3], k=2",
        run: run_top_k,
    },
    Exercise {
        name: "course-schedule",
        summary: "Order courses so prerequisites come first (topological sort)",
        sample: "n=4, prerequisites=[[1,0],[2,0],[3,1],[3,2]]",
        run: run_course_schedule,
    },
    Exercise {
        name: "level-order-bottom",
        summary: "Binary tree level order traversal, bottom-up",
        sample: "[3,9,20,null,null,15,7]",
        run: run_level_order_bottom,
    },
    Exercise {
        name: "zigzag-level-order",
        summary: "Binary tree zigzag level order traversal",
        sample: "[3,9,20,null,null,15,7]",
        run: run_zigzag,
    },
    Exercise {
        name: "tree-width",
        summary: "Maximum width of a binary tree",
        sample: "[1,3,2,5,3,null,9]",
        run: run_tree_width,
    },
    Exercise {
        name: "prison-cells",
        summary: "Prison cells after N days",
        sample: "cells=[0,1,0,1,1,0,0,1], N=7",
        run: run_prison_cells,
    },
    Exercise {
        name: "ugly-number",
        summary: "N-th number with only 2, 3 and 5 as prime factors",
        sample: "n=10",
        run: run_ugly_number,
    },
    Exercise {
        name: "hamming-distance",
        summary: "Number of differing bits between two integers",
        sample: "x=1, y=4",
        run: run_hamming,
    },
    Exercise {
        name: "three-sum",
        summary: "Unique triplets summing to zero",
        sample: "[-1,0,1,2,-1,-4]",
        run: run_three_sum,
    },
    Exercise {
        name: "word-break",
        summary: "All segmentations of a string into dictionary words",
        sample: "s=\"catsanddog\", dict=[cat,cats,and,sand,dog]",
        run: run_word_break,
    },
];

/// Look an exercise up by name.
pub fn find(name: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

const SAMPLE_TREE: &[Option<i32>] = &[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)];

fn run_flatten() -> Result<String> {
    let list = MultilevelList::from_serialized(&[
        Some(1),
        Some(2),
        Some(3),
        Some(4),
        Some(5),
        Some(6),
        None,
        None,
        None,
        Some(7),
        Some(8),
        Some(9),
        Some(10),
        None,
        None,
        Some(11),
        Some(12),
    ])?;
    Ok(format!("{:?}", list.flatten().values()))
}

fn run_top_k() -> Result<String> {
    Ok(format!("{:?}", top_k_frequent(&[1, 1, 1, 2, 2, 3], 2)))
}

fn run_course_schedule() -> Result<String> {
    Ok(match find_order(4, &[(1, 0), (2, 0), (3, 1), (3, 2)])? {
        Some(order) => format!("{:?}", order),
        None => "no valid order (cycle)".to_string(),
    })
}

fn run_level_order_bottom() -> Result<String> {
    let root = from_level_order(SAMPLE_TREE);
    Ok(format!("{:?}", level_order_bottom(root.as_deref())))
}

fn run_zigzag() -> Result<String> {
    let root = from_level_order(SAMPLE_TREE);
    Ok(format!("{:?}", zigzag_level_order(root.as_deref())))
}

fn run_tree_width() -> Result<String> {
    let root = from_level_order(&[Some(1), Some(3), Some(2), Some(5), Some(3), None, Some(9)]);
    Ok(width_of_binary_tree(root.as_deref())?.to_string())
}

fn run_prison_cells() -> Result<String> {
    Ok(format!("{:?}", prison_after_n_days([0, 1, 0, 1, 1, 0, 0, 1], 7)))
}

fn run_ugly_number() -> Result<String> {
    Ok(nth_ugly_number(10)?.to_string())
}

fn run_hamming() -> Result<String> {
    Ok(hamming_distance(1, 4).to_string())
}

fn run_three_sum() -> Result<String> {
    Ok(format!("{:?}", three_sum(&[-1, 0, 1, 2, -1, -4])))
}

fn run_word_break() -> Result<String> {
    Ok(format!(
        "{:?}",
        word_break("catsanddog", &["cat", "cats", "and", "sand", "dog"])
    ))
}
