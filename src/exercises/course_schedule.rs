//! Course schedule II (topological sort)

use std::collections::BinaryHeap;

use crate::error::{Result, ScratchError};

/// An order in which all `num_courses` courses can be taken.
///
/// Each prerequisite pair `(course, required)` means `required` has to be
/// taken before `course`. Kahn's algorithm: courses with no outstanding
/// prerequisites are taken one at a time (the highest-numbered ready course
/// first) and release the courses that depend on them. `Ok(None)` means the
/// prerequisites contain a cycle.
pub fn find_order(num_courses: usize, prerequisites: &[(usize, usize)]) -> Result<Option<Vec<usize>>> {
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); num_courses];
    let mut pending = vec![0usize; num_courses];

    for &(course, required) in prerequisites {
        if course >= num_courses || required >= num_courses {
            return Err(ScratchError::ValidationError(format!(
                "prerequisite ({}, {}) names a course outside 0..{}",
                course, required, num_courses
            ))
            .into());
        }
        dependents[required].push(course);
        pending[course] += 1;
    }

    let mut ready: BinaryHeap<usize> = (0..num_courses).filter(|&c| pending[c] == 0).collect();
    let mut order = Vec::with_capacity(num_courses);

    while let Some(course) = ready.pop() {
        order.push(course);
        for &next in &dependents[course] {
            pending[next] -= 1;
            if pending[next] == 0 {
                ready.push(next);
            }
        }
    }

    if order.len() == num_courses {
        Ok(Some(order))
    } else {
        Ok(None)
    }
}
