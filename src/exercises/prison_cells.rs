//! Prison cells after N days

use std::collections::HashMap;

pub type Cells = [u8; 8];

/// State of eight prison cells after `days` days.
///
/// Each day a cell becomes occupied when both neighbours were equal the day
/// before (both occupied or both vacant), otherwise vacant. The two end
/// cells have a single neighbour and are always vacant from day one.
/// The sequence cycles quickly, so the first repeated state short-cuts the
/// remaining days.
pub fn prison_after_n_days(cells: Cells, days: u64) -> Cells {
    let mut cells = cells;
    let mut remaining = days;
    let mut seen: HashMap<Cells, u64> = HashMap::new();

    while remaining > 0 {
        seen.insert(cells, remaining);
        remaining -= 1;
        cells = next_day(&cells);

        if let Some(&previous) = seen.get(&cells) {
            let cycle = previous - remaining;
            remaining %= cycle;
            break;
        }
    }

    for _ in 0..remaining {
        cells = next_day(&cells);
    }
    cells
}

fn next_day(cells: &Cells) -> Cells {
    let mut next = [0u8; 8];
    for i in 1..7 {
        next[i] = u8::from(cells[i - 1] == cells[i + 1]);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(mut cells: Cells, days: u64) -> Cells {
        for _ in 0..days {
            cells = next_day(&cells);
        }
        cells
    }

    #[test]
    fn test_seven_days() {
        assert_eq!(
            prison_after_n_days([0, 1, 0, 1, 1, 0, 0, 1], 7),
            [0, 0, 1, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_billion_days() {
        assert_eq!(
            prison_after_n_days([1, 0, 0, 1, 0, 0, 1, 0], 1_000_000_000),
            [0, 0, 1, 1, 1, 1, 1, 0]
        );
    }

    #[test]
    fn test_zero_days_is_identity() {
        let cells = [1, 0, 1, 0, 1, 0, 1, 1];
        assert_eq!(prison_after_n_days(cells, 0), cells);
    }

    #[test]
    fn test_matches_brute_force() {
        let cells = [1, 1, 0, 1, 0, 0, 1, 0];
        for days in 0..60 {
            assert_eq!(prison_after_n_days(cells, days), brute_force(cells, days));
        }
    }
}
