use tracing::debug;

use crate::model::unit::{AllocationUnit, Cost, Seats, Selection};

/// Best achievable cost per (units considered, seats available), row-major.
///
/// Column 0 is filled like every other column so that units needing no
/// seats are still picked up.
struct Table {
    capacity: Seats,
    best: Vec<Cost>,
}

impl Table {
    fn build<P>(units: &[AllocationUnit<P>], capacity: Seats) -> Table {
        let width = capacity + 1;
        let mut best = vec![0; (units.len() + 1) * width];

        for (i, unit) in units.iter().enumerate() {
            let (prev, row) = best[i * width..(i + 2) * width].split_at_mut(width);
            for c in 0..=capacity {
                row[c] = if unit.seats > c {
                    prev[c]
                } else {
                    let skip = prev[c];
                    let take = prev[c - unit.seats] + unit.cost;
                    // Ties keep the value without this unit.
                    if take > skip { take } else { skip }
                };
            }
        }

        Table { capacity, best }
    }

    fn get(&self, i: usize, c: Seats) -> Cost {
        self.best[i * (self.capacity + 1) + c]
    }

    /// Indices of the chosen units in ascending order.
    fn chosen<P>(&self, units: &[AllocationUnit<P>]) -> Vec<usize> {
        let mut remaining = self.capacity;
        let mut chosen = Vec::new();
        for i in (1..=units.len()).rev() {
            if self.get(i, remaining) != self.get(i - 1, remaining) {
                chosen.push(i - 1);
                remaining -= units[i - 1].seats;
            }
        }
        chosen.reverse();
        chosen
    }
}

/// Picks the subset of `units` with the highest total cost whose seats fit
/// into `capacity`.
///
/// This is an exact 0/1 knapsack over an `(units + 1) x (capacity + 1)`
/// table, so time and memory grow with `units.len() * capacity`. The chosen
/// units keep their input order. When two subsets tie on cost, the one
/// leaving out later units wins, so the result is stable across calls.
///
/// Seats beyond what all units together need are never used, so the table is
/// only as wide as that total.
pub fn select_optimal<P: Clone>(units: &[AllocationUnit<P>], capacity: Seats) -> Selection<P> {
    if units.is_empty() || capacity == 0 {
        return Selection::empty();
    }
    let capacity = capacity.min(seats_needed(units, capacity));

    let table = Table::build(units, capacity);
    let selection = Selection {
        units: table
            .chosen(units)
            .into_iter()
            .map(|index| units[index].clone())
            .collect(),
    };

    debug_assert_eq!(selection.total_cost(), table.get(units.len(), capacity));
    debug!(
        units = units.len(),
        capacity,
        selected = selection.len(),
        cost = selection.total_cost(),
        seats = selection.total_seats(),
        "selected optimal units"
    );
    selection
}

/// Total seats of the units that fit on their own, saturating at `capacity`.
fn seats_needed<P>(units: &[AllocationUnit<P>], capacity: Seats) -> Seats {
    units
        .iter()
        .map(|unit| unit.seats)
        .filter(|&seats| seats <= capacity)
        .fold(0, |total: Seats, seats| total.saturating_add(seats).min(capacity))
}
