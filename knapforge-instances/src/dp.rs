use anyhow::{anyhow, Result};
use ndarray::Array2;

// Tables over states (k, l): best profit using only items 1..=k with a
// capacity budget of exactly l. Unreachable states hold None. For k >= 1,
// parents[[k, l]] is the budget of the predecessor state on row k - 1; the
// item k - 1 is in the solution iff the budget changed. ambiguous[[k, l]]
// marks reachable states with more than one optimal derivation.
#[derive(Debug, Clone)]
pub struct DpTable {
    pub num_items: usize,
    pub capacity: usize,
    pub values: Array2<Option<u64>>,
    pub parents: Array2<Option<usize>>,
    pub ambiguous: Array2<bool>,
}

impl DpTable {
    pub fn build(weights: &[u32], profits: &[u32], capacity: u32) -> Result<DpTable> {
        if weights.len() != profits.len() {
            return Err(anyhow!(
                "Weights ({}) and profits ({}) must have the same length",
                weights.len(),
                profits.len()
            ));
        }
        // A zero-weight item taken at budget l would leave the budget
        // unchanged, making its parent pointer indistinguishable from leave
        if let Some(item) = weights.iter().position(|&w| w == 0) {
            return Err(anyhow!("Item ({}) has zero weight", item));
        }

        let num_items = weights.len();
        let capacity = capacity as usize;
        let mut values = Array2::from_elem((num_items + 1, capacity + 1), None);
        let mut parents = Array2::from_elem((num_items + 1, capacity + 1), None);
        let mut ambiguous = Array2::from_elem((num_items + 1, capacity + 1), false);
        // With no items, only a budget of zero is reachable
        values[[0, 0]] = Some(0);

        for k in 1..=num_items {
            let weight = weights[k - 1] as usize;
            let profit = profits[k - 1] as u64;
            for budget in 0..=capacity {
                if budget < weight {
                    values[[k, budget]] = values[[k - 1, budget]];
                    parents[[k, budget]] = Some(budget);
                    ambiguous[[k, budget]] = ambiguous[[k - 1, budget]];
                    continue;
                }
                // None < Some(_), so an unreachable branch never wins against
                // a reachable one; ties go to leave
                let leave = values[[k - 1, budget]];
                let take = values[[k - 1, budget - weight]].map(|v| v + profit);
                if leave >= take {
                    values[[k, budget]] = leave;
                    parents[[k, budget]] = Some(budget);
                } else {
                    values[[k, budget]] = take;
                    parents[[k, budget]] = Some(budget - weight);
                }
                if values[[k, budget]].is_none() {
                    continue;
                }
                ambiguous[[k, budget]] = if leave == take {
                    true
                } else if leave > take {
                    ambiguous[[k - 1, budget]]
                } else {
                    ambiguous[[k - 1, budget - weight]]
                };
            }
        }

        Ok(DpTable {
            num_items,
            capacity,
            values,
            parents,
            ambiguous,
        })
    }

    // Returns the optimal value and the budget of its unique terminal state,
    // or None if the instance must be rejected: either several budgets on the
    // last row attain the optimum, or the single terminal is ambiguous.
    pub fn unique_optimum(&self) -> Option<(u64, usize)> {
        let last_row = self.values.row(self.num_items);
        let best = last_row.iter().filter_map(|v| *v).max()?;
        let maximizers: Vec<usize> = last_row
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == Some(best))
            .map(|(budget, _)| budget)
            .collect();
        if maximizers.len() != 1 {
            return None;
        }
        let budget = maximizers[0];
        if self.ambiguous[[self.num_items, budget]] {
            return None;
        }
        Some((best, budget))
    }

    pub fn backtrack(&self, budget: usize) -> Result<Vec<usize>> {
        if budget > self.capacity {
            return Err(anyhow!(
                "Budget ({}) exceeds capacity ({})",
                budget,
                self.capacity
            ));
        }
        let mut items = Vec::new();
        let mut budget = budget;
        for k in (1..=self.num_items).rev() {
            let parent = self.parents[[k, budget]]
                .ok_or_else(|| anyhow!("State ({}, {}) has no parent", k, budget))?;
            if parent != budget {
                items.push(k - 1);
            }
            budget = parent;
        }
        // Every reachable state traces back to (0, 0); ending elsewhere means
        // the walk started from an unreachable state
        if budget != 0 {
            return Err(anyhow!(
                "Backtrack ended at budget ({}) instead of 0",
                budget
            ));
        }
        items.sort();
        Ok(items)
    }
}
