// Scans items in descending profit order and takes each one that still fits.
// The sort is stable, so items with equal profit are tried in index order.
pub fn greedy_by_profit(weights: &[u32], profits: &[u32], capacity: u32) -> (Vec<usize>, u64) {
    let mut order: Vec<usize> = (0..profits.len()).collect();
    order.sort_by(|&a, &b| profits[b].cmp(&profits[a]));

    let mut items = Vec::new();
    let mut total_weight = 0u64;
    let mut total_profit = 0u64;
    for item in order {
        if total_weight + weights[item] as u64 <= capacity as u64 {
            total_weight += weights[item] as u64;
            total_profit += profits[item] as u64;
            items.push(item);
        }
    }
    (items, total_profit)
}
