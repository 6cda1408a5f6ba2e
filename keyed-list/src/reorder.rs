use alloc::vec;
use alloc::vec::Vec;

/// Marks the target positions whose nodes can stay where they are.
///
/// `sources[i]` is the current container rank of the node that should end up at `i`, or
/// `None` for a node that is not attached yet. The result flags one longest strictly
/// increasing run of ranks; everything else has to be moved or inserted.
pub(crate) fn stable_positions(sources: &[Option<usize>]) -> Vec<bool> {
    let mut stable = vec![false; sources.len()];
    // tails[j]: target index ending the best run of length j + 1 seen so far.
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; sources.len()];

    for (i, source) in sources.iter().enumerate() {
        let Some(rank) = *source else {
            continue;
        };
        let pos = tails.partition_point(|&t| sources[t].is_some_and(|r| r < rank));
        if pos > 0 {
            prev[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        stable[i] = true;
        cursor = prev[i];
    }
    stable
}
