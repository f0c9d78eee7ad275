/// Cell holds the value of a single grid slot; 0 is an empty slot.
pub(crate) type Cell = u32;

pub(crate) const EMPTY: Cell = 0;

/// Move every non-empty cell to the front of the row, keeping their relative order, and pad the
/// remainder with empty cells.
pub(crate) fn bubble_zeros<const N: usize>(row: [Cell; N]) -> [Cell; N] {
    let mut bubbled = [EMPTY; N];
    for (slot, value) in bubbled
        .iter_mut()
        .zip(row.into_iter().filter(|v| *v != EMPTY))
    {
        *slot = value;
    }
    bubbled
}

/// Scan left to right doubling the left cell of every equal neighbor pair and emptying the right
/// one. A cell takes part in at most one merge per scan: after a merge the scan resumes past the
/// consumed pair.
pub(crate) fn sum_twins<const N: usize>(mut row: [Cell; N]) -> [Cell; N] {
    let mut i = 0;
    while i + 1 < N {
        if row[i] != EMPTY && row[i] == row[i + 1] {
            row[i] *= 2;
            row[i + 1] = EMPTY;
            i += 2;
        } else {
            i += 1;
        }
    }
    row
}

/// Slide and merge a single row towards its front (the LEFT primitive).
pub(crate) fn compress<const N: usize>(row: [Cell; N]) -> [Cell; N] {
    bubble_zeros(sum_twins(bubble_zeros(row)))
}

pub(crate) fn reverse<const N: usize>(mut row: [Cell; N]) -> [Cell; N] {
    row.reverse();
    row
}
