/// Index of the greatest count, scanning in order.
///
/// Only a strictly greater count replaces the current leader, so the lowest
/// index among equal maxima wins. An empty or all-zero scan yields 0.
pub fn select_winner<I>(vote_counts: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut winner = 0u32;
    let mut best: Option<u32> = None;

    for (index, count) in (0u32..).zip(vote_counts) {
        match best {
            Some(leading) if count <= leading => {}
            _ => {
                winner = index;
                best = Some(count);
            }
        }
    }

    winner
}
