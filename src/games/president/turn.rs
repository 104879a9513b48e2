//! Turn rotation that skips seats which already have a placement.

use crate::core::PlayerId;

/// Seat reached by moving `steps` live seats clockwise from `current`.
///
/// Finished seats are invisible to the rotation. If every seat is finished
/// there is nowhere to go and `current` is returned unchanged.
#[must_use]
pub fn after(
    current: PlayerId,
    steps: usize,
    player_count: usize,
    is_finished: impl Fn(PlayerId) -> bool,
) -> PlayerId {
    if PlayerId::all(player_count).all(&is_finished) {
        return current;
    }

    let mut index = current.index();
    for _ in 0..steps {
        loop {
            index = (index + 1) % player_count;
            if !is_finished(PlayerId(index as u8)) {
                break;
            }
        }
    }
    PlayerId(index as u8)
}
