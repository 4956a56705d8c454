use std::iter::FusedIterator;
use std::slice;

use tracing::instrument;

/// Bottles on the wall when the song starts.
pub const START_BOTTLES: u32 = 99;

/// Closing lines. Singular "bottle" and "no more" cannot come from the generic verse.
static CLOSING_LINES: [&str; 6] = [
    "2 bottles of beer on the wall, 2 bottles of beer.",
    "Take one down and pass it around, 1 bottle of beer on the wall.",
    "1 bottle of beer on the wall, 1 bottle of beer.",
    "Take one down and pass it around, no more bottles of beer on the wall.",
    "No more bottles of beer on the wall, no more bottles of beer.",
    "Go to the store and buy some more, 99 bottles of beer on the wall.",
];

/// Lines of the "99 Bottles of Beer" song, one per pull.
///
/// Counts down from 99. While more than two bottles remain each verse is two
/// lines: the count statement, then the take-one-down line announcing the
/// decremented count. The last six lines are fixed text.
#[derive(Debug, Clone)]
pub struct BottlesSong {
    bottles: u32,
    /// The count statement for `bottles` has been emitted, the take-one-down line is next.
    stated: bool,
    closing: slice::Iter<'static, &'static str>,
}

impl Default for BottlesSong {
    fn default() -> Self {
        Self::new()
    }
}

impl BottlesSong {
    #[instrument(level = "trace")]
    pub fn new() -> Self {
        Self {
            bottles: START_BOTTLES,
            stated: false,
            closing: CLOSING_LINES.iter(),
        }
    }

    fn remaining(&self) -> usize {
        if self.bottles > 2 {
            (self.bottles as usize - 2) * 2 - usize::from(self.stated) + CLOSING_LINES.len()
        } else {
            self.closing.len()
        }
    }
}

impl Iterator for BottlesSong {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bottles > 2 {
            if !self.stated {
                self.stated = true;
                let n = self.bottles;
                return Some(format!(
                    "{n} bottles of beer on the wall, {n} bottles of beer."
                ));
            }
            self.stated = false;
            self.bottles -= 1;
            return Some(format!(
                "Take one down and pass it around, {} bottles of beer on the wall.",
                self.bottles
            ));
        }
        self.closing.next().map(|line| (*line).to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BottlesSong {}

impl FusedIterator for BottlesSong {}

/// Returns the lines of the "99 Bottles of Beer" song as a lazy sequence.
pub fn bottles_song() -> BottlesSong {
    BottlesSong::new()
}
