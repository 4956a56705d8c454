//! Lazy merge of two individually sorted sequences.

use std::iter::FusedIterator;

use tracing::instrument;

/// Which sources must be pulled before the next comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    Nothing,
    Both,
    First,
    Second,
}

/// Merged view of two non-decreasing sequences.
///
/// Works in pair steps: the heads of both sources are compared, the smaller is
/// yielded, then the other one, and only then do both sources advance. On
/// equal heads the value from `first` comes out first. When one source runs
/// out, the rest of the other is yielded unchanged.
///
/// Because both sources advance together, the output is fully sorted only when
/// the sources interleave pairwise (e.g. odds and evens). Sortedness of the
/// inputs is trusted, not checked.
#[derive(Debug, Clone)]
pub struct SortedMerge<A, B>
where
    A: Iterator,
{
    first: A,
    second: B,
    head_first: Option<A::Item>,
    head_second: Option<A::Item>,
    /// Larger value of the current pair, yielded on the next pull
    deferred: Option<A::Item>,
    advance: Advance,
}

impl<T, A, B> SortedMerge<A, B>
where
    T: PartialOrd,
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
    /// Nothing is pulled from either source until the first `next()`.
    #[instrument(level = "trace", skip_all)]
    pub fn new<IA, IB>(first: IA, second: IB) -> Self
    where
        IA: IntoIterator<IntoIter = A>,
        IB: IntoIterator<IntoIter = B>,
    {
        Self {
            first: first.into_iter(),
            second: second.into_iter(),
            head_first: None,
            head_second: None,
            deferred: None,
            advance: Advance::Both,
        }
    }

    fn pull(&mut self) {
        match self.advance {
            Advance::Nothing => {}
            Advance::Both => {
                self.head_first = self.first.next();
                self.head_second = self.second.next();
            }
            Advance::First => self.head_first = self.first.next(),
            Advance::Second => self.head_second = self.second.next(),
        }
        self.advance = Advance::Nothing;
    }
}

impl<T, A, B> Iterator for SortedMerge<A, B>
where
    T: PartialOrd,
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.deferred.take() {
            self.advance = Advance::Both;
            return Some(value);
        }

        self.pull();

        match (self.head_first.take(), self.head_second.take()) {
            (Some(a), Some(b)) => {
                if b < a {
                    self.deferred = Some(a);
                    Some(b)
                } else {
                    self.deferred = Some(b);
                    Some(a)
                }
            }
            (Some(a), None) => {
                self.advance = Advance::First;
                Some(a)
            }
            (None, Some(b)) => {
                self.advance = Advance::Second;
                Some(b)
            }
            // Both exhausted: advance stays Nothing, so the sources are never pulled again
            (None, None) => None,
        }
    }
}

impl<T, A, B> FusedIterator for SortedMerge<A, B>
where
    T: PartialOrd,
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
}

/// Merges the sequences produced by two factories into one sorted sequence.
///
/// Each factory is called once, when the merge is created; the sequences it
/// returns are consumed lazily.
pub fn merge_sorted_sequences<T, F1, F2, I1, I2>(
    source1: F1,
    source2: F2,
) -> SortedMerge<I1::IntoIter, I2::IntoIter>
where
    T: PartialOrd,
    F1: FnOnce() -> I1,
    F2: FnOnce() -> I2,
    I1: IntoIterator<Item = T>,
    I2: IntoIterator<Item = T>,
{
    SortedMerge::new(source1(), source2())
}
