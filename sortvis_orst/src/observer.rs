use std::fmt::{self, Debug};
use std::ops::Deref;
use std::sync::Arc;

/// A frozen copy of the array at one point of a sort.
///
/// The sorter keeps mutating its working array after a snapshot is handed out, so a snapshot
/// never borrows from it. Cloning a snapshot is cheap: clones share the same frozen buffer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Snapshot<T>(Arc<[T]>);

impl<T: Clone> Snapshot<T> {
    /// Copies `slice` into a new snapshot.
    pub fn capture(slice: &[T]) -> Self {
        Self(Arc::from(slice))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.to_vec()
    }
}

impl<T> Snapshot<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(value: Vec<T>) -> Self {
        Self(Arc::from(value))
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Debug> Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Receives the snapshots a sorter emits, in the order they were taken.
///
/// Any `FnMut(Snapshot<T>)` closure is an observer.
///
/// ```
/// use sortvis_orst::{InsertionSorter, Snapshot, Sorter};
///
/// let mut count = 0;
/// let mut slice = vec![3, 2, 1];
/// InsertionSorter
///     .sort_with(&mut slice, &mut |_: Snapshot<i32>| count += 1)
///     .unwrap();
///
/// assert_eq!(count, 3);
/// ```
pub trait Observer<T> {
    fn observe(&mut self, snapshot: Snapshot<T>);

    /// An observer that no longer wants snapshots returns `true` here. The sorter still runs to
    /// completion, it just stops copying the array.
    fn is_detached(&self) -> bool {
        false
    }
}

impl<T, F> Observer<T> for F
where
    F: FnMut(Snapshot<T>),
{
    fn observe(&mut self, snapshot: Snapshot<T>) {
        self(snapshot)
    }
}

/// Sits between a sorter and its observer.
///
/// Sorters never talk to the observer directly. They call [`swap`](Tracker::swap),
/// [`emit`](Tracker::emit) or [`replay`](Tracker::replay) and the tracker decides whether a
/// snapshot has to be taken at all.
pub struct Tracker<'a, T> {
    observer: Option<&'a mut dyn Observer<T>>,
    emitted: usize,
}

impl<'a, T> Tracker<'a, T> {
    pub fn new(observer: &'a mut dyn Observer<T>) -> Self {
        Self {
            observer: Some(observer),
            emitted: 0,
        }
    }

    /// A tracker with nobody watching. Sorting through it costs nothing extra.
    pub fn silent() -> Self {
        Self {
            observer: None,
            emitted: 0,
        }
    }

    /// Number of snapshots handed to the observer so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// `true` while there is an observer that still wants snapshots.
    pub fn is_observed(&self) -> bool {
        matches!(&self.observer, Some(observer) if !observer.is_detached())
    }
}

impl<'a, T> Tracker<'a, T>
where
    T: Clone,
{
    /// Hands a snapshot of `slice` to the observer, if there is one.
    pub fn emit(&mut self, slice: &[T]) {
        if let Some(observer) = self.observer.as_deref_mut() {
            if observer.is_detached() {
                return;
            }
            observer.observe(Snapshot::capture(slice));
            self.emitted += 1;
        }
    }

    /// Swaps two elements and reports the new state. Swapping an index with itself changes
    /// nothing and is not reported.
    #[inline]
    pub fn swap(&mut self, slice: &mut [T], a: usize, b: usize) {
        if a == b {
            return;
        }
        slice.swap(a, b);
        self.emit(slice);
    }
}

impl<'a, T> Tracker<'a, T>
where
    T: Clone + PartialEq,
{
    /// Moves `value` to index `at`, shifting whatever sat between one place to the right, and
    /// reports the new state.
    ///
    /// `value` has to occur somewhere in `slice[at..]`.
    pub fn place(&mut self, slice: &mut [T], at: usize, value: &T) {
        let found = slice[at..].iter().position(|v| v == value);
        debug_assert!(found.is_some(), "placed value is not in the unplaced tail");
        if let Some(offset) = found {
            slice[at..=at + offset].rotate_right(1);
        }
        self.emit(slice);
    }

    /// Rearranges `slice` into `output` one element at a time.
    ///
    /// Distribution sorts build their result off to the side in one go. Replaying it here keeps
    /// the animation incremental, and since every step is a rotation each snapshot is still a
    /// permutation of the input. `output` must be a permutation of `slice`.
    pub fn replay(&mut self, slice: &mut [T], output: &[T]) {
        if !self.is_observed() {
            slice.clone_from_slice(output);
            return;
        }
        for (at, value) in output.iter().enumerate() {
            self.place(slice, at, value);
        }
    }
}
