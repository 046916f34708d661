//! `RequestQueue`: requests admitted but not yet flown.

use dd_core::Request;

/// Pending requests.
///
/// Insertion is unordered; [`sort_for_dispatch`][Self::sort_for_dispatch]
/// establishes dispatch order before each tick's route building.
#[derive(Default, Debug)]
pub struct RequestQueue {
    pending: Vec<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `request` to the pending set.
    #[inline]
    pub fn enqueue(&mut self, request: Request) {
        self.pending.push(request);
    }

    /// Order pending requests emergencies first, then by arrival time.
    ///
    /// The sort is stable: requests with the same class and arrival time keep
    /// their admission order, which is ascending request id.
    pub fn sort_for_dispatch(&mut self) {
        self.pending.sort_by_key(Request::dispatch_key);
    }

    /// Read-only view of the pending requests in their current order.
    #[inline]
    pub fn as_slice(&self) -> &[Request] {
        &self.pending
    }

    /// Remove the requests at `indices` and return them in index order.
    ///
    /// `indices` must be strictly ascending and in bounds.  The relative
    /// order of the remaining requests is unchanged.
    pub fn take(&mut self, indices: &[usize]) -> Vec<Request> {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));

        let mut taken = Vec::with_capacity(indices.len());
        let mut wanted = indices.iter().copied().peekable();
        let mut kept = Vec::with_capacity(self.pending.len() - indices.len());

        for (i, request) in std::mem::take(&mut self.pending).into_iter().enumerate() {
            if wanted.next_if_eq(&i).is_some() {
                taken.push(request);
            } else {
                kept.push(request);
            }
        }

        self.pending = kept;
        taken
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Request> {
        self.pending.iter()
    }

    /// Consume the queue, returning whatever is still pending.
    pub fn into_vec(self) -> Vec<Request> {
        self.pending
    }
}
