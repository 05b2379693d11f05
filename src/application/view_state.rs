// Load state shared by every view-controller
use crate::error::{FetchError, ViewFailure};

/// Identifies one load. A response carrying a token other than the one in
/// flight belongs to an earlier mount and is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(crate) fn from_sequence(sequence: u64) -> Self {
        RequestToken(sequence)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading { request: RequestToken },
    Ready(T),
    Failed(ViewFailure),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ViewFailure> {
        match self {
            ViewState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn in_flight(&self) -> Option<RequestToken> {
        match self {
            ViewState::Loading { request } => Some(*request),
            _ => None,
        }
    }
}

/// A [`ViewState`] plus the counter that hands out its request tokens.
#[derive(Debug, Clone)]
pub struct Loadable<T> {
    state: ViewState<T>,
    issued: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            issued: 0,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Enter `Loading` under a fresh token. Any earlier token stops being current.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        let request = RequestToken::from_sequence(self.issued);
        self.state = ViewState::Loading { request };
        request
    }

    /// Apply a fetch outcome if `request` is still the one in flight.
    ///
    /// Returns the new dataset when the outcome was a success that got applied.
    pub fn complete(
        &mut self,
        request: RequestToken,
        result: Result<T, FetchError>,
    ) -> Option<&T> {
        if self.state.in_flight() != Some(request) {
            tracing::warn!("Discarding stale response for request {:?}", request);
            return None;
        }
        match result {
            Ok(data) => {
                self.state = ViewState::Ready(data);
                self.state.data()
            }
            Err(e) => {
                tracing::error!("Load failed: {}", e);
                self.state = ViewState::Failed(ViewFailure::Transport(e));
                None
            }
        }
    }

    pub fn show(&mut self, data: T) {
        self.state = ViewState::Ready(data);
    }

    pub fn fail(&mut self, failure: ViewFailure) {
        self.state = ViewState::Failed(failure);
    }

    /// Back to `Idle`; whatever is in flight becomes stale.
    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
    }
}
