use crate::mvi::UiState;
use crate::remote::Playlist;

/// Progress of the load machine.
///
/// Overlapping loads are allowed, so `Loading` counts the fetches that
/// have not settled yet. It never holds zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Idle,
    Loading { in_flight: usize },
}

impl OperationStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub(crate) fn started(self) -> Self {
        match self {
            Self::Idle => Self::Loading { in_flight: 1 },
            Self::Loading { in_flight } => Self::Loading {
                in_flight: in_flight + 1,
            },
        }
    }

    pub(crate) fn settled(self) -> Self {
        match self {
            Self::Loading { in_flight } if in_flight > 1 => Self::Loading {
                in_flight: in_flight - 1,
            },
            _ => Self::Idle,
        }
    }
}

/// Transient confirmation that a like was recorded.
///
/// `generation` increases with every acknowledgment the coordinator issues;
/// an expiry only clears the acknowledgment it was scheduled for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: String,
    pub generation: u64,
}

/// What the rendering surface should show for the collection area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Loading with nothing to show yet.
    InitialLoading,
    /// Not loading and the last successful fetch (if any) was empty.
    Empty,
    /// At least one playlist to show, possibly while refreshing.
    Populated,
}

/// Snapshot of everything the coordinator owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    /// Result of the last successful fetch, in service order.
    pub items: Vec<Playlist>,
    pub status: OperationStatus,
    /// Message of the most recent failure, until a successful load.
    pub error: Option<String>,
    pub acknowledgment: Option<Acknowledgment>,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn acknowledgment_message(&self) -> Option<&str> {
        self.acknowledgment.as_ref().map(|ack| ack.message.as_str())
    }

    /// Refresh and like controls are disabled while a load is in flight.
    pub fn can_refresh(&self) -> bool {
        !self.is_loading()
    }

    pub fn phase(&self) -> ViewPhase {
        match (self.items.is_empty(), self.is_loading()) {
            (true, true) => ViewPhase::InitialLoading,
            (true, false) => ViewPhase::Empty,
            (false, _) => ViewPhase::Populated,
        }
    }
}
