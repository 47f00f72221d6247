/// Track state enumeration for the track lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Newly spawned track, still inside the initialization delay and
    /// invisible in output
    #[default]
    Candidate,
    /// Confirmed track, reported while it keeps matching
    Confirmed,
    /// Retired after the miss grace period elapsed
    Expired,
}
