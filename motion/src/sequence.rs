//! Load orchestration for the 3D viewer.
//!
//! The viewer boots through a fixed chain: engine script, loader-extension
//! script, scene construction, model fetch. Any failure along the chain
//! degrades to the vector fallback instead of surfacing an error. This
//! module models the chain as a state machine so the ordering and the
//! exactly-one-outcome guarantees hold without a browser: the host applies
//! events as loads settle and executes the returned directives.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

/// Where the viewer is in its boot chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// Nothing requested yet.
    Idle,
    LoadingEngine,
    LoadingLoader,
    /// Scene construction plus the asynchronous model fetch.
    LoadingModel,
    /// Full success: render loop and smoke are up.
    Running,
    /// A load failed; the fallback visual is in place.
    Degraded,
    /// Reduced motion bypassed the chain; the fallback visual is in place.
    Skipped,
}

/// Host-reported progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    /// The visibility gate fired.
    Begin,
    /// Reduced motion is active; load nothing.
    SkipToFallback,
    EngineLoaded,
    EngineFailed,
    LoaderLoaded,
    LoaderFailed,
    /// Scene construction threw before the model fetch started.
    SceneFailed,
    ModelLoaded,
    ModelFailed,
}

/// What the host must do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Load the 3D engine script.
    LoadEngineScript,
    /// Load the model-loader extension script.
    LoadLoaderScript,
    /// Construct renderer, scene, camera and lights, then fetch the model.
    BuildScene,
    /// Attach the model and start the render loop, parallax and smoke.
    Start,
    /// Insert the vector fallback. Emitted at most once per sequence.
    ShowFallback,
    /// Nothing: the event was out of order or the sequence has settled.
    None,
}

/// The boot-chain state machine.
///
/// Terminal states (`Running`, `Degraded`, `Skipped`) absorb every further
/// event, which is what guarantees at most one `ShowFallback` and at most
/// one `Start` per page view regardless of how callbacks interleave.
#[derive(Debug, Clone)]
pub struct LoadSequence {
    state: SequenceState,
}

impl Default for LoadSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SequenceState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// Whether the sequence has reached a terminal state.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(
            self.state,
            SequenceState::Running | SequenceState::Degraded | SequenceState::Skipped
        )
    }

    /// Apply one event and return the directive for the host.
    ///
    /// Out-of-order events, including a second `Begin`, are ignored with
    /// [`Directive::None`].
    pub fn apply(&mut self, event: SequenceEvent) -> Directive {
        use Directive as D;
        use SequenceEvent as E;
        use SequenceState as S;

        let (next, directive) = match (self.state, event) {
            (S::Idle, E::Begin) => (S::LoadingEngine, D::LoadEngineScript),
            (S::Idle, E::SkipToFallback) => (S::Skipped, D::ShowFallback),
            (S::LoadingEngine, E::EngineLoaded) => (S::LoadingLoader, D::LoadLoaderScript),
            (S::LoadingEngine, E::EngineFailed) => (S::Degraded, D::ShowFallback),
            (S::LoadingLoader, E::LoaderLoaded) => (S::LoadingModel, D::BuildScene),
            (S::LoadingLoader, E::LoaderFailed) => (S::Degraded, D::ShowFallback),
            (S::LoadingModel, E::ModelLoaded) => (S::Running, D::Start),
            (S::LoadingModel, E::SceneFailed | E::ModelFailed) => (S::Degraded, D::ShowFallback),
            _ => (self.state, D::None),
        };
        self.state = next;
        directive
    }
}
