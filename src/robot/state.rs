use super::models::{Position, RobotState};
use super::telemetry::{apply_jitter, JitterSource, RandomJitter};
use std::sync::Arc;
use tokio::sync::Mutex;

struct Inner {
    robot: RobotState,
    jitter: Box<dyn JitterSource>,
}

/// Process-wide robot record plus the jitter source that drives it.
///
/// Both live behind one lock so every read-modify-write is a single critical
/// section, no matter how many sessions share the handle.
#[derive(Clone)]
pub struct SharedRobotState {
    inner: Arc<Mutex<Inner>>,
}

impl SharedRobotState {
    pub fn new(robot: RobotState, jitter: impl JitterSource + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                robot,
                jitter: Box::new(jitter),
            })),
        }
    }

    /// Consistent copy of the current state, without jitter.
    pub async fn snapshot(&self) -> RobotState {
        self.inner.lock().await.robot.clone()
    }

    /// Applies one round of telemetry jitter and returns the resulting state.
    pub async fn refresh(&self) -> RobotState {
        let mut guard = self.inner.lock().await;
        let Inner { robot, jitter } = &mut *guard;
        apply_jitter(robot, jitter.as_mut());
        robot.clone()
    }

    /// Replaces x, y and z in one step.
    pub async fn set_position(&self, position: Position) {
        self.inner.lock().await.robot.position = position;
    }
}

impl Default for SharedRobotState {
    fn default() -> Self {
        Self::new(RobotState::default(), RandomJitter::from_entropy())
    }
}

impl std::fmt::Debug for SharedRobotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRobotState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::telemetry::tests::ScriptedJitter;

    #[tokio::test]
    async fn snapshot_does_not_jitter() {
        let state = SharedRobotState::new(RobotState::default(), ScriptedJitter::new(&[-1.0, 0.2]));

        assert_eq!(state.snapshot().await, RobotState::default());
        assert_eq!(state.snapshot().await, RobotState::default());
    }

    #[tokio::test]
    async fn refresh_returns_jittered_copy() {
        let state = SharedRobotState::new(RobotState::default(), ScriptedJitter::new(&[-1.0, 0.0]));

        let refreshed = state.refresh().await;

        assert_eq!(refreshed.battery, 86.0);
        assert_eq!(state.snapshot().await, refreshed);
    }

    #[tokio::test]
    async fn set_position_replaces_all_coordinates() {
        let state = SharedRobotState::default();
        let target = Position {
            x: -1.5,
            y: 0.0,
            z: 3.25,
        };

        state.set_position(target).await;

        assert_eq!(state.snapshot().await.position, target);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_refreshes_are_serialized() {
        let deltas = vec![-0.5; 40];
        // Battery and temperature draws interleave.
        let script: Vec<f64> = deltas.iter().flat_map(|d| [*d, 0.0]).collect();
        let state = SharedRobotState::new(RobotState::default(), ScriptedJitter::new(&script));

        let handles: Vec<_> = (0..40)
            .map(|_| {
                let state = state.clone();
                tokio::spawn(async move { state.refresh().await })
            })
            .collect();
        for handle in handles {
            let robot = handle.await.unwrap();
            assert!((0.0..=100.0).contains(&robot.battery));
        }

        assert_eq!(state.snapshot().await.battery, 67.0);
    }
}
