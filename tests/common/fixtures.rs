//! Scripted location platforms.
//!
//! Each step of the platform can be told to succeed, fail, hang or panic,
//! following the Builder pattern for clean test setup.
//!
//! ```ignore
//! let platform = ScriptedPlatform::granted_in("PH").hang_on_position();
//! ```

use phonenorm::location::{Coordinates, LocationError, LocationPlatform, Permission, Place};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How a scripted step behaves.
#[derive(Debug, Clone)]
pub enum Step<T> {
    Succeed(T),
    Fail(LocationError),
    Hang,
    Panic,
}

/// Location platform driven by canned answers.
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    permission: Step<Permission>,
    position: Step<Coordinates>,
    places: Step<Vec<Place>>,
    calls: Arc<CallCounts>,
}

/// Per-step call counters, shared across clones.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub permission: AtomicUsize,
    pub position: AtomicUsize,
    pub geocode: AtomicUsize,
}

impl CallCounts {
    pub fn permission(&self) -> usize {
        self.permission.load(Ordering::SeqCst)
    }

    pub fn position(&self) -> usize {
        self.position.load(Ordering::SeqCst)
    }

    pub fn geocode(&self) -> usize {
        self.geocode.load(Ordering::SeqCst)
    }
}

impl ScriptedPlatform {
    /// Permission granted, a Manila position, and a single place in `iso`.
    pub fn granted_in(iso: &str) -> Self {
        Self {
            permission: Step::Succeed(Permission::Granted),
            position: Step::Succeed(Coordinates::new(14.5995, 120.9842)),
            places: Step::Succeed(vec![Place::in_country(iso)]),
            calls: Arc::new(CallCounts::default()),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: Step::Succeed(Permission::Denied),
            ..Self::granted_in("PH")
        }
    }

    pub fn with_permission(mut self, step: Step<Permission>) -> Self {
        self.permission = step;
        self
    }

    pub fn with_position(mut self, step: Step<Coordinates>) -> Self {
        self.position = step;
        self
    }

    pub fn with_places(mut self, step: Step<Vec<Place>>) -> Self {
        self.places = step;
        self
    }

    pub fn hang_on_position(self) -> Self {
        self.with_position(Step::Hang)
    }

    pub fn calls(&self) -> Arc<CallCounts> {
        Arc::clone(&self.calls)
    }
}

async fn run<T: Clone>(step: &Step<T>, what: &str) -> Result<T, LocationError> {
    match step {
        Step::Succeed(value) => Ok(value.clone()),
        Step::Fail(err) => Err(err.clone()),
        Step::Hang => std::future::pending().await,
        Step::Panic => panic!("scripted {} panic", what),
    }
}

impl LocationPlatform for ScriptedPlatform {
    async fn request_foreground_permission(&self) -> Result<Permission, LocationError> {
        self.calls.permission.fetch_add(1, Ordering::SeqCst);
        run(&self.permission, "permission").await
    }

    async fn current_position(&self, _timeout: Duration) -> Result<Coordinates, LocationError> {
        self.calls.position.fetch_add(1, Ordering::SeqCst);
        run(&self.position, "position").await
    }

    async fn reverse_geocode(&self, _position: Coordinates) -> Result<Vec<Place>, LocationError> {
        self.calls.geocode.fetch_add(1, Ordering::SeqCst);
        run(&self.places, "geocode").await
    }
}
