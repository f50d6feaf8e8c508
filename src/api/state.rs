use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    config::AppConfig,
    error::GridError,
    logic::{session::TerraceSession, tracker::CropTracker},
};

/// Session-local state shared by all workers. Nothing here outlives the process.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    terrace: Mutex<TerraceSession>,
    tracker: Mutex<CropTracker>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, GridError> {
        let terrace = TerraceSession::new(config.default_rows, config.default_cols)?;
        Ok(Self {
            config,
            terrace: Mutex::new(terrace),
            tracker: Mutex::new(CropTracker::new()),
        })
    }

    pub fn terrace(&self) -> MutexGuard<'_, TerraceSession> {
        self.terrace.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn tracker(&self) -> MutexGuard<'_, CropTracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
