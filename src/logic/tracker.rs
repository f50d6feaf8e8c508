use chrono::{DateTime, Utc};

use crate::{
    error::TrackerError,
    models::crop::{RecommendedCrop, TrackedCrop},
};

/// Crops the user has planted, in planting order.
#[derive(Debug, Default)]
pub struct CropTracker {
    crops: Vec<TrackedCrop>,
}

impl CropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crops(&self) -> &[TrackedCrop] {
        &self.crops
    }

    pub fn get(&self, id: &str) -> Option<&TrackedCrop> {
        self.crops.iter().find(|c| c.id == id)
    }

    /// Starts tracking a crop. A crop name can only be planted once.
    pub fn plant(
        &mut self,
        crop: RecommendedCrop,
        now: DateTime<Utc>,
    ) -> Result<&TrackedCrop, TrackerError> {
        if self.crops.iter().any(|c| c.crop.name == crop.name) {
            return Err(TrackerError::AlreadyPlanted(crop.name));
        }

        let base = format!("{}-{}", crop.name, now.timestamp_millis());
        let mut id = base.clone();
        let mut suffix = 1;
        while self.get(&id).is_some() {
            id = format!("{base}-{suffix}");
            suffix += 1;
        }

        log::info!("planted '{}' as {id}", crop.name);
        self.crops.push(TrackedCrop {
            id,
            crop,
            planted_date: now,
            watering_log: Vec::new(),
        });
        Ok(&self.crops[self.crops.len() - 1])
    }

    pub fn water(&mut self, id: &str, now: DateTime<Utc>) -> Result<&TrackedCrop, TrackerError> {
        let crop = self
            .crops
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;
        crop.watering_log.push(now);
        log::debug!("watered {id} ({} time(s))", crop.watering_log.len());
        Ok(crop)
    }

    pub fn remove(&mut self, id: &str) -> Result<TrackedCrop, TrackerError> {
        let index = self
            .crops
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;
        log::info!("removed tracked crop {id}");
        Ok(self.crops.remove(index))
    }
}
