//! Sample history recording and export.

use std::collections::HashMap;

use crate::stream::Sample;

/// Records delivered samples for offline analysis or export.
///
/// Registration snapshots (`area: None`) are skipped, so the history
/// covers accepted samples only.
#[derive(Debug, Clone, Default)]
pub struct SampleRecorder {
    /// Sampled directions as [x, y, z] triples.
    pub direction_history: Vec<[f64; 3]>,
    /// Projected area per accepted sample.
    pub area_history: Vec<f64>,
    /// Running mean after each accepted sample.
    pub mean_history: Vec<f64>,
    /// Sequence number per accepted sample.
    pub seq_history: Vec<u64>,
    target: f64,
}

impl SampleRecorder {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one delivered sample. Snapshot deliveries are skipped.
    pub fn record(&mut self, sample: &Sample) {
        let area = match sample.area {
            Some(a) => a,
            None => return,
        };
        self.direction_history.push([
            sample.direction.x,
            sample.direction.y,
            sample.direction.z,
        ]);
        self.area_history.push(area);
        self.mean_history.push(sample.mean);
        self.seq_history.push(sample.seq);
        self.target = sample.target;
    }

    /// Number of samples recorded.
    pub fn len(&self) -> usize {
        self.area_history.len()
    }

    /// Check if the recorder is empty.
    pub fn is_empty(&self) -> bool {
        self.area_history.is_empty()
    }

    /// Clear all recorded data.
    pub fn clear(&mut self) {
        self.direction_history.clear();
        self.area_history.clear();
        self.mean_history.clear();
        self.seq_history.clear();
    }

    /// Summary of the recorded run.
    pub fn stats(&self) -> RecorderStats {
        if self.is_empty() {
            return RecorderStats::default();
        }
        let final_mean = *self.mean_history.last().unwrap();
        RecorderStats {
            nsamples: self.len(),
            final_mean,
            target: self.target,
            target_gap: final_mean - self.target,
        }
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut data = HashMap::new();
        data.insert("direction", serde_json::to_value(&self.direction_history)?);
        data.insert("area", serde_json::to_value(&self.area_history)?);
        data.insert("mean", serde_json::to_value(&self.mean_history)?);
        data.insert("seq", serde_json::to_value(&self.seq_history)?);
        serde_json::to_string_pretty(&data)
    }

    /// Export to JSON file.
    pub fn to_json_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Statistics about a recorded run.
#[derive(Debug, Clone, Default)]
pub struct RecorderStats {
    /// Number of recorded samples.
    pub nsamples: usize,
    /// Running mean after the last sample.
    pub final_mean: f64,
    /// Expected mean, S/4.
    pub target: f64,
    /// Signed gap between the final mean and the target.
    pub target_gap: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_math::Vec3;

    fn make_sample(seq: u64, area: Option<f64>, mean: f64) -> Sample {
        Sample {
            direction: Vec3::new(0.0, 1.0, 0.0),
            area,
            seq,
            mean,
            target: 1.5,
            reference_area: 6.0,
        }
    }

    #[test]
    fn test_records_accepted_samples() {
        let mut recorder = SampleRecorder::new();
        for i in 1..=5 {
            recorder.record(&make_sample(i, Some(1.0 + i as f64 * 0.1), 1.2));
        }
        assert_eq!(recorder.len(), 5);
        assert_eq!(recorder.seq_history, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_snapshots_are_skipped() {
        let mut recorder = SampleRecorder::new();
        recorder.record(&make_sample(3, None, 1.4));
        assert!(recorder.is_empty());

        recorder.record(&make_sample(4, Some(1.3), 1.4));
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_stats_reflect_last_sample() {
        let mut recorder = SampleRecorder::new();
        recorder.record(&make_sample(1, Some(1.0), 1.0));
        recorder.record(&make_sample(2, Some(1.6), 1.3));

        let stats = recorder.stats();
        assert_eq!(stats.nsamples, 2);
        assert_eq!(stats.final_mean, 1.3);
        assert_eq!(stats.target, 1.5);
        assert!((stats.target_gap - (-0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_stats_when_empty() {
        let recorder = SampleRecorder::new();
        let stats = recorder.stats();
        assert_eq!(stats.nsamples, 0);
        assert_eq!(stats.final_mean, 0.0);
    }

    #[test]
    fn test_to_json_contains_histories() {
        let mut recorder = SampleRecorder::new();
        recorder.record(&make_sample(1, Some(1.0), 1.0));

        let json = recorder.to_json().unwrap();
        assert!(json.contains("\"direction\""));
        assert!(json.contains("\"area\""));
        assert!(json.contains("\"mean\""));
        assert!(json.contains("\"seq\""));
    }

    #[test]
    fn test_clear() {
        let mut recorder = SampleRecorder::new();
        recorder.record(&make_sample(1, Some(1.0), 1.0));
        recorder.record(&make_sample(2, Some(1.2), 1.1));
        assert_eq!(recorder.len(), 2);

        recorder.clear();
        assert!(recorder.is_empty());
        assert_eq!(recorder.direction_history.len(), 0);
    }
}
