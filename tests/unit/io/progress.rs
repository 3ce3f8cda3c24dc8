//! Tests for per-file stage progress and batch display

#[cfg(test)]
mod tests {
    use autostereogram::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use autostereogram::io::progress::{ProgressManager, STEPS_PER_FILE, stage_label, stage_step};
    use autostereogram::stereogram::generator::Stage;
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.initialize(1);
        pm.start_file(0, Path::new("depth.png"));
        pm.update_stage(0, Stage::Tile);
        pm.update_stage(0, Stage::Background);
        pm.update_stage(0, Stage::Composite);
        pm.complete_file(0, Duration::from_millis(100));
        pm.finish();

        assert_eq!(pm.file_count(), 1);
    }

    #[test]
    fn test_completed_file_shows_elapsed_time() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.start_file(0, Path::new("depth.png"));
        assert_eq!(pm.file_label(0), Some("loading"));
        pm.update_stage(0, Stage::Background);
        assert_eq!(pm.file_label(0), Some("compositing"));
        pm.complete_file(0, Duration::from_millis(1500));

        assert_eq!(pm.file_label(0), Some("1.50s"));
        assert_eq!(pm.file_label(1), None);
        pm.finish();
    }

    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();

        assert_eq!(pm.file_count(), 0);
        pm.finish();
    }

    // Batch mode kicks in beyond the individual bar limit
    #[test]
    fn test_batch_mode_with_many_files() {
        let mut pm = ProgressManager::new();
        let count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;

        pm.initialize(count);
        for index in 0..count {
            pm.start_file(index, Path::new("depth.png"));
            pm.update_stage(index, Stage::Composite);
            pm.complete_file(index, Duration::from_millis(1));
        }
        pm.finish();

        assert_eq!(pm.file_count(), count);
    }

    #[test]
    fn test_updates_for_unknown_file_are_ignored() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        pm.update_stage(4, Stage::Tile);
        pm.complete_file(4, Duration::from_millis(1));
        pm.finish();
    }

    #[test]
    fn test_stage_steps_increase_within_bounds() {
        let steps = [
            stage_step(Stage::Tile),
            stage_step(Stage::Background),
            stage_step(Stage::Composite),
        ];

        assert!(steps.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(steps.iter().all(|&step| step > 1 && step < STEPS_PER_FILE));
    }

    #[test]
    fn test_stage_labels_name_next_step() {
        assert_eq!(stage_label(Stage::Tile), "tiling");
        assert_eq!(stage_label(Stage::Background), "compositing");
        assert_eq!(stage_label(Stage::Composite), "saving");
    }
}
