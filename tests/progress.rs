#[cfg(test)]
mod tests {
    use proman::libs::progress::{calculate_progress, project_status};
    use proman::libs::project::{Status, Task};

    fn make_tasks(completed: usize, total: usize) -> Vec<Task> {
        (0..total)
            .map(|i| {
                let mut task = Task::new(&format!("Task {}", i + 1));
                task.completed = i < completed;
                task
            })
            .collect()
    }

    #[test]
    fn test_progress_empty_task_list_is_zero() {
        assert_eq!(calculate_progress(&[]), 0);
    }

    #[test]
    fn test_progress_half_completed() {
        let tasks = make_tasks(2, 4);
        assert_eq!(calculate_progress(&tasks), 50);
    }

    #[test]
    fn test_progress_rounds_arithmetically() {
        // 1/3 = 33.33... rounds down to 33
        assert_eq!(calculate_progress(&make_tasks(1, 3)), 33);
        // 2/3 = 66.66... rounds up to 67
        assert_eq!(calculate_progress(&make_tasks(2, 3)), 67);
        // 1/8 = 12.5 rounds half up to 13, not truncated to 12
        assert_eq!(calculate_progress(&make_tasks(1, 8)), 13);
        // 1/6 = 16.66... rounds up to 17
        assert_eq!(calculate_progress(&make_tasks(1, 6)), 17);
    }

    #[test]
    fn test_progress_all_completed_is_always_100() {
        for total in 1..=10 {
            let tasks = make_tasks(total, total);
            assert_eq!(calculate_progress(&tasks), 100);
        }
    }

    #[test]
    fn test_progress_none_completed_is_zero() {
        assert_eq!(calculate_progress(&make_tasks(0, 5)), 0);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(project_status(0), Status::Pending);
        assert_eq!(project_status(50), Status::InProgress);
        assert_eq!(project_status(100), Status::Completed);
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(project_status(1), Status::InProgress);
        assert_eq!(project_status(99), Status::InProgress);
    }

    #[test]
    fn test_status_out_of_range_values_are_not_clamped() {
        // Values outside [0, 100] fall through the same precedence rules
        assert_eq!(project_status(-5), Status::Pending);
        assert_eq!(project_status(150), Status::InProgress);
    }

    #[test]
    fn test_status_matches_derived_progress() {
        assert_eq!(project_status(calculate_progress(&[])), Status::Pending);
        assert_eq!(project_status(calculate_progress(&make_tasks(1, 2))), Status::InProgress);
        assert_eq!(project_status(calculate_progress(&make_tasks(3, 3))), Status::Completed);
    }
}
