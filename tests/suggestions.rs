#[cfg(test)]
mod tests {
    use proman::libs::progress::suggest_status_change;
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
    fn test_all_completed_suggests_completed() {
        let tasks = make_tasks(3, 3);
        let suggestion = suggest_status_change(&tasks, Status::InProgress).unwrap();
        assert_eq!(suggestion.suggested, Status::Completed);
        assert_eq!(
            suggestion.message,
            "¡Todas las tareas están completadas! ¿Quieres marcar este proyecto como \"Terminado\"?"
        );
    }

    #[test]
    fn test_all_completed_from_pending_suggests_completed() {
        let tasks = make_tasks(2, 2);
        let suggestion = suggest_status_change(&tasks, Status::Pending).unwrap();
        assert_eq!(suggestion.suggested, Status::Completed);
    }

    #[test]
    fn test_partial_progress_from_pending_suggests_in_progress() {
        let tasks = make_tasks(1, 4);
        let suggestion = suggest_status_change(&tasks, Status::Pending).unwrap();
        assert_eq!(suggestion.suggested, Status::InProgress);
        assert_eq!(
            suggestion.message,
            "Has comenzado a trabajar en este proyecto. ¿Quieres cambiarlo a \"En progreso\"?"
        );
    }

    #[test]
    fn test_already_completed_gets_no_suggestion() {
        let tasks = make_tasks(3, 3);
        assert!(suggest_status_change(&tasks, Status::Completed).is_none());
    }

    #[test]
    fn test_partial_progress_while_in_progress_gets_no_suggestion() {
        let tasks = make_tasks(2, 4);
        assert!(suggest_status_change(&tasks, Status::InProgress).is_none());
    }

    #[test]
    fn test_no_progress_gets_no_suggestion() {
        let tasks = make_tasks(0, 4);
        assert!(suggest_status_change(&tasks, Status::Pending).is_none());
    }

    #[test]
    fn test_empty_task_list_gets_no_suggestion() {
        for status in Status::ALL {
            assert!(suggest_status_change(&[], status).is_none());
        }
    }

    #[test]
    fn test_no_backward_suggestion_after_reopening_tasks() {
        // Un-completing tasks while the project is marked completed never
        // prompts a revert
        let tasks = make_tasks(0, 3);
        assert!(suggest_status_change(&tasks, Status::Completed).is_none());

        let tasks = make_tasks(1, 3);
        assert!(suggest_status_change(&tasks, Status::Completed).is_none());

        let tasks = make_tasks(0, 3);
        assert!(suggest_status_change(&tasks, Status::InProgress).is_none());
    }
}
