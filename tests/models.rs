#[cfg(test)]
mod tests {
    use proman::libs::project::{Priority, Project, Status, Task};

    #[test]
    fn test_status_storage_tokens() {
        assert_eq!(Status::Pending.token(), "pending");
        assert_eq!(Status::InProgress.token(), "in_progress");
        assert_eq!(Status::Completed.token(), "completed");
    }

    #[test]
    fn test_status_display_labels() {
        assert_eq!(Status::Pending.label(), "Por hacer");
        assert_eq!(Status::InProgress.label(), "En progreso");
        assert_eq!(Status::Completed.label(), "Terminado");
    }

    #[test]
    fn test_status_token_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_token(status.token()), Some(status));
        }
        assert_eq!(Status::from_token("archived"), None);
    }

    #[test]
    fn test_status_serializes_to_wire_token() {
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"in_progress\"");
        let status: Status = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, Status::Completed);
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(Status::default(), Status::Pending);
    }

    #[test]
    fn test_priority_tokens_match_localized_labels() {
        assert_eq!(Priority::High.token(), "Alta");
        assert_eq!(Priority::Medium.token(), "Media");
        assert_eq!(Priority::Low.token(), "Baja");
        for priority in Priority::ALL {
            assert_eq!(priority.label(), priority.token());
        }
    }

    #[test]
    fn test_priority_serializes_to_wire_token() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"Alta\"");
        let priority: Priority = serde_json::from_str("\"Baja\"").unwrap();
        assert_eq!(priority, Priority::Low);
    }

    #[test]
    fn test_status_from_token_rejects_display_labels() {
        // The status argument on the command line takes wire tokens only
        assert_eq!(Status::from_token("Por hacer"), None);
        assert_eq!(Status::from_token("En progreso"), None);
        assert_eq!(Status::from_token("Terminado"), None);
    }

    #[test]
    fn test_priority_from_token_is_case_insensitive() {
        assert_eq!(Priority::from_token("alta"), Some(Priority::High));
        assert_eq!(Priority::from_token("MEDIA"), Some(Priority::Medium));
        assert_eq!(Priority::from_token("Baja"), Some(Priority::Low));
        assert_eq!(Priority::from_token("urgent"), None);
    }

    #[test]
    fn test_priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_project_deserializes_from_store_document() {
        let doc = r#"{
            "id": "abc123",
            "name": "Rediseño web",
            "clientName": "Acme",
            "description": "Nueva página corporativa",
            "priority": "Alta",
            "dueDate": "9/Abril/2025",
            "status": "in_progress",
            "ideas": [{ "id": "1", "text": "Usar modo oscuro" }]
        }"#;

        let project: Project = serde_json::from_str(doc).unwrap();
        assert_eq!(project.id, "abc123");
        assert_eq!(project.client_name, "Acme");
        assert_eq!(project.priority, Priority::High);
        assert_eq!(project.due_date, "9/Abril/2025");
        assert_eq!(project.status, Status::InProgress);
        assert_eq!(project.ideas.len(), 1);
    }

    #[test]
    fn test_project_missing_optional_fields_use_defaults() {
        let doc = r#"{ "name": "Mínimo", "clientName": "Acme" }"#;

        let project: Project = serde_json::from_str(doc).unwrap();
        assert_eq!(project.status, Status::Pending);
        assert_eq!(project.priority, Priority::Medium);
        assert!(project.ideas.is_empty());
        assert!(project.description.is_empty());
    }

    #[test]
    fn test_task_deserializes_with_created_at() {
        let doc = r#"{ "id": "t1", "text": "Diseñar logo", "completed": true, "createdAt": "2025-04-01T10:00:00Z" }"#;

        let task: Task = serde_json::from_str(doc).unwrap();
        assert!(task.completed);
        assert!(task.created_at.is_some());
    }

    #[test]
    fn test_new_task_starts_uncompleted() {
        let task = Task::new("Preparar presupuesto");
        assert!(!task.completed);
        assert!(task.created_at.is_none());
    }
}
