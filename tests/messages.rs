#[cfg(test)]
mod tests {
    use proman::libs::messages::Message;

    #[test]
    fn test_auth_failure_messages() {
        assert_eq!(Message::LoginFailed.to_string(), "Login failed");
        assert_eq!(Message::WrongPassword(3).to_string(), "Authentication failed after 3 attempts");
    }

    #[test]
    fn test_project_list_header() {
        assert_eq!(Message::ProjectsHeader.to_string(), "Projects");
    }

    #[test]
    fn test_data_storage_failure_message() {
        assert_eq!(Message::DataStoragePathError.to_string(), "DataStorage path error");
    }

    #[test]
    fn test_unknown_token_messages_name_the_expected_values() {
        let status = Message::UnknownStatus("done".to_string()).to_string();
        assert!(status.contains("'done'"));
        assert!(status.contains("pending, in_progress, or completed"));

        let priority = Message::UnknownPriority("urgent".to_string()).to_string();
        assert!(priority.contains("'urgent'"));
        assert!(priority.contains("Alta, Media, or Baja"));
    }

    #[test]
    fn test_suggestion_prompts_keep_product_wording() {
        assert_eq!(
            Message::SuggestMarkCompleted.to_string(),
            "¡Todas las tareas están completadas! ¿Quieres marcar este proyecto como \"Terminado\"?"
        );
        assert_eq!(
            Message::SuggestMarkInProgress.to_string(),
            "Has comenzado a trabajar en este proyecto. ¿Quieres cambiarlo a \"En progreso\"?"
        );
    }
}
