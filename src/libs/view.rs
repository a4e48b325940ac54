//! Console table views for projects, tasks, and ideas.

use crate::libs::progress;
use crate::libs::project::{Idea, Project, Task};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the project overview table with derived progress.
    pub fn projects(projects: &[(Project, Vec<Task>)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CLIENT", "DUE DATE", "PRIORITY", "PROGRESS", "STATUS"]);
        for (project, tasks) in projects {
            let percent = progress::calculate_progress(tasks);
            table.add_row(row![
                project.id,
                project.name,
                project.client_name,
                project.due_date,
                project.priority.label(),
                format!("{}%", percent),
                project.status.label()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders a project's task list with completion marks.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TASK"]);
        for task in tasks {
            let mark = if task.completed { "[x]" } else { "[ ]" };
            table.add_row(row![task.id, mark, task.text]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders a project's idea notes.
    pub fn ideas(ideas: &[Idea]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "IDEA"]);
        for idea in ideas {
            table.add_row(row![idea.id, idea.text]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the full project detail view: metadata, progress, tasks,
    /// and ideas.
    pub fn project_details(project: &Project, tasks: &[Task]) -> Result<()> {
        let percent = progress::calculate_progress(tasks);

        let mut table = Table::new();
        table.add_row(row!["NAME", project.name]);
        table.add_row(row!["CLIENT", project.client_name]);
        table.add_row(row!["DESCRIPTION", project.description]);
        table.add_row(row!["DUE DATE", project.due_date]);
        table.add_row(row!["PRIORITY", project.priority.label()]);
        table.add_row(row!["STATUS", project.status.label()]);
        table.add_row(row!["PROGRESS", format!("{}%", percent)]);
        table.printstd();

        if !tasks.is_empty() {
            Self::tasks(tasks)?;
        }
        if !project.ideas.is_empty() {
            Self::ideas(&project.ideas)?;
        }

        Ok(())
    }
}
