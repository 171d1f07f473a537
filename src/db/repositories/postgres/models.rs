use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::todos;
use crate::models::{Todo, TodoId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    pub text: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: Some(TodoId::new(row.id)),
            text: row.text,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

impl From<&Todo> for NewTodoRow {
    fn from(todo: &Todo) -> Self {
        NewTodoRow {
            text: todo.text.clone(),
            completed: todo.completed,
            created_at: todo.created_at,
        }
    }
}
