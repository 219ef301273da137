use super::task::{Column, Task};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DAY", "START", "END", "PRIORITY", "REPEAT", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.field(Column::Day),
                task.start_time,
                task.end_time,
                task.field(Column::Priority),
                task.field(Column::Repeat),
                task.description
            ]);
        }
        table.printstd();
    }
}
