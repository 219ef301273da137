#[cfg(test)]
mod tests {
    use daytask::libs::task::{Column, Priority, Repeat, TaskDraft, TaskPatch, Weekday};
    use daytask::store::TaskStore;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FileTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for FileTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.xlsx");
            FileTestContext { _temp_dir: temp_dir, path }
        }
    }

    /// Writes a workbook with arbitrary header and rows, as another tool would.
    fn write_sheet(path: &Path, header: &[&str], rows: &[&[&str]]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (col, name) in header.iter().enumerate() {
            worksheet.write_string(0, col as u16, *name).unwrap();
        }
        for (i, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(i as u32 + 1, col as u16, *value).unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut FileTestContext) {
        let store = TaskStore::open(&ctx.path);
        let id = store
            .create(TaskDraft {
                title: "Test".to_string(),
                description: String::new(),
                day: "الأحد".parse::<Weekday>().unwrap(),
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                priority: "عالية".parse::<Priority>().unwrap(),
                repeat: "بدون".parse::<Repeat>().unwrap(),
            })
            .unwrap();
        store
            .create(TaskDraft {
                title: "Gym".to_string(),
                description: "Leg day, bring water".to_string(),
                day: Weekday::Wednesday,
                start_time: "18:30".to_string(),
                end_time: "19:30".to_string(),
                priority: Priority::Low,
                repeat: Repeat::Weekly,
            })
            .unwrap();
        store.save().unwrap();

        let reloaded = TaskStore::open(&ctx.path);
        assert_eq!(reloaded.get_all(), store.get_all());

        let task = reloaded.get(&id).unwrap();
        assert_eq!(task.title, "Test");
        assert_eq!(task.field(Column::Day), "الأحد");
        assert_eq!(task.start_time, "09:00");
        assert_eq!(task.end_time, "10:00");
        assert_eq!(task.field(Column::Priority), "عالية");
        assert_eq!(task.field(Column::Repeat), "بدون");
        assert_eq!(task.description, "");
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_missing_column_is_backfilled_with_empty_string(ctx: &mut FileTestContext) {
        write_sheet(
            &ctx.path,
            &["id", "title", "description", "day", "start_time", "end_time", "priority"],
            &[
                &["a1", "Read", "", "السبت", "08:00", "08:30", "متوسطة"],
                &["a2", "Walk", "park", "الجمعة", "17:00", "18:00", "منخفضة"],
            ],
        );

        let store = TaskStore::open(&ctx.path);
        let tasks = store.get_all();
        assert_eq!(tasks.len(), 2);
        for task in &tasks {
            assert_eq!(task.repeat, None);
            assert_eq!(task.field(Column::Repeat), "");
        }
        assert_eq!(tasks[0].day, Some(Weekday::Saturday));
        assert_eq!(tasks[1].priority, Some(Priority::Low));
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_columns_are_matched_by_name_and_extras_dropped(ctx: &mut FileTestContext) {
        write_sheet(
            &ctx.path,
            &["title", "notes", "repeat", "id", "start_time"],
            &[&["Call mom", "ignored", "يومي", "b1", "20:00"]],
        );

        let store = TaskStore::open(&ctx.path);
        let task = store.get("b1").unwrap();
        assert_eq!(task.title, "Call mom");
        assert_eq!(task.repeat, Some(Repeat::Daily));
        assert_eq!(task.start_time, "20:00");
        assert_eq!(task.day, None);
        assert_eq!(task.end_time, "");

        // Saving writes the fixed column set and nothing else.
        store.save().unwrap();
        let rewritten = TaskStore::open(&ctx.path);
        assert_eq!(rewritten.get_all(), store.get_all());
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_unknown_labels_survive_saves_of_other_rows(ctx: &mut FileTestContext) {
        write_sheet(
            &ctx.path,
            &["id", "title", "description", "day", "start_time", "end_time", "priority", "repeat"],
            &[
                &["a", "A", "", "الأحد", "09:00", "10:00", "عاجلة", "شهري"],
                &["b", "B", "", "الاثنين", "11:00", "12:00", "عالية", "بدون"],
            ],
        );

        let store = TaskStore::open(&ctx.path);
        let patch = TaskPatch {
            title: Some("B2".to_string()),
            ..Default::default()
        };
        assert!(store.update("b", &patch).unwrap());

        let reopened = TaskStore::open(&ctx.path);
        let a = reopened.get("a").unwrap();
        assert_eq!(a.priority, None);
        assert_eq!(a.repeat, None);
        assert_eq!(a.cells(), ["a", "A", "", "الأحد", "09:00", "10:00", "عاجلة", "شهري"]);
        assert_eq!(reopened.get("b").unwrap().title, "B2");
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_time_cells_read_as_hours_and_minutes(ctx: &mut FileTestContext) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let time_format = Format::new().set_num_format("hh:mm");
        for (col, name) in ["id", "title", "start_time", "end_time"].iter().enumerate() {
            worksheet.write_string(0, col as u16, *name).unwrap();
        }
        worksheet.write_string(1, 0, "t1").unwrap();
        worksheet.write_string(1, 1, "Breakfast").unwrap();
        worksheet
            .write_datetime_with_format(1, 2, &ExcelDateTime::from_hms(9, 0, 0).unwrap(), &time_format)
            .unwrap();
        worksheet
            .write_datetime_with_format(1, 3, &ExcelDateTime::from_hms(9, 30, 0).unwrap(), &time_format)
            .unwrap();
        workbook.save(&ctx.path).unwrap();

        let store = TaskStore::open(&ctx.path);
        let task = store.get("t1").unwrap();
        assert_eq!(task.start_time, "09:00");
        assert_eq!(task.end_time, "09:30");

        // Saving keeps the readable form.
        store.save().unwrap();
        assert_eq!(TaskStore::open(&ctx.path).get("t1").unwrap().start_time, "09:00");
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_corrupt_file_loads_as_empty_store(ctx: &mut FileTestContext) {
        std::fs::write(&ctx.path, b"this is not a workbook").unwrap();

        let store = TaskStore::open(&ctx.path);
        assert!(store.is_empty());

        // The original file is left alone until the next save.
        assert_eq!(std::fs::read(&ctx.path).unwrap(), b"this is not a workbook");
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_missing_file_loads_as_empty_store(ctx: &mut FileTestContext) {
        let store = TaskStore::open(&ctx.path);
        assert!(store.is_empty());
        assert!(!ctx.path.exists());
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_reload_picks_up_external_changes(ctx: &mut FileTestContext) {
        let store = TaskStore::open(&ctx.path);
        assert!(store.is_empty());

        write_sheet(&ctx.path, &["id", "title"], &[&["c1", "Added elsewhere"]]);
        store.reload();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("c1").unwrap().title, "Added elsewhere");
    }
}
