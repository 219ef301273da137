#[cfg(test)]
mod tests {
    use daytask::libs::export::{ExportFormat, ExportTask, Exporter};
    use daytask::libs::task::{Priority, Repeat, TaskDraft, Weekday};
    use daytask::store::TaskStore;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        store: TaskStore,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TaskStore::open(temp_dir.path().join("tasks.xlsx"));
            store
                .create(TaskDraft {
                    title: "Standup".to_string(),
                    description: "Daily sync, 15 minutes".to_string(),
                    day: Weekday::Sunday,
                    start_time: "09:00".to_string(),
                    end_time: "09:15".to_string(),
                    priority: Priority::High,
                    repeat: Repeat::Daily,
                })
                .unwrap();
            store
                .create(TaskDraft {
                    title: "Groceries".to_string(),
                    description: String::new(),
                    day: Weekday::Thursday,
                    start_time: "18:00".to_string(),
                    end_time: "19:00".to_string(),
                    priority: Priority::Low,
                    repeat: Repeat::None,
                })
                .unwrap();
            ExportTestContext { temp_dir, store }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("test_export.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(&ctx.store.get_all()).unwrap();

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let header: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(
            header,
            vec!["id", "title", "description", "day", "start_time", "end_time", "priority", "repeat"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Standup");
        assert_eq!(&rows[0][2], "Daily sync, 15 minutes");
        assert_eq!(&rows[0][3], "الأحد");
        assert_eq!(&rows[0][6], "عالية");
        assert_eq!(&rows[0][7], "يومي");
        assert_eq!(&rows[1][2], "");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("test_export.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(&ctx.store.get_all()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
        let expected: Vec<ExportTask> = ctx.store.get_all().iter().map(ExportTask::from).collect();
        assert_eq!(rows, serde_json::to_value(&expected).unwrap());
        assert_eq!(rows[1]["day"], "الخميس");
        assert_eq!(rows[1]["repeat"], "بدون");
        assert_eq!(rows[0]["start_time"], "09:00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("test_export.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()));
        exporter.export(&ctx.store.get_all()).unwrap();

        let exported = TaskStore::open(&output_path);
        assert_eq!(exported.get_all(), ctx.store.get_all());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_output_path(_ctx: &mut ExportTestContext) {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("daytask_export_"));
        assert!(name.ends_with(".json"));

        let exporter = Exporter::new(ExportFormat::Excel, None);
        assert_eq!(exporter.output_path().extension().unwrap(), "xlsx");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_table(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("empty.csv");
        Exporter::new(ExportFormat::Csv, Some(output_path.clone())).export(&[]).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.trim_end(), "id,title,description,day,start_time,end_time,priority,repeat");
    }
}
