#[cfg(test)]
mod tests {
    use taskcard::libs::card::{
        render_task_card, render_task_list, RenderError, TaskCard, CHECK_ICON_CHECKED, CHECK_ICON_UNCHECKED,
        FAVORITE_ICON_HIGHLIGHTED, FAVORITE_ICON_PLAIN, OVERDUE_SUFFIX,
    };
    use taskcard::libs::formatter::{ChronoDateFormatter, DateError};
    use taskcard::libs::task::{Task, TaskList};

    fn task(id: i64, name: &str) -> Task {
        Task::new(id, name)
    }

    fn render(task: &Task) -> String {
        render_task_card(task, &ChronoDateFormatter::default()).unwrap()
    }

    #[test]
    fn test_full_card_markup() {
        let mut buy_milk = task(7, "Buy milk");
        buy_milk.important = true;
        buy_milk.due_date = Some("2024-01-01".to_string());
        buy_milk.overdue = true;

        let expected = concat!(
            r#"<div class="task-card" data-task-id="7" id="task-7">"#,
            r#"<div class="d-flex justify-content-between align-items-center">"#,
            r#"<div class="d-flex align-items-center">"#,
            r#"<i class="far fa-circle custom-check" data-id="7"></i>"#,
            r#"<div><div class="task-name">Buy milk</div>"#,
            r#"<div class="task-due-date">Jan 1, 2024 · Overdue</div></div>"#,
            r#"</div>"#,
            r#"<i class="far fa-star text-primary mark-favorite" data-id="7"></i>"#,
            r#"</div></div>"#,
        );
        assert_eq!(render(&buy_milk), expected);
    }

    #[test]
    fn test_open_important_overdue_task() {
        let mut buy_milk = task(7, "Buy milk");
        buy_milk.important = true;
        buy_milk.due_date = Some("2024-01-01".to_string());
        buy_milk.overdue = true;

        let html = render(&buy_milk);
        assert!(html.contains(r#"data-task-id="7""#));
        assert!(html.contains(r#"class="far fa-circle custom-check""#));
        assert!(html.contains(r#"class="far fa-star text-primary mark-favorite""#));
        assert!(html.contains(r#"<div class="task-due-date">Jan 1, 2024 · Overdue</div>"#));
        assert!(!html.contains("strikethrough"));
    }

    #[test]
    fn test_completed_task_without_due_date() {
        let mut plan_trip = task(2, "Plan trip");
        plan_trip.task_completed = true;

        let html = render(&plan_trip);
        assert!(html.contains(r#"<div class="task-name strikethrough">Plan trip</div>"#));
        assert!(html.contains(r#"class="far fa-check-circle custom-check""#));
        assert!(html.contains(r#"class="far fa-star mark-favorite""#));
        assert!(!html.contains("task-due-date"));
    }

    #[test]
    fn test_check_icon_never_both_variants() {
        for completed in [true, false] {
            let mut item = task(1, "Toggle");
            item.task_completed = completed;
            let html = render(&item);

            let checked = html.contains(&format!(r#"class="{} custom-check""#, CHECK_ICON_CHECKED));
            let unchecked = html.contains(&format!(r#"class="{} custom-check""#, CHECK_ICON_UNCHECKED));
            assert_eq!(checked, completed);
            assert_eq!(unchecked, !completed);
            assert_eq!(html.contains("strikethrough"), completed);
        }
    }

    #[test]
    fn test_favorite_icon_classes() {
        let mut item = task(3, "Star me");
        let plain = render(&item);
        assert!(plain.contains(&format!(r#"class="{} mark-favorite""#, FAVORITE_ICON_PLAIN)));
        assert!(!plain.contains("text-primary"));

        item.important = true;
        let highlighted = render(&item);
        assert!(highlighted.contains(&format!(r#"class="{} mark-favorite""#, FAVORITE_ICON_HIGHLIGHTED)));
    }

    #[test]
    fn test_due_date_without_overdue() {
        let mut item = task(4, "Dentist");
        item.due_date = Some("2024-03-15".to_string());

        let html = render(&item);
        assert!(html.contains(r#"<div class="task-due-date">Mar 15, 2024</div>"#));
        assert!(!html.contains("Overdue"));
    }

    #[test]
    fn test_overdue_without_due_date_is_not_rendered() {
        let mut item = task(5, "Someday");
        item.overdue = true;

        let html = render(&item);
        assert!(!html.contains("task-due-date"));
        assert!(!html.contains("Overdue"));
    }

    #[test]
    fn test_empty_due_date_skips_formatter() {
        let mut item = task(6, "No date");
        item.due_date = Some(String::new());
        item.overdue = true;

        let failing = |raw: &str| -> Result<String, DateError> { Err(DateError::Unparseable(raw.to_string())) };
        let html = render_task_card(&item, &failing).unwrap();
        assert!(!html.contains("task-due-date"));
    }

    #[test]
    fn test_whitespace_due_date_counts_as_absent() {
        let mut item = task(10, "Blank date");
        item.due_date = Some("  \t ".to_string());
        item.overdue = true;

        let failing = |raw: &str| -> Result<String, DateError> { Err(DateError::Unparseable(raw.to_string())) };
        let html = render_task_card(&item, &failing).unwrap();
        assert!(!html.contains("task-due-date"));

        let list = render_task_list(&[item, task(11, "After")], &ChronoDateFormatter::default()).unwrap();
        assert_eq!(list.lines().count(), 2);
    }

    #[test]
    fn test_empty_formatted_date_hides_line() {
        let mut item = task(8, "Blank");
        item.due_date = Some("2024-01-01".to_string());
        item.overdue = true;

        let blank = |_: &str| -> Result<String, DateError> { Ok(String::new()) };
        let html = render_task_card(&item, &blank).unwrap();
        assert!(!html.contains("task-due-date"));
        assert!(!html.contains("Overdue"));
    }

    #[test]
    fn test_injected_formatter_receives_raw_value() {
        let mut item = task(9, "Raw");
        item.due_date = Some("next tuesday".to_string());
        item.overdue = true;

        let echo = |raw: &str| -> Result<String, DateError> { Ok(format!("<{}>", raw)) };
        let card = TaskCard::new(&item, &echo).unwrap();
        assert_eq!(card.due_line.as_deref(), Some("<next tuesday> · Overdue"));
        assert!(card.due_line.unwrap().ends_with(OVERDUE_SUFFIX));
    }

    #[test]
    fn test_task_id_appears_three_times() {
        let mut item = task(42, "Count ids");
        item.due_date = Some("2024-01-01".to_string());

        let html = render(&item);
        assert_eq!(html.matches(r#"data-task-id="42""#).count(), 1);
        assert_eq!(html.matches(r#"data-id="42""#).count(), 2);
        assert_eq!(html.matches(r#"id="task-42""#).count(), 1);
    }

    #[test]
    fn test_string_task_id() {
        let item = Task::new("ms-AAMk", "Imported");
        let html = render(&item);
        assert!(html.contains(r#"data-task-id="ms-AAMk""#));
        assert!(html.contains(r#"id="task-ms-AAMk""#));
        assert_eq!(html.matches(r#"data-id="ms-AAMk""#).count(), 2);
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let html = render(&Task::default());
        assert!(html.contains(r#"data-task-id="""#));
        assert!(html.contains(r#"id="task-""#));
        assert!(html.contains(r#"<div class="task-name"></div>"#));
        assert!(!html.contains("task-due-date"));
    }

    #[test]
    fn test_untrusted_text_is_escaped() {
        let item = Task::new(r#"1" onclick="x"#, "<script>alert('hi')</script> & co");
        let html = render(&item);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; co"));
        assert!(!html.contains(r#"" onclick=""#));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut item = task(11, "Same");
        item.important = true;
        item.due_date = Some("2024-06-01T06:00:00Z".to_string());
        item.overdue = true;

        let before = item.clone();
        let first = render(&item);
        let second = render(&item);
        assert_eq!(first, second);
        assert_eq!(item, before);
    }

    #[test]
    fn test_formatter_error_propagates() {
        let mut item = task(12, "Broken date");
        item.due_date = Some("not a date".to_string());

        let result = render_task_card(&item, &ChronoDateFormatter::default());
        assert_eq!(
            result,
            Err(RenderError::Date(DateError::Unparseable("not a date".to_string())))
        );
    }

    #[test]
    fn test_card_from_api_json() {
        let json = r#"{"id": 7, "task_name": "Buy milk", "task_completed": false, "important": true,
                       "due_date": "2024-01-01", "overdue": true, "list_name": 3}"#;
        let tasks = TaskList::from_json(json).unwrap().into_inner();
        let html = render(&tasks[0]);
        assert!(html.contains(r#"data-task-id="7""#));
        assert!(html.contains("Jan 1, 2024 · Overdue"));
    }

    #[test]
    fn test_render_task_list_keeps_order() {
        let tasks = vec![task(1, "First"), task(2, "Second"), task(3, "Third")];
        let html = render_task_list(&tasks, &ChronoDateFormatter::default()).unwrap();

        let cards: Vec<&str> = html.lines().collect();
        assert_eq!(cards.len(), 3);
        assert!(cards[0].contains("First"));
        assert!(cards[1].contains("Second"));
        assert!(cards[2].contains("Third"));
    }

    #[test]
    fn test_render_task_list_stops_on_error() {
        let mut broken = task(2, "Broken");
        broken.due_date = Some("??".to_string());
        let tasks = vec![task(1, "Fine"), broken];

        assert!(render_task_list(&tasks, &ChronoDateFormatter::default()).is_err());
        assert_eq!(render_task_list(&[], &ChronoDateFormatter::default()).unwrap(), "");
    }
}
