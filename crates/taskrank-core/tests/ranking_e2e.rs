//! End-to-end ranking pipeline tests.
//!
//! Exercises the full raw-records -> normalize -> score -> rank ->
//! explain path against a pinned reference day.

use chrono::NaiveDate;
use serde_json::{json, Value};
use taskrank_core::{analyze, suggest, NormalizedTask, ScoreCalculator, TaskPayload};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn analyze_scores_and_orders_the_reference_scenario() {
    let today = day(2024, 1, 10);
    let payload = json!([
        {"title": "A", "importance": 9, "estimated_hours": 3,
         "due_date": "2024-01-10", "dependencies": []},
        {"title": "B", "importance": 5, "estimated_hours": 1,
         "due_date": "2024-01-10", "dependencies": []},
        {"title": "C", "importance": 6, "estimated_hours": 4,
         "due_date": "2024-01-10", "dependencies": [1]},
    ]);
    let records = TaskPayload::parse(&payload.to_string()).unwrap().into_records();

    let ranked = analyze(&records, today);

    let summary: Vec<(&str, f64)> = ranked
        .iter()
        .map(|t| (t.task.title.as_str(), t.score))
        .collect();
    assert_eq!(summary, [("A", 120.0), ("B", 110.0), ("C", 95.0)]);
}

#[test]
fn urgency_is_a_step_function_of_days_until_due() {
    let today = day(2024, 1, 10);
    let calculator = ScoreCalculator::new(today);

    // Neutral task: importance 5 (+25), one hour (+15), no dependencies.
    let base = 25.0 + 15.0;
    let score_for = |due: Value| {
        let task = NormalizedTask::from_value(&json!({ "due_date": due }));
        calculator.score(&task)
    };

    assert_eq!(score_for(json!("2024-01-09")), 100.0 + base); // overdue
    assert_eq!(score_for(json!("2024-01-10")), 70.0 + base); // due today
    assert_eq!(score_for(json!("2024-01-11")), 70.0 + base); // due tomorrow
    assert_eq!(score_for(json!("2024-01-13")), 50.0 + base); // 3 days out
    assert_eq!(score_for(json!("2024-01-17")), 30.0 + base); // a week out
    assert_eq!(score_for(json!("2024-01-18")), 10.0 + base); // beyond a week
    assert_eq!(score_for(Value::Null), 20.0 + base); // no due date
}

#[test]
fn blocked_task_scores_exactly_ten_below_its_unblocked_twin() {
    let today = day(2024, 1, 10);
    let free = json!({"title": "t", "importance": 4, "estimated_hours": 2.0,
                      "due_date": "2024-01-12"});
    let mut blocked = free.clone();
    blocked["dependencies"] = json!(["other-task"]);

    let ranked = analyze(&[free, blocked], today);
    assert_eq!(ranked[0].score - ranked[1].score, 10.0);
}

#[test]
fn equal_scores_preserve_input_order() {
    let today = day(2024, 1, 10);
    let records: Vec<Value> = ["first", "second", "third"]
        .iter()
        .map(|title| json!({"title": title, "importance": 5}))
        .collect();

    let ranked = analyze(&records, today);
    let titles: Vec<_> = ranked.iter().map(|t| t.task.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn normalizing_a_normalized_record_is_a_no_op() {
    let raw = json!({
        "title": "Ship it",
        "due_date": "11-01-2024",
        "importance": "12",
        "estimated_hours": -2,
        "dependencies": ["a", "b"],
    });
    let once = NormalizedTask::from_value(&raw);
    let again = NormalizedTask::from_value(&serde_json::to_value(&once).unwrap());
    assert_eq!(once, again);
    assert_eq!(once.importance, 10);
    assert_eq!(once.estimated_hours, 0.0);
}

#[test]
fn suggest_with_no_input_returns_three_explained_tasks() {
    let today = day(2024, 1, 10);
    let suggested = suggest(&[], today, 3);

    assert_eq!(suggested.len(), 3);
    for entry in &suggested {
        let explanation = entry.explanation.as_deref().expect("explanation missing");
        let expected_ending = format!("Final priority score: {:.1}.", entry.score);
        assert!(
            explanation.ends_with(&expected_ending),
            "explanation should end with the one-decimal score: {explanation}"
        );
    }

    // Scores of the fallback set are strictly ordered.
    assert!(suggested[0].score > suggested[1].score);
    assert!(suggested[1].score > suggested[2].score);
}

#[test]
fn output_records_merge_passthrough_and_normalized_fields() {
    let today = day(2024, 1, 10);
    let records = vec![json!({
        "title": "A",
        "importance": "not numeric",
        "assignee": "kim",
        "labels": ["p1"],
    })];

    let ranked = analyze(&records, today);
    let value = serde_json::to_value(&ranked[0]).unwrap();

    assert_eq!(value["title"], json!("A"));
    assert_eq!(value["importance"], json!(5)); // normalized value wins
    assert_eq!(value["assignee"], json!("kim"));
    assert_eq!(value["labels"], json!(["p1"]));
    assert!(value["score"].is_number());
}
