//! End-to-end dashboard scenarios: load, filter, render.

mod common;

use std::sync::Arc;

use common::*;
use trivia_insights::aggregate::{count_by_category, count_by_default_difficulty};
use trivia_insights::error::{NetworkError, LOAD_WARNING};
use trivia_insights::filter::{filter_questions, FilterState};
use trivia_insights::loader::LoadStatus;
use trivia_insights::models::{CategoryCount, QuestionRecord};
use trivia_insights::ui::ClickAction;

fn difficulty_pairs(records: &[QuestionRecord]) -> Vec<(String, usize)> {
    count_by_default_difficulty(records)
        .into_iter()
        .map(|d| (d.key, d.value))
        .collect()
}

#[test]
fn test_scenario_aggregates() {
    let records = scenario_records();
    assert_eq!(
        count_by_category(&records),
        vec![CategoryCount::new("Science", 2), CategoryCount::new("Art", 1)]
    );
    assert_eq!(
        difficulty_pairs(&records),
        vec![
            ("easy".to_string(), 2),
            ("medium".to_string(), 0),
            ("hard".to_string(), 1)
        ]
    );
}

#[test]
fn test_scenario_filter_to_art() {
    let records: Arc<[QuestionRecord]> = scenario_records().into();
    let mut filter = FilterState::new();
    filter.set_category("Art");
    let filtered = filter_questions(&records, &filter);
    assert_eq!(
        difficulty_pairs(&filtered),
        vec![
            ("easy".to_string(), 1),
            ("medium".to_string(), 0),
            ("hard".to_string(), 0)
        ]
    );
}

#[tokio::test]
async fn test_full_flow_through_http_stack() {
    let (http, client) = MockHttpConfig::new()
        .with_json_response(200, &scenario_payload())
        .build();
    let mut app = TestAppBuilder::new().with_source(Arc::new(client)).build();

    app.mount();
    let loading = render_to_string(&mut app, 120, 40);
    assert!(loading.contains("Loading trivia questions…"));

    pump(&mut app).await;
    assert_eq!(app.loader.status(), LoadStatus::Ready);
    assert_eq!(http.get_requests().len(), 1);
    assert!(http.get_requests()[0].url.contains("amount=50"));

    let text = render_to_string(&mut app, 120, 40);
    assert!(text.contains("Trivia Insights"));
    assert!(text.contains("Loaded 3 items"));
    assert!(text.contains("Total: 3"));
    assert!(text.contains("Filtered: 3"));
    assert!(text.contains("Questions by category"));
    assert!(text.contains("Difficulty distribution (all categories)"));
    assert!(text.contains("Questions (all categories) - 3 of 3"));
}

#[tokio::test]
async fn test_clicking_category_bar_filters_dashboard() {
    let source = MockQuestionSource::new();
    source.push(Ok(scenario_records()));
    let mut app = TestAppBuilder::new().with_source(Arc::new(source)).build();
    app.mount();
    pump(&mut app).await;
    render_to_string(&mut app, 120, 40);

    // Find the "Art" bar among the registered hit areas and click it
    let art = app
        .hit_registry
        .areas()
        .iter()
        .find(|a| a.action == ClickAction::SelectCategory("Art".to_string()))
        .map(|a| a.rect)
        .expect("Art is clickable");
    app.handle_mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: art.x,
        row: art.y,
        modifiers: crossterm::event::KeyModifiers::NONE,
    });
    assert_eq!(app.filter.category(), "Art");

    let text = render_to_string(&mut app, 120, 40);
    assert!(text.contains("Filtered: 1"));
    assert!(text.contains("Difficulty distribution (Art)"));
    assert!(text.contains("Questions (Art) - 1 of 1"));
    // Category chart still reflects the full set
    assert!(app.dashboard().by_category.len() == 2);
}

#[tokio::test]
async fn test_unknown_category_shows_empty_selection() {
    let source = MockQuestionSource::new();
    source.push(Ok(scenario_records()));
    let mut app = TestAppBuilder::new().with_source(Arc::new(source)).build();
    app.mount();
    pump(&mut app).await;

    app.select_category("Geography");
    let text = render_to_string(&mut app, 120, 40);
    assert!(text.contains("No questions for this selection."));
    assert!(text.contains("Show all"));
    assert!(!text.contains("Questions by category"));
    assert!(!text.contains(LOAD_WARNING));

    let reset = app
        .hit_registry
        .areas()
        .iter()
        .find(|a| a.action == ClickAction::ResetFilter)
        .map(|a| a.rect)
        .expect("Show all is clickable");
    app.handle_mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: reset.x,
        row: reset.y,
        modifiers: crossterm::event::KeyModifiers::NONE,
    });
    assert!(app.filter.is_all_category());
}

#[tokio::test]
async fn test_failure_shows_warning_then_retry_recovers() {
    let source = MockQuestionSource::new();
    source.push(Err(NetworkError::HttpStatus {
        status: 503,
        message: "unavailable".to_string(),
    }
    .into()));
    source.push(Ok(scenario_records()));
    let mut app = TestAppBuilder::new().with_source(Arc::new(source.clone())).build();
    app.mount();
    pump(&mut app).await;

    let text = render_to_string(&mut app, 120, 40);
    assert!(text.contains(LOAD_WARNING));
    assert!(text.contains("Retry"));
    assert!(text.contains("Loaded 0 items"));
    // Raw cause is logged, never shown
    assert!(!text.contains("unavailable"));

    app.retry();
    pump(&mut app).await;
    let text = render_to_string(&mut app, 120, 40);
    assert!(!text.contains(LOAD_WARNING));
    assert!(text.contains("Loaded 3 items"));
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_empty_result_is_ready_without_warning() {
    let (_, client) = MockHttpConfig::new()
        .with_json_response(200, r#"{"response_code":1,"results":[]}"#)
        .build();
    let mut app = TestAppBuilder::new().with_source(Arc::new(client)).build();
    app.mount();
    pump(&mut app).await;

    assert_eq!(app.loader.status(), LoadStatus::Ready);
    assert!(app.loader.warning().is_none());
    let text = render_to_string(&mut app, 120, 40);
    assert!(text.contains("Loaded 0 items"));
    assert!(text.contains("No questions for this selection."));
}

#[tokio::test]
async fn test_list_toggle_through_keyboard() {
    let source = MockQuestionSource::new();
    source.push(Ok(many_records(25)));
    let mut app = TestAppBuilder::new().with_source(Arc::new(source)).build();
    app.mount();
    pump(&mut app).await;

    let text = render_to_string(&mut app, 140, 60);
    assert!(text.contains("Questions (all categories) - 10 of 25"));
    assert!(text.contains("Show all (25)"));

    app.handle_key(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('e'),
        crossterm::event::KeyModifiers::NONE,
    ));
    let text = render_to_string(&mut app, 140, 60);
    assert!(text.contains("Questions (all categories) - 25 of 25"));
    assert!(text.contains("Show first 10"));
}
