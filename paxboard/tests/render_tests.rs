//! Board-level render tests using RenderHarness

use paxboard::components::{Board, BoardProps, Component};
use paxboard::model::Passenger;
use paxboard::state::{AppState, Focus, Notice};
use paxboard_core::testing::RenderHarness;

fn passenger(id: &str, first: &str, last: &str, status: &str) -> Passenger {
    Passenger {
        id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
        status: status.into(),
    }
}

fn render_board(state: &AppState) -> String {
    let mut render = RenderHarness::new(70, 14);
    let mut board = Board::new();
    render.render_to_string_plain(|frame| {
        board.render(frame, frame.area(), BoardProps { state });
    })
}

#[test]
fn renders_initial_empty_state() {
    let state = AppState::default();
    let output = render_board(&state);

    assert!(output.contains("paxboard"));
    assert!(output.contains("Add passenger"));
    assert!(output.contains("no passengers"));
    assert!(output.contains("Passengers (0)"));
}

#[test]
fn renders_loading_state() {
    let state = AppState {
        is_loading: true,
        ..AppState::default()
    };
    let output = render_board(&state);

    assert!(output.contains("fetching passengers"));
}

#[test]
fn renders_roster_rows_with_markers() {
    let state = AppState {
        passengers: vec![
            passenger("1", "Ann", "Lee", "new"),
            passenger("2", "Bo", "Ruiz", "approved"),
        ],
        ..AppState::default()
    };
    let output = render_board(&state);

    assert!(output.contains("#1"));
    assert!(output.contains("Ann Lee"));
    assert!(output.contains("#2"));
    assert!(output.contains("Bo Ruiz"));
    assert!(output.contains("approved"));
    assert!(output.contains("Passengers (2)"));
}

#[test]
fn renders_draft_text_in_the_input() {
    let state = AppState {
        draft: "Char".into(),
        ..AppState::default()
    };
    let output = render_board(&state);

    assert!(output.contains("Char"));
}

#[test]
fn renders_error_notice_in_the_status_bar() {
    let state = AppState {
        notice: Some(Notice::Error("request failed: connection refused".into())),
        ..AppState::default()
    };
    let output = render_board(&state);

    assert!(output.contains("error: request failed"));
}

#[test]
fn renders_roster_hints_when_roster_focused() {
    let state = AppState {
        focus: Focus::Roster,
        ..AppState::default()
    };
    let output = render_board(&state);

    assert!(output.contains("toggle"));
    assert!(output.contains("refresh"));
    assert!(output.contains("quit"));
}
