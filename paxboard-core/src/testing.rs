//! Test utilities for paxboard applications
//!
//! - [`key`]: create a `KeyEvent` from a string (e.g. `key("ctrl+p")`)
//! - [`TestHarness`]: action channel + state holder for handler tests
//! - [`RenderHarness`]: render components into an in-memory terminal
//! - Assertion macros for verifying emitted actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

use crate::action::Action;

/// Create a `KeyEvent` from a key string.
///
/// Supports `ctrl+`/`alt+`/`shift+` prefixes, named keys (`enter`, `esc`,
/// `tab`, `backspace`, `delete`, `space`, `up`, `down`, `left`, `right`,
/// `home`, `end`) and single characters.
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("invalid key string: {s:?}"))
}

/// Parse a key string into a `KeyEvent`, `None` if unrecognized.
pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = s;

    loop {
        if let Some(tail) = rest.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("shift+") {
            modifiers |= KeyModifiers::SHIFT;
            rest = tail;
        } else {
            break;
        }
    }

    let code = match rest {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => {
            if modifiers.contains(KeyModifiers::SHIFT) {
                KeyCode::BackTab
            } else {
                KeyCode::Tab
            }
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        other => {
            let mut chars = other.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with Ctrl modifier.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Generic test harness: a state holder plus an action channel for
/// capturing what handlers emit.
pub struct TestHarness<S, A: Action> {
    /// The application state under test
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    /// Create a new test harness with the given initial state.
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Get a clone of the action sender for passing to handlers.
    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.tx.clone()
    }

    /// Emit an action (simulates what a handler would do).
    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Render harness over ratatui's `TestBackend` for visual assertions.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal }
    }

    /// Run a render closure and return the buffer contents as plain text,
    /// one line per terminal row, trailing whitespace stripped.
    pub fn render_to_string_plain<F>(&mut self, f: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Flatten a buffer into plain text (styles discarded).
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Assert that a specific action was emitted.
///
/// ```ignore
/// let actions = harness.drain_emitted();
/// assert_emitted!(actions, Action::RosterFetch);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn key_with_ctrl() {
        let k = key("ctrl+p");
        assert_eq!(k.code, KeyCode::Char('p'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("space").code, KeyCode::Char(' '));
        assert_eq!(key("shift+tab").code, KeyCode::BackTab);
    }

    #[test]
    fn key_rejects_garbage() {
        assert!(parse_key_string("notakey").is_none());
        assert!(parse_key_string("").is_none());
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Foo,
        Bar(i32),
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Foo => "Foo",
                TestAction::Bar(_) => "Bar",
            }
        }
    }

    #[test]
    fn harness_emit_and_drain() {
        let mut harness = TestHarness::<(), TestAction>::new(());

        harness.emit(TestAction::Foo);
        harness.emit(TestAction::Bar(42));

        let actions = harness.drain_emitted();
        assert_eq!(actions, vec![TestAction::Foo, TestAction::Bar(42)]);

        assert!(harness.drain_emitted().is_empty());
    }

    #[test]
    fn assert_macros() {
        let actions = vec![TestAction::Foo, TestAction::Bar(42)];

        assert_emitted!(actions, TestAction::Foo);
        assert_emitted!(actions, TestAction::Bar(_));
        assert_not_emitted!(actions, TestAction::Bar(99));
    }

    #[test]
    fn render_harness_captures_text() {
        use ratatui::widgets::Paragraph;

        let mut render = RenderHarness::new(20, 3);
        let output = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        });

        assert!(output.contains("hello"));
    }
}
