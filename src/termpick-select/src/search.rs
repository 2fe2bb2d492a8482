//! Incremental search state machine for the list selector.
//!
//! [`SearchState::step`] is pure: it takes a key and returns the next state
//! together with the screen updates that key calls for. Nothing here touches
//! the terminal; [`crate::ListPainter`] applies the [`Paint`] plan.

use termpick_input::{KeyCode, KeyEvent};

/// Rows above the first option: title/search header, a blank row, a rule.
pub const HEADER_ROWS: u16 = 3;

/// Screen row of the option at `index`.
#[must_use]
pub fn row_of(index: usize) -> u16 {
    u16::try_from(index).map_or(u16::MAX, |index| HEADER_ROWS.saturating_add(index))
}

/// A key as the list selector understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    /// Confirm the current match.
    Enter,
    /// Retract the last typed character.
    Backspace,
    /// Move to the previous option.
    Up,
    /// Move to the next option.
    Down,
    /// Extend the search term.
    Char(char),
    /// Anything else; ignored.
    Other,
}

impl From<KeyEvent> for ListKey {
    fn from(key: KeyEvent) -> Self {
        if let Some(ch) = key.printable_char() {
            return ListKey::Char(ch);
        }
        match key.code {
            KeyCode::Enter => ListKey::Enter,
            KeyCode::Backspace => ListKey::Backspace,
            KeyCode::Up => ListKey::Up,
            KeyCode::Down => ListKey::Down,
            _ => ListKey::Other,
        }
    }
}

/// One screen update requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Clear the screen and draw the full list without highlighting.
    Frame,
    /// Redraw the header and the row of option `index`, with its first
    /// `typed` characters emphasized.
    Highlight {
        /// Option being shown as the match.
        index: usize,
        /// Characters of the option covered by the search term.
        typed: usize,
    },
    /// Redraw the row of option `index` in the default color.
    Unhighlight {
        /// Option to repaint.
        index: usize,
    },
    /// Show the rejected header text in the alert color, then pause.
    Flash {
        /// Current match.
        index: usize,
        /// Length of the accepted term.
        typed: usize,
        /// The character that was rejected.
        ch: char,
    },
}

/// Result of feeding one key to a [`SearchState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the key.
    pub state: SearchState,
    /// Screen updates, in order.
    pub paints: Vec<Paint>,
}

impl Transition {
    fn to(state: SearchState, paints: Vec<Paint>) -> Self {
        Self { state, paints }
    }

    fn unchanged(state: &SearchState) -> Self {
        Self::to(state.clone(), Vec::new())
    }
}

/// Where the list selector is in its search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Nothing typed, nothing matched.
    #[default]
    Empty,
    /// `term` is a case-insensitive prefix of option `index`.
    Matching {
        /// Characters typed (or filled in by arrow navigation).
        term: String,
        /// Index of the matched option.
        index: usize,
    },
    /// The user pressed Enter on option `index`.
    Confirmed {
        /// The chosen option.
        index: usize,
    },
}

impl SearchState {
    /// The current search term; empty outside [`SearchState::Matching`].
    #[must_use]
    pub fn term(&self) -> &str {
        match self {
            SearchState::Matching { term, .. } => term,
            SearchState::Empty | SearchState::Confirmed { .. } => "",
        }
    }

    /// Index of the matched or chosen option.
    #[must_use]
    pub fn matched(&self) -> Option<usize> {
        match self {
            SearchState::Empty => None,
            SearchState::Matching { index, .. } | SearchState::Confirmed { index } => Some(*index),
        }
    }

    /// Screen row of the matched option.
    #[must_use]
    pub fn row(&self) -> Option<u16> {
        self.matched().map(row_of)
    }

    /// The confirmed choice, once Enter has been accepted.
    #[must_use]
    pub fn choice(&self) -> Option<usize> {
        match self {
            SearchState::Confirmed { index } => Some(*index),
            _ => None,
        }
    }

    /// Feeds one key and returns the next state and the paints it needs.
    pub fn step<S: AsRef<str>>(&self, options: &[S], key: ListKey) -> Transition {
        match (self, key) {
            (SearchState::Confirmed { .. }, _) => Transition::unchanged(self),

            (SearchState::Matching { index, .. }, ListKey::Enter) => {
                Transition::to(SearchState::Confirmed { index: *index }, Vec::new())
            }

            (SearchState::Matching { term, index }, ListKey::Backspace) => {
                let mut term = term.clone();
                term.pop();
                if term.is_empty() {
                    Transition::to(SearchState::Empty, vec![Paint::Frame])
                } else {
                    let typed = term.chars().count();
                    Transition::to(
                        SearchState::Matching { term, index: *index },
                        vec![Paint::Highlight { index: *index, typed }],
                    )
                }
            }

            (SearchState::Empty, ListKey::Char(ch)) => {
                let term = ch.to_string();
                match first_match(options, &term) {
                    Some(index) => Transition::to(
                        SearchState::Matching { term, index },
                        vec![Paint::Highlight { index, typed: 1 }],
                    ),
                    None => Transition::unchanged(self),
                }
            }

            (SearchState::Matching { term, index }, ListKey::Char(ch)) => {
                extend(options, term, *index, ch)
            }

            (SearchState::Empty, ListKey::Up | ListKey::Down) => select(options, None, 0),

            (SearchState::Matching { index, .. }, ListKey::Up) => match index.checked_sub(1) {
                Some(previous) => select(options, Some(*index), previous),
                None => Transition::unchanged(self),
            },

            (SearchState::Matching { index, .. }, ListKey::Down) => {
                let next = index + 1;
                if next < options.len() {
                    select(options, Some(*index), next)
                } else {
                    Transition::unchanged(self)
                }
            }

            (SearchState::Empty, ListKey::Enter | ListKey::Backspace)
            | (_, ListKey::Other) => Transition::unchanged(self),
        }
    }
}

fn extend<S: AsRef<str>>(options: &[S], term: &str, index: usize, ch: char) -> Transition {
    let mut candidate = String::with_capacity(term.len() + ch.len_utf8());
    candidate.push_str(term);
    candidate.push(ch);
    let typed = candidate.chars().count();

    let still_matches = options
        .get(index)
        .is_some_and(|option| prefix_matches(option.as_ref(), &candidate));
    if still_matches {
        return Transition::to(
            SearchState::Matching { term: candidate, index },
            vec![Paint::Highlight { index, typed }],
        );
    }

    match first_match(options, &candidate) {
        Some(found) => Transition::to(
            SearchState::Matching {
                term: candidate,
                index: found,
            },
            vec![Paint::Frame, Paint::Highlight { index: found, typed }],
        ),
        None => {
            let typed = term.chars().count();
            Transition::to(
                SearchState::Matching {
                    term: term.to_string(),
                    index,
                },
                vec![
                    Paint::Flash { index, typed, ch },
                    Paint::Highlight { index, typed },
                ],
            )
        }
    }
}

fn select<S: AsRef<str>>(options: &[S], previous: Option<usize>, index: usize) -> Transition {
    let Some(option) = options.get(index) else {
        return Transition::to(SearchState::Empty, Vec::new());
    };
    let term = option.as_ref().to_string();
    let typed = term.chars().count();

    let mut paints = Vec::with_capacity(2);
    if let Some(previous) = previous {
        paints.push(Paint::Unhighlight { index: previous });
    }
    paints.push(Paint::Highlight { index, typed });

    Transition::to(SearchState::Matching { term, index }, paints)
}

/// Index of the first option, in list order, that starts with `term`.
fn first_match<S: AsRef<str>>(options: &[S], term: &str) -> Option<usize> {
    options
        .iter()
        .position(|option| prefix_matches(option.as_ref(), term))
}

/// Returns true if `option` starts with `term`, ignoring case.
///
/// Compared character by character, so the term never matches past the end
/// of the option.
#[must_use]
pub fn prefix_matches(option: &str, term: &str) -> bool {
    let len = term.chars().count();
    if option.chars().count() < len {
        return false;
    }
    option
        .chars()
        .take(len)
        .flat_map(char::to_lowercase)
        .eq(term.chars().flat_map(char::to_lowercase))
}
