//! Flashcard and quiz session state.
//!
//! Sessions hold question ids only; callers look the questions up in their
//! loaded list. Neither session touches the store.

use qb_core::responses::QuizScore;

/// A deck walked one card at a time, with known/unknown marks.
#[derive(Debug, Clone, Default)]
pub struct FlashcardSession {
    deck: Vec<String>,
    cursor: usize,
    known: Vec<String>,
    unknown: Vec<String>,
}

impl FlashcardSession {
    #[must_use]
    pub fn new(deck: Vec<String>) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }

    /// Id of the card under the cursor, `None` for an empty deck.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.deck.get(self.cursor).map(String::as_str)
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Advance; stays on the last card.
    pub fn next(&mut self) {
        if self.cursor + 1 < self.deck.len() {
            self.cursor += 1;
        }
    }

    /// Step back; stays on the first card.
    pub const fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn mark_known(&mut self) {
        if let Some(id) = self.current().map(str::to_string) {
            self.unknown.retain(|u| u != &id);
            if !self.known.contains(&id) {
                self.known.push(id);
            }
        }
        self.next();
    }

    pub fn mark_unknown(&mut self) {
        if let Some(id) = self.current().map(str::to_string) {
            self.known.retain(|k| k != &id);
            if !self.unknown.contains(&id) {
                self.unknown.push(id);
            }
        }
        self.next();
    }

    #[must_use]
    pub fn known(&self) -> &[String] {
        &self.known
    }

    #[must_use]
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    /// Back to the first card with no marks.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.known.clear();
        self.unknown.clear();
    }
}

/// A single pass through a deck, scoring each answer once.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    deck: Vec<String>,
    cursor: usize,
    revealed: bool,
    results: Vec<(String, bool)>,
    completed: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(deck: Vec<String>) -> Self {
        let completed = deck.is_empty();
        Self {
            deck,
            completed,
            ..Self::default()
        }
    }

    /// Id of the question being asked, `None` once complete.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        if self.completed {
            return None;
        }
        self.deck.get(self.cursor).map(String::as_str)
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub const fn reveal(&mut self) {
        self.revealed = true;
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// Record the answer to the current question and move on. Returns the
    /// id that was recorded, or `None` if the quiz is already complete.
    pub fn answer(&mut self, known: bool) -> Option<String> {
        let id = self.current()?.to_string();
        match self.results.iter_mut().find(|(r, _)| r == &id) {
            Some(entry) => entry.1 = known,
            None => self.results.push((id.clone(), known)),
        }
        self.revealed = false;
        if self.cursor + 1 < self.deck.len() {
            self.cursor += 1;
        } else {
            self.completed = true;
        }
        Some(id)
    }

    /// Recorded answers in the order given.
    #[must_use]
    pub fn results(&self) -> &[(String, bool)] {
        &self.results
    }

    /// Percentage of known answers, rounded half up; 0 with no answers.
    #[must_use]
    pub fn score(&self) -> QuizScore {
        let answered = u32::try_from(self.results.len()).unwrap_or(u32::MAX);
        let correct = u32::try_from(self.results.iter().filter(|(_, known)| *known).count())
            .unwrap_or(u32::MAX);
        let percentage = if answered == 0 {
            0
        } else {
            (correct * 100 + answered / 2) / answered
        };
        QuizScore {
            answered,
            correct,
            percentage,
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.revealed = false;
        self.results.clear();
        self.completed = self.deck.is_empty();
    }
}
