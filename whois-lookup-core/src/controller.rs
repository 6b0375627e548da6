//! Input controller: the domain query and the last fetched record.

use crate::error::{LookupError, LookupResult};
use crate::notifier::{Notification, Notifier};
use crate::source::WhoisSource;
use crate::types::WhoisRecord;

/// Owns the text being typed and the record currently displayed.
///
/// At most one record is held. A successful lookup replaces it; a failed one
/// leaves it as it was.
#[derive(Debug, Default)]
pub struct LookupController {
    query: String,
    cursor: usize,
    record: Option<WhoisRecord>,
    last_error: Option<LookupError>,
}

impl LookupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn record(&self) -> Option<&WhoisRecord> {
        self.record.as_ref()
    }

    /// Error kind of the most recent failed lookup, cleared on the next submission.
    pub fn last_error(&self) -> Option<&LookupError> {
        self.last_error.as_ref()
    }

    /// Cursor position, counted in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // ========== 输入编辑 ==========

    /// Replace the whole query and move the cursor to its end.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor = self.query.chars().count();
    }

    /// Insert a character at the cursor.
    pub fn push_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.query.insert(at, ch);
        self.cursor += 1;
    }

    /// Backspace: remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.query.remove(at);
    }

    /// Delete: remove the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.query.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.query.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.query.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.query.chars().count();
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map_or(self.query.len(), |(i, _)| i)
    }

    // ========== 提交 ==========

    /// Required-field check run before any request goes out.
    ///
    /// Returns the query exactly as typed, or [`LookupError::EmptyInput`] when nothing was typed.
    pub fn begin_submit(&mut self) -> LookupResult<String> {
        if self.query.is_empty() {
            return Err(LookupError::EmptyInput);
        }
        self.last_error = None;
        Ok(self.query.clone())
    }

    /// Apply the outcome of one lookup and fire its notification.
    pub fn complete(&mut self, result: LookupResult<WhoisRecord>, notifier: &mut dyn Notifier) {
        match result {
            Ok(record) => {
                log::info!(
                    "Stored WHOIS record for {}",
                    record.registry_data.domain_name
                );
                self.record = Some(record);
                notifier.notify(Notification::success());
            }
            Err(err) => {
                log::warn!("WHOIS lookup failed: {err}");
                self.last_error = Some(err);
                notifier.notify(Notification::failure());
            }
        }
    }

    /// Validate, perform one lookup and apply its outcome.
    ///
    /// An empty query returns [`LookupError::EmptyInput`] without notifying.
    pub async fn submit(
        &mut self,
        source: &dyn WhoisSource,
        notifier: &mut dyn Notifier,
    ) -> LookupResult<()> {
        let domain = self.begin_submit()?;
        let result = source.lookup(&domain).await;
        self.complete(result, notifier);
        Ok(())
    }
}
