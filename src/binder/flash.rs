//! Flash message area shown after every action

/// Kinds of flash messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Success,
    Error,
}

/// Flash message with kind and content
#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub text: String,
    pub kind: FlashKind,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

impl FlashMessage {
    pub fn new(text: String, kind: FlashKind) -> Self {
        Self {
            text,
            kind,
            timestamp: chrono::Local::now(),
        }
    }

    pub fn info(text: String) -> Self {
        Self::new(text, FlashKind::Info)
    }

    pub fn success(text: String) -> Self {
        Self::new(text, FlashKind::Success)
    }

    pub fn error(text: String) -> Self {
        Self::new(text, FlashKind::Error)
    }
}

/// The `flash_message` area. Each message replaces the previous one, which
/// moves into a bounded history.
#[derive(Debug, Clone)]
pub struct FlashArea {
    current: Option<FlashMessage>,
    history: Vec<FlashMessage>,
    max_history: usize,
}

impl Default for FlashArea {
    fn default() -> Self {
        Self {
            current: None,
            history: Vec::new(),
            max_history: 50,
        }
    }
}

impl FlashArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Replace the current message
    pub fn set(&mut self, message: FlashMessage) {
        self.archive_current();
        self.current = Some(message);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set(FlashMessage::info(text.into()));
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set(FlashMessage::success(text.into()));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set(FlashMessage::error(text.into()));
    }

    pub fn clear(&mut self) {
        self.archive_current();
    }

    pub fn current(&self) -> Option<&FlashMessage> {
        self.current.as_ref()
    }

    /// Text of the current message, empty when nothing is shown
    pub fn text(&self) -> &str {
        self.current.as_ref().map(|m| m.text.as_str()).unwrap_or("")
    }

    pub fn history(&self) -> &[FlashMessage] {
        &self.history
    }

    fn archive_current(&mut self) {
        if let Some(current) = self.current.take() {
            self.history.push(current);
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }
    }
}
