//! Toast notification queue.

/// Severity of a toast, which drives its icon and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Errors interrupt assistive technology; everything else is polite.
    pub fn aria_live(self) -> &'static str {
        match self {
            Self::Error => "assertive",
            _ => "polite",
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            _ => "status",
        }
    }
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded FIFO of visible toasts.
///
/// When full, pushing drops the oldest toast.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    /// Adds a toast and returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > self.capacity {
            self.items.remove(0);
        }
        id
    }

    /// Removes a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}
