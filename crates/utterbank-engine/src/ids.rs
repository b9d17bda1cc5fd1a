use uuid::Uuid;

/// Id source for freshly inserted examples.
///
/// Swappable so embedders can use their own id scheme (or tests can
/// use predictable ids) without touching the pipeline.
pub trait IdProvider: Send + Sync {
    fn generate(&self) -> String;
}

/// Default id source: random UUID v4, stored in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
