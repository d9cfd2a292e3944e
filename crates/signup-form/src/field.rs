//! Shared form state: the input field and the region selector.

use std::sync::Arc;
use tokio::sync::RwLock;

/// The phone input field's text. Both the user and the live formatter
/// overwrite it; the submit flow clears it on success.
#[derive(Clone, Default)]
pub struct InputField {
    value: Arc<RwLock<String>>,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn value(&self) -> String {
        self.value.read().await.clone()
    }

    pub async fn replace(&self, text: impl Into<String>) {
        *self.value.write().await = text.into();
    }

    pub async fn clear(&self) {
        self.value.write().await.clear();
    }
}

/// The country-code selector. The submit flow only reads it.
#[derive(Clone, Default)]
pub struct RegionSelector {
    code: Arc<RwLock<String>>,
}

impl RegionSelector {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Arc::new(RwLock::new(code.into())),
        }
    }

    pub async fn code(&self) -> String {
        self.code.read().await.clone()
    }

    pub async fn select(&self, code: impl Into<String>) {
        *self.code.write().await = code.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn field_replace_and_clear() {
        let field = InputField::new();
        field.replace("2015550123").await;
        assert_eq!(field.value().await, "2015550123");

        field.clear().await;
        assert_eq!(field.value().await, "");
    }

    #[tokio::test]
    async fn selector_starts_empty_and_updates() {
        let selector = RegionSelector::default();
        assert_eq!(selector.code().await, "");

        selector.select("US").await;
        assert_eq!(selector.code().await, "US");
    }
}
