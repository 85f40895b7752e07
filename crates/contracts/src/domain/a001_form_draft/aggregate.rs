use serde::{Deserialize, Serialize};

use crate::enums::select_option::SelectOption;

// ============================================================================
// Cache entry location
// ============================================================================

/// Имя хранилища Cache Storage, в которое service worker пишет черновик
pub const FORM_CACHE_NAME: &str = "form-data-cache";

/// Ключ записи черновика внутри хранилища
pub const FORM_CACHE_KEY: &str = "/browser/formData";

// ============================================================================
// Form state
// ============================================================================

/// Текущее значение формы.
///
/// Это же значение целиком сериализуется в запись кэша и в payload сообщений
/// service worker. Отсутствующие в JSON поля принимают значения по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormState {
    pub name: String,

    #[serde(rename = "selectOption")]
    pub select_option: SelectOption,

    pub agree: bool,
}

impl FormState {
    pub fn new(name: impl Into<String>, select_option: SelectOption, agree: bool) -> Self {
        Self {
            name: name.into(),
            select_option,
            agree,
        }
    }

    /// Значение совпадает с начальным (пустая форма)
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// Разобрать тело записи кэша
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FormState::default();
        assert_eq!(state.name, "");
        assert_eq!(state.select_option, SelectOption::Option1);
        assert!(!state.agree);
        assert!(state.is_pristine());
    }

    #[test]
    fn test_wire_field_names() {
        let state = FormState::new("Alice", SelectOption::Option2, true);
        let value: serde_json::Value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Alice", "selectOption": "option2", "agree": true})
        );
    }

    #[test]
    fn test_partial_entry_takes_defaults() {
        let state = FormState::from_json(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(state, FormState::new("Bob", SelectOption::Option1, false));
        assert!(!state.is_pristine());
    }

    #[test]
    fn test_corrupt_entry_is_error() {
        assert!(FormState::from_json("not json").is_err());
        assert!(FormState::from_json(r#"{"selectOption":"bogus"}"#).is_err());
    }
}
