use serde::{Deserialize, Serialize};

/// Варианты выпадающего списка формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectOption {
    #[default]
    Option1,
    Option2,
    Option3,
}

impl SelectOption {
    /// Получить код варианта (значение `<option value=...>` и значение на проводе)
    pub fn code(&self) -> &'static str {
        match self {
            SelectOption::Option1 => "option1",
            SelectOption::Option2 => "option2",
            SelectOption::Option3 => "option3",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SelectOption::Option1 => "Option 1",
            SelectOption::Option2 => "Option 2",
            SelectOption::Option3 => "Option 3",
        }
    }

    /// Получить все варианты
    pub fn all() -> Vec<SelectOption> {
        vec![
            SelectOption::Option1,
            SelectOption::Option2,
            SelectOption::Option3,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "option1" => Some(SelectOption::Option1),
            "option2" => Some(SelectOption::Option2),
            "option3" => Some(SelectOption::Option3),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_wire_value() {
        for option in SelectOption::all() {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json, format!("\"{}\"", option.code()));
            assert_eq!(SelectOption::from_code(option.code()), Some(option));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(SelectOption::from_code("option9"), None);
        assert!(serde_json::from_str::<SelectOption>("\"Option1\"").is_err());
    }
}
