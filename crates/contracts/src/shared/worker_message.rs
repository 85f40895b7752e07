//! Протокол обмена сообщениями между страницей и service worker.
//!
//! На проводе сообщение выглядит как `{ "type": "...", "payload": ... }`.

use serde::{Deserialize, Serialize};

use crate::domain::a001_form_draft::aggregate::FormState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerMessage {
    /// Сохранить черновик в кэш (без ответа)
    SaveFormData(FormState),
    /// Запросить черновик; ответ приходит в переданный порт
    GetFormData,
    /// Ответ на `GET_FORM_DATA`
    FormData(FormState),
}

impl WorkerMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            WorkerMessage::SaveFormData(_) => "SAVE_FORM_DATA",
            WorkerMessage::GetFormData => "GET_FORM_DATA",
            WorkerMessage::FormData(_) => "FORM_DATA",
        }
    }

    /// Payload ответа `FORM_DATA`, для остальных сообщений `None`
    pub fn into_form_data(self) -> Option<FormState> {
        match self {
            WorkerMessage::FormData(state) => Some(state),
            _ => None,
        }
    }
}
