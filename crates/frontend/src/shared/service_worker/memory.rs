use super::{await_reply, ChannelError, WorkerChannel};
use crate::shared::cache_storage::memory::MemoryCacheStore;
use async_trait::async_trait;
use contracts::domain::a001_form_draft::aggregate::FormState;
use contracts::shared::worker_message::WorkerMessage;
use futures::channel::oneshot;
use futures::future;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Заглушка service worker: `SAVE_FORM_DATA` пишет в [`MemoryCacheStore`],
/// `GET_FORM_DATA` отвечает содержимым записи.
#[derive(Debug, Clone)]
pub struct MemoryWorker {
    store: MemoryCacheStore,
    cache_name: String,
    key: String,
    active: Rc<Cell<bool>>,
    answers: Rc<Cell<bool>>,
    received: Rc<RefCell<Vec<WorkerMessage>>>,
    unanswered: Rc<RefCell<Vec<oneshot::Sender<WorkerMessage>>>>,
}

impl MemoryWorker {
    pub fn new(store: MemoryCacheStore, cache_name: &str, key: &str) -> Self {
        Self {
            store,
            cache_name: cache_name.to_string(),
            key: key.to_string(),
            active: Rc::new(Cell::new(true)),
            answers: Rc::new(Cell::new(true)),
            received: Rc::new(RefCell::new(Vec::new())),
            unanswered: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Нет ни одной активной регистрации
    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    /// Воркер получает запросы, но не отвечает на них; запрос ждёт до
    /// срабатывания таймера (в тестах таймер срабатывает сразу)
    pub fn set_answers(&self, answers: bool) {
        self.answers.set(answers);
    }

    /// Число запросов, оставшихся без ответа
    pub fn unanswered(&self) -> usize {
        self.unanswered.borrow().len()
    }

    pub fn received(&self) -> Vec<WorkerMessage> {
        self.received.borrow().clone()
    }

    pub fn saved_values(&self) -> Vec<FormState> {
        self.received
            .borrow()
            .iter()
            .filter_map(|m| match m {
                WorkerMessage::SaveFormData(state) => Some(state.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl WorkerChannel for MemoryWorker {
    async fn send(&self, message: &WorkerMessage) -> Result<usize, ChannelError> {
        if !self.active.get() {
            return Ok(0);
        }
        self.received.borrow_mut().push(message.clone());

        if let WorkerMessage::SaveFormData(state) = message {
            let body = state
                .to_json()
                .map_err(|e| ChannelError::Encode(e.to_string()))?;
            self.store.put_text(&self.cache_name, &self.key, &body);
        }
        Ok(1)
    }

    async fn request(
        &self,
        message: &WorkerMessage,
        _timeout: Duration,
    ) -> Result<Option<WorkerMessage>, ChannelError> {
        if !self.active.get() {
            return Ok(None);
        }
        self.received.borrow_mut().push(message.clone());

        if !self.answers.get() {
            let (reply_tx, reply_rx) = oneshot::channel();
            self.unanswered.borrow_mut().push(reply_tx);
            return Ok(await_reply(reply_rx, future::ready(())).await.into_message());
        }
        if *message != WorkerMessage::GetFormData {
            return Ok(None);
        }
        Ok(self
            .store
            .get_text(&self.cache_name, &self.key)
            .and_then(|body| FormState::from_json(&body).ok())
            .map(WorkerMessage::FormData))
    }
}
