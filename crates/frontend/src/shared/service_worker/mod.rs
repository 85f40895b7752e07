//! Обмен сообщениями с service worker.
//!
//! [`WorkerChannel::send`] рассылает сообщение всем активным регистрациям без
//! ожидания ответа. [`WorkerChannel::request`] открывает одноразовый канал для
//! ответа и ждёт его не дольше заданного таймаута.

mod browser;
#[cfg(test)]
pub mod memory;

pub use browser::{register_service_worker, BrowserWorkerChannel};

use async_trait::async_trait;
use contracts::shared::worker_message::WorkerMessage;
use futures::channel::oneshot;
use futures::future::{self, Either};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Service worker API is not available in this environment")]
    Unavailable,

    #[error("Failed to get service worker registrations: {0}")]
    Registrations(String),

    #[error("Failed to encode message: {0}")]
    Encode(String),

    #[error("Failed to post message to service worker: {0}")]
    Post(String),

    #[error("Failed to register service worker: {0}")]
    Register(String),
}

#[async_trait(?Send)]
pub trait WorkerChannel {
    /// Отправить сообщение всем активным воркерам. Возвращает число получателей;
    /// `0` означает, что активных регистраций нет.
    async fn send(&self, message: &WorkerMessage) -> Result<usize, ChannelError>;

    /// Отправить запрос и дождаться ответа `FORM_DATA`.
    ///
    /// `Ok(None)` - активного воркера нет или ответ не пришёл за `timeout`.
    async fn request(
        &self,
        message: &WorkerMessage,
        timeout: Duration,
    ) -> Result<Option<WorkerMessage>, ChannelError>;
}

/// Итог ожидания ответа на запрос
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Received(WorkerMessage),
    TimedOut,
    /// Отправитель ответа уничтожен без ответа
    Closed,
}

impl Reply {
    pub fn into_message(self) -> Option<WorkerMessage> {
        match self {
            Reply::Received(message) => Some(message),
            Reply::TimedOut | Reply::Closed => None,
        }
    }
}

/// Ждать ответ, пока не сработает `timer`
pub async fn await_reply<T>(reply: oneshot::Receiver<WorkerMessage>, timer: T) -> Reply
where
    T: Future<Output = ()>,
{
    match future::select(reply, Box::pin(timer)).await {
        Either::Left((Ok(message), _)) => Reply::Received(message),
        Either::Left((Err(_), _)) => Reply::Closed,
        Either::Right(_) => Reply::TimedOut,
    }
}

/// Отправить сообщение каждому воркеру. Ошибка одного воркера не мешает
/// остальным; `Err` возвращается, только если не удалась ни одна отправка.
pub fn post_to_all<W>(
    workers: &[W],
    mut post: impl FnMut(&W) -> Result<(), ChannelError>,
) -> Result<usize, ChannelError> {
    let mut delivered = 0;
    let mut last_error = None;
    for worker in workers {
        match post(worker) {
            Ok(()) => delivered += 1,
            Err(e) => {
                log::warn!("{}", e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if delivered == 0 => Err(e),
        _ => Ok(delivered),
    }
}
