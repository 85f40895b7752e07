//! Контроллер черновика формы.
//!
//! Владеет значением формы и связывает его с двумя хранилищами:
//! - чтение и удаление записи кэша идёт напрямую через [`CacheBridge`];
//! - сохранение идёт сообщением `SAVE_FORM_DATA` в service worker.
//!
//! Всё состояние однопоточное (`Cell`/`RefCell`), заимствования не
//! удерживаются через `.await`.

use super::cache_bridge::CacheBridge;
use crate::shared::cache_storage::CacheStore;
use crate::shared::config::FormDraftConfig;
use crate::shared::service_worker::WorkerChannel;
use contracts::domain::a001_form_draft::aggregate::FormState;
use contracts::shared::worker_message::WorkerMessage;
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Фаза контроллера. В `Clearing` изменения формы не сохраняются.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftPhase {
    #[default]
    Idle,
    Editing,
    Clearing,
}

impl DraftPhase {
    pub fn accepts_changes(self) -> bool {
        !matches!(self, DraftPhase::Clearing)
    }
}

/// Результат обработки изменения формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Сообщение отправлено указанному числу воркеров
    Sent(usize),
    /// Нет активного service worker
    NoWorker,
    /// Изменение пришло во время очистки
    Skipped,
    Failed,
}

pub struct FormDraftController<S, C> {
    bridge: CacheBridge<S>,
    channel: C,
    request_timeout: Duration,
    state: RefCell<FormState>,
    cached: RefCell<Option<FormState>>,
    phase: Cell<DraftPhase>,
    /// Увеличивается при каждой очистке
    clear_epoch: Cell<u64>,
    modal_visible: Cell<bool>,
}

impl<S: CacheStore, C: WorkerChannel> FormDraftController<S, C> {
    pub fn new(store: S, channel: C, config: &FormDraftConfig) -> Self {
        Self {
            bridge: CacheBridge::new(store, config.cache.name.clone(), config.cache.key.clone()),
            channel,
            request_timeout: config.service_worker.request_timeout(),
            state: RefCell::new(FormState::default()),
            cached: RefCell::new(None),
            phase: Cell::new(DraftPhase::Idle),
            clear_epoch: Cell::new(0),
            modal_visible: Cell::new(false),
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn cached(&self) -> Option<FormState> {
        self.cached.borrow().clone()
    }

    pub fn phase(&self) -> DraftPhase {
        self.phase.get()
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible.get()
    }

    /// Проверить кэш при открытии формы.
    ///
    /// Найденная запись запоминается; если она не пустая, показывается окно
    /// подтверждения. Значение формы не меняется.
    pub async fn initialize(&self) -> Option<FormState> {
        let epoch = self.clear_epoch.get();
        let found = self.bridge.read().await;
        // a clear ran while the lookup was in flight
        if epoch != self.clear_epoch.get() || !self.phase.get().accepts_changes() {
            log::debug!("Discarding cache lookup that raced with clearing.");
            return None;
        }

        *self.cached.borrow_mut() = found.clone();
        if found.as_ref().is_some_and(|state| !state.is_pristine()) {
            self.modal_visible.set(true);
        }
        found
    }

    /// Обработчик изменения формы
    pub async fn on_form_change(&self, value: &FormState) -> SaveOutcome {
        if !self.phase.get().accepts_changes() {
            log::debug!("Skipping save operation during cache clearing.");
            return SaveOutcome::Skipped;
        }
        self.phase.set(DraftPhase::Editing);

        log::debug!("Attempting to save data: {:?}", value);
        let message = WorkerMessage::SaveFormData(value.clone());
        match self.channel.send(&message).await {
            Ok(0) => {
                log::warn!("No active service worker, form data was not saved");
                SaveOutcome::NoWorker
            }
            Ok(count) => {
                log::info!("Data sent to {} service worker(s): {:?}", count, value);
                SaveOutcome::Sent(count)
            }
            Err(e) => {
                log::error!("{}", e);
                SaveOutcome::Failed
            }
        }
    }

    /// Пользовательское изменение: заменить значение и сохранить его.
    /// Во время очистки значение не принимается.
    pub async fn set_value(&self, value: FormState) -> SaveOutcome {
        if !self.phase.get().accepts_changes() {
            log::debug!("Ignoring form edit during cache clearing.");
            return SaveOutcome::Skipped;
        }
        *self.state.borrow_mut() = value.clone();
        self.on_form_change(&value).await
    }

    /// Открыть окно подтверждения, если есть что восстанавливать
    pub fn show_modal(&self) -> bool {
        let has_cached = self.cached.borrow().is_some();
        self.modal_visible.set(has_cached);
        has_cached
    }

    /// Закрыть окно без очистки
    pub fn dismiss_modal(&self) {
        self.modal_visible.set(false);
    }

    /// Пользователь согласился загрузить сохранённые данные.
    ///
    /// Без запомненной записи черновик запрашивается у service worker.
    pub async fn confirm_restore(&self) -> Option<FormState> {
        let restored = match self.cached() {
            Some(state) => Some(state),
            None => self.request_from_worker().await,
        };
        self.modal_visible.set(false);

        let state = restored?;
        log::info!("Form data loaded from cache: {:?}", state);
        *self.state.borrow_mut() = state.clone();
        self.on_form_change(&state).await;
        Some(state)
    }

    async fn request_from_worker(&self) -> Option<FormState> {
        match self
            .channel
            .request(&WorkerMessage::GetFormData, self.request_timeout)
            .await
        {
            Ok(Some(reply)) => reply.into_form_data(),
            Ok(None) => {
                log::info!("Service worker did not return form data");
                None
            }
            Err(e) => {
                log::error!("{}", e);
                None
            }
        }
    }

    /// Сбросить форму и удалить запись кэша. Возвращает, была ли запись.
    pub async fn cancel_and_clear(&self) -> bool {
        log::info!("Clearing form and removing cached data...");
        self.phase.set(DraftPhase::Clearing);
        self.clear_epoch.set(self.clear_epoch.get() + 1);

        // Сбрасываем форму
        let reset = FormState::default();
        *self.state.borrow_mut() = reset.clone();
        self.on_form_change(&reset).await;
        self.modal_visible.set(false);

        let was_deleted = self.bridge.remove().await;
        *self.cached.borrow_mut() = None;
        self.phase.set(DraftPhase::Idle);
        was_deleted
    }
}
