use super::{await_reply, post_to_all, ChannelError, Reply, WorkerChannel};
use async_trait::async_trait;
use contracts::shared::worker_message::WorkerMessage;
use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{MessageChannel, MessageEvent, ServiceWorker, ServiceWorkerContainer, ServiceWorkerRegistration};

/// `navigator.serviceWorker`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWorkerChannel;

fn container() -> Result<ServiceWorkerContainer, ChannelError> {
    let window = web_sys::window().ok_or(ChannelError::Unavailable)?;
    let navigator = window.navigator();
    let service_worker = js_sys::Reflect::get(&navigator, &JsValue::from_str("serviceWorker"))
        .map_err(|_| ChannelError::Unavailable)?;
    if service_worker.is_undefined() || service_worker.is_null() {
        return Err(ChannelError::Unavailable);
    }
    Ok(navigator.service_worker())
}

async fn active_workers() -> Result<Vec<ServiceWorker>, ChannelError> {
    let registrations = JsFuture::from(container()?.get_registrations())
        .await
        .map_err(|e| ChannelError::Registrations(format!("{e:?}")))?;
    let registrations: js_sys::Array = registrations
        .dyn_into()
        .map_err(|e| ChannelError::Registrations(format!("{e:?}")))?;

    Ok(registrations
        .iter()
        .filter_map(|r| r.dyn_into::<ServiceWorkerRegistration>().ok())
        .filter_map(|r| r.active())
        .collect())
}

fn encode(message: &WorkerMessage) -> Result<JsValue, ChannelError> {
    serde_wasm_bindgen::to_value(message).map_err(|e| ChannelError::Encode(e.to_string()))
}

fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[async_trait(?Send)]
impl WorkerChannel for BrowserWorkerChannel {
    async fn send(&self, message: &WorkerMessage) -> Result<usize, ChannelError> {
        let workers = active_workers().await?;
        if workers.is_empty() {
            return Ok(0);
        }

        let payload = encode(message)?;
        post_to_all(&workers, |worker| {
            worker
                .post_message(&payload)
                .map_err(|e| ChannelError::Post(format!("{e:?}")))
        })
    }

    async fn request(
        &self,
        message: &WorkerMessage,
        timeout: Duration,
    ) -> Result<Option<WorkerMessage>, ChannelError> {
        let Some(worker) = active_workers().await?.into_iter().next() else {
            return Ok(None);
        };

        let payload = encode(message)?;
        let channel = MessageChannel::new().map_err(|e| ChannelError::Post(format!("{e:?}")))?;
        let (reply_tx, reply_rx) = oneshot::channel::<WorkerMessage>();
        let reply_tx = Rc::new(RefCell::new(Some(reply_tx)));

        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            match serde_wasm_bindgen::from_value::<WorkerMessage>(event.data()) {
                Ok(reply @ WorkerMessage::FormData(_)) => {
                    if let Some(tx) = reply_tx.borrow_mut().take() {
                        let _ = tx.send(reply);
                    }
                }
                Ok(other) => log::debug!("Ignoring {} reply on request channel", other.kind()),
                Err(e) => log::warn!("Unreadable reply from service worker: {}", e),
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        let port = channel.port1();
        port.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let transfer = js_sys::Array::of1(&channel.port2());
        let posted = worker
            .post_message_with_transferable(&payload, &transfer)
            .map_err(|e| ChannelError::Post(format!("{e:?}")));

        let outcome = match &posted {
            Ok(()) => {
                let timer = TimeoutFuture::new(timeout_millis(timeout));
                Some(await_reply(reply_rx, timer).await)
            }
            Err(_) => None,
        };

        port.set_onmessage(None);
        port.close();
        drop(on_message);
        posted?;

        match outcome {
            Some(Reply::TimedOut) => {
                log::warn!(
                    "No {} reply from service worker within {} ms",
                    message.kind(),
                    timeout.as_millis()
                );
                Ok(None)
            }
            Some(reply) => Ok(reply.into_message()),
            None => Ok(None),
        }
    }
}

/// Зарегистрировать скрипт service worker
pub async fn register_service_worker(script_url: &str) -> Result<(), ChannelError> {
    let registration = JsFuture::from(container()?.register(script_url))
        .await
        .map_err(|e| ChannelError::Register(format!("{e:?}")))?;
    let registration: ServiceWorkerRegistration = registration
        .dyn_into()
        .map_err(|e| ChannelError::Register(format!("{e:?}")))?;
    log::info!(
        "Service worker '{}' registered, scope {}",
        script_url,
        registration.scope()
    );
    Ok(())
}
