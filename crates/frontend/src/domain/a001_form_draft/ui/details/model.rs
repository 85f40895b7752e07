use crate::domain::a001_form_draft::controller::FormDraftController;
use crate::shared::cache_storage::BrowserCacheStore;
use crate::shared::config::FormDraftConfig;
use crate::shared::service_worker::BrowserWorkerChannel;
use std::rc::Rc;

pub type BrowserFormDraftController = FormDraftController<BrowserCacheStore, BrowserWorkerChannel>;

pub fn build_controller(config: &FormDraftConfig) -> Rc<BrowserFormDraftController> {
    Rc::new(FormDraftController::new(
        BrowserCacheStore,
        BrowserWorkerChannel,
        config,
    ))
}
