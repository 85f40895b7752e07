use super::model::{self, BrowserFormDraftController};
use crate::shared::config::FormDraftConfig;
use contracts::domain::a001_form_draft::aggregate::FormState;
use contracts::enums::select_option::SelectOption;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the form draft.
///
/// Widgets bind to the field signals; the controller stays the owner of the
/// form value and is synced back into the signals after every command.
#[derive(Clone, Copy)]
pub struct FormDraftViewModel {
    controller: StoredValue<Rc<BrowserFormDraftController>, LocalStorage>,
    pub name: RwSignal<String>,
    pub select_option: RwSignal<String>,
    pub agree: RwSignal<bool>,
    pub modal_open: RwSignal<bool>,
    pub has_cached: RwSignal<bool>,
}

impl FormDraftViewModel {
    pub fn new(config: &FormDraftConfig) -> Self {
        let initial = FormState::default();
        Self {
            controller: StoredValue::new_local(model::build_controller(config)),
            name: RwSignal::new(initial.name),
            select_option: RwSignal::new(initial.select_option.code().to_string()),
            agree: RwSignal::new(initial.agree),
            modal_open: RwSignal::new(false),
            has_cached: RwSignal::new(false),
        }
    }

    fn controller(&self) -> Rc<BrowserFormDraftController> {
        self.controller.get_value()
    }

    /// Current widget values as a form state (tracked)
    pub fn form_value(&self) -> FormState {
        FormState::new(
            self.name.get(),
            SelectOption::from_code(&self.select_option.get()).unwrap_or_default(),
            self.agree.get(),
        )
    }

    pub fn preview(&self) -> String {
        serde_json::to_string_pretty(&self.form_value()).unwrap_or_default()
    }

    fn sync_from(&self, controller: &BrowserFormDraftController) {
        let state = controller.snapshot();
        self.name.set(state.name);
        self.select_option.set(state.select_option.code().to_string());
        self.agree.set(state.agree);
        self.modal_open.set(controller.is_modal_visible());
        self.has_cached.set(controller.cached().is_some());
    }

    /// Check the cache and subscribe to widget changes
    pub fn init(&self) {
        let vm = *self;
        let controller = self.controller();
        spawn_local(async move {
            controller.initialize().await;
            vm.sync_from(&controller);
        });

        // values written by sync_from equal the snapshot and are not saved again
        Effect::new(move |_| {
            let value = vm.form_value();
            let controller = vm.controller();
            if value != controller.snapshot() {
                spawn_local(async move {
                    controller.set_value(value).await;
                });
            }
        });

        Effect::new(move |_| {
            if !vm.modal_open.get() {
                vm.controller.with_value(|c| c.dismiss_modal());
            }
        });
    }

    pub fn show_modal_command(&self) {
        let shown = self.controller.with_value(|c| c.show_modal());
        self.modal_open.set(shown);
    }

    pub fn confirm_command(&self) {
        let vm = *self;
        let controller = self.controller();
        spawn_local(async move {
            controller.confirm_restore().await;
            vm.sync_from(&controller);
        });
    }

    pub fn cancel_command(&self) {
        let vm = *self;
        let controller = self.controller();
        spawn_local(async move {
            controller.cancel_and_clear().await;
            vm.sync_from(&controller);
        });
    }
}
