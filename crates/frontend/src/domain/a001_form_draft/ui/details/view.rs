use super::view_model::FormDraftViewModel;
use crate::shared::config::FormDraftConfig;
use crate::shared::icons::icon;
use contracts::enums::select_option::SelectOption;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn FormDraftDetails() -> impl IntoView {
    let config = use_context::<FormDraftConfig>().unwrap_or_default();
    let vm = FormDraftViewModel::new(&config);
    vm.init();

    view! {
        <div class="details-container form-draft-details">
            <div class="details-header">
                <h3>{"Анкета"}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <Label>{"Имя"}</Label>
                    <Input value=vm.name placeholder="Введите имя" />
                </div>

                <div class="form-group">
                    <Label>{"Вариант"}</Label>
                    <Select value=vm.select_option>
                        {SelectOption::all()
                            .into_iter()
                            .map(|option| view! { <option value=option.code()>{option.display_name()}</option> })
                            .collect_view()}
                    </Select>
                </div>

                <div class="form-group">
                    <Checkbox checked=vm.agree label="Согласен с условиями" />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.show_modal_command()
                    disabled=Signal::derive(move || !vm.has_cached.get())
                >
                    {icon("restore")}
                    {"Восстановить сохранённые данные"}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.cancel_command()
                >
                    {icon("clear")}
                    {"Очистить"}
                </Button>
            </div>

            <pre class="form-draft-details__preview">{move || vm.preview()}</pre>

            <Dialog open=vm.modal_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Найдены сохранённые данные"</DialogTitle>
                        <DialogContent>
                            "Загрузить ранее введённые данные формы? Отмена очистит форму и удалит сохранённую копию."
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.confirm_command()
                            >
                                {icon("check")}
                                "Загрузить"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| vm.cancel_command()
                            >
                                "Отмена"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
