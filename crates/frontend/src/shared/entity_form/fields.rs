//! Inputs bound to a draft field by wire name

use super::view_model::EntityFormViewModel;
use contracts::domain::common::ReferenceOption;
use leptos::prelude::*;

/// `<option>` of a [`DraftSelect`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<ReferenceOption> for SelectOption {
    fn from(option: ReferenceOption) -> Self {
        Self {
            value: option.value(),
            label: option.display_name,
        }
    }
}

/// Reference options as select options
pub fn choices(options: Vec<ReferenceOption>) -> Vec<SelectOption> {
    options.into_iter().map(SelectOption::from).collect()
}

#[component]
fn FieldLabel(vm: EntityFormViewModel, name: &'static str) -> impl IntoView {
    let spec = vm.spec(name);
    let label = spec.map(|s| s.label).unwrap_or(name);
    let required = spec.map(|s| s.is_required()).unwrap_or(false);

    view! {
        <label class="form__label" for=name>
            {label}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}

/// `<input>` for text, number, date and datetime-local fields
#[component]
pub fn DraftInput(
    vm: EntityFormViewModel,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let required = vm.spec(name).map(|s| s.is_required()).unwrap_or(false);

    view! {
        <div class="form__group">
            <FieldLabel vm=vm name=name />
            <input
                id=name
                class="form__input"
                type=input_type
                step=step
                placeholder=placeholder
                required=required
                prop:value=move || vm.value(name)
                on:input=move |ev| vm.set(name, event_target_value(&ev))
                disabled=move || vm.is_submitting()
            />
        </div>
    }
}

#[component]
pub fn DraftTextarea(
    vm: EntityFormViewModel,
    name: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--wide">
            <FieldLabel vm=vm name=name />
            <textarea
                id=name
                class="form__input"
                rows=rows
                prop:value=move || vm.value(name)
                on:input=move |ev| vm.set(name, event_target_value(&ev))
                disabled=move || vm.is_submitting()
            ></textarea>
        </div>
    }
}

/// `<select>` with a placeholder entry mapped to ""
#[component]
pub fn DraftSelect(
    vm: EntityFormViewModel,
    name: &'static str,
    placeholder: &'static str,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let required = vm.spec(name).map(|s| s.is_required()).unwrap_or(false);

    view! {
        <div class="form__group">
            <FieldLabel vm=vm name=name />
            <select
                id=name
                class="form__input"
                required=required
                on:change=move |ev| vm.set(name, event_target_value(&ev))
                disabled=move || vm.is_submitting() || disabled.get()
            >
                <option value="" selected=move || vm.value(name).is_empty()>{placeholder}</option>
                <For
                    each=move || options.get()
                    key=|opt| opt.clone()
                    children=move |opt: SelectOption| {
                        let value = opt.value.clone();
                        let is_selected = move || vm.value(name) == value;
                        view! {
                            <option value=opt.value selected=is_selected>{opt.label}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_option_becomes_select_option() {
        let options = choices(vec![ReferenceOption::new(3, "Yangon WH")]);
        assert_eq!(options, vec![SelectOption::new("3", "Yangon WH")]);
    }
}
