//! Form controls generated from a form's field schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the form view page. `field_controls` maps each `FieldSchema` to a
//! `FieldControl` (the control kind plus its attributes); `DynamicForm`
//! renders those. Unknown field types fall back to an `<input>` of that type.

#[cfg(test)]
#[path = "dynamic_form_test.rs"]
mod dynamic_form_test;

use leptos::prelude::*;

use crate::net::types::{FieldOption, FieldSchema, FieldType};

/// Which element a field renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Input { input_type: String },
    Textarea,
    Select { options: Vec<FieldOption> },
    File { accept: Option<String>, multiple: bool },
}

/// Attributes of one generated control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldControl {
    /// Element id and `name` attribute.
    pub key: String,
    pub label: String,
    pub kind: ControlKind,
    pub required: bool,
    pub placeholder: Option<String>,
}

pub fn build_form_element(schema: &FieldSchema) -> FieldControl {
    let kind = match &schema.kind {
        FieldType::Textarea => ControlKind::Textarea,
        FieldType::Select => ControlKind::Select { options: schema.options.clone() },
        FieldType::File => ControlKind::File { accept: schema.accept.clone(), multiple: schema.multiple },
        FieldType::Input(input_type) => ControlKind::Input { input_type: input_type.clone() },
    };
    // Selects and file pickers have no placeholder attribute.
    let placeholder = match kind {
        ControlKind::Input { .. } | ControlKind::Textarea => schema.placeholder.clone(),
        ControlKind::Select { .. } | ControlKind::File { .. } => None,
    };
    FieldControl {
        key: schema.key().to_owned(),
        label: schema.label.clone(),
        kind,
        required: schema.required,
        placeholder,
    }
}

pub fn field_controls(fields: &[FieldSchema]) -> Vec<FieldControl> {
    fields.iter().map(build_form_element).collect()
}

fn render_control(control: FieldControl) -> impl IntoView {
    let FieldControl { key, label, kind, required, placeholder } = control;
    let input = match kind {
        ControlKind::Input { input_type } => view! {
            <input
                class="form-control"
                type=input_type
                id=key.clone()
                name=key.clone()
                required=required
                placeholder=placeholder
            />
        }
        .into_any(),
        ControlKind::Textarea => view! {
            <textarea
                class="form-control"
                id=key.clone()
                name=key.clone()
                required=required
                placeholder=placeholder
            ></textarea>
        }
        .into_any(),
        ControlKind::Select { options } => view! {
            <select class="form-control" id=key.clone() name=key.clone() required=required>
                {options
                    .into_iter()
                    .map(|o| view! { <option value=o.value>{o.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        ControlKind::File { accept, multiple } => view! {
            <input
                class="form-control"
                type="file"
                id=key.clone()
                name=key.clone()
                required=required
                accept=accept
                multiple=multiple
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=key>
                {label}
                {required.then_some(view! { <span class="required">" *"</span> })}
            </label>
            {input}
        </div>
    }
}

#[component]
pub fn DynamicForm(fields: Vec<FieldSchema>) -> impl IntoView {
    let controls = field_controls(&fields);
    view! {
        <form class="dynamic-form" on:submit=|ev| ev.prevent_default()>
            {controls.into_iter().map(render_control).collect_view()}
        </form>
    }
}
