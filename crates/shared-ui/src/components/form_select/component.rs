use dioxus::prelude::*;

/// Native `<select>` with the dashboard styling.
///
/// Children should be `option { value: "...", "Label" }` elements. Used for
/// role pickers, judge pickers and hearing status.
#[component]
pub fn FormSelect(
    #[props(default)]
    value: String,
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)]
    label: String,
    #[props(default = false)]
    disabled: bool,
    #[props(default = false)]
    required: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label",
                    "{label}"
                    if required {
                        span { class: "form-select-required", " *" }
                    }
                }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                required: required,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
