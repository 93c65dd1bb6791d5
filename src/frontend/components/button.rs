use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] loading: bool,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center px-6 py-3 text-sm font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-indigo-600 to-blue-600 text-white hover:from-indigo-700 hover:to-blue-700 hover:shadow-lg focus:ring-indigo-500",
        ButtonVariant::Outline => "border border-gray-300 text-gray-700 hover:bg-gray-50 focus:ring-indigo-500",
        ButtonVariant::Ghost => "text-gray-600 hover:text-gray-900 hover:bg-gray-100 focus:ring-gray-400",
    };

    let is_disabled = disabled || loading;

    let classes = format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    );

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button type=button_type_val class=classes disabled=is_disabled>
            {if loading {
                loading_text_display.into_any()
            } else {
                children().into_any()
            }}
        </button>
    }
}
