use leptos::prelude::*;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full px-4 py-2.5 rounded-lg bg-white border border-gray-300
                       text-gray-900 placeholder-gray-400
                       focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent
                       transition-all"
            />
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-gray-500">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email"
            required=true
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            placeholder="••••••••"
            input_type="password"
            required=true
            hint=hint
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional)] rows: u32,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full px-4 py-2.5 rounded-lg bg-white border border-gray-300
                       text-gray-900 placeholder-gray-400
                       focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent
                       transition-all"
            ></textarea>
        </div>
    }
}

/// Select with `(value, label)` options.
#[component]
pub fn SelectInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    options: Vec<(String, String)>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <select
                id=name.clone()
                name=name
                prop:value=move || value.get()
                on:change=move |ev| set_value.set(event_target_value(&ev))
                class="w-full px-4 py-2.5 rounded-lg bg-white border border-gray-300
                       text-gray-900
                       focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let selected = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == selected>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
