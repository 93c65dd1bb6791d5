use leptos::prelude::*;

use crate::frontend::components::{SuccessAlert, TextArea, TextInput};

/// Contact form. Submission only flips a local flag; there is no mail
/// backend behind it.
#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);
    };

    view! {
        <div class="max-w-xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h1 class="text-4xl font-bold text-gray-900">"Contact Us"</h1>
            <p class="text-xl text-gray-600 mt-4">"We'd love to hear from you."</p>

            <div class="bg-white border border-gray-200 rounded-xl p-8 mt-10 shadow-sm">
                <Show when=move || submitted.get()>
                    <SuccessAlert message="Thanks for reaching out! We'll get back to you within one business day." />
                </Show>

                <form on:submit=on_submit class="space-y-5">
                    <TextInput
                        label="Name"
                        name="name"
                        placeholder="Jane Doe"
                        input_type="text"
                        required=true
                        value=name
                        set_value=set_name
                    />
                    <TextInput
                        label="Email"
                        name="contact-email"
                        placeholder="you@example.com"
                        input_type="email"
                        required=true
                        value=email
                        set_value=set_email
                    />
                    <TextArea
                        label="Message"
                        name="message"
                        placeholder="How can we help?"
                        rows=5
                        value=message
                        set_value=set_message
                    />
                    <button
                        type="submit"
                        class="w-full bg-indigo-600 text-white font-semibold py-3 rounded-lg hover:bg-indigo-700 transition-colors"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </div>
    }
}
