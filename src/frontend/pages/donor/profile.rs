use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant, SuccessAlert, TextInput};
use crate::frontend::session::use_session;

/// Profile editor pre-filled from the session identity. Saving only flips a
/// local flag; nothing is persisted.
#[component]
pub fn DonorProfile() -> impl IntoView {
    let session = use_session();
    let identity = session.identity();

    let (name, set_name) = signal(identity.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let (email, set_email) =
        signal(identity.as_ref().map(|i| i.email.clone()).unwrap_or_default());
    let (location, set_location) = signal(String::new());
    let (saved, set_saved) = signal(false);

    let avatar_url = identity.and_then(|i| i.avatar_url);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_saved.set(true);
    };

    view! {
        <div class="max-w-2xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"My Profile"</h1>
            <p class="text-gray-600 mt-2">"Manage your account details and preferences."</p>

            <div class="bg-white border border-gray-200 rounded-xl p-8 mt-8 shadow-sm">
                <div class="flex items-center gap-4 mb-8">
                    {avatar_url
                        .map(|url| {
                            view! {
                                <img src=url alt="Avatar" class="w-16 h-16 rounded-full"/>
                            }
                        })}
                    <div>
                        <p class="font-semibold text-gray-900">{move || name.get()}</p>
                        <p class="text-sm text-gray-500">"Donor since December 2023"</p>
                    </div>
                </div>

                <Show when=move || saved.get()>
                    <SuccessAlert message="Profile updated." />
                </Show>

                <form on:submit=on_submit class="space-y-5">
                    <TextInput
                        label="Full Name"
                        name="name"
                        placeholder="Your name"
                        input_type="text"
                        value=name
                        set_value=set_name
                    />
                    <TextInput
                        label="Email"
                        name="profile-email"
                        placeholder="you@example.com"
                        input_type="email"
                        value=email
                        set_value=set_email
                    />
                    <TextInput
                        label="Location"
                        name="location"
                        placeholder="City, Country"
                        input_type="text"
                        value=location
                        set_value=set_location
                    />
                    <Button variant=ButtonVariant::Primary>"Save Changes"</Button>
                </form>
            </div>
        </div>
    }
}
