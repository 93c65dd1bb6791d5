use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::Register;
use crate::frontend::components::{
    Button, ButtonVariant, EmailInput, PasswordInput, SelectInput, TextInput,
};
use crate::frontend::session::use_session;
use crate::models::Role;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let register_action = ServerAction::<Register>::new();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Donor.as_str().to_string());

    let pending = register_action.pending();
    let result = register_action.value();

    // Registration behaves like login: the new identity is installed and the
    // user lands on their role's dashboard.
    Effect::new(move |_| {
        if let Some(Ok(identity)) = result.get() {
            let dest = identity.role.dashboard_path();
            session.set_identity(identity);
            navigate(dest, Default::default());
        }
    });

    let role_options = Role::SELECTABLE
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="min-h-screen flex items-center justify-center px-4 py-12 bg-gradient-to-br from-indigo-50 via-white to-blue-50">
            <div class="w-full max-w-md">
                <div class="bg-white border border-gray-200 rounded-2xl p-8 shadow-lg">
                    <div class="text-center mb-8">
                        <a href="/" class="inline-block text-4xl mb-4">"❤"</a>
                        <h1 class="text-2xl font-bold text-gray-900">"Create Account"</h1>
                        <p class="text-gray-600 mt-2">"Join thousands of people making a difference"</p>
                    </div>

                    <ActionForm action=register_action attr:class="space-y-5">
                        <TextInput
                            label="Full Name"
                            name="name"
                            placeholder="Jane Doe"
                            input_type="text"
                            required=true
                            value=name
                            set_value=set_name
                        />
                        <EmailInput label="Email" value=email set_value=set_email />
                        <PasswordInput label="Password" value=password set_value=set_password />
                        <SelectInput
                            label="I want to join as"
                            name="role"
                            options=role_options
                            value=role
                            set_value=set_role
                        />
                        <Button
                            variant=ButtonVariant::Primary
                            loading=pending.get()
                            loading_text="Creating account..."
                        >
                            "Create Account"
                        </Button>
                    </ActionForm>

                    <p class="text-center text-gray-600 mt-6 text-sm">
                        "Already have an account? "
                        <a href="/login" class="text-indigo-600 hover:text-indigo-700 font-medium">
                            "Sign in"
                        </a>
                    </p>
                </div>

                <a
                    href="/"
                    class="block text-center text-gray-500 hover:text-gray-700 mt-6 text-sm transition-colors"
                >
                    "← Back to home"
                </a>
            </div>
        </div>
    }
}
