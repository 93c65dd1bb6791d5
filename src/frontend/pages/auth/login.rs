use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::Login;
use crate::common::AuthError;
use crate::frontend::components::{
    Button, ButtonVariant, EmailInput, ErrorAlert, PasswordInput, SelectInput,
};
use crate::frontend::session::use_session;
use crate::models::Role;

/// Demo accounts offered below the form, one per role.
const DEMO_ACCOUNTS: [(Role, &str); 3] = [
    (Role::Donor, "donor@demo.com"),
    (Role::CampaignLeader, "leader@demo.com"),
    (Role::Admin, "admin@demo.com"),
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    // Optional `role` query parameter pre-selects the role; absent or
    // invalid values default to donor.
    let initial_role = query
        .with_untracked(|q| q.get("role").map(|r| Role::parse_or_donor(&r)))
        .unwrap_or(Role::Donor);

    let login_action = ServerAction::<Login>::new();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(initial_role.as_str().to_string());

    let pending = login_action.pending();
    let result = login_action.value();

    // Install the resolved identity and redirect to its role's dashboard.
    // This is the single writer of the session store on this page.
    Effect::new(move |_| {
        if let Some(Ok(identity)) = result.get() {
            let dest = identity.role.dashboard_path();
            session.set_identity(identity);
            navigate(dest, Default::default());
        }
    });

    // The resolver never rejects, so this stays a generic message.
    let error_message = move || {
        result
            .get()
            .and_then(|r| r.err().map(|_| AuthError::InvalidCredentials.to_string()))
    };

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
                        <h1 class="text-2xl font-bold text-gray-900">"Welcome Back"</h1>
                        <p class="text-gray-600 mt-2">
                            "Sign in to your account to continue making a difference"
                        </p>
                    </div>

                    <Show when=move || error_message().is_some()>
                        <ErrorAlert message=error_message().unwrap_or_default() />
                    </Show>

                    <ActionForm action=login_action attr:class="space-y-5">
                        <SelectInput
                            label="Login as"
                            name="role"
                            options=role_options.clone()
                            value=role
                            set_value=set_role
                        />
                        <EmailInput label="Email" value=email set_value=set_email />
                        <PasswordInput label="Password" value=password set_value=set_password />
                        <Button
                            variant=ButtonVariant::Primary
                            loading=pending.get()
                            loading_text="Signing in..."
                        >
                            "Sign In"
                        </Button>
                    </ActionForm>

                    <div class="relative my-6">
                        <div class="absolute inset-0 flex items-center">
                            <div class="w-full border-t border-gray-200"></div>
                        </div>
                        <div class="relative flex justify-center text-xs">
                            <span class="bg-white px-2 text-gray-500">"Or try demo accounts"</span>
                        </div>
                    </div>

                    <div class="grid grid-cols-3 gap-2">
                        {DEMO_ACCOUNTS
                            .iter()
                            .map(|&(demo_role, demo_email)| {
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| {
                                            login_action
                                                .dispatch(Login {
                                                    email: demo_email.to_string(),
                                                    password: "demo123".to_string(),
                                                    role: demo_role.as_str().to_string(),
                                                });
                                        }
                                        class="text-xs border border-gray-300 rounded-lg px-2 py-2 text-gray-600 hover:bg-gray-50 transition-colors"
                                    >
                                        {demo_role.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class="text-center text-gray-600 mt-6 text-sm">
                        "Don't have an account? "
                        <a href="/register" class="text-indigo-600 hover:text-indigo-700 font-medium">
                            "Sign up"
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
