use leptos::prelude::*;

use crate::frontend::components::{Badge, BadgeTone};
use crate::models::PlatformUser;

fn user_fixtures() -> Vec<PlatformUser> {
    vec![
        PlatformUser {
            name: "John Donor",
            email: "donor@demo.com",
            role: "donor",
            joined: "Dec 2023",
            status: "active",
        },
        PlatformUser {
            name: "Sarah Leader",
            email: "leader@demo.com",
            role: "campaign-leader",
            joined: "Nov 2023",
            status: "active",
        },
        PlatformUser {
            name: "Margaret Chen",
            email: "m.chen@example.com",
            role: "donor",
            joined: "Oct 2023",
            status: "active",
        },
        PlatformUser {
            name: "Hope Foundation",
            email: "contact@hopefoundation.org",
            role: "campaign-leader",
            joined: "Sep 2023",
            status: "active",
        },
        PlatformUser {
            name: "Spam Account",
            email: "winner@free-money.biz",
            role: "donor",
            joined: "Jan 2024",
            status: "suspended",
        },
    ]
}

/// User management table with free-text search over name and email.
#[component]
pub fn UserManagement() -> impl IntoView {
    let (search, set_search) = signal(String::new());

    let visible = move || {
        let query = search.get().to_lowercase();
        user_fixtures()
            .into_iter()
            .filter(|u| {
                query.is_empty()
                    || u.name.to_lowercase().contains(&query)
                    || u.email.to_lowercase().contains(&query)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"User Management"</h1>
            <p class="text-gray-600 mt-2">"Search and moderate platform accounts."</p>

            <input
                type="search"
                placeholder="Search by name or email..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
                class="w-full md:w-96 mt-6 px-4 py-2.5 rounded-lg bg-white border border-gray-300
                       placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500"
            />

            <div class="bg-white border border-gray-200 rounded-xl shadow-sm mt-6 overflow-x-auto">
                <table class="w-full text-left text-sm">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"Name"</th>
                            <th class="px-6 py-3">"Email"</th>
                            <th class="px-6 py-3">"Role"</th>
                            <th class="px-6 py-3">"Joined"</th>
                            <th class="px-6 py-3">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=visible
                            key=|u| u.email
                            children=|u| {
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-6 py-4 font-medium text-gray-900">{u.name}</td>
                                        <td class="px-6 py-4 text-gray-600">{u.email}</td>
                                        <td class="px-6 py-4 text-gray-600">{u.role}</td>
                                        <td class="px-6 py-4 text-gray-600">{u.joined}</td>
                                        <td class="px-6 py-4">
                                            <Badge text=u.status tone=BadgeTone::for_status(u.status)/>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || visible().is_empty()>
                <p class="text-center text-gray-500 py-12">"No users match your search."</p>
            </Show>
        </div>
    }
}
