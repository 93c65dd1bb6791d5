use leptos::prelude::*;

use crate::models::Notification;

fn notification_fixtures() -> Vec<Notification> {
    vec![
        Notification {
            title: "Milestone reached!",
            message: "Clean Water for Rural Communities has reached 75% of its goal.",
            time: "2 hours ago",
            read: false,
        },
        Notification {
            title: "New campaign update",
            message: "Education for Every Child posted an update: \"First shipment of books delivered.\"",
            time: "1 day ago",
            read: false,
        },
        Notification {
            title: "Donation receipt",
            message: "Your receipt for the $150 donation to Clean Water for Rural Communities is ready.",
            time: "3 days ago",
            read: true,
        },
        Notification {
            title: "Achievement unlocked",
            message: "You earned the Community Builder badge for supporting 10 campaigns.",
            time: "1 week ago",
            read: true,
        },
    ]
}

/// Notification list with an all/unread tab. The tab selection is local
/// state; the read flags come straight from the fixtures.
#[component]
pub fn DonorNotifications() -> impl IntoView {
    let (show_unread_only, set_show_unread_only) = signal(false);

    let visible = move || {
        notification_fixtures()
            .into_iter()
            .filter(|n| !show_unread_only.get() || !n.read)
            .collect::<Vec<_>>()
    };

    let tab_class = |active: bool| {
        if active {
            "px-4 py-2 text-sm font-medium rounded-lg bg-indigo-600 text-white"
        } else {
            "px-4 py-2 text-sm font-medium rounded-lg text-gray-600 hover:bg-gray-100"
        }
    };

    view! {
        <div class="max-w-2xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"Notifications"</h1>

            <div class="flex gap-2 mt-6">
                <button
                    type="button"
                    on:click=move |_| set_show_unread_only.set(false)
                    class=move || tab_class(!show_unread_only.get())
                >
                    "All"
                </button>
                <button
                    type="button"
                    on:click=move |_| set_show_unread_only.set(true)
                    class=move || tab_class(show_unread_only.get())
                >
                    "Unread"
                </button>
            </div>

            <div class="mt-6 space-y-3">
                <For
                    each=visible
                    key=|n| n.title
                    children=|n| {
                        let classes = if n.read {
                            "bg-white border border-gray-200 rounded-xl p-5 shadow-sm"
                        } else {
                            "bg-indigo-50 border border-indigo-100 rounded-xl p-5 shadow-sm"
                        };
                        view! {
                            <div class=classes>
                                <div class="flex items-center justify-between">
                                    <p class="font-semibold text-gray-900">{n.title}</p>
                                    <span class="text-xs text-gray-500">{n.time}</span>
                                </div>
                                <p class="text-sm text-gray-600 mt-1">{n.message}</p>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || visible().is_empty()>
                <p class="text-center text-gray-500 py-12">"You're all caught up."</p>
            </Show>
        </div>
    }
}
