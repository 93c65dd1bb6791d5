use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    /// Tone for the status strings used across the fixture data.
    pub fn for_status(status: &str) -> BadgeTone {
        match status {
            "active" | "completed" | "approved" | "Completed" | "Active" => BadgeTone::Success,
            "pending" | "Pending" | "under-review" | "medium" => BadgeTone::Warning,
            "rejected" | "suspended" | "high" | "High" => BadgeTone::Danger,
            _ => BadgeTone::Neutral,
        }
    }
}

#[component]
pub fn Badge(#[prop(into)] text: String, #[prop(optional)] tone: BadgeTone) -> impl IntoView {
    let classes = match tone {
        BadgeTone::Neutral => "bg-gray-100 text-gray-700",
        BadgeTone::Success => "bg-green-100 text-green-700",
        BadgeTone::Warning => "bg-yellow-100 text-yellow-700",
        BadgeTone::Danger => "bg-red-100 text-red-700",
    };

    view! {
        <span class=format!("inline-flex items-center text-xs font-medium px-2.5 py-0.5 rounded-full {}", classes)>
            {text}
        </span>
    }
}
