use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::models::{CampaignDraft, CAMPAIGN_CATEGORIES};
use crate::wizard::{CampaignWizard, WizardStep};

/// Text input bound to one draft field through accessor fn pointers, so the
/// wizard stays the single owner of the draft.
#[component]
fn DraftInput(
    wizard: RwSignal<CampaignWizard>,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    read: fn(&CampaignDraft) -> String,
    write: fn(&mut CampaignDraft, String),
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || wizard.with(|w| read(&w.draft))
                on:input=move |ev| {
                    wizard.update(|w| write(&mut w.draft, event_target_value(&ev)))
                }
                class="w-full px-4 py-2.5 rounded-lg bg-white border border-gray-300 text-gray-900
                       placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500"
            />
        </div>
    }
}

#[component]
fn DraftTextArea(
    wizard: RwSignal<CampaignWizard>,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(optional)] rows: u32,
    read: fn(&CampaignDraft) -> String,
    write: fn(&mut CampaignDraft, String),
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <textarea
                placeholder=placeholder
                rows=rows
                prop:value=move || wizard.with(|w| read(&w.draft))
                on:input=move |ev| {
                    wizard.update(|w| write(&mut w.draft, event_target_value(&ev)))
                }
                class="w-full px-4 py-2.5 rounded-lg bg-white border border-gray-300 text-gray-900
                       placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500"
            ></textarea>
        </div>
    }
}

/// Four-step campaign creation wizard. All transition and validation rules
/// live in [`CampaignWizard`]; this page only renders the current step and
/// forwards events.
#[component]
pub fn CreateCampaign() -> impl IntoView {
    let navigate = use_navigate();
    let wizard = RwSignal::new(CampaignWizard::new());

    let step = move || wizard.with(|w| w.step());
    let step_valid = move || wizard.with(|w| w.step_valid());

    let (tag_input, set_tag_input) = signal(String::new());
    let add_tag = move |_| {
        let tag = tag_input.get();
        wizard.update(|w| w.add_tag(&tag));
        set_tag_input.set(String::new());
    };

    let on_submit = move |_| {
        wizard.with(|w| w.submit());
        navigate("/leader/campaigns", Default::default());
    };

    view! {
        <div class="bg-gray-50 min-h-screen">
            // Header
            <div class="bg-white border-b border-gray-200">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <a href="/leader/campaigns" class="text-sm text-gray-600 hover:text-gray-900">
                            "← Back to Campaigns"
                        </a>
                        <div>
                            <h1 class="text-2xl font-bold text-gray-900">"Create New Campaign"</h1>
                            <p class="text-gray-600">
                                {move || {
                                    format!("Step {} of 4: {}", step().index() + 1, step().title())
                                }}
                            </p>
                        </div>
                    </div>
                    <div class="flex items-center gap-3">
                        // Present but intentionally wired to nothing.
                        <button
                            type="button"
                            class="border border-gray-300 text-gray-700 text-sm px-4 py-2 rounded-lg hover:bg-gray-50"
                        >
                            "Save Draft"
                        </button>
                        <button
                            type="button"
                            class="border border-gray-300 text-gray-700 text-sm px-4 py-2 rounded-lg hover:bg-gray-50"
                        >
                            "Preview"
                        </button>
                    </div>
                </div>
            </div>

            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Step indicator
                <div class="flex items-center justify-between mb-8">
                    {WizardStep::ALL
                        .iter()
                        .map(|&s| {
                            let index = s.index();
                            view! {
                                <div class="flex items-center flex-1 last:flex-none">
                                    <div class=move || {
                                        if index <= step().index() {
                                            "flex items-center justify-center w-8 h-8 rounded-full border-2 bg-indigo-600 border-indigo-600 text-white text-sm font-medium"
                                        } else {
                                            "flex items-center justify-center w-8 h-8 rounded-full border-2 border-gray-300 text-gray-400 text-sm font-medium"
                                        }
                                    }>
                                        {move || {
                                            if index < step().index() {
                                                "✓".to_string()
                                            } else {
                                                (index + 1).to_string()
                                            }
                                        }}
                                    </div>
                                    <span class="ml-2 text-sm text-gray-600 hidden sm:inline">
                                        {s.title()}
                                    </span>
                                    {(index < WizardStep::ALL.len() - 1)
                                        .then(|| {
                                            view! {
                                                <div class=move || {
                                                    if index < step().index() {
                                                        "flex-1 h-0.5 mx-3 bg-indigo-600"
                                                    } else {
                                                        "flex-1 h-0.5 mx-3 bg-gray-300"
                                                    }
                                                }></div>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Step card
                <div class="bg-white border border-gray-200 rounded-xl shadow-sm">
                    <div class="px-6 py-5 border-b border-gray-200">
                        <h2 class="font-semibold text-gray-900">{move || step().title()}</h2>
                        <p class="text-sm text-gray-600">{move || step().description()}</p>
                    </div>
                    <div class="p-6">
                        <Show when=move || step() == WizardStep::BasicInfo>
                            <div class="space-y-6">
                                <DraftInput
                                    wizard=wizard
                                    label="Campaign Title *"
                                    placeholder="Give your campaign a clear, compelling title"
                                    read=|d| d.title.clone()
                                    write=|d, v| d.title = v
                                />
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                    <DraftInput
                                        wizard=wizard
                                        label="Funding Goal (USD) *"
                                        placeholder="50000"
                                        input_type="number"
                                        read=|d| d.goal.clone()
                                        write=|d, v| d.goal = v
                                    />
                                    <DraftInput
                                        wizard=wizard
                                        label="Duration (days) *"
                                        placeholder="30"
                                        input_type="number"
                                        read=|d| d.duration.clone()
                                        write=|d, v| d.duration = v
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">
                                        "Category *"
                                    </label>
                                    <select
                                        prop:value=move || wizard.with(|w| w.draft.category.clone())
                                        on:change=move |ev| {
                                            wizard
                                                .update(|w| w.draft.category = event_target_value(&ev))
                                        }
                                        class="w-full px-4 py-2.5 rounded-lg bg-white border border-gray-300 text-gray-900
                                               focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                    >
                                        <option value="">"Select a category"</option>
                                        {CAMPAIGN_CATEGORIES
                                            .iter()
                                            .map(|&c| view! { <option value=c>{c}</option> })
                                            .collect_view()}
                                    </select>
                                </div>
                                <DraftInput
                                    wizard=wizard
                                    label="Location"
                                    placeholder="City, Country"
                                    read=|d| d.location.clone()
                                    write=|d, v| d.location = v
                                />
                            </div>
                        </Show>

                        <Show when=move || step() == WizardStep::StoryMedia>
                            <div class="space-y-6">
                                <DraftTextArea
                                    wizard=wizard
                                    label="Short Description *"
                                    placeholder="A one-paragraph summary shown in campaign listings"
                                    rows=3
                                    read=|d| d.description.clone()
                                    write=|d, v| d.description = v
                                />
                                <DraftTextArea
                                    wizard=wizard
                                    label="Campaign Story *"
                                    placeholder="Tell donors why this campaign matters and how their money will be used"
                                    rows=8
                                    read=|d| d.story.clone()
                                    write=|d, v| d.story = v
                                />
                                <DraftTextArea
                                    wizard=wizard
                                    label="Beneficiaries"
                                    placeholder="Who will this campaign help?"
                                    rows=3
                                    read=|d| d.beneficiaries.clone()
                                    write=|d, v| d.beneficiaries = v
                                />
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">
                                        "Tags"
                                    </label>
                                    <div class="flex gap-2">
                                        <input
                                            type="text"
                                            placeholder="Add a tag"
                                            prop:value=move || tag_input.get()
                                            on:input=move |ev| set_tag_input.set(event_target_value(&ev))
                                            class="flex-1 px-4 py-2.5 rounded-lg bg-white border border-gray-300
                                                   focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                        />
                                        <button
                                            type="button"
                                            on:click=add_tag
                                            class="bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700"
                                        >
                                            "+ Add"
                                        </button>
                                    </div>
                                    <div class="flex flex-wrap gap-2 mt-3">
                                        <For
                                            each=move || wizard.with(|w| w.draft.tags.clone())
                                            key=|tag| tag.clone()
                                            children=move |tag: String| {
                                                let remove = tag.clone();
                                                view! {
                                                    <span class="inline-flex items-center gap-1 bg-indigo-50 text-indigo-700 text-sm px-3 py-1 rounded-full">
                                                        {tag}
                                                        <button
                                                            type="button"
                                                            on:click=move |_| {
                                                                wizard.update(|w| w.remove_tag(&remove))
                                                            }
                                                            class="text-indigo-400 hover:text-indigo-700"
                                                        >
                                                            "×"
                                                        </button>
                                                    </span>
                                                }
                                            }
                                        />
                                    </div>
                                </div>
                                <div class="border-2 border-dashed border-gray-300 rounded-xl p-8 text-center text-gray-500">
                                    <p class="text-3xl mb-2">"📷"</p>
                                    <p class="text-sm">"Image upload coming soon"</p>
                                </div>
                            </div>
                        </Show>

                        <Show when=move || step() == WizardStep::Planning>
                            <div class="space-y-6">
                                <DraftTextArea
                                    wizard=wizard
                                    label="Timeline *"
                                    placeholder="Key milestones and when you expect to reach them"
                                    rows=4
                                    read=|d| d.timeline.clone()
                                    write=|d, v| d.timeline = v
                                />
                                <DraftTextArea
                                    wizard=wizard
                                    label="Budget Breakdown *"
                                    placeholder="How the funds will be allocated"
                                    rows=4
                                    read=|d| d.budget.clone()
                                    write=|d, v| d.budget = v
                                />
                                <DraftTextArea
                                    wizard=wizard
                                    label="Risks & Challenges"
                                    placeholder="What could delay or complicate the campaign?"
                                    rows=3
                                    read=|d| d.risks.clone()
                                    write=|d, v| d.risks = v
                                />
                            </div>
                        </Show>

                        <Show when=move || step() == WizardStep::Review>
                            {move || {
                                let draft = wizard.with(|w| w.draft.clone());
                                let rows: Vec<(&str, String)> = vec![
                                    ("Title", draft.title),
                                    ("Goal", format!("${}", draft.goal)),
                                    ("Duration", format!("{} days", draft.duration)),
                                    ("Category", draft.category),
                                    ("Location", draft.location),
                                    ("Description", draft.description),
                                    ("Timeline", draft.timeline),
                                    ("Budget", draft.budget),
                                ];
                                view! {
                                    <div class="space-y-4">
                                        {rows
                                            .into_iter()
                                            .filter(|(_, value)| !value.is_empty())
                                            .map(|(label, value)| {
                                                view! {
                                                    <div class="flex justify-between gap-6 text-sm">
                                                        <span class="font-medium text-gray-500 shrink-0">
                                                            {label}
                                                        </span>
                                                        <span class="text-gray-900 text-right">{value}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                        <div class="flex flex-wrap gap-2 pt-2">
                                            {draft
                                                .tags
                                                .into_iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="bg-indigo-50 text-indigo-700 text-sm px-3 py-1 rounded-full">
                                                            {tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <p class="text-sm text-gray-500 pt-4 border-t border-gray-200">
                                            "By publishing you agree to the campaign standards in our policies."
                                        </p>
                                    </div>
                                }
                            }}
                        </Show>
                    </div>
                </div>

                // Navigation
                <div class="flex items-center justify-between mt-6">
                    <button
                        type="button"
                        disabled=move || step() == WizardStep::BasicInfo
                        on:click=move |_| wizard.update(|w| w.previous())
                        class="border border-gray-300 text-gray-700 px-6 py-3 rounded-lg hover:bg-gray-50
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        "← Previous"
                    </button>
                    <Show
                        when=move || step() == WizardStep::Review
                        fallback=move || {
                            view! {
                                <button
                                    type="button"
                                    disabled=move || !step_valid()
                                    on:click=move |_| wizard.update(|w| w.next())
                                    class="bg-gradient-to-r from-indigo-600 to-blue-600 text-white font-semibold px-6 py-3 rounded-lg
                                           hover:from-indigo-700 hover:to-blue-700 transition-all
                                           disabled:opacity-50 disabled:cursor-not-allowed"
                                >
                                    "Next →"
                                </button>
                            }
                        }
                    >
                        <button
                            type="button"
                            on:click=on_submit.clone()
                            class="bg-gradient-to-r from-green-600 to-emerald-600 text-white font-semibold px-6 py-3 rounded-lg
                                   hover:from-green-700 hover:to-emerald-700 transition-all"
                        >
                            "✓ Publish Campaign"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
