//! Story generation page (premium members only)

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::dto::story::GenerateStoryRequest;

use crate::services::http::ApiError;
use crate::services::stories::StoriesApi;
use crate::state::session::{expire_session, use_session_context};
use crate::state::toast::use_toast_context;
use crate::utils::constants::{
    AGE_GROUPS, DEFAULT_PAGE_COUNT, MAX_PAGE_COUNT, MIN_PAGE_COUNT, THEMES,
};
use crate::utils::validation::validate_generation;

/// Where an arriving visitor belongs, given their session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationGate {
    Allow,
    RequireLogin,
    RequireUpgrade,
}

/// Anonymous visitors go to login; signed-in free users go to pricing.
pub fn generation_gate(authenticated: bool, subscribed: bool) -> GenerationGate {
    if !authenticated {
        GenerationGate::RequireLogin
    } else if !subscribed {
        GenerationGate::RequireUpgrade
    } else {
        GenerationGate::Allow
    }
}

#[component]
pub fn GeneratePage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            match generation_gate(session.is_authenticated(), session.is_subscribed()) {
                GenerationGate::Allow => {}
                GenerationGate::RequireLogin => navigate("/login", Default::default()),
                GenerationGate::RequireUpgrade => {
                    toasts.error("Story generation is a premium feature");
                    navigate("/pricing", Default::default());
                }
            }
        });
    }

    let (title, set_title) = signal(String::new());
    let (theme, set_theme) = signal(String::new());
    let (age_group, set_age_group) = signal(String::new());
    let (page_count, set_page_count) = signal(DEFAULT_PAGE_COUNT);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked();
        let theme = theme.get_untracked();
        let age_group = age_group.get_untracked();

        let result = validate_generation(&title, &theme, &age_group);
        if !result.is_valid {
            if let Some(message) = result.error {
                toasts.error(message);
            }
            return;
        }

        let request = GenerateStoryRequest {
            title: title.trim().to_string(),
            age_group,
            theme,
            page_count: page_count.get_untracked(),
        };

        set_busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // One blocking call; the server may take up to a minute
            match StoriesApi::new().generate(&request).await {
                Ok(story) => {
                    toasts.success("Your story is ready! 🎉");
                    navigate(&format!("/stories/{}", story.id), Default::default());
                }
                Err(ApiError::AuthExpired) => expire_session(&session),
                Err(err) => toasts.error(err.to_string()),
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <div class="page generate-page">
            <div class="generate-card card">
                <h1 class="page-title">"✨ Create Your Own Story"</h1>
                <p class="page-subtitle">
                    "Tell us what the story is about and our storyteller will write \
                     and illustrate it just for you."
                </p>

                <form class="generate-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Story title"</span>
                        <input
                            type="text"
                            placeholder="e.g. The Turtle Who Learned to Fly"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        <span>"Theme"</span>
                        <select on:change=move |ev| set_theme.set(event_target_value(&ev))>
                            <option value="">"Choose a theme..."</option>
                            {THEMES.iter().map(|(id, name, emoji)| view! {
                                <option value=*id>{format!("{emoji} {name}")}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="form-field">
                        <span>"Age group"</span>
                        <select on:change=move |ev| set_age_group.set(event_target_value(&ev))>
                            <option value="">"Choose an age group..."</option>
                            {AGE_GROUPS.iter().map(|(id, label, hint)| view! {
                                <option value=*id>{format!("{label} ({hint})")}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="form-field">
                        <span>{move || format!("Length: {} pages", page_count.get())}</span>
                        <input
                            type="range"
                            min=MIN_PAGE_COUNT
                            max=MAX_PAGE_COUNT
                            prop:value=move || page_count.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    set_page_count.set(value.clamp(MIN_PAGE_COUNT, MAX_PAGE_COUNT));
                                }
                            }
                        />
                    </label>

                    <button type="submit" class="btn btn-primary btn-lg" disabled=move || busy.get()>
                        {move || if busy.get() { "Writing your story..." } else { "Create My Story ✨" }}
                    </button>
                    {move || busy.get().then(|| view! {
                        <p class="busy-hint">
                            "Our storyteller is hard at work. This may take up to a minute!"
                        </p>
                    })}
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_gate() {
        // Anonymous visitors are sent to login before pricing is considered
        assert_eq!(generation_gate(false, false), GenerationGate::RequireLogin);
        assert_eq!(generation_gate(false, true), GenerationGate::RequireLogin);
        assert_eq!(generation_gate(true, false), GenerationGate::RequireUpgrade);
        assert_eq!(generation_gate(true, true), GenerationGate::Allow);
    }
}
