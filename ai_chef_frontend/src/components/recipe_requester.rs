use ai_chef_core::requester::{generate_recipe, RequesterState};
use ai_chef_model::RecipeResult;
use leptos::logging::log;
use leptos::*;

use crate::{Connection, SignalSlot};

#[component]
pub fn RecipeRequester(connection: Connection) -> impl IntoView {
    let state = create_rw_signal(RequesterState::default());

    let generate = move |_| {
        let connection = connection.clone();
        log!("Requesting a recipe");
        spawn_local(async move {
            generate_recipe(&SignalSlot(state), connection.backend()).await;
        });
    };

    let result = result_memo(state);
    let result_view = move || result.get().map(|result| view! { <RecipeCard result /> });

    view! {
        <h1>"AI 요리사"</h1>
        <input
            type = "text"
            placeholder = "요리 이름을 입력하세요"
            prop:value = move || state.with(|s| s.title.clone())
            on:input = move |event| {
                let title = event_target_value(&event);
                state.update(|s| s.title = title);
            }
        />
        <button on:click = generate disabled = move || state.with(RequesterState::loading)>
            {move || state.with(RequesterState::button_label)}
        </button>
        <hr />
        {result_view}
        <Notices state />
    }
}

/// The result on its own, so typing in the title does not rebuild the card.
fn result_memo(state: RwSignal<RequesterState>) -> Memo<Option<RecipeResult>> {
    create_memo(move |_| state.with(|s| s.result().cloned()))
}

#[component]
fn RecipeCard(result: RecipeResult) -> impl IntoView {
    let image = result.image_url().map(|url| {
        view! { <img src = url.to_string() alt = result.title.clone() style = "max-width: 300px" /> }
    });
    view! {
        <div>
            <h2>{result.title.clone()}</h2>
            {image}
            <pre>{result.recipe.clone()}</pre>
        </div>
    }
}

#[component]
fn Notices(state: RwSignal<RequesterState>) -> impl IntoView {
    let notices = move || {
        state.with(|s| {
            s.notices
                .iter()
                .map(|(id, notice)| (*id, notice.to_string()))
                .collect::<Vec<_>>()
        })
    };
    view! {
        <div class = "notices" role = "alert">
            <For
                each = notices
                key = |(id, _)| *id
                children = move |(id, message)| view! {
                    <div class = "notice">
                        <span>{message}</span>
                        <button on:click = move |_| state.update(|s| {
                            s.notices.dismiss(id);
                        })>
                            "닫기"
                        </button>
                    </div>
                }
            />
        </div>
    }
}
