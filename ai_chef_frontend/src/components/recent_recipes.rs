use ai_chef_core::recent::{load_recent, RecentState, RecentView};
use ai_chef_model::RecentRecipeRecord;
use leptos::*;
use wasm_bindgen::JsValue;

use crate::{Connection, SignalSlot};

/// Formats a backend timestamp with the browser's locale, falling back to the raw text.
fn local_time(created_at: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(created_at));
    if date.get_time().is_nan() {
        return created_at.to_string();
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[component]
pub fn RecentRecipesList(connection: Connection) -> impl IntoView {
    let state = create_rw_signal(RecentState::default());

    // once, on mount
    spawn_local(async move {
        load_recent(&SignalSlot(state), connection.backend()).await;
    });

    move || {
        state.with(|s| match s.view() {
            RecentView::Loading => view! { <div>"로딩중..."</div> }.into_view(),
            RecentView::Failed(message) => view! { <div>{message.to_string()}</div> }.into_view(),
            RecentView::Empty => view! {
                <div>
                    <h2>"최근 생성된 레시피"</h2>
                    <p>"생성된 레시피가 없습니다."</p>
                </div>
            }
            .into_view(),
            RecentView::Records(records) => {
                let items = records
                    .iter()
                    .map(|record| view! { <RecentRecipeItem record = record.clone() /> })
                    .collect_view();
                view! {
                    <div>
                        <h2>"최근 생성된 레시피"</h2>
                        <ul>{items}</ul>
                    </div>
                }
                .into_view()
            }
        })
    }
}

#[component]
fn RecentRecipeItem(record: RecentRecipeRecord) -> impl IntoView {
    let image = record.image_url().map(|url| {
        view! { <img src = url.to_string() alt = record.title.clone() style = "max-width: 200px" /> }
    });
    view! {
        <li style = "margin-bottom: 20px">
            <h3>{record.title.clone()}</h3>
            {image}
            <p>"생성일: " {local_time(&record.created_at)}</p>
        </li>
    }
}
