//! チェックリスト表示コンポーネント
//!
//! 探索対象アイテムの一覧。検出済みのアイテムは取り消し線で示す。
//! テキスト入力からの手動追加にも対応する。

use leptos::prelude::*;

use checkcam_common::{ChecklistStore, DetectionSession};

#[component]
pub fn ChecklistPanel<F>(
    checklist: RwSignal<ChecklistStore>,
    session: RwSignal<DetectionSession>,
    on_add_item: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let (new_item, set_new_item) = signal(String::new());

    let add = {
        let on_add_item = on_add_item.clone();
        move || {
            let item = new_item.get_untracked().trim().to_string();
            if !item.is_empty() {
                on_add_item(item);
                set_new_item.set(String::new());
            }
        }
    };

    view! {
        <div class="checklist-panel">
            <h2>{move || format!("チェックリスト ({}件)", checklist.with(|c| c.len()))}</h2>
            <ul class="checklist-items">
                <For
                    each=move || checklist.with(|c| c.items().to_vec())
                    key=|item| item.clone()
                    children=move |item| {
                        let label = item.clone();
                        view! {
                            <li class:found=move || session.with(|s| s.is_detected(&label))>
                                {item}
                            </li>
                        }
                    }
                />
            </ul>
            <div class="checklist-entry">
                <input
                    type="text"
                    placeholder="アイテムを追加..."
                    prop:value=move || new_item.get()
                    on:input=move |ev| {
                        set_new_item.set(event_target_value(&ev));
                    }
                />
                <button
                    class="btn btn-primary"
                    on:click={
                        let add = add.clone();
                        move |_| add()
                    }
                >
                    "追加"
                </button>
            </div>
        </div>
    }
}
