//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"チェックリストカメラ"</h1>
            <p class="text-muted">"カメラに映したアイテムを自動でチェックします"</p>
        </header>
    }
}
