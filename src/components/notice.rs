//! Notice Strip
//!
//! Shows the current notice from context as a banner across the top.

use leptos::prelude::*;

use crate::context::{AppContext, NoticeKind};

#[component]
pub fn NoticeStrip() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            view! {
                <div class=class>
                    <span class="notice-text">{notice.text}</span>
                    <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
