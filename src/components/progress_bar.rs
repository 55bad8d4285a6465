//! Progress Bar Component

use leptos::prelude::*;

use crate::format::progress_class;

/// Horizontal completion bar. `value` is a percentage, clamped to
/// 0..=100 before display. `size` is one of "sm", "md", "lg".
#[component]
pub fn ProgressBar(
    value: f64,
    #[prop(default = "md")] size: &'static str,
    #[prop(default = true)] show_label: bool,
) -> impl IntoView {
    let clamped = value.clamp(0.0, 100.0);
    let percent = clamped.round() as u8;

    view! {
        <div class=format!("progress progress-{}", size)>
            {show_label.then(|| view! {
                <div class="progress-labels">
                    <span>"Progress"</span>
                    <span class="progress-value">{format!("{}%", percent)}</span>
                </div>
            })}
            <div class="progress-track">
                <div
                    class=format!("progress-fill {}", progress_class(clamped))
                    style=format!("width: {}%", clamped)
                ></div>
            </div>
        </div>
    }
}
