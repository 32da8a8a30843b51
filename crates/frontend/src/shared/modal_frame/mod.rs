use leptos::ev;
use leptos::prelude::*;

/// Modal frame container (overlay + positioned surface).
///
/// Renders no header and has no close path of its own: clicks on the overlay
/// are ignored, the hosted form closes itself through its close button or submit.
#[component]
pub fn ModalFrame(children: Children) -> impl IntoView {
    view! {
        <div class="modal-overlay" style="z-index: 1000;">
            <div
                class="modal"
                style="position: relative;"
                on:click=|e: ev::MouseEvent| e.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
