use crate::layout::global_context::use_rental;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::{min_end_date, today_iso};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::money::format_daily_price;
use contracts::domain::r001_vehicle::aggregate::Vehicle;
use contracts::domain::r002_booking::aggregate::DraftField;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// One labelled input of the booking form.
///
/// Date inputs get a `min`: today for the start date, the start date (or today) for the end date.
#[component]
fn DraftInput(field: DraftField, today: String) -> impl IntoView {
    let ctx = use_rental();

    let min = move || match field {
        DraftField::StartDate => Some(today.clone()),
        DraftField::EndDate => {
            Some(ctx.state.with(|s| min_end_date(&s.draft.start_date, &today)))
        }
        _ => None,
    };

    let on_input = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        ctx.update_draft_from_input(&input.name(), input.value());
    };

    view! {
        <div class="form-group">
            <label>{field.label()}</label>
            <input
                type=field.input_type()
                name=field.name()
                prop:value=move || ctx.state.with(|s| s.draft.get(field).to_string())
                min=min
                on:input=on_input
                required=true
            />
        </div>
    }
}

#[component]
fn BookingDialog(vehicle: Vehicle) -> impl IntoView {
    let ctx = use_rental();
    let today = today_iso();
    let price = format_daily_price(vehicle.daily_price, &ctx.currency());
    let can_submit = move || ctx.state.with(|s| s.draft.is_complete());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit_booking();
    };

    view! {
        <ModalFrame>
            <div class="modal-header">
                <h2>{format!("Book {}", vehicle.name)}</h2>
                <button
                    class="close-btn"
                    aria-label="Close"
                    on:click=move |_| ctx.close_booking_modal()
                >
                    {icon("x")}
                </button>
            </div>
            <div class="modal-body">
                <div class="modal-vehicle-info">
                    <img src=vehicle.image_url.clone() alt=vehicle.name.clone() />
                    <div>
                        <p>{format!("Price: {}", price)}</p>
                        <p>{format!("Type: {}", vehicle.category.display_name())}</p>
                    </div>
                </div>
                <form on:submit=on_submit>
                    {DraftField::all()
                        .into_iter()
                        .map(|field| view! { <DraftInput field=field today=today.clone() /> })
                        .collect_view()}
                    <Button button_type="submit" disabled=move || !can_submit()>
                        "Complete Booking"
                    </Button>
                </form>
            </div>
        </ModalFrame>
    }
}

/// Booking form for the selected vehicle; renders nothing while the modal is closed
#[component]
pub fn BookingModal() -> impl IntoView {
    let ctx = use_rental();
    // keyed on the vehicle only, so typing in the form does not rebuild it
    let vehicle = Memo::new(move |_| ctx.state.with(|s| s.modal_vehicle().cloned()));

    view! {
        {move || {
            vehicle
                .get()
                .map(|vehicle| view! { <BookingDialog vehicle=vehicle /> })
        }}
    }
}
