use bookstall_core::NotificationSlot;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct NotificationModalProps {
    pub slot: NotificationSlot,
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
}

/// Transient outcome modal over the single notification slot. An empty
/// slot renders nothing; the close control and the backdrop both dismiss.
#[function_component(NotificationModal)]
pub fn notification_modal(props: &NotificationModalProps) -> Html {
    let Some(notice) = props.slot.current() else {
        return Html::default();
    };
    let close = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let tone = if notice.success {
        "alert-success"
    } else {
        "alert-error"
    };
    html! {
        <div
            class="modal modal-open"
            role="alertdialog"
            aria-modal="true"
            data-testid="notification-modal"
        >
            <div class="modal-box">
                <div class={classes!("alert", tone)} role="status">
                    <span>{ notice.message.clone() }</span>
                </div>
                <div class="modal-action">
                    <button class="btn btn-sm" aria-label="Close" onclick={close.clone()}>{ "\u{2715}" }</button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
