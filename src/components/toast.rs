use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_MS: u32 = 2_500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification. The id tells consecutive toasts apart even
/// when kind and text are identical, so the dismiss timer restarts.
#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toast: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

/// Renders at most one toast and dismisses it after a fixed delay.
/// Replacing the toast drops the old timeout and arms a fresh one.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<ToastMessage>| {
                let timeout = toast
                    .as_ref()
                    .map(|_| Timeout::new(DISMISS_MS, move || on_dismiss.emit(())));
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    match &props.toast {
        Some(toast) => {
            let kind_class = match toast.kind {
                ToastKind::Success => "toast-success",
                ToastKind::Error => "toast-error",
            };
            html! {
                <div class={classes!("toast", kind_class)}>
                    { &toast.text }
                </div>
            }
        }
        None => html! {},
    }
}
