//! Transient alerts, stacked in the top corner and dismissed after the
//! configured duration.

use crate::settings;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<String>,
}

impl ToastContext {
    pub fn show_error(&self, message: String) {
        self.add_toast.emit(message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        ToastList { toasts }.into()
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    // Stable across renders, so consumers are not re-rendered on every alert
    let add_toast = {
        let dispatcher = toasts.dispatcher();
        use_callback((), move |message: String, _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            log::debug!("Showing alert {}: {}", id, message);
            dispatcher.dispatch(ToastAction::Add(Toast { id, message }));

            let dispatcher = dispatcher.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            })
            .forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = toasts.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class="alert alert-error shadow-lg">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
