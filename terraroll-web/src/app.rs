use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use terraroll_core::{Category, panels};
use yew::prelude::*;

use crate::components::category_toggles::CategoryToggles;
use crate::components::result_card::ResultCard;
use crate::components::toast::{Toast, ToastAction, ToastItem, ToastList};
use crate::state::Session;

type SessionHandle = Rc<RefCell<Session>>;

/// Report a failure as a toast and on the console, then schedule the toast's dismissal.
fn push_error(toasts: &UseReducerHandle<ToastList>, message: &str) {
    log::error!("{message}");
    #[cfg(target_arch = "wasm32")]
    crate::dom::console_error(message);
    let item = ToastItem::new(message.to_string());
    schedule_dismiss(toasts.clone(), item.id);
    toasts.dispatch(ToastAction::Push(item));
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(toasts: UseReducerHandle<ToastList>, id: u32) {
    use crate::components::toast::TOAST_TIMEOUT_MS;

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = crate::dom::sleep_ms(TOAST_TIMEOUT_MS).await {
            log::warn!(
                "toast timer failed: {}",
                crate::dom::js_error_message(&err)
            );
        }
        toasts.dispatch(ToastAction::Dismiss(id));
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_toasts: UseReducerHandle<ToastList>, _id: u32) {}

#[cfg(target_arch = "wasm32")]
fn spawn_config_load(
    session: SessionHandle,
    redraw: UseForceUpdateHandle,
    toasts: UseReducerHandle<ToastList>,
) {
    use crate::loader::{CONFIG_FETCH_TIMEOUT_MS, CONFIG_URL, load_config};
    use crate::state::{LOAD_FAILED_MESSAGE, load_failure_detail};
    use terraroll_core::SelectionEngine;

    wasm_bindgen_futures::spawn_local(async move {
        match load_config(CONFIG_URL, CONFIG_FETCH_TIMEOUT_MS).await {
            Ok(store) => {
                log::info!(
                    "configuration ready: {:?}",
                    store.recognized_categories()
                );
                session.borrow_mut().install(SelectionEngine::new(store));
            }
            Err(err) => {
                let detail = load_failure_detail(&err);
                log::error!("{detail}");
                crate::dom::console_error(&detail);
                session.borrow_mut().mark_load_failed();
                push_error(&toasts, LOAD_FAILED_MESSAGE);
            }
        }
        redraw.force_update();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_config_load(
    _session: SessionHandle,
    _redraw: UseForceUpdateHandle,
    _toasts: UseReducerHandle<ToastList>,
) {
}

#[hook]
fn use_config_loader(
    session: &SessionHandle,
    redraw: &UseForceUpdateHandle,
    toasts: &UseReducerHandle<ToastList>,
) {
    let handles = (session.clone(), redraw.clone(), toasts.clone());
    use_effect_with((), move |()| {
        let (session, redraw, toasts) = handles;
        spawn_config_load(session, redraw, toasts);
        || {}
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_mut_ref(Session::default);
    let redraw = use_force_update();
    let toasts = use_reducer(ToastList::default);

    use_config_loader(&session, &redraw, &toasts);

    let on_toggle = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |(category, active): (Category, bool)| {
            session.borrow_mut().toggle(category, active);
            redraw.force_update();
        })
    };

    let on_randomize = {
        let session = session.clone();
        let redraw = redraw.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            let mut rng = SmallRng::from_entropy();
            let outcome = session.borrow_mut().randomize(&mut rng).map(|_| ());
            match outcome {
                Ok(()) => redraw.force_update(),
                Err(message) => push_error(&toasts, &message),
            }
        })
    };

    let on_retry = {
        let session = session.clone();
        let redraw = redraw.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            if session.borrow_mut().begin_reload() {
                log::info!("retrying configuration load");
                redraw.force_update();
                spawn_config_load(session.clone(), redraw.clone(), toasts.clone());
            }
        })
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let current = session.borrow();
    let generation = current.generation();
    let results = current.bundle().map_or_else(
        || html! { <p class="results-hint">{ "Нажмите кнопку, чтобы получить случайный набор" }</p> },
        |bundle| {
            panels(bundle)
                .into_iter()
                .zip(0_u32..)
                .map(|(panel, index)| {
                    let key = format!("{}-{generation}", panel.id);
                    html! {
                        <ResultCard {key} {index} {panel} />
                    }
                })
                .collect::<Html>()
        },
    );

    html! {
        <main class="container">
            <h1>{ "Рандомизатор Terraria" }</h1>
            <CategoryToggles
                flags={current.flags()}
                disabled={!current.is_loaded()}
                on_toggle={on_toggle}
            />
            <button
                id="randomizeBtn"
                class="btn btn-primary"
                disabled={!current.is_loaded()}
                onclick={on_randomize}
            >
                { "🎲 Рандомизировать" }
            </button>
            if current.can_retry_load() {
                <button id="retryLoadBtn" class="btn btn-secondary" onclick={on_retry}>
                    { "🔄 Повторить загрузку" }
                </button>
            }
            <div class="results">{ results }</div>
            <Toast toasts={toasts.items.clone()} on_dismiss={Some(on_dismiss)} />
        </main>
    }
}
