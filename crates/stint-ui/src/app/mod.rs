//! Application shell: page-load wiring and the callbacks that connect the
//! theme manager, dropdown controller, and remote status updater.

use crate::components::applications::ApplicationsTable;
use crate::components::contacts::ContactList;
use crate::components::flash::FlashHost;
use crate::components::shell::PageShell;
use crate::components::stats_cards::StatsCards;
use crate::models::{Flash, FlashKind, demo_applications, demo_contacts, demo_stats};
use crate::services::api::ApiClient;
use crate::state::{ApplicationId, ContactId};
use crate::theme::{THEME_STYLESHEET_ID, stylesheet_href};
use gloo::console;
use gloo::dialogs::alert;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use stint_api_models::{ApplicationStatus, StatsSnapshot};
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

mod preferences;
mod store;

pub(crate) use store::AppStore;

/// Container class that marks a status dropdown; clicks inside it are never
/// treated as "outside" by the global dismiss.
const DROPDOWN_CONTAINER_SELECTOR: &str = ".status-dropdown";

#[function_component(StintApp)]
pub(crate) fn stint_app() -> Html {
    let theme = use_state(preferences::load_theme);
    let flashes = use_state(Vec::<Flash>::new);
    let flash_id = use_state(|| 0u64);
    let stats = use_state(|| None::<StatsSnapshot>);
    let applications = use_state(demo_applications);
    let contacts = use_state(demo_contacts);
    let dispatch = Dispatch::<AppStore>::new();
    let api = ApiClient::default();

    // Stylesheet swap. The initial run is the restore path: the state was
    // seeded from storage and must not be written back.
    {
        let theme_value = (*theme).clone();
        use_effect_with_deps(
            move |_| {
                apply_stylesheet(&theme_value);
                || ()
            },
            (*theme).clone(),
        );
    }

    // Clicks outside every dropdown container close whatever menu is open.
    // Containment is checked on the event target, so the trigger's own click
    // (inside the container) never re-closes the menu it just opened.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&document(), "click", move |event| {
                    if !within_dropdown(event) {
                        dispatch.reduce_mut(|store| store.menus.dismiss());
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Dashboard statistics, with demo fallback when the backend is away.
    {
        let stats = stats.clone();
        let flashes = flashes.clone();
        let flash_id = flash_id.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    match api.fetch_stats().await {
                        Ok(snapshot) => stats.set(Some(snapshot)),
                        Err(err) => {
                            console::warn!("stats fetch failed", err.to_string());
                            stats.set(Some(demo_stats()));
                            push_flash(
                                &flashes,
                                &flash_id,
                                FlashKind::Info,
                                "Showing sample data; the tracker API is unreachable.".to_string(),
                            );
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let select_theme = {
        let theme = theme.clone();
        Callback::from(move |next: String| {
            preferences::persist_theme(&next);
            theme.set(next);
        })
    };

    let dismiss_flash = {
        let flashes = flashes.clone();
        Callback::from(move |id: u64| {
            flashes.set(
                (*flashes)
                    .iter()
                    .cloned()
                    .filter(|flash| flash.id != id)
                    .collect(),
            );
        })
    };

    // No optimistic mutation happens here: the open menu stays as it is and
    // the reload (or the alert) is the only observable outcome.
    let select_status = Callback::from(move |(id, status): (ApplicationId, ApplicationStatus)| {
        yew::platform::spawn_local(async move {
            match api.update_application_status(id, status.as_str()).await {
                Ok(ack) if ack.success => reload_page(),
                Ok(ack) => {
                    if let Some(detail) = ack.error {
                        console::error!("status update rejected", detail);
                    }
                    alert("Failed to update status");
                }
                Err(err) => {
                    console::error!("status update failed", err.to_string());
                    alert("Failed to update status");
                }
            }
        });
    });

    // Contact toggles stay silent on failure; only the console hears about
    // it. Matches the shipped tracker behavior.
    let toggle_contact = Callback::from(move |id: ContactId| {
        yew::platform::spawn_local(async move {
            match api.toggle_contact(id).await {
                Ok(ack) if ack.success => reload_page(),
                Ok(_) => console::error!("contact toggle rejected", id),
                Err(err) => console::error!("contact toggle failed", err.to_string()),
            }
        });
    });

    html! {
        <>
            <PageShell theme={(*theme).clone()} on_select_theme={select_theme}>
                <StatsCards stats={(*stats).clone()} />
                <ApplicationsTable
                    rows={(*applications).clone()}
                    on_select_status={select_status}
                />
                <ContactList rows={(*contacts).clone()} on_toggle={toggle_contact} />
            </PageShell>
            <FlashHost flashes={(*flashes).clone()} on_dismiss={dismiss_flash} />
        </>
    }
}

fn within_dropdown(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(DROPDOWN_CONTAINER_SELECTOR).ok().flatten())
        .is_some()
}

fn apply_stylesheet(theme: &str) {
    if let Some(link) = document().get_element_by_id(THEME_STYLESHEET_ID) {
        let _ = link.set_attribute("href", &stylesheet_href(theme));
    }
}

fn reload_page() {
    let _ = window().location().reload();
}

fn push_flash(
    flashes: &UseStateHandle<Vec<Flash>>,
    next_id: &UseStateHandle<u64>,
    kind: FlashKind,
    message: String,
) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**flashes).clone();
    list.push(Flash { id, kind, message });
    flashes.set(list);
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<StintApp>::with_root(root).render();
    } else {
        yew::Renderer::<StintApp>::new().render();
    }
}
