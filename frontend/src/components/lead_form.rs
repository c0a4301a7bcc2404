use yew::prelude::*;
use yew_hooks::prelude::use_search_param;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::Timeout;
use log::debug;

use crate::config;
use crate::lead::attribution::{Attribution, LandingQuery};
use crate::lead::controller::LeadFormController;
use crate::lead::form::{Consent, Field, LeadForm, SubmitStatus};
use crate::lead::redirect::BrowserRedirect;
use crate::lead::submission::HttpSubmissionService;

pub const FORM_ANCHOR_ID: &str = "agent-registration-form";

type PageController = LeadFormController<HttpSubmissionService, BrowserRedirect>;

#[hook]
pub fn use_landing_query() -> LandingQuery {
    LandingQuery {
        utm_source: use_search_param("utm_source".to_string()),
        utm_medium: use_search_param("utm_medium".to_string()),
        utm_campaign: use_search_param("utm_campaign".to_string()),
        agent: use_search_param("agent".to_string()),
        assigned_user: use_search_param("assigned_user".to_string()),
        form: use_search_param("form".to_string()),
        form_only: use_search_param("form_only".to_string()),
    }
}

pub fn scroll_to_form() {
    if let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_ANCHOR_ID))
    {
        section.scroll_into_view_with_bool(true);
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormViewProps {
    pub attribution: Attribution,
}

#[function_component(LeadFormView)]
pub fn lead_form_view(props: &LeadFormViewProps) -> Html {
    let form = use_state(LeadForm::default);

    let controller = {
        let form_setter = form.setter();
        use_memo(
            move |attribution: &Attribution| -> PageController {
                LeadFormController::new(
                    HttpSubmissionService::from_config(),
                    BrowserRedirect,
                    attribution.clone(),
                )
                .on_change(move |state| form_setter.set(state.clone()))
            },
            props.attribution.clone(),
        )
    };

    // Bring the success banner into view once the lead went through
    {
        let succeeded = *form.status() == SubmitStatus::Success;
        use_effect_with_deps(
            move |succeeded| {
                if *succeeded {
                    Timeout::new(config::SCROLL_DELAY_MS, scroll_to_form).forget();
                }
                || ()
            },
            succeeded,
        );
    }

    let on_input = |field: Field| {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.update_field(field, input.value());
        })
    };

    let on_toggle = |consent: Consent| {
        let controller = controller.clone();
        Callback::from(move |_: Event| controller.toggle_consent(consent))
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                let outcome = controller.submit().await;
                debug!("Submit finished: {:?}", outcome);
            });
        })
    };

    let submitting = form.is_submitting();

    html! {
        <form class="lead-form" onsubmit={on_submit}>
            {
                match form.status() {
                    SubmitStatus::Success => html! {
                        <div class="form-banner success">
                            {"✅ Votre candidature a été envoyée avec succès ! Nous vous contacterons bientôt."}
                        </div>
                    },
                    SubmitStatus::Error(message) => html! {
                        <div class="form-banner error">{format!("❌ {}", message)}</div>
                    },
                    _ => html! {},
                }
            }

            <div class="form-group">
                <label for="full_name">{"Nom complet *"}</label>
                <input
                    type="text"
                    id="full_name"
                    name={Field::FullName.name()}
                    value={form.value(Field::FullName).to_string()}
                    oninput={on_input(Field::FullName)}
                    required={true}
                />
            </div>

            <div class="form-group">
                <label for="email">{"Email *"}</label>
                <input
                    type="email"
                    id="email"
                    name={Field::Email.name()}
                    value={form.value(Field::Email).to_string()}
                    oninput={on_input(Field::Email)}
                    required={true}
                />
            </div>

            <div class="form-group">
                <label for="phone">{"Téléphone *"}</label>
                <input
                    type="tel"
                    id="phone"
                    name={Field::Phone.name()}
                    value={form.value(Field::Phone).to_string()}
                    oninput={on_input(Field::Phone)}
                    required={true}
                />
            </div>

            <div class="consent-box">
                <label class="consent">
                    <input
                        type="checkbox"
                        checked={form.consent(Consent::AcceptContact)}
                        onchange={on_toggle(Consent::AcceptContact)}
                    />
                    <span>{"J'accepte être contacté par Imigo *"}</span>
                </label>
                <label class="consent">
                    <input
                        type="checkbox"
                        checked={form.consent(Consent::WatchedVideo)}
                        onchange={on_toggle(Consent::WatchedVideo)}
                    />
                    <span>{"J'ai bien vu la vidéo *"}</span>
                </label>
            </div>

            <button type="submit" class="submit-button" disabled={submitting}>
                { if submitting { "Envoi en cours..." } else { "Envoyer ma candidature" } }
            </button>
        </form>
    }
}
