use yew::prelude::*;
use web_sys::MouseEvent;
use log::info;

use crate::components::lead_form::{scroll_to_form, use_landing_query, LeadFormView, FORM_ANCHOR_ID};
use crate::config;
use crate::lead::attribution::Attribution;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Rôle simple", "Recommandation & mise en relation (aucun travail technique)"),
    ("Traçabilité", "Lien personnalisé + suivi clair de vos recommandations"),
    ("Sérieux", "Cabinet basé à Casablanca depuis 7 ans + bureau à Tanger"),
];

const STEPS: [(&str, &str); 3] = [
    ("Vous recommandez", "Vous partagez votre lien personnalisé à vos contacts intéressés."),
    ("Nous prenons le relais", "Imigo contacte la personne, réalise l'évaluation et gère le dossier de A à Z."),
    ("Vous êtes rémunéré", "Commission calculée sur les honoraires Imigo, dès que le client signe et paie sa première tranche."),
];

const YOU_DO: [&str; 3] = [
    "Recommandation / mise en relation",
    "Partage du lien",
    "Suivi simple (optionnel)",
];

const YOU_DONT: [&str; 3] = [
    "Vente / négociation",
    "Conseil juridique",
    "Gestion de dossier / documents",
];

const OFFERS: [(&str, &str); 5] = [
    ("Contrat cadre clair", "Droits & obligations"),
    ("Supports marketing", "Textes, visuels, scripts"),
    ("Lien personnalisé", "Tracking automatique"),
    ("Canal WhatsApp dédié", "Support équipe Imigo"),
    ("Mini-formation", "Formation commerciale"),
];

const FAQ: [(&str, &str); 5] = [
    ("Comment la commission est-elle calculée ?", "Pourcentage sur les honoraires Imigo (HT) uniquement (hors frais officiels)."),
    ("Quand est-elle due ?", "À la signature du contrat + paiement de la première tranche par le client."),
    ("Quand suis-je payé ?", "Consolidation mensuelle + paiement mensuel (ou selon accord)."),
    ("Comment suivez-vous mes recommandations ?", "Chaque ambassadeur reçoit un lien unique (CRM) qui identifie automatiquement l'ambassadeur référent."),
    ("Puis-je communiquer publiquement sur le programme ?", "Oui, et nous fournissons même des supports prêts à publier. Si vous créez votre propre publication, une validation est nécessaire avant utilisation."),
];

const STYLES: &str = r#"
    .ambassador-page {
        font-family: "SF Pro Display", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
        color: #1D2133;
        overflow-x: hidden;
    }
    html { scroll-behavior: smooth; }
    .ambassador-page section { padding: 80px 20px; }
    .ambassador-page .inner { max-width: 1100px; margin: 0 auto; text-align: center; }
    .ambassador-hero { background: linear-gradient(135deg, #1D2133 0%, #2a3050 100%); color: white; }
    .ambassador-hero h1 { font-size: 3rem; margin-bottom: 0.5rem; }
    .ambassador-hero .accent { color: #D43C14; }
    .badge {
        display: inline-block;
        padding: 6px 16px;
        border-radius: 999px;
        background: rgba(212, 60, 20, 0.15);
        color: #ff6b3d;
        font-weight: 600;
        margin-bottom: 24px;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 24px;
        margin: 40px 0;
    }
    .card {
        background: white;
        color: #1D2133;
        border-radius: 16px;
        padding: 28px;
        box-shadow: 0 10px 40px rgba(0,0,0,0.08);
        text-align: left;
    }
    .cta-button {
        background: linear-gradient(135deg, #D43C14 0%, #ff6b3d 100%);
        color: white;
        border: none;
        border-radius: 12px;
        padding: 18px 36px;
        font-size: 1.1rem;
        font-weight: 700;
        cursor: pointer;
        transition: transform 0.2s;
    }
    .cta-button:hover { transform: translateY(-2px); }
    .video-wrapper {
        position: relative;
        padding-top: 56.25%;
        border-radius: 20px;
        overflow: hidden;
        margin-top: 32px;
        box-shadow: 0 20px 60px rgba(0,0,0,0.15);
    }
    .video-wrapper iframe { position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: 0; }
    .step-number {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        background: #D43C14;
        color: white;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        margin-bottom: 16px;
    }
    .role-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; text-align: left; }
    .role-grid .do h3 { color: #10b981; }
    .role-grid .dont h3 { color: #ef4444; }
    .faq-item { text-align: left; border-bottom: 1px solid #e5e7eb; }
    .faq-question {
        width: 100%;
        background: none;
        border: none;
        padding: 20px 0;
        font-size: 1.05rem;
        font-weight: 600;
        display: flex;
        justify-content: space-between;
        cursor: pointer;
        color: #1D2133;
    }
    .faq-answer { display: none; padding-bottom: 20px; color: #4b5563; }
    .faq-item.open .faq-answer { display: block; }
    .form-section { background: #f9fafb; }
    .form-card {
        max-width: 600px;
        margin: 0 auto;
        background: white;
        border-radius: 20px;
        padding: 50px 40px;
        box-shadow: 0 10px 40px rgba(0,0,0,0.1);
        text-align: left;
    }
    .form-only { min-height: 100vh; background: #f9fafb; padding: 60px 20px; }
    .lead-form .form-group { margin-bottom: 20px; }
    .lead-form label { display: block; margin-bottom: 8px; font-weight: 600; }
    .lead-form input[type="text"], .lead-form input[type="email"], .lead-form input[type="tel"] {
        width: 100%;
        padding: 14px 16px;
        border: 2px solid #e5e7eb;
        border-radius: 10px;
        font-size: 16px;
        box-sizing: border-box;
    }
    .consent-box { margin: 30px 0; padding: 20px; background: #f9fafb; border-radius: 12px; border: 2px solid #e5e7eb; }
    .consent-box .consent { display: flex; gap: 12px; align-items: flex-start; cursor: pointer; font-weight: 400; }
    .consent-box .consent + .consent { margin-top: 15px; }
    .consent input { accent-color: #D43C14; width: 20px; height: 20px; }
    .form-banner { padding: 16px; border-radius: 12px; margin-bottom: 24px; font-weight: 600; }
    .form-banner.success { background: #d1fae5; color: #065f46; }
    .form-banner.error { background: #fee2e2; color: #991b1b; }
    .submit-button {
        width: 100%;
        padding: 18px;
        border: none;
        border-radius: 12px;
        background: linear-gradient(135deg, #D43C14 0%, #ff6b3d 100%);
        color: white;
        font-size: 1.1rem;
        font-weight: 700;
        cursor: pointer;
    }
    .submit-button:disabled { opacity: 0.6; cursor: not-allowed; }
    @media (max-width: 768px) {
        .ambassador-hero h1 { font-size: 2rem; }
        .role-grid { grid-template-columns: 1fr; }
        .form-card { padding: 32px 20px; }
    }
"#;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span>{props.question.to_string()}</span>
                <span>{if *is_open { "−" } else { "+" }}</span>
            </button>
            <p class="faq-answer">{props.answer.to_string()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FormCardProps {
    attribution: Attribution,
}

#[function_component(FormCard)]
fn form_card(props: &FormCardProps) -> Html {
    html! {
        <div class="form-card">
            <h2>{"Candidater au programme Ambassadeur"}</h2>
            <LeadFormView attribution={props.attribution.clone()} />
        </div>
    }
}

#[function_component(Ambassador)]
pub fn ambassador() -> Html {
    let query = use_landing_query();
    let attribution = query.attribution();

    if query.form_only() {
        info!("Rendering ambassador form only");
        return html! {
            <div class="ambassador-page form-only">
                <style>{STYLES}</style>
                <FormCard attribution={attribution} />
            </div>
        };
    }

    let to_form = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_form();
    });

    html! {
        <div class="ambassador-page">
            <style>{STYLES}</style>

            <section class="ambassador-hero">
                <div class="inner">
                    <span class="badge">{"Programme Exclusif"}</span>
                    <h1>{"Devenez Ambassadeur"}</h1>
                    <h1 class="accent">{"Imigo Immigration"}</h1>
                    <p class="hero-subtitle">{"Aidez votre réseau à concrétiser un projet Canada"}</p>
                    <p>{"Un programme simple, transparent et professionnel : vous recommandez, nous gérons tout le reste"}</p>
                    <div class="card-grid">
                        { for HIGHLIGHTS.iter().map(|(title, text)| html! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                    <button class="cta-button" onclick={to_form.clone()}>
                        {"▶ Je regarde la vidéo & je candidate"}
                    </button>
                </div>
            </section>

            <section class="video-section">
                <div class="inner">
                    <h2>{"Regardez cette vidéo (2 minutes)"}</h2>
                    <p>{"Le rôle exact de l'Ambassadeur"}</p>
                    <p>{"En moins de 2 minutes, je vous explique : le concept, votre rôle, comment vous êtes rémunéré, et les prochaines étapes."}</p>
                    <div class="video-wrapper">
                        <iframe
                            src={config::AMBASSADOR_VIDEO_URL}
                            title="Imigo Ambassador Program"
                            loading="lazy"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen={true}
                        />
                    </div>
                </div>
            </section>

            <section class="steps-section">
                <div class="inner">
                    <h2>{"Comment ça fonctionne ?"}</h2>
                    <p>{"Très simple"}</p>
                    <div class="card-grid">
                        { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                            <div class="card">
                                <div class="step-number">{(i + 1).to_string()}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                    <button class="cta-button" onclick={to_form.clone()}>
                        {"Je candidate"}
                    </button>
                </div>
            </section>

            <section class="role-section">
                <div class="inner">
                    <h2>{"Votre rôle"}</h2>
                    <div class="role-grid">
                        <div class="card do">
                            <h3>{"✓ Vous faites"}</h3>
                            { for YOU_DO.iter().map(|item| html! { <p>{format!("✓ {}", item)}</p> }) }
                        </div>
                        <div class="card dont">
                            <h3>{"✕ Vous ne faites pas"}</h3>
                            { for YOU_DONT.iter().map(|item| html! { <p>{format!("✕ {}", item)}</p> }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="offers-section">
                <div class="inner">
                    <h2>{"Ce que vous recevez"}</h2>
                    <p>{"En rejoignant le programme"}</p>
                    <div class="card-grid">
                        { for OFFERS.iter().map(|(title, text)| html! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="faq-section">
                <div class="inner">
                    <h2>{"Questions fréquentes"}</h2>
                    { for FAQ.iter().map(|(question, answer)| html! {
                        <FaqItem question={*question} answer={*answer} />
                    }) }
                </div>
            </section>

            <section id={FORM_ANCHOR_ID} class="form-section">
                <div class="inner">
                    <h2>{"Prêt à devenir Ambassadeur ?"}</h2>
                    <p>{"Remplissez le formulaire ci-dessous, notre équipe vous recontacte rapidement."}</p>
                </div>
                <FormCard attribution={attribution} />
            </section>
        </div>
    }
}
