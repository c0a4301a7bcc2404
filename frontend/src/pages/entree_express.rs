use yew::prelude::*;
use web_sys::MouseEvent;
use log::info;

use crate::components::lead_form::use_landing_query;
use crate::config;
use crate::lead::attribution::Attribution;

/// Address of the hosted evaluation form, carrying the visitor's campaign parameters along.
pub fn build_form_url(form_id: &str, attribution: &Attribution) -> String {
    let base = format!("{}/{}", config::EVALUATION_FORM_BASE_URL, urlencoding::encode(form_id));
    let query = attribution
        .campaign_params()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        base
    } else {
        format!("{}?{}", base, query)
    }
}

const BENEFITS: [(&str, &str, &str); 6] = [
    ("🏥", "Système de santé universel", "Accès gratuit aux soins de santé pour tous les résidents permanents et citoyens"),
    ("💰", "Économie stable et prospère", "Marché du travail dynamique avec des salaires compétitifs et de nombreuses opportunités"),
    ("🎓", "Éducation de qualité", "Système éducatif reconnu mondialement, études gratuites pour les enfants"),
    ("🌍", "Multiculturalisme", "Société inclusive qui célèbre la diversité culturelle et religieuse"),
    ("🛡️", "Sécurité et qualité de vie", "Classé parmi les pays les plus sûrs au monde avec un environnement paisible"),
    ("🏔️", "Nature spectaculaire", "Paysages à couper le souffle, parcs nationaux et espaces verts infinis"),
];

const PROCESS: [(&str, &str, &str); 6] = [
    ("01", "Évaluation initiale", "Analyse complète de votre profil et calcul de votre score CRS"),
    ("02", "Préparation des documents", "Constitution et vérification de votre dossier complet"),
    ("03", "Tests linguistiques", "Accompagnement pour les examens TEF/IELTS selon vos besoins"),
    ("04", "Équivalence des diplômes", "Obtention de l'ECA pour vos qualifications académiques"),
    ("05", "Soumission du profil", "Création et dépôt de votre profil Entrée Express"),
    ("06", "Demande de résidence", "Finalisation après réception de l'invitation à présenter une demande"),
];

const SERVICES: [&str; 6] = [
    "Évaluation détaillée de votre éligibilité",
    "Conseil personnalisé sur votre stratégie",
    "Préparation complète des documents",
    "Révision et optimisation de votre profil",
    "Soumission et suivi de votre dossier",
    "Support jusqu'à l'obtention de la résidence permanente",
];

const GUARANTEES: [&str; 6] = [
    "Cabinet agréé et régulé au Maroc",
    "15 ans d'expérience en immigration",
    "Taux de réussite de 95 %",
    "Transparence totale des frais",
    "Confidentialité absolue garantie",
    "Disponibilité et réactivité assurées",
];

const STYLES: &str = r#"
    .entree-page {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
        background: #ffffff;
        overflow-x: hidden;
    }
    html { scroll-behavior: smooth; }
    .entree-nav {
        position: sticky;
        top: 0;
        z-index: 100;
        background: rgba(255,255,255,0.95);
        backdrop-filter: blur(10px);
        border-bottom: 1px solid #f3f4f6;
    }
    .entree-nav .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 16px 40px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .entree-nav .logo { font-weight: 800; font-size: 1.4rem; color: #E84E2B; }
    .entree-nav .nav-links { display: flex; gap: 32px; align-items: center; }
    .entree-nav .nav-links a { font-size: 15px; font-weight: 600; color: #6b7280; text-decoration: none; }
    .entree-nav .nav-links a.nav-cta {
        background: #E84E2B;
        color: white;
        padding: 10px 20px;
        border-radius: 8px;
    }
    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
    .burger-menu span { display: block; width: 24px; height: 2px; background: #1a1a1a; margin: 5px 0; }
    .entree-page section { padding: 100px 40px; }
    .entree-page .inner { max-width: 1200px; margin: 0 auto; }
    .entree-hero { background: linear-gradient(135deg, #fff5f2 0%, #ffffff 100%); }
    .entree-hero h1 { font-size: 56px; line-height: 1.1; color: #1a1a1a; }
    .badge {
        display: inline-block;
        padding: 8px 16px;
        border-radius: 999px;
        background: #fff0eb;
        color: #E84E2B;
        font-weight: 600;
        margin-bottom: 24px;
    }
    .gradient-text {
        background: linear-gradient(135deg, #E84E2B 0%, #ff7b54 100%);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-actions { display: flex; gap: 16px; margin: 32px 0; flex-wrap: wrap; }
    .btn-primary, .btn-secondary {
        padding: 16px 32px;
        border-radius: 10px;
        font-weight: 700;
        text-decoration: none;
    }
    .btn-primary { background: #E84E2B; color: white; }
    .btn-secondary { border: 2px solid #E84E2B; color: #E84E2B; }
    .trust { display: flex; gap: 32px; flex-wrap: wrap; }
    .trust strong { display: block; font-size: 28px; color: #E84E2B; }
    .form-band { background: linear-gradient(135deg, #E84E2B 0%, #c93a1a 100%); color: white; text-align: center; }
    .form-frame {
        max-width: 800px;
        margin: 40px auto 0;
        background: white;
        border-radius: 20px;
        overflow: hidden;
        box-shadow: 0 20px 60px rgba(0,0,0,0.2);
    }
    .form-frame iframe { width: 100%; height: 900px; border: none; display: block; }
    .section-title { text-align: center; font-size: 42px; color: #1a1a1a; margin-bottom: 16px; }
    .section-subtitle { text-align: center; color: #6b7280; max-width: 700px; margin: 0 auto 48px; }
    .grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; }
    .grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; }
    .tile { background: #f9fafb; border-radius: 16px; padding: 32px; }
    .tile .icon { font-size: 40px; margin-bottom: 16px; }
    .tile .step { font-size: 24px; font-weight: 800; color: #E84E2B; margin-bottom: 12px; }
    .tile h3 { margin-bottom: 12px; color: #1a1a1a; }
    .tile p, .tile li { color: #6b7280; line-height: 1.6; }
    .entree-footer { background: #1a1a1a; color: #9ca3af; padding: 60px 40px 30px; }
    .entree-footer h4 { color: white; margin-bottom: 12px; }
    .entree-footer .legal { text-align: center; border-top: 1px solid #374151; margin-top: 40px; padding-top: 24px; font-size: 14px; }
    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .entree-nav .nav-content { padding: 16px 20px; }
        .entree-nav .nav-links { display: none; }
        .entree-nav .nav-links.open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            background: white;
            padding: 20px;
            gap: 16px;
        }
        .entree-page section { padding: 60px 20px; }
        .entree-hero h1 { font-size: 40px; }
        .section-title { font-size: 32px; }
        .grid-3, .grid-2 { grid-template-columns: 1fr; }
    }
    @media (max-width: 480px) {
        .entree-page section { padding: 40px 16px; }
        .entree-hero h1 { font-size: 32px; }
        .hero-actions a { width: 100%; text-align: center; }
    }
"#;

#[function_component(EntreeNav)]
fn entree_nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class="entree-nav">
            <div class="nav-content">
                <span class="logo">{"IMIGO"}</span>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", (*menu_open).then(|| "open"))}>
                    <a href="#avantages" onclick={close_menu.clone()}>{"Avantages"}</a>
                    <a href="#processus" onclick={close_menu.clone()}>{"Processus"}</a>
                    <a href="#services" onclick={close_menu.clone()}>{"Services"}</a>
                    <a href="#formulaire" class="nav-cta" onclick={close_menu}>{"Évaluation gratuite"}</a>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct EntreeExpressProps {
    #[prop_or_default]
    pub form_id: Option<String>,
}

#[function_component(EntreeExpress)]
pub fn entree_express(props: &EntreeExpressProps) -> Html {
    let query = use_landing_query();
    let form_id = props.form_id.clone().unwrap_or_else(|| query.form_id());
    let form_url = build_form_url(&form_id, &query.attribution());
    info!("Embedding evaluation form {}", form_id);

    html! {
        <div class="entree-page">
            <style>{STYLES}</style>
            <EntreeNav />

            <section class="entree-hero">
                <div class="inner">
                    <span class="badge">{"Entrée Express Canada"}</span>
                    <h1>
                        {"Votre nouvelle vie au"}
                        <span class="gradient-text">{" Canada"}</span>
                    </h1>
                    <p>
                        {"Obtenez votre résidence permanente au Canada en moins de 6 mois avec le programme Entrée Express. Accompagnement professionnel de A à Z."}
                    </p>
                    <div class="hero-actions">
                        <a href="#formulaire" class="btn-primary">{"Commencer mon évaluation"}</a>
                        <a href="#processus" class="btn-secondary">{"Découvrir le processus"}</a>
                    </div>
                    <div class="trust">
                        <div><strong>{"500+"}</strong>{"Clients accompagnés"}</div>
                        <div><strong>{"95 %"}</strong>{"Taux de réussite"}</div>
                        <div><strong>{"15 ans"}</strong>{"D'expérience"}</div>
                    </div>
                </div>
            </section>

            <section id="formulaire" class="form-band">
                <div class="inner">
                    <h2>{"Évaluation gratuite de votre profil"}</h2>
                    <p>{"Remplissez ce formulaire pour recevoir une analyse complète de vos chances"}</p>
                    <div class="form-frame">
                        <iframe
                            src={form_url}
                            title="Formulaire d'évaluation"
                            allow="clipboard-read; clipboard-write"
                        />
                    </div>
                </div>
            </section>

            <section id="avantages">
                <div class="inner">
                    <h2 class="section-title">{"Pourquoi choisir le Canada ?"}</h2>
                    <p class="section-subtitle">
                        {"Le Canada offre une qualité de vie exceptionnelle et des opportunités professionnelles uniques"}
                    </p>
                    <div class="grid-3">
                        { for BENEFITS.iter().map(|(icon, title, text)| html! {
                            <div class="tile">
                                <div class="icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="processus">
                <div class="inner">
                    <h2 class="section-title">{"Notre processus en 6 étapes"}</h2>
                    <p class="section-subtitle">{"Un accompagnement structuré et transparent du début à la fin"}</p>
                    <div class="grid-3">
                        { for PROCESS.iter().map(|(step, title, text)| html! {
                            <div class="tile">
                                <div class="step">{*step}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="services">
                <div class="inner">
                    <h2 class="section-title">{"Nos services inclus"}</h2>
                    <p class="section-subtitle">{"Un accompagnement complet pour maximiser vos chances de succès"}</p>
                    <div class="grid-2">
                        <div class="tile">
                            <h3>{"Services professionnels"}</h3>
                            <ul>
                                { for SERVICES.iter().map(|service| html! { <li>{*service}</li> }) }
                            </ul>
                        </div>
                        <div class="tile">
                            <h3>{"Garanties et engagement"}</h3>
                            <ul>
                                { for GUARANTEES.iter().map(|guarantee| html! { <li>{*guarantee}</li> }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="entree-footer">
                <div class="inner grid-3">
                    <div>
                        <h4>{"IMIGO Immigration"}</h4>
                        <p>{"Cabinet agréé spécialisé dans l'immigration au Canada. Votre partenaire de confiance depuis 15 ans."}</p>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <p>{"+212 5 22 27 72 13"}<br/>{"contact@imigo-immigration.ma"}<br/>{"Casablanca, Maroc"}</p>
                    </div>
                    <div>
                        <h4>{"Horaires"}</h4>
                        <p>{"Lundi - Vendredi : 9 h - 18 h"}<br/>{"Samedi : 9 h - 13 h"}<br/>{"Dimanche : Fermé"}</p>
                    </div>
                </div>
                <div class="legal">
                    {"© 2025 IMIGO Immigration. Tous droits réservés. Cabinet agréé N° R705681"}
                </div>
            </footer>
        </div>
    }
}
