use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod lead {
    pub mod attribution;
    pub mod controller;
    pub mod form;
    pub mod redirect;
    pub mod submission;
}
mod components {
    pub mod lead_form;
}
mod pages {
    pub mod ambassador;
    pub mod entree_express;
}

use pages::{
    ambassador::Ambassador,
    entree_express::EntreeExpress,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    EntreeExpress,
    #[at("/ambassadeur")]
    Ambassador,
    #[at("/:form_id")]
    EvaluationForm { form_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::EntreeExpress => {
            info!("Rendering Entree Express page");
            html! { <EntreeExpress /> }
        },
        Route::Ambassador => {
            info!("Rendering Ambassador page");
            html! { <Ambassador /> }
        },
        Route::EvaluationForm { form_id } => {
            info!("Rendering Entree Express page for form {}", form_id);
            html! { <EntreeExpress form_id={Some(form_id)} /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Entree Express page");
            html! { <EntreeExpress /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
