use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1 class="headline">{ "404" }</h1>
            <p class="text-muted">{ "Oops! Page not found" }</p>
            <Link<Route> to={Route::Home} classes="btn-primary">
                { "Return to Home" }
            </Link<Route>>
        </div>
    }
}
