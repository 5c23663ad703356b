use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <PageFrame title="Page not found | Dhoodh Fresh" floating_shape={true}>
            <section class="content-section hero">
                <div class="container centered">
                    <h1>{"Page not found"}</h1>
                    <p class="lead">{"The page you were looking for has gone sour."}</p>
                    <div class="actions">
                        <Link<Route> to={Route::Home} classes="btn btn-primary">
                            {"Back to Home"}
                        </Link<Route>>
                    </div>
                </div>
            </section>
        </PageFrame>
    }
}
