use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod contact;
mod content;
mod reveal;
mod components {
    pub mod floating_shape;
    pub mod icons;
    pub mod image;
    pub mod page_frame;
    pub mod reveal;
    pub mod sections;
}
mod pages {
    pub mod contact;
    pub mod content_page;
    pub mod not_found;
}

use components::reveal::REVEAL_CSS;
use content::PageId;
use pages::{
    contact::Contact,
    content_page::ContentPage,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/products")]
    Products,
    #[at("/benefits")]
    Benefits,
    #[at("/delivery")]
    Delivery,
    #[at("/local-impact")]
    LocalImpact,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Pages listed in the navigation, in display order.
    const NAV: [(Route, &'static str); 7] = [
        (Route::Home, "Home"),
        (Route::About, "About"),
        (Route::Products, "Products"),
        (Route::Benefits, "Benefits"),
        (Route::Delivery, "Delivery"),
        (Route::LocalImpact, "Local Impact"),
        (Route::Contact, "Contact"),
    ];
}


// Content pages share one component type; the key forces a fresh mount per
// page so reveal state and the scroll reset never carry over.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <ContentPage key={PageId::Home.name()} page={PageId::Home} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <ContentPage key={PageId::About.name()} page={PageId::About} /> }
        },
        Route::Products => {
            info!("Rendering Products page");
            html! { <ContentPage key={PageId::Products.name()} page={PageId::Products} /> }
        },
        Route::Benefits => {
            info!("Rendering Benefits page");
            html! { <ContentPage key={PageId::Benefits.name()} page={PageId::Benefits} /> }
        },
        Route::Delivery => {
            info!("Rendering Delivery page");
            html! { <ContentPage key={PageId::Delivery.name()} page={PageId::Delivery} /> }
        },
        Route::LocalImpact => {
            info!("Rendering Local Impact page");
            html! { <ContentPage key={PageId::LocalImpact.name()} page={PageId::LocalImpact} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let scroll_top = window
                        .document()
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > config::nav_scroll_threshold());
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &listener) {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Dhoodh Fresh"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for Route::NAV.iter().map(|(route, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    { *label }
                                </Link<Route>>
                            </div>
                        })
                    }
                </div>
            </div>
        </nav>
    }
}


#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-links">
                {
                    for Route::NAV.iter().map(|(route, label)| html! {
                        <Link<Route> to={route.clone()} classes="footer-link">{ *label }</Link<Route>>
                    })
                }
            </div>
            <p>{"© Dhoodh Fresh. 100% shudd milk, delivered daily in Bangalore."}</p>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ REVEAL_CSS }</style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_route_round_trips_through_its_path() {
        for (route, _) in Route::NAV {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn each_content_page_mounts_under_its_own_key() {
        use yew::virtual_dom::Key;

        let pages = [
            (Route::Home, PageId::Home),
            (Route::About, PageId::About),
            (Route::Products, PageId::Products),
            (Route::Benefits, PageId::Benefits),
            (Route::Delivery, PageId::Delivery),
            (Route::LocalImpact, PageId::LocalImpact),
        ];
        for (route, id) in pages {
            let rendered = switch(route.clone());
            assert_eq!(rendered.key(), Some(&Key::from(id.name())), "{:?}", route);
        }

        let mut names: Vec<&str> = PageId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PageId::ALL.len());
    }

    #[test]
    fn content_links_point_at_known_routes() {
        use content::Block;

        for id in PageId::ALL {
            for section in content::page(id).unwrap().sections {
                let actions = match section.block {
                    Block::Hero { actions } => actions,
                    Block::CallToAction { action } => vec![action],
                    _ => continue,
                };
                for action in actions {
                    let route = Route::recognize(&action.href);
                    assert!(
                        matches!(route, Some(ref r) if *r != Route::NotFound),
                        "{} links to unknown {}",
                        id.name(),
                        action.href
                    );
                }
            }
        }
    }
}
