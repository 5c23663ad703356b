use yew::prelude::*;

use crate::components::floating_shape::FloatingShape;

#[derive(Properties, PartialEq)]
pub struct PageFrameProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub floating_shape: bool,
    #[prop_or_default]
    pub grid_backdrop: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Outer wrapper of every routed page: resets the scroll position, sets the
/// document title and draws the optional backdrop decorations.
#[function_component(PageFrame)]
pub fn page_frame(props: &PageFrameProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    use_effect_with_deps(
        move |title: &AttrValue| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(title);
            }
            || ()
        },
        props.title.clone(),
    );

    html! {
        <div class={classes!("page", props.class.clone())}>
            if props.grid_backdrop {
                <div class="grid-backdrop" aria-hidden="true"></div>
            }
            if props.floating_shape {
                <FloatingShape class="page-shape" />
            }
            <main>
                { for props.children.iter() }
            </main>
        </div>
    }
}
