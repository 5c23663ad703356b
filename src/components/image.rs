use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Lazy `<img>` that swaps in a captioned placeholder when the asset fails
/// to load, so one broken picture only affects its own card.
#[function_component(ContentImage)]
pub fn content_image(props: &ContentImageProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("Image failed to load: {}", src);
            failed.set(true);
        })
    };

    if *failed {
        html! {
            <div class={classes!("image-placeholder", props.class.clone())} role="img" aria-label={props.alt.clone()}>
                <span>{ props.alt.clone() }</span>
            </div>
        }
    } else {
        html! {
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={props.class.clone()}
                loading="lazy"
                onerror={onerror}
            />
        }
    }
}
