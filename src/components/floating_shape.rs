use web_sys::js_sys::Math;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingShapeProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Blurred accent blob drifting behind a section. Its drift offsets are
/// picked once, after mount; the first paint is centred.
#[function_component(FloatingShape)]
pub fn floating_shape(props: &FloatingShapeProps) -> Html {
    let offsets = use_state(|| (0.0, 0.0, 0.0, 0.0));

    {
        let offsets = offsets.clone();
        use_effect_with_deps(
            move |_| {
                let jitter = || Math::random() * 200.0 - 100.0;
                offsets.set((jitter(), jitter(), jitter(), jitter()));
                || ()
            },
            (),
        );
    }
    let (from_x, from_y, to_x, to_y) = *offsets;

    html! {
        <div
            class={classes!("floating-shape", props.class.clone())}
            aria-hidden="true"
            style={format!(
                "--from-x: {:.0}px; --from-y: {:.0}px; --to-x: {:.0}px; --to-y: {:.0}px;",
                from_x, from_y, to_x, to_y
            )}
        />
    }
}
