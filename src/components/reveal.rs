use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::{initial_state, start_observing, Fallback, Motion, RevealLatch, RevealOptions, RevealState, Stagger};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Owns a live observer and the JS callback it calls into. Dropping it
/// disconnects the observer before the callback is freed.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn watch(
    element: &Element,
    options: &RevealOptions,
    state: UseStateSetter<RevealState>,
) -> Result<ObserverGuard, JsValue> {
    let mut latch = RevealLatch::new(options.threshold);

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if latch.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                debug!("Revealed <{}>", entry.target().tag_name().to_lowercase());
                state.set(latch.state());
                // one-shot: nothing left to watch
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(options.threshold));
    init.root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Tracks whether `node` has been on screen yet. Starts `Hidden`, flips to
/// `Visible` once and stays there. Without `IntersectionObserver` the target
/// is shown straight away.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> RevealState {
    let state = use_state_eq(|| RevealState::Hidden);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut guard = None;
                if let Some(element) = node.cast::<Element>() {
                    let started = start_observing(observer_supported(), || {
                        watch(&element, &options, setter.clone())
                    });
                    match &started {
                        Err(Fallback::Unsupported) => {
                            warn!("IntersectionObserver unavailable, showing content immediately")
                        }
                        Err(Fallback::WatchFailed(e)) => warn!("Could not observe element: {:?}", e),
                        Ok(_) => {}
                    }
                    if let Some(state) = initial_state(&started) {
                        setter.set(state);
                    }
                    guard = started.ok();
                }
                // Unmount disconnects the observer so no callback outlives the node.
                move || drop(guard)
            },
            node,
        );
    }

    *state
}

pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transition: opacity 0.8s ease-in-out, transform 0.8s ease-in-out;
        will-change: opacity, transform;
    }
    .reveal.reveal-up { transform: translateY(40px); }
    .reveal.reveal-left { transform: translateX(-50px); }
    .reveal.reveal-right { transform: translateX(50px); }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal, .reveal.visible {
            transition: none;
            transform: none;
            opacity: 1;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub motion: Motion,
    /// Seconds to wait after becoming visible.
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), RevealOptions::default());

    let style = (props.delay > 0.0).then(|| format!("transition-delay: {:.2}s;", props.delay));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.motion.class(), state.class(), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or_default]
    pub motion: Motion,
    #[prop_or_default]
    pub stagger: Stagger,
}

/// Reveals its children one after another once the group itself is on
/// screen. Delays count from the first child of this group only.
#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), RevealOptions::default());

    html! {
        <div ref={node} class={props.class.clone()}>
            {
                for props.children.iter().enumerate().map(|(index, child)| html! {
                    <div
                        class={classes!("reveal", props.motion.class(), state.class(), props.item_class.clone())}
                        style={format!("transition-delay: {};", props.stagger.css_delay(index))}
                    >
                        { child }
                    </div>
                })
            }
        </div>
    }
}
