use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

pub const REVEAL_CLASS: &str = "reveal-on-scroll";
pub const REVEALED_CLASS: &str = "revealed";

/// Live observer plus the JS callback it calls into. Disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(root: &Element) -> Result<RevealObserver, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(REVEALED_CLASS);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    if root.class_list().contains(REVEAL_CLASS) {
        observer.observe(root);
    }
    let targets = root.query_selector_all(&format!(".{}", REVEAL_CLASS))?;
    for i in 0..targets.length() {
        if let Some(el) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Adds `revealed` to `root` and its `.reveal-on-scroll` descendants once
/// they scroll into view.
#[hook]
pub fn use_reveal_on_scroll(root: NodeRef) {
    use_effect_with_deps(
        |root: &NodeRef| {
            let observer = root.cast::<Element>().and_then(|el| {
                observe(&el)
                    .map_err(|e| log::warn!("Reveal observer unavailable: {:?}", e))
                    .ok()
            });
            move || drop(observer)
        },
        root,
    );
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    use_reveal_on_scroll(node.clone());

    html! {
        <div ref={node} class={classes!(REVEAL_CLASS, props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
