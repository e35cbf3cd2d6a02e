use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::country::search_country_codes;

#[derive(Properties, PartialEq)]
pub struct CountryPickerProps {
    pub selected: AttrValue,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(CountryPicker)]
pub fn country_picker(props: &CountryPickerProps) -> Html {
    let open = use_state(|| false);
    let query = use_state(String::new);
    let container = use_node_ref();
    let search_input = use_node_ref();

    {
        let open = open.clone();
        use_click_away(container.clone(), move |_: Event| open.set(false));
    }

    // Focus the search box whenever the list opens.
    {
        let search_input = search_input.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    if let Some(input) = search_input.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                || ()
            },
            *open,
        );
    }

    let toggle = {
        let open = open.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                open.set(!*open);
            }
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let options = search_country_codes(&query);

    html! {
        <div class="country-picker" ref={container}>
            <div class="country-picker-trigger" onclick={toggle}>
                <span>{ &props.selected }</span>
                <span class="chevron">{ "▾" }</span>
            </div>
            if *open {
                <div class="country-picker-list">
                    <div class="country-picker-search">
                        <input
                            ref={search_input}
                            type="text"
                            placeholder="Search country..."
                            value={(*query).clone()}
                            oninput={on_search}
                        />
                    </div>
                    <div class="country-picker-options">
                        { for options.iter().map(|country| {
                            let code = country.code;
                            let on_click = {
                                let on_select = props.on_select.clone();
                                let open = open.clone();
                                let query = query.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_select.emit(code.to_string());
                                    open.set(false);
                                    query.set(String::new());
                                })
                            };
                            html! {
                                <div key={code} class="country-picker-option" onclick={on_click}>
                                    <span class="code">{ code }</span>
                                    <span class="country">{ country.country }</span>
                                    if props.selected.as_str() == code {
                                        <span class="check">{ "✓" }</span>
                                    }
                                </div>
                            }
                        }) }
                        if options.is_empty() {
                            <div class="country-picker-empty">{ "No countries match your search" }</div>
                        }
                    </div>
                </div>
            }
        </div>
    }
}
