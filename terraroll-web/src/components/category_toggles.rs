use terraroll_core::{ActiveFlags, Category};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub flags: ActiveFlags,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub on_toggle: Callback<(Category, bool)>,
}

/// One checkbox per category, keyed by the category's document key.
#[function_component(CategoryToggles)]
pub fn category_toggles(p: &Props) -> Html {
    let boxes = Category::ALL.into_iter().map(|category| {
        let on_change = {
            let cb = p.on_toggle.clone();
            Callback::from(move |e: Event| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    cb.emit((category, input.checked()));
                }
            })
        };
        html! {
            <label class="label cursor-pointer gap-2">
                <input
                    id={category.key()}
                    type="checkbox"
                    checked={p.flags.get(category)}
                    data-active={p.flags.get(category).to_string()}
                    disabled={p.disabled}
                    onchange={on_change}
                />
                <span>{ category.label() }</span>
            </label>
        }
    });
    html! {
        <fieldset class="category-toggles">
            { for boxes }
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_a_checkbox_per_category() {
        let props = Props {
            flags: ActiveFlags::all().with(Category::CharacterSubclass, false),
            disabled: false,
            on_toggle: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CategoryToggles>::with_props(props).render());
        for category in Category::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", category.key())),
                "missing {category}: {html}"
            );
            assert!(html.contains(category.label()));
        }
        assert!(html.contains("data-active=\"false\""), "{html}");
    }
}
