use terraroll_core::{PanelBody, ResultPanel};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub panel: ResultPanel,
    /// Position among the cards; staggers the entrance animation.
    #[prop_or_default]
    pub index: u32,
}

/// Inline animation rule; cards are re-keyed on each run so it replays.
#[must_use]
pub fn entrance_style(index: u32) -> String {
    let delay = f64::from(index) * 0.1;
    format!("animation: fadeInUp 0.5s ease forwards; animation-delay: {delay:.1}s;")
}

#[function_component(ResultCard)]
pub fn result_card(p: &Props) -> Html {
    let body = match &p.panel.body {
        PanelBody::Rows { rows } => rows
            .iter()
            .map(|row| {
                html! {
                    <div class="result-item">
                        <strong>{ format!("{} {}:", row.icon, row.label) }</strong>
                        { " " }{ row.value.clone() }
                    </div>
                }
            })
            .collect::<Html>(),
        PanelBody::Disabled { message } => html! {
            <p class="result-disabled">{ *message }</p>
        },
    };
    html! {
        <section class="result-card" style={entrance_style(p.index)} aria-live="polite">
            <h2>{ p.panel.title }</h2>
            <div id={p.panel.id}>{ body }</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use terraroll_core::panels::{class_panel, world_panel};
    use terraroll_core::{ClassResult, WorldResult};
    use yew::LocalServerRenderer;

    #[test]
    fn renders_rows_with_labels() {
        let props = Props {
            panel: world_panel(Some(&WorldResult {
                size: "Большой".into(),
                difficulty: "Мастер".into(),
                corruption: "Багрянец".into(),
            })),
            index: 0,
        };
        let html = block_on(LocalServerRenderer::<ResultCard>::with_props(props).render());
        assert!(html.contains("id=\"worldResult\""), "{html}");
        assert!(html.contains("🌍 Размер мира:"), "{html}");
        assert!(html.contains("Багрянец"), "{html}");
    }

    #[test]
    fn renders_placeholder_when_disabled() {
        let props = Props {
            panel: class_panel(None::<&ClassResult>),
            index: 2,
        };
        let html = block_on(LocalServerRenderer::<ResultCard>::with_props(props).render());
        assert!(html.contains("Рандомизация класса персонажа отключена"));
        assert!(html.contains("animation-delay: 0.2s"));
    }

    #[test]
    fn entrance_delay_steps_by_index() {
        assert!(entrance_style(0).contains("animation-delay: 0.0s"));
        assert!(entrance_style(1).contains("animation-delay: 0.1s"));
    }
}
