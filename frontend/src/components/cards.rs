use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub sub: Option<AttrValue>,
}

#[styled_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class={css!(r#"
            margin-top: 40px;
            border-radius: 16px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            padding: 20px;
            backdrop-filter: blur(12px);
            box-shadow: 0 12px 40px rgba(0, 0, 0, 0.35);
        "#)}>
            <div class={css!("font-size: 14px; text-transform: uppercase; letter-spacing: 0.04em; color: rgba(255, 255, 255, 0.6);")}>
                {props.label.clone()}
            </div>
            <div class={css!("margin-top: 8px; font-size: 30px; font-weight: 800; color: white;")}>
                {props.value.clone()}
            </div>
            {
                if let Some(sub) = &props.sub {
                    html! {
                        <div class={css!("margin-top: 8px; font-size: 14px; color: rgba(255, 255, 255, 0.7);")}>
                            {sub.clone()}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MiniStatProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub emoji: AttrValue,
}

#[styled_component]
pub fn MiniStat(props: &MiniStatProps) -> Html {
    html! {
        <div class={css!(r#"
            border-radius: 16px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            padding: 16px;
        "#)}>
            <div class={css!("font-size: 12px; color: rgba(255, 255, 255, 0.6);")}>{props.label.clone()}</div>
            <div class={css!("margin-top: 4px; display: flex; align-items: baseline; gap: 8px; font-size: 18px;")}>
                <span class={css!("font-weight: 800; color: white;")}>{props.value.clone()}</span>
                <span>{props.emoji.clone()}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeBoxProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[styled_component]
pub fn TimeBox(props: &TimeBoxProps) -> Html {
    html! {
        <div class={css!(r#"
            border-radius: 16px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            padding: 16px;
            text-align: center;
        "#)}>
            <div class={css!("font-size: 36px; font-weight: 800; letter-spacing: -0.02em;")}>{props.value.clone()}</div>
            <div class={css!("margin-top: 4px; font-size: 12px; text-transform: uppercase; color: rgba(255, 255, 255, 0.6);")}>
                {props.label.clone()}
            </div>
        </div>
    }
}
