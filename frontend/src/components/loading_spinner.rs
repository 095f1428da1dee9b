use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    /// Inline, e.g. inside a button.
    Small,
    Medium,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 40,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let padded = props.size == SpinnerSize::Medium;

    html! {
        <div
            class={classes!("inline-flex", "items-center", "justify-center", padded.then_some("p-6"))}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-2",
                    "border-[var(--primary)]",
                    "border-t-transparent",
                    "animate-spin"
                )}
            />
            <span class={classes!("sr-only")}>{ props.label.clone() }</span>
        </div>
    }
}
