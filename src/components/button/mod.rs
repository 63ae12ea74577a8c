//! Button component.

use leptos::{ev, prelude::*};

stylance::import_crate_style!(css, "src/components/button/button.module.css");

/// Visual emphasis of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
    ];

    fn class(self) -> &'static str {
        match self {
            Self::Primary => css::primary,
            Self::Secondary => css::secondary,
            Self::Outline => css::outline,
            Self::Ghost => css::ghost,
            Self::Danger => css::danger,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Outline => "Outline",
            Self::Ghost => "Ghost",
            Self::Danger => "Danger",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [Self::Sm, Self::Md, Self::Lg];

    fn class(self) -> &'static str {
        match self {
            Self::Sm => css::sm,
            Self::Md => css::md,
            Self::Lg => css::lg,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sm => "Small",
            Self::Md => "Medium",
            Self::Lg => "Large",
        }
    }
}

/// Class list for a button in the given configuration.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, block: bool, loading: bool) -> String {
    let mut classes = vec![css::button, variant.class(), size.class()];
    if block {
        classes.push(css::block);
    }
    if loading {
        classes.push(css::loading);
    }
    classes.join(" ")
}

/// A clickable button.
///
/// While `loading` is set the button is disabled, shows a spinner and
/// reports `aria-busy`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional)] block: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_inert = move || disabled.get() || loading.get();

    let handle_click = move |e: ev::MouseEvent| {
        if is_inert() {
            return;
        }
        if let Some(cb) = on_click {
            cb.run(e);
        }
    };

    view! {
        <button
            type=button_type
            class=move || button_class(variant, size, block, loading.get())
            disabled=is_inert
            aria-busy=move || if loading.get() { "true" } else { "false" }
            aria-label=aria_label
            on:click=handle_click
        >
            {move || loading.get().then(|| view! { <span class=css::spinner aria-hidden="true"></span> })}
            <span class=css::label>{children()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_class() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), false, false);
        assert_eq!(class, format!("{} {} {}", css::button, css::primary, css::md));
    }

    #[test]
    fn test_modifiers_append() {
        let class = button_class(ButtonVariant::Danger, ButtonSize::Lg, true, true);
        assert!(class.contains(css::danger));
        assert!(class.contains(css::lg));
        assert!(class.ends_with(&format!("{} {}", css::block, css::loading)));
    }
}
