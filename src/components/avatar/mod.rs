//! Avatar component.
//!
//! Shows an image when one is given and loads; otherwise the initials of
//! `name`.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/avatar/avatar.module.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    pub const ALL: [AvatarSize; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn class(self) -> &'static str {
        match self {
            Self::Sm => css::sm,
            Self::Md => css::md,
            Self::Lg => css::lg,
            Self::Xl => css::xl,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
}

/// Up to two uppercase initials: first letter of the first and last word.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    // `to_uppercase` may yield several chars ("ß" -> "SS"); keep one per word.
    let first_letter = |w: &str| w.chars().next().and_then(|c| c.to_uppercase().next());

    match words.as_slice() {
        [] => String::new(),
        [only] => first_letter(*only).into_iter().collect(),
        [first, .., last] => first_letter(*first)
            .into_iter()
            .chain(first_letter(*last))
            .collect(),
    }
}

/// Deterministic background hue for a name, so the same person keeps the
/// same color across renders.
pub fn hue_for(name: &str) -> u32 {
    name.bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)))
        % 360
}

#[component]
pub fn Avatar(
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] name: String,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional)] size: AvatarSize,
    #[prop(optional)] shape: AvatarShape,
) -> impl IntoView {
    let (image_failed, set_image_failed) = signal(false);
    let show_image = {
        let has_src = src.is_some();
        move || has_src && !image_failed.get()
    };

    let shape_class = match shape {
        AvatarShape::Circle => css::circle,
        AvatarShape::Square => css::square,
    };
    let class = format!("{} {} {}", css::avatar, size.class(), shape_class);
    let label = alt.unwrap_or_else(|| name.clone());
    let text = initials(&name);
    let style = format!("--avatar-hue: {}", hue_for(&name));
    let image_alt = label.clone();

    view! {
        <span class=class style=style role="img" aria-label=label>
            <Show
                when=show_image
                fallback=move || view! { <span class=css::initials aria-hidden="true">{text.clone()}</span> }
            >
                <img
                    class=css::image
                    src=src.clone()
                    alt=image_alt.clone()
                    on:error=move |_| set_image_failed.set(true)
                />
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace brewster murray hopper"), "GH");
        assert_eq!(initials("Linus"), "L");
        assert_eq!(initials("   "), "");
        assert_eq!(initials("émile zola"), "ÉZ");
    }

    #[test]
    fn test_initials_never_exceed_two_chars() {
        assert_eq!(initials("ßen ßeta"), "SS");
        assert_eq!(initials("ßen"), "S");
        assert!(initials("ﬀ ﬃ").chars().count() <= 2);
    }

    #[test]
    fn test_hue_is_stable_and_bounded() {
        assert_eq!(hue_for("Ada"), hue_for("Ada"));
        assert!(hue_for("a much longer display name") < 360);
    }
}
