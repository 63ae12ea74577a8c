use leptos::prelude::*;

use super::{Demo, PageHeader, css};
use crate::components::avatar::{Avatar, AvatarShape, AvatarSize};

#[component]
pub fn AvatarPage() -> impl IntoView {
    view! {
        <PageHeader
            title="Avatar"
            lead="Shows a picture, or initials when there is no picture or it fails to load."
        />
        <Demo title="Fallbacks">
            <div class=css::row>
                <Avatar name="Ada Lovelace" />
                <Avatar name="Grace Brewster Hopper" />
                <Avatar name="linus" />
                <Avatar src="missing-image.png" name="Broken Link" alt="Broken Link" />
            </div>
        </Demo>
        <Demo title="Sizes">
            <div class=css::row>
                <Avatar name="Small" size=AvatarSize::Sm />
                <Avatar name="Medium" size=AvatarSize::Md />
                <Avatar name="Large" size=AvatarSize::Lg />
                <Avatar name="Extra Large" size=AvatarSize::Xl />
            </div>
        </Demo>
        <Demo title="Shapes">
            <div class=css::row>
                <Avatar name="Circle Shape" shape=AvatarShape::Circle />
                <Avatar name="Square Shape" shape=AvatarShape::Square />
            </div>
        </Demo>
    }
}
