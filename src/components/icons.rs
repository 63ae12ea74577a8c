//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuChevronDown as ChevronDown, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCircleCheck as Success, LuCircleX as Error,
        LuCopy as Copy, LuFile as File, LuFolder as Folder, LuFolderOpen as FolderOpen,
        LuInfo as Info, LuMoon as Moon, LuSearch as Search, LuSun as Sun,
        LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckCircle as Success, BsCheckLg as Check, BsChevronDown as ChevronDown,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsClipboard as Copy,
        BsExclamationTriangle as Warning, BsFileEarmark as File, BsFolderFill as Folder,
        BsFolder2Open as FolderOpen, BsInfoCircle as Info, BsMoon as Moon, BsSearch as Search,
        BsSun as Sun, BsXCircle as Error, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHECK, Check);
themed_icon!(CLOSE, Close);
themed_icon!(COPY, Copy);
themed_icon!(SEARCH, Search);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(FILE, File);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(INFO, Info);
themed_icon!(SUCCESS, Success);
themed_icon!(WARNING, Warning);
themed_icon!(ERROR, Error);
