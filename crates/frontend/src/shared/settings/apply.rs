//! Push theme and appearance choices onto `<html>`.

use contracts::shared::settings::{AppearanceSettings, ThemeSettings};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

fn document_root() -> Option<HtmlElement> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

/// Toggle the root classes for each theme flag
pub fn apply_theme(theme: &ThemeSettings) {
    let Some(root) = document_root() else {
        return;
    };
    let classes = root.class_list();
    for (class, enabled) in theme.root_classes() {
        if let Err(e) = classes.toggle_with_force(class, enabled) {
            log::warn!("Failed to toggle root class '{}': {:?}", class, e);
        }
    }
}

/// Set the font size and custom colour variables
pub fn apply_appearance(appearance: &AppearanceSettings) {
    let Some(root) = document_root() else {
        return;
    };
    let style = root.style();
    let (primary, secondary) = appearance.color_scheme.colors();
    let properties = [
        ("--font-size", appearance.font_size.css_size()),
        ("--color-primary-custom", primary),
        ("--color-secondary-custom", secondary),
    ];
    for (name, value) in properties {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }
}
