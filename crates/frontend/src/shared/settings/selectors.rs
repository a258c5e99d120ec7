use contracts::shared::locale::Locale;
use contracts::shared::settings::Currency;
use leptos::prelude::*;

use super::context::use_settings;

/// Language dropdown; the choice is persisted immediately.
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let ctx = use_settings();

    view! {
        <select
            class="settings-select"
            on:change=move |ev| ctx.set_locale(Locale::resolve(&event_target_value(&ev)))
        >
            {Locale::all()
                .into_iter()
                .map(|locale| {
                    view! {
                        <option value=locale.code() selected=move || ctx.locale() == locale>
                            {locale.display_name()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn CurrencySelect() -> impl IntoView {
    let ctx = use_settings();
    let current = move || ctx.store.with(|s| s.settings().currency);

    view! {
        <select
            class="settings-select"
            on:change=move |ev| ctx.set_currency(Currency::from_code(&event_target_value(&ev)))
        >
            {Currency::all()
                .into_iter()
                .map(|currency| {
                    view! {
                        <option value=currency.code() selected=move || current() == currency>
                            {format!("{} {}", currency.symbol(), currency.display_name())}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
