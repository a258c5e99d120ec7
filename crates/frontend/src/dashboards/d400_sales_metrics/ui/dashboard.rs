use chrono::Utc;
use contracts::dashboards::d400_sales_metrics::{CategorySlice, MonthlyPoint, RegionShare, SalesMetrics};
use contracts::domain::a001_product::Product;
use contracts::shared::export::ExportDocument;
use contracts::shared::format::format_number_int;
use contracts::shared::locale::TextKey;
use leptos::prelude::*;

use crate::shared::data::use_data;
use crate::shared::export::{export_document, ExportFormat};
use crate::shared::settings::{use_settings, CurrencySelect, LanguageSelect, SettingsContext};

/// Overview: headline figures, top products and regional split
#[component]
pub fn SalesMetricsDashboard() -> impl IntoView {
    let data = use_data();
    let settings = use_settings();
    let metrics = Memo::new(move |_| data.metrics());
    let (export_error, set_export_error) = signal(None::<String>);

    let run_export = move |format: ExportFormat| {
        let snapshot = metrics.get_untracked();
        let generated_at = settings.date(&Utc::now().format("%Y-%m-%d").to_string());
        let title = settings.t(TextKey::Analytics);
        // CSV holds one table, so it gets the monthly series alone
        let doc = match format {
            ExportFormat::Csv => ExportDocument::single(title, &generated_at, &snapshot.monthly),
            _ => ExportDocument::analytics_report(title, &generated_at, &snapshot),
        };
        match export_document(&doc, format, "analytics-report", settings.locale().code()) {
            Ok(()) => set_export_error.set(None),
            Err(e) => {
                log::error!("Analytics export failed: {}", e);
                set_export_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div id="d400_sales_metrics--dashboard" class="d400-dashboard">
            <div class="d400-header">
                <h2>{move || settings.t(TextKey::Overview)}</h2>
                <div class="d400-actions">
                    <LanguageSelect />
                    <CurrencySelect />
                    <span>{move || settings.t(TextKey::ExportReport)}</span>
                    <button on:click=move |_| run_export(ExportFormat::Csv)>"CSV"</button>
                    <button on:click=move |_| run_export(ExportFormat::Text)>"TXT"</button>
                    <button on:click=move |_| run_export(ExportFormat::Html)>"PDF (HTML)"</button>
                </div>
            </div>

            {move || export_error.get().map(|e| view! { <div class="d400-error">{e}</div> })}

            <div class="d400-stats">
                {move || stat_cards(&metrics.get(), settings)}
            </div>

            <div class="d400-panels">
                <section class="d400-panel">
                    <h3>{move || settings.t(TextKey::RevenueOverview)}</h3>
                    {move || monthly_table(&metrics.get().monthly, settings)}
                </section>
                <section class="d400-panel">
                    <h3>{move || settings.t(TextKey::SalesByCategory)}</h3>
                    {move || category_list(&metrics.get().categories, settings)}
                </section>
                <section class="d400-panel">
                    <h3>{move || settings.t(TextKey::SalesByRegion)}</h3>
                    {move || region_list(&metrics.get().regions, settings)}
                </section>
                <section class="d400-panel">
                    <h3>{move || settings.t(TextKey::TopProducts)}</h3>
                    {move || top_products_table(&metrics.get().top_products, settings)}
                </section>
            </div>
        </div>
    }
}

fn stat_cards(metrics: &SalesMetrics, settings: SettingsContext) -> impl IntoView {
    let cards = [
        (TextKey::TotalRevenue, settings.money(metrics.total_revenue)),
        (TextKey::Orders, format_number_int(metrics.total_orders as f64)),
        (TextKey::ActiveUsers, format_number_int(metrics.active_users as f64)),
        (TextKey::Products, format_number_int(metrics.active_products as f64)),
        (TextKey::AvgOrder, settings.money(metrics.average_order)),
    ];
    cards
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="d400-stat-card">
                    <span class="d400-stat-label">{settings.t(label)}</span>
                    <span class="d400-stat-value">{value}</span>
                </div>
            }
        })
        .collect_view()
}

fn monthly_table(monthly: &[MonthlyPoint], settings: SettingsContext) -> impl IntoView {
    let rows = monthly
        .iter()
        .map(|point| {
            view! {
                <tr>
                    <td>{point.month.clone()}</td>
                    <td>{settings.money(point.revenue as f64)}</td>
                    <td>{point.orders}</td>
                    <td>{point.sales}</td>
                    <td>{point.users}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="d400-table">
            <thead>
                <tr>
                    <th></th>
                    <th>{settings.t(TextKey::TotalRevenue)}</th>
                    <th>{settings.t(TextKey::Orders)}</th>
                    <th>{settings.t(TextKey::Sales)}</th>
                    <th>{settings.t(TextKey::Users)}</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

fn category_list(categories: &[CategorySlice], settings: SettingsContext) -> impl IntoView {
    categories
        .iter()
        .map(|slice| {
            let swatch = format!("background-color: {}", slice.color);
            view! {
                <div class="d400-legend-row">
                    <span class="d400-swatch" style=swatch></span>
                    <span>{settings.category_label(&slice.name)}</span>
                    <span class="d400-value">{format_number_int(slice.value as f64)}</span>
                </div>
            }
        })
        .collect_view()
}

fn region_list(regions: &[RegionShare], settings: SettingsContext) -> impl IntoView {
    regions
        .iter()
        .map(|share| {
            let width = format!("width: {}%", share.percentage);
            view! {
                <div class="d400-region-row">
                    <span>{share.region.clone()}</span>
                    <div class="d400-bar"><div class="d400-bar-fill" style=width></div></div>
                    <span class="d400-value">{settings.money(share.sales as f64)}</span>
                    <span class="d400-percent">{format!("{}%", share.percentage)}</span>
                </div>
            }
        })
        .collect_view()
}

fn top_products_table(products: &[Product], settings: SettingsContext) -> impl IntoView {
    let rows = products
        .iter()
        .map(|product| {
            view! {
                <tr>
                    <td>{product.name.clone()}</td>
                    <td>{settings.category_label(&product.category)}</td>
                    <td>{settings.money(product.price)}</td>
                    <td>{format_number_int(product.sales as f64)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="d400-table">
            <thead>
                <tr>
                    <th>{settings.t(TextKey::ProductName)}</th>
                    <th>{settings.t(TextKey::Category)}</th>
                    <th>{settings.t(TextKey::Price)}</th>
                    <th>{settings.t(TextKey::Sales)}</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
