#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use frontend::components::chart_renderer::{ChartRenderer, ChartRendererProps};
use frontend::components::error_panel::{ErrorPanel, ErrorPanelProps};
use frontend::components::period_selector::{PeriodSelector, PeriodSelectorProps};
use frontend::components::playlist_list::{PlaylistList, PlaylistListProps};
use frontend::components::stat_card::{StatCard, StatCardProps};
use frontend::config::Config;
use gloo_timers::future::TimeoutFuture;
use gloo_utils::document;
use serde_json::json;
use shared::{
    stat_cards, AnalyticsPayload, AnalyticsPeriod, ChartData, ErrorStats, PlaylistStat, StatCardKind,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlCanvasElement, HtmlElement};
use yew::html::BaseComponent;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

async fn render<C>(props: C::Properties) -> Element
where
    C: BaseComponent,
{
    let root = mount_point();
    yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    TimeoutFuture::new(20).await;
    root
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} not rendered"))
}

fn has_class(root: &Element, selector: &str, class: &str) -> bool {
    find(root, selector).class_list().contains(class)
}

#[wasm_bindgen_test]
async fn test_stat_card_renders_inverted_error_trend() {
    let payload: AnalyticsPayload = serde_json::from_value(json!({
        "total_games": 12,
        "avg_players_per_game": 3.25,
        "avg_score": 48.0,
        "error_rate": 0.042,
        "trends": {"games": 0.2, "players": 0, "score": -0.05, "errors": 0.1},
        "generated_at": 1_700_000_000
    }))
    .unwrap();
    let view = stat_cards(&payload)[3].clone();

    let root = render::<StatCard>(StatCardProps {
        kind: StatCardKind::ErrorRate,
        view: Some(view),
        loading: false,
    })
    .await;

    assert_eq!(find(&root, ".stat-value").text_content().unwrap(), "4.2%");
    assert_eq!(find(&root, ".stat-trend").text_content().unwrap(), "↑ 10%");
    assert!(has_class(&root, ".stat-trend", "negative"));
    assert!(!has_class(&root, "#stat-error-rate", "loading"));
}

#[wasm_bindgen_test]
async fn test_playlist_names_render_as_text() {
    let root = render::<PlaylistList>(PlaylistListProps {
        playlists: vec![PlaylistStat {
            name: "<img src=x onerror=alert(1)>".into(),
            play_count: 4,
            percentage: 100.0,
        }],
    })
    .await;

    let name = find(&root, ".playlist-name");
    assert_eq!(name.text_content().unwrap(), "<img src=x onerror=alert(1)>");
    assert!(name.query_selector("img").unwrap().is_none());
    assert!(has_class(&root, "#playlist-empty", "hidden"));
}

#[wasm_bindgen_test]
async fn test_empty_playlists_show_placeholder() {
    let root = render::<PlaylistList>(PlaylistListProps { playlists: vec![] }).await;

    assert!(!has_class(&root, "#playlist-empty", "hidden"));
    assert_eq!(find(&root, "#playlist-list").child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn test_error_panel_expands_and_collapses() {
    let stats: ErrorStats = serde_json::from_value(json!({
        "error_rate": 0.031,
        "status": "warning",
        "recent_errors": [
            {"type": "WEBSOCKET_DISCONNECT", "message": "socket closed", "timestamp": 0}
        ]
    }))
    .unwrap();
    let root = render::<ErrorPanel>(ErrorPanelProps { stats }).await;

    assert_eq!(find(&root, "#error-rate-value").text_content().unwrap(), "3.1%");
    assert!(has_class(&root, "#health-badge", "warning"));
    assert_eq!(find(&root, ".badge-text").text_content().unwrap(), "Warning");
    assert!(has_class(&root, "#error-list-container", "hidden"));
    assert!(has_class(&root, "#no-errors-msg", "hidden"));

    let toggle: HtmlElement = find(&root, "#error-expand-btn").dyn_into().unwrap();
    toggle.click();
    TimeoutFuture::new(20).await;

    assert!(!has_class(&root, "#error-list-container", "hidden"));
    assert_eq!(find(&root, ".expand-icon").text_content().unwrap(), "▲");
    assert_eq!(find(&root, ".error-icon").text_content().unwrap(), "🔌");

    toggle.click();
    TimeoutFuture::new(20).await;
    assert!(has_class(&root, "#error-list-container", "hidden"));
    assert_eq!(find(&root, ".expand-icon").text_content().unwrap(), "▼");
}

#[wasm_bindgen_test]
async fn test_error_panel_without_errors() {
    let root = render::<ErrorPanel>(ErrorPanelProps {
        stats: ErrorStats::default(),
    })
    .await;

    assert!(has_class(&root, "#error-expand-btn", "hidden"));
    assert!(has_class(&root, "#error-list-container", "hidden"));
    assert!(!has_class(&root, "#no-errors-msg", "hidden"));
    assert_eq!(find(&root, ".badge-text").text_content().unwrap(), "Healthy");
}

#[wasm_bindgen_test]
async fn test_period_selector_emits_clicked_period() {
    let selected = Rc::new(Cell::new(None));
    let sink = selected.clone();
    let root = render::<PeriodSelector>(PeriodSelectorProps {
        active: AnalyticsPeriod::ThirtyDays,
        on_select: Callback::from(move |period| sink.set(Some(period))),
    })
    .await;

    assert!(has_class(&root, "[data-period='30d']", "period-btn--active"));
    assert!(!has_class(&root, "[data-period='7d']", "period-btn--active"));

    let button: HtmlElement = find(&root, "[data-period='7d']").dyn_into().unwrap();
    button.click();
    assert_eq!(selected.get(), Some(AnalyticsPeriod::SevenDays));
}

fn games_chart(labels: &[&str], values: &[f64]) -> ChartData {
    ChartData {
        labels: labels.iter().map(|l| l.to_string()).collect(),
        values: values.to_vec(),
    }
}

fn sized_mount_point(width_px: u32) -> Element {
    let root = mount_point();
    root.set_attribute("style", &format!("width: {}px;", width_px))
        .unwrap();
    root
}

#[wasm_bindgen_test]
async fn test_chart_mirrors_data_into_table() {
    let root = sized_mount_point(400);
    yew::Renderer::<ChartRenderer>::with_root_and_props(
        root.clone(),
        ChartRendererProps {
            data: games_chart(&["Mon", "Tue", "Wed"], &[3.0, 0.0, 5.0]),
        },
    )
    .render();
    TimeoutFuture::new(20).await;

    let body = find(&root, "#games-chart-data tbody");
    assert_eq!(body.child_element_count(), 3);
    let first_row = body.first_element_child().unwrap();
    assert_eq!(first_row.text_content().unwrap(), "Mon3");
}

#[wasm_bindgen_test]
async fn test_empty_chart_has_no_table_rows() {
    let root = render::<ChartRenderer>(ChartRendererProps {
        data: ChartData::default(),
    })
    .await;

    assert_eq!(find(&root, "#games-chart-data tbody").child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn test_resize_redraws_at_container_width() {
    let root = sized_mount_point(400);
    yew::Renderer::<ChartRenderer>::with_root_and_props(
        root.clone(),
        ChartRendererProps {
            data: games_chart(&["Mon", "Tue"], &[1.0, 2.0]),
        },
    )
    .render();
    TimeoutFuture::new(20).await;

    let canvas: HtmlCanvasElement = find(&root, "#games-chart").dyn_into().unwrap();
    let container: HtmlElement = find(&root, ".chart-container").dyn_into().unwrap();
    assert_eq!(canvas.width(), container.offset_width() as u32);
    assert_eq!(canvas.height(), Config::chart_height());

    root.set_attribute("style", "width: 260px;").unwrap();
    gloo_utils::window()
        .dispatch_event(&Event::new("resize").unwrap())
        .unwrap();

    // Nothing is redrawn until the debounce window has passed.
    assert_ne!(canvas.width(), container.offset_width() as u32);
    let wait = Config::resize_debounce().as_millis() as u32 + 100;
    TimeoutFuture::new(wait).await;

    assert_eq!(container.offset_width(), 260);
    assert_eq!(canvas.width(), 260);
}
