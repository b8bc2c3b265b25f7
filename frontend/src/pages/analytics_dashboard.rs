use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use shared::models::dashboard::{last_updated_text, LoadPhase};
use shared::{
    stat_cards, AnalyticsPayload, AnalyticsPeriod, ChartData, DashboardController, ErrorStats,
    FailureOutcome, LoadTicket, LoadTrigger, PlaylistStat, SharedError, StatCardKind,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::analytics::get_analytics;
use crate::components::chart_renderer::ChartRenderer;
use crate::components::error_panel::ErrorPanel;
use crate::components::period_selector::PeriodSelector;
use crate::components::playlist_list::PlaylistList;
use crate::components::stat_card::StatCard;
use crate::config::Config;
use crate::i18n::use_i18n;
use crate::timers::ScheduledTask;

pub enum DashboardAction {
    Loading(AnalyticsPeriod),
    Loaded(AnalyticsPayload),
    Failed,
}

/// Rendered dashboard. Optional sections keep their previous content when a
/// payload arrives without them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub phase: LoadPhase,
    pub period: AnalyticsPeriod,
    pub payload: Option<Rc<AnalyticsPayload>>,
    pub playlists: Option<Vec<PlaylistStat>>,
    pub chart: Option<ChartData>,
    pub error_stats: Option<ErrorStats>,
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::Loading(period) => {
                next.phase = LoadPhase::Loading;
                next.period = period;
            }
            DashboardAction::Loaded(mut payload) => {
                next.phase = LoadPhase::Loaded;
                if let Some(playlists) = payload.playlists.take() {
                    next.playlists = Some(playlists);
                }
                if let Some(chart) = payload.chart_data.take() {
                    next.chart = Some(chart);
                }
                if let Some(stats) = payload.error_stats.take() {
                    next.error_stats = Some(stats);
                }
                next.payload = Some(Rc::new(payload));
            }
            DashboardAction::Failed => next.phase = LoadPhase::Failed,
        }
        Rc::new(next)
    }
}

/// Everything a fetch needs to report back. Cloned into every async task
/// and timer callback.
#[derive(Clone)]
struct LoadHandles {
    controller: Rc<RefCell<DashboardController>>,
    retry_timer: Rc<RefCell<ScheduledTask>>,
    state: UseReducerHandle<DashboardState>,
}

impl LoadHandles {
    fn start(&self, trigger: LoadTrigger) {
        if trigger.is_user_initiated() {
            self.retry_timer.borrow_mut().cancel();
        }
        let ticket = self.controller.borrow_mut().begin_load(trigger);
        self.fetch(ticket);
    }

    fn select_period(&self, period: AnalyticsPeriod) {
        let ticket = self.controller.borrow_mut().select_period(period);
        match ticket {
            Some(ticket) => {
                self.retry_timer.borrow_mut().cancel();
                self.fetch(ticket);
            }
            None => debug!("Period {} already selected", period),
        }
    }

    fn fetch(&self, ticket: LoadTicket) {
        self.state.dispatch(DashboardAction::Loading(ticket.period));
        let handles = self.clone();
        spawn_local(async move {
            match get_analytics(ticket.period).await {
                Ok(payload) => handles.on_success(ticket, payload),
                Err(e) => {
                    error!("Analytics API error: {}", e);
                    handles.on_failure(ticket, &e);
                }
            }
        });
    }

    fn on_success(&self, ticket: LoadTicket, payload: AnalyticsPayload) {
        if self.controller.borrow_mut().on_success(ticket) {
            info!("Loaded analytics for {}", ticket.period);
            self.state.dispatch(DashboardAction::Loaded(payload));
        } else {
            debug!("Discarding superseded analytics response ({})", ticket.generation);
        }
    }

    fn on_failure(&self, ticket: LoadTicket, error: &SharedError) {
        let outcome = self.controller.borrow_mut().on_failure(ticket, error);
        match outcome {
            FailureOutcome::RetryAfter(delay) => {
                warn!("Retrying analytics load in {}ms", delay.as_millis());
                let handles = self.clone();
                self.retry_timer
                    .borrow_mut()
                    .schedule(delay, move || handles.start(LoadTrigger::RetryTimer));
            }
            FailureOutcome::ShowError => self.state.dispatch(DashboardAction::Failed),
            FailureOutcome::Stale => {
                debug!("Ignoring failure of superseded load ({})", ticket.generation)
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AnalyticsDashboardProps {}

#[function_component(AnalyticsDashboard)]
pub fn analytics_dashboard(_props: &AnalyticsDashboardProps) -> Html {
    let i18n = use_i18n();
    let state = use_reducer_eq(|| DashboardState {
        period: Config::default_period(),
        ..Default::default()
    });
    let controller = use_mut_ref(|| {
        DashboardController::new(Config::retry_policy(), Config::default_period())
    });
    let retry_timer = use_mut_ref(ScheduledTask::default);

    let handles = LoadHandles {
        controller,
        retry_timer,
        state: state.clone(),
    };

    {
        let handles = handles.clone();
        use_effect_with((), move |_| {
            handles.start(LoadTrigger::Initial);
            let retry_timer = handles.retry_timer.clone();
            move || retry_timer.borrow_mut().cancel()
        });
    }

    let on_select = {
        let handles = handles.clone();
        Callback::from(move |period: AnalyticsPeriod| handles.select_period(period))
    };
    let on_refresh = {
        let handles = handles.clone();
        Callback::from(move |_: MouseEvent| handles.start(LoadTrigger::Refresh))
    };
    let on_retry = {
        let handles = handles.clone();
        Callback::from(move |_: MouseEvent| handles.start(LoadTrigger::Retry))
    };

    let loading = state.phase == LoadPhase::Loading;
    let failed = state.phase == LoadPhase::Failed;
    let cards = state.payload.as_deref().map(stat_cards);
    let last_updated = state.payload.as_ref().and_then(|p| {
        last_updated_text(
            &i18n.t_or("analytics.lastUpdated", "Updated"),
            p.generated_at,
            &chrono::Local,
        )
    });

    html! {
        <div class="analytics-page">
            <header class="analytics-header">
                <h1>{ i18n.t_or("analytics.title", "Analytics") }</h1>
                <PeriodSelector active={state.period} on_select={on_select} />
                <button id="refresh-btn" type="button" class="refresh-btn" onclick={on_refresh}>
                    { i18n.t_or("analytics.refresh", "Refresh") }
                </button>
                <span id="last-updated" class="last-updated">{ last_updated.unwrap_or_default() }</span>
            </header>

            <div id="loading-state" class={classes!("loading-state", (!loading).then_some("hidden"))}>
                { i18n.t_or("analytics.loading", "Loading analytics...") }
            </div>

            <div id="error-state" class={classes!("error-state", (!failed).then_some("hidden"))}>
                <p>{ i18n.t_or("analytics.loadError", "Could not load analytics.") }</p>
                <button id="retry-btn" type="button" class="retry-btn" onclick={on_retry}>
                    { i18n.t_or("analytics.retry", "Retry") }
                </button>
            </div>

            <div class={classes!("stat-cards", (loading || failed).then_some("hidden"))}>
                { for StatCardKind::ALL.iter().enumerate().map(|(i, kind)| html! {
                    <StatCard
                        kind={*kind}
                        view={cards.as_ref().map(|c| c[i].clone())}
                        loading={loading}
                    />
                }) }
            </div>

            <section class="analytics-section">
                <h2>{ i18n.t_or("analytics.topPlaylists", "Top playlists") }</h2>
                <PlaylistList playlists={state.playlists.clone().unwrap_or_default()} />
            </section>

            <section class="analytics-section">
                <h2>{ i18n.t_or("analytics.gamesOverTime", "Games over time") }</h2>
                <ChartRenderer data={state.chart.clone().unwrap_or_default()} />
            </section>

            <section class="analytics-section">
                <h2>{ i18n.t_or("analytics.errorHealth", "System health") }</h2>
                <ErrorPanel stats={state.error_stats.clone().unwrap_or_default()} />
            </section>
        </div>
    }
}
