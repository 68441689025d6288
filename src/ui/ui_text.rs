/// Every user-facing string in the dashboard, in one place.
pub struct UiText {
    pub controls_heading: &'static str,
    pub ticker_label: &'static str,
    pub ticker_hint: &'static str,
    pub interval_label: &'static str,
    pub period_label: &'static str,
    pub weight_label: &'static str,
    pub weight_helper_prefix: &'static str,
    pub weight_helper_suffix: &'static str,
    pub run_button: &'static str,
    pub running_button: &'static str,

    pub filter_heading: &'static str,
    pub signals_heading: &'static str,
    pub no_signals: &'static str,

    pub welcome_heading: &'static str,
    pub welcome_body: &'static str,
    pub loading_heading: &'static str,
    pub loading_body: &'static str,

    pub price_chart_title: &'static str,
    pub volume_chart_title: &'static str,
    pub no_bars: &'static str,
    pub legend_price: &'static str,
    pub legend_volume: &'static str,
    pub legend_absorption: &'static str,
    pub legend_vwap: &'static str,

    pub stat_score: &'static str,
    pub stat_activity: &'static str,
    pub stat_absorption: &'static str,
    pub stat_vwap: &'static str,
    pub stat_high: &'static str,
    pub stat_low: &'static str,
    pub count_mismatch_note: &'static str,

    pub detail_close: &'static str,
    pub notification_title: &'static str,
    pub notification_dismiss: &'static str,

    pub status_source: &'static str,
    pub status_idle: &'static str,
    pub status_loading: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    controls_heading: "Analysis",
    ticker_label: "Ticker",
    ticker_hint: "e.g. AAPL",
    interval_label: "Interval",
    period_label: "Period",
    weight_label: "Absorption weight",
    weight_helper_prefix: "VWAP signals get the remaining ",
    weight_helper_suffix: "%",
    run_button: "Analyze",
    running_button: "Analyzing...",

    filter_heading: "Filter",
    signals_heading: "Signals",
    no_signals: "No signals found",

    welcome_heading: "Hidden liquidity scanner",
    welcome_body: "Enter a ticker and press Analyze to look for absorption and VWAP snap-back signals.",
    loading_heading: "Running analysis...",
    loading_body: "Waiting for the backend",

    price_chart_title: "Price",
    volume_chart_title: "Volume",
    no_bars: "No price data in this analysis",
    legend_price: "Close",
    legend_volume: "Volume",
    legend_absorption: "Absorption Signal",
    legend_vwap: "VWAP Signal",

    stat_score: "Score",
    stat_activity: "Activity",
    stat_absorption: "Absorption",
    stat_vwap: "VWAP",
    stat_high: "High",
    stat_low: "Low",
    count_mismatch_note: "Reported counts differ from the signals received",

    detail_close: "Close",
    notification_title: "Analysis failed",
    notification_dismiss: "OK",

    status_source: "Source",
    status_idle: "Idle",
    status_loading: "Request in flight",
};
