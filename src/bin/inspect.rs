//! Runs one analysis without the GUI and prints what the dashboard would show.
//!
//! ```text
//! inspect --ticker AAPL --interval 5m --period 5d --filter absorption --detail 1
//! inspect --ticker AAPL --replay saved_response.json
//! ```

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result, anyhow, bail};
    use clap::Parser;
    use std::path::PathBuf;

    use liquidity_lens::analysis::{FilterState, SignalView, StatSummary, describe, normalize};
    use liquidity_lens::data::{request_analysis, select_backend};
    use liquidity_lens::domain::{
        AnalysisRequest, AnalysisResult, Interval, Period, Ticker, Weight,
    };
    use liquidity_lens::utils::format::{format_optional_volume, format_signal_time};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Print one liquidity analysis to the terminal")]
    struct Args {
        /// Symbol to analyze
        #[arg(long)]
        ticker: String,

        #[arg(long, default_value_t = Interval::default())]
        interval: Interval,

        #[arg(long, default_value_t = Period::default())]
        period: Period,

        /// Absorption weight in percent; VWAP gets the rest
        #[arg(long, default_value_t = Weight::default().get())]
        weight: u8,

        /// all, absorption or vwap
        #[arg(long, default_value_t = FilterState::All)]
        filter: FilterState,

        /// Also print the detail of the N-th listed signal (1-based)
        #[arg(long, value_name = "N")]
        detail: Option<usize>,

        #[arg(long)]
        backend_url: Option<String>,

        /// Read the response from a saved JSON file instead of the network
        #[arg(long, value_name = "FILE")]
        replay: Option<PathBuf>,
    }

    #[tokio::main]
    pub async fn run() -> Result<()> {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .parse_default_env()
            .init();

        let args = Args::parse();
        let ticker = Ticker::parse(&args.ticker).ok_or_else(|| anyhow!("ticker is empty"))?;
        let request = AnalysisRequest::new(
            ticker,
            args.interval,
            args.period,
            Weight::new(args.weight),
        );

        let backend = select_backend(args.backend_url.as_deref(), args.replay.as_deref());
        let result = request_analysis(backend.as_ref(), &request)
            .await
            .with_context(|| format!("analysis of {} failed", request.ticker))?;

        for line in render_report(&request, &result, args.filter, args.detail)? {
            println!("{}", line);
        }
        Ok(())
    }

    pub(crate) fn render_report(
        request: &AnalysisRequest,
        result: &AnalysisResult,
        filter: FilterState,
        detail: Option<usize>,
    ) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        let summary =
            StatSummary::from_result(&request.ticker, request.interval, request.period, result);
        lines.push(format!("{}  {}", summary.ticker, summary.subtitle));
        lines.push(format!(
            "Score {} ({} activity)",
            summary.score_text(),
            summary.activity
        ));
        lines.push(format!(
            "Absorption {}  VWAP {}  High {}  Low {}  Bars {}",
            summary.reported_absorption,
            summary.reported_vwap,
            summary.high_text(),
            summary.low_text(),
            summary.bar_count
        ));
        if summary.count_mismatch() {
            lines.push(format!(
                "Note: received {} absorption and {} VWAP signals",
                summary.absorption_signals, summary.vwap_signals
            ));
        }

        let view = SignalView::new(
            normalize(&result.absorption_signals, &result.vwap_signals),
            filter,
        );
        lines.push(String::new());
        lines.push(format!("Signals ({})", view.filter()));

        let visible = view.visible_signals();
        if visible.is_empty() {
            lines.push("No signals found".to_string());
        }
        for (position, (_, signal)) in visible.iter().enumerate() {
            lines.push(format!(
                "{:>3}. {:<4}  {:<16}  {:<28}  {}",
                position + 1,
                signal.kind().badge(),
                format_signal_time(&signal.time),
                signal.kind().summary(),
                format_optional_volume(signal.volume())
            ));
        }

        if let Some(n) = detail {
            let Some((_, signal)) = n.checked_sub(1).and_then(|i| visible.get(i)) else {
                bail!("--detail {} is out of range (1..={})", n, visible.len());
            };
            let detail = describe(signal);
            lines.push(String::new());
            lines.push(detail.title());
            for row in detail.rows() {
                lines.push(format!("  {:<13} {}", row.label, row.value));
            }
            lines.push(format!("  {}", detail.note()));
        }

        Ok(lines)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::native::render_report;
    use liquidity_lens::analysis::FilterState;
    use liquidity_lens::domain::{
        AnalysisRequest, AnalysisResult, Interval, Period, RawAbsorptionSignal, Ticker, Weight,
    };

    fn request() -> AnalysisRequest {
        AnalysisRequest::new(
            Ticker::parse("aapl").unwrap(),
            Interval::FiveMinutes,
            Period::OneDay,
            Weight::default(),
        )
    }

    fn scenario_a() -> AnalysisResult {
        AnalysisResult {
            score: 72.0,
            absorption_count: 1,
            vwap_count: 0,
            prices: vec![10.0, 10.5, 11.0],
            volumes: vec![900.0, 5_000.0, 1_100.0],
            times: vec![
                "2024-01-01T09:55:00Z".to_string(),
                "2024-01-01T10:00:00Z".to_string(),
                "2024-01-01T10:05:00Z".to_string(),
            ],
            absorption_signals: vec![RawAbsorptionSignal {
                index: 1,
                time: "2024-01-01T10:00:00Z".to_string(),
                volume: 5_000.0,
                avg_volume: 1_000.0,
                z_score: 4.0,
                price_change: 0.001,
            }],
            vwap_signals: vec![],
        }
    }

    #[test]
    fn report_lists_signals_and_detail() {
        let lines = render_report(&request(), &scenario_a(), FilterState::All, Some(1)).unwrap();
        assert_eq!(lines[0], "AAPL  5m • 1d");
        assert!(lines.iter().any(|l| l.contains("ABS") && l.contains("5K")));
        assert!(lines.iter().any(|l| l == "Absorption Signal"));
        assert!(lines.iter().any(|l| l.contains("5.0x normal")));
        assert!(lines.iter().any(|l| l.contains("0.100%")));
    }

    #[test]
    fn empty_filter_prints_explicit_line() {
        let lines = render_report(&request(), &scenario_a(), FilterState::VwapOnly, None).unwrap();
        assert!(lines.iter().any(|l| l == "No signals found"));
    }

    #[test]
    fn detail_out_of_range_is_an_error() {
        assert!(render_report(&request(), &scenario_a(), FilterState::All, Some(2)).is_err());
        assert!(render_report(&request(), &scenario_a(), FilterState::All, Some(0)).is_err());
    }
}
