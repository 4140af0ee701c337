//! Console reports over the optimizer's documents.
//!
//! Four independent reports: current parameters, optimization history,
//! parameter-change history and performance comparison. Each one tolerates
//! missing documents by printing a notice instead of failing.

use crate::config::DEFAULT_OPTIMIZER_COMMAND;
use crate::domain::errors::ReportError;
use crate::domain::formatting::{NOT_AVAILABLE, format_decimal, format_timestamp, format_value};
use crate::domain::optimization_log::OptimizationRun;
use crate::domain::performance_comparison::PerformanceComparison;
use crate::domain::repositories::{DataResult, OptimizationDataSource};
use crate::domain::strategy_parameters::StrategyParameters;
use std::io::Write;
use tracing::error;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

const RULE_WIDTH: usize = 70;
const MAX_PRIORITY_ACTIONS: usize = 2;
const MAX_CHANGES: usize = 3;

/// Which reports to render. An empty selection means all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSelection {
    pub parameters: bool,
    pub history: bool,
    pub param_history: bool,
    pub performance: bool,
}

impl ReportSelection {
    pub fn all() -> Self {
        Self {
            parameters: true,
            history: true,
            param_history: true,
            performance: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.parameters || self.history || self.param_history || self.performance)
    }

    /// Expands an empty selection to every report.
    pub fn or_all(self) -> Self {
        if self.is_empty() { Self::all() } else { self }
    }
}

/// Renders reports from a data source into a writer.
pub struct ReportPrinter<'a, S: OptimizationDataSource, W: Write> {
    source: &'a S,
    out: W,
    optimizer_command: String,
}

impl<'a, S: OptimizationDataSource, W: Write> ReportPrinter<'a, S, W> {
    pub fn new(source: &'a S, out: W) -> Self {
        Self {
            source,
            out,
            optimizer_command: DEFAULT_OPTIMIZER_COMMAND.to_string(),
        }
    }

    /// Command suggested when the optimization log does not exist yet.
    pub fn with_optimizer_command(mut self, command: impl Into<String>) -> Self {
        self.optimizer_command = command.into();
        self
    }

    /// Consumes the printer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders the selected reports in fixed order.
    ///
    /// Every selected report runs even if an earlier one fails; the first
    /// failure is returned.
    pub fn run(&mut self, selection: ReportSelection, limit: usize) -> Result<(), ReportError> {
        let selection = selection.or_all();
        let mut outcome = Ok(());

        if selection.parameters {
            outcome = outcome.and(Self::logged("parameters", self.show_parameters()));
        }
        if selection.history {
            outcome = outcome.and(Self::logged(
                "optimization history",
                self.show_optimization_history(limit),
            ));
        }
        if selection.param_history {
            outcome = outcome.and(Self::logged(
                "parameter history",
                self.show_parameter_history(limit),
            ));
        }
        if selection.performance {
            outcome = outcome.and(Self::logged("performance", self.show_performance()));
        }

        outcome
    }

    fn logged(report: &str, result: Result<(), ReportError>) -> Result<(), ReportError> {
        if let Err(e) = &result {
            error!("{} report failed: {}", report, e);
        }
        result
    }

    /// Current strategy parameters.
    pub fn show_parameters(&mut self) -> Result<(), ReportError> {
        let loaded = self.source.strategy_parameters();
        let Some(params) = self.unwrap_document(loaded)? else {
            writeln!(self.out, "❌ No parameters file found")?;
            writeln!(self.out, "   Parameters will be created on first paper trade")?;
            return Ok(());
        };

        self.print_banner("CURRENT STRATEGY PARAMETERS")?;
        self.print_stop_loss(&params)?;
        self.print_take_profit(&params)?;
        self.print_entry_strategy(&params)?;
        self.print_position_sizing(&params)?;
        self.print_filters(&params)?;

        writeln!(
            self.out,
            "\n📝 Last Updated: {}",
            format_timestamp(params.last_updated.as_deref())
        )?;
        writeln!(self.out, "📌 Version: {}", params.version)?;
        self.print_rule()
    }

    fn print_stop_loss(&mut self, params: &StrategyParameters) -> Result<(), ReportError> {
        let sl = &params.stop_loss;
        writeln!(self.out, "\n🛑 Stop Loss Settings:")?;
        writeln!(self.out, "   High Risk (7-10):  {:.1}%", sl.high_risk_pct * 100.0)?;
        writeln!(self.out, "   Medium Risk (4-6): {:.1}%", sl.medium_risk_pct * 100.0)?;
        writeln!(self.out, "   Low Risk (0-3):    {:.1}%", sl.low_risk_pct * 100.0)?;
        writeln!(self.out, "   Tech Multiplier:   {:.2}x", sl.tech_multiplier)?;
        writeln!(self.out, "   Viral Multiplier:  {:.2}x", sl.viral_multiplier)?;
        Ok(())
    }

    fn print_take_profit(&mut self, params: &StrategyParameters) -> Result<(), ReportError> {
        let Some(tp) = &params.take_profit else {
            return Ok(());
        };
        let tiers = tp.tiers();
        if tiers.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "\n🎯 Take Profit Ladders:")?;
        for (label, ladder) in tiers {
            writeln!(
                self.out,
                "   {:<13} TP1 {:.2}x ({:.0}%) | TP2 {:.2}x ({:.0}%) | TP3 {:.2}x ({:.0}%)",
                format!("{}:", label),
                ladder.tp1_mult,
                ladder.tp1_exit_pct * 100.0,
                ladder.tp2_mult,
                ladder.tp2_exit_pct * 100.0,
                ladder.tp3_mult,
                ladder.tp3_exit_pct * 100.0
            )?;
        }
        Ok(())
    }

    fn print_entry_strategy(&mut self, params: &StrategyParameters) -> Result<(), ReportError> {
        let Some(entry) = &params.entry_strategy else {
            return Ok(());
        };

        writeln!(self.out, "\n🚪 Entry Strategy:")?;
        writeln!(
            self.out,
            "   Viral Buy-Now Liquidity: {} SOL",
            entry.viral_meme_immediate_liquidity_threshold
        )?;
        writeln!(
            self.out,
            "   Tech Dip Liquidity:      {} SOL",
            entry.tech_wait_for_dip_liquidity_threshold
        )?;
        writeln!(
            self.out,
            "   Dip Max Wait:            {}h",
            entry.wait_for_dip_max_hours
        )?;
        writeln!(
            self.out,
            "   Dip Target:              {:.1}%",
            entry.wait_for_dip_target_pct * 100.0
        )?;
        Ok(())
    }

    fn print_position_sizing(&mut self, params: &StrategyParameters) -> Result<(), ReportError> {
        let ps = &params.position_sizing;
        writeln!(self.out, "\n💰 Position Sizing:")?;
        writeln!(self.out, "   Max Position:       {:.1}%", ps.max_position_pct * 100.0)?;
        writeln!(self.out, "   HIGH Confidence:    {:.2}x", ps.high_confidence_mult)?;
        writeln!(self.out, "   MEDIUM Confidence:  {:.2}x", ps.medium_confidence_mult)?;
        writeln!(self.out, "   LOW Confidence:     {:.2}x", ps.low_confidence_mult)?;
        if let Some(reduction) = ps.high_risk_reduction {
            writeln!(self.out, "   High Risk Cut:      {:.1}%", reduction * 100.0)?;
        }
        Ok(())
    }

    fn print_filters(&mut self, params: &StrategyParameters) -> Result<(), ReportError> {
        let filters = &params.filters;
        writeln!(self.out, "\n🔍 Filtering Rules:")?;
        writeln!(
            self.out,
            "   Min Confidence:     {}",
            filters
                .effective_min_confidence()
                .unwrap_or("None (all accepted)")
        )?;
        writeln!(self.out, "   Max Risk Score:     {}/10", filters.max_risk_score)?;
        writeln!(self.out, "   Min Liquidity:      {} SOL", filters.min_liquidity_sol)?;
        if let Some(types) = &filters.enabled_token_types {
            writeln!(self.out, "   Token Types:        {}", types.join(", "))?;
        }
        Ok(())
    }

    /// The last `limit` optimizer runs, newest first.
    pub fn show_optimization_history(&mut self, limit: usize) -> Result<(), ReportError> {
        let loaded = self.source.optimization_log();
        let Some(history) = self.unwrap_document(loaded)? else {
            writeln!(self.out, "❌ No optimization history found")?;
            writeln!(self.out, "   Run: {}", self.optimizer_command)?;
            return Ok(());
        };

        if history.is_empty() {
            writeln!(self.out, "📭 Optimization history is empty")?;
            return Ok(());
        }

        let recent = tail(&history, limit);
        self.print_banner(&format!(
            "OPTIMIZATION HISTORY (Last {} of {})",
            recent.len(),
            history.len()
        ))?;

        for (i, run) in recent.iter().rev().enumerate() {
            self.print_run(i + 1, run)?;
        }

        self.print_rule()
    }

    fn print_run(&mut self, index: usize, run: &OptimizationRun) -> Result<(), ReportError> {
        let analysis = &run.analysis;
        let application = &run.application;

        writeln!(
            self.out,
            "\n{}. {}",
            index,
            format_timestamp(run.timestamp.as_deref())
        )?;
        writeln!(self.out, "   Total Trades: {}", run.total_trades)?;
        writeln!(self.out, "   Patterns Found: {}", analysis.patterns.len())?;
        writeln!(self.out, "   Recommendations: {}", analysis.recommendations.len())?;
        writeln!(
            self.out,
            "   Applied: {} | Skipped: {}",
            application.applied, application.skipped
        )?;

        if !analysis.priority_actions.is_empty() {
            writeln!(self.out, "   Priority Actions:")?;
            for action in analysis.priority_actions.iter().take(MAX_PRIORITY_ACTIONS) {
                writeln!(self.out, "      - {}", format_value(action))?;
            }
        }

        if !application.changes.is_empty() {
            writeln!(self.out, "   Changes:")?;
            for change in application.changes.iter().take(MAX_CHANGES) {
                writeln!(
                    self.out,
                    "      - {}.{}: {} -> {}",
                    change.category.as_deref().unwrap_or("?"),
                    change.parameter.as_deref().unwrap_or("?"),
                    format_value(&change.old_value),
                    format_value(&change.new_value)
                )?;
            }
        }
        Ok(())
    }

    /// The last `limit` parameter snapshots, newest first.
    pub fn show_parameter_history(&mut self, limit: usize) -> Result<(), ReportError> {
        let loaded = self.source.parameter_history();
        let Some(history) = self.unwrap_document(loaded)? else {
            writeln!(self.out, "❌ No parameter history found")?;
            writeln!(self.out, "   Run: {}", self.optimizer_command)?;
            return Ok(());
        };

        if history.is_empty() {
            writeln!(self.out, "📭 Parameter history is empty")?;
            return Ok(());
        }

        let recent = tail(&history, limit);
        self.print_banner(&format!(
            "PARAMETER CHANGE HISTORY (Last {} of {})",
            recent.len(),
            history.len()
        ))?;

        for (i, entry) in recent.iter().rev().enumerate() {
            writeln!(
                self.out,
                "\n{}. {}",
                i + 1,
                format_timestamp(entry.timestamp.as_deref())
            )?;
            writeln!(
                self.out,
                "   Reason: {}",
                entry.reason.as_deref().unwrap_or(NOT_AVAILABLE)
            )?;
            if let Some(version) = entry.snapshot_version() {
                writeln!(self.out, "   Version: {}", version)?;
            }
        }

        self.print_rule()
    }

    /// Journal totals against the optimizer timeline.
    pub fn show_performance(&mut self) -> Result<(), ReportError> {
        let journal = self.source.trading_journal();
        let journal = self.unwrap_document(journal)?;
        let log = self.source.optimization_log();
        let log = self.unwrap_document(log)?;

        let (Some(journal), Some(log)) = (journal, log) else {
            writeln!(self.out, "❌ Need both trading journal and optimization log")?;
            return Ok(());
        };

        let cmp = match PerformanceComparison::from_records(&journal, &log) {
            Ok(cmp) => cmp,
            Err(e) => {
                writeln!(self.out, "❌ {}", e)?;
                return Err(e.into());
            }
        };
        let Some(cmp) = cmp else {
            writeln!(self.out, "📭 No optimizations yet")?;
            return Ok(());
        };

        self.print_banner("PERFORMANCE COMPARISON")?;

        writeln!(self.out, "\n📊 Overall:")?;
        writeln!(self.out, "   Total Trades: {}", cmp.total_trades)?;
        writeln!(self.out, "   Total Optimizations: {}", cmp.optimization_count)?;
        writeln!(
            self.out,
            "   Current Win Rate: {}%",
            format_decimal(cmp.win_rate_pct, 1)
        )?;
        writeln!(self.out, "   Total P&L: ${}", format_decimal(cmp.total_pnl, 2))?;

        writeln!(self.out, "\n📈 Timeline:")?;
        writeln!(
            self.out,
            "   First Optimization: After {} trades",
            cmp.trades_at_first_optimization
        )?;
        writeln!(
            self.out,
            "   Last Optimization: After {} trades",
            cmp.trades_at_last_optimization
        )?;
        writeln!(
            self.out,
            "   Trades Since Last: {}",
            cmp.trades_since_last_optimization
        )?;

        if cmp.has_multiple_optimizations() {
            writeln!(self.out, "\n💡 Insights:")?;
            writeln!(
                self.out,
                "   Optimizations have been applied {} times",
                cmp.optimization_count
            )?;
            writeln!(self.out, "   Parameters are continuously adapting to performance")?;
            writeln!(
                self.out,
                "   Check individual optimization logs for specific improvements"
            )?;
        }

        self.print_rule()
    }

    /// Prints a one-line notice for a document that failed to load.
    fn unwrap_document<T>(&mut self, result: DataResult<T>) -> Result<Option<T>, ReportError> {
        match result {
            Ok(document) => Ok(document),
            Err(e) => {
                writeln!(self.out, "❌ {}", e)?;
                Err(e.into())
            }
        }
    }

    fn print_banner(&mut self, title: &str) -> Result<(), ReportError> {
        writeln!(self.out, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out, "{}", title)?;
        self.print_rule()
    }

    fn print_rule(&mut self) -> Result<(), ReportError> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }
}

/// Last `limit` items in storage order.
fn tail<T>(items: &[T], limit: usize) -> &[T] {
    &items[items.len().saturating_sub(limit)..]
}
