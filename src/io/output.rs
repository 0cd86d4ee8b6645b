//! Report writers
//!
//! One writer per output format behind a shared trait; the CLI picks the
//! writer, the views stay format-agnostic.

use std::io::Write;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::{Deserialize, Serialize};

use crate::core::types::{
    Document, ForecastPoint, ForecastScenario, MaintenanceRequest, Portfolio, Tenant,
};
use crate::io::style::Styled;
use crate::portfolio::benchmark::ComparisonReport;
use crate::portfolio::compliance::{derive_status, expiry_urgency, ComplianceSummary};
use crate::portfolio::kpi::PortfolioSummary;
use crate::portfolio::{compliance, kpi};
use crate::simulation::esg::EsgSimulationResult;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// A top-performer line on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub name: String,
    pub roi: f64,
    pub occupancy: f64,
}

/// Everything the dashboard view shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub summary: PortfolioSummary,
    pub compliance: ComplianceSummary,
    pub open_requests: usize,
    pub unread_notifications: usize,
    pub top_performers: Vec<TopPerformer>,
}

impl DashboardReport {
    /// Assemble the dashboard from a portfolio snapshot
    pub fn from_portfolio(portfolio: &Portfolio) -> Self {
        let open_requests = portfolio
            .requests
            .iter()
            .filter(|r| r.status != crate::core::types::RequestStatus::Completed)
            .count();

        Self {
            summary: kpi::summarize(&portfolio.buildings, &portfolio.tenants),
            compliance: compliance::summarize(&portfolio.documents),
            open_requests,
            unread_notifications: portfolio.notifications.iter().filter(|n| !n.read).count(),
            top_performers: kpi::top_performers(&portfolio.buildings, 3)
                .into_iter()
                .map(|b| TopPerformer {
                    name: b.name.clone(),
                    roi: b.roi,
                    occupancy: b.occupancy,
                })
                .collect(),
        }
    }
}

/// A completed forecast run ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRun {
    pub scenario: ForecastScenario,
    pub series: Vec<ForecastPoint>,
}

/// Writer over one output format
pub trait ReportWriter {
    fn write_dashboard(&mut self, report: &DashboardReport) -> Result<()>;
    fn write_simulation(&mut self, result: &EsgSimulationResult) -> Result<()>;
    fn write_forecast(&mut self, run: &ForecastRun) -> Result<()>;
    fn write_tenants(&mut self, tenants: &[Tenant]) -> Result<()>;
    fn write_documents(&mut self, documents: &[Document]) -> Result<()>;
    fn write_maintenance(&mut self, requests: &[MaintenanceRequest]) -> Result<()>;
    fn write_comparison(&mut self, report: &ComparisonReport) -> Result<()>;
}

/// Build the writer for a format
pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport) -> Result<()> {
        self.emit(report)
    }

    fn write_simulation(&mut self, result: &EsgSimulationResult) -> Result<()> {
        self.emit(result)
    }

    fn write_forecast(&mut self, run: &ForecastRun) -> Result<()> {
        self.emit(run)
    }

    fn write_tenants(&mut self, tenants: &[Tenant]) -> Result<()> {
        self.emit(&tenants)
    }

    fn write_documents(&mut self, documents: &[Document]) -> Result<()> {
        self.emit(&documents)
    }

    fn write_maintenance(&mut self, requests: &[MaintenanceRequest]) -> Result<()> {
        self.emit(&requests)
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> Result<()> {
        self.emit(report)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport) -> Result<()> {
        writeln!(self.writer, "# Portfolio Dashboard")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Key Figures")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Occupancy: {:.1}%",
            report.summary.average_occupancy
        )?;
        writeln!(
            self.writer,
            "- Monthly Rental Income: {:.1}M",
            report.summary.total_rental_income
        )?;
        writeln!(
            self.writer,
            "- Total Asset Value: {:.0}M",
            report.summary.total_asset_value
        )?;
        writeln!(
            self.writer,
            "- ESG Score: {:.0}/100",
            report.summary.average_esg_score
        )?;
        writeln!(
            self.writer,
            "- High Churn-Risk Tenants: {}",
            report.summary.high_churn_risk_tenants
        )?;
        writeln!(self.writer, "- Open Maintenance Requests: {}", report.open_requests)?;
        writeln!(
            self.writer,
            "- Compliance: {} valid, {} upcoming, {} expired",
            report.compliance.valid, report.compliance.upcoming, report.compliance.expired
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Top Performers")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Building | ROI | Occupancy |")?;
        writeln!(self.writer, "|----------|-----|-----------|")?;
        for performer in &report.top_performers {
            writeln!(
                self.writer,
                "| {} | {:.1}% | {:.0}% |",
                performer.name, performer.roi, performer.occupancy
            )?;
        }
        Ok(())
    }

    fn write_simulation(&mut self, result: &EsgSimulationResult) -> Result<()> {
        writeln!(self.writer, "# Retrofit Simulation")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Scenario: {} | Certification: {}",
            result.scenario.display_name(),
            result.certification
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| CO2 Reduction | {:.1} t/yr |", result.co2_reduction)?;
        writeln!(self.writer, "| ROI | {:.1}% |", result.roi)?;
        writeln!(self.writer, "| Payback Period | {:.1} yrs |", result.payback_years)?;
        writeln!(
            self.writer,
            "| ESG Score Improvement | +{:.1} |",
            result.esg_score_improvement
        )?;
        writeln!(self.writer, "| Energy Savings | {:.1}% |", result.energy_savings)?;
        writeln!(self.writer, "| Water Savings | {:.1}% |", result.water_savings)?;
        writeln!(self.writer, "| Waste Reduction | {:.1}% |", result.waste_reduction)?;
        writeln!(
            self.writer,
            "| Market Value Impact | {:.0} |",
            result.market_value_impact
        )?;
        writeln!(
            self.writer,
            "| Operational Cost Savings | {:.0}/yr |",
            result.operational_cost_savings
        )?;
        writeln!(
            self.writer,
            "| Social Impact Score | {:.1} |",
            result.social_impact_score
        )?;
        writeln!(
            self.writer,
            "| Implementation Window | {} |",
            result.implementation_window
        )?;
        Ok(())
    }

    fn write_forecast(&mut self, run: &ForecastRun) -> Result<()> {
        writeln!(
            self.writer,
            "# Revenue Forecast ({} Scenario)",
            run.scenario.display_name()
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Month | Actual | Predicted | Lower | Upper | Market Avg |"
        )?;
        writeln!(
            self.writer,
            "|-------|--------|-----------|-------|-------|------------|"
        )?;
        for point in &run.series {
            let actual = point
                .actual
                .map_or_else(|| "-".to_string(), |a| format!("{a:.1}"));
            writeln!(
                self.writer,
                "| {} | {} | {:.1} | {:.1} | {:.1} | {:.1} |",
                point.month,
                actual,
                point.predicted,
                point.lower_bound,
                point.upper_bound,
                point.market_avg
            )?;
        }
        Ok(())
    }

    fn write_tenants(&mut self, tenants: &[Tenant]) -> Result<()> {
        writeln!(self.writer, "# Tenants")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tenant | Sector | Lease End | Churn Risk | Revenue |")?;
        writeln!(self.writer, "|--------|--------|-----------|------------|---------|")?;
        for tenant in tenants {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {:.1}M |",
                tenant.name,
                tenant.sector,
                tenant.lease_end,
                tenant.churn_risk.display_name(),
                tenant.revenue
            )?;
        }
        Ok(())
    }

    fn write_documents(&mut self, documents: &[Document]) -> Result<()> {
        writeln!(self.writer, "# Documents & Compliance")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Document | Type | Building | Status | Expires | Days |")?;
        writeln!(self.writer, "|----------|------|----------|--------|---------|------|")?;
        for document in documents {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                document.name,
                document.kind.display_name(),
                document.building,
                derive_status(document.days_to_expiry).display_name(),
                document.expiry_date,
                document.days_to_expiry
            )?;
        }
        Ok(())
    }

    fn write_maintenance(&mut self, requests: &[MaintenanceRequest]) -> Result<()> {
        writeln!(self.writer, "# Maintenance Requests")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Building | Unit | Issue | Priority | Status | Assignee |")?;
        writeln!(self.writer, "|----------|------|-------|----------|--------|----------|")?;
        for request in requests {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                request.building,
                request.unit,
                request.issue,
                request.priority.display_name(),
                request.status.display_name(),
                request.assignee
            )?;
        }
        Ok(())
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> Result<()> {
        writeln!(
            self.writer,
            "# Portfolio Comparison: {}",
            report.metric.display_name()
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Industry average: {}{unit} | Top performer: {}{unit}",
            report.benchmark.industry,
            report.benchmark.top_performer,
            unit = report.metric.unit()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Building | Value | Standing |")?;
        writeln!(self.writer, "|----------|-------|----------|")?;
        for row in &report.rows {
            writeln!(
                self.writer,
                "| {} | {}{} | {} |",
                row.name,
                row.value,
                report.metric.unit(),
                row.tier.label()
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport) -> Result<()> {
        writeln!(self.writer, "Portfolio Dashboard")?;
        writeln!(self.writer)?;

        let mut table = Self::table();
        table.set_header(vec!["KPI", "Value"]);
        table.add_row(vec![
            "Occupancy".to_string(),
            format!("{:.1}%", report.summary.average_occupancy),
        ]);
        table.add_row(vec![
            "Monthly Rental Income".to_string(),
            format!("{:.1}M", report.summary.total_rental_income),
        ]);
        table.add_row(vec![
            "Total Asset Value".to_string(),
            format!("{:.0}M", report.summary.total_asset_value),
        ]);
        table.add_row(vec![
            "ESG Score".to_string(),
            format!("{:.0}/100", report.summary.average_esg_score),
        ]);
        table.add_row(vec![
            "High Churn-Risk Tenants".to_string(),
            report.summary.high_churn_risk_tenants.to_string(),
        ]);
        table.add_row(vec![
            "Open Maintenance Requests".to_string(),
            report.open_requests.to_string(),
        ]);
        table.add_row(vec![
            "Unread Notifications".to_string(),
            report.unread_notifications.to_string(),
        ]);
        writeln!(self.writer, "{table}")?;

        writeln!(self.writer)?;
        writeln!(self.writer, "Top Performers")?;
        let mut top = Self::table();
        top.set_header(vec!["Building", "ROI", "Occupancy"]);
        for performer in &report.top_performers {
            top.add_row(vec![
                performer.name.clone(),
                format!("{:.1}%", performer.roi),
                format!("{:.0}%", performer.occupancy),
            ]);
        }
        writeln!(self.writer, "{top}")?;
        Ok(())
    }

    fn write_simulation(&mut self, result: &EsgSimulationResult) -> Result<()> {
        writeln!(
            self.writer,
            "Retrofit Simulation ({} scenario)",
            result.scenario.display_name()
        )?;
        writeln!(self.writer)?;

        let mut table = Self::table();
        table.set_header(vec!["Metric", "Value"]);
        table.add_row(vec![
            "CO2 Reduction".to_string(),
            format!("{:.1} t/yr", result.co2_reduction),
        ]);
        table.add_row(vec!["ROI".to_string(), format!("{:.1}%", result.roi)]);
        table.add_row(vec![
            "Payback Period".to_string(),
            format!("{:.1} yrs", result.payback_years),
        ]);
        table.add_row(vec![
            "ESG Score Improvement".to_string(),
            format!("+{:.1}", result.esg_score_improvement),
        ]);
        table.add_row(vec![
            "Certification".to_string(),
            result.certification.to_string(),
        ]);
        table.add_row(vec![
            "Energy Savings".to_string(),
            format!("{:.1}%", result.energy_savings),
        ]);
        table.add_row(vec![
            "Water Savings".to_string(),
            format!("{:.1}%", result.water_savings),
        ]);
        table.add_row(vec![
            "Waste Reduction".to_string(),
            format!("{:.1}%", result.waste_reduction),
        ]);
        table.add_row(vec![
            "Market Value Impact".to_string(),
            format!("{:.0}", result.market_value_impact),
        ]);
        table.add_row(vec![
            "Operational Cost Savings".to_string(),
            format!("{:.0}/yr", result.operational_cost_savings),
        ]);
        table.add_row(vec![
            "Tenant Attraction".to_string(),
            format!("+{:.1}", result.tenant_attraction_improvement),
        ]);
        table.add_row(vec![
            "Social Impact Score".to_string(),
            format!("{:.1}", result.social_impact_score),
        ]);
        table.add_row(vec![
            "Compliance Risk Reduction".to_string(),
            format!("{:.1}%", result.compliance_risk_reduction),
        ]);
        table.add_row(vec![
            "Maintenance Cost Reduction".to_string(),
            format!("{:.1}%", result.maintenance_cost_reduction),
        ]);
        table.add_row(vec![
            "Implementation Window".to_string(),
            result.implementation_window.clone(),
        ]);
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_forecast(&mut self, run: &ForecastRun) -> Result<()> {
        writeln!(
            self.writer,
            "Revenue Forecast ({} scenario)",
            run.scenario.display_name()
        )?;
        writeln!(self.writer)?;

        let mut table = Self::table();
        table.set_header(vec!["Month", "Actual", "Predicted", "Lower", "Upper", "Market"]);
        for point in &run.series {
            table.add_row(vec![
                point.month.clone(),
                point
                    .actual
                    .map_or_else(|| "-".to_string(), |a| format!("{a:.1}")),
                format!("{:.1}", point.predicted),
                format!("{:.1}", point.lower_bound),
                format!("{:.1}", point.upper_bound),
                format!("{:.1}", point.market_avg),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_tenants(&mut self, tenants: &[Tenant]) -> Result<()> {
        let mut table = Self::table();
        table.set_header(vec!["Tenant", "Sector", "Lease End", "Churn Risk", "Revenue"]);
        for tenant in tenants {
            table.add_row(vec![
                tenant.name.clone(),
                tenant.sector.clone(),
                tenant.lease_end.to_string(),
                tenant
                    .churn_risk
                    .paint(tenant.churn_risk.display_name())
                    .to_string(),
                format!("{:.1}M", tenant.revenue),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_documents(&mut self, documents: &[Document]) -> Result<()> {
        let mut table = Self::table();
        table.set_header(vec!["Document", "Type", "Building", "Status", "Days"]);
        for document in documents {
            let status = derive_status(document.days_to_expiry);
            let urgency = expiry_urgency(document.days_to_expiry);
            table.add_row(vec![
                document.name.clone(),
                document.kind.display_name().to_string(),
                document.building.clone(),
                status.paint(status.display_name()).to_string(),
                urgency.paint(&document.days_to_expiry.to_string()).to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_maintenance(&mut self, requests: &[MaintenanceRequest]) -> Result<()> {
        let mut table = Self::table();
        table.set_header(vec!["Building", "Unit", "Issue", "Priority", "Status", "Assignee"]);
        for request in requests {
            table.add_row(vec![
                request.building.clone(),
                request.unit.clone(),
                request.issue.clone(),
                request
                    .priority
                    .paint(request.priority.display_name())
                    .to_string(),
                request.status.paint(request.status.display_name()).to_string(),
                request.assignee.clone(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_comparison(&mut self, report: &ComparisonReport) -> Result<()> {
        writeln!(
            self.writer,
            "Portfolio Comparison: {} (industry {:.1}{unit}, top {:.1}{unit})",
            report.metric.display_name(),
            report.benchmark.industry,
            report.benchmark.top_performer,
            unit = report.metric.unit()
        )?;
        writeln!(self.writer)?;

        let mut table = Self::table();
        table.set_header(vec!["Building", "Value", "Standing", "vs Top"]);
        for row in &report.rows {
            table.add_row(vec![
                row.name.clone(),
                format!("{:.1}{}", row.value, report.metric.unit()),
                row.tier.paint(row.tier.label()).to_string(),
                format!("{:.0}%", row.ratio_to_top * 100.0),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_json_dashboard_round_trips() {
        let portfolio = data::sample_portfolio();
        let report = DashboardReport::from_portfolio(&portfolio);

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_dashboard(&report).unwrap();

        let parsed: DashboardReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_dashboard_counts() {
        let portfolio = data::sample_portfolio();
        let report = DashboardReport::from_portfolio(&portfolio);

        assert_eq!(report.open_requests, 5); // none completed in the sample set
        assert_eq!(report.unread_notifications, 2);
        assert_eq!(report.top_performers.len(), 3);
        assert_eq!(report.top_performers[0].name, "Central Park Towers");
    }

    #[test]
    fn test_markdown_tenants_has_table_header() {
        let tenants = data::sample_tenants();
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_tenants(&tenants).unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("| Tenant | Sector |"));
        assert!(rendered.contains("Emirates NBD"));
    }
}
