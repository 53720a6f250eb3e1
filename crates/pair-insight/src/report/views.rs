use super::charts::{GaugeGeometry, PieWedge};
use super::payload::{ApplicabilityStatus, FlexibleAction, Priority, Severity};
use super::scores::QualitativeLevel;
use crate::i18n::Language;
use serde::Serialize;

/// Radius used for the radial score gauges in the report header.
pub const GAUGE_RADIUS: f64 = 45.0;

/// Top-level score card. These always render, with neutral defaults when the
/// backing metric is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCardView {
    pub key: &'static str,
    pub label: String,
    pub score: u8,
    pub grade: String,
    pub gauge: GaugeGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_authority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographical_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
}

impl MetadataView {
    pub fn is_empty(&self) -> bool {
        self.policy_name.is_none()
            && self.issuing_authority.is_none()
            && self.effective_date.is_none()
            && self.geographical_scope.is_none()
            && self.policy_type.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObligationView {
    pub description: String,
    pub severity: Severity,
    pub severity_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenaltyView {
    pub violation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_consequences: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRiskView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<QualitativeLevel>,
    pub band_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSectionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<QualitativeLevel>,
    pub level_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub risk_factors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_risks: Vec<TopRiskView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionStepView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why_it_matters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_if_ignored: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSectionView {
    pub applicability: ApplicabilityStatus,
    pub applicability_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_for_owner: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_plan: Vec<ActionStepView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub immediate_actions: Vec<FlexibleAction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub short_term: Vec<FlexibleAction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub long_term: Vec<FlexibleAction>,
}

/// Who the policy applies to, under which conditions, and the exceptions.
/// Carried by the structured policy family as an object alongside the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicabilityDetailView {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub who_is_affected: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<String>,
}

impl ApplicabilityDetailView {
    pub fn is_empty(&self) -> bool {
        self.who_is_affected.is_empty() && self.conditions.is_empty() && self.exceptions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SustainabilityCardView {
    pub green_score: u8,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_saved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2_saved_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

/// Prioritized compliance action from the structured policy family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceActionView {
    pub action: String,
    pub priority: Priority,
    pub priority_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_effort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyReportView {
    pub language: Language,
    pub auto_fetched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicability_detail: Option<ApplicabilityDetailView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_documents: Vec<String>,
    pub score_cards: Vec<ScoreCardView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub obligations: Vec<ObligationView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub penalties: Vec<PenaltyView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compliance_actions: Vec<ComplianceActionView>,
    pub priority_chart: PriorityChartView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<SustainabilityCardView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<SchemeView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOverviewView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_trends: Vec<String>,
}

impl MarketOverviewView {
    pub fn is_empty(&self) -> bool {
        self.market_size.is_none() && self.growth_rate.is_none() && self.key_trends.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwotView {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opportunities: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub threats: Vec<String>,
}

impl SwotView {
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
            && self.weaknesses.is_empty()
            && self.opportunities.is_empty()
            && self.threats.is_empty()
    }
}

/// Qualitative market metric rendered as one bar of the metrics chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricBarView {
    pub key: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<QualitativeLevel>,
    pub level_label: String,
    pub magnitude: u8,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_share: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub action: String,
    pub priority: Priority,
    pub priority_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Priority distribution chart: bar widths plus pie wedges over the same
/// tallies. Always present; an empty list yields zero counts with the
/// denominator falling back to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityChartView {
    pub counts: PriorityCounts,
    pub total: usize,
    pub bar_fractions: Vec<f64>,
    pub wedges: Vec<PieWedge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorReportView {
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_overview: Option<MarketOverviewView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swot: Option<SwotView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_position: Option<String>,
    pub metric_bars: Vec<MetricBarView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competitors: Vec<CompetitorView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<RecommendationView>,
    pub priority_chart: PriorityChartView,
}

/// Canonical output of the assembler, one variant per report family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportView {
    Policy(PolicyReportView),
    Competitor(CompetitorReportView),
}
