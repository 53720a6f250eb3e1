use super::charts::{bar_fractions, gauge_geometry, pie_wedges, priority_bar_fractions, BarEntry};
use super::payload::{
    items, number, number_any, object, string_list, text, text_any, ApplicabilityStatus,
    FlexibleAction, Priority, Severity,
};
use super::scores::{bounded_score, profitability_score, qualitative_magnitude, QualitativeLevel};
use super::validity::display_text;
use super::views::{
    ActionStepView, ApplicabilityDetailView, CompetitorReportView, CompetitorView,
    ComplianceActionView, MarketOverviewView, MetadataView, MetricBarView, ObligationView,
    PenaltyView, PlanSectionView, PolicyReportView,
    PriorityChartView, PriorityCounts, RecommendationView, ReportView, RiskSectionView,
    SchemeView, ScoreCardView, SustainabilityCardView, SwotView, TopRiskView, GAUGE_RADIUS,
};
use crate::i18n::{translate_in, Language};
use serde_json::Value;
use tracing::debug;

/// Which payload family a raw analysis belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Policy,
    Competitor,
}

/// The two shapes the policy backend emits for conceptually the same
/// report. Neither is authoritative; both normalize into one view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyShape {
    /// `policy_metadata` / `risk_assessment` / `compliance_plan` family.
    Structured,
    /// `risk_score` / `sustainability` / `profitability` scoring family.
    Scored,
}

fn detect_policy_shape(payload: &Value) -> PolicyShape {
    if payload.get("risk_score").is_some() || payload.get("sustainability").is_some() {
        PolicyShape::Scored
    } else {
        PolicyShape::Structured
    }
}

/// Assembles a raw analysis payload into the canonical view model for the
/// requested report family. Total over any JSON-like input: missing or
/// mistyped sections degrade to documented defaults, never errors.
pub fn assemble(payload: &Value, kind: ReportKind, language: Language) -> ReportView {
    match kind {
        ReportKind::Policy => ReportView::Policy(assemble_policy(payload, language)),
        ReportKind::Competitor => ReportView::Competitor(assemble_competitor(payload, language)),
    }
}

pub fn assemble_policy(payload: &Value, language: Language) -> PolicyReportView {
    let shape = detect_policy_shape(payload);
    debug!(?shape, language = language.code(), "assembling policy report");

    let metadata = build_metadata(payload);
    let applicability_detail = build_applicability_detail(payload);
    let required_documents = string_list(payload, "required_documents");
    let score_cards = build_score_cards(payload, shape, language);
    let obligations = build_obligations(payload, language);
    let penalties = build_penalties(payload);
    let compliance_actions = build_compliance_actions(payload, language);
    let priority_chart = build_priority_chart(items(payload, "compliance_actions"), language);
    let risk = build_risk_section(payload, shape, language);
    let plan = build_plan_section(payload, language);
    let sustainability = build_sustainability_card(payload);
    let schemes = build_schemes(payload);
    let auto_fetched = text(payload, "source")
        .map(|source| source.eq_ignore_ascii_case("auto-fetched"))
        .unwrap_or(false);

    PolicyReportView {
        language,
        auto_fetched,
        metadata,
        applicability_detail,
        required_documents,
        score_cards,
        obligations,
        penalties,
        compliance_actions,
        priority_chart,
        risk,
        plan,
        sustainability,
        schemes,
    }
}

pub fn assemble_competitor(payload: &Value, language: Language) -> CompetitorReportView {
    let market_overview = build_market_overview(payload);
    let swot = build_swot(payload);

    let metrics = payload.get("market_metrics");
    let estimated_position = metrics.and_then(|m| text(m, "your_estimated_position"));
    let metric_bars = metrics
        .filter(|value| value.as_object().map_or(false, |map| !map.is_empty()))
        .map(|value| build_metric_bars(value, language))
        .unwrap_or_default();

    let competitors = items(payload, "key_competitors")
        .iter()
        .filter_map(|entry| {
            let name = text(entry, "name")?;
            Some(CompetitorView {
                name,
                competitor_type: text(entry, "type"),
                market_share: text(entry, "market_share"),
                strengths: string_list(entry, "strengths"),
                weaknesses: string_list(entry, "weaknesses"),
            })
        })
        .collect::<Vec<_>>();

    let recommendations = items(payload, "recommendations")
        .iter()
        .filter_map(|entry| {
            let action = text(entry, "action")?;
            let priority = Priority::from_raw(text(entry, "priority").as_deref());
            Some(RecommendationView {
                action,
                priority,
                priority_label: translate_in(language, priority.label_key()).to_string(),
                expected_impact: text(entry, "expected_impact"),
                timeframe: text(entry, "timeframe"),
            })
        })
        .collect::<Vec<_>>();

    let priority_chart = build_priority_chart(items(payload, "recommendations"), language);

    CompetitorReportView {
        language,
        market_overview,
        swot,
        estimated_position,
        metric_bars,
        competitors,
        recommendations,
        priority_chart,
    }
}

fn build_metadata(payload: &Value) -> Option<MetadataView> {
    let meta = payload.get("policy_metadata")?;
    let view = MetadataView {
        policy_name: text(meta, "policy_name"),
        issuing_authority: text(meta, "issuing_authority"),
        effective_date: text(meta, "effective_date"),
        geographical_scope: text(meta, "geographical_scope"),
        policy_type: text(meta, "policy_type"),
    };

    if view.is_empty() {
        None
    } else {
        Some(view)
    }
}

/// The structured family's `applicability` object. The Scored family reuses
/// the same key for a bare status string, which feeds the plan section
/// instead.
fn build_applicability_detail(payload: &Value) -> Option<ApplicabilityDetailView> {
    let detail = payload.get("applicability")?;
    if !detail.is_object() {
        return None;
    }

    let view = ApplicabilityDetailView {
        who_is_affected: listed(detail, "who_is_affected"),
        conditions: listed(detail, "conditions"),
        exceptions: listed(detail, "exceptions"),
    };

    if view.is_empty() {
        None
    } else {
        Some(view)
    }
}

/// Field that may hold one displayable string or a list of them.
fn listed(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(entry @ Value::String(_)) => display_text(entry).into_iter().collect(),
        _ => string_list(value, key),
    }
}

fn build_score_cards(payload: &Value, shape: PolicyShape, language: Language) -> Vec<ScoreCardView> {
    let metric = |section: &str, keys: &[&str]| {
        payload.get(section).and_then(|value| number_any(value, keys))
    };

    let (risk, sustainability, profitability, ethics) = match shape {
        PolicyShape::Scored => (
            bounded_score(metric("risk_score", &["overall_score", "score"])),
            bounded_score(metric("sustainability", &["green_score"])),
            profitability_score(metric("profitability", &["roi_multiplier"])),
            bounded_score(metric("ethics", &["overall_score"])),
        ),
        // The structured family carries qualitative risk only; numeric
        // scores default to 0 and the cards render with neutral gauges.
        PolicyShape::Structured => (0, 0, 0, 0),
    };

    let grade = payload
        .get("sustainability")
        .and_then(|s| text(s, "grade"))
        .unwrap_or_else(|| "\u{2014}".to_string());

    let card = |key: &'static str, label_key: &str, score: u8, grade: String| ScoreCardView {
        key,
        label: translate_in(language, label_key).to_string(),
        score,
        grade,
        gauge: gauge_geometry(GAUGE_RADIUS, score),
    };

    vec![
        card("risk", "risk_score", risk, "\u{2014}".to_string()),
        card("sustainability", "sustainability", sustainability, grade),
        card("profitability", "profitability", profitability, "\u{2014}".to_string()),
        card("ethics", "ethics", ethics, "\u{2014}".to_string()),
    ]
}

fn build_obligations(payload: &Value, language: Language) -> Vec<ObligationView> {
    let entries = if payload.get("obligations").is_some() {
        items(payload, "obligations")
    } else {
        items(payload, "compliance_obligations")
    };

    entries
        .iter()
        .filter_map(|entry| {
            let description = match entry {
                Value::String(_) => display_text(entry),
                _ => text_any(entry, &["description", "obligation", "action"]),
            }?;
            let severity =
                Severity::from_raw(text_any(entry, &["severity", "severity_if_ignored"]).as_deref());
            Some(ObligationView {
                description,
                severity,
                severity_label: translate_in(language, severity.label_key()).to_string(),
                deadline: text(entry, "deadline"),
            })
        })
        .collect()
}

fn build_penalties(payload: &Value) -> Vec<PenaltyView> {
    items(payload, "penalties")
        .iter()
        .filter_map(|entry| {
            // `violation` is the display anchor; entries without one are
            // suppressed rather than rendered half-empty.
            let violation = text(entry, "violation")?;
            Some(PenaltyView {
                violation,
                penalty_amount: text(entry, "penalty_amount"),
                other_consequences: text(entry, "other_consequences"),
            })
        })
        .collect()
}

fn build_compliance_actions(payload: &Value, language: Language) -> Vec<ComplianceActionView> {
    items(payload, "compliance_actions")
        .iter()
        .filter_map(|entry| {
            let action = text_any(entry, &["action", "step", "task"])?;
            let priority = Priority::from_raw(text(entry, "priority").as_deref());
            Some(ComplianceActionView {
                action,
                priority,
                priority_label: translate_in(language, priority.label_key()).to_string(),
                estimated_effort: text(entry, "estimated_effort"),
            })
        })
        .collect()
}

fn build_risk_section(
    payload: &Value,
    shape: PolicyShape,
    language: Language,
) -> Option<RiskSectionView> {
    let source_key = match shape {
        PolicyShape::Structured => "risk_assessment",
        PolicyShape::Scored => "risk_score",
    };
    let risk = payload.get(source_key)?;
    if object(payload, source_key).map_or(true, |map| map.is_empty()) {
        return None;
    }

    let level = text_any(risk, &["overall_risk_level", "overall_band"])
        .as_deref()
        .and_then(QualitativeLevel::from_raw);
    let level_label = level
        .map(|l| translate_in(language, l.label_key()).to_string())
        .unwrap_or_else(|| "\u{2014}".to_string());

    let top_risks = items(risk, "top_risks")
        .iter()
        .filter_map(|entry| {
            let name = text_any(entry, &["name", "obligation_name"])?;
            let band = text_any(entry, &["band", "risk_band"])
                .as_deref()
                .and_then(QualitativeLevel::from_raw);
            Some(TopRiskView {
                name,
                hint: text_any(entry, &["hint", "remediation_hint"]),
                band,
                band_label: band
                    .map(|b| translate_in(language, b.label_key()).to_string())
                    .unwrap_or_else(|| "\u{2014}".to_string()),
                days_remaining: number(entry, "days_remaining").map(|d| d.round() as i64),
            })
        })
        .collect();

    Some(RiskSectionView {
        level,
        level_label,
        reasoning: text(risk, "reasoning"),
        risk_factors: string_list(risk, "risk_factors"),
        top_risks,
    })
}

fn build_plan_section(payload: &Value, language: Language) -> Option<PlanSectionView> {
    let plan_present = object(payload, "compliance_plan").map_or(false, |map| !map.is_empty());
    // The Scored family may carry a bare applicability string with no plan
    // object at all; the status still surfaces, with empty action lists.
    let fallback_status = payload.get("applicability").and_then(display_text);
    if !plan_present && fallback_status.is_none() {
        return None;
    }

    static NO_PLAN: Value = Value::Null;
    let plan = payload.get("compliance_plan").unwrap_or(&NO_PLAN);
    let status_raw = text(plan, "applicability_status").or(fallback_status);
    let applicability = ApplicabilityStatus::from_raw(status_raw.as_deref());

    let action_plan = items(plan, "action_plan")
        .iter()
        .filter_map(|entry| {
            let action = text(entry, "action")?;
            Some(ActionStepView {
                step_number: number(entry, "step_number").map(|n| n.round().max(0.0) as u32),
                action,
                why_it_matters: text(entry, "why_it_matters"),
                deadline: text(entry, "deadline"),
                risk_if_ignored: text(entry, "risk_if_ignored"),
            })
        })
        .collect();

    Some(PlanSectionView {
        applicability,
        applicability_label: translate_in(language, applicability.label_key()).to_string(),
        summary_for_owner: text(plan, "summary_for_owner"),
        action_plan,
        immediate_actions: staged_actions(plan, &["immediate_actions", "immediate"]),
        short_term: staged_actions(plan, &["short_term", "within_30_days"]),
        long_term: staged_actions(plan, &["long_term", "within_90_days"]),
    })
}

/// Staged action lists appear either directly on the plan or nested under
/// the original `compliance_timeline` object, and individual entries may be
/// bare strings or `{action, deadline}` objects.
fn staged_actions(plan: &Value, keys: &[&str]) -> Vec<FlexibleAction> {
    let timeline = plan.get("compliance_timeline").cloned().unwrap_or(Value::Null);

    for key in keys {
        for source in [plan, &timeline] {
            let entries = items(source, key);
            if !entries.is_empty() {
                return entries.iter().filter_map(FlexibleAction::from_value).collect();
            }
        }
    }

    Vec::new()
}

fn build_sustainability_card(payload: &Value) -> Option<SustainabilityCardView> {
    let sustainability = payload.get("sustainability")?;
    if object(payload, "sustainability").map_or(true, |map| map.is_empty()) {
        return None;
    }

    let paper_saved = text(sustainability, "paper_saved").or_else(|| {
        number_any(sustainability, &["paper_saved", "pages_saved"])
            .map(|pages| format!("{pages:.0} pages"))
    });

    Some(SustainabilityCardView {
        green_score: bounded_score(number(sustainability, "green_score")),
        grade: text(sustainability, "grade").unwrap_or_else(|| "\u{2014}".to_string()),
        paper_saved,
        co2_saved_kg: number(sustainability, "co2_saved_kg"),
        narrative: text(sustainability, "narrative"),
    })
}

fn build_schemes(payload: &Value) -> Vec<SchemeView> {
    items(payload, "matched_schemes")
        .iter()
        .filter_map(|entry| match entry {
            Value::String(_) => display_text(entry).map(|name| SchemeView {
                name,
                benefit: None,
                status: None,
            }),
            Value::Object(_) => {
                let name = text_any(entry, &["name", "scheme_name"])?;
                Some(SchemeView {
                    name,
                    benefit: text_any(entry, &["potential_benefit", "benefit"]),
                    status: text_any(entry, &["eligibility_status", "status"]),
                })
            }
            _ => None,
        })
        .collect()
}

fn build_market_overview(payload: &Value) -> Option<MarketOverviewView> {
    let overview = payload.get("market_overview")?;
    let view = MarketOverviewView {
        market_size: text_any(overview, &["market_size_inr", "market_size"]),
        growth_rate: text(overview, "growth_rate"),
        key_trends: string_list(overview, "key_trends"),
    };

    if view.is_empty() {
        None
    } else {
        Some(view)
    }
}

fn build_swot(payload: &Value) -> Option<SwotView> {
    let position = payload.get("competitive_position")?;
    let view = SwotView {
        strengths: string_list(position, "strengths"),
        weaknesses: string_list(position, "weaknesses"),
        opportunities: string_list(position, "opportunities"),
        threats: string_list(position, "threats"),
    };

    if view.is_empty() {
        None
    } else {
        Some(view)
    }
}

fn build_metric_bars(metrics: &Value, language: Language) -> Vec<MetricBarView> {
    const METRIC_KEYS: &[(&str, &str)] = &[
        ("barrier_to_entry", "barrier_to_entry"),
        ("price_sensitivity", "price_sensitivity"),
        ("digital_adoption", "digital_adoption"),
    ];

    let levels: Vec<Option<QualitativeLevel>> = METRIC_KEYS
        .iter()
        .map(|(field, _)| {
            text(metrics, field)
                .as_deref()
                .and_then(QualitativeLevel::from_raw)
        })
        .collect();

    let entries: Vec<BarEntry> = levels
        .iter()
        .map(|level| BarEntry::with_max(f64::from(qualitative_magnitude(*level)), 100.0))
        .collect();
    let fractions = bar_fractions(&entries);

    let mut bars = Vec::with_capacity(METRIC_KEYS.len());
    for (index, &(field, label_key)) in METRIC_KEYS.iter().enumerate() {
        let level = levels[index];
        bars.push(MetricBarView {
            key: field,
            label: translate_in(language, label_key).to_string(),
            level,
            level_label: level
                .map(|l| translate_in(language, l.label_key()).to_string())
                .unwrap_or_else(|| "\u{2014}".to_string()),
            magnitude: qualitative_magnitude(level),
            fraction: fractions[index],
        });
    }
    bars
}

/// Tallies priorities over every list entry, including ones that lack the
/// display text required to render a row of their own.
fn build_priority_chart(entries: &[Value], language: Language) -> PriorityChartView {
    let mut counts = PriorityCounts::default();
    for entry in entries {
        match Priority::from_raw(text(entry, "priority").as_deref()) {
            Priority::High => counts.high += 1,
            Priority::Medium => counts.medium += 1,
            Priority::Low => counts.low += 1,
        }
    }

    let total = counts.total();
    let bar_fractions = priority_bar_fractions(&[counts.high, counts.medium, counts.low], total);
    let wedges = pie_wedges(&[
        (
            translate_in(language, "priority_high").to_string(),
            counts.high as f64,
        ),
        (
            translate_in(language, "priority_medium").to_string(),
            counts.medium as f64,
        ),
        (
            translate_in(language, "priority_low").to_string(),
            counts.low as f64,
        ),
    ]);

    PriorityChartView {
        counts,
        total,
        bar_fractions,
        wedges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_payload_families_by_discriminant() {
        assert_eq!(
            detect_policy_shape(&json!({"risk_assessment": {}})),
            PolicyShape::Structured
        );
        assert_eq!(
            detect_policy_shape(&json!({"risk_score": {"overall_score": 61.0}})),
            PolicyShape::Scored
        );
        assert_eq!(
            detect_policy_shape(&json!({"sustainability": {"green_score": 80}})),
            PolicyShape::Scored
        );
        assert_eq!(detect_policy_shape(&json!({})), PolicyShape::Structured);
    }

    #[test]
    fn empty_payload_still_renders_score_cards() {
        let view = assemble_policy(&json!({}), Language::En);
        assert_eq!(view.score_cards.len(), 4);
        assert!(view.score_cards.iter().all(|card| card.score == 0));
        assert!(view.score_cards.iter().all(|card| card.grade == "\u{2014}"));
        assert!(view.metadata.is_none());
        assert!(view.applicability_detail.is_none());
        assert!(view.required_documents.is_empty());
        assert!(view.obligations.is_empty());
        assert!(view.risk.is_none());
        assert!(view.plan.is_none());
    }

    #[test]
    fn scored_family_populates_gauges() {
        let payload = json!({
            "risk_score": {"overall_score": 61.0, "overall_band": "MEDIUM"},
            "sustainability": {"green_score": 82.0, "grade": "A"},
            "profitability": {"roi_multiplier": 5.0},
            "ethics": {"overall_score": 90},
        });
        let view = assemble_policy(&payload, Language::En);
        let scores: Vec<u8> = view.score_cards.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![61, 82, 50, 90]);
        assert_eq!(view.score_cards[1].grade, "A");
        let risk = view.risk.expect("risk section present");
        assert_eq!(risk.level, Some(QualitativeLevel::Medium));
    }

    #[test]
    fn obligations_accept_both_family_keys_and_prose_severity() {
        let structured = assemble_policy(
            &json!({"obligations": [
                {"obligation": "Quarterly reports", "description": "Submit quarterly reports",
                 "severity_if_ignored": "HIGH - guarantee withdrawal", "deadline": "15 days"},
            ]}),
            Language::En,
        );
        assert_eq!(structured.obligations.len(), 1);
        assert_eq!(structured.obligations[0].severity, Severity::High);
        assert_eq!(structured.obligations[0].deadline.as_deref(), Some("15 days"));

        let scored = assemble_policy(
            &json!({"risk_score": {}, "compliance_obligations": ["File GST returns"]}),
            Language::En,
        );
        assert_eq!(scored.obligations.len(), 1);
        assert_eq!(scored.obligations[0].description, "File GST returns");
        assert_eq!(scored.obligations[0].severity, Severity::Unspecified);
    }

    #[test]
    fn penalties_without_violation_are_suppressed() {
        let view = assemble_policy(
            &json!({"penalties": [
                {"violation": "Late filing", "penalty_amount": "Varies"},
                {"penalty_amount": "Rs. 10,000"},
                {"violation": "unknown"},
            ]}),
            Language::En,
        );
        assert_eq!(view.penalties.len(), 1);
        assert_eq!(view.penalties[0].penalty_amount.as_deref(), Some("Varies"));
    }

    #[test]
    fn priority_tally_counts_entries_without_display_text() {
        let view = assemble_policy(
            &json!({"compliance_actions": [
                {"priority": "HIGH"},
                {"priority": "HIGH"},
                {"priority": "LOW"},
            ]}),
            Language::En,
        );
        // No renderable action rows, but the distribution chart still counts
        // every entry against the full list length.
        assert!(view.compliance_actions.is_empty());
        assert_eq!(view.priority_chart.counts.high, 2);
        assert_eq!(view.priority_chart.counts.medium, 0);
        assert_eq!(view.priority_chart.counts.low, 1);
        assert_eq!(view.priority_chart.total, 3);
    }

    #[test]
    fn compliance_actions_render_with_effort_and_labels() {
        let view = assemble_policy(
            &json!({"compliance_actions": [
                {"action": "Register on Udyam portal", "priority": "HIGH",
                 "estimated_effort": "2 hours"},
                {"action": "Set up GST filing calendar"},
            ]}),
            Language::En,
        );
        assert_eq!(view.compliance_actions.len(), 2);
        assert_eq!(view.compliance_actions[0].estimated_effort.as_deref(), Some("2 hours"));
        assert_eq!(view.compliance_actions[1].priority, Priority::Medium);
    }

    #[test]
    fn plan_normalizes_steps_and_staged_actions() {
        let payload = json!({"compliance_plan": {
            "applicability_status": "APPLICABLE",
            "summary_for_owner": "You qualify for CGTMSE coverage.",
            "action_plan": [
                {"step_number": 1, "action": "Verify Udyam registration",
                 "why_it_matters": "Mandatory requirement", "deadline": "Before applying"},
                {"why_it_matters": "no action field, dropped"},
            ],
            "immediate_actions": [
                "Login and verify status",
                {"action": "Gather bank statements", "deadline": "3 days"},
            ],
            "compliance_timeline": {
                "within_30_days": ["Complete project report"],
            },
        }});
        let view = assemble_policy(&payload, Language::En);
        let plan = view.plan.expect("plan present");
        assert_eq!(plan.applicability, ApplicabilityStatus::Applicable);
        assert_eq!(plan.action_plan.len(), 1);
        assert_eq!(plan.action_plan[0].step_number, Some(1));
        assert_eq!(plan.immediate_actions.len(), 2);
        assert_eq!(plan.immediate_actions[1].deadline.as_deref(), Some("3 days"));
        assert_eq!(plan.short_term.len(), 1);
        assert!(plan.long_term.is_empty());
    }

    #[test]
    fn applicability_string_surfaces_without_a_plan_object() {
        let payload = json!({
            "risk_score": {"overall_score": 61.0},
            "applicability": "APPLICABLE",
        });
        let view = assemble_policy(&payload, Language::En);
        let plan = view.plan.expect("status carries the section by itself");
        assert_eq!(plan.applicability, ApplicabilityStatus::Applicable);
        assert!(plan.action_plan.is_empty());
        assert!(plan.immediate_actions.is_empty());
        // The bare status string is not an applicability detail object.
        assert!(view.applicability_detail.is_none());
    }

    #[test]
    fn applicability_detail_and_required_documents_render() {
        let payload = json!({
            "applicability": {
                "who_is_affected": "Micro and small manufacturing enterprises",
                "conditions": [
                    "Must hold active Udyam registration",
                    {"type": "Investment Limit", "value": "Rs. 5 crore"},
                ],
                "exceptions": ["Trading-only businesses"],
            },
            "required_documents": ["Udyam certificate", "PAN card", "n/a"],
        });
        let view = assemble_policy(&payload, Language::En);
        let detail = view.applicability_detail.expect("detail present");
        assert_eq!(detail.who_is_affected.len(), 1);
        assert_eq!(detail.conditions.len(), 2);
        assert!(detail.conditions[1].contains("Investment Limit"));
        assert_eq!(detail.exceptions, vec!["Trading-only businesses"]);
        assert_eq!(view.required_documents, vec!["Udyam certificate", "PAN card"]);
        // An object under `applicability` carries no status string, and with
        // no plan either there is no plan section to show.
        assert!(view.plan.is_none());
    }

    #[test]
    fn auto_fetched_source_is_flagged() {
        let view = assemble_policy(&json!({"source": "auto-fetched"}), Language::En);
        assert!(view.auto_fetched);
        let view = assemble_policy(&json!({"source": "upload"}), Language::En);
        assert!(!view.auto_fetched);
    }

    #[test]
    fn competitor_report_tallies_priorities() {
        let payload = json!({"recommendations": [
            {"action": "Launch online store", "priority": "HIGH"},
            {"action": "Renegotiate supplier terms", "priority": "HIGH"},
            {"action": "Sponsor local event", "priority": "LOW"},
        ]});
        let view = assemble_competitor(&payload, Language::En);
        assert_eq!(view.priority_chart.counts.high, 2);
        assert_eq!(view.priority_chart.counts.medium, 0);
        assert_eq!(view.priority_chart.counts.low, 1);
        assert_eq!(view.priority_chart.total, 3);
        assert_eq!(view.priority_chart.bar_fractions[1], 0.0);
        assert_eq!(view.priority_chart.wedges.len(), 3);
    }

    #[test]
    fn empty_recommendation_list_yields_zero_counts_and_unit_denominator() {
        let view = assemble_competitor(&json!({}), Language::En);
        assert_eq!(view.priority_chart.counts.total(), 0);
        assert_eq!(view.priority_chart.bar_fractions, vec![0.0, 0.0, 0.0]);
        // All-zero tallies still draw equal, visible wedges.
        for wedge in &view.priority_chart.wedges {
            assert!((wedge.fraction - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn metric_bars_bridge_qualitative_levels() {
        let payload = json!({"market_metrics": {
            "your_estimated_position": "Top 30% in Pune",
            "barrier_to_entry": "LOW",
            "price_sensitivity": "HIGH",
            "digital_adoption": "whatever",
        }});
        let view = assemble_competitor(&payload, Language::En);
        assert_eq!(view.estimated_position.as_deref(), Some("Top 30% in Pune"));
        let magnitudes: Vec<u8> = view.metric_bars.iter().map(|b| b.magnitude).collect();
        assert_eq!(magnitudes, vec![30, 90, 50]);
        assert!(view.metric_bars[0].fraction < view.metric_bars[1].fraction);
    }

    #[test]
    fn assembly_is_deterministic_for_identical_input() {
        let payload = json!({
            "market_overview": {"market_size_inr": "Rs. 500 crore", "growth_rate": "12%",
                                "key_trends": ["D2C growth", "UPI adoption"]},
            "competitive_position": {"strengths": ["Local reputation"], "weaknesses": ["No web presence"],
                                     "opportunities": ["Export demand"], "threats": ["Chain stores"]},
            "key_competitors": [{"name": "MegaMart", "type": "indirect", "market_share": "15%"}],
            "recommendations": [{"action": "Open GeM seller account", "priority": "MEDIUM"}],
        });
        let first = assemble(&payload, ReportKind::Competitor, Language::En);
        let second = assemble(&payload, ReportKind::Competitor, Language::En);
        assert_eq!(first, second);
    }

    #[test]
    fn labels_localize_with_fallback() {
        let payload = json!({"recommendations": [{"action": "X", "priority": "HIGH"}]});
        let hindi = assemble_competitor(&payload, Language::Hi);
        assert_eq!(hindi.recommendations[0].priority_label, "\u{0909}\u{091a}\u{094d}\u{091a}");
        let unsupported = assemble_competitor(&payload, Language::resolve(Some("fr")));
        assert_eq!(unsupported.recommendations[0].priority_label, "High");
    }
}
