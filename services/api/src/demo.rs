use clap::Args;
use pair_insight::error::AppError;
use pair_insight::i18n::{translate_in, Language};
use pair_insight::report::assemble_policy;
use serde_json::{json, Value};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Display language code (en, hi, ta, te)
    #[arg(long)]
    pub(crate) language: Option<String>,
    /// Emit the assembled view model as JSON instead of a formatted report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let language = Language::resolve(args.language.as_deref());
    let payload = sample_policy_payload();
    let view = assemble_policy(&payload, language);

    if args.json {
        let rendered = serde_json::to_string_pretty(&view)
            .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Policy analysis demo");
    if let Some(metadata) = &view.metadata {
        if let Some(name) = &metadata.policy_name {
            println!("Policy: {name}");
        }
        if let Some(authority) = &metadata.issuing_authority {
            println!("Issued by: {authority}");
        }
    }
    if view.auto_fetched {
        println!("({})", translate_in(language, "auto_fetched"));
    }

    println!("\nScores");
    for card in &view.score_cards {
        println!(
            "  {:<28} {:>3}/100  (gauge offset {:.1} of {:.1})",
            card.label, card.score, card.gauge.dash_offset, card.gauge.circumference
        );
    }

    if let Some(risk) = &view.risk {
        println!("\n{}: {}", translate_in(language, "risk_level"), risk.level_label);
        if let Some(reasoning) = &risk.reasoning {
            println!("  {reasoning}");
        }
        for top in &risk.top_risks {
            println!("  - {} [{}]", top.name, top.band_label);
        }
    }

    if !view.obligations.is_empty() {
        println!("\n{}", translate_in(language, "obligations"));
        for obligation in &view.obligations {
            match &obligation.deadline {
                Some(deadline) => println!(
                    "  - {} ({}, {})",
                    obligation.description, obligation.severity_label, deadline
                ),
                None => println!("  - {} ({})", obligation.description, obligation.severity_label),
            }
        }
    }

    if !view.penalties.is_empty() {
        println!("\n{}", translate_in(language, "penalties"));
        for penalty in &view.penalties {
            match &penalty.penalty_amount {
                Some(amount) => println!("  - {}: {}", penalty.violation, amount),
                None => println!("  - {}", penalty.violation),
            }
        }
    }

    if let Some(plan) = &view.plan {
        println!(
            "\n{} ({})",
            translate_in(language, "compliance_plan"),
            plan.applicability_label
        );
        if let Some(summary) = &plan.summary_for_owner {
            println!("  {summary}");
        }
        for step in &plan.action_plan {
            match step.step_number {
                Some(number) => println!("  {number}. {}", step.action),
                None => println!("  - {}", step.action),
            }
        }
    }

    if !view.required_documents.is_empty() {
        println!("\n{}", translate_in(language, "required_documents"));
        for document in &view.required_documents {
            println!("  - {document}");
        }
    }

    if !view.schemes.is_empty() {
        println!("\n{}", translate_in(language, "matched_schemes"));
        for scheme in &view.schemes {
            println!("  - {}", scheme.name);
        }
    }

    Ok(())
}

/// Deterministic sample payload covering both scoring metrics and the
/// structured plan sections, mirroring what the analysis backend produces
/// for the CGTMSE walkthrough.
pub(crate) fn sample_policy_payload() -> Value {
    json!({
        "source": "auto-fetched",
        "policy_metadata": {
            "policy_name": "CGTMSE Revised Guidelines 2024",
            "issuing_authority": "Ministry of MSME, Government of India",
            "effective_date": "1st July 2024",
            "geographical_scope": "Pan-India",
            "policy_type": "Credit Guarantee Scheme"
        },
        "risk_score": {
            "overall_score": 61.0,
            "overall_band": "MEDIUM",
            "reasoning": "Moderate compliance load; quarterly reporting discipline is the main exposure.",
            "risk_factors": ["Quarterly reporting", "Udyam renewal"],
            "top_risks": [
                {"name": "Quarterly Report Submission", "band": "HIGH",
                 "hint": "Set calendar reminders for the 15th of Apr, Jul, Oct, Jan.",
                 "days_remaining": 12},
                {"name": "Udyam Registration Renewal", "band": "MEDIUM",
                 "hint": "Verify registration status before applying."}
            ]
        },
        "sustainability": {
            "green_score": 82.0,
            "grade": "A",
            "paper_saved": "540 pages",
            "co2_saved_kg": 12.4,
            "narrative": "Digital filings avoid most paper handling for this scheme."
        },
        "profitability": {"roi_multiplier": 5.0},
        "ethics": {"overall_score": 90},
        "obligations": [
            {"description": "Submit quarterly performance reports to lending institution",
             "severity_if_ignored": "HIGH - May lead to withdrawal of guarantee",
             "deadline": "Within 15 days of quarter end"},
            {"description": "Maintain active Udyam registration",
             "severity_if_ignored": "HIGH - Ineligibility for scheme",
             "deadline": "Annually"},
            {"description": "Maintain proper books of accounts",
             "severity_if_ignored": "MEDIUM - May affect future applications"}
        ],
        "penalties": [
            {"violation": "Non-compliance with reporting", "penalty_amount": "Up to Rs. 10,000",
             "other_consequences": "Blacklisting, withdrawal of guarantee cover"},
            {"violation": "Misrepresentation of facts", "penalty_amount": "Varies",
             "other_consequences": "Legal action, permanent blacklisting"}
        ],
        "compliance_plan": {
            "applicability_status": "APPLICABLE",
            "summary_for_owner": "As a women-owned micro manufacturing enterprise with Udyam registration, you qualify for CGTMSE with 85% guarantee coverage.",
            "action_plan": [
                {"step_number": 1, "action": "Verify your Udyam Registration is active",
                 "why_it_matters": "Mandatory requirement", "deadline": "Before applying for loan"},
                {"step_number": 2, "action": "Prepare a detailed Project Report",
                 "deadline": "Within 1 week"},
                {"step_number": 3, "action": "Collect last 6 months bank statements",
                 "deadline": "Within 3 days"}
            ],
            "immediate_actions": [
                "Login to udyamregistration.gov.in and verify status",
                {"action": "Start gathering bank statements", "deadline": "Within 3 days"}
            ],
            "compliance_timeline": {
                "within_30_days": ["Complete project report", "Submit application at nearest branch"],
                "within_90_days": ["Complete bank due diligence", "Set up reporting calendar"]
            }
        },
        "matched_schemes": [
            {"name": "CGTMSE", "eligibility_status": "ELIGIBLE",
             "potential_benefit": "85% guarantee coverage on loans up to Rs. 5 crore"},
            {"name": "MUDRA - Tarun", "eligibility_status": "ELIGIBLE",
             "potential_benefit": "Loan up to Rs. 10 lakhs without collateral"}
        ]
    })
}
