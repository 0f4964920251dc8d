use crate::types::report::EvaluationReport;

pub fn to_markdown(reports: &[EvaluationReport]) -> String {
    let mut output = String::new();
    output.push_str("# Evaluation Report\n\n");
    if reports.is_empty() {
        output.push_str("- no methodology documents found\n");
        return output;
    }

    for report in reports {
        output.push_str(&format!("## {} ({})\n\n", report.title, report.kind));
        output.push_str(&format!("- file: {}\n", report.path));
        output.push_str(&format!(
            "- score: {:.2} ({})\n",
            report.score,
            if report.passed { "pass" } else { "below passing" }
        ));
        output.push_str(&format!(
            "- completion: {} ({}/{} evaluated, {}%)\n\n",
            report.completion,
            report.progress.evaluated,
            report.progress.total,
            report.progress.percent()
        ));

        output.push_str("### Issues\n\n");
        if report.issues.is_empty() {
            output.push_str("- none\n\n");
            continue;
        }
        for issue in &report.issues {
            let level = if issue.blocking { "blocking" } else { "warning" };
            match &issue.location {
                Some(location) => output.push_str(&format!(
                    "- [{level}] {} at {location}: {}\n",
                    issue.id, issue.message
                )),
                None => output.push_str(&format!("- [{level}] {}: {}\n", issue.id, issue.message)),
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Completion, Progress};
    use crate::types::methodology::MethodologyKind;
    use crate::types::report::Issue;

    #[test]
    fn markdown_report_contains_sections() {
        let report = EvaluationReport {
            path: "essay.json".to_string(),
            title: "Essay".to_string(),
            kind: MethodologyKind::Rubric,
            score: 68.0,
            completion: Completion::Incomplete,
            progress: Progress {
                evaluated: 1,
                total: 2,
            },
            passed: true,
            issues: vec![Issue::blocking(
                "rubric.criterion.no_levels",
                "Criterion needs at least one level",
                Some("criteria[1]".to_string()),
            )],
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
        };

        let rendered = to_markdown(&[report]);
        assert!(rendered.contains("# Evaluation Report"));
        assert!(rendered.contains("## Essay (rubric)"));
        assert!(rendered.contains("- score: 68.00 (pass)"));
        assert!(rendered.contains("incomplete (1/2 evaluated, 50%)"));
        assert!(rendered.contains("[blocking] rubric.criterion.no_levels at criteria[1]"));
    }

    #[test]
    fn markdown_report_handles_no_documents() {
        assert!(to_markdown(&[]).contains("no methodology documents found"));
    }
}
