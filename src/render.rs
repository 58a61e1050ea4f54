//! 端末向けの表示整形
//!
//! すべて文字列を返し、出力は呼び出し側で行う。

use symptom_common::{
    format_percent, ConfidenceLevel, Notice, NoticeKind, OcrResult, Prediction, Session, DISCLAIMER,
    NO_SYMPTOMS_DETECTED,
};

/// 信頼度バーの幅（文字数）
const BAR_WIDTH: usize = 30;

pub fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✔",
        NoticeKind::Info => "ℹ",
        NoticeKind::Warning => "⚠",
        NoticeKind::Danger => "✖",
    }
}

pub fn render_notice(notice: &Notice) -> String {
    format!("{} {}", notice_icon(notice.kind), notice.message)
}

/// 溜まった通知を古い順に出力
pub fn print_notices(session: &mut Session) {
    for notice in session.drain_notices() {
        println!("{}", render_notice(&notice));
    }
}

/// 検索結果の一覧（選択中は `[x]`）
pub fn render_catalog(session: &Session) -> String {
    let visible = session.visible_symptoms();
    if visible.is_empty() {
        return format!("該当する症状がありません: \"{}\"", session.query().trim());
    }

    let id_width = visible.iter().map(|s| s.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for symptom in &visible {
        let mark = if session.is_selected(&symptom.id) { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{} {:<width$}  {}\n",
            mark,
            symptom.id,
            symptom.label,
            width = id_width
        ));
    }
    out.push_str(&format!("{} / {} 件", visible.len(), session.catalog().len()));
    out
}

pub fn render_selection(session: &Session) -> String {
    let selected = session.selected();
    if selected.is_empty() {
        return "No symptoms selected yet.".to_string();
    }
    let labels: Vec<String> = selected.into_iter().map(|s| s.label).collect();
    format!("Selected: {}", labels.join(", "))
}

pub fn confidence_bar(confidence: f64) -> String {
    let filled = ((confidence.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn level_label(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => "高",
        ConfidenceLevel::Medium => "中",
        ConfidenceLevel::Low => "低",
    }
}

pub fn render_prediction(prediction: &Prediction) -> String {
    let mut out = String::new();
    out.push_str("Prediction Results\n");
    out.push_str(&format!("  Primary Prediction: {}\n", prediction.disease));
    if let Some(description) = &prediction.description {
        out.push_str(&format!("  {}\n", description));
    }
    out.push_str(&format!(
        "  {} {} Confidence ({})\n",
        confidence_bar(prediction.confidence),
        prediction.confidence_label(),
        level_label(prediction.level())
    ));

    out.push_str("\n  Other Possibilities:\n");
    if prediction.alternatives.is_empty() {
        out.push_str("    No other likely conditions.\n");
    }
    for (index, alt) in prediction.alternatives.iter().enumerate() {
        out.push_str(&format!(
            "    {}. {} ({})\n",
            index + 1,
            alt.disease,
            format_percent(alt.probability)
        ));
    }

    out.push_str(&format!("\n  Disclaimer: {}", DISCLAIMER));
    out
}

pub fn render_ocr(result: &OcrResult) -> String {
    let mut out = String::new();
    out.push_str("Extracted Text\n");
    out.push_str("----------------------------------------\n");
    out.push_str(result.extracted_text.trim_end());
    out.push_str("\n----------------------------------------\n");
    out.push_str("Detected Symptoms: ");
    if result.has_symptoms() {
        let labels: Vec<String> = result.detected().into_iter().map(|s| s.label).collect();
        out.push_str(&labels.join(", "));
    } else {
        out.push_str(NO_SYMPTOMS_DETECTED);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_common::RankedPrediction;

    #[test]
    fn test_confidence_bar() {
        assert_eq!(confidence_bar(0.0).chars().filter(|&c| c == '█').count(), 0);
        assert_eq!(confidence_bar(50.0).chars().filter(|&c| c == '█').count(), 15);
        assert_eq!(confidence_bar(150.0).chars().filter(|&c| c == '█').count(), BAR_WIDTH);
        assert_eq!(confidence_bar(72.0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_render_prediction() {
        let prediction = Prediction {
            disease: "Flu".into(),
            confidence: 72.0,
            description: None,
            alternatives: vec![RankedPrediction {
                disease: "Cold".into(),
                probability: 18.5,
                description: None,
            }],
        };
        let text = render_prediction(&prediction);
        assert!(text.contains("Primary Prediction: Flu"));
        assert!(text.contains("72% Confidence"));
        assert!(text.contains("1. Cold (18.5%)"));
        assert!(text.contains(DISCLAIMER));
    }

    #[test]
    fn test_render_ocr_without_symptoms() {
        let result = OcrResult {
            extracted_text: "nothing here".into(),
            found_symptoms: vec![],
        };
        let text = render_ocr(&result);
        assert!(text.contains("nothing here"));
        assert!(text.contains(NO_SYMPTOMS_DETECTED));
    }

    #[test]
    fn test_render_selection() {
        let mut session = Session::new();
        assert_eq!(render_selection(&session), "No symptoms selected yet.");
        session.toggle("high_fever", true);
        assert_eq!(render_selection(&session), "Selected: High Fever");
    }
}
