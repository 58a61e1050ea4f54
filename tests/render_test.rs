//! 端末表示テスト
//!
//! セッションの状態から表示文字列への整形を検証

use symptom_common::{ApiReply, CatalogResponse, Session};
use symptom_predictor::render::{render_catalog, render_notice, render_selection};

fn session_with_catalog(ids: &[&str]) -> Session {
    let mut session = Session::new();
    session.load_catalog(Ok(ApiReply::ok(CatalogResponse {
        symptoms: ids.iter().map(|s| s.to_string()).collect(),
    })));
    session
}

/// 検索語で絞り込み、選択中は [x]
#[test]
fn test_render_catalog_filtered() {
    let mut session = session_with_catalog(&["high_fever", "headache", "mild_fever"]);
    session.toggle("mild_fever", true);
    session.set_query("FEV");

    let text = render_catalog(&session);
    assert!(text.contains("[ ] high_fever"));
    assert!(text.contains("[x] mild_fever"));
    assert!(text.contains("Mild Fever"));
    assert!(!text.contains("headache"));
    assert!(text.ends_with("2 / 3 件"));
}

/// 該当なし
#[test]
fn test_render_catalog_no_match() {
    let mut session = session_with_catalog(&["headache"]);
    session.set_query("zzz");

    assert!(render_catalog(&session).contains("該当する症状がありません"));
}

/// 取得失敗時はフォールバック一覧
#[test]
fn test_render_catalog_fallback() {
    let mut session = Session::new();
    session.load_catalog(Ok(ApiReply::new(500, None)));

    let text = render_catalog(&session);
    assert!(text.contains("Continuous Sneezing"));
    assert!(text.ends_with("10 / 10 件"));
}

/// 予測前の空選択は警告として表示
#[test]
fn test_render_empty_selection_warning() {
    let mut session = Session::new();
    assert!(session.begin_predict().is_err());

    let notices = session.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(render_notice(&notices[0]), "⚠ Please select at least one symptom.");
    assert_eq!(render_selection(&session), "No symptoms selected yet.");
}
