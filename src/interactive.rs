//! 対話式の症状選択
//!
//! 検索 → チェックリスト → 操作選択 を繰り返す。

use crate::error::{PredictorError, Result};
use crate::render::{print_notices, render_catalog, render_prediction, render_selection};
use dialoguer::{Input, MultiSelect, Select};
use symptom_common::{Backend, Session};

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 選択中の症状で予測
    Predict,
    /// 検索し直して追加選択
    Search,
    /// 選択中の症状を1つ外す
    Remove,
    /// 選択と予測結果をクリア
    Clear,
    /// 終了
    Quit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Predict,
        Action::Search,
        Action::Remove,
        Action::Clear,
        Action::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Predict => "Predict Disease",
            Action::Search => "Search again",
            Action::Remove => "Remove a symptom",
            Action::Clear => "Clear All",
            Action::Quit => "Quit",
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> PredictorError {
    PredictorError::Prompt(e.to_string())
}

/// 対話式で症状を選んで予測
pub async fn run<B: Backend>(session: &mut Session, backend: &B) -> Result<()> {
    println!("操作: 検索語を入力 → [Space]で選択 [Enter]で確定\n");

    loop {
        let query: String = Input::new()
            .with_prompt("Search symptoms (Enter for all)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        session.set_query(query);

        let visible = session.visible_symptoms();
        if visible.is_empty() {
            println!("{}\n", render_catalog(session));
            continue;
        }

        let labels: Vec<&str> = visible.iter().map(|s| s.label.as_str()).collect();
        let defaults: Vec<bool> = visible.iter().map(|s| session.is_selected(&s.id)).collect();
        let chosen = MultiSelect::new()
            .with_prompt("Select Your Symptoms")
            .items(&labels)
            .defaults(&defaults)
            .interact()
            .map_err(prompt_error)?;

        // 表示中の項目のみ反映（検索で隠れた選択は維持）
        for (index, symptom) in visible.iter().enumerate() {
            session.toggle(&symptom.id, chosen.contains(&index));
        }
        println!("{}\n", render_selection(session));

        match prompt_action()? {
            Action::Predict => {
                println!("Analyzing your symptoms...");
                let outcome = session.predict(backend).await;
                print_notices(session);
                if outcome.is_ok() {
                    if let Some(prediction) = session.prediction() {
                        println!("\n{}\n", render_prediction(prediction));
                    }
                }
            }
            Action::Search => {}
            Action::Remove => prompt_remove(session)?,
            Action::Clear => {
                session.clear();
                println!("✔ 選択をクリアしました\n");
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let index = Select::new()
        .with_prompt("Next")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(Action::ALL[index])
}

fn prompt_remove(session: &mut Session) -> Result<()> {
    let selected = session.selected();
    if selected.is_empty() {
        println!("No symptoms selected yet.\n");
        return Ok(());
    }

    let labels: Vec<&str> = selected.iter().map(|s| s.label.as_str()).collect();
    let index = Select::new()
        .with_prompt("Remove")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    session.remove(&selected[index].id);
    println!("{}\n", render_selection(session));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels_unique() {
        let mut labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
    }

    #[test]
    fn test_predict_is_default_action() {
        assert_eq!(Action::ALL[0], Action::Predict);
    }
}
