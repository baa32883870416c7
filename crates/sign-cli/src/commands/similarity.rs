//! `compare`, `rank`.

use serde_json::json;
use sign_core::SignError;
use sign_similarity::{compare_signs, rank_against};

use crate::app::App;
use crate::output::emit;

pub fn compare(app: &App, left: &str, right: &str) -> Result<(), SignError> {
    let comparison = compare_signs(&app.store, left, right)?;

    let s = comparison.similarity;
    emit(
        app,
        || {
            format!(
                "Dice coefficient of \"{left}\" and \"{right}\": {}\nJaccard index: {}",
                s.dice, s.jaccard
            )
        },
        json!(comparison),
    );
    Ok(())
}

pub fn rank(app: &App, name: &str) -> Result<(), SignError> {
    let matches = rank_against(&app.store, name)?;
    emit(
        app,
        || {
            if matches.is_empty() {
                format!("No other sign can be compared with \"{name}\"")
            } else {
                matches
                    .iter()
                    .map(|m| {
                        format!(
                            "{}\tdice={:.4}\tjaccard={:.4}",
                            m.sign, m.similarity.dice, m.similarity.jaccard
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        },
        json!({ "sign": name, "matches": matches }),
    );
    Ok(())
}
